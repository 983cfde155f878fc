//! Leading-indentation arithmetic.
//!
//! A space contributes 1 column and a tab advances to the next multiple of 4
//! columns (tab stop of 4). The scanner uses the 4-column threshold to detect
//! indented code and strips exactly 4 columns when collecting its content.

/// Number of leading whitespace columns before the first non-whitespace
/// character.
pub fn leading_columns(line: &str) -> usize {
    let mut columns = 0;
    for ch in line.chars() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += 4 - columns % 4,
            _ => break,
        }
    }
    columns
}

/// Strip the first 4 columns' worth of leading whitespace.
///
/// Only meaningful when `leading_columns(line) >= 4`. A tab always lands on
/// a multiple of 4, so the 4-column boundary falls exactly between
/// characters.
pub fn strip_indent(line: &str) -> &str {
    let mut columns = 0;
    for (offset, ch) in line.char_indices() {
        if columns >= 4 {
            return &line[offset..];
        }
        match ch {
            ' ' => columns += 1,
            '\t' => columns += 4 - columns % 4,
            _ => return &line[offset..],
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_only() {
        assert_eq!(leading_columns("    a\ta"), 4);
        assert_eq!(leading_columns("  - foo"), 2);
        assert_eq!(leading_columns("no indent"), 0);
    }

    #[test]
    fn test_tab_advances_to_tab_stop() {
        assert_eq!(leading_columns("\tfoo\tbaz\t\tbim"), 4);
        assert_eq!(leading_columns("  \tfoo\tbaz\t\tbim"), 4);
        assert_eq!(leading_columns("\t\tbar"), 8);
        assert_eq!(leading_columns("   \tx"), 4);
    }

    #[test]
    fn test_stops_at_non_whitespace() {
        assert_eq!(leading_columns(">\t\tfoo"), 0);
    }

    #[test]
    fn test_blank_line_counts_everything() {
        assert_eq!(leading_columns("      "), 6);
        assert_eq!(leading_columns("\t"), 4);
        assert_eq!(leading_columns(""), 0);
    }

    #[test]
    fn test_strip_four_spaces() {
        assert_eq!(strip_indent("    code"), "code");
        assert_eq!(strip_indent("        code"), "    code");
        assert_eq!(strip_indent("     code"), " code");
    }

    #[test]
    fn test_strip_tab_forms() {
        assert_eq!(strip_indent("\tcode"), "code");
        assert_eq!(strip_indent(" \tcode"), "code");
        assert_eq!(strip_indent("   \tcode"), "code");
        assert_eq!(strip_indent("  \t\tcode"), "\tcode");
    }

    #[test]
    fn test_strip_blank_remainder() {
        assert_eq!(strip_indent("    "), "");
        assert_eq!(strip_indent("      "), "  ");
        assert_eq!(strip_indent("\t"), "");
    }
}
