//! Comma-delimited line splitting with quoted segments.

/// Trims a field value.
fn normalize_field(value: &str) -> String {
    value.trim().to_string()
}

/// Parses one line into fields, honouring double-quoted segments.
///
/// A `"` toggles the quoted state and is dropped from the output. There is
/// no escape for a quote inside a quoted segment: `""` simply toggles twice.
/// Commas split fields only outside quotes. Every field is trimmed, including
/// whitespace that was inside quotes. The last field is always emitted, so an
/// empty line yields one empty field. Never fails.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(normalize_field(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(normalize_field(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_line_simple() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_line_quoted_comma() {
        assert_eq!(
            parse_line("\"hello, world\",b,c"),
            vec!["hello, world", "b", "c"]
        );
    }

    #[test]
    fn test_parse_line_doubled_quotes_only_toggle() {
        // No escape support: the inner pair toggles out and back in.
        assert_eq!(
            parse_line("\"he said \"\"hi, there\"\"\",b"),
            vec!["he said hi, there", "b"]
        );
    }

    #[test]
    fn test_parse_line_trims_inside_quotes() {
        assert_eq!(parse_line("\"  padded  \",  b  "), vec!["padded", "b"]);
    }

    #[test]
    fn test_parse_line_empty_line() {
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn test_parse_line_trailing_delimiter() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_parse_line_unterminated_quote_swallows_rest() {
        assert_eq!(parse_line("a,\"b,c,d"), vec!["a", "b,c,d"]);
    }

    fn unquoted_commas(line: &str) -> usize {
        let mut in_quotes = false;
        let mut count = 0;
        for c in line.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => count += 1,
                _ => {}
            }
        }
        count
    }

    proptest! {
        #[test]
        fn field_count_is_unquoted_commas_plus_one(line in "[a-z ,\"]{0,40}") {
            prop_assert_eq!(parse_line(&line).len(), unquoted_commas(&line) + 1);
        }

        #[test]
        fn fields_never_carry_quotes_or_edge_whitespace(line in "[a-z ,\"\t]{0,40}") {
            for field in parse_line(&line) {
                prop_assert!(!field.contains('"'));
                prop_assert_eq!(field.trim(), field.as_str());
            }
        }
    }
}
