//! Quote-aware field splitting for one logical line.

/// Field delimiter used by the survey export.
pub const DEFAULT_DELIMITER: char = ';';

/// Splits a line into trimmed fields, honoring double-quote quoting.
///
/// - Outside quotes, the delimiter ends a field and `"` opens a quoted run.
/// - Inside quotes, `""` is a literal quote and a lone `"` closes the run.
///   Delimiters and newlines inside a quoted run are kept verbatim.
///
/// An unterminated quote is not an error: the rest of the input becomes the
/// last field.
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => {
                in_quotes = true;
            }
            c if c == delimiter && !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    // The last field has no trailing delimiter
    fields.push(current.trim().to_string());
    fields
}

/// Tokenizes with the default `;` delimiter.
pub fn tokenize_default(line: &str) -> Vec<String> {
    tokenize_line(line, DEFAULT_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize_default("a;b;c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_escaped_quotes() {
        assert_eq!(tokenize_default("a;\"b\"\"c\";d"), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_tokenize_delimiter_in_quotes() {
        assert_eq!(tokenize_default("\"x;y\";z"), vec!["x;y", "z"]);
    }

    #[test]
    fn test_tokenize_trims_fields() {
        assert_eq!(tokenize_default("  a  ;  b  "), vec!["a", "b"]);
        assert_eq!(tokenize_default("\"  padded  \";x"), vec!["padded", "x"]);
    }

    #[test]
    fn test_tokenize_empty_fields() {
        assert_eq!(tokenize_default(""), vec![""]);
        assert_eq!(tokenize_default(";;"), vec!["", "", ""]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(
            tokenize_default("1;\"open ended; still open"),
            vec!["1", "open ended; still open"]
        );
    }

    #[test]
    fn test_tokenize_keeps_embedded_newline() {
        assert_eq!(
            tokenize_default("9;\"first\nsecond\""),
            vec!["9", "first\nsecond"]
        );
    }

    #[test]
    fn test_tokenize_custom_delimiter() {
        assert_eq!(tokenize_line("a,\"b,c\";d", ','), vec!["a", "b,c;d"]);
    }
}
