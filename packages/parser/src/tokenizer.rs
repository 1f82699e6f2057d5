//! Character-classification tokenizer for the propfile grammar.
//!
//! Four fixed character classes drive the entire grammar: spaces,
//! line breaks (`\r`, `\n` and `;`, which doubles as a statement
//! separator), the `#` comment marker, and the `=`/`:` key/value
//! delimiters. The classes are disjoint. Parsing is a single forward
//! pass with a one-character buffer and no further lookahead.

use std::collections::HashMap;
use std::str::Chars;

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

const fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n' | ';')
}

const fn is_comment(c: char) -> bool {
    c == '#'
}

const fn is_delimiter(c: char) -> bool {
    matches!(c, '=' | ':')
}

/// Parse propfile source into a key/value table.
///
/// Each entry is a `name = value` (or `name: value`) line; `;` ends an
/// entry just like a physical line break, and `#` comments out the rest
/// of its line. Names and values are trimmed of surrounding spaces and
/// tabs. When a key repeats, the last occurrence wins.
///
/// Malformed lines never abort the pass: an entry whose name or value
/// is empty after trimming is dropped and parsing continues.
pub fn parse(source: &str) -> HashMap<String, String> {
    let mut table = HashMap::new();
    let mut scanner = Scanner::new(source);

    // One iteration per entry. The comment check happens only here, at
    // the top of the entry, before blank separators are skipped.
    loop {
        scanner.advance();
        if scanner.current.is_none() {
            break;
        }
        scanner.skip_comments();
        scanner.skip_line_breaks();
        let name = scanner.read_name();
        scanner.skip_delimiters();
        let value = scanner.read_value();
        if !name.is_empty() && !value.is_empty() {
            table.insert(name, value);
        }
    }

    table
}

/// Single-pass scanner over the source, holding the one-character
/// buffer (`None` once the stream is exhausted).
struct Scanner<'src> {
    chars: Chars<'src>,
    current: Option<char>,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars(),
            current: None,
        }
    }

    fn advance(&mut self) {
        self.current = self.chars.next();
    }

    /// Skip comment lines: jump past the rest of the line, then past
    /// any blank lines, and re-check in case another comment follows.
    fn skip_comments(&mut self) {
        while self.current.is_some_and(is_comment) {
            self.skip_line();
            self.skip_line_breaks();
        }
    }

    /// Skip up to (and stop at) the next line break.
    fn skip_line(&mut self) {
        while self.current.is_some_and(|c| !is_line_break(c)) {
            self.advance();
        }
    }

    fn skip_line_breaks(&mut self) {
        self.skip_class(is_line_break);
    }

    fn skip_spaces(&mut self) {
        self.skip_class(is_space);
    }

    fn skip_delimiters(&mut self) {
        self.skip_class(is_delimiter);
    }

    fn skip_class(&mut self, class: fn(char) -> bool) {
        while self.current.is_some_and(class) {
            self.advance();
        }
    }

    /// Accumulate a name: leading spaces skipped, stops at a delimiter
    /// or line break, trailing spaces trimmed.
    fn read_name(&mut self) -> String {
        self.read_until(|c| is_delimiter(c) || is_line_break(c))
    }

    /// Accumulate a value: leading spaces skipped, stops at a line
    /// break only (delimiters are ordinary value characters), trailing
    /// spaces trimmed.
    fn read_value(&mut self) -> String {
        self.read_until(is_line_break)
    }

    fn read_until(&mut self, stop: fn(char) -> bool) -> String {
        let mut buf = String::new();
        self.skip_spaces();
        while let Some(c) = self.current {
            if stop(c) {
                break;
            }
            buf.push(c);
            self.advance();
        }
        crop(&mut buf);
        buf
    }
}

/// Trim trailing spaces and tabs in place.
fn crop(buf: &mut String) {
    let end = buf.trim_end_matches([' ', '\t']).len();
    buf.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(table: &HashMap<String, String>, key: &str) -> Option<String> {
        table.get(key).cloned()
    }

    #[test]
    fn test_basic_pair() {
        let table = parse("host=localhost");
        assert_eq!(entry(&table, "host"), Some("localhost".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_surrounding_spaces_are_trimmed() {
        let table = parse("  host \t=   localhost  \n\tport = 8080\t\n");
        assert_eq!(entry(&table, "host"), Some("localhost".to_string()));
        assert_eq!(entry(&table, "port"), Some("8080".to_string()));
    }

    #[test]
    fn test_comment_lines_are_excluded() {
        let table = parse("# a comment\nhost=localhost\n# another=pair\n");
        assert_eq!(entry(&table, "host"), Some("localhost".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_consecutive_comments_and_blank_lines() {
        let table = parse("# one\n# two\n\n\n# three\nkey=value\n");
        assert_eq!(entry(&table, "key"), Some("value".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_semicolon_separates_entries_on_one_line() {
        let table = parse("a=1;b=2");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(entry(&table, "b"), Some("2".to_string()));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let table = parse("x=1\nx=2");
        assert_eq!(entry(&table, "x"), Some("2".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let table = parse("=value\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_value_is_dropped() {
        let table = parse("key=\nkey2 =   \n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_mixed_delimiter_runs() {
        let table = parse("a==1\nb : 2\nc=:=3\n");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(entry(&table, "b"), Some("2".to_string()));
        assert_eq!(entry(&table, "c"), Some("3".to_string()));
    }

    #[test]
    fn test_delimiters_inside_value_are_kept() {
        // Only the leading run of delimiters is consumed.
        let table = parse("url=http://example.com/a=b");
        assert_eq!(entry(&table, "url"), Some("http://example.com/a=b".to_string()));
    }

    #[test]
    fn test_spaces_inside_name_and_value_are_kept() {
        let table = parse("key with spaces = hello world \n");
        assert_eq!(
            entry(&table, "key with spaces"),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("a=1\r\nb=2\r\n");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(entry(&table, "b"), Some("2".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
        assert!(parse("# only a comment").is_empty());
    }

    #[test]
    fn test_comment_at_end_of_stream_without_newline() {
        let table = parse("a=1\n# trailing");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_line_without_delimiter_is_dropped() {
        let table = parse("just some words\na=1\n");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(table.len(), 1);
    }

    // The comment check runs only at the top of each entry, before
    // blank separators and leading spaces are consumed. A `#` that is
    // not the first character of the entry is an ordinary name
    // character; these two tests pin that down.

    #[test]
    fn test_indented_comment_is_read_as_pair() {
        let table = parse("  #c=x\n");
        assert_eq!(entry(&table, "#c"), Some("x".to_string()));
    }

    #[test]
    fn test_comment_after_leading_blank_line_is_read_as_pair() {
        let table = parse("\n#c=x\n");
        assert_eq!(entry(&table, "#c"), Some("x".to_string()));
    }

    #[test]
    fn test_comment_between_pairs_is_excluded() {
        // Here the entry starts right at `#`, so the comment path runs.
        let table = parse("a=1\n#c=x\nb=2\n");
        assert_eq!(entry(&table, "a"), Some("1".to_string()));
        assert_eq!(entry(&table, "b"), Some("2".to_string()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_example_end_to_end() {
        let source = "# config\nhost = localhost\nport:8080;debug=true\n";
        let table = parse(source);
        assert_eq!(entry(&table, "host"), Some("localhost".to_string()));
        assert_eq!(entry(&table, "port"), Some("8080".to_string()));
        assert_eq!(entry(&table, "debug"), Some("true".to_string()));
        assert_eq!(table.len(), 3);
    }
}
