//! Lenient scanner for `"key":digits` occurrences.
//!
//! Recognizes exactly the lexical shape
//!
//! ```text
//! pair := '"' word-chars '"' ':' digits
//! ```
//!
//! anywhere in the input, where word-chars are ASCII `[0-9A-Za-z_]` and
//! digits are ASCII `[0-9]`. Braces, commas and overall structure are not
//! checked. Matches are leftmost, non-overlapping and take every digit
//! that follows the colon. No whitespace is allowed inside a pair, and
//! string, float, boolean, null, array and object values never match.

use super::schema::KeyValue;

/// Iterator over every pair in a text, in source order
///
/// **Public** - lower-level entry point used by `extract_pairs`
pub struct PairScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PairScanner<'a> {
    /// Create a scanner positioned at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte at `at`, if any
    fn byte(&self, at: usize) -> Option<u8> {
        self.input.as_bytes().get(at).copied()
    }

    /// End of the run starting at `start` whose bytes satisfy `accept`
    fn run_end(&self, start: usize, accept: fn(u8) -> bool) -> usize {
        let mut end = start;
        while self.byte(end).is_some_and(accept) {
            end += 1;
        }
        end
    }

    /// Try to match a pair whose opening quote sits at `start`
    ///
    /// Returns `(key range, value range)` on success.
    fn match_at(&self, start: usize) -> Option<((usize, usize), (usize, usize))> {
        if self.byte(start) != Some(b'"') {
            return None;
        }

        let key_start = start + 1;
        let key_end = self.run_end(key_start, is_word_byte);
        if key_end == key_start {
            return None;
        }

        if self.byte(key_end) != Some(b'"') || self.byte(key_end + 1) != Some(b':') {
            return None;
        }

        let value_start = key_end + 2;
        let value_end = self.run_end(value_start, |b| b.is_ascii_digit());
        if value_end == value_start {
            return None;
        }

        Some(((key_start, key_end), (value_start, value_end)))
    }
}

impl Iterator for PairScanner<'_> {
    type Item = KeyValue;

    fn next(&mut self) -> Option<KeyValue> {
        while self.pos < self.input.len() {
            // Ranges only ever split on ASCII bytes, so slicing is char-safe
            if let Some(((ks, ke), (vs, ve))) = self.match_at(self.pos) {
                self.pos = ve;
                return Some(KeyValue::new(&self.input[ks..ke], &self.input[vs..ve]));
            }
            self.pos += 1;
        }
        None
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<(String, String)> {
        PairScanner::new(input)
            .map(|kv| (kv.key, kv.value))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scans_in_source_order() {
        assert_eq!(
            scan(r#"{"b":1,"a":22,"b":3}"#),
            pairs(&[("b", "1"), ("a", "22"), ("b", "3")])
        );
    }

    #[test]
    fn test_skips_unsupported_values() {
        let input = r#"{"s":"x","f":1.5,"t":true,"n":null,"arr":[1],"obj":{"k":2}}"#;
        // "f":1 matches as a prefix of the float literal
        assert_eq!(scan(input), pairs(&[("f", "1"), ("k", "2")]));
    }

    #[test]
    fn test_rejects_whitespace_and_non_word_keys() {
        assert!(scan(r#"{"a": 1, "b" :2, "c-d":3, "":4, "e":-5}"#).is_empty());
    }

    #[test]
    fn test_tolerates_malformed_text() {
        assert_eq!(
            scan(r#"garbage "x_1":9 more"y":0"#),
            pairs(&[("x_1", "9"), ("y", "0")])
        );
    }

    #[test]
    fn test_restarts_after_failed_quote() {
        // the first quote opens an empty key, the second starts a real pair
        assert_eq!(scan(r#"""a":1"#), pairs(&[("a", "1")]));
        // a value string ending where a key begins
        assert_eq!(scan(r#""v"a":1"#), pairs(&[("a", "1")]));
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        assert_eq!(scan(r#"{"é":1,"ok":2}"#), pairs(&[("ok", "2")]));
    }
}
