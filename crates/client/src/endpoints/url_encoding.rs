//! URL encoding utilities for constructing safe API paths.
//!
//! Index patterns go into the request path, so they are percent-encoded. The
//! wildcard `*`, the list separator `,` and the cluster separator `:` keep
//! their meaning for Elasticsearch and stay literal.
//!
//! # Example
//!
//! ```
//! use kbn_client::endpoints::url_encoding::{encode_index_pattern, encode_path_segment};
//!
//! assert_eq!(encode_index_pattern("remote:logs-*,metrics"), "remote:logs-*,metrics");
//! assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']')
    .add(b'*')
    .add(b':');

/// Encode set for index patterns: as above, but `*`, `,` and `:` pass through.
pub const INDEX_PATTERN_ENCODE_SET: &AsciiSet = &PATH_SEGMENT_ENCODE_SET
    .remove(b'*')
    .remove(b',')
    .remove(b':');

/// Percent-encode an opaque path segment such as a saved object id.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode an index pattern for use as the index path segment.
pub fn encode_index_pattern(pattern: &str) -> String {
    utf8_percent_encode(pattern, INDEX_PATTERN_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_pattern_keeps_wildcards_and_separators() {
        assert_eq!(encode_index_pattern("logs-*"), "logs-*");
        assert_eq!(encode_index_pattern("a,b"), "a,b");
        assert_eq!(encode_index_pattern("cluster:logs-*"), "cluster:logs-*");
    }

    #[test]
    fn test_index_pattern_encodes_path_breakers() {
        assert_eq!(encode_index_pattern("a/b"), "a%2Fb");
        assert_eq!(encode_index_pattern("a?b"), "a%3Fb");
        assert_eq!(encode_index_pattern("a#b"), "a%23b");
        assert_eq!(encode_index_pattern("a b"), "a%20b");
    }

    #[test]
    fn test_path_segment_encodes_everything_reserved() {
        assert_eq!(encode_path_segment("a*b"), "a%2Ab");
        assert_eq!(encode_path_segment("a:b"), "a%3Ab");
        assert_eq!(encode_path_segment("f7a1-22"), "f7a1-22");
    }

    #[test]
    fn test_non_ascii_is_encoded() {
        assert_eq!(encode_index_pattern("日志"), "%E6%97%A5%E5%BF%97");
    }
}
