use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const API_BASE: &str = "https://developer-lostark.game.onstove.com";

/// Header the web front-end uses to forward the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Bytes left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL path segment.
///
/// Reserved characters such as `/`, `?`, `#` and spaces are escaped, as are
/// non-ASCII characters (one `%XX` per UTF-8 byte), so the upstream sees the
/// literal value after decoding.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT_ENCODE_SET).to_string()
}

/// Path of the sibling lookup endpoint for a character name.
pub fn siblings_path(character_name: &str) -> String {
    format!(
        "/characters/{}/siblings",
        encode_path_segment(character_name)
    )
}
