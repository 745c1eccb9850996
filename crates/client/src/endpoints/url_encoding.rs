//! URL encoding for object names in API paths.
//!
//! Object names end up as a single path segment after `/config/{type}/`.
//! Everything except unreserved characters and `/` is percent-encoded, so
//! composite service names keep their `;` separator encoded as `%3B` while
//! descriptions containing slashes (e.g. `Disk /var`) reach the server as
//! written.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in an object name path segment.
const OBJECT_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode an object name for use in a URL path.
///
/// # Examples
///
/// ```
/// use op5_client::endpoints::url_encoding::encode_object_name;
///
/// assert_eq!(encode_object_name("web01"), "web01");
/// assert_eq!(encode_object_name("web01;HTTP check"), "web01%3BHTTP%20check");
/// ```
pub fn encode_object_name(name: &str) -> String {
    utf8_percent_encode(name, OBJECT_NAME_ENCODE_SET).to_string()
}

/// Characters left as-is in a segment that must stay a single segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-');

/// Percent-encode a single path segment that must not contain `/` or `.` traversal.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
