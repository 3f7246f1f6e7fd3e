//! Conversions between UTF-8 and wide (UTF-16) strings for OS boundaries.

/// Encode a string as UTF-16 code units.
///
/// # Example
///
/// ```
/// use twig::string_utils::{from_wide, to_wide};
///
/// let wide = to_wide("dir/ñame.txt");
/// assert_eq!(from_wide(&wide), "dir/ñame.txt");
/// ```
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Decode UTF-16 code units, replacing unpaired surrogates with U+FFFD.
pub fn from_wide(wide: &[u16]) -> String {
    String::from_utf16_lossy(wide)
}
