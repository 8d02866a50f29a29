//! URL-fragment persistence abstraction.
//!
//! The fragment identifier is the only state a deck keeps outside its
//! own view: it is read once when the deck starts and rewritten on
//! every page change, so a reload or a shared link restores the page.
//! The engine never watches for external fragment edits mid-session.

use core::str;

use heapless::String;

/// Longest fragment text the engine will load or store.
pub const FRAGMENT_BYTES: usize = 12;

/// Owned fragment text as exchanged with a [`FragmentStore`].
pub type FragmentText = String<FRAGMENT_BYTES>;

/// Abstract fragment-identifier backend.
pub trait FragmentStore {
    type Error;

    /// Current fragment text, without the leading `#`, if any is set.
    fn load(&mut self) -> Result<Option<FragmentText>, Self::Error>;

    /// Replace the fragment with `fragment`.
    fn save(&mut self, fragment: &str) -> Result<(), Self::Error>;
}

/// Store for hosts without an addressable location; loads nothing and
/// discards writes.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullFragment;

impl NullFragment {
    pub const fn new() -> Self {
        Self
    }
}

impl FragmentStore for NullFragment {
    type Error = core::convert::Infallible;

    fn load(&mut self) -> Result<Option<FragmentText>, Self::Error> {
        Ok(None)
    }

    fn save(&mut self, _fragment: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Parse a fragment as a 1-based page number.
///
/// Accepts an optional leading `#` and, like an address bar, tolerates
/// trailing junk after the digits. Zero, signs, and non-numeric text
/// yield `None`; range checking against the deck is the caller's job.
pub fn parse_page(raw: &str) -> Option<u16> {
    let trimmed = raw.strip_prefix('#').unwrap_or(raw);
    let digits_len = trimmed
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let digits = &trimmed[..digits_len];
    if digits.is_empty() {
        return None;
    }

    match digits.parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(page) => Some(page),
    }
}

/// Canonical fragment text for a page.
pub fn format_page(page: u16) -> FragmentText {
    let mut buf = [0u8; 5];
    let len = crate::labels::write_decimal(page, &mut buf, 0);

    let mut out = FragmentText::new();
    let _ = out.push_str(str::from_utf8(&buf[..len]).unwrap_or(""));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_hash_prefixed_pages() {
        assert_eq!(parse_page("3"), Some(3));
        assert_eq!(parse_page("#3"), Some(3));
        assert_eq!(parse_page("#42"), Some(42));
    }

    #[test]
    fn tolerates_trailing_junk() {
        assert_eq!(parse_page("3abc"), Some(3));
        assert_eq!(parse_page("#7/notes"), Some(7));
    }

    #[test]
    fn rejects_non_pages() {
        assert_eq!(parse_page(""), None);
        assert_eq!(parse_page("#"), None);
        assert_eq!(parse_page("abc"), None);
        assert_eq!(parse_page("0"), None);
        assert_eq!(parse_page("-3"), None);
        assert_eq!(parse_page(" 3"), None);
        // Wider than u16, same outcome as any other out-of-range value.
        assert_eq!(parse_page("999999"), None);
    }

    #[test]
    fn formats_canonical_decimal() {
        assert_eq!(format_page(1).as_str(), "1");
        assert_eq!(format_page(42).as_str(), "42");
        assert_eq!(format_page(u16::MAX).as_str(), "65535");
    }

    #[test]
    fn round_trips_through_parse() {
        assert_eq!(parse_page(&format_page(9)), Some(9));
    }
}
