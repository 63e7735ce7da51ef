//! Reserved marker tokens.
//!
//! Sentences are padded with [`START_TOKEN`] on the left (once per n-gram
//! order) and [`END_TOKEN`] on the right before n-gram windows are extracted.
//! Words outside the closed vocabulary are replaced with [`UNKNOWN_TOKEN`].

/// Left padding marker.
pub const START_TOKEN: &str = "<s>";

/// End-of-sentence marker.
pub const END_TOKEN: &str = "<e>";

/// Out-of-vocabulary marker.
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// Whether `token` is one of the reserved markers.
pub fn is_marker(token: &str) -> bool {
    matches!(token, START_TOKEN | END_TOKEN | UNKNOWN_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_distinct() {
        assert_ne!(START_TOKEN, END_TOKEN);
        assert_ne!(END_TOKEN, UNKNOWN_TOKEN);
        assert!(is_marker("<s>"));
        assert!(is_marker("<unk>"));
        assert!(!is_marker("s"));
    }
}
