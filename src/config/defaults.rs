// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Media**: Default video source and autoplay behavior
//! - **Scroll**: Smooth-scroll animation duration and bounds

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Network-addressable clip played by the media card.
pub const DEFAULT_MEDIA_SOURCE: &str = "https://www.w3schools.com/html/mov_bbb.mp4";

/// Whether the media element starts playing as soon as it is available.
pub const DEFAULT_MEDIA_AUTOPLAY: bool = false;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Default smooth-scroll animation length (milliseconds).
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 400;

/// Shortest accepted smooth-scroll animation (milliseconds).
pub const MIN_SCROLL_DURATION_MS: u64 = 50;

/// Longest accepted smooth-scroll animation (milliseconds).
pub const MAX_SCROLL_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCROLL_DURATION_MS > 0);
    assert!(MAX_SCROLL_DURATION_MS >= MIN_SCROLL_DURATION_MS);
    assert!(DEFAULT_SCROLL_DURATION_MS >= MIN_SCROLL_DURATION_MS);
    assert!(DEFAULT_SCROLL_DURATION_MS <= MAX_SCROLL_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_defaults_are_valid() {
        assert_eq!(DEFAULT_SCROLL_DURATION_MS, 400);
        assert!(DEFAULT_SCROLL_DURATION_MS >= MIN_SCROLL_DURATION_MS);
        assert!(DEFAULT_SCROLL_DURATION_MS <= MAX_SCROLL_DURATION_MS);
    }

    #[test]
    fn media_source_is_a_url() {
        assert!(DEFAULT_MEDIA_SOURCE.starts_with("https://"));
        assert!(DEFAULT_MEDIA_SOURCE.ends_with(".mp4"));
    }
}
