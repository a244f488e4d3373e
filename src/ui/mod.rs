// SPDX-License-Identifier: MPL-2.0
//! User interface sections and shared presentation code.
//!
//! Each section follows the Elm-style "state down, messages up" pattern and
//! owns its own transient state. Sections never talk to each other.
//!
//! # Sections
//!
//! - [`tracker`] - Counter with its value from the previous update cycle
//! - [`media_controller`] - Play, pause and restart of the media card
//! - [`embed`] - Static descriptor of the embedded third-party player
//! - [`chat`] - Append-only log that follows its newest entry
//! - [`page_scroller`] - Smooth scrolling to the page anchors
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Smooth-scroll animation state
//! - [`widgets`] - Video frame surface
//! - [`section`] - Card frame and action buttons
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing and sizes
//! - [`theming`] - Light/Dark/System theme mode

pub mod chat;
pub mod design_tokens;
pub mod embed;
pub mod media_controller;
pub mod page_scroller;
pub mod section;
pub mod state;
pub mod styles;
pub mod theming;
pub mod tracker;
pub mod widgets;
