// SPDX-License-Identifier: MPL-2.0
//! `ref_playground` is a single-window Iced demo of references to rendered
//! widgets.
//!
//! It shows a counter that remembers its value from the previous update
//! cycle, a video card driven through a decoder handle, an embedded player
//! descriptor, a chat log that follows its newest entry, and page-level
//! smooth scrolling. Localization uses Fluent and preferences live in a
//! `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/ref_playground/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod reactive;
pub mod ui;
pub mod video_player;
