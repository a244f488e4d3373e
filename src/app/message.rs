// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{chat, media_controller, page_scroller, tracker};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Tracker(tracker::Message),
    Media(media_controller::Message),
    Chat(chat::Message),
    Page(page_scroller::Message),
    /// Delivered after the view reflecting a state write has been rebuilt.
    /// Runs the post-render reactions.
    AfterRender,
    /// Window frame while a smooth scroll is running.
    AnimationFrame(Instant),
    ToggleTheme,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `REF_PLAYGROUND_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional video URL or path replacing the configured media source.
    pub video: Option<String>,
}
