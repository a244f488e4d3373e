// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers that write a watched state slice return a follow-up
//! [`Message::AfterRender`]. The runtime delivers it after the view for the
//! current batch of messages has been rebuilt, which is when post-render
//! reactions are allowed to run.

use super::{persistence, App, Message};
use crate::ui::{chat, media_controller, page_scroller, tracker};
use iced::Task;
use std::time::Instant;

/// Which reactions fired during one post-render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    /// The tracker published its previous value.
    pub tracker_synced: bool,
    /// The chat log started following its newest entry.
    pub chat_follow: bool,
}

impl Reactions {
    #[must_use]
    pub fn any(self) -> bool {
        self.tracker_synced || self.chat_follow
    }
}

fn schedule_reactions() -> Task<Message> {
    Task::done(Message::AfterRender)
}

pub(super) fn handle_tracker_message(app: &mut App, message: tracker::Message) -> Task<Message> {
    match app.tracker.update(message) {
        tracker::Event::CountChanged => schedule_reactions(),
    }
}

pub(super) fn handle_media_message(
    app: &mut App,
    message: media_controller::Message,
) -> Task<Message> {
    app.media.update(message);
    Task::none()
}

pub(super) fn handle_chat_message(app: &mut App, message: chat::Message) -> Task<Message> {
    match app.chat.update(message) {
        chat::Event::LogChanged => schedule_reactions(),
        chat::Event::None => Task::none(),
    }
}

pub(super) fn handle_page_message(app: &mut App, message: page_scroller::Message) -> Task<Message> {
    app.page.update(message);
    Task::none()
}

pub(super) fn handle_animation_frame(app: &mut App, now: Instant) -> Task<Message> {
    Task::batch([
        app.chat.tick(now).map(Message::Chat),
        app.page.tick(now),
    ])
}

pub(super) fn handle_theme_toggle(app: &mut App) -> Task<Message> {
    app.theme_mode = app.theme_mode.toggled();
    persistence::persist_theme(app.theme_mode, app.config_dir.clone());
    Task::none()
}

pub(super) fn run_reactions(app: &mut App) -> Reactions {
    Reactions {
        tracker_synced: app.tracker.after_render(),
        chat_follow: app.chat.after_render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, Config};
    use crate::i18n::fluent::I18n;
    use crate::ui::theming::ThemeMode;

    fn app() -> App {
        let mut config = Config::default();
        config.media.source_url = None;
        App::with_config(config, I18n::default())
    }

    #[test]
    fn counter_updates_only_sync_the_tracker() {
        let mut app = app();
        let _ = app.update(Message::Tracker(tracker::Message::Increment));

        let reactions = app.after_render();
        assert!(reactions.tracker_synced);
        assert!(!reactions.chat_follow);
        assert!(!app.chat().is_scrolling());
    }

    #[test]
    fn chat_appends_only_trigger_the_follow_scroll() {
        let mut app = app();
        let _ = app.update(Message::Chat(chat::Message::AddMessage));

        let reactions = app.after_render();
        assert!(reactions.chat_follow);
        assert!(!reactions.tracker_synced);
        assert!(app.chat().is_scrolling());
    }

    #[test]
    fn reactions_fire_once_per_change() {
        let mut app = app();
        let _ = app.update(Message::Chat(chat::Message::AddMessage));
        assert!(app.after_render().any());
        assert!(!app.after_render().any());
    }

    #[test]
    fn page_scrolls_never_trigger_reactions() {
        let mut app = app();
        let _ = app.update(Message::Page(page_scroller::Message::ScrollToBottom));
        assert!(app.page().is_scrolling());
        assert!(!app.after_render().any());
    }

    #[test]
    fn animation_frames_settle_both_scrollables() {
        let mut app = app();
        let _ = app.update(Message::Chat(chat::Message::AddMessage));
        app.after_render();
        let _ = app.update(Message::Page(page_scroller::Message::ScrollToBottom));

        let start = Instant::now();
        let _ = app.update(Message::AnimationFrame(start));
        let _ = app.update(Message::AnimationFrame(
            start + std::time::Duration::from_secs(5),
        ));

        assert!(!app.chat().is_scrolling());
        assert!(!app.page().is_scrolling());
    }

    #[test]
    fn theme_toggle_flips_and_saves_mode() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut app = app().with_config_dir(temp_dir.path().to_path_buf());
        app.theme_mode = ThemeMode::Dark;
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode(), ThemeMode::Light);

        let (saved, _) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn media_commands_without_source_are_ignored() {
        let mut app = app();
        assert!(app.playback_session().is_none());
        let _ = app.update(Message::Media(media_controller::Message::Restart));
        assert!(!app.media().has_handle());
    }
}
