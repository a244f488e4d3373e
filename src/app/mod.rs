// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page sections.
//!
//! The `App` struct owns one state per section plus localization and
//! preferences. Sections are independent; the only cross-cutting concern is
//! the post-render reaction pass, which the update loop schedules after any
//! message that wrote a watched state slice.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::Reactions;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{chat, media_controller, page_scroller, tracker};
use crate::video_player::{MediaSource, PlaybackSession};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Directory preferences are saved to; `None` resolves it as usual.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// i18n key of a startup warning shown above the sections.
    config_warning: Option<String>,
    tracker: tracker::State,
    media: media_controller::State,
    chat: chat::State,
    page: page_scroller::State,
    playback: Option<PlaybackSession>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("count", &self.tracker.count())
            .field("chat_entries", &self.chat.entries().len())
            .field("playback", &self.playback)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_media_override(config, i18n, flags.video.as_deref());
        app.config_warning = config_warning;
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(config: Config, i18n: I18n) -> Self {
        Self::with_media_override(config, i18n, None)
    }

    /// Like [`App::with_config`], but `video` replaces the configured media
    /// source for this run. The override is never saved.
    pub fn with_media_override(config: Config, i18n: I18n, video: Option<&str>) -> Self {
        let scroll_duration = config.scroll.animation_duration();
        let playback = [video, config.media.source_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|source| !source.is_empty())
            .map(|source| PlaybackSession {
                source: MediaSource::parse(source),
            });
        let autoplay = config
            .media
            .autoplay
            .unwrap_or(config::DEFAULT_MEDIA_AUTOPLAY);

        Self {
            i18n,
            config_dir: None,
            theme_mode: config.general.theme_mode,
            config_warning: None,
            tracker: tracker::State::default(),
            media: media_controller::State::new(playback.is_some(), autoplay),
            chat: chat::State::new(scroll_duration),
            page: page_scroller::State::new(scroll_duration),
            playback,
        }
    }

    /// Saves preferences under `dir` instead of the resolved config directory.
    #[must_use]
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn tracker(&self) -> &tracker::State {
        &self.tracker
    }

    #[must_use]
    pub fn media(&self) -> &media_controller::State {
        &self.media
    }

    #[must_use]
    pub fn chat(&self) -> &chat::State {
        &self.chat
    }

    #[must_use]
    pub fn page(&self) -> &page_scroller::State {
        &self.page
    }

    #[must_use]
    pub fn playback_session(&self) -> Option<&PlaybackSession> {
        self.playback.as_ref()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_animation_subscription(
                self.chat.is_scrolling() || self.page.is_scrolling(),
            ),
            subscription::create_playback_subscription(self.playback.clone()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tracker(message) => update::handle_tracker_message(self, message),
            Message::Media(message) => update::handle_media_message(self, message),
            Message::Chat(message) => update::handle_chat_message(self, message),
            Message::Page(message) => update::handle_page_message(self, message),
            Message::AfterRender => {
                let reactions = self.after_render();
                log::trace!("post-render reactions: {:?}", reactions);
                Task::none()
            }
            Message::AnimationFrame(now) => update::handle_animation_frame(self, now),
            Message::ToggleTheme => update::handle_theme_toggle(self),
        }
    }

    /// Runs every post-render reaction whose state slice changed.
    pub fn after_render(&mut self) -> Reactions {
        update::run_reactions(self)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            config_warning: self.config_warning.as_deref(),
            tracker: &self.tracker,
            media: &self.media,
            chat: &self.chat,
            page: &self.page,
        })
    }
}
