// SPDX-License-Identifier: MPL-2.0
//! Media controller section.
//!
//! Play, pause and restart are fire-and-forget commands to the decoder. The
//! controller keeps only a handle to it, obtained once the source is open;
//! without a handle every command is a no-op.

use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::section;
use crate::ui::styles::Action;
use crate::ui::widgets::VideoSurface;
use crate::video_player::{DecoderCommand, MediaHandle, PlaybackMessage};
use iced::widget::{Column, Row};
use iced::Element;

/// Contextual data needed to render the media card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Play,
    Pause,
    Restart,
    Playback(PlaybackMessage),
}

/// Availability of the media resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    /// No source configured.
    NoSource,
    /// The source is being opened.
    Loading,
    /// Commands reach the decoder.
    Ready,
    /// The source failed; commands are ignored.
    Unavailable(VideoError),
}

#[derive(Debug, Clone)]
pub struct State {
    handle: Option<MediaHandle>,
    surface: VideoSurface,
    availability: Availability,
    autoplay: bool,
}

impl State {
    #[must_use]
    pub fn new(has_source: bool, autoplay: bool) -> Self {
        Self {
            handle: None,
            surface: VideoSurface::new(),
            availability: if has_source {
                Availability::Loading
            } else {
                Availability::NoSource
            },
            autoplay,
        }
    }

    #[must_use]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    #[must_use]
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Resumes playback from the current position.
    pub fn play(&mut self) {
        self.send(DecoderCommand::Play);
    }

    /// Halts playback, keeping the position.
    pub fn pause(&mut self) {
        self.send(DecoderCommand::Pause);
    }

    /// Rewinds to the start and plays, whatever the prior state.
    pub fn restart(&mut self) {
        self.send(DecoderCommand::Seek { target_secs: 0.0 });
        self.send(DecoderCommand::Play);
    }

    fn send(&mut self, command: DecoderCommand) {
        let Some(handle) = &self.handle else {
            log::debug!("media not available, ignoring {:?}", command);
            return;
        };
        if let Err(e) = handle.send(command) {
            log::debug!("dropping media handle: {}", e);
            self.handle = None;
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Play => self.play(),
            Message::Pause => self.pause(),
            Message::Restart => self.restart(),
            Message::Playback(event) => self.on_playback(event),
        }
    }

    fn on_playback(&mut self, event: PlaybackMessage) {
        match event {
            PlaybackMessage::Started(handle) => {
                self.handle = Some(handle);
                self.availability = Availability::Ready;
                if self.autoplay {
                    self.play();
                }
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                ..
            } => self.surface.set_frame(rgba_data, width, height),
            PlaybackMessage::Buffering | PlaybackMessage::EndOfStream => {}
            PlaybackMessage::Error(message) => {
                log::warn!("media playback error: {}", message);
            }
            PlaybackMessage::Unavailable(error) => {
                log::warn!("media unavailable: {}", error);
                self.handle = None;
                self.surface.clear();
                self.availability = Availability::Unavailable(error);
            }
        }
    }

    fn placeholder(&self, i18n: &I18n) -> String {
        match &self.availability {
            Availability::Loading | Availability::Ready => i18n.tr("media-loading"),
            Availability::NoSource => i18n.tr("media-unavailable"),
            Availability::Unavailable(error) => format!(
                "{}: {}",
                i18n.tr("media-unavailable"),
                i18n.tr(error.i18n_key())
            ),
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(section::action_button(
                ctx.i18n.tr("media-play"),
                Action::Add,
                Some(Message::Play),
            ))
            .push(section::action_button(
                ctx.i18n.tr("media-pause"),
                Action::Stop,
                Some(Message::Pause),
            ))
            .push(section::action_button(
                ctx.i18n.tr("media-restart"),
                Action::Jump,
                Some(Message::Restart),
            ));

        let content = Column::new()
            .spacing(spacing::SM)
            .push(self.surface.view(self.placeholder(ctx.i18n)))
            .push(controls);

        section::card(ctx.i18n.tr("media-title"), content)
    }
}
