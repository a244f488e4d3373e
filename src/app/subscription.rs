// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Window frames are only requested while a smooth scroll is running, and
//! the playback stream only exists while a media source is configured.

use super::Message;
use crate::ui::media_controller;
use crate::video_player::{self, PlaybackSession};
use iced::{window, Subscription};

/// Frame ticks for the smooth-scroll animations.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

/// Decoder events for the media card.
pub fn create_playback_subscription(session: Option<PlaybackSession>) -> Subscription<Message> {
    match session {
        Some(session) => video_player::media_playback(session)
            .map(|message| Message::Media(media_controller::Message::Playback(message))),
        None => Subscription::none(),
    }
}
