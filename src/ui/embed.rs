// SPDX-License-Identifier: MPL-2.0
//! Embedded external player section.
//!
//! The third-party player is opaque: no messages are exchanged with it. The
//! section renders its fixed descriptor (content source, permission policy,
//! referrer policy) inside a placeholder frame.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

/// Player capabilities granted to the embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Accelerometer,
    Autoplay,
    ClipboardWrite,
    EncryptedMedia,
    Gyroscope,
    PictureInPicture,
    WebShare,
}

impl Permission {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Accelerometer => "accelerometer",
            Permission::Autoplay => "autoplay",
            Permission::ClipboardWrite => "clipboard-write",
            Permission::EncryptedMedia => "encrypted-media",
            Permission::Gyroscope => "gyroscope",
            Permission::PictureInPicture => "picture-in-picture",
            Permission::WebShare => "web-share",
        }
    }
}

/// Referrer sent by the embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferrerPolicy {
    /// Full referrer to same-origin destinations, only the origin otherwise.
    StrictOriginWhenCrossOrigin,
}

impl ReferrerPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReferrerPolicy::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
        }
    }
}

/// Fixed configuration of the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedDescriptor {
    pub title: &'static str,
    pub host: &'static str,
    pub video_id: &'static str,
    pub share_id: &'static str,
    pub width: u32,
    pub height: u32,
    pub permissions: &'static [Permission],
    pub referrer_policy: ReferrerPolicy,
    pub allow_fullscreen: bool,
}

pub const PLAYER: EmbedDescriptor = EmbedDescriptor {
    title: "YouTube video player",
    host: "https://www.youtube.com/embed",
    video_id: "d2FizMoU2eM",
    share_id: "bQxmnO1TSAwMFYsr",
    width: 560,
    height: 315,
    permissions: &[
        Permission::Accelerometer,
        Permission::Autoplay,
        Permission::ClipboardWrite,
        Permission::EncryptedMedia,
        Permission::Gyroscope,
        Permission::PictureInPicture,
        Permission::WebShare,
    ],
    referrer_policy: ReferrerPolicy::StrictOriginWhenCrossOrigin,
    allow_fullscreen: true,
};

impl EmbedDescriptor {
    /// Frame source URL.
    #[must_use]
    pub fn src(&self) -> String {
        format!("{}/{}?si={}", self.host, self.video_id, self.share_id)
    }

    /// Permission policy string, `; `-separated.
    #[must_use]
    pub fn allow_attribute(&self) -> String {
        self.permissions
            .iter()
            .map(|permission| permission.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Contextual data needed to render the embed section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the embed section. It emits no messages.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let frame = Container::new(text(PLAYER.title).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::EMBED_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::media_surface);

    let fullscreen = if PLAYER.allow_fullscreen { "✓" } else { "✗" };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(frame)
        .push(attribute(ctx.i18n.tr("embed-source"), PLAYER.src()))
        .push(attribute(
            ctx.i18n.tr("embed-permissions"),
            PLAYER.allow_attribute(),
        ))
        .push(attribute(
            ctx.i18n.tr("embed-referrer"),
            PLAYER.referrer_policy.as_str().to_string(),
        ))
        .push(attribute(
            ctx.i18n.tr("embed-fullscreen"),
            fullscreen.to_string(),
        ))
        .push(text(ctx.i18n.tr("embed-note")).size(typography::CAPTION));

    section::card(ctx.i18n.tr("embed-title"), content)
}

fn attribute<'a, M: 'a>(label: String, value: String) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::SM)
        .push(text(format!("{label}:")).size(typography::CAPTION))
        .push(text(value).size(typography::CAPTION))
        .into()
}
