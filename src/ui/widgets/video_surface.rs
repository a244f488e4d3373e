// SPDX-License-Identifier: MPL-2.0
//! Surface showing the latest decoded video frame.
//!
//! Frames arrive as shared RGBA buffers and are turned into an image handle
//! on arrival. Until the first frame, a text placeholder fills the same area
//! so the card does not jump when the video starts.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{image, text, Container};
use iced::{ContentFit, Element, Length};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct VideoSurface {
    frame: Option<image::Handle>,
    width: u32,
    height: u32,
}

impl VideoSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed frame.
    ///
    /// Takes ownership of the buffer when no one else holds it, otherwise
    /// copies it.
    pub fn set_frame(&mut self, rgba_data: Arc<Vec<u8>>, width: u32, height: u32) {
        let data = Arc::try_unwrap(rgba_data).unwrap_or_else(|arc| (*arc).clone());
        self.frame = Some(image::Handle::from_rgba(width, height, data));
        self.width = width;
        self.height = height;
    }

    /// Drops the current frame.
    pub fn clear(&mut self) {
        self.frame = None;
        self.width = 0;
        self.height = 0;
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Renders the frame, or `placeholder` when there is none.
    pub fn view<'a, Message: 'a>(&self, placeholder: String) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.frame {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text(placeholder).size(typography::BODY).into(),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MEDIA_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::media_surface)
            .into()
    }
}
