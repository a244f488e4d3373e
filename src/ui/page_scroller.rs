// SPDX-License-Identifier: MPL-2.0
//! Programmatic page scrolling to the two fixed page anchors.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section;
use crate::ui::state::{ScrollMetrics, SmoothScroll, Target};
use crate::ui::styles::Action;
use iced::widget::{text, Column, Row};
use iced::{Element, Task};
use std::time::{Duration, Instant};

/// Widget id of the scrollable wrapping the whole page.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Fixed scroll targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top of the page container.
    Top,
    /// The scroll-control section, last on the page, so its offset is the
    /// end of the page content.
    ScrollControl,
}

impl Anchor {
    #[must_use]
    pub fn target(self) -> Target {
        match self {
            Anchor::Top => Target::Start,
            Anchor::ScrollControl => Target::End,
        }
    }
}

/// Contextual data needed to render the scroll-control section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ScrollToTop,
    ScrollToBottom,
    /// Viewport reported by the page scrollable.
    Scrolled(ScrollMetrics),
}

#[derive(Debug, Clone)]
pub struct State {
    scroll: SmoothScroll,
}

impl State {
    #[must_use]
    pub fn new(scroll_duration: Duration) -> Self {
        Self {
            scroll: SmoothScroll::new(SCROLLABLE_ID, scroll_duration),
        }
    }

    /// Starts a smooth scroll to `anchor`. Returns `false` when the page is
    /// already there or already heading there.
    pub fn scroll_to(&mut self, anchor: Anchor) -> bool {
        let started = self.scroll.scroll_to(anchor.target());
        if !started {
            log::debug!("page already at or heading to {:?}", anchor);
        }
        started
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrollToTop => {
                self.scroll_to(Anchor::Top);
            }
            Message::ScrollToBottom => {
                self.scroll_to(Anchor::ScrollControl);
            }
            Message::Scrolled(metrics) => self.scroll.on_scrolled(metrics),
        }
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Position as a fraction of the page's scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> f32 {
        self.scroll.relative_offset()
    }

    /// Advances the page animation by one frame.
    pub fn tick<T: Send + 'static>(&mut self, now: Instant) -> Task<T> {
        self.scroll.tick_task(now)
    }

    /// The scroll-control section itself.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(section::action_button(
                ctx.i18n.tr("scroll-top-button"),
                Action::Add,
                Some(Message::ScrollToTop),
            ))
            .push(section::action_button(
                ctx.i18n.tr("scroll-bottom-button"),
                Action::Jump,
                Some(Message::ScrollToBottom),
            ));

        let content = Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("scroll-description")).size(typography::BODY))
            .push(controls);

        section::card(ctx.i18n.tr("scroll-title"), content)
    }
}
