// SPDX-License-Identifier: MPL-2.0
//! Previous-value tracker section.
//!
//! Holds a counter and the value the counter had one update cycle ago. The
//! lagging value is written by a post-render reaction bound to the counter,
//! so it only moves after the view showing the new count has been built.

use crate::i18n::fluent::I18n;
use crate::reactive::{Reaction, Watched};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section;
use crate::ui::styles::Action;
use iced::alignment::Vertical;
use iced::widget::{text, Column, Row};
use iced::Element;

/// Contextual data needed to render the tracker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
    Reset,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The counter was written; post-render reactions must run.
    CountChanged,
}

#[derive(Debug, Clone)]
pub struct State {
    count: Watched<i64>,
    /// Value replaced by the most recent write.
    superseded: i64,
    /// Value published by the last reaction run.
    previous: i64,
    on_count: Reaction,
}

impl Default for State {
    fn default() -> Self {
        let count = Watched::new(0);
        let on_count = Reaction::new(&count);
        Self {
            count,
            superseded: 0,
            previous: 0,
            on_count,
        }
    }
}

impl State {
    #[must_use]
    pub fn count(&self) -> i64 {
        *self.count.get()
    }

    /// Counter value as of the prior update cycle.
    ///
    /// If several writes were coalesced into one render, the reaction has not
    /// run yet but the lag must still be exactly one write, so the pending
    /// superseded value is reported.
    #[must_use]
    pub fn previous(&self) -> i64 {
        if self.on_count.is_pending(&self.count) {
            self.superseded
        } else {
            self.previous
        }
    }

    pub fn increment(&mut self) {
        let next = self.count().saturating_add(1);
        self.superseded = self.count.set(next);
    }

    /// Sets the counter to zero. Resetting an already-zero counter still
    /// counts as a write.
    pub fn reset(&mut self) {
        self.superseded = self.count.set(0);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Increment => self.increment(),
            Message::Reset => self.reset(),
        }
        Event::CountChanged
    }

    /// Post-render reaction. Returns whether the counter had changed.
    pub fn after_render(&mut self) -> bool {
        if self.on_count.take(&self.count) {
            self.previous = self.superseded;
            true
        } else {
            false
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(section::action_button(
                ctx.i18n.tr("tracker-increment"),
                Action::Add,
                Some(Message::Increment),
            ))
            .push(section::action_button(
                ctx.i18n.tr("tracker-reset"),
                Action::Stop,
                Some(Message::Reset),
            ));

        let content = Column::new()
            .spacing(spacing::SM)
            .push(readout(ctx.i18n.tr("tracker-current"), self.count()))
            .push(readout(ctx.i18n.tr("tracker-previous"), self.previous()))
            .push(controls);

        section::card(ctx.i18n.tr("tracker-title"), content)
    }
}

fn readout<'a>(label: String, value: i64) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(format!("{label}:")).size(typography::BODY))
        .push(text(value.to_string()).size(typography::TITLE_SM))
}
