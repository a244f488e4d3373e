// SPDX-License-Identifier: MPL-2.0
//! Auto-scrolling chat log section.
//!
//! The log is append-only. A post-render reaction bound to the log (and only
//! to the log) smooth-scrolls the box so the newest entry is visible.
//!
//! The new entry is laid out before the scrollable can report the taller
//! content, so the follow scroll starts from an expected content height:
//! the last reported height scaled by the entry count, or a typographic
//! estimate before the first report. Reports arriving during the animation
//! correct the target.

use crate::i18n::fluent::I18n;
use crate::reactive::{Reaction, Watched};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section;
use crate::ui::state::{ScrollMetrics, SmoothScroll, Target};
use crate::ui::styles::{self, Action};
use iced::widget::scrollable::Viewport;
use iced::widget::{text, Column, Container, Id, Scrollable};
use iced::{Element, Length, Task};
use std::time::{Duration, Instant};

pub const WELCOME_MESSAGE: &str = "👋 Welcome to the chat!";

pub const SCROLLABLE_ID: &str = "chat-log-scrollable";

/// Line height of one entry, used until the log reports its real height.
const ESTIMATED_ROW_HEIGHT: f32 = typography::BODY * 1.3;

fn estimated_content_height(rows: usize) -> f32 {
    let rows = rows as f32;
    2.0 * spacing::SM + rows * ESTIMATED_ROW_HEIGHT + (rows - 1.0).max(0.0) * spacing::XS
}

/// Contextual data needed to render the chat.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    AddMessage,
    /// Viewport reported by the log's scrollable.
    Scrolled(ScrollMetrics),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The log was appended to; post-render reactions must run.
    LogChanged,
}

#[derive(Debug, Clone)]
pub struct State {
    log: Watched<Vec<String>>,
    on_log: Reaction,
    scroll: SmoothScroll,
    /// Entry count when the scrollable last reported its geometry.
    rows_at_report: usize,
}

impl State {
    #[must_use]
    pub fn new(scroll_duration: Duration) -> Self {
        let log = Watched::new(vec![WELCOME_MESSAGE.to_string()]);
        let on_log = Reaction::new(&log);
        Self {
            log,
            on_log,
            scroll: SmoothScroll::new(SCROLLABLE_ID, scroll_duration),
            rows_at_report: 0,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        self.log.get()
    }

    /// Appends `entry` at the end of the log.
    pub fn append(&mut self, entry: String) {
        self.log.update(|log| log.push(entry));
    }

    /// Appends the generated `New message {n}` placeholder.
    pub fn add_placeholder(&mut self) {
        let n = self.log.get().len() + 1;
        self.append(format!("New message {n}"));
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AddMessage => {
                self.add_placeholder();
                Event::LogChanged
            }
            Message::Scrolled(metrics) => {
                self.scroll.on_scrolled(metrics);
                self.rows_at_report = self.log.get().len();
                Event::None
            }
        }
    }

    /// Post-render reaction. Starts the follow scroll when the log changed
    /// and reports whether it did.
    pub fn after_render(&mut self) -> bool {
        if self.on_log.take(&self.log) {
            self.scroll
                .expect_content(self.expected_content_height(), sizing::CHAT_BOX_HEIGHT);
            self.scroll.follow(Target::End);
            true
        } else {
            false
        }
    }

    fn expected_content_height(&self) -> f32 {
        let rows = self.log.get().len();
        match self.scroll.geometry() {
            Some(geometry) if self.rows_at_report > 0 => {
                geometry.content_height * rows as f32 / self.rows_at_report as f32
            }
            _ => estimated_content_height(rows),
        }
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Advances the follow animation by one frame.
    pub fn tick(&mut self, now: Instant) -> Task<Message> {
        self.scroll.tick_task(now)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let entries = self.entries().iter().fold(
            Column::new().spacing(spacing::XS).padding(spacing::SM),
            |column, entry| column.push(text(entry.as_str()).size(typography::BODY)),
        );

        let log = Scrollable::new(entries)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            // Frames of the follow scroll report here too; their geometry
            // keeps the target at the real end of the log.
            .on_scroll(|viewport: Viewport| {
                Message::Scrolled(ScrollMetrics::from_viewport(&viewport))
            });

        let log_box = Container::new(log)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CHAT_BOX_HEIGHT))
            .style(styles::container::chat_box);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(log_box)
            .push(section::action_button(
                ctx.i18n.tr("chat-add-button"),
                Action::Add,
                Some(Message::AddMessage),
            ));

        section::card(ctx.i18n.tr("chat-title"), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::smooth_scroll::ScrollStep;
    use crate::ui::state::Geometry;

    fn state() -> State {
        State::new(Duration::from_millis(400))
    }

    #[test]
    fn log_starts_with_welcome_message() {
        let state = state();
        assert_eq!(state.entries(), [WELCOME_MESSAGE.to_string()]);
    }

    #[test]
    fn appended_entries_are_numbered_after_the_welcome() {
        let mut state = state();
        for _ in 0..5 {
            state.update(Message::AddMessage);
        }

        assert_eq!(state.entries().len(), 6);
        for (i, entry) in state.entries().iter().skip(1).enumerate() {
            assert_eq!(entry, &format!("New message {}", i + 2));
        }
    }

    #[test]
    fn each_append_triggers_one_follow_scroll() {
        let mut state = state();
        let mut follows = 0;
        for _ in 0..3 {
            assert_eq!(state.update(Message::AddMessage), Event::LogChanged);
            if state.after_render() {
                follows += 1;
            }
            // A second reaction pass for the same render must not re-fire
            assert!(!state.after_render());
        }
        assert_eq!(follows, 3);
        assert!(state.is_scrolling());
    }

    fn metrics(offset: f32, content_height: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            geometry: Geometry {
                content_height,
                viewport_height: sizing::CHAT_BOX_HEIGHT,
            },
        }
    }

    /// Follow-scroll offsets for frames 100 ms apart until the animation ends.
    fn follow_frames(state: &mut State) -> Vec<f32> {
        let start = Instant::now();
        (0..=4)
            .filter_map(|i| state.scroll.tick(start + Duration::from_millis(100 * i)))
            .map(ScrollStep::value)
            .collect()
    }

    #[test]
    fn viewport_reports_do_not_trigger_follow() {
        let mut state = state();
        assert_eq!(
            state.update(Message::Scrolled(metrics(40.0, 400.0))),
            Event::None
        );
        assert!(!state.after_render());
        assert!(!state.is_scrolling());
    }

    #[test]
    fn follow_animation_settles_at_log_end() {
        let mut state = state();
        for _ in 0..30 {
            state.update(Message::AddMessage);
        }
        state.after_render();

        let start = Instant::now();
        let _ = state.tick(start);
        let _ = state.tick(start + Duration::from_secs(1));
        assert!(!state.is_scrolling());
        assert_eq!(state.scroll.relative_offset(), 1.0);
        assert!(state.scroll.offset() > 0.0);
    }

    #[test]
    fn later_appends_scroll_through_distinct_frames() {
        let mut state = state();
        for _ in 0..19 {
            state.update(Message::AddMessage);
        }
        state.after_render();
        follow_frames(&mut state);

        // 20 rows of 28px, resting at the end of the log
        state.update(Message::Scrolled(metrics(320.0, 560.0)));

        for rows in [21.0_f32, 22.0, 23.0] {
            state.update(Message::AddMessage);
            assert!(state.after_render());
            let frames = follow_frames(&mut state);

            assert!(
                frames.windows(2).all(|pair| pair[1] > pair[0]),
                "append {rows} did not animate: {frames:?}"
            );
            let end = rows * 28.0 - sizing::CHAT_BOX_HEIGHT;
            assert!((frames[frames.len() - 1] - end).abs() < 0.01);

            // The widget catches up with the taller log after the render
            state.update(Message::Scrolled(metrics(end, rows * 28.0)));
        }
    }

    #[test]
    fn first_follow_uses_an_estimate_before_any_report() {
        let mut state = state();
        for _ in 0..40 {
            state.update(Message::AddMessage);
        }
        state.after_render();

        let geometry = state.scroll.geometry().expect("follow expects a geometry");
        assert_eq!(geometry.viewport_height, sizing::CHAT_BOX_HEIGHT);
        assert!(geometry.content_height > sizing::CHAT_BOX_HEIGHT);
    }

    #[test]
    fn chat_view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
