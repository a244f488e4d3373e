// SPDX-License-Identifier: MPL-2.0
//! Page layout: header, then the five section cards in a single scrollable.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::ScrollMetrics;
use crate::ui::theming::ThemeMode;
use crate::ui::{chat, embed, media_controller, page_scroller, styles, tracker};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, text, Column, Container, Id, Row, Scrollable, Space};
use iced::{alignment, Element, Length};

/// Everything the page needs to render, borrowed from `App`.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub config_warning: Option<&'a str>,
    pub tracker: &'a tracker::State,
    pub media: &'a media_controller::State,
    pub chat: &'a chat::State,
    pub page: &'a page_scroller::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut sections = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CARD_MAX_WIDTH)
        .push(header(i18n, ctx.theme_mode));

    if let Some(key) = ctx.config_warning {
        sections = sections.push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let sections = sections
        .push(
            ctx.tracker
                .view(tracker::ViewContext { i18n })
                .map(Message::Tracker),
        )
        .push(
            ctx.media
                .view(media_controller::ViewContext { i18n })
                .map(Message::Media),
        )
        .push(embed::view(embed::ViewContext { i18n }))
        .push(ctx.chat.view(chat::ViewContext { i18n }).map(Message::Chat))
        .push(
            ctx.page
                .view(page_scroller::ViewContext { i18n })
                .map(Message::Page),
        );

    let centered = Container::new(sections)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    Scrollable::new(centered)
        .id(Id::new(page_scroller::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        // Also fires for every animation frame. Those reports only refresh
        // the geometry; the running animation keeps ownership of the offset.
        .on_scroll(|viewport: Viewport| {
            Message::Page(page_scroller::Message::Scrolled(
                ScrollMetrics::from_viewport(&viewport),
            ))
        })
        .into()
}

fn header<'a>(i18n: &I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let toggle_label = if theme_mode.is_dark() {
        i18n.tr("theme-toggle-light")
    } else {
        i18n.tr("theme-toggle-dark")
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("page-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(toggle_label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::neutral)
                .on_press(Message::ToggleTheme),
        )
        .into()
}
