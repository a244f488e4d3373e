// SPDX-License-Identifier: MPL-2.0
//! Card frame shared by the five page sections.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, Column, Container};
use iced::{Element, Length};

/// Wraps `content` in a titled card.
pub fn card<'a, M: 'a>(title: String, content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(text(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Colored action button. `on_press` of `None` renders it disabled.
pub fn action_button<'a, M: Clone + 'a>(
    label: String,
    action: styles::Action,
    on_press: Option<M>,
) -> Element<'a, M> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::action(action))
        .on_press_maybe(on_press)
        .into()
}
