// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Color family of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Green: increment, play, add message, back to top.
    Add,
    /// Red: reset, pause.
    Stop,
    /// Purple: restart, jump to bottom.
    Jump,
}

impl Action {
    fn colors(self) -> (Color, Color) {
        match self {
            Action::Add => (palette::ACTION_ADD, palette::ACTION_ADD_HOVER),
            Action::Stop => (palette::ACTION_STOP, palette::ACTION_STOP_HOVER),
            Action::Jump => (palette::ACTION_JUMP, palette::ACTION_JUMP_HOVER),
        }
    }
}

/// Filled button in the color of `action`.
pub fn action(action: Action) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (base, hover) = action.colors();
        let (background, text_color, shadow) = match status {
            button::Status::Active | button::Status::Pressed => (base, WHITE, shadow::SM),
            button::Status::Hovered => (hover, WHITE, shadow::SM),
            button::Status::Disabled => (
                Color {
                    a: opacity::DISABLED,
                    ..base
                },
                Color {
                    a: opacity::DISABLED,
                    ..WHITE
                },
                shadow::NONE,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Neutral outlined button used for the theme toggle.
pub fn neutral(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            },
            palette::PRIMARY_500,
        ),
        _ => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn action_buttons_use_their_family_color() {
        let theme = Theme::Dark;
        let add = action(Action::Add)(&theme, button::Status::Active);
        let stop = action(Action::Stop)(&theme, button::Status::Active);
        let jump = action(Action::Jump)(&theme, button::Status::Active);

        assert_eq!(background(&add), palette::ACTION_ADD);
        assert_eq!(background(&stop), palette::ACTION_STOP);
        assert_eq!(background(&jump), palette::ACTION_JUMP);
    }

    #[test]
    fn action_color_does_not_depend_on_theme() {
        let light = action(Action::Add)(&Theme::Light, button::Status::Active);
        let dark = action(Action::Add)(&Theme::Dark, button::Status::Active);
        assert_eq!(light.background, dark.background);
    }

    #[test]
    fn hover_changes_background() {
        let style_fn = action(Action::Jump);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn neutral_adapts_to_theme() {
        let light = neutral(&Theme::Light, button::Status::Active);
        let dark = neutral(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}
