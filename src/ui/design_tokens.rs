// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every card on the page.
//!
//! Colors, spacing, sizes and radii live here so the section views never
//! hard-code a number. Values follow an 8px grid.
//!
//! ```
//! use ref_playground::ui::design_tokens::{palette, spacing};
//!
//! let gap = spacing::MD;
//! assert!(gap > spacing::XS);
//! assert!(palette::ACTION_ADD.g > palette::ACTION_ADD.r);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.95, 0.95, 0.96);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Action colors. Each button family keeps its color in both themes.
    /// Increment, play, add message, jump to top.
    pub const ACTION_ADD: Color = Color::from_rgb(0.133, 0.545, 0.282);
    pub const ACTION_ADD_HOVER: Color = Color::from_rgb(0.173, 0.627, 0.345);
    /// Reset, pause.
    pub const ACTION_STOP: Color = Color::from_rgb(0.792, 0.196, 0.196);
    pub const ACTION_STOP_HOVER: Color = Color::from_rgb(0.863, 0.263, 0.263);
    /// Restart, jump to bottom.
    pub const ACTION_JUMP: Color = Color::from_rgb(0.482, 0.259, 0.757);
    pub const ACTION_JUMP_HOVER: Color = Color::from_rgb(0.557, 0.333, 0.827);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const DISABLED: f32 = 0.5;
    pub const PLACEHOLDER: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Maximum width of the centered card column.
    pub const CARD_MAX_WIDTH: f32 = 720.0;

    /// Fixed height of the chat log box; overflow scrolls inside it.
    pub const CHAT_BOX_HEIGHT: f32 = 240.0;

    /// Height reserved for the video frame in the media card.
    pub const MEDIA_HEIGHT: f32 = 320.0;

    /// Height of the embedded-player placeholder.
    pub const EMBED_HEIGHT: f32 = 200.0;
}

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Card headings.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Secondary labels such as the embed attributes.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < opacity::OPAQUE);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CHAT_BOX_HEIGHT > sizing::BUTTON_HEIGHT);
    assert!(sizing::CARD_MAX_WIDTH > sizing::MEDIA_HEIGHT);
};
