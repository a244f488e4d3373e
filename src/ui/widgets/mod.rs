// SPDX-License-Identifier: MPL-2.0
pub mod video_surface;

pub use video_surface::VideoSurface;
