// SPDX-License-Identifier: MPL-2.0
//! UI state that is independent of any single section.

pub mod smooth_scroll;

pub use smooth_scroll::{Geometry, ScrollMetrics, SmoothScroll, Target};
