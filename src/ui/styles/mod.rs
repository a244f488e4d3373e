// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the section cards and their controls.

pub mod button;
pub mod container;

pub use button::Action;
