//! Rendering of a single scheduled content slot on a 32x8 pixel matrix.
//!
//! A [`models::Slot`] holds what to show; [`display::context::DisplayContext`]
//! holds the animation state shared by every slot. The host calls
//! [`models::Slot::calc_scroll_time`] once when content changes and
//! [`models::Slot::draw`] once per refresh tick.

pub mod config;
pub mod display;
pub mod models;
