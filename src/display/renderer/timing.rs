use crate::display::context::RenderSettings;
use crate::display::renderer::ScrollPolicy;
use crate::display::surface::{FontKind, Surface, TextAlign};
use crate::display::MATRIX_WIDTH;
use crate::models::mode::ICON_MARGIN;
use crate::models::Slot;
use log::debug;

/// Text narrower than this fits without scrolling in text modes
pub const TEXT_FIT_THRESHOLD: i32 = 32;

/// Text narrower than this fits beside an icon
pub const ICON_FIT_THRESHOLD: i32 = 23;

impl Slot {
    /// Measure `text` and derive how long the slot must stay visible so the
    /// text completes `scroll_count` passes. Also sets `pixels` and `scroll_reset`.
    pub fn calc_scroll_time(
        &mut self,
        text: &str,
        screen_time: u32,
        surface: &dyn Surface,
        settings: &RenderSettings,
    ) {
        let bounds = surface.get_text_bounds(
            0,
            0,
            text,
            FontKind::for_slot(self.default_font),
            TextAlign::TopLeft,
        );
        self.pixels = bounds.width;

        let startx = self.mode.left_margin();
        let width = MATRIX_WIDTH - startx;

        if self.mode.is_scrolling() {
            let threshold = if startx == ICON_MARGIN {
                ICON_FIT_THRESHOLD
            } else {
                TEXT_FIT_THRESHOLD
            };
            let uniform = settings.scroll_policy == ScrollPolicy::LeftToRightUniform;

            self.screen_time = if !uniform && self.pixels < threshold {
                screen_time
            } else {
                scroll_duration(width, self.pixels, settings).max(screen_time)
            };
        }

        self.scroll_reset = width + self.pixels;

        debug!(
            "calc_scroll_time: mode: {} text: \"{}\" pixels {} calculated: {} defined: {} scroll_reset: {}",
            self.mode, text, self.pixels, self.screen_time, screen_time, self.scroll_reset
        );
    }
}

/// Whole seconds needed to scroll `pixels` of text `scroll_count` times
/// through `width` columns, rounded up.
pub fn scroll_duration(width: i32, pixels: i32, settings: &RenderSettings) -> u32 {
    let count = settings.scroll_count as u64;
    let max_steps = (count + 1) * width.max(0) as u64 + count * pixels.max(0) as u64;
    let duration_ms = max_steps * settings.scroll_interval_ms;
    duration_ms.div_ceil(1000).min(u32::MAX as u64) as u32
}
