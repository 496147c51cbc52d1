use crate::display::context::DisplayContext;
use crate::display::surface::TextAlign;
use crate::display::MATRIX_WIDTH;
use crate::models::Slot;
use std::str::FromStr;

/// Columns taken by the gauge when it is shown
pub const GAUGE_MARGIN: i32 = 2;

/// How scrolling text is positioned, chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollPolicy {
    /// Right-aligned text, centered when it fits
    RightToLeft,
    /// Left-aligned text, centered when it fits, scrolling otherwise
    #[default]
    LeftToRight,
    /// Left-aligned text that always scrolls, even when it fits
    LeftToRightUniform,
}

impl ScrollPolicy {
    pub fn text_align(&self) -> TextAlign {
        match self {
            ScrollPolicy::RightToLeft => TextAlign::BaselineRight,
            ScrollPolicy::LeftToRight | ScrollPolicy::LeftToRightUniform => {
                TextAlign::BaselineLeft
            }
        }
    }
}

impl FromStr for ScrollPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rtl" => Ok(ScrollPolicy::RightToLeft),
            "ltr" => Ok(ScrollPolicy::LeftToRight),
            "ltr-uniform" => Ok(ScrollPolicy::LeftToRightUniform),
            _ => Err(format!(
                "Invalid scroll policy '{}'. Must be 'rtl', 'ltr' or 'ltr-uniform'",
                s
            )),
        }
    }
}

impl Slot {
    /// Columns reserved on the left, including the gauge.
    pub fn margin(&self, display_gauge: bool) -> i32 {
        let gauge = if display_gauge { GAUGE_MARGIN } else { 0 };
        self.mode.left_margin() + gauge
    }

    /// Horizontal text origin for the current scroll step.
    pub fn xpos(&self, ctx: &DisplayContext) -> i32 {
        let startx = self.margin(ctx.display_gauge);
        let width = MATRIX_WIDTH - startx;
        let step = ctx.scroll_step;

        match ctx.settings.scroll_policy {
            ScrollPolicy::RightToLeft => {
                if self.pixels < width {
                    // right edge of centered text
                    MATRIX_WIDTH - (width - self.pixels) / 2
                } else {
                    startx + step
                }
            }
            ScrollPolicy::LeftToRight => {
                if self.pixels < width {
                    startx + (width - self.pixels + 1) / 2
                } else {
                    startx - step + width
                }
            }
            ScrollPolicy::LeftToRightUniform => startx - step + width,
        }
    }
}
