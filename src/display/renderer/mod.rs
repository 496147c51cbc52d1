mod animation;
mod position;
mod timing;

pub use animation::hsv_to_rgb;
pub use position::{ScrollPolicy, GAUGE_MARGIN};
pub use timing::{scroll_duration, ICON_FIT_THRESHOLD, TEXT_FIT_THRESHOLD};

use crate::display::clock::Clock;
use crate::display::context::DisplayContext;
#[cfg(feature = "bitmap")]
use crate::display::context::SMALL_BITMAP_SIZE;
use crate::display::surface::{format_time, FontKind, Surface, TextAlign, COLOR_OFF};
#[cfg(feature = "bitmap")]
use crate::display::{MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::models::{ContentKind, Slot};
use embedded_graphics::pixelcolor::Rgb888;

/// Time format whose separator blinks on odd seconds
const BLINK_TIME_FORMAT: &str = "%H:%M";

/// Baseline x of clock text when no day of month is shown
const CLOCK_CENTER_X: i32 = 15;

/// Baseline x of clock text shifted right of the day of month
const CLOCK_CENTER_X_WITH_DAY: i32 = 20;

/// Per-tick font parameters for a slot
struct TextStyle {
    font: FontKind,
    color: Rgb888,
    xoffset: i32,
    yoffset: i32,
}

impl Slot {
    /// Render the slot for one tick, then advance shared animation state.
    /// Does nothing while the context is not running.
    pub fn draw(
        &self,
        ctx: &mut DisplayContext,
        surface: &mut dyn Surface,
        clock: &dyn Clock,
        now_ms: u64,
    ) {
        if !ctx.running {
            return;
        }

        let (xoffset, yoffset) = ctx.settings.font_offset(self.default_font);
        let style = TextStyle {
            font: FontKind::for_slot(self.default_font),
            color: self.content_color(ctx),
            xoffset,
            yoffset,
        };

        match self.mode.content() {
            ContentKind::Empty | ContentKind::Blank => {}
            #[cfg(feature = "bitmap")]
            ContentKind::Bitmap => self.draw_bitmap(ctx, surface),
            #[cfg(feature = "bitmap")]
            ContentKind::BitmapSmall => {
                self.draw_scrolling_text(ctx, surface, &style);
                self.draw_small_bitmap(ctx, surface);
            }
            ContentKind::Clock => self.draw_clock(ctx, surface, clock, &style),
            ContentKind::Date => self.draw_date(ctx, surface, clock, &style),
            ContentKind::FullScreen => {
                if let Some(icon) = ctx.icons.get(self.icon) {
                    surface.image(0, 0, icon);
                }
            }
            ContentKind::Icon => {
                self.draw_scrolling_text(ctx, surface, &style);
                let icon = ctx.icons.get(self.icon);
                if ctx.display_gauge {
                    if let Some(icon) = icon {
                        surface.image(GAUGE_MARGIN, 0, icon);
                    }
                    surface.line(10, 0, 10, 7, COLOR_OFF);
                } else {
                    surface.line(8, 0, 8, 7, COLOR_OFF);
                    if let Some(icon) = icon {
                        surface.image(0, 0, icon);
                    }
                }
            }
            ContentKind::Text => self.draw_scrolling_text(ctx, surface, &style),
        }

        self.update_screen(ctx, now_ms);
    }

    /// Accent color for rainbow modes, the slot's own color otherwise
    pub fn content_color(&self, ctx: &DisplayContext) -> Rgb888 {
        if self.mode.uses_accent_color() {
            ctx.accent_color
        } else {
            self.text_color
        }
    }

    fn draw_scrolling_text(&self, ctx: &DisplayContext, surface: &mut dyn Surface, style: &TextStyle) {
        surface.print(
            self.xpos(ctx) + style.xoffset,
            style.yoffset,
            style.font,
            style.color,
            ctx.settings.scroll_policy.text_align(),
            &self.text,
        );
    }

    fn draw_clock(
        &self,
        ctx: &mut DisplayContext,
        surface: &mut dyn Surface,
        clock: &dyn Clock,
        style: &TextStyle,
    ) {
        let reading = clock.now();
        if !reading.is_valid() {
            surface.print(
                CLOCK_CENTER_X + style.xoffset,
                style.yoffset,
                style.font,
                ctx.alarm_color,
                TextAlign::BaselineCenter,
                "!t!",
            );
            return;
        }

        let center = if ctx.show_day_of_month {
            CLOCK_CENTER_X_WITH_DAY
        } else {
            CLOCK_CENTER_X
        };
        let x = style.xoffset + center;
        let format = ctx.settings.time_format.as_str();

        surface.strftime(
            x,
            style.yoffset,
            style.font,
            style.color,
            TextAlign::BaselineCenter,
            format,
            &reading.time,
        );

        if format == BLINK_TIME_FORMAT && reading.second() % 2 == 1 {
            if let Some(text) = format_time(format, &reading.time) {
                let bounds = surface.get_text_bounds(
                    x,
                    style.yoffset,
                    &text,
                    style.font,
                    TextAlign::BaselineCenter,
                );
                let xc = bounds.x + (bounds.width - bounds.width % 2) / 2;
                surface.filled_rectangle(xc - 2, bounds.y, 3, bounds.height, COLOR_OFF);
            }
        }

        if !self.mode.uses_accent_color() {
            ctx.draw_day_of_month(surface, &reading);
            ctx.draw_day_of_week(surface, &reading, false);
        }
    }

    fn draw_date(
        &self,
        ctx: &mut DisplayContext,
        surface: &mut dyn Surface,
        clock: &dyn Clock,
        style: &TextStyle,
    ) {
        let reading = clock.now();
        let x = style.xoffset + CLOCK_CENTER_X;

        if !reading.is_valid() {
            surface.print(
                x,
                style.yoffset,
                style.font,
                ctx.alarm_color,
                TextAlign::BaselineCenter,
                "!d!",
            );
            return;
        }

        surface.strftime(
            x,
            style.yoffset,
            style.font,
            style.color,
            TextAlign::BaselineCenter,
            &ctx.settings.date_format,
            &reading.time,
        );

        if !self.mode.uses_accent_color() {
            ctx.draw_day_of_week(surface, &reading, true);
        }
    }

    #[cfg(feature = "bitmap")]
    fn draw_bitmap(&self, ctx: &DisplayContext, surface: &mut dyn Surface) {
        for y in 0..MATRIX_HEIGHT {
            for x in 0..MATRIX_WIDTH {
                if let Some(color) = ctx.bitmap.get((x + y * MATRIX_WIDTH) as usize) {
                    surface.draw_pixel_at(x, y, *color);
                }
            }
        }
    }

    #[cfg(feature = "bitmap")]
    fn draw_small_bitmap(&self, ctx: &DisplayContext, surface: &mut dyn Surface) {
        let (separator, offset) = if ctx.display_gauge {
            (10, GAUGE_MARGIN)
        } else {
            (8, 0)
        };
        surface.line(separator, 0, separator, 7, COLOR_OFF);

        let size = SMALL_BITMAP_SIZE as i32;
        for y in 0..size {
            for x in 0..size {
                if let Some(color) = ctx.sbitmap.get((x + y * size) as usize) {
                    surface.draw_pixel_at(x + offset, y, *color);
                }
            }
        }
    }
}
