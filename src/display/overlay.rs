use crate::display::clock::ClockReading;
use crate::display::surface::{FontKind, Surface, TextAlign};
use crate::display::MATRIX_WIDTH;
use chrono::Datelike;
use embedded_graphics::pixelcolor::Rgb888;

/// Calendar decorations drawn next to clock and date content.
pub trait Overlay {
    /// Day number in the left columns; no-op unless `show_day_of_month`.
    fn draw_day_of_month(
        &mut self,
        surface: &mut dyn Surface,
        reading: &ClockReading,
        show_day_of_month: bool,
    );

    /// Weekday bar on the bottom row. `small` packs it into narrower segments.
    fn draw_day_of_week(
        &mut self,
        surface: &mut dyn Surface,
        reading: &ClockReading,
        show_day_of_month: bool,
        small: bool,
    );
}

/// Bottom row of the matrix
const WEEKDAY_ROW: i32 = 7;

#[derive(Clone, Debug)]
pub struct CalendarOverlay {
    pub today_color: Rgb888,
    pub weekday_color: Rgb888,
    pub day_of_month_color: Rgb888,
}

impl Default for CalendarOverlay {
    fn default() -> Self {
        Self {
            today_color: Rgb888::new(200, 200, 200),
            weekday_color: Rgb888::new(50, 50, 50),
            day_of_month_color: Rgb888::new(255, 80, 0),
        }
    }
}

impl Overlay for CalendarOverlay {
    fn draw_day_of_month(
        &mut self,
        surface: &mut dyn Surface,
        reading: &ClockReading,
        show_day_of_month: bool,
    ) {
        if !show_day_of_month {
            return;
        }

        let day = reading.time.day().to_string();
        surface.print(
            4,
            5,
            FontKind::Special,
            self.day_of_month_color,
            TextAlign::BaselineCenter,
            &day,
        );
    }

    fn draw_day_of_week(
        &mut self,
        surface: &mut dyn Surface,
        reading: &ClockReading,
        show_day_of_month: bool,
        small: bool,
    ) {
        let segment = if small || show_day_of_month { 2 } else { 3 };
        let total = 7 * segment + 6;
        let start = if show_day_of_month && !small {
            10
        } else {
            (MATRIX_WIDTH - total) / 2
        };
        let today = reading.time.weekday().num_days_from_monday() as i32;

        for day in 0..7 {
            let x0 = start + day * (segment + 1);
            let color = if day == today {
                self.today_color
            } else {
                self.weekday_color
            };
            surface.line(x0, WEEKDAY_ROW, x0 + segment - 1, WEEKDAY_ROW, color);
        }
    }
}
