use crate::display::icons::Icon;
use crate::display::surface::{format_time, FontKind, Surface, TextAlign, TextBounds};
use chrono::NaiveDateTime;
use colored::Colorize;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    mono_font::{
        ascii::{FONT_4X6, FONT_5X8},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{Rgb888, RgbColor},
    primitives::{Line, Primitive, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
    Drawable, Pixel,
};
use log::warn;

/// In-memory RGB pixel buffer for the matrix.
#[derive(Clone, Debug)]
pub struct MatrixCanvas {
    width: i32,
    height: i32,
    pixels: Vec<Rgb888>,
}

impl MatrixCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; (width.max(0) * height.max(0)) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != Rgb888::BLACK).count()
    }

    /// The buffer as rows of true-color blocks for a terminal
    pub fn render_ansi(&self) -> String {
        self.pixels
            .chunks(self.width.max(1) as usize)
            .map(|row| {
                row.iter()
                    .map(|p| "██".truecolor(p.r(), p.g(), p.b()).to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    fn font(font: FontKind) -> &'static MonoFont<'static> {
        match font {
            FontKind::Default => &FONT_5X8,
            FontKind::Special => &FONT_4X6,
        }
    }

    fn text_style(align: TextAlign) -> TextStyle {
        let (alignment, baseline) = match align {
            TextAlign::TopLeft => (Alignment::Left, Baseline::Top),
            TextAlign::BaselineLeft => (Alignment::Left, Baseline::Alphabetic),
            TextAlign::BaselineCenter => (Alignment::Center, Baseline::Alphabetic),
            TextAlign::BaselineRight => (Alignment::Right, Baseline::Alphabetic),
        };
        TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build()
    }
}

impl DrawTarget for MatrixCanvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for MatrixCanvas {
    fn size(&self) -> Size {
        Size::new(self.width.max(0) as u32, self.height.max(0) as u32)
    }
}

impl Surface for MatrixCanvas {
    fn draw_pixel_at(&mut self, x: i32, y: i32, color: Rgb888) {
        self.set_pixel(x, y, color);
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb888) {
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self);
    }

    fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb888) {
        let size = Size::new(width.max(0) as u32, height.max(0) as u32);
        let _ = Rectangle::new(Point::new(x, y), size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self);
    }

    fn print(&mut self, x: i32, y: i32, font: FontKind, color: Rgb888, align: TextAlign, text: &str) {
        let style = MonoTextStyle::new(Self::font(font), color);
        let _ = Text::with_text_style(text, Point::new(x, y), style, Self::text_style(align))
            .draw(self);
    }

    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        font: FontKind,
        color: Rgb888,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    ) {
        match format_time(format, time) {
            Some(text) => self.print(x, y, font, color, align, &text),
            None => warn!("Invalid time format '{}', nothing drawn", format),
        }
    }

    fn image(&mut self, x: i32, y: i32, icon: &Icon) {
        let width = icon.width.max(1) as usize;
        for (i, color) in icon.current_frame_pixels().iter().enumerate() {
            let px = x + (i % width) as i32;
            let py = y + (i / width) as i32;
            self.set_pixel(px, py, *color);
        }
    }

    fn get_text_bounds(
        &self,
        x: i32,
        y: i32,
        text: &str,
        font: FontKind,
        align: TextAlign,
    ) -> TextBounds {
        let style = MonoTextStyle::new(Self::font(font), Rgb888::WHITE);
        let bounds = Text::with_text_style(text, Point::new(x, y), style, Self::text_style(align))
            .bounding_box();
        TextBounds {
            x: bounds.top_left.x,
            y: bounds.top_left.y,
            width: bounds.size.width as i32,
            height: bounds.size.height as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{MATRIX_HEIGHT, MATRIX_WIDTH};
    use chrono::NaiveDate;

    #[test]
    fn drawing_outside_is_clipped() {
        let mut canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        canvas.draw_pixel_at(-1, 0, Rgb888::WHITE);
        canvas.draw_pixel_at(32, 3, Rgb888::WHITE);
        canvas.draw_pixel_at(0, 8, Rgb888::WHITE);
        assert_eq!(canvas.lit_pixels(), 0);

        canvas.filled_rectangle(30, 6, 5, 5, Rgb888::GREEN);
        assert_eq!(canvas.lit_pixels(), 4);
    }

    #[test]
    fn vertical_line_covers_column() {
        let mut canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        canvas.line(8, 0, 8, 7, Rgb888::WHITE);
        assert_eq!(canvas.lit_pixels(), 8);
        assert_eq!(canvas.pixel(8, 7), Some(Rgb888::WHITE));
    }

    #[test]
    fn text_bounds_scale_with_length() {
        let canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        let bounds = canvas.get_text_bounds(0, 0, "HELLO", FontKind::Default, TextAlign::TopLeft);
        assert_eq!(bounds.width, 25);
        assert_eq!(bounds.height, 8);

        let small = canvas.get_text_bounds(0, 0, "HELLO", FontKind::Special, TextAlign::TopLeft);
        assert_eq!(small.width, 20);
    }

    #[test]
    fn centered_bounds_straddle_anchor() {
        let canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        let bounds =
            canvas.get_text_bounds(16, 6, "12:34", FontKind::Default, TextAlign::BaselineCenter);
        assert!(bounds.x < 16 && bounds.x + bounds.width > 16);
    }

    #[test]
    fn print_lights_pixels() {
        let mut canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        canvas.print(1, 6, FontKind::Default, Rgb888::WHITE, TextAlign::BaselineLeft, "Hi");
        assert!(canvas.lit_pixels() > 0);
    }

    #[test]
    fn invalid_format_draws_nothing() {
        let mut canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        let time = NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap();
        canvas.strftime(16, 6, FontKind::Default, Rgb888::WHITE, TextAlign::BaselineCenter, "%Q", &time);
        assert_eq!(canvas.lit_pixels(), 0);
    }

    #[test]
    fn ansi_preview_has_one_line_per_row() {
        let canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);
        assert_eq!(canvas.render_ansi().lines().count(), MATRIX_HEIGHT as usize);
    }
}
