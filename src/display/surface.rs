use crate::display::icons::Icon;
use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Color used to blank pixels
pub const COLOR_OFF: Rgb888 = Rgb888::BLACK;

/// The two font presets a slot can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    Default,
    Special,
}

impl FontKind {
    pub fn for_slot(default_font: bool) -> Self {
        if default_font {
            FontKind::Default
        } else {
            FontKind::Special
        }
    }
}

/// Anchor of a text draw relative to its (x, y) point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    TopLeft,
    BaselineLeft,
    BaselineCenter,
    BaselineRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Drawing operations a slot needs from the display backend.
pub trait Surface {
    fn draw_pixel_at(&mut self, x: i32, y: i32, color: Rgb888);

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb888);

    fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb888);

    fn print(&mut self, x: i32, y: i32, font: FontKind, color: Rgb888, align: TextAlign, text: &str);

    /// Format `time` with a chrono format string and print it.
    #[allow(clippy::too_many_arguments)]
    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        font: FontKind,
        color: Rgb888,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    );

    /// Draw the icon's current frame with its top-left corner at (x, y).
    fn image(&mut self, x: i32, y: i32, icon: &Icon);

    fn get_text_bounds(&self, x: i32, y: i32, text: &str, font: FontKind, align: TextAlign)
        -> TextBounds;
}

/// Render `time` with `format`, `None` when chrono rejects the format.
pub fn format_time(format: &str, time: &NaiveDateTime) -> Option<String> {
    use chrono::format::{Item, StrftimeItems};
    use std::fmt::Write;

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut text = String::new();
    write!(text, "{}", time.format(format)).ok()?;
    Some(text)
}

#[cfg(test)]
pub mod recording {
    //! Surface double that records every call.

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Pixel { x: i32, y: i32, color: Rgb888 },
        Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb888 },
        Rect { x: i32, y: i32, width: i32, height: i32, color: Rgb888 },
        Print { x: i32, y: i32, font: FontKind, color: Rgb888, align: TextAlign, text: String },
        Image { x: i32, y: i32, icon: String, frame: usize },
    }

    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
        /// Horizontal advance per character used for text measurement
        pub char_width: i32,
        pub char_height: i32,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                calls: Vec::new(),
                char_width: 4,
                char_height: 6,
            }
        }

        pub fn prints(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Print { .. }))
                .collect()
        }

        pub fn images(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Image { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn draw_pixel_at(&mut self, x: i32, y: i32, color: Rgb888) {
            self.calls.push(DrawCall::Pixel { x, y, color });
        }

        fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb888) {
            self.calls.push(DrawCall::Line { x0, y0, x1, y1, color });
        }

        fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb888) {
            self.calls.push(DrawCall::Rect { x, y, width, height, color });
        }

        fn print(&mut self, x: i32, y: i32, font: FontKind, color: Rgb888, align: TextAlign, text: &str) {
            self.calls.push(DrawCall::Print {
                x,
                y,
                font,
                color,
                align,
                text: text.to_string(),
            });
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
            if let Some(text) = format_time(format, time) {
                self.print(x, y, font, color, align, &text);
            }
        }

        fn image(&mut self, x: i32, y: i32, icon: &Icon) {
            self.calls.push(DrawCall::Image {
                x,
                y,
                icon: icon.name.clone(),
                frame: icon.current_frame(),
            });
        }

        fn get_text_bounds(
            &self,
            x: i32,
            y: i32,
            text: &str,
            _font: FontKind,
            align: TextAlign,
        ) -> TextBounds {
            let width = text.chars().count() as i32 * self.char_width;
            let left = match align {
                TextAlign::TopLeft | TextAlign::BaselineLeft => x,
                TextAlign::BaselineCenter => x - width / 2,
                TextAlign::BaselineRight => x - width,
            };
            let top = match align {
                TextAlign::TopLeft => y,
                _ => y - self.char_height + 1,
            };
            TextBounds {
                x: left,
                y: top,
                width,
                height: self.char_height,
            }
        }
    }
}
