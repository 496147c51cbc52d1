use crate::display::clock::ClockReading;
use crate::display::icons::IconStore;
use crate::display::overlay::{CalendarOverlay, Overlay};
use crate::display::renderer::ScrollPolicy;
use crate::display::surface::Surface;
#[cfg(feature = "bitmap")]
use crate::display::{MATRIX_HEIGHT, MATRIX_WIDTH};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Side length of the small bitmap shown next to text
#[cfg(feature = "bitmap")]
pub const SMALL_BITMAP_SIZE: usize = 8;

/// Startup-time rendering choices shared by every slot
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub scroll_policy: ScrollPolicy,

    /// Full scroll passes a long text must complete before rotation
    pub scroll_count: u32,

    /// Milliseconds per scroll step
    pub scroll_interval_ms: u64,

    /// Milliseconds per 1° hue step of the accent color
    pub rainbow_interval_ms: u64,

    pub time_format: String,
    pub date_format: String,

    pub default_font_offset: (i32, i32),
    pub special_font_offset: (i32, i32),
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scroll_policy: ScrollPolicy::default(),
            scroll_count: 2,
            scroll_interval_ms: 80,
            rainbow_interval_ms: 32,
            time_format: "%H:%M".to_string(),
            date_format: "%d.%m.".to_string(),
            default_font_offset: (1, 6),
            special_font_offset: (1, 5),
        }
    }
}

impl RenderSettings {
    /// (x, y) offsets for the selected font preset
    pub fn font_offset(&self, default_font: bool) -> (i32, i32) {
        if default_font {
            self.default_font_offset
        } else {
            self.special_font_offset
        }
    }
}

/// State shared by all slots on one matrix.
pub struct DisplayContext {
    pub settings: RenderSettings,

    /// Advanced by the scheduler, wraps at the active slot's scroll reset
    pub scroll_step: i32,

    /// Degrees, always below 360
    pub hue: u16,
    pub accent_color: Rgb888,
    pub last_rainbow_time: u64,
    pub last_anim_time: u64,

    /// Drawing is suppressed while false
    pub running: bool,

    /// Reserves two columns on the left for the gauge
    pub display_gauge: bool,
    pub show_day_of_month: bool,

    pub alarm_color: Rgb888,
    pub icons: IconStore,

    /// Full-matrix raw bitmap, row-major
    #[cfg(feature = "bitmap")]
    pub bitmap: Vec<Rgb888>,

    /// Small bitmap shown beside text, row-major
    #[cfg(feature = "bitmap")]
    pub sbitmap: Vec<Rgb888>,

    pub overlay: Box<dyn Overlay>,
}

impl DisplayContext {
    pub fn new(settings: RenderSettings, icons: IconStore) -> Self {
        Self {
            settings,
            scroll_step: 0,
            hue: 0,
            accent_color: Rgb888::RED,
            last_rainbow_time: 0,
            last_anim_time: 0,
            running: true,
            display_gauge: false,
            show_day_of_month: false,
            alarm_color: Rgb888::new(255, 0, 0),
            icons,
            #[cfg(feature = "bitmap")]
            bitmap: vec![Rgb888::BLACK; (MATRIX_WIDTH * MATRIX_HEIGHT) as usize],
            #[cfg(feature = "bitmap")]
            sbitmap: vec![Rgb888::BLACK; SMALL_BITMAP_SIZE * SMALL_BITMAP_SIZE],
            overlay: Box::new(CalendarOverlay::default()),
        }
    }

    pub fn draw_day_of_month(&mut self, surface: &mut dyn Surface, reading: &ClockReading) {
        self.overlay
            .draw_day_of_month(surface, reading, self.show_day_of_month);
    }

    pub fn draw_day_of_week(&mut self, surface: &mut dyn Surface, reading: &ClockReading, small: bool) {
        self.overlay
            .draw_day_of_week(surface, reading, self.show_day_of_month, small);
    }

    /// Advance the scroll position by one, wrapping at `scroll_reset`.
    pub fn advance_scroll(&mut self, scroll_reset: i32) {
        self.scroll_step += 1;
        if scroll_reset > 0 && self.scroll_step >= scroll_reset {
            self.scroll_step = 0;
        }
    }
}
