use crate::models::mode::SlotMode;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::debug;

/// One scheduled unit of matrix content.
///
/// Slots are reusable containers: the scheduler rewrites the fields in place
/// whenever it activates new content.
#[derive(Clone, Debug)]
pub struct Slot {
    pub mode: SlotMode,

    /// Seconds the slot stays active
    pub screen_time: u32,

    /// Wall-clock second (unix) at which the scheduler rotates away
    pub endtime: i64,

    /// Wall-clock second at which the slot was last activated
    pub last_time: i64,

    pub icon_name: String,

    /// Index into the shared icon store
    pub icon: usize,

    pub text: String,

    /// Color for non-rainbow modes
    pub text_color: Rgb888,

    /// Selects the default font preset instead of the special one
    pub default_font: bool,

    /// Measured width of the text in the active font
    pub pixels: i32,

    /// Scroll steps after which the scroll position wraps
    pub scroll_reset: i32,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            mode: SlotMode::Empty,
            screen_time: 0,
            endtime: 0,
            last_time: 0,
            icon_name: String::new(),
            icon: 0,
            text: String::new(),
            text_color: Rgb888::WHITE,
            default_font: true,
            pixels: 0,
            scroll_reset: 0,
        }
    }
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe the slot for diagnostics. Also written to the debug log.
    pub fn status(&self) -> String {
        let status = match self.mode {
            SlotMode::Empty => "empty slot".to_string(),
            SlotMode::Blank => format!("blank screen for {} sec", self.screen_time),
            SlotMode::Clock | SlotMode::RainbowClock => {
                format!("{} for: {} sec", self.mode_prefix("clock"), self.screen_time)
            }
            SlotMode::Date | SlotMode::RainbowDate => {
                format!("{} for: {} sec", self.mode_prefix("date"), self.screen_time)
            }
            SlotMode::FullScreen => format!(
                "full screen: \"{}\" for: {} sec",
                self.icon_name, self.screen_time
            ),
            SlotMode::IconScreen | SlotMode::RainbowIcon => format!(
                "{}: \"{}\" text: {} for: {} sec",
                self.mode_prefix("icon screen"),
                self.icon_name,
                self.text,
                self.screen_time
            ),
            SlotMode::TextScreen | SlotMode::RainbowText => format!(
                "{}: \"{}\" for: {} sec",
                self.mode_prefix("text"),
                self.text,
                self.screen_time
            ),
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapScreen => format!("bitmap for: {} sec", self.screen_time),
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapSmall => format!(
                "small bitmap text: \"{}\" for: {} sec",
                self.text, self.screen_time
            ),
        };

        debug!("slot: {}", status);
        status
    }

    fn mode_prefix(&self, kind: &str) -> String {
        if self.mode.uses_accent_color() {
            format!("rainbow {}", kind)
        } else {
            kind.to_string()
        }
    }

    pub fn get_mode_name(&self) -> &'static str {
        self.mode.label()
    }

    /// Push `endtime` out by `seconds`. Negative values pull it back in.
    pub fn hold_slot(&mut self, seconds: i64) {
        self.endtime += seconds;
        debug!("hold for {} secs", seconds);
    }
}
