use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content kind of a slot, as selected by the scheduler.
///
/// The numeric codes used by [`SlotMode::from_raw`] follow declaration order.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlotMode {
    #[default]
    Empty,
    Blank,
    Clock,
    Date,
    FullScreen,
    IconScreen,
    TextScreen,
    RainbowIcon,
    RainbowText,
    RainbowClock,
    RainbowDate,
    #[cfg(feature = "bitmap")]
    BitmapScreen,
    #[cfg(feature = "bitmap")]
    BitmapSmall,
}

/// What a mode draws, independent of where its color comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Empty,
    Blank,
    Clock,
    Date,
    FullScreen,
    Icon,
    Text,
    #[cfg(feature = "bitmap")]
    Bitmap,
    #[cfg(feature = "bitmap")]
    BitmapSmall,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Empty => "empty",
            ContentKind::Blank => "blank",
            ContentKind::Clock => "clock",
            ContentKind::Date => "date",
            ContentKind::FullScreen => "full screen",
            ContentKind::Icon => "icon",
            ContentKind::Text => "text",
            #[cfg(feature = "bitmap")]
            ContentKind::Bitmap | ContentKind::BitmapSmall => "bitmap",
        }
    }
}

/// Left margin reserved for the icon column
pub const ICON_MARGIN: i32 = 8;

impl SlotMode {
    pub const ALL: &'static [SlotMode] = &[
        SlotMode::Empty,
        SlotMode::Blank,
        SlotMode::Clock,
        SlotMode::Date,
        SlotMode::FullScreen,
        SlotMode::IconScreen,
        SlotMode::TextScreen,
        SlotMode::RainbowIcon,
        SlotMode::RainbowText,
        SlotMode::RainbowClock,
        SlotMode::RainbowDate,
        #[cfg(feature = "bitmap")]
        SlotMode::BitmapScreen,
        #[cfg(feature = "bitmap")]
        SlotMode::BitmapSmall,
    ];

    /// Decode a scheduler mode code. Bitmap codes are unknown when the
    /// `bitmap` feature is compiled out.
    pub fn from_raw(raw: u8) -> Option<SlotMode> {
        match raw {
            0 => Some(SlotMode::Empty),
            1 => Some(SlotMode::Blank),
            2 => Some(SlotMode::Clock),
            3 => Some(SlotMode::Date),
            4 => Some(SlotMode::FullScreen),
            5 => Some(SlotMode::IconScreen),
            6 => Some(SlotMode::TextScreen),
            7 => Some(SlotMode::RainbowIcon),
            8 => Some(SlotMode::RainbowText),
            9 => Some(SlotMode::RainbowClock),
            10 => Some(SlotMode::RainbowDate),
            #[cfg(feature = "bitmap")]
            11 => Some(SlotMode::BitmapScreen),
            #[cfg(feature = "bitmap")]
            12 => Some(SlotMode::BitmapSmall),
            _ => None,
        }
    }

    pub fn content(&self) -> ContentKind {
        match self {
            SlotMode::Empty => ContentKind::Empty,
            SlotMode::Blank => ContentKind::Blank,
            SlotMode::Clock | SlotMode::RainbowClock => ContentKind::Clock,
            SlotMode::Date | SlotMode::RainbowDate => ContentKind::Date,
            SlotMode::FullScreen => ContentKind::FullScreen,
            SlotMode::IconScreen | SlotMode::RainbowIcon => ContentKind::Icon,
            SlotMode::TextScreen | SlotMode::RainbowText => ContentKind::Text,
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapScreen => ContentKind::Bitmap,
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapSmall => ContentKind::BitmapSmall,
        }
    }

    /// Rainbow variants draw in the shared accent color instead of the slot's text color.
    pub fn uses_accent_color(&self) -> bool {
        matches!(
            self,
            SlotMode::RainbowIcon
                | SlotMode::RainbowText
                | SlotMode::RainbowClock
                | SlotMode::RainbowDate
        )
    }

    /// Modes whose text may need to scroll across the matrix
    pub fn is_scrolling(&self) -> bool {
        match self.content() {
            ContentKind::Icon | ContentKind::Text => true,
            #[cfg(feature = "bitmap")]
            ContentKind::BitmapSmall => true,
            _ => false,
        }
    }

    /// Columns reserved on the left before text starts (gauge excluded).
    pub fn left_margin(&self) -> i32 {
        match self.content() {
            ContentKind::Icon => ICON_MARGIN,
            #[cfg(feature = "bitmap")]
            ContentKind::BitmapSmall => ICON_MARGIN,
            _ => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.content().label()
    }

    fn key(&self) -> &'static str {
        match self {
            SlotMode::Empty => "empty",
            SlotMode::Blank => "blank",
            SlotMode::Clock => "clock",
            SlotMode::Date => "date",
            SlotMode::FullScreen => "full_screen",
            SlotMode::IconScreen => "icon_screen",
            SlotMode::TextScreen => "text_screen",
            SlotMode::RainbowIcon => "rainbow_icon",
            SlotMode::RainbowText => "rainbow_text",
            SlotMode::RainbowClock => "rainbow_clock",
            SlotMode::RainbowDate => "rainbow_date",
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapScreen => "bitmap_screen",
            #[cfg(feature = "bitmap")]
            SlotMode::BitmapSmall => "bitmap_small",
        }
    }
}

/// Label for a raw mode code, `"unknown"` when it names no compiled-in mode.
pub fn mode_name_from_raw(raw: u8) -> &'static str {
    SlotMode::from_raw(raw).map_or("unknown", |mode| mode.label())
}

impl fmt::Display for SlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SlotMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        SlotMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.key() == wanted)
            .ok_or_else(|| format!("Unknown slot mode '{}'", s))
    }
}
