//! Command-line argument parsing

/// Command-line arguments for the matrix slot renderer
#[derive(argh::FromArgs, Debug, Clone)]
/// Matrix Slot Renderer
///
/// Shows one content slot (text, clock, date, icon or bitmap) on a 32x8 matrix.
pub struct CliArgs {
    #[argh(option, short = 'm', default = "String::from(\"text_screen\")")]
    /// slot mode, e.g. "text_screen", "rainbow_clock", "icon_screen". Default: "text_screen"
    pub mode: String,

    #[argh(option, short = 't', default = "String::new()")]
    /// text shown by text, icon and small bitmap modes
    pub text: String,

    #[argh(option, short = 'i')]
    /// name of the icon shown by icon and full screen modes
    pub icon: Option<String>,

    #[argh(option)]
    /// path to a JSON file with additional icons
    pub icons: Option<String>,

    #[argh(option, short = 's', default = "10")]
    /// requested screen time in seconds. Default: 10
    pub screen_time: u32,

    #[argh(option, default = "0")]
    /// seconds to hold the slot beyond its screen time on first activation. Default: 0
    pub hold: i64,

    #[argh(option, short = 'c', default = "String::from(\"255,255,255\")")]
    /// text color as "r,g,b". Default: "255,255,255"
    pub color: String,

    #[argh(switch)]
    /// use the special font instead of the default font
    pub special_font: bool,

    #[argh(option, default = "String::from(\"ltr\")")]
    /// scroll policy: "ltr" (center short text), "ltr-uniform" (always scroll)
    /// or "rtl" (right to left). Default: "ltr"
    pub scroll_policy: String,

    #[argh(option, default = "2")]
    /// full scroll passes before the slot may rotate. Default: 2
    pub scroll_count: u32,

    #[argh(option, default = "80")]
    /// milliseconds per scroll step. Default: 80
    pub scroll_interval: u64,

    #[argh(option, default = "32")]
    /// milliseconds per hue step of rainbow modes. Default: 32
    pub rainbow_interval: u64,

    #[argh(option, default = "String::from(\"%H:%M\")")]
    /// strftime format of clock modes. Default: "%H:%M"
    pub time_format: String,

    #[argh(option, default = "String::from(\"%d.%m.\")")]
    /// strftime format of date modes. Default: "%d.%m."
    pub date_format: String,

    #[argh(switch)]
    /// reserve two columns on the left for the gauge
    pub gauge: bool,

    #[argh(switch)]
    /// show the day of month next to the clock
    pub day_of_month: bool,

    #[argh(option, default = "20")]
    /// render tick in milliseconds. Default: 20
    pub tick_ms: u64,

    #[argh(switch)]
    /// print the matrix to the terminal
    pub preview: bool,

    #[argh(option, default = "25")]
    /// ticks between terminal previews. Default: 25
    pub preview_every: u32,
}

impl CliArgs {
    /// Parse CLI arguments
    pub fn parse() -> Self {
        argh::from_env()
    }
}
