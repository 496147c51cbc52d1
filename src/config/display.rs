//! Display configuration structure and methods

use super::{CliArgs, EnvVars};
use crate::display::context::RenderSettings;
use crate::display::renderer::ScrollPolicy;
use crate::display::surface::format_time;
use crate::models::{ContentKind, SlotMode};
use chrono::NaiveDate;
use embedded_graphics::pixelcolor::Rgb888;
use log::info;

/// Configuration structure that stores all slot and render settings
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub mode: SlotMode,
    pub text: String,
    pub icon: Option<String>,
    pub icons_file: Option<String>,
    pub screen_time: u32,
    pub hold: i64,
    pub text_color: Rgb888,
    pub default_font: bool,

    pub scroll_policy: ScrollPolicy,
    pub scroll_count: u32,
    pub scroll_interval_ms: u64,
    pub rainbow_interval_ms: u64,
    pub time_format: String,
    pub date_format: String,
    pub display_gauge: bool,
    pub show_day_of_month: bool,

    pub tick_ms: u64,
    pub preview: bool,
    pub preview_every: u32,

    /// Values that could not be parsed, reported by `validate`
    parse_errors: Vec<String>,
}

impl DisplayConfig {
    /// Create a new configuration by combining CLI arguments and environment variables
    pub fn new(cli_args: CliArgs, env_vars: EnvVars) -> Self {
        let mut parse_errors = Vec::new();

        let mode_name = env_vars.mode.unwrap_or(cli_args.mode);
        let mode = mode_name.parse::<SlotMode>().unwrap_or_else(|e| {
            parse_errors.push(e);
            SlotMode::Empty
        });

        let policy_name = env_vars.scroll_policy.unwrap_or(cli_args.scroll_policy);
        let scroll_policy = policy_name.parse::<ScrollPolicy>().unwrap_or_else(|e| {
            parse_errors.push(e);
            ScrollPolicy::default()
        });

        let color_spec = env_vars.color.unwrap_or(cli_args.color);
        let text_color = parse_color(&color_spec).unwrap_or_else(|e| {
            parse_errors.push(e);
            Rgb888::new(255, 255, 255)
        });

        let icon = env_vars
            .icon
            .or(cli_args.icon)
            .filter(|name| !name.trim().is_empty());

        let special_font = env_vars.special_font.unwrap_or(cli_args.special_font);
        let scroll_policy_label = format!("{:?}", scroll_policy);

        let config = Self {
            mode,
            text: env_vars.text.unwrap_or(cli_args.text),
            icon,
            icons_file: env_vars.icons.or(cli_args.icons),
            screen_time: env_vars.screen_time.unwrap_or(cli_args.screen_time),
            hold: env_vars.hold.unwrap_or(cli_args.hold),
            text_color,
            default_font: !special_font,

            scroll_policy,
            scroll_count: env_vars.scroll_count.unwrap_or(cli_args.scroll_count),
            scroll_interval_ms: env_vars.scroll_interval.unwrap_or(cli_args.scroll_interval),
            rainbow_interval_ms: env_vars
                .rainbow_interval
                .unwrap_or(cli_args.rainbow_interval),
            time_format: env_vars.time_format.unwrap_or(cli_args.time_format),
            date_format: env_vars.date_format.unwrap_or(cli_args.date_format),
            display_gauge: env_vars.gauge.unwrap_or(cli_args.gauge),
            show_day_of_month: env_vars.day_of_month.unwrap_or(cli_args.day_of_month),

            tick_ms: env_vars.tick_ms.unwrap_or(cli_args.tick_ms),
            preview: env_vars.preview.unwrap_or(cli_args.preview),
            preview_every: cli_args.preview_every,

            parse_errors,
        };

        info!(
            "Slot mode: {} ({}), scroll policy: {}",
            config.mode,
            config.mode.label(),
            scroll_policy_label
        );

        config
    }

    /// Rendering choices shared by every slot
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            scroll_policy: self.scroll_policy,
            scroll_count: self.scroll_count,
            scroll_interval_ms: self.scroll_interval_ms,
            rainbow_interval_ms: self.rainbow_interval_ms,
            time_format: self.time_format.clone(),
            date_format: self.date_format.clone(),
            ..RenderSettings::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = self.parse_errors.clone();

        if self.tick_ms == 0 {
            errors.push("Tick must be greater than 0 ms".to_string());
        }

        if self.scroll_interval_ms == 0 {
            errors.push("Scroll interval must be greater than 0 ms".to_string());
        }

        if self.rainbow_interval_ms == 0 {
            errors.push("Rainbow interval must be greater than 0 ms".to_string());
        }

        if self.preview && self.preview_every == 0 {
            errors.push("Preview interval must be at least 1 tick".to_string());
        }

        for (label, format) in [("Time", &self.time_format), ("Date", &self.date_format)] {
            if !is_valid_format(format) {
                errors.push(format!("{} format '{}' is not a valid strftime format", label, format));
            }
        }

        let needs_icon = matches!(
            self.mode.content(),
            ContentKind::Icon | ContentKind::FullScreen
        );
        if needs_icon && self.icon.is_none() {
            errors.push(format!("Mode '{}' requires an icon (--icon)", self.mode));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Parse "r,g,b" into a color
pub fn parse_color(spec: &str) -> Result<Rgb888, String> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if let [r, g, b] = parts[..] {
        let channel = |value: &str| {
            value
                .parse::<u8>()
                .map_err(|_| format!("Invalid color '{}': channel '{}' must be 0-255", spec, value))
        };
        Ok(Rgb888::new(channel(r)?, channel(g)?, channel(b)?))
    } else {
        Err(format!("Invalid color '{}': expected \"r,g,b\"", spec))
    }
}

fn is_valid_format(format: &str) -> bool {
    let probe = NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0));
    !format.is_empty() && probe.is_some_and(|time| format_time(format, &time).is_some())
}
