//! Environment variable handling

use std::str::FromStr;

/// Environment overrides for the matrix slot configuration
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub mode: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
    pub icons: Option<String>,
    pub screen_time: Option<u32>,
    pub hold: Option<i64>,
    pub color: Option<String>,
    pub special_font: Option<bool>,
    pub scroll_policy: Option<String>,
    pub scroll_count: Option<u32>,
    pub scroll_interval: Option<u64>,
    pub rainbow_interval: Option<u64>,
    pub time_format: Option<String>,
    pub date_format: Option<String>,
    pub gauge: Option<bool>,
    pub day_of_month: Option<bool>,
    pub tick_ms: Option<u64>,
    pub preview: Option<bool>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    env_vars_from(|key| std::env::var(key).ok())
}

/// Build overrides from any key lookup. Unparseable values are ignored.
pub fn env_vars_from<F>(lookup: F) -> EnvVars
where
    F: Fn(&str) -> Option<String>,
{
    let number = |key: &str| lookup(key).and_then(|value| value.trim().parse::<i64>().ok());

    EnvVars {
        mode: lookup("MATRIX_MODE"),
        text: lookup("MATRIX_TEXT"),
        icon: lookup("MATRIX_ICON"),
        icons: lookup("MATRIX_ICONS"),
        screen_time: number("MATRIX_SCREEN_TIME").and_then(narrow),
        hold: number("MATRIX_HOLD"),
        color: lookup("MATRIX_COLOR"),
        special_font: lookup("MATRIX_SPECIAL_FONT").and_then(|v| parse_flag(&v)),
        scroll_policy: lookup("MATRIX_SCROLL_POLICY"),
        scroll_count: number("MATRIX_SCROLL_COUNT").and_then(narrow),
        scroll_interval: number("MATRIX_SCROLL_INTERVAL").and_then(narrow),
        rainbow_interval: number("MATRIX_RAINBOW_INTERVAL").and_then(narrow),
        time_format: lookup("MATRIX_TIME_FORMAT"),
        date_format: lookup("MATRIX_DATE_FORMAT"),
        gauge: lookup("MATRIX_GAUGE").and_then(|v| parse_flag(&v)),
        day_of_month: lookup("MATRIX_DAY_OF_MONTH").and_then(|v| parse_flag(&v)),
        tick_ms: number("MATRIX_TICK_MS").and_then(narrow),
        preview: lookup("MATRIX_PREVIEW").and_then(|v| parse_flag(&v)),
    }
}

fn narrow<T: TryFrom<i64>>(value: i64) -> Option<T> {
    T::try_from(value).ok()
}

/// Accepts "true"/"false" as well as numeric 0/1
fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    bool::from_str(value)
        .ok()
        .or_else(|| value.parse::<u8>().ok().map(|n| n != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> EnvVars {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_vars_from(|key| map.get(key).cloned())
    }

    #[test]
    fn reads_prefixed_variables() {
        let env = vars(&[
            ("MATRIX_MODE", "rainbow_text"),
            ("MATRIX_SCREEN_TIME", "30"),
            ("MATRIX_HOLD", "-5"),
            ("MATRIX_GAUGE", "1"),
            ("MATRIX_PREVIEW", "false"),
        ]);
        assert_eq!(env.mode.as_deref(), Some("rainbow_text"));
        assert_eq!(env.screen_time, Some(30));
        assert_eq!(env.hold, Some(-5));
        assert_eq!(env.gauge, Some(true));
        assert_eq!(env.preview, Some(false));
        assert_eq!(env.text, None);
    }

    #[test]
    fn ignores_unparseable_numbers() {
        let env = vars(&[
            ("MATRIX_TICK_MS", "fast"),
            ("MATRIX_SCREEN_TIME", "-3"),
            ("MATRIX_DAY_OF_MONTH", "maybe"),
        ]);
        assert_eq!(env.tick_ms, None);
        assert_eq!(env.screen_time, None);
        assert_eq!(env.day_of_month, None);
    }
}
