use crate::display::context::DisplayContext;
use crate::models::Slot;
use embedded_graphics::pixelcolor::Rgb888;

/// Saturation of the accent color
const RAINBOW_SATURATION: f32 = 0.8;

/// Value of the accent color
const RAINBOW_VALUE: f32 = 0.8;

impl Slot {
    /// Advance the hue and the slot's icon frame if their intervals elapsed.
    pub fn update_screen(&self, ctx: &mut DisplayContext, now_ms: u64) {
        if now_ms.saturating_sub(ctx.last_rainbow_time) >= ctx.settings.rainbow_interval_ms {
            ctx.hue = (ctx.hue + 1) % 360;
            ctx.accent_color = hsv_to_rgb(ctx.hue, RAINBOW_SATURATION, RAINBOW_VALUE);
            ctx.last_rainbow_time = now_ms;
        }

        let elapsed = now_ms.saturating_sub(ctx.last_anim_time);
        if let Some(icon) = ctx.icons.get_mut(self.icon) {
            if elapsed >= icon.frame_duration_ms {
                icon.next_frame();
                ctx.last_anim_time = now_ms;
            }
        }
    }
}

/// Convert a hue in degrees plus saturation and value in 0..=1 to RGB.
pub fn hsv_to_rgb(hue: u16, s: f32, v: f32) -> Rgb888 {
    let h = (hue % 360) as f32 / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match hue % 360 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb888::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::context::RenderSettings;
    use crate::display::icons::IconStore;
    use crate::models::SlotMode;

    fn context() -> DisplayContext {
        DisplayContext::new(RenderSettings::default(), IconStore::with_builtin())
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0, 0.8, 0.8), Rgb888::new(204, 41, 41));
        assert_eq!(hsv_to_rgb(120, 0.8, 0.8), Rgb888::new(41, 204, 41));
        assert_eq!(hsv_to_rgb(240, 0.8, 0.8), Rgb888::new(41, 41, 204));
        assert_eq!(hsv_to_rgb(360, 0.8, 0.8), hsv_to_rgb(0, 0.8, 0.8));
    }

    #[test]
    fn hue_waits_for_interval() {
        let mut ctx = context();
        ctx.last_rainbow_time = 1_000;
        let slot = Slot::new();

        slot.update_screen(&mut ctx, 1_031);
        assert_eq!(ctx.hue, 0);
        slot.update_screen(&mut ctx, 1_032);
        assert_eq!(ctx.hue, 1);
        assert_eq!(ctx.last_rainbow_time, 1_032);
    }

    #[test]
    fn hue_wraps_below_360() {
        let mut ctx = context();
        let slot = Slot::new();
        let interval = ctx.settings.rainbow_interval_ms;

        for tick in 1..=359u64 {
            slot.update_screen(&mut ctx, tick * interval);
            assert_eq!(ctx.hue as u64, tick);
        }
        slot.update_screen(&mut ctx, 360 * interval);
        assert_eq!(ctx.hue, 0);
        assert_eq!(ctx.accent_color, hsv_to_rgb(0, 0.8, 0.8));
    }

    #[test]
    fn icon_advances_once_per_frame_duration() {
        let mut ctx = context();
        let heart = ctx.icons.find("heart").unwrap();
        let slot = Slot {
            mode: SlotMode::IconScreen,
            icon: heart,
            ..Slot::default()
        };
        let frame = |ctx: &DisplayContext| ctx.icons.get(heart).unwrap().current_frame();

        slot.update_screen(&mut ctx, 399);
        assert_eq!(frame(&ctx), 0);
        slot.update_screen(&mut ctx, 400);
        assert_eq!(frame(&ctx), 1);
        slot.update_screen(&mut ctx, 500);
        assert_eq!(frame(&ctx), 1);
        slot.update_screen(&mut ctx, 800);
        assert_eq!(frame(&ctx), 0);

        // a long gap still advances a single frame
        slot.update_screen(&mut ctx, 10_000);
        assert_eq!(frame(&ctx), 1);
        assert_eq!(ctx.last_anim_time, 10_000);
    }

    #[test]
    fn missing_icon_is_ignored() {
        let mut ctx = context();
        let slot = Slot {
            icon: 99,
            ..Slot::default()
        };
        slot.update_screen(&mut ctx, 5_000);
        assert_eq!(ctx.last_anim_time, 0);
    }
}
