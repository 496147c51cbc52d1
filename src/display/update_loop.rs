use crate::display::canvas::MatrixCanvas;
use crate::display::clock::Clock;
use crate::display::context::DisplayContext;
use crate::models::Slot;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Drives one slot on one matrix, tick by tick.
pub struct SlotRunner<C: Clock> {
    pub slot: Slot,
    pub ctx: DisplayContext,
    pub canvas: MatrixCanvas,
    clock: C,
    last_scroll_time: u64,
}

impl<C: Clock> SlotRunner<C> {
    pub fn new(slot: Slot, ctx: DisplayContext, canvas: MatrixCanvas, clock: C) -> Self {
        let mut runner = Self {
            slot,
            ctx,
            canvas,
            clock,
            last_scroll_time: 0,
        };
        let now = runner.clock.now().timestamp();
        runner.activate(now);
        runner
    }

    /// Restart the slot at wall-clock second `now`.
    pub fn activate(&mut self, now: i64) {
        self.slot.last_time = now;
        self.slot.endtime = now + self.slot.screen_time as i64;
        self.ctx.scroll_step = 0;
        info!("Showing {}", self.slot.status());
    }

    /// Render one frame at tick time `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_scroll_time) >= self.ctx.settings.scroll_interval_ms {
            self.ctx.advance_scroll(self.slot.scroll_reset);
            self.last_scroll_time = now_ms;
        }

        self.canvas.fill(Rgb888::BLACK);
        self.slot
            .draw(&mut self.ctx, &mut self.canvas, &self.clock, now_ms);

        let now = self.clock.now().timestamp();
        if self.ctx.running && now >= self.slot.endtime {
            debug!("Slot expired at {}, showing it again", self.slot.endtime);
            self.activate(now);
        }
    }

    /// Blank the matrix and stop all drawing.
    pub fn shutdown(&mut self) {
        self.ctx.running = false;
        self.canvas.fill(Rgb888::BLACK);
    }
}

/// Terminal preview cadence
#[derive(Clone, Copy, Debug)]
pub struct LoopOptions {
    pub tick_ms: u64,
    pub preview_every: Option<u32>,
}

// Display loop function that manages the update cycle
pub async fn display_loop<C: Clock>(
    mut runner: SlotRunner<C>,
    options: LoopOptions,
    shutdown: &AtomicBool,
) {
    info!("Starting display update loop ({} ms tick)", options.tick_ms);
    let start = Instant::now();
    let mut interval = tokio::time::interval(Duration::from_millis(options.tick_ms.max(1)));
    let mut frame_count: u32 = 0;
    let mut ticks: u64 = 0;
    let mut last_stats_time = Instant::now();

    loop {
        interval.tick().await;

        if shutdown.load(Ordering::SeqCst) {
            runner.shutdown();
            info!("Display loop stopped");
            break;
        }

        let now_ms = start.elapsed().as_millis() as u64;
        runner.tick(now_ms);
        ticks += 1;

        if let Some(every) = options.preview_every {
            if ticks % every.max(1) as u64 == 0 {
                println!("{}\n", runner.canvas.render_ansi());
            }
        }

        // Log performance stats periodically
        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_stats_time).as_secs() >= 60 {
            let fps = frame_count as f32 / now.duration_since(last_stats_time).as_secs_f32();
            info!("Display performance: {:.1} FPS", fps);
            frame_count = 0;
            last_stats_time = now;
        }
    }
}
