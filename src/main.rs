use chrono::Local;
use colored::*;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};
use matrix_slot::config::{init_config, DisplayConfig};
use matrix_slot::display::canvas::MatrixCanvas;
use matrix_slot::display::clock::SystemClock;
use matrix_slot::display::context::DisplayContext;
use matrix_slot::display::icons::IconStore;
use matrix_slot::display::update_loop::{display_loop, LoopOptions, SlotRunner};
use matrix_slot::display::{MATRIX_HEIGHT, MATRIX_WIDTH};
use matrix_slot::models::Slot;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

// Global shutdown flag
static SHUTDOWN_FLAG: AtomicBool = AtomicBool::new(false);

#[tokio::main]
async fn main() {
    // Initialize the logger with a custom format that includes timestamps and colors
    Builder::new()
        .format(|buf, record| {
            // Color based on log level
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().purple(),
            };

            // Apply appropriate colors to the message based on level
            let message = match record.level() {
                log::Level::Error => record.args().to_string().red(),
                log::Level::Warn => record.args().to_string().yellow(),
                log::Level::Info => record.args().to_string().normal(),
                log::Level::Debug => record.args().to_string().blue(),
                log::Level::Trace => record.args().to_string().purple(),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                message
            )
        })
        .filter(None, LevelFilter::Info) // Set default log level to Info
        .parse_env("RUST_LOG") // Allow overriding with RUST_LOG environment variable
        .init();

    info!("Starting matrix slot renderer");

    let display_config = init_config();

    if let Err(errors) = display_config.validate() {
        for error in errors {
            error!("{}", error);
        }
        std::process::exit(1);
    }

    let icons = match load_icons(&display_config) {
        Ok(icons) => icons,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut ctx = DisplayContext::new(display_config.render_settings(), icons);
    ctx.display_gauge = display_config.display_gauge;
    ctx.show_day_of_month = display_config.show_day_of_month;

    let canvas = MatrixCanvas::new(MATRIX_WIDTH, MATRIX_HEIGHT);

    let slot = match build_slot(&display_config, &ctx, &canvas) {
        Ok(slot) => slot,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut runner = SlotRunner::new(slot, ctx, canvas, SystemClock);
    if display_config.hold != 0 {
        runner.slot.hold_slot(display_config.hold);
    }

    // Set up signal handler for clean shutdown
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received termination signal, shutting down...");
        SHUTDOWN_FLAG.store(true, Ordering::SeqCst);
    }) {
        error!("Error setting Ctrl-C handler: {}", e);
    }

    let options = LoopOptions {
        tick_ms: display_config.tick_ms,
        preview_every: display_config
            .preview
            .then_some(display_config.preview_every),
    };

    display_loop(runner, options, &SHUTDOWN_FLAG).await;

    info!("Application exiting");
}

fn load_icons(config: &DisplayConfig) -> Result<IconStore, String> {
    let mut icons = IconStore::with_builtin();
    if let Some(path) = &config.icons_file {
        icons.load_file(Path::new(path))?;
    }
    Ok(icons)
}

/// Populate a slot from the configuration and compute its timing.
fn build_slot(
    config: &DisplayConfig,
    ctx: &DisplayContext,
    canvas: &MatrixCanvas,
) -> Result<Slot, String> {
    let mut slot = Slot {
        mode: config.mode,
        text: config.text.clone(),
        text_color: config.text_color,
        default_font: config.default_font,
        screen_time: config.screen_time,
        ..Slot::default()
    };

    if let Some(name) = &config.icon {
        slot.icon = ctx
            .icons
            .find(name)
            .ok_or_else(|| format!("Unknown icon '{}'", name))?;
        slot.icon_name = name.clone();
    }

    if slot.mode.is_scrolling() && slot.text.is_empty() {
        warn!("Mode '{}' has no text to show", slot.mode);
    }

    let text = slot.text.clone();
    slot.calc_scroll_time(&text, config.screen_time, canvas, &ctx.settings);
    Ok(slot)
}
