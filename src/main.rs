use anyhow::Context;
use sv_tracker::application::tracker_session::TrackerSession;
use sv_tracker::config::Config;
use sv_tracker::infrastructure::record_store::RecordStore;
use sv_tracker::interfaces::ui::{TrackerApp, configure_fonts};

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

/// Forwards each formatted log line to the status bar. Lines are dropped
/// when the bar falls behind.
#[derive(Clone)]
struct StatusBarSink {
    lines: crossbeam_channel::Sender<String>,
}

impl std::io::Write for StatusBarSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let _ = self.lines.try_send(line.trim().to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for StatusBarSink {
    type Writer = StatusBarSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env
    dotenvy::dotenv().ok();

    // 1. Logging (stdout + status bar)
    let (log_tx, log_rx) = crossbeam_channel::bounded(256);

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(StatusBarSink { lines: log_tx })
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_level(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    // 2. Config + store
    let config = Config::from_env().context("Failed to load config")?;
    info!(
        "Using data directory {:?} ({:?} parsing)",
        config.data_dir, config.parse_policy
    );

    let store = RecordStore::open(&config.data_dir, config.categories, config.parse_policy)
        .context("Failed to open results directory")?;

    // 3. Session on today's file
    let today = chrono::Local::now().date_naive();
    let session = TrackerSession::open(store, today).context("Failed to load today's results")?;
    let app = TrackerApp::new(session, Some(log_rx));

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([350.0, 400.0])
            .with_resizable(false)
            .with_title("SV Tracker"),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "SV Tracker",
        native_options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
