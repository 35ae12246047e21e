use anyhow::Context;
use astracore::shell::{CenterView, DetailPanel, Tab};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::DashboardConfig;
use workflow::runner::{Runner, SceneSnapshot};
use workflow::scan::{run_scan, ScanOutcome};

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the ASTRA SIGINT dashboard")]
struct Args {
    /// Load dashboard settings (and optionally a signal list) from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 2.0)]
    radius: f64,
    #[arg(long, default_value_t = 3.8)]
    max_distance: f64,
    /// Seed for the synthetic spectrum
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Select a signal by id before rendering
    #[arg(long)]
    select: Option<u32>,
    /// overview, signals, map or analytics
    #[arg(long)]
    tab: Option<String>,
    /// Run the simulated scan to completion (Ctrl+C cancels)
    #[arg(long, default_value_t = false)]
    scan: bool,
    /// Write the scene snapshot as JSON
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        DashboardConfig::load(path)?
    } else {
        DashboardConfig::from_args(args.radius, args.max_distance, args.seed)
    };

    let runner = Runner::new(config.clone());
    let mut shell = config.build_shell()?;

    if let Some(id) = args.select {
        shell
            .select_signal(id)
            .with_context(|| format!("selecting signal {}", id))?;
    }
    if let Some(name) = args.tab.as_deref() {
        shell
            .switch_tab_named(name)
            .with_context(|| format!("switching to tab {}", name))?;
    }

    if args.scan {
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for the scan timer")?;
        let period = config.tick_interval();
        let outcome = runtime.block_on(run_scan(&mut shell, period, async {
            if signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        }));
        match outcome {
            ScanOutcome::Completed { ticks } => println!("Scan finished after {} ticks", ticks),
            ScanOutcome::Cancelled { progress } => println!("Scan cancelled at {}%", progress),
            ScanOutcome::AlreadyRunning => println!("Scan already running"),
        }
    }

    let snapshot = runner.execute(&shell);
    print_summary(&shell, &snapshot);

    if let Some(path) = args.export {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating export directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&snapshot).context("serializing scene snapshot")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Scene snapshot written to {}", path.display());
    }

    Ok(())
}

fn print_summary(shell: &astracore::shell::DashboardShell, snapshot: &SceneSnapshot) {
    let view = match shell.center_view() {
        CenterView::Globe => "globe".to_string(),
        CenterView::SignalAnalysis(signal) => format!("signal analysis ({})", signal.kind),
        CenterView::NoSignalSelected => "no signal selected".to_string(),
        CenterView::Radar => "tactical radar".to_string(),
        CenterView::Analytics => "analytics dashboard".to_string(),
    };
    println!("Tab {} -> {}", shell.active_tab().label(), view);

    match shell.detail_panel() {
        DetailPanel::Signal(signal) => println!(
            "Selected #{} {} [{}] {} @ {} ({}%)",
            signal.id,
            signal.kind,
            signal.threat,
            signal.frequency,
            signal.location,
            signal.strength
        ),
        DetailPanel::Empty => println!("No signal selected"),
    }

    if shell.active_tab() == Tab::Map {
        for blip in &snapshot.radar.blips {
            println!(
                "  blip #{} {:<18} x {:>7.3} z {:>7.3}",
                blip.signal_id, blip.label, blip.position.x, blip.position.z
            );
        }
    } else {
        for marker in &snapshot.globe.markers {
            println!(
                "  marker #{} {:<18} ({:.3}, {:.3}, {:.3})",
                marker.signal_id,
                marker.label,
                marker.position.x,
                marker.position.y,
                marker.position.z
            );
        }
    }

    for share in &snapshot.distribution.shares {
        println!(
            "  {:<8} {} ({:.1}%)",
            share.level, share.count, share.percentage
        );
    }
    println!(
        "Spectrum: {} bins above threshold, mean power {:.2}",
        snapshot.spectrum_bins_above_threshold, snapshot.spectrum_mean_power
    );
    for notification in snapshot.notifications.iter().take(5) {
        println!("  [{:?}] {}", notification.kind, notification.message);
    }
}
