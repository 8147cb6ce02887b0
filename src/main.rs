use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};

use router_summary::constants::feed::TEXT_BAR_WIDTH;
use router_summary::feed::{self, DynFeedReader, SnapshotFeed};
use router_summary::logging::{init_headless_logging, init_tui_logging};
use router_summary::tui::{self, DashboardApp, LogBuffer};
use router_summary::{
    Args, RouterConfig, SharedChart, SharedMarkup, TextBarChart, TextTemplate, TreeCollector,
    create_router_summary, load_router_config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if args.headless {
        let _guard = init_headless_logging();
        rt.block_on(run_headless(args))
    } else {
        let (logs, _guard) = init_tui_logging();
        rt.block_on(run_dashboard(args, logs))
    }
}

/// Load the router config named on the command line, if any
fn router_config(args: &Args) -> Result<Option<RouterConfig>> {
    args.config
        .as_ref()
        .map(|path| load_router_config(path.as_str()))
        .transpose()
}

async fn open_feed(args: &Args) -> Result<SnapshotFeed<DynFeedReader>> {
    let feed = SnapshotFeed::open(&args.snapshots).await?;
    info!(
        "Reading snapshots from {} every {:?}",
        args.snapshots.display(),
        args.interval()
    );
    Ok(feed)
}

async fn run_headless(args: Args) -> Result<()> {
    let config = router_config(&args)?;
    let snapshots = open_feed(&args).await?;

    let collector = TreeCollector::new();
    let markup = SharedMarkup::new();
    let _subscription = create_router_summary(
        &collector,
        markup.clone(),
        TextBarChart::new(std::io::stdout(), TEXT_BAR_WIDTH),
        TextTemplate::single_line(),
        args.router.clone(),
        config.as_ref(),
    );
    println!("{}", markup.markup());

    let printer = markup.clone();
    let replay = tokio::spawn(feed::replay(
        snapshots,
        collector.clone(),
        args.interval(),
        move || println!("{}", printer.markup()),
    ));

    tokio::select! {
        result = replay => {
            result??;
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn run_dashboard(args: Args, logs: LogBuffer) -> Result<()> {
    let config = router_config(&args)?;
    let snapshots = open_feed(&args).await?;

    let collector = TreeCollector::new();
    let markup = SharedMarkup::new();
    let chart = SharedChart::new();
    let _subscription = create_router_summary(
        &collector,
        markup.clone(),
        chart.clone(),
        TextTemplate::multi_line(),
        args.router.clone(),
        config.as_ref(),
    );

    let app = DashboardApp::new(args.router.clone(), markup, chart).with_logs(logs);
    let feed_handle = app.feed_handle();
    let interval = args.interval();

    // The dashboard signals on `shutdown_tx` when the user quits
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
    let (tui_shutdown_tx, tui_shutdown_rx) = mpsc::channel::<()>(1);

    let tui_handle = tokio::spawn(async move {
        if let Err(e) = tui::run_tui(app, shutdown_tx, tui_shutdown_rx).await {
            error!("TUI error: {}", e);
        }
    });

    let replay = tokio::spawn(async move {
        if let Err(e) = feed::replay(snapshots, collector, interval, || {}).await {
            error!("Snapshot feed failed: {}", e);
        }
        feed_handle.finish();
    });

    tokio::select! {
        _ = shutdown_rx.recv() => {
            info!("Dashboard closed");
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            let _ = tui_shutdown_tx.send(()).await;
        }
    }

    replay.abort();
    tui_handle.await?;
    Ok(())
}
