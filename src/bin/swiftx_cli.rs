//! SwiftX CLI — 连通性检查、物流轨迹查询、取消订单的命令行工具
//!
//! Usage:
//!   swiftx-cli ping [<n>]                      Round-trip the health check
//!   swiftx-cli track <tracking-no>...          Show tracking history
//!   swiftx-cli cancel <tracking-no>            Cancel an order not yet picked up
//!
//! Global options: `--config <file>` (JSON/YAML), `--debug`.
//! Without `--config`, credentials come from `SWIFTX_*` environment variables.

use anyhow::{bail, Context};
use swiftx_rust::{ClientConfig, SwiftxClient};
use tracing_subscriber::EnvFilter;

struct Options {
    config: Option<String>,
    debug: bool,
    rest: Vec<String>,
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let mut opts = Options {
        config: None,
        debug: false,
        rest: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                opts.config = Some(path.clone());
            }
            "--debug" => opts.debug = true,
            _ => opts.rest.push(arg.clone()),
        }
    }
    Ok(opts)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            cmd_version();
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let opts = parse_options(&args[2..])?;
    init_tracing(opts.debug);

    match args[1].as_str() {
        "ping" => cmd_ping(&opts).await,
        "track" => cmd_track(&opts).await,
        "cancel" => cmd_cancel(&opts).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "swiftx_rust=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_usage() {
    println!(
        r#"swiftx-cli — SwiftX Express 命令行工具

USAGE:
    swiftx-cli <COMMAND> [OPTIONS]

COMMANDS:
    ping [<n>]                  Call /pingPong and print the echoed value
    track <tracking-no>...      Show tracking events for one or more shipments
    cancel <tracking-no>        Cancel an order that has not been picked up
    version                     Show version information
    help                        Show this help message

OPTIONS:
    --config <file>             Load configuration from a JSON or YAML file
    --debug                     Log request/response bodies

ENVIRONMENT:
    SWIFTX_APP_KEY, SWIFTX_APP_SECRET, SWIFTX_ENV (prod|test|dev),
    SWIFTX_TIMEOUT_SECS, SWIFTX_DEBUG, RUST_LOG"#
    );
}

fn cmd_version() {
    println!("swiftx-cli {}", env!("CARGO_PKG_VERSION"));
}

fn build_client(opts: &Options) -> anyhow::Result<SwiftxClient> {
    let mut config = match &opts.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => ClientConfig::from_env().context("loading config from environment")?,
    };
    config.debug |= opts.debug;
    Ok(SwiftxClient::new(config)?)
}

async fn cmd_ping(opts: &Options) -> anyhow::Result<()> {
    let n: i64 = match opts.rest.first() {
        Some(raw) => raw.parse().with_context(|| format!("invalid number {raw:?}"))?,
        None => 1,
    };
    let client = build_client(opts)?;
    let start = std::time::Instant::now();
    let echoed = client.ping().pong(n).await?;
    println!("pong {echoed} ({} ms)", start.elapsed().as_millis());
    Ok(())
}

async fn cmd_track(opts: &Options) -> anyhow::Result<()> {
    if opts.rest.is_empty() {
        bail!("track requires at least one tracking number");
    }
    let client = build_client(opts)?;
    for result in client.orders().tracking(opts.rest.as_slice()).await? {
        if !result.result.success {
            println!("{}: {}", result.tracking_no, result.result.message);
            continue;
        }
        println!("{} ({} events)", result.tracking_no, result.tracking_event_list.len());
        for ev in &result.tracking_event_list {
            println!(
                "  {} {} {:<12} {}",
                ev.local_time, ev.local_gmt_offset, ev.event, ev.description
            );
        }
    }
    Ok(())
}

async fn cmd_cancel(opts: &Options) -> anyhow::Result<()> {
    let Some(tracking_no) = opts.rest.first() else {
        bail!("cancel requires a tracking number");
    };
    let client = build_client(opts)?;
    client.orders().cancel(tracking_no).await?;
    println!("cancelled {tracking_no}");
    Ok(())
}
