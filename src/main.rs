use anyhow::{bail, Context};
use orderflow_provider::config::provider::MAX_DEPTH;
use orderflow_provider::config::ProviderConfig;
use orderflow_provider::orderbook::{
    analyze_batch, extract_features, BookSynthesizer, OrderBookAnalyzer, OrderBookReport,
    RateLimiter,
};
use orderflow_provider::quotes::QuoteClient;
use orderflow_provider::report;
use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_TICKERS: [&str; 3] = ["AAPL", "TSLA", "GOOGL"];

/// What the binary writes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Markdown,
    Json,
    Features,
    Schema,
}

#[derive(Debug)]
struct CliArgs {
    tickers: Vec<String>,
    depth: Option<usize>,
    interval_ms: Option<u64>,
    seed: Option<u64>,
    output: OutputMode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if cli.output == OutputMode::Schema {
        let schema = schemars::schema_for!(OrderBookReport);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let mut config = ProviderConfig::from_env().context("Invalid ORDERFLOW_* environment")?;
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.batch_interval = Duration::from_millis(interval_ms);
    }
    config.validate().context("Invalid command-line options")?;

    tracing::info!(
        quote_url = %config.quote_base_url,
        depth = config.depth,
        interval_ms = config.batch_interval.as_millis() as u64,
        tickers = cli.tickers.len(),
        "Starting order-flow batch"
    );

    let quotes = QuoteClient::new(&config.quote_base_url, config.request_timeout)
        .context("Failed to build quote client")?;
    let books = match cli.seed {
        Some(seed) => BookSynthesizer::seeded(seed),
        None => BookSynthesizer::from_entropy(),
    };
    let limiter = RateLimiter::with_interval(config.batch_interval, config.queue_timeout);
    let mut analyzer = OrderBookAnalyzer::new(quotes, books);

    let outcome = analyze_batch(&mut analyzer, cli.tickers.as_slice(), config.depth, &limiter).await;

    match cli.output {
        OutputMode::Markdown => print!("{}", report::render_batch(&outcome)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputMode::Features => {
            let features: BTreeMap<&str, BTreeMap<&'static str, f64>> = cli
                .tickers
                .iter()
                .map(|t| (t.as_str(), extract_features(outcome.get(t))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&features)?);
        }
        OutputMode::Schema => {}
    }

    if outcome.reports.is_empty() && !outcome.failed.is_empty() {
        bail!("No ticker could be analyzed ({} failed)", outcome.failed.len());
    }

    Ok(())
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs {
        tickers: Vec::new(),
        depth: None,
        interval_ms: None,
        seed: None,
        output: OutputMode::Markdown,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" => {
                let value = option_value(args, i)?;
                cli.depth = Some(
                    value
                        .parse()
                        .with_context(|| format!("--depth expects 1-{}, got {:?}", MAX_DEPTH, value))?,
                );
                i += 1;
            }
            "--interval-ms" => {
                let value = option_value(args, i)?;
                cli.interval_ms = Some(
                    value
                        .parse()
                        .with_context(|| format!("--interval-ms expects milliseconds, got {:?}", value))?,
                );
                i += 1;
            }
            "--seed" => {
                let value = option_value(args, i)?;
                cli.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("--seed expects an integer, got {:?}", value))?,
                );
                i += 1;
            }
            "--json" => cli.output = OutputMode::Json,
            "--features" => cli.output = OutputMode::Features,
            "--schema" => cli.output = OutputMode::Schema,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            ticker => cli.tickers.push(ticker.to_uppercase()),
        }
        i += 1;
    }

    if cli.tickers.is_empty() {
        cli.tickers = DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect();
    }

    Ok(cli)
}

fn option_value(args: &[String], i: usize) -> anyhow::Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} requires a value", args[i]),
    }
}

/// Print usage information
fn print_usage() {
    println!("Order-Flow Provider - synthetic order book analysis and trading signals");
    println!();
    println!("USAGE:");
    println!("    orderflow-provider [OPTIONS] [TICKER...]");
    println!();
    println!("ARGS:");
    println!("    TICKER...             Symbols to analyze (default: AAPL TSLA GOOGL)");
    println!();
    println!("OPTIONS:");
    println!("    --depth <N>           Price levels per side, 1-{} (default: 10)", MAX_DEPTH);
    println!("    --interval-ms <MS>    Minimum spacing between quote requests (default: 500, 0 disables)");
    println!("    --seed <SEED>         Seed the liquidity generator for reproducible books");
    println!("    --json                Print the batch outcome as JSON");
    println!("    --features            Print per-ticker feature maps as JSON");
    println!("    --schema              Print the JSON schema of a report and exit");
    println!("    --help, -h            Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    ORDERFLOW_QUOTE_URL           Quote API base URL (default: https://query1.finance.yahoo.com)");
    println!("    ORDERFLOW_TIMEOUT_SECS        HTTP request timeout (default: 10)");
    println!("    ORDERFLOW_DEPTH               Price levels per side (default: 10)");
    println!("    ORDERFLOW_BATCH_INTERVAL_MS   Minimum spacing between quote requests (default: 500)");
    println!("    ORDERFLOW_QUEUE_TIMEOUT_SECS  Max wait for a rate-limit permit (default: 30)");
    println!("    RUST_LOG                      Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Markdown report for the default tickers");
    println!("    orderflow-provider");
    println!();
    println!("    # Reproducible JSON for two symbols with 20 levels");
    println!("    orderflow-provider --depth 20 --seed 42 --json MSFT NVDA");
}
