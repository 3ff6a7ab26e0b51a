use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use mitmprint_core::fingerprint::ja3::compute_ja3;
use mitmprint_core::{classify, parse_hello, Browser};

mod input;
mod output;
mod useragent;

use output::{OutputFormat, Report};
use useragent::{claimed_browser, Verdict};

#[derive(Parser)]
#[command(name = "mitmprint-check")]
#[command(about = "Check a captured ClientHello against the browser a client claims to be")]
struct Cli {
    /// Hex-encoded ClientHello handshake message (header optional).
    /// Read from --file or stdin when omitted.
    hello: Option<String>,

    /// File containing the hex-encoded ClientHello
    #[arg(short, long, conflicts_with = "hello")]
    file: Option<PathBuf>,

    /// User-Agent header sent on the same connection
    #[arg(short, long)]
    user_agent: Option<String>,

    /// Claimed browser family, instead of deriving it from --user-agent
    #[arg(short, long, conflicts_with = "user_agent")]
    claimed: Option<Browser>,

    /// Output format: "text" (human-readable) or "json" (one object)
    #[arg(short, long, default_value = "text")]
    output: String,

    /// Print decoded fields and the raw JA3 string
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let format = OutputFormat::parse(&cli.output)?;

    let raw = input::read_hello(cli.hello.as_deref(), cli.file.as_deref())
        .context("reading ClientHello")?;
    debug!("read {} ClientHello bytes", raw.len());

    let hello = parse_hello(&raw);
    if hello.is_empty() {
        info!("no ClientHello fields could be decoded");
    }
    let classification = classify(&hello);
    let ja3 = compute_ja3(&hello);

    let claimed = match (cli.claimed, cli.user_agent.as_deref()) {
        (Some(b), _) => Some(Some(b)),
        (None, Some(ua)) => Some(claimed_browser(ua)),
        (None, None) => None,
    };
    let verdict = claimed.map(|c| Verdict::new(c, &hello, &classification));

    output::print_report(
        &Report {
            hello: &hello,
            classification: &classification,
            ja3: &ja3,
            verdict: verdict.as_ref(),
        },
        format,
        cli.verbose,
    )
}
