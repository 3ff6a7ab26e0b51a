use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use mitmprint_core::fingerprint::ja3::compute_ja3;
use mitmprint_core::{classify, parse_hello};

/// TLS `ContentType` for Handshake
const TLS_CONTENT_TYPE_HANDSHAKE: u8 = 0x16;
const TLS_RECORD_HEADER_SIZE: usize = 5;
const MAX_RECORD_LEN: usize = 16384;

#[derive(Parser)]
#[command(name = "mitmprint-proxy")]
#[command(about = "Accept TLS connections and report which browser each ClientHello looks like")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:8443")]
    listen: SocketAddr,

    /// Seconds to wait for each part of the first TLS record
    #[arg(short, long, default_value_t = 10)]
    read_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let listener = TcpListener::bind(cli.listen).await?;

    info!("mitmprint listening on {}", cli.listen);
    info!("Test with: curl -k https://localhost:{}", cli.listen.port());

    let limit = Duration::from_secs(cli.read_timeout);

    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(e) = inspect(stream, peer, limit).await {
                warn!("[{}] {}", peer, e);
            }
            // Connection drops here; the client sees a TLS error.
        });
    }
}

/// Read the first TLS record and fingerprint the ClientHello inside it.
async fn inspect(mut stream: TcpStream, peer: SocketAddr, limit: Duration) -> anyhow::Result<()> {
    let body = read_record(&mut stream, limit).await?;

    // A ClientHello split over several records is decoded as far as the
    // first record goes.
    match summarize(&body) {
        Some(summary) => info!(client = %peer, "{}", summary),
        None => debug!("[{}] no ClientHello fields decoded", peer),
    }
    Ok(())
}

/// Read one TLS handshake record and return its body. Each read must finish
/// within `limit`.
async fn read_record<R>(reader: &mut R, limit: Duration) -> anyhow::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    // content_type(1) + version(2) + length(2)
    let mut header = [0u8; TLS_RECORD_HEADER_SIZE];
    timeout(limit, reader.read_exact(&mut header))
        .await
        .context("timed out reading TLS record header")??;

    if header[0] != TLS_CONTENT_TYPE_HANDSHAKE {
        anyhow::bail!("not a TLS handshake (got 0x{:02x})", header[0]);
    }

    let record_len = u16::from_be_bytes([header[3], header[4]]) as usize;
    if record_len > MAX_RECORD_LEN {
        anyhow::bail!("record too large: {} bytes", record_len);
    }

    let mut body = vec![0u8; record_len];
    timeout(limit, reader.read_exact(&mut body))
        .await
        .context("timed out reading TLS record body")??;
    Ok(body)
}

/// One-line description of a handshake record body, or `None` when nothing
/// could be decoded from it.
fn summarize(body: &[u8]) -> Option<String> {
    let hello = parse_hello(body);
    if hello.is_empty() {
        return None;
    }

    let classification = classify(&hello);
    let ja3 = compute_ja3(&hello);
    let matched: Vec<String> = classification
        .matches()
        .iter()
        .map(|b| b.to_string())
        .collect();

    Some(format!(
        "version=0x{:04x} ciphers={} extensions={} ja3={} looks like: {}",
        hello.version,
        hello.cipher_suites.len(),
        hello.extensions.len(),
        ja3.hash,
        if matched.is_empty() { "(no known browser)".to_string() } else { matched.join(", ") }
    ))
}
