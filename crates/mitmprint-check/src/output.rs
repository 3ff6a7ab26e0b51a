use serde::Serialize;

use mitmprint_core::fingerprint::ja3::Ja3Result;
use mitmprint_core::{Classification, ParsedHello};

use crate::useragent::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Invalid output format '{}'. Expected 'text' or 'json'.", s),
        }
    }
}

/// Everything one check produces.
pub struct Report<'a> {
    pub hello: &'a ParsedHello,
    pub classification: &'a Classification,
    pub ja3: &'a Ja3Result,
    pub verdict: Option<&'a Verdict>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    tls_version: String,
    cipher_suites: usize,
    extensions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    hello: Option<&'a ParsedHello>,
    classification: &'a Classification,
    ja3_hash: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ja3_raw: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'a Verdict>,
}

pub fn print_report(report: &Report<'_>, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text(report, verbose);
            Ok(())
        }
        OutputFormat::Json => print_json(report, verbose),
    }
}

fn hex_list(values: &[u16]) -> String {
    values
        .iter()
        .map(|v| format!("0x{:04x}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text(report: &Report<'_>, verbose: bool) {
    let hello = report.hello;
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  TLS ver:    0x{:04x}", hello.version);
    println!("  Ciphers:    {} suites", hello.cipher_suites.len());
    println!("  Extensions: {} types", hello.extensions.len());
    if verbose {
        println!("  Cipher ids: {}", hex_list(&hello.cipher_suites));
        println!("  Ext ids:    {}", hex_list(&hello.extensions));
        println!("  Curves:     {}", hex_list(&hello.curves));
        println!("  Points:     {:?}", hello.points);
        println!("  Compress:   {:?}", hello.compression_methods);
    }
    println!("  ──────────────────────────────────────────────────");
    println!("  JA3:        {}", report.ja3.hash);
    if verbose {
        println!("  JA3 raw:    {}", report.ja3.raw_string);
    }
    let matched = report.classification.matches();
    if matched.is_empty() {
        println!("  Looks like: (no known browser)");
    } else {
        let names: Vec<String> = matched.iter().map(|b| b.to_string()).collect();
        println!("  Looks like: {}", names.join(", "));
    }
    if let Some(verdict) = report.verdict {
        println!("  ──────────────────────────────────────────────────");
        match verdict.claimed {
            Some(b) => println!("  Claimed:    {}", b),
            None => println!("  Claimed:    (unrecognized)"),
        }
        println!("  Verdict:    {}", verdict.summary());
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn print_json(report: &Report<'_>, verbose: bool) -> anyhow::Result<()> {
    let record = JsonRecord {
        tls_version: format!("0x{:04x}", report.hello.version),
        cipher_suites: report.hello.cipher_suites.len(),
        extensions: report.hello.extensions.len(),
        hello: if verbose { Some(report.hello) } else { None },
        classification: report.classification,
        ja3_hash: &report.ja3.hash,
        ja3_raw: if verbose {
            Some(&report.ja3.raw_string)
        } else {
            None
        },
        verdict: report.verdict,
    };

    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}
