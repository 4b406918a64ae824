//! CLI entry point for the tranco rank lookup tool.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tranco::{ListConfig, ListSpec, RankError, TrancoList};

mod cli;

use cli::Args;

/// One looked-up domain in `--json` output; `rank` is null when the domain
/// is not in the list.
#[derive(Serialize)]
struct RankRecord<'a> {
    domain: &'a str,
    rank: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let spec = ListSpec::new(args.date.as_str(), args.subdomains, args.scale);
    let mut config = ListConfig {
        progress: !args.quiet,
        ..ListConfig::default()
    };
    if let Some(dir) = args.cache_dir {
        config.cache_root = dir;
    }

    let mut list = TrancoList::with_config(spec, config).await?;
    info!(id = %list.id(), path = %list.file_path().display(), "list ready");

    let mut missing = 0_usize;
    let mut records = Vec::with_capacity(args.domains.len());
    for domain in &args.domains {
        match list.rank(domain).await {
            Ok(rank) => records.push(RankRecord {
                domain: domain.as_str(),
                rank: Some(rank),
            }),
            Err(RankError::NotFound { .. }) => {
                warn!(domain = %domain, "domain not in list");
                missing += 1;
                records.push(RankRecord {
                    domain: domain.as_str(),
                    rank: None,
                });
            }
            Err(err) => return Err(err.into()),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            match record.rank {
                Some(rank) => println!("{},{rank}", record.domain),
                None => println!("{},not-found", record.domain),
            }
        }
    }

    if missing > 0 {
        anyhow::bail!("{missing} domain(s) not found in list");
    }

    Ok(())
}
