//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use tranco::ListScale;

/// Look up domain popularity ranks in the Tranco top-sites list.
///
/// Resolves the requested daily list, downloads it into the local cache on
/// first use, and prints one rank per queried domain.
#[derive(Parser, Debug)]
#[command(name = "tranco")]
#[command(author, version, about)]
pub struct Args {
    /// Domains to look up
    #[arg(required = true)]
    pub domains: Vec<String>,

    /// List date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Use the FQDN list (subdomains included) instead of registered domains
    #[arg(short, long)]
    pub subdomains: bool,

    /// List scale
    #[arg(long, value_enum, default_value_t = ListScale::Top1m)]
    pub scale: ListScale,

    /// Cache directory override (defaults to ~/.tranco)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output and the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
