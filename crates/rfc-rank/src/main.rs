//! rfc-rank - list the local RFC index, ranked by a fuzzy filter
//!
//! Usage:
//!     rfc-rank --filter http
//!     rfc-rank --filter tls --rfc-dir ~/rfcs --scores
//!     cat rfc_list.txt | rfc-rank --list - --filter quic

mod index;
mod logging;
mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rfc_rank_core::{EngineConfig, Ranker};
use tracing::{debug, info};

use crate::index::IndexSource;

#[derive(Parser, Debug)]
#[command(name = "rfc-rank")]
#[command(about = "Rank the local RFC index against a fuzzy filter")]
#[command(version)]
struct Args {
    /// Fuzzy filter; empty prints the index unranked
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Index file to read, `-` for stdin (default: <rfc-dir>/rfc_list.txt)
    #[arg(short, long)]
    list: Option<PathBuf>,

    /// Directory holding rfc_list.txt (default: ~/.rfc_dirs_nvim)
    #[arg(long)]
    rfc_dir: Option<PathBuf>,

    /// JSON engine config (weights, pool_size, max_match_len, deadline_ms)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each line's score
    #[arg(long)]
    scores: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_with_filter(&args.log_level);

    let config = match &args.config {
        Some(path) => {
            info!("Loading engine config from {}", path.display());
            EngineConfig::from_path(path)?
        }
        None => EngineConfig::default(),
    };

    let source = IndexSource::resolve(args.list.as_deref(), args.rfc_dir.as_deref())?;
    debug!(?source, "reading index");
    let lines = source.read()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.filter.is_empty() {
        output::write_lines(&mut out, &lines)?;
    } else {
        let ranker = Ranker::new(config)?;
        let ranked = ranker.rank_scored(&args.filter, &lines);
        info!(filter = %args.filter, total = lines.len(), matched = ranked.len(), "ranked index");

        if args.scores {
            output::write_scored(&mut out, &ranked)?;
        } else {
            let names: Vec<&str> = ranked.iter().map(|r| r.candidate.as_str()).collect();
            output::write_lines(&mut out, &names)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["rfc-rank"]);
        assert_eq!(args.filter, "");
        assert!(args.list.is_none());
        assert!(!args.scores);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_full() {
        let args = Args::parse_from([
            "rfc-rank", "-f", "http", "--list", "-", "--scores", "--config", "w.json",
        ]);
        assert_eq!(args.filter, "http");
        assert_eq!(args.list, Some(PathBuf::from("-")));
        assert_eq!(args.config, Some(PathBuf::from("w.json")));
        assert!(args.scores);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
