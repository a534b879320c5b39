//! Command line options and ring construction.

use crate::commands::Command;
use anyhow::{Context, Result};
use clap::Parser;
use corelib::{HashKind, HashRing, RingBuilder, RingConfig};
use std::path::PathBuf;
use tracing::{debug, Level};

/// Inspect consistent hash rings.
#[derive(Parser, Debug)]
#[command(name = "ringctl")]
#[command(author, version, about, long_about = None)]
pub struct CliConfig {
    /// JSON ring config (`replicas`, `hash`, `nodes`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Virtual nodes per node (0 = library default).
    #[arg(short, long, global = true)]
    pub replicas: Option<usize>,

    /// Hash algorithm (crc32, xxh3, sip13).
    #[arg(long, global = true)]
    pub hash: Option<HashKind>,

    /// Node to place on the ring (repeatable).
    #[arg(short, long = "node", global = true)]
    pub nodes: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Merges the config file (if any) with command line overrides.
    pub fn ring_config(&self) -> Result<RingConfig> {
        let mut config = match &self.config {
            Some(path) => RingConfig::load(path)
                .with_context(|| format!("loading ring config {}", path.display()))?,
            None => RingConfig::default(),
        };
        if let Some(replicas) = self.replicas {
            config.replicas = replicas;
        }
        if let Some(hash) = self.hash {
            config.hash = hash;
        }
        config.nodes.extend(self.nodes.iter().cloned());
        Ok(config)
    }

    pub fn build_ring(&self) -> Result<HashRing> {
        let config = self.ring_config()?;
        debug!(?config, "building ring");
        Ok(RingBuilder::from_config(&config).build())
    }

    /// Builds the ring and runs the selected command, printing its output.
    pub fn run(&self) -> Result<()> {
        let ring = self.build_ring()?;
        let result = self.command.execute(&ring);
        print!("{}", result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_build_ring() {
        let cli = CliConfig::try_parse_from([
            "ringctl", "-r", "4", "--hash", "xxh3", "-n", "a", "-n", "b", "lookup", "k1",
        ])
        .unwrap();
        let ring = cli.build_ring().unwrap();
        assert_eq!(ring.replicas(), 4);
        assert_eq!(ring.hash_name(), "xxh3");
        assert_eq!(ring.nodes(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unknown_hash_rejected() {
        assert!(CliConfig::try_parse_from(["ringctl", "--hash", "md5", "positions"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("ringctl-test-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"replicas": 2, "hash": "sip13", "nodes": ["a"]}}"#).unwrap();

        let cli = CliConfig::try_parse_from([
            "ringctl",
            "--config",
            path.to_str().unwrap(),
            "-r",
            "5",
            "-n",
            "b",
            "positions",
        ])
        .unwrap();
        let config = cli.ring_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.replicas, 5);
        assert_eq!(config.hash, HashKind::Sip13);
        assert_eq!(config.nodes, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::try_parse_from([
            "ringctl",
            "--config",
            "/nonexistent/ring.json",
            "positions",
        ])
        .unwrap();
        let err = cli.ring_config().unwrap_err();
        assert!(err.to_string().contains("loading ring config"));
    }

    #[test]
    fn test_verbosity() {
        let cli = CliConfig::try_parse_from(["ringctl", "-vv", "positions"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
    }
}
