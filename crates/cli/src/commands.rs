//! Ring inspection commands.

use clap::Subcommand;
use corelib::HashRing;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the node owning each key.
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Hash synthetic keys and report how they spread over the nodes.
    Distribution {
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
        #[arg(long, default_value = "key-")]
        prefix: String,
    },
    /// Print every ring position and its owner in ring order.
    Positions,
    /// Count sampled keys whose owner changes when a node joins or leaves.
    Remap {
        #[arg(long, conflicts_with = "remove", required_unless_present = "remove")]
        add: Option<String>,
        #[arg(long)]
        remove: Option<String>,
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
    },
}

/// Output of a command, rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Lookups(Vec<(String, Option<String>)>),
    Distribution {
        samples: usize,
        counts: BTreeMap<String, usize>,
    },
    Positions(Vec<(u32, String)>),
    Remap {
        change: String,
        samples: usize,
        moved: usize,
    },
}

fn sample_key(prefix: &str, i: usize) -> String {
    format!("{}{}", prefix, i)
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

impl Command {
    /// Runs the command against `ring`. `Remap` mutates the ring.
    pub fn execute(&self, ring: &HashRing) -> CommandResult {
        match self {
            Command::Lookup { keys } => CommandResult::Lookups(
                keys.iter().map(|k| (k.clone(), ring.get(k))).collect(),
            ),
            Command::Distribution { samples, prefix } => {
                let mut counts: BTreeMap<String, usize> =
                    ring.nodes().into_iter().map(|n| (n, 0)).collect();
                for i in 0..*samples {
                    if let Some(node) = ring.get(&sample_key(prefix, i)) {
                        *counts.entry(node).or_default() += 1;
                    }
                }
                CommandResult::Distribution {
                    samples: *samples,
                    counts,
                }
            }
            Command::Positions => CommandResult::Positions(ring.positions()),
            Command::Remap {
                add,
                remove,
                samples,
            } => {
                let keys: Vec<String> = (0..*samples).map(|i| sample_key("key-", i)).collect();
                let before: Vec<Option<String>> = keys.iter().map(|k| ring.get(k)).collect();
                let change = match (add, remove) {
                    (Some(node), _) => {
                        ring.add_node(node);
                        format!("add {}", node)
                    }
                    (None, Some(node)) => {
                        ring.remove(node);
                        format!("remove {}", node)
                    }
                    (None, None) => "no change".to_string(),
                };
                let moved = keys
                    .iter()
                    .zip(&before)
                    .filter(|(k, old)| ring.get(k) != **old)
                    .count();
                info!(%change, moved, samples, "remap measured");
                CommandResult::Remap {
                    change,
                    samples: *samples,
                    moved,
                }
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Lookups(lookups) => {
                for (key, node) in lookups {
                    writeln!(f, "{} -> {}", key, node.as_deref().unwrap_or("<empty ring>"))?;
                }
            }
            CommandResult::Distribution { samples, counts } => {
                if counts.is_empty() {
                    writeln!(f, "<empty ring>")?;
                }
                for (node, count) in counts {
                    writeln!(
                        f,
                        "{:<24} {:>8} {:>6.2}%",
                        node,
                        count,
                        percent(*count, *samples)
                    )?;
                }
            }
            CommandResult::Positions(positions) => {
                for (position, node) in positions {
                    writeln!(f, "{:08x} {}", position, node)?;
                }
            }
            CommandResult::Remap {
                change,
                samples,
                moved,
            } => {
                writeln!(
                    f,
                    "{}: {}/{} keys moved ({:.2}%)",
                    change,
                    moved,
                    samples,
                    percent(*moved, *samples)
                )?;
            }
        }
        Ok(())
    }
}
