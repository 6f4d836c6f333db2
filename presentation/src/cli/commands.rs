//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final answer
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Only the final answer
    Answer,
    /// Full transcript with every round's drafts and verdicts
    Full,
    /// JSON record of the whole deliberation
    Json,
}

/// CLI arguments for rulemaster
#[derive(Parser, Debug)]
#[command(name = "rulemaster")]
#[command(version, about = "Board-game rules assistant backed by a three-agent tribunal")]
#[command(long_about = r#"
RuleMaster answers board-game rules questions through a three-agent tribunal:

1. Scholar drafts a minimal answer while Sceptic hunts for edge cases (in parallel)
2. Auditor cross-references both and verifies or rejects the draft
3. Rejections feed the next round (up to 3); if all fail, a best-effort
   synthesis becomes the answer

Attach a rulebook PDF with --rulebook to ground every agent in the actual rules.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./rulemaster.toml      Project-level config
3. ~/.config/rulemaster/config.toml   Global config

Example:
  rulemaster "How many cards does each player draw?"
  rulemaster --rulebook catan.pdf "Can I trade during another player's turn?"
  rulemaster --chat --rulebook catan.pdf
"#)]
pub struct Cli {
    /// The rules question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Rulebook PDF to ground the tribunal in
    #[arg(short, long, value_name = "PATH")]
    pub rulebook: Option<PathBuf>,

    /// Override the number of draft-audit rounds
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "answer")]
    pub output: OutputFormat,

    /// Write the agent log to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the live agent log
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
