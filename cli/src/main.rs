//! CLI entrypoint for RuleMaster
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use rulemaster_application::{
    AnswerQueryInput, AnswerQueryUseCase, FanoutLogSink, LogSink, NoLogSink, RulebookLoader,
};
use rulemaster_domain::Query;
use rulemaster_infrastructure::{ConfigLoader, FsRulebookLoader, GeminiGateway, JsonlLogSink};
use rulemaster_presentation::{ChatRepl, Cli, ConsoleFormatter, ConsoleLogSink, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let mut params = config.consensus.params();
    if let Some(max_rounds) = cli.max_rounds {
        params = params.with_max_rounds(max_rounds);
    }

    info!("Starting RuleMaster (max_rounds = {})", params.max_rounds);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_config(&config)?);

    // Agent log: console unless quiet, plus an optional JSONL file
    let mut sinks: Vec<Arc<dyn LogSink>> = Vec::new();
    if !cli.quiet {
        sinks.push(Arc::new(ConsoleLogSink::new()));
    }
    if let Some(path) = &cli.log_file {
        match JsonlLogSink::new(path) {
            Some(sink) => sinks.push(Arc::new(sink)),
            None => bail!("Could not open agent log file {}", path.display()),
        }
    }
    let sink: Arc<dyn LogSink> = if sinks.is_empty() {
        Arc::new(NoLogSink)
    } else {
        Arc::new(FanoutLogSink::new(sinks))
    };

    // Optional rulebook attachment
    let rulebook_loader: Arc<dyn RulebookLoader> = Arc::new(FsRulebookLoader::new());
    let rulebook = match &cli.rulebook {
        Some(path) => Some(
            rulebook_loader
                .load(path)
                .with_context(|| format!("Failed to load rulebook {}", path.display()))?,
        ),
        None => None,
    };

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(gateway, params, sink, rulebook_loader);
        if let Some(rulebook) = rulebook {
            repl = repl.with_rulebook(rulebook);
        }
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    let Some(query) = Query::try_new(question) else {
        bail!("Question cannot be empty.");
    };

    let mut input = AnswerQueryInput::new(query, params);
    if let Some(rulebook) = rulebook {
        input = input.with_rulebook(rulebook);
    }

    let use_case = AnswerQueryUseCase::new(gateway);
    let deliberation = use_case.execute(input, sink.as_ref()).await?;

    let output = match cli.output {
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&deliberation),
        OutputFormat::Full => ConsoleFormatter::format(&deliberation),
        OutputFormat::Json => ConsoleFormatter::format_json(&deliberation),
    };

    println!();
    println!("{}", output);

    Ok(())
}
