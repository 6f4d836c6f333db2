//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Each question is processed to completion before the next line is read,
//! which is what enforces the one-deliberation-at-a-time invariant.

use crate::ConsoleFormatter;
use colored::Colorize;
use rulemaster_application::{
    AnswerQueryInput, AnswerQueryUseCase, ConsensusParams, LogSink, ModelGateway, RulebookLoader,
};
use rulemaster_domain::{Query, Rulebook};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::Path;
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: AnswerQueryUseCase,
    params: ConsensusParams,
    sink: Arc<dyn LogSink>,
    rulebook_loader: Arc<dyn RulebookLoader>,
    rulebook: Option<Rulebook>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        params: ConsensusParams,
        sink: Arc<dyn LogSink>,
        rulebook_loader: Arc<dyn RulebookLoader>,
    ) -> Self {
        Self {
            use_case: AnswerQueryUseCase::new(gateway),
            params,
            sink,
            rulebook_loader,
            rulebook: None,
        }
    }

    /// Start with a rulebook already attached
    pub fn with_rulebook(mut self, rulebook: Rulebook) -> Self {
        self.rulebook = Some(rulebook);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("rulemaster").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           RuleMaster - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match &self.rulebook {
            Some(rb) => println!("Rulebook: {}", rb.name()),
            None => println!("Rulebook: none (answers use general knowledge)"),
        }
        println!();
        println!("Commands:");
        println!("  /rules <path>  - Attach a rulebook PDF");
        println!("  /clear         - Detach the current rulebook");
        println!("  /help          - Show this help");
        println!("  /quit          - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let (cmd, arg) = match cmd.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (cmd, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /rules <path>    - Attach a rulebook PDF");
                println!("  /clear           - Detach the current rulebook");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/rules" => {
                if arg.is_empty() {
                    println!("Usage: /rules <path-to-pdf>");
                    return false;
                }
                match self.rulebook_loader.load(Path::new(arg)) {
                    Ok(rulebook) => {
                        println!("Attached rulebook: {}", rulebook.name());
                        self.rulebook = Some(rulebook);
                    }
                    Err(e) => println!("Could not attach rulebook: {}", e),
                }
                false
            }
            "/clear" => {
                match self.rulebook.take() {
                    Some(rb) => println!("Detached rulebook: {}", rb.name()),
                    None => println!("No rulebook attached"),
                }
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        let Some(query) = Query::try_new(question) else {
            return;
        };

        println!();

        let mut input = AnswerQueryInput::new(query, self.params.clone());
        if let Some(rulebook) = &self.rulebook {
            input = input.with_rulebook(rulebook.clone());
        }

        match self.use_case.execute(input, self.sink.as_ref()).await {
            Ok(deliberation) => {
                println!();
                println!("{}", ConsoleFormatter::format_answer_only(&deliberation));
            }
            Err(e) => {
                // Generic failure message; prior chat state (including the
                // attached rulebook) is left untouched.
                tracing::error!("Deliberation failed: {}", e);
                eprintln!(
                    "{}",
                    "I'm having trouble connecting to my rule scholar agents. Please check your setup and try again."
                        .red()
                );
            }
        }
        println!();
    }
}
