//! Console output formatter for deliberation results

use colored::Colorize;
use rulemaster_domain::{Deliberation, Resolution, Verdict};

/// Formats deliberation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript: every round's drafts and verdicts
    pub fn format(deliberation: &Deliberation) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            deliberation.query
        ));

        for record in &deliberation.rounds {
            output.push_str(&format!(
                "{}\n",
                format!("── Round {} ──", record.round).yellow().bold()
            ));
            output.push_str(&format!(
                "{}\n{}\n\n",
                "Scholar's draft:".bold(),
                record.draft
            ));
            output.push_str(&format!(
                "{}\n{}\n\n",
                "Sceptic's analysis:".bold(),
                record.critique
            ));

            match &record.verdict {
                Verdict::Verified { .. } => {
                    output.push_str(&format!("{}\n\n", "Verdict: VERIFIED".green().bold()));
                }
                Verdict::Rejected { reason, .. } => {
                    output.push_str(&format!(
                        "{} {}\n\n",
                        "Verdict: REJECTED".red().bold(),
                        reason
                    ));
                }
            }
        }

        match deliberation.resolution {
            Resolution::Verified { round } => {
                output.push_str(&format!(
                    "{}\n",
                    format!("Verified in round {}", round).green().bold()
                ));
            }
            Resolution::Synthesis => {
                output.push_str(&format!(
                    "{}\n",
                    "Convergence failed; best-effort synthesis".red().bold()
                ));
            }
        }

        output.push_str(&format!("\n{}\n{}\n", "Answer:".cyan().bold(), deliberation.answer));
        output
    }

    /// Format only the final answer
    pub fn format_answer_only(deliberation: &Deliberation) -> String {
        deliberation.answer.clone()
    }

    /// Format the deliberation as pretty-printed JSON
    pub fn format_json(deliberation: &Deliberation) -> String {
        serde_json::to_string_pretty(deliberation)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
