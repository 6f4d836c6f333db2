//! Prompt templates for each tribunal role
//!
//! Each template embeds the question plus role-specific instructions. The
//! wording is part of the contract: the Auditor template is what makes the
//! `VERIFIED:` / `REJECTED:` prefix parse in
//! [`Verdict::parse`](crate::consensus::Verdict::parse) reliable.

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Human-readable description of what the Auditor checks against,
    /// used in log lines
    pub fn audit_source(has_rulebook: bool) -> &'static str {
        if has_rulebook {
            "rulebook PDF"
        } else {
            "general ruleset knowledge"
        }
    }

    /// Scholar prompt: minimal, factual answer to exactly the question.
    ///
    /// Accumulated feedback from a prior rejection is embedded when present.
    pub fn scholar(query: &str, feedback: Option<&str>, has_rulebook: bool) -> String {
        let mut prompt = format!(
            r#"As an expert board game rules scholar, answer ONLY this question: "{}".
Do not add extra rules unless they are strictly necessary to answer the question."#,
            query
        );

        if let Some(feedback) = feedback {
            prompt.push_str(&format!(
                "\nFix these issues from the previous audit: {}",
                feedback
            ));
        }

        prompt.push_str("\nBe concise. ");
        prompt.push_str(if has_rulebook {
            "Base your answer on the provided rulebook."
        } else {
            "Since no rulebook is provided, answer based on your standard knowledge of this game."
        });

        prompt
    }

    /// Sceptic prompt: surface rare exceptions and edge cases that could
    /// contradict a literal reading.
    pub fn sceptic(query: &str, has_rulebook: bool) -> String {
        format!(
            r#"You are a rules tester. For the question "{}", identify if there are any rare exceptions or edge cases that contradict a standard interpretation. Answer briefly. {}"#,
            query,
            if has_rulebook {
                "Check the provided rulebook."
            } else {
                "Use your internal knowledge."
            }
        )
    }

    /// Auditor prompt: verify the draft against the critique and reply with
    /// a literal `VERIFIED:` or `REJECTED:` prefix.
    pub fn auditor(query: &str, draft: &str, critique: &str, has_rulebook: bool) -> String {
        let check_instruction = if has_rulebook {
            "Check the Scholar's draft against the uploaded rulebook PDF."
        } else {
            "Check the Scholar's draft against your best internal knowledge of this board game's rules."
        };

        format!(
            r#"You are a meticulous rulebook auditor.
User Question: "{}"
Scholar's Draft: "{}"
Sceptic's Analysis: "{}"

Instructions:
1. {}
2. If the Scholar's draft is 100% accurate AND ONLY answers the question without fluff, respond with "VERIFIED: " followed by the final answer.
3. If it is wrong, incomplete, or contains irrelevant extra rules, respond with "REJECTED: [Reason]" followed by what needs to change."#,
            query, draft, critique, check_instruction
        )
    }

    /// Synthesis prompt: combine the last draft with accumulated feedback
    /// into an unconditional best-effort answer.
    pub fn synthesis(query: &str, draft: &str, feedback: &str) -> String {
        format!(
            r#"Strictly answer the question: "{}". Use these verified components: {} while correcting for these errors: {}. Ensure the answer is concise and directly addresses only the user's question."#,
            query, draft, feedback
        )
    }
}
