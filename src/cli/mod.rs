//! CLI argument structs for the two binaries.

pub mod prompt;

use clap::Parser;

/// Ask an LLM for terminal advice.
#[derive(Parser, Debug)]
#[command(name = "advisor", version, about = "Get advice for how to use the terminal")]
pub struct AdvisorCli {
    /// The query to send for advice
    pub prompt: String,

    /// Perform all local steps but skip the network call
    #[arg(long)]
    pub dry_run: bool,

    /// Discard prior conversational context before asking
    #[arg(long)]
    pub forget: bool,

    /// Token ceiling for the completion call
    #[arg(long, default_value_t = crate::advisor::DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Model to use
    #[arg(long)]
    pub model: Option<String>,
}

/// Create a Jira issue from interactive prompts.
#[derive(Parser, Debug)]
#[command(name = "jira-issue", version, about = "Create a Jira issue interactively")]
pub struct JiraCli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_advisor_prompt_only() {
        let cli = AdvisorCli::try_parse_from(["advisor", "how do I untar?"]).unwrap();
        assert_eq!(cli.prompt, "how do I untar?");
        assert!(!cli.dry_run);
        assert!(!cli.forget);
        assert_eq!(cli.max_tokens, crate::advisor::DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn parse_advisor_flags() {
        let cli = AdvisorCli::try_parse_from([
            "advisor",
            "--dry-run",
            "--forget",
            "--max-tokens",
            "500",
            "what is sed?",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.forget);
        assert_eq!(cli.max_tokens, 500);
        assert_eq!(cli.prompt, "what is sed?");
    }

    #[test]
    fn parse_advisor_model_override() {
        let cli =
            AdvisorCli::try_parse_from(["advisor", "--model", "davinci-002", "hello"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("davinci-002"));
    }

    #[test]
    fn advisor_prompt_is_required() {
        assert!(AdvisorCli::try_parse_from(["advisor"]).is_err());
    }
}
