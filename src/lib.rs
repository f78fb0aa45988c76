//! Deskhand — small desk-side CLI helpers.
//!
//! Two tools share this crate: `advisor`, which forwards a shell question to
//! an LLM completion endpoint and keeps a bounded conversation history in a
//! hidden JSON file, and `jira-issue`, which creates a Jira issue from
//! interactive prompts.
//!
//! # Quick Start
//!
//! ```no_run
//! use deskhand::advisor::Advisor;
//! use deskhand::history::HistoryStore;
//! use deskhand::provider::openai::OpenAiCompletionProvider;
//!
//! # async fn example() -> deskhand::error::Result<()> {
//! let provider = OpenAiCompletionProvider::new("sk-...".into(), None, None);
//! let history = HistoryStore::in_current_dir();
//! let advisor = Advisor::new(Box::new(provider), history);
//! let reply = advisor.ask("how do I list open ports?", false).await?;
//! println!("{}", reply.text);
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod jira;
pub mod provider;
pub mod util;
