//! Terminal advisor flow: prompt assembly, history splicing, dry run.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::history::{ConversationEntry, ConversationLog, HistoryStore};
use crate::provider::{CompletionProvider, CompletionRequest};

/// Fixed reply substituted for the network call in dry-run mode.
pub const DRY_RUN_RESPONSE: &str = "This is a simulated (dry-run) response.";

/// Token ceiling used when the caller does not override it.
pub const DEFAULT_MAX_TOKENS: u32 = 2500;

/// One completed advisor exchange.
#[derive(Debug, Clone)]
pub struct AskResult {
    /// The assistant's reply (or the dry-run marker).
    pub text: String,
    /// The full prompt that was (or would have been) sent.
    pub prompt: String,
}

/// Orchestrates a single question/answer exchange against an injected
/// provider, with bounded-history bookkeeping around it.
pub struct Advisor {
    provider: Box<dyn CompletionProvider>,
    history: HistoryStore,
    max_tokens: u32,
    workdir: PathBuf,
}

impl Advisor {
    /// The working directory embedded in the preamble defaults to the
    /// process's current directory; override it with [`Advisor::with_workdir`].
    pub fn new(provider: Box<dyn CompletionProvider>, history: HistoryStore) -> Self {
        Self {
            provider,
            history,
            max_tokens: DEFAULT_MAX_TOKENS,
            workdir: std::env::current_dir().unwrap_or_default(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Discard prior conversational context before asking.
    pub fn forget(&self) -> Result<()> {
        self.history.reset()?;
        Ok(())
    }

    /// Run one exchange: load history, compose the prompt, call the
    /// provider (unless `dry_run`), and record the exchange.
    ///
    /// Dry run performs every local step, including the history append,
    /// substituting [`DRY_RUN_RESPONSE`] for the network result.
    pub async fn ask(&self, query: &str, dry_run: bool) -> Result<AskResult> {
        let log = self.history.load()?;
        let prompt = compose_prompt(&self.workdir, &log, query);

        let text = if dry_run {
            debug!("dry run, skipping network call");
            DRY_RUN_RESPONSE.to_string()
        } else {
            let request = CompletionRequest {
                prompt: prompt.clone(),
                max_tokens: self.max_tokens,
            };
            self.provider.complete(&request).await?.text
        };

        self.history
            .append(ConversationEntry::new(query, text.clone()))?;

        Ok(AskResult { text, prompt })
    }
}

/// Fixed instructional preamble, embedding the given working directory.
fn preamble_for_dir(cwd: &Path) -> String {
    format!(
        "I am a user in a terminal running a shell in the directory {}. \
         I am learning how to feel more comfortable in a command line environment. \
         If I am asking a simple question please don't feel the need to add explanation; \
         often I will just be asking for practical commands to complete a task. \
         If I want a long example I will ask a more open-ended question. \
         Now, please answer the following query to the best of your ability: ",
        cwd.display()
    )
}

/// Preamble, then prior exchanges oldest first, then the new query.
fn compose_prompt(workdir: &Path, log: &ConversationLog, query: &str) -> String {
    let mut prompt = preamble_for_dir(workdir);
    for entry in log {
        prompt.push_str("\nQ: ");
        prompt.push_str(&entry.request_text);
        prompt.push_str("\nA: ");
        prompt.push_str(&entry.response_text);
    }
    if !log.is_empty() {
        prompt.push_str("\nQ: ");
    }
    prompt.push_str(query);
    prompt
}
