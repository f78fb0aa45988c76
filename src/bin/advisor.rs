//! Terminal advisor binary entry point.

use clap::Parser;
use deskhand::advisor::Advisor;
use deskhand::cli::AdvisorCli;
use deskhand::config::AdvisorConfig;
use deskhand::history::HistoryStore;
use deskhand::provider::openai::OpenAiCompletionProvider;
use deskhand::util::term;

#[tokio::main]
async fn main() {
    let cli = AdvisorCli::parse();

    // Credential check happens before any network activity.
    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: AdvisorCli, config: AdvisorConfig) -> deskhand::error::Result<()> {
    let provider = OpenAiCompletionProvider::new(config.api_key, config.base_url, cli.model);
    let advisor = Advisor::new(Box::new(provider), HistoryStore::in_current_dir())
        .with_max_tokens(cli.max_tokens);

    if cli.forget {
        advisor.forget()?;
    }

    println!("{}", term::sending_banner(&cli.prompt));

    let result = advisor.ask(&cli.prompt, cli.dry_run).await?;

    if cli.dry_run {
        println!(
            "{}Dry run mode - no API call was made.{}\n",
            term::GREEN,
            term::RESET
        );
        println!(
            "Intended full prompt: {}{}{}\n",
            term::YELLOW,
            result.prompt,
            term::RESET
        );
    }

    println!("{}", term::reply_frame(&result.text));
    Ok(())
}
