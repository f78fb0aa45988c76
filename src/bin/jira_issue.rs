//! Interactive Jira issue creator binary entry point.

use std::io::{self, BufRead, Write};

use clap::Parser;
use deskhand::cli::prompt::read_with_default;
use deskhand::cli::JiraCli;
use deskhand::config::JiraConfig;
use deskhand::jira::{IssueRequest, JiraClient};

#[tokio::main]
async fn main() {
    let _cli = JiraCli::parse();

    let config = match JiraConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        report_failure(&mut io::stderr(), &e);
        std::process::exit(1);
    }
}

fn report_failure(writer: &mut impl Write, err: &deskhand::error::DeskhandError) {
    let _ = writeln!(writer, "Error: {err}");
    let _ = writeln!(writer, "Error: Issue not created.");
}

async fn run(config: JiraConfig) -> deskhand::error::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    let request = collect_issue(&mut reader, &mut writer, config.default_assignee.as_deref())?;

    let client = JiraClient::new(&config.base_url, &config.api_key);
    let issue = client.create_issue(&request).await?;

    println!(
        "Ok thank you, your Jira issue code is {} and you can visit it at this link: {}",
        issue.key,
        client.browse_url(&issue.key)
    );
    Ok(())
}

fn collect_issue(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    default_assignee: Option<&str>,
) -> deskhand::error::Result<IssueRequest> {
    Ok(IssueRequest {
        project_key: read_with_default(reader, writer, "Jira project", None)?,
        issue_type: read_with_default(
            reader,
            writer,
            "Jira Issue Type (e.g., 'Bug', 'Story')",
            None,
        )?,
        summary: read_with_default(reader, writer, "Summary", None)?,
        description: read_with_default(reader, writer, "Description", None)?,
        assignee_email: read_with_default(reader, writer, "Assignee (email)", default_assignee)?,
    })
}
