// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::{ConfigManager, FsOps};
use crate::web::{
    export_csv, render, EventOutcome, FormEvent, MatchResult, Outcome, Page, SubmissionClient,
};

#[derive(Parser)]
#[command(name = "resume-client")]
#[command(about = "Upload resumes and rank candidates against a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Ranking service base URL, overrides config file and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// YAML config file (defaults to ./resume-client.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging and extracted resume fields
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload one resume file
    Upload { path: PathBuf },
    /// Rank uploaded resumes against a job description
    Match {
        /// Job description text
        text: Option<String>,
        /// Read the job description from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Write the escaped HTML rendition of the results
        #[arg(long)]
        html: Option<PathBuf>,
        /// Export the ranked candidates as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ConfigManager::load(cli.config.as_deref())?
        .with_base_url_override(cli.base_url.as_deref())?;
    let client = SubmissionClient::from_config(&config.service)?;

    match cli.command {
        Command::Upload { path } => {
            let file = FsOps::read_selected_file(&path).await?;
            let outcome = client.dispatch(FormEvent::UploadSubmitted(file)).await;

            print_alerts(&client);
            print_upload(&client.page());
            if let (true, EventOutcome::Upload(Outcome::Delivered(response))) =
                (cli.verbose, &outcome)
            {
                for (field, value) in response.extracted_fields() {
                    println!("  {}: {}", field, value);
                }
            }
        }

        Command::Match {
            text,
            file,
            html,
            csv,
        } => {
            let job_description = match file {
                Some(path) => FsOps::read_file_safe(&path).await?,
                None => text.unwrap_or_default(),
            };

            let outcome = client
                .dispatch(FormEvent::MatchRequested(job_description))
                .await;
            print_alerts(&client);
            print_match(&client.page());

            if let EventOutcome::Match(Outcome::Delivered(result)) = outcome {
                let candidates = match result {
                    MatchResult::Ranked(candidates) => candidates,
                    MatchResult::NoMatches => Vec::new(),
                };

                if let Some(path) = html {
                    FsOps::write_file_safe(&path, render(&candidates).to_html().as_bytes())
                        .await?;
                    info!("HTML results written to {}", path.display());
                }

                if let Some(path) = csv {
                    let mut buffer = Vec::new();
                    export_csv(&candidates, &mut buffer)?;
                    FsOps::write_file_safe(&path, &buffer).await?;
                    info!("CSV export written to {}", path.display());
                }
            }
        }
    }

    if cli.verbose && !client.diagnostics().is_empty() {
        eprintln!("{}", client.diagnostics_json()?);
    }

    Ok(())
}

fn print_alerts(client: &SubmissionClient) {
    for alert in client.dismiss_alerts() {
        println!("⚠ {}", alert);
    }
}

fn print_upload(page: &Page) {
    if let Some(message) = &page.upload_message {
        println!("{}", message);
    }
}

fn print_match(page: &Page) {
    if let Some(status) = &page.match_status {
        println!("{}", status);
    }
    print!("{}", page.results.to_text());
}
