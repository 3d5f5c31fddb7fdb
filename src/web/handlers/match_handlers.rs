// src/web/handlers/match_handlers.rs
//! Job description matching handler

use tracing::{error, info, warn};

use super::{record_failure, superseded, validation_message, Outcome};
use crate::types::{Candidate, MatchRequest};
use crate::web::diagnostics::ActionKind;
use crate::web::render::render;
use crate::web::SubmissionClient;

pub const MATCH_FAILED_MESSAGE: &str = "Error fetching candidates!";

#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// Candidates in service order, as rendered.
    Ranked(Vec<Candidate>),
    /// Valid response without candidates.
    NoMatches,
}

pub async fn match_handler(
    client: &SubmissionClient,
    job_description: &str,
) -> Outcome<MatchResult> {
    let request = match MatchRequest::new(job_description) {
        Ok(request) => request,
        Err(e) => {
            let message = validation_message(e);
            warn!("Match rejected locally: {}", message);
            client.with_page(|page| page.alert(message.as_str()));
            return Outcome::Rejected(message);
        }
    };

    let seq = client.sequences().issue(ActionKind::Match);
    let result = client.service().match_candidates(&request).await;

    match result {
        Ok(response) => {
            if !client.sequences().is_latest(ActionKind::Match, seq) {
                return superseded(ActionKind::Match, seq);
            }

            match response.into_ranked() {
                Some(candidates) => {
                    info!("Received {} ranked candidates", candidates.len());
                    let list = render(&candidates);
                    client.with_page(|page| page.show_results(list));
                    Outcome::Delivered(MatchResult::Ranked(candidates))
                }
                None => {
                    info!("Match returned no candidates");
                    client.with_page(|page| page.show_no_matches());
                    Outcome::Delivered(MatchResult::NoMatches)
                }
            }
        }
        Err(e) => {
            error!("Error fetching candidates: {}", e);
            let diagnostic = record_failure(client, ActionKind::Match, &e);

            if !client.sequences().is_latest(ActionKind::Match, seq) {
                return superseded(ActionKind::Match, seq);
            }

            // Previously rendered results stay as they are.
            client.with_page(|page| page.set_match_status(MATCH_FAILED_MESSAGE));
            Outcome::Failed { diagnostic }
        }
    }
}
