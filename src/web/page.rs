// src/web/page.rs
//! Output regions of the submission page
//!
//! The upload action only writes `upload_message`. The match action writes
//! `match_status` and `results`. Alerts are blocking notices, one per
//! rejected event.

use super::render::{RenderedList, NO_MATCHES_MESSAGE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsArea {
    #[default]
    Empty,
    Rendered(RenderedList),
    NoMatches,
}

impl ResultsArea {
    pub fn to_text(&self) -> String {
        match self {
            ResultsArea::Empty => String::new(),
            ResultsArea::Rendered(list) => list.to_text(),
            ResultsArea::NoMatches => format!("{}\n", NO_MATCHES_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub upload_message: Option<String>,
    pub match_status: Option<String>,
    pub results: ResultsArea,
    pub alerts: Vec<String>,
}

impl Page {
    pub fn set_upload_message(&mut self, message: impl Into<String>) {
        self.upload_message = Some(message.into());
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn set_match_status(&mut self, message: impl Into<String>) {
        self.match_status = Some(message.into());
    }

    /// Replace whatever was rendered before.
    pub fn show_results(&mut self, list: RenderedList) {
        self.match_status = None;
        self.results = ResultsArea::Rendered(list);
    }

    pub fn show_no_matches(&mut self) {
        self.match_status = None;
        self.results = ResultsArea::NoMatches;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::render::CandidateBlock;

    fn one_block() -> RenderedList {
        RenderedList {
            blocks: vec![CandidateBlock {
                name: "A".into(),
                email: "a@x.com".into(),
                phone: "1".into(),
                skills: "Go".into(),
                score_percent: 50,
            }],
        }
    }

    #[test]
    fn test_results_replace_previous_state() {
        let mut page = Page::default();
        page.set_match_status("Error fetching candidates!");
        page.show_results(one_block());
        assert_eq!(page.match_status, None);
        assert_eq!(page.results, ResultsArea::Rendered(one_block()));

        page.show_no_matches();
        assert_eq!(page.results, ResultsArea::NoMatches);
        assert_eq!(page.results.to_text(), "No matching candidates found.\n");
    }

    #[test]
    fn test_regions_are_independent() {
        let mut page = Page::default();
        page.show_results(one_block());
        page.set_upload_message("Upload failed!");
        assert_eq!(page.results, ResultsArea::Rendered(one_block()));
        assert_eq!(page.upload_message.as_deref(), Some("Upload failed!"));
    }

    #[test]
    fn test_take_alerts_clears_them() {
        let mut page = Page::default();
        page.alert("Please select a file!");
        page.alert("Please enter a job description!");

        assert_eq!(
            page.take_alerts(),
            vec!["Please select a file!", "Please enter a job description!"]
        );
        assert!(page.alerts.is_empty());
        assert!(page.take_alerts().is_empty());
    }
}
