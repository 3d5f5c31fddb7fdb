// src/web/render.rs
//! Result renderer - turns ranked candidates into a display list
//!
//! Candidate fields come from an external service and are always treated as
//! text. Markup output escapes every field; nothing is interpolated raw.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io;

use crate::types::Candidate;

pub const NO_MATCHES_MESSAGE: &str = "No matching candidates found.";
pub const RESULTS_HEADING: &str = "Ranked Candidates";

/// One display block per candidate, in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBlock {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub score_percent: i64,
}

/// A full replacement for the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    pub blocks: Vec<CandidateBlock>,
}

/// Build the display list. Same input, same output.
pub fn render(candidates: &[Candidate]) -> RenderedList {
    let blocks = candidates
        .iter()
        .map(|candidate| CandidateBlock {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            skills: candidate.skills.to_string(),
            score_percent: score_percent(candidate.match_score),
        })
        .collect();

    RenderedList { blocks }
}

/// `match_score * 100`, rounded half up.
pub fn score_percent(match_score: f64) -> i64 {
    (match_score * 100.0 + 0.5).floor() as i64
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl CandidateBlock {
    pub fn score_label(&self) -> String {
        format!("{}%", self.score_percent)
    }

    fn write_html(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<div class=\"candidate\"><strong>{}</strong> - {} - {}<br>\
             Skills: {}<br>\
             <strong>Match Score:</strong> {}<hr></div>",
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(&self.phone),
            escape_html(&self.skills),
            self.score_label(),
        );
    }
}

impl RenderedList {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Escaped markup for the results container.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div id=\"results\">");
        let _ = write!(out, "<h3>{}</h3>", RESULTS_HEADING);
        if self.blocks.is_empty() {
            let _ = write!(out, "<p>{}</p>", NO_MATCHES_MESSAGE);
        }
        for block in &self.blocks {
            block.write_html(&mut out);
        }
        out.push_str("</div>");
        out
    }

    /// Plain-text rendition for terminals.
    pub fn to_text(&self) -> String {
        if self.blocks.is_empty() {
            return format!("{}\n", NO_MATCHES_MESSAGE);
        }

        let mut out = format!("{}\n", RESULTS_HEADING);
        for (rank, block) in self.blocks.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} - {} - {}\n   Skills: {}\n   Match Score: {}",
                rank + 1,
                block.name,
                block.email,
                block.phone,
                block.skills,
                block.score_label(),
            );
        }
        out
    }
}

/// Write the ranked list as CSV, keeping the service's column names.
pub fn export_csv<W: io::Write>(candidates: &[Candidate], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["Name", "Email", "Phone", "Skills", "Match Score"])
        .context("Failed to write CSV header")?;

    for candidate in candidates {
        csv_writer
            .write_record([
                candidate.name.as_str(),
                candidate.email.as_str(),
                candidate.phone.as_str(),
                candidate.skills.to_string().as_str(),
                candidate.match_score.to_string().as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", candidate.name))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
