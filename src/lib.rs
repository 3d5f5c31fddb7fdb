//! Client for a resume ranking service.
//!
//! Uploads resumes, submits job descriptions and renders the ranked
//! candidates the service returns. See [`web::SubmissionClient`].

pub mod cli;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::{ClientConfig, ConfigManager, ServiceClient};
pub use error::{ClientError, ClientResult};
pub use types::{Candidate, MatchRequest, SelectedFile, Skills, UploadRequest};
pub use web::{FormEvent, Outcome, SubmissionClient};
