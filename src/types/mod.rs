pub mod request;
pub mod response;

pub use request::{MatchRequest, SelectedFile, UploadRequest};
pub use response::{Candidate, MatchResponse, Skills, UploadResponse};
