// src/web/handlers/upload_handlers.rs
//! Resume upload handler

use tracing::{debug, error, info, warn};

use super::{record_failure, superseded, validation_message, Outcome};
use crate::types::{SelectedFile, UploadRequest, UploadResponse};
use crate::web::diagnostics::ActionKind;
use crate::web::SubmissionClient;

pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed!";

pub async fn upload_handler(
    client: &SubmissionClient,
    file: Option<SelectedFile>,
) -> Outcome<UploadResponse> {
    let request = match UploadRequest::new(file) {
        Ok(request) => request,
        Err(e) => {
            let message = validation_message(e);
            warn!("Upload rejected locally: {}", message);
            client.with_page(|page| page.set_upload_message(message.as_str()));
            return Outcome::Rejected(message);
        }
    };

    let seq = client.sequences().issue(ActionKind::Upload);
    let result = client.service().upload_resume(request).await;

    match result {
        Ok(response) => {
            if !client.sequences().is_latest(ActionKind::Upload, seq) {
                return superseded(ActionKind::Upload, seq);
            }

            info!("Upload accepted: {}", response.message);
            for (field, value) in response.extracted_fields() {
                debug!("Extracted {}: {}", field, value);
            }

            client.with_page(|page| page.set_upload_message(response.message.as_str()));
            Outcome::Delivered(response)
        }
        Err(e) => {
            error!("Error uploading file: {}", e);
            let diagnostic = record_failure(client, ActionKind::Upload, &e);

            if !client.sequences().is_latest(ActionKind::Upload, seq) {
                return superseded(ActionKind::Upload, seq);
            }

            client.with_page(|page| page.set_upload_message(UPLOAD_FAILED_MESSAGE));
            Outcome::Failed { diagnostic }
        }
    }
}
