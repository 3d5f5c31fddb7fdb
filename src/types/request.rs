// src/types/request.rs
//! Request payloads built fresh for every user action

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::utils::content_type_for;

pub const NO_FILE_MESSAGE: &str = "Please select a file!";
pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Please enter a job description!";

/// A file picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Multipart upload carrying exactly one non-empty file.
#[derive(Debug)]
pub struct UploadRequest {
    file: SelectedFile,
}

impl UploadRequest {
    /// Multipart field the upload endpoint reads the resume from.
    pub const FIELD: &'static str = "file";

    pub fn new(file: Option<SelectedFile>) -> ClientResult<Self> {
        match file {
            Some(file) if !file.is_empty() => Ok(Self { file }),
            _ => Err(ClientError::validation(NO_FILE_MESSAGE)),
        }
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    pub fn into_form(self, endpoint: &str) -> ClientResult<Form> {
        let content_type = content_type_for(&self.file.file_name);
        let part = Part::bytes(self.file.bytes)
            .file_name(self.file.file_name)
            .mime_str(content_type)
            .map_err(|e| ClientError::transport(endpoint, e))?;

        Ok(Form::new().part(Self::FIELD, part))
    }
}

/// JSON body for the match endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRequest {
    job_description: String,
}

impl MatchRequest {
    /// Rejects blank descriptions. The text is kept as typed.
    pub fn new(job_description: &str) -> ClientResult<Self> {
        if job_description.trim().is_empty() {
            return Err(ClientError::validation(EMPTY_DESCRIPTION_MESSAGE));
        }

        Ok(Self {
            job_description: job_description.to_string(),
        })
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }
}
