//! Client for the load service, which ingests a regional source file into
//! the shared station store.

use std::path::Path;

use itv_core::{AppConfig, Region};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{build_http_client, parse_endpoint, read_json};
use crate::types::{LoadResponse, STATUS_SUCCESS};

const FILE_FIELD: &str = "archivo";
const SOURCE_FIELD: &str = "fuente";

/// A source file ready to be posted to the load service.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub region: Region,
}

impl Upload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, region: Region) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            region,
        }
    }

    /// Reads `path` from disk, using its final component as the upload name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path, region: Region) -> Result<Self, ClientError> {
        let bytes = std::fs::read(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes, region))
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.file_name.trim().is_empty() {
            return Err(ClientError::EmptyUpload("no file name".to_owned()));
        }
        if self.bytes.is_empty() {
            return Err(ClientError::EmptyUpload(format!(
                "{} is empty",
                self.file_name
            )));
        }
        Ok(())
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// Source label echoed by the service, or the one that was sent.
    pub source: String,
    pub ok: u64,
    pub repaired: u64,
    pub rejected: u64,
    pub repaired_details: Vec<String>,
    pub rejected_details: Vec<String>,
    /// Full ingestion log when the service returns one.
    pub log: Option<String>,
}

impl LoadReport {
    fn from_response(body: LoadResponse, sent_source: &str) -> Self {
        Self {
            source: body.fuente.unwrap_or_else(|| sent_source.to_owned()),
            ok: body.registros_ok,
            repaired: body.registros_reparados,
            rejected: body.registros_rechazados,
            repaired_details: body.detalles_reparados,
            rejected_details: body.detalles_rechazados,
            log: body.log_completo,
        }
    }

    /// Records the service stored, repaired ones included.
    #[must_use]
    pub fn stored(&self) -> u64 {
        self.ok + self.repaired
    }
}

/// Client for the load endpoint.
pub struct LoadClient {
    client: Client,
    endpoint: Url,
}

impl LoadClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if the endpoint does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_endpoint(
            &config.load_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if `load_url` does not parse.
    pub fn with_endpoint(
        load_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            endpoint: parse_endpoint(load_url)?,
        })
    }

    /// Posts `upload` as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::EmptyUpload`] before any request if the file is empty
    ///   or unnamed.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] on transport
    ///   failures, malformed bodies, or a non-2xx status without a message.
    /// - [`ClientError::Application`] when the service rejects the load,
    ///   including 4xx/5xx answers that carry a `message`.
    pub async fn upload(&self, upload: &Upload) -> Result<LoadReport, ClientError> {
        upload.validate()?;

        let source = upload.region.source_format();
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = Form::new()
            .part(FILE_FIELD, part)
            .text(SOURCE_FIELD, source);

        tracing::debug!(
            url = %self.endpoint,
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            source,
            "uploading source file"
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;
        let body = read_load_response(response, self.endpoint.as_str()).await?;

        if body.status != STATUS_SUCCESS {
            let message = body
                .message
                .unwrap_or_else(|| format!("load failed with status '{}'", body.status));
            tracing::warn!(status = %body.status, message, "load service reported an error");
            return Err(ClientError::Application(message));
        }

        let report = LoadReport::from_response(body, source);
        tracing::info!(
            source = %report.source,
            ok = report.ok,
            repaired = report.repaired,
            rejected = report.rejected,
            "load completed"
        );
        Ok(report)
    }
}

/// Decodes the load envelope.
///
/// The service reports rejections (empty file, unknown source) as 4xx/5xx
/// with a `{status, message}` body. Those surface as application errors;
/// a non-2xx status without a readable message stays an HTTP error.
async fn read_load_response(response: Response, context: &str) -> Result<LoadResponse, ClientError> {
    let status_error = response.error_for_status_ref().err();
    let Some(status_error) = status_error else {
        return read_json(response, context).await;
    };

    let body = response.text().await?;
    let message = serde_json::from_str::<LoadResponse>(&body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|m| !m.trim().is_empty());
    match message {
        Some(message) => {
            tracing::warn!(error = %status_error, message, "load service rejected the file");
            Err(ClientError::Application(message))
        }
        None => Err(ClientError::Http(status_error)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_upload_is_rejected_locally() {
        let upload = Upload::new("itv.xml", Vec::new(), Region::Cat);
        assert!(matches!(
            upload.validate(),
            Err(ClientError::EmptyUpload(ref m)) if m.contains("itv.xml")
        ));
    }

    #[test]
    fn unnamed_upload_is_rejected_locally() {
        let upload = Upload::new("  ", b"a,b".to_vec(), Region::Gal);
        assert!(matches!(upload.validate(), Err(ClientError::EmptyUpload(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Upload::from_path(Path::new("/nonexistent/itv.csv"), Region::Gal).unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
        assert!(!err.is_connectivity());
    }

    #[test]
    fn report_falls_back_to_sent_source() {
        let body: LoadResponse = serde_json::from_value(json!({
            "status": "success",
            "registros_ok": 10,
            "registros_reparados": 2,
            "registros_rechazados": 1,
            "detalles_rechazados": ["row 7: missing name"]
        }))
        .unwrap();
        let report = LoadReport::from_response(body, "CV JSON");
        assert_eq!(report.source, "CV JSON");
        assert_eq!(report.stored(), 12);
        assert_eq!(report.rejected_details, vec!["row 7: missing name"]);
        assert!(report.repaired_details.is_empty());
        assert!(report.log.is_none());
    }
}
