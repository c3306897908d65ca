use crate::consts::UPLOAD_FIELD_NAME;
use crate::exceptions::DrynessError;
use crate::models::{ApiMessage, HistoryRecord, PredictResponse, Prediction};
use crate::upload::UploadImage;
use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

pub const SERVER_ERROR: &str = "Server error";
pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch history";
pub const DELETE_FAILED: &str = "Failed to delete history record";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: crate::utils::setup_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uploads one image as the multipart field `image` and returns the model's verdict.
    pub async fn predict(&self, image: &UploadImage) -> Result<Prediction, DrynessError> {
        let url = format!("{}/predict", self.base_url);

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(image.mime_type)
            .map_err(|e| DrynessError::Api(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        tracing::debug!("POST {} ({} bytes)", url, image.size());
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DrynessError::Api(format!("Could not reach {}: {}", url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DrynessError::Api(e.to_string()))?;

        if !status.is_success() {
            return Err(DrynessError::Api(failure_message(status, &text)));
        }

        let body: PredictResponse = serde_json::from_str(&text)
            .map_err(|e| DrynessError::Api(format!("Invalid response from server: {}", e)))?;

        if let Some(error) = body.error.filter(|e| !e.is_empty()) {
            return Err(DrynessError::Api(error));
        }

        body.prediction
            .ok_or_else(|| DrynessError::Api("Server response did not contain a classification".into()))
    }

    pub async fn history(&self) -> Result<Vec<HistoryRecord>, DrynessError> {
        let url = format!("{}/history", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!("History request failed: {}", e);
            DrynessError::Api(HISTORY_FETCH_FAILED.into())
        })?;

        if !response.status().is_success() {
            tracing::warn!("History request returned {}", response.status());
            return Err(DrynessError::Api(HISTORY_FETCH_FAILED.into()));
        }

        response.json::<Vec<HistoryRecord>>().await.map_err(|e| {
            tracing::warn!("History response could not be decoded: {}", e);
            DrynessError::Api(HISTORY_FETCH_FAILED.into())
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), DrynessError> {
        let url = format!("{}/history/{}", self.base_url, id);
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await.map_err(|e| {
            tracing::warn!("Delete request failed: {}", e);
            DrynessError::Api(DELETE_FAILED.into())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Delete of record {} returned {}", id, status);
            return Err(DrynessError::Api(DELETE_FAILED.into()));
        }

        // An empty or non-JSON body on 2xx still counts as success.
        let text = response.text().await.unwrap_or_default();
        let body: ApiMessage = serde_json::from_str(&text).unwrap_or_default();
        if let Some(error) = body.error.filter(|e| !e.is_empty()) {
            return Err(DrynessError::Api(error));
        }
        if let Some(success) = body.success {
            tracing::debug!("Delete acknowledged: {}", success);
        }

        Ok(())
    }
}

/// Message for a non-2xx response: the body's `error` field, else the status code.
/// A body that is not JSON at all yields a generic server error.
pub fn failure_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiMessage>(body) {
        Ok(msg) => msg
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("Error {}", status.as_u16())),
        Err(_) => SERVER_ERROR.to_string(),
    }
}
