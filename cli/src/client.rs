//! Thin HTTP client for the ReceptAI API.

use anyhow::{Context, Result};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

pub struct Configuration {
    pub base_path: String,
    pub bearer_access_token: Option<String>,
}

impl Configuration {
    pub fn new(base_path: &str, token: Option<String>) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            bearer_access_token: token,
        }
    }
}

pub struct ApiClient {
    config: Configuration,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_path, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.bearer_access_token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let request = self.authorize(self.client.get(self.url(path)));
        send(request, path).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        send(request, path).await
    }

    /// Upload a photo as the `file` field of a multipart form.
    pub async fn upload_photo(&self, path: &str, photo: &Path) -> Result<Value> {
        let mime = mime_for_path(photo).with_context(|| {
            format!(
                "Unsupported photo type {} (use .jpg, .png or .webp)",
                photo.display()
            )
        })?;
        let data = tokio::fs::read(photo)
            .await
            .with_context(|| format!("Failed to read {}", photo.display()))?;
        let file_name = photo
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.authorize(self.client.post(self.url(path)).multipart(form));
        send(request, path).await
    }
}

async fn send(request: RequestBuilder, path: &str) -> Result<Value> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", path))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(body);
        anyhow::bail!(
            "{} failed with status {} ({}): {}",
            path,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            message
        );
    }

    serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse response from {} as JSON: {}", path, body))
}

/// Declared content type for a photo, from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("fridge.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("a/b/shelf.webp")), Some("image/webp"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }

    #[test]
    fn test_base_path_trailing_slash() {
        let client = ApiClient::new(Configuration::new("http://localhost:3000/", None));
        assert_eq!(client.url("/history"), "http://localhost:3000/history");
    }

    #[tokio::test]
    async fn test_upload_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
        let client = ApiClient::new(Configuration::new("http://127.0.0.1:1", None));

        let err = client
            .upload_photo("/detect-products", file.path())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported photo type"));
    }
}
