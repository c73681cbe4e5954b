use std::path::Path;

use crate::transport::errors::ViewerError;
use crate::transport::types::StatusDocument;

pub trait StatusSource {
    fn fetch(&mut self, uri: &str) -> Result<String, ViewerError>;
}

pub struct HttpStatusSource {
    client: reqwest::blocking::Client,
}

impl HttpStatusSource {
    pub fn new() -> Self {
        Self::with_client(reqwest::blocking::Client::new())
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpStatusSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch(&mut self, uri: &str) -> Result<String, ViewerError> {
        log::debug!("fetching status document from {uri}");
        let response = self.client.get(uri).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

#[derive(Debug, Default)]
pub struct FileStatusSource;

impl StatusSource for FileStatusSource {
    fn fetch(&mut self, uri: &str) -> Result<String, ViewerError> {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        log::debug!("reading status document from {path}");
        Ok(std::fs::read_to_string(Path::new(path))?)
    }
}

/// Routes `http://` and `https://` URIs to [`HttpStatusSource`] and
/// everything else to [`FileStatusSource`].
#[derive(Default)]
pub struct AutoStatusSource {
    http: Option<HttpStatusSource>,
    file: FileStatusSource,
}

impl AutoStatusSource {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn is_remote(uri: &str) -> bool {
    let lower = uri.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl StatusSource for AutoStatusSource {
    fn fetch(&mut self, uri: &str) -> Result<String, ViewerError> {
        if is_remote(uri) {
            self.http
                .get_or_insert_with(HttpStatusSource::new)
                .fetch(uri)
        } else {
            self.file.fetch(uri)
        }
    }
}

pub fn decode_document(raw: &str) -> Result<StatusDocument, ViewerError> {
    let document: StatusDocument = serde_json::from_str(raw)?;
    log::debug!(
        "decoded status document rooted at channel {:?}",
        document.root.name
    );
    Ok(document)
}
