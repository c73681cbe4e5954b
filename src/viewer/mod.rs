pub mod config;
pub mod format;
pub mod icons;
pub mod render;

pub use config::ViewerConfig;
pub use format::DataFormat;
pub use icons::{Icon, IconKind, IconSet};
pub use render::{render_channel, render_tree, render_user};

use crate::transport::errors::ViewerError;
use crate::transport::source::{decode_document, AutoStatusSource, StatusSource};

pub struct ChannelViewer {
    config: ViewerConfig,
    source: Box<dyn StatusSource>,
}

impl ChannelViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_source(config, Box::new(AutoStatusSource::new()))
    }

    pub fn with_source(config: ViewerConfig, source: Box<dyn StatusSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn render(&mut self) -> Result<String, ViewerError> {
        let data_uri = self.config.data_uri.trim();
        if data_uri.is_empty() {
            return Err(ViewerError::InvalidConfig("data uri is required".to_string()));
        }

        let raw = match self.config.format {
            DataFormat::Json => self.source.fetch(data_uri)?,
        };
        let document = decode_document(&raw)?;
        let markup = render_tree(&document.root, &self.config.icons);
        log::info!(
            "rendered channel tree from {data_uri} ({} bytes)",
            markup.len()
        );
        Ok(markup)
    }
}

/// Fetches `data_uri` and renders it with the stock icons. `data_format`
/// is checked before anything is fetched.
pub fn render(data_uri: &str, data_format: &str) -> Result<String, ViewerError> {
    let format = data_format.parse::<DataFormat>()?;
    let mut config = ViewerConfig::new(data_uri.to_string());
    config.format = format;
    ChannelViewer::new(config).render()
}
