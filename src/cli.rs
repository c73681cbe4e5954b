use std::path::PathBuf;

use clap::Parser;

use crate::transport::errors::ViewerError;
use crate::viewer::{DataFormat, IconSet, ViewerConfig};

/// Render a Mumble channel viewer document as a nested HTML list.
#[derive(Debug, Parser)]
#[command(name = "mumble-viewer", version)]
pub struct Cli {
    /// URL or file path of the channel viewer JSON document.
    pub data_uri: String,

    /// Data format of the document. Only `json` is supported.
    #[arg(long, default_value = "json")]
    pub format: String,

    /// JSON file mapping status flags to icon sources.
    #[arg(long, value_name = "FILE")]
    pub icons: Option<PathBuf>,

    /// Directory prefix for the stock icon files.
    #[arg(long, value_name = "DIR", conflicts_with = "icons")]
    pub icon_base: Option<String>,

    /// Write markup here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<ViewerConfig, ViewerError> {
        let format = self.format.parse::<DataFormat>()?;
        let icons = match (&self.icons, &self.icon_base) {
            (Some(path), _) => IconSet::load(path)?,
            (None, Some(base)) => IconSet::with_base(base),
            (None, None) => IconSet::default(),
        };

        let mut config = ViewerConfig::new(self.data_uri);
        config.format = format;
        config.icons = icons;
        Ok(config)
    }
}
