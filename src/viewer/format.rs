use std::fmt;
use std::str::FromStr;

use crate::transport::errors::ViewerError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataFormat {
    #[default]
    Json,
}

impl FromStr for DataFormat {
    type Err = ViewerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "xml" => Err(ViewerError::UnsupportedFormat(
                "The XML format is not supported yet.".to_string(),
            )),
            _ => Err(ViewerError::UnsupportedFormat(format!(
                "The data format {value} is not supported."
            ))),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Json => write!(f, "json"),
        }
    }
}
