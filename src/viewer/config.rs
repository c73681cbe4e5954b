use crate::viewer::format::DataFormat;
use crate::viewer::icons::IconSet;

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub data_uri: String,
    pub format: DataFormat,
    pub icons: IconSet,
}

impl ViewerConfig {
    pub fn new(data_uri: String) -> Self {
        Self {
            data_uri,
            format: DataFormat::Json,
            icons: IconSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerConfig;
    use crate::viewer::format::DataFormat;
    use crate::viewer::icons::IconSet;

    /// `new` stores the URI and falls back to JSON with stock icons.
    #[test]
    fn new_sets_defaults() {
        // Arrange
        // Act
        let config = ViewerConfig::new("http://example.org/cvp.json".to_string());
        // Assert
        assert_eq!(config.data_uri, "http://example.org/cvp.json");
        assert_eq!(config.format, DataFormat::Json);
        assert_eq!(config.icons, IconSet::default());
    }
}
