use crate::errors::{ListItemError, Result};
use crate::types::ListItemOptions;

impl ListItemOptions {
    /// Parses options from a JSON document.
    ///
    /// Missing fields take their defaults, so `{}` yields `ListItemOptions::default()`.
    /// `chars` may be an array of bullets or a range expression string.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| ListItemError::Config {
            message: format!("failed to parse list-item options: {}", e),
        })
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BulletSpec, Resolution};

    #[test]
    fn test_empty_document_is_default() {
        let opts = ListItemOptions::from_json("{}").unwrap();
        assert_eq!(opts, ListItemOptions::default());
    }

    #[test]
    fn test_chars_string_is_range() {
        let opts = ListItemOptions::from_json(r#"{"chars": "1..3", "resolution": "percall"}"#)
            .unwrap();
        assert_eq!(opts.chars, BulletSpec::Range("1..3".to_string()));
        assert_eq!(opts.resolution, Resolution::PerCall);
    }

    #[test]
    fn test_malformed_document_is_config_error() {
        let err = ListItemOptions::from_json(r#"{"nobullet": "yes"}"#).unwrap_err();
        assert!(matches!(err, ListItemError::Config { .. }));
        assert!(err.to_string().starts_with("config error:"));
    }
}
