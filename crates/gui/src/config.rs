//! Box configuration files: `{"box_dimensions": {"length": .., "width": .., "height": ..}}`

use std::io;
use std::path::{Path, PathBuf};

use shared::{BoxConfig, ParseError};
use thiserror::Error;

/// Failure to load a box configuration file
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid box dimensions: {0}")]
    Dimensions(#[from] ParseError),
}

/// Parse config text. Unknown keys are ignored; `box_dimensions` may be absent,
/// but when present all three extents must be positive numbers.
pub fn parse_box_config(json: &str) -> Result<BoxConfig, FileError> {
    let config: BoxConfig = serde_json::from_str(json)?;
    if let Some(dims) = &config.box_dimensions {
        dims.validate()?;
    }
    Ok(config)
}

/// Read and parse a config file
pub fn read_box_config(path: &Path) -> Result<BoxConfig, FileError> {
    let json = std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_box_config(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_config() {
        let config =
            parse_box_config(r#"{"box_dimensions": {"length": 10, "width": 20, "height": 30}}"#)
                .unwrap();
        assert_eq!(config.box_dimensions.unwrap().extents(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_parse_without_key() {
        let config = parse_box_config(r#"{"name": "shipping"}"#).unwrap();
        assert!(config.box_dimensions.is_none());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_box_config("{ box_dimensions: ").unwrap_err();
        assert!(matches!(err, FileError::Json(_)));
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let err = parse_box_config(
            r#"{"box_dimensions": {"length": "ten", "width": 20, "height": 30}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FileError::Json(_)));
    }

    #[test]
    fn test_parse_non_positive_field() {
        let err =
            parse_box_config(r#"{"box_dimensions": {"length": 10, "width": 0, "height": 30}}"#)
                .unwrap_err();
        match err {
            FileError::Dimensions(e) => assert_eq!(e.axis(), shared::Axis::Width),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"box_dimensions": {{"length": 12.5, "width": 8, "height": 4}}}}"#
        )
        .unwrap();

        let config = read_box_config(file.path()).unwrap();
        assert_eq!(config.box_dimensions.unwrap().extents(), [12.5, 8.0, 4.0]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_box_config(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
