//! Errors for the pagepatch library
//!
//! Enumeration for all errors that can occur in the pagepatch library
//!

use derive_more::{Display, Error};
use std::io;

pub mod string_error;

pub use crate::error::string_error::StringError;

pub const CONFIG_DIR_NOT_FOUND: &str = "Home directory not found, cannot locate pagepatch config";

#[derive(Debug, Display, Error)]
pub enum PagePatchError {
    // Collections
    EmptyCollection(StringError),
    Status(StringError),

    // Repository references
    InvalidRepo(StringError),

    // Hooks
    InvalidPattern(StringError),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),
    Regex(regex::Error),

    // Fallback
    Basic(StringError),
}

impl PagePatchError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        PagePatchError::Basic(StringError::from(s.as_ref()))
    }

    pub fn empty_collection(url: impl AsRef<str>) -> Self {
        let err = format!("No items found in collection {}", url.as_ref());
        PagePatchError::EmptyCollection(StringError::from(err))
    }

    pub fn status(status: reqwest::StatusCode, url: impl AsRef<str>) -> Self {
        let err = format!("Err status [{}] from url {}", status, url.as_ref());
        PagePatchError::Status(StringError::from(err))
    }

    pub fn invalid_repo(value: impl AsRef<str>) -> Self {
        let err = format!(
            "Invalid repository '{}', expected <owner>/<repo> or a https://github.com/<owner>/<repo> url",
            value.as_ref()
        );
        PagePatchError::InvalidRepo(StringError::from(err))
    }

    pub fn invalid_pattern(pattern: impl AsRef<str>, err: impl std::fmt::Display) -> Self {
        let err = format!("Invalid url pattern '{}': {}", pattern.as_ref(), err);
        PagePatchError::InvalidPattern(StringError::from(err))
    }

    pub fn config_dir_not_found() -> Self {
        PagePatchError::basic_str(CONFIG_DIR_NOT_FOUND)
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self, PagePatchError::EmptyCollection(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self, PagePatchError::Status(_))
    }
}

impl From<io::Error> for PagePatchError {
    fn from(error: io::Error) -> Self {
        PagePatchError::IO(error)
    }
}

impl From<String> for PagePatchError {
    fn from(error: String) -> Self {
        PagePatchError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for PagePatchError {
    fn from(error: toml::ser::Error) -> Self {
        PagePatchError::TomlSer(error)
    }
}

impl From<toml::de::Error> for PagePatchError {
    fn from(error: toml::de::Error) -> Self {
        PagePatchError::TomlDe(error)
    }
}

impl From<url::ParseError> for PagePatchError {
    fn from(error: url::ParseError) -> Self {
        PagePatchError::URL(error)
    }
}

impl From<serde_json::Error> for PagePatchError {
    fn from(error: serde_json::Error) -> Self {
        PagePatchError::JSON(error)
    }
}

impl From<reqwest::Error> for PagePatchError {
    fn from(error: reqwest::Error) -> Self {
        PagePatchError::HTTP(error)
    }
}

impl From<regex::Error> for PagePatchError {
    fn from(error: regex::Error) -> Self {
        PagePatchError::Regex(error)
    }
}

#[cfg(test)]
mod tests {
    use super::PagePatchError;

    #[test]
    fn test_empty_collection_is_distinct_from_status() {
        let empty = PagePatchError::empty_collection("https://api.github.com/repos/a/b/commits");
        let status = PagePatchError::status(
            reqwest::StatusCode::NOT_FOUND,
            "https://api.github.com/repos/a/b/commits",
        );

        assert!(empty.is_empty_collection());
        assert!(!empty.is_status());
        assert!(status.is_status());
        assert!(!status.is_empty_collection());
        assert!(status.to_string().contains("404"));
    }
}
