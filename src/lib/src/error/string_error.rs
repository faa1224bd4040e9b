//! Message of a `PagePatchError` variant that has no underlying error

use derive_more::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{_0}")]
pub struct StringError(String);

impl StringError {
    pub fn new(s: String) -> Self {
        StringError(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringError {
    fn from(s: &str) -> Self {
        StringError(s.to_string())
    }
}

impl From<String> for StringError {
    fn from(s: String) -> Self {
        StringError(s)
    }
}

impl AsRef<str> for StringError {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::error::Error for StringError {}

#[cfg(test)]
mod tests {
    use super::StringError;
    use crate::error::PagePatchError;

    #[test]
    fn test_message_is_shown_unquoted() {
        let err = StringError::from("No items found in collection octocat/empty");
        assert_eq!(err.to_string(), "No items found in collection octocat/empty");
        assert_eq!(err.as_str(), err.as_ref());

        let wrapped = PagePatchError::empty_collection("octocat/empty");
        assert_eq!(wrapped.to_string(), err.to_string());
    }
}
