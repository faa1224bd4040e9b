use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::constants::GITHUB_HOST;
use crate::error::PagePatchError;

/// An `<owner>/<name>` repository reference
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl AsRef<str>, name: impl AsRef<str>) -> RepoRef {
        RepoRef {
            owner: owner.as_ref().to_string(),
            name: name.as_ref().to_string(),
        }
    }

    /// Parse "owner/name" as found in the repository meta tags
    pub fn from_nwo(nwo: &str) -> Result<RepoRef, PagePatchError> {
        let mut parts = nwo.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_segment(owner) && is_segment(name) => {
                Ok(RepoRef::new(owner, name))
            }
            _ => Err(PagePatchError::invalid_repo(nwo)),
        }
    }

    /// Parse a repository page url such as https://github.com/owner/name/tree/main
    pub fn from_url(url: &Url) -> Result<RepoRef, PagePatchError> {
        let host = url.host_str().unwrap_or_default();
        if host != GITHUB_HOST && host != format!("www.{GITHUB_HOST}") {
            return Err(PagePatchError::invalid_repo(url.as_str()));
        }

        let mut segments = url
            .path_segments()
            .ok_or_else(|| PagePatchError::invalid_repo(url.as_str()))?
            .filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => {
                let name = name.strip_suffix(".git").unwrap_or(name);
                if is_segment(owner) && is_segment(name) {
                    Ok(RepoRef::new(owner, name))
                } else {
                    Err(PagePatchError::invalid_repo(url.as_str()))
                }
            }
            _ => Err(PagePatchError::invalid_repo(url.as_str())),
        }
    }

    pub fn nwo(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '?' || c == '#')
}

impl FromStr for RepoRef {
    type Err = PagePatchError;

    fn from_str(s: &str) -> Result<RepoRef, PagePatchError> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s)?;
            RepoRef::from_url(&url)
        } else {
            RepoRef::from_nwo(s)
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::RepoRef;
    use crate::error::PagePatchError;

    #[test]
    fn test_parse_nwo() -> Result<(), PagePatchError> {
        let repo: RepoRef = "chocolateboy/userscripts".parse()?;
        assert_eq!(repo, RepoRef::new("chocolateboy", "userscripts"));
        assert_eq!(repo.nwo(), "chocolateboy/userscripts");
        Ok(())
    }

    #[test]
    fn test_parse_github_url() -> Result<(), PagePatchError> {
        let repo: RepoRef = "https://github.com/rust-lang/rust/tree/master/src".parse()?;
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));

        let repo: RepoRef = "https://github.com/rust-lang/cargo.git".parse()?;
        assert_eq!(repo, RepoRef::new("rust-lang", "cargo"));
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        for value in ["", "owner", "owner/", "/name", "a/b/c", "https://gitlab.com/a/b", "https://github.com/a"] {
            let result = value.parse::<RepoRef>();
            assert!(result.is_err(), "expected {value:?} to be rejected");
        }
    }
}
