use serde::{Deserialize, Serialize};
use std::fmt;

/// A commit as returned by the GitHub commits listing
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,
    pub html_url: String,
    #[serde(default)]
    pub commit: Option<CommitDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitAuthor {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl Commit {
    pub fn message(&self) -> Option<&str> {
        self.commit.as_ref().map(|detail| detail.message.as_str())
    }

    /// First line of the commit message
    pub fn summary(&self) -> Option<&str> {
        self.message().and_then(|message| message.lines().next())
    }
}

// Details are not compared, the listing may omit them
impl PartialEq for Commit {
    fn eq(&self, other: &Commit) -> bool {
        self.sha == other.sha && self.html_url == other.html_url
    }
}

impl Eq for Commit {}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary() {
            Some(summary) => write!(f, "{} {}", self.sha, summary),
            None => write!(f, "{}", self.sha),
        }
    }
}
