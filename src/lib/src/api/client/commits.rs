use reqwest::Url;

use crate::api;
use crate::api::client::pages::HttpPageSource;
use crate::config::ApiConfig;
use crate::core;
use crate::error::PagePatchError;
use crate::model::{Commit, RepoRef};

/// The first (oldest) commit of a repository
pub async fn first_commit(config: &ApiConfig, repo: &RepoRef) -> Result<Commit, PagePatchError> {
    let url = api::endpoint::commits_url(config, repo)?;
    log::debug!("api::client::commits::first_commit {} via {}", repo, url);

    let source: HttpPageSource<Commit> = HttpPageSource::new(config, url)?;
    match core::locate_oldest(&source).await {
        Ok(commit) => {
            log::debug!("api::client::commits::first_commit found {}", commit.sha);
            Ok(commit)
        }
        Err(err) if err.is_empty_collection() => Err(PagePatchError::empty_collection(format!(
            "commits of {repo}"
        ))),
        Err(err) => Err(err),
    }
}

/// Web url of the first commit, the link target for the "1st commit" widget
pub async fn first_commit_url(config: &ApiConfig, repo: &RepoRef) -> Result<String, PagePatchError> {
    let commit = first_commit(config, repo).await?;
    Ok(commit.html_url)
}

/// Oldest item of any newest-first json array collection
pub async fn oldest_at(config: &ApiConfig, url: Url) -> Result<serde_json::Value, PagePatchError> {
    let source: HttpPageSource<serde_json::Value> = HttpPageSource::new(config, url)?;
    core::locate_oldest(&source).await
}
