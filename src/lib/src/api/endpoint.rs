use url::Url;

use crate::config::ApiConfig;
use crate::error::PagePatchError;
use crate::model::RepoRef;

/// Join a path onto the configured api host, keeping any path prefix of the host (GHE's /api/v3)
pub fn url_from_config(config: &ApiConfig, uri: &str) -> Result<Url, PagePatchError> {
    let host = config.api_host.trim_end_matches('/');
    let uri = uri.trim_start_matches('/');
    Ok(Url::parse(&format!("{host}/{uri}"))?)
}

/// {api_host}/repos/{owner}/{name}/commits
pub fn commits_url(config: &ApiConfig, repo: &RepoRef) -> Result<Url, PagePatchError> {
    let uri = format!("/repos/{}/{}/commits", repo.owner, repo.name);
    url_from_config(config, &uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_url() -> Result<(), PagePatchError> {
        let config = ApiConfig::default();
        let repo = RepoRef::new("chocolateboy", "userscripts");
        let url = commits_url(&config, &repo)?;
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/chocolateboy/userscripts/commits"
        );
        Ok(())
    }

    #[test]
    fn test_commits_url_keeps_host_prefix() -> Result<(), PagePatchError> {
        let config = ApiConfig::for_host("https://ghe.example.com/api/v3/");
        let repo = RepoRef::new("team", "project");
        let url = commits_url(&config, &repo)?;
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/team/project/commits"
        );
        Ok(())
    }
}
