//! Helpers for our unit and integration tests
//!

use env_logger::Env;
use mockito::{Matcher, Mock, ServerGuard};

use crate::config::ApiConfig;
use crate::model::RepoRef;

/// Id GitHub puts in the paging links instead of owner/name
pub const TEST_REPO_ID: u64 = 1234;

pub fn init_test_env() {
    let env = Env::default();
    if env_logger::try_init_from_env(env).is_ok() {
        log::debug!("Logger initialized");
    }
}

pub fn test_repo() -> RepoRef {
    RepoRef::new("octocat", "hello-world")
}

/// Config pointing at a mock server
pub fn config_for(server: &ServerGuard) -> ApiConfig {
    ApiConfig::for_host(server.url())
}

/// A commits listing body with one commit per html url, newest first
pub fn commits_body(html_urls: &[&str]) -> String {
    let commits: Vec<serde_json::Value> = html_urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            serde_json::json!({
                "sha": format!("{:040x}", html_urls.len() - i),
                "html_url": url,
                "commit": {"message": format!("commit {url}")}
            })
        })
        .collect();
    serde_json::Value::Array(commits).to_string()
}

/// `Link` header for page 1 of a listing with `last_page` pages
pub fn link_header(host: &str, last_page: usize) -> String {
    format!(
        "<{host}/repositories/{TEST_REPO_ID}/commits?page=2>; rel=\"next\", <{host}/repositories/{TEST_REPO_ID}/commits?page={last_page}>; rel=\"last\""
    )
}

/// Mock page 1 of the commits of `repo`, with an optional `Link` header
pub async fn mock_first_page(
    server: &mut ServerGuard,
    repo: &RepoRef,
    html_urls: &[&str],
    link: Option<&str>,
) -> Mock {
    let path = format!("/repos/{}/{}/commits", repo.owner, repo.name);
    let mock = server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_header("content-type", "application/json");
    let mock = match link {
        Some(link) => mock.with_header("link", link),
        None => mock,
    };
    mock.with_body(commits_body(html_urls)).create_async().await
}

/// Mock page `page` of the listing linked from page 1, and no other page
pub async fn mock_linked_page(server: &mut ServerGuard, page: usize, html_urls: &[&str]) -> Mock {
    let path = format!("/repositories/{TEST_REPO_ID}/commits");
    server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded(String::from("page"), page.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(commits_body(html_urls))
        .create_async()
        .await
}
