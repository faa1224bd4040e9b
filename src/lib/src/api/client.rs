//! # API Client - For reading paged collections from a remote api
//!

use crate::config::ApiConfig;
use crate::error::PagePatchError;
pub use reqwest::Url;
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;

pub mod commits;
pub mod pages;

const ACCEPT: &str = "application/vnd.github+json";

/// The configured api host as a url. It must be http(s) and name a host.
pub fn api_host_url(config: &ApiConfig) -> Result<Url, PagePatchError> {
    let url = Url::parse(&config.api_host)?;
    match (url.scheme(), url.host_str()) {
        ("http" | "https", Some(_)) => Ok(url),
        _ => Err(PagePatchError::basic_str(format!(
            "Invalid api host '{}', expected an http(s) url",
            config.api_host
        ))),
    }
}

/// One client per locator run, shared by the first and last page requests
pub fn new_for_config(config: &ApiConfig) -> Result<Client, PagePatchError> {
    match builder_for_config(config)?.build() {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(PagePatchError::HTTP(reqwest_err)),
    }
}

pub fn builder_for_config(config: &ApiConfig) -> Result<ClientBuilder, PagePatchError> {
    let host = api_host_url(config)?;
    log::debug!("api::client building client for {host}");

    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));

    let builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers);

    Ok(match config.timeout() {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    })
}

/// Rejects any non 2xx response, logging the body for debugging
pub async fn check_status(url: &str, res: reqwest::Response) -> Result<reqwest::Response, PagePatchError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");
    Err(PagePatchError::status(status, url))
}

/// Checks the status then decodes the json body
pub async fn parse_json_body<T: DeserializeOwned>(
    url: &str,
    res: reqwest::Response,
) -> Result<T, PagePatchError> {
    let res = check_status(url, res).await?;
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    let response: Result<T, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(response) => Ok(response),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(PagePatchError::basic_str(format!(
                "Could not deserialize response from [{url}]\n{status}\n'{body}'"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_for_config() {
        let config = ApiConfig::for_host("https://api.github.com");
        let client = new_for_config(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_new_for_config_with_timeout() {
        let mut config = ApiConfig::for_host("http://localhost:8080");
        config.timeout_secs = Some(3);
        let client = new_for_config(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_new_for_config_invalid_host() {
        let config = ApiConfig::for_host("not-a-url");
        let client = new_for_config(&config);
        assert!(client.is_err());
    }

    #[test]
    fn test_api_host_url() -> Result<(), PagePatchError> {
        let url = api_host_url(&ApiConfig::for_host("https://ghe.example.com:8443/api/v3"))?;
        assert_eq!(url.host_str(), Some("ghe.example.com"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), "/api/v3");

        assert!(matches!(
            api_host_url(&ApiConfig::for_host("not-a-url")),
            Err(PagePatchError::URL(_))
        ));
        assert!(api_host_url(&ApiConfig::for_host("ftp://files.example.com")).is_err());
        assert!(api_host_url(&ApiConfig::for_host("mailto:someone@example.com")).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_parse_json_body_rejects_error_status() -> Result<(), PagePatchError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let url = format!("{}/missing", server.url());
        let client = new_for_config(&ApiConfig::for_host(server.url()))?;
        let res = client.get(&url).send().await?;
        let result: Result<serde_json::Value, PagePatchError> = parse_json_body(&url, res).await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(err.is_status());
        assert!(err.to_string().contains("404"));
        Ok(())
    }
}
