//! Pages of a json array collection read over http

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::api::client;
use crate::config::ApiConfig;
use crate::core::PageSource;
use crate::error::PagePatchError;
use crate::view::{Page, PageLinks};

/// A collection endpoint answering with a json array body and a `Link` header
pub struct HttpPageSource<T> {
    client: Client,
    first_url: Url,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    pub fn new(config: &ApiConfig, first_url: Url) -> Result<HttpPageSource<T>, PagePatchError> {
        let client = client::new_for_config(config)?;
        Ok(HttpPageSource::with_client(client, first_url))
    }

    pub fn with_client(client: Client, first_url: Url) -> HttpPageSource<T> {
        HttpPageSource {
            client,
            first_url,
            _item: PhantomData,
        }
    }

    pub fn first_url(&self) -> &Url {
        &self.first_url
    }
}

/// GET one page, reading its pagination links before the body is consumed
pub async fn get_page<T: DeserializeOwned>(
    client: &Client,
    url: &Url,
) -> Result<Page<T>, PagePatchError> {
    log::debug!("api::client::pages::get_page {}", url);
    let res = client.get(url.clone()).send().await?;

    let link = link_header_value(res.headers());
    log::debug!("api::client::pages::get_page link header {:?}", link);
    let links = PageLinks::from_header(link.as_deref(), url);

    let items: Vec<T> = client::parse_json_body(url.as_str(), res).await?;
    Ok(Page::new(url.clone(), items, links))
}

/// Every `Link` line of a response as one header value, joined with ", ".
/// Lines are decoded lossily so a utf-8 parameter does not drop the line.
pub fn link_header_value(headers: &HeaderMap) -> Option<String> {
    let lines: Vec<String> = headers
        .get_all(header::LINK)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(lines.join(", "))
}

#[async_trait]
impl<T> PageSource<T> for HttpPageSource<T>
where
    T: DeserializeOwned + Send,
{
    async fn fetch_first(&self) -> Result<Page<T>, PagePatchError> {
        get_page(&self.client, &self.first_url).await
    }

    async fn fetch_page(&self, url: &Url) -> Result<Page<T>, PagePatchError> {
        get_page(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core;

    #[tokio::test]
    async fn test_get_page_reads_links_and_items() -> Result<(), PagePatchError> {
        let mut server = mockito::Server::new_async().await;
        let last = format!("{}/items?page=3", server.url());
        let link = format!("<{}/items?page=2>; rel=\"next\", <{last}>; rel=\"last\"", server.url());
        let mock = server
            .mock("GET", "/items")
            .with_status(200)
            .with_header("link", link.as_str())
            .with_body(r#"[1, 2, 3]"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/items", server.url()))?;
        let client = client::new_for_config(&ApiConfig::for_host(server.url()))?;
        let page: Page<u32> = get_page(&client, &url).await?;

        mock.assert_async().await;
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.links.last.map(|u| u.to_string()), Some(last));
        Ok(())
    }

    #[test]
    fn test_link_header_value_joins_lines() {
        let mut headers = HeaderMap::new();
        assert_eq!(link_header_value(&headers), None);

        headers.append(
            header::LINK,
            header::HeaderValue::from_static("<https://api.github.com/x?page=2>; rel=\"next\""),
        );
        headers.append(
            header::LINK,
            header::HeaderValue::from_static("<https://api.github.com/x?page=9>; rel=\"last\""),
        );

        assert_eq!(
            link_header_value(&headers).as_deref(),
            Some("<https://api.github.com/x?page=2>; rel=\"next\", <https://api.github.com/x?page=9>; rel=\"last\"")
        );
    }

    #[test]
    fn test_link_header_value_keeps_non_ascii_line() -> Result<(), PagePatchError> {
        let mut headers = HeaderMap::new();
        let value = header::HeaderValue::from_bytes(
            "<https://api.github.com/x?page=9>; rel=\"last\"; title=\"café\"".as_bytes(),
        )
        .map_err(|err| PagePatchError::basic_str(err.to_string()))?;
        headers.insert(header::LINK, value);

        let Some(link) = link_header_value(&headers) else {
            panic!("expected a link header value");
        };
        let base = Url::parse("https://api.github.com/x")?;
        let links = PageLinks::from_header(Some(link.as_str()), &base);
        assert_eq!(
            links.last.map(|u| u.to_string()),
            Some(String::from("https://api.github.com/x?page=9"))
        );
        Ok(())
    }

    /// page 1 sends its links on two header lines, `last` on the second
    #[tokio::test]
    async fn test_locate_oldest_follows_last_on_split_header() -> Result<(), PagePatchError> {
        let mut server = mockito::Server::new_async().await;
        let host = server.url();
        let _first = server
            .mock("GET", "/items")
            .with_status(200)
            .with_header("link", &format!("<{host}/items?page=2>; rel=\"next\""))
            .with_header("link", &format!("<{host}/older?page=9>; rel=\"last\""))
            .with_body(r#"["p1a", "p1b"]"#)
            .create_async()
            .await;
        let last = server
            .mock("GET", "/older")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "9".into()))
            .with_status(200)
            .with_body(r#"["A", "B"]"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{host}/items"))?;
        let source: HttpPageSource<String> = HttpPageSource::new(&ApiConfig::for_host(&host), url)?;
        let oldest = core::locate_oldest(&source).await?;

        last.assert_async().await;
        assert_eq!(oldest, "B");
        Ok(())
    }

    #[tokio::test]
    async fn test_locate_oldest_follows_last_with_utf8_param() -> Result<(), PagePatchError> {
        let mut server = mockito::Server::new_async().await;
        let host = server.url();
        let _first = server
            .mock("GET", "/items")
            .with_status(200)
            .with_header(
                "link",
                &format!("<{host}/older?page=9>; rel=\"last\"; title=\"café\""),
            )
            .with_body(r#"["p1a", "p1b"]"#)
            .create_async()
            .await;
        let last = server
            .mock("GET", "/older")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "9".into()))
            .with_status(200)
            .with_body(r#"["A", "B"]"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{host}/items"))?;
        let source: HttpPageSource<String> = HttpPageSource::new(&ApiConfig::for_host(&host), url)?;
        let oldest = core::locate_oldest(&source).await?;

        last.assert_async().await;
        assert_eq!(oldest, "B");
        Ok(())
    }

    #[tokio::test]
    async fn test_non_array_body_is_error() -> Result<(), PagePatchError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/items")
            .with_status(200)
            .with_body(r#"{"message": "not a list"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/items", server.url()))?;
        let source: HttpPageSource<u32> =
            HttpPageSource::new(&ApiConfig::for_host(server.url()), url)?;
        let result = core::locate_oldest(&source).await;

        let err = result.unwrap_err();
        assert!(!err.is_empty_collection());
        assert!(!err.is_status());
        Ok(())
    }
}
