//! # Oldest item locator
//!
//! Collections such as the GitHub commit listing are paged newest first, so
//! the oldest item is the last element of the last page. The first page
//! tells us where the last page is through its `last` link; without any
//! pagination links the first page is the only page.
//!

use async_trait::async_trait;
use url::Url;

use crate::error::PagePatchError;
use crate::view::Page;

/// Where pages of a collection come from
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Page 1 of the collection
    async fn fetch_first(&self) -> Result<Page<T>, PagePatchError>;

    /// Any page referenced by a pagination link
    async fn fetch_page(&self, url: &Url) -> Result<Page<T>, PagePatchError>;
}

/// The page holding the oldest items: the `last` page, or page 1 if there is none
pub async fn last_page<T, S>(source: &S) -> Result<Page<T>, PagePatchError>
where
    T: Send,
    S: PageSource<T> + ?Sized,
{
    let first = source.fetch_first().await?;
    log::debug!(
        "locator::last_page got {} items from {} links {:?}",
        first.items.len(),
        first.url,
        first.links
    );

    let last_url = first.links.last.clone().filter(|url| *url != first.url);
    match last_url {
        Some(last_url) => {
            log::debug!("locator::last_page following last link {}", last_url);
            source.fetch_page(&last_url).await
        }
        None => Ok(first),
    }
}

/// Resolve the oldest item of a newest-first paged collection
pub async fn locate_oldest<T, S>(source: &S) -> Result<T, PagePatchError>
where
    T: Send,
    S: PageSource<T> + ?Sized,
{
    let page = last_page(source).await?;
    let url = page.url.clone();
    match page.items.into_iter().last() {
        Some(item) => Ok(item),
        None => Err(PagePatchError::empty_collection(url)),
    }
}
