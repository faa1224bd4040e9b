use url::Url;

use crate::constants::{REL_FIRST, REL_LAST, REL_NEXT, REL_PREV};
use crate::util::link_header::{self, LinkRel};

/// Related pages of one response in a paged collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<Url>,
    pub prev: Option<Url>,
    pub first: Option<Url>,
    pub last: Option<Url>,
}

impl PageLinks {
    pub fn from_rels(links: &[LinkRel]) -> PageLinks {
        let pick = |rel: &str| link_header::find_rel(links, rel).map(|link| link.url.clone());
        PageLinks {
            next: pick(REL_NEXT),
            prev: pick(REL_PREV),
            first: pick(REL_FIRST),
            last: pick(REL_LAST),
        }
    }

    /// Links from an optional `Link` header, relative targets resolved against `base`
    pub fn from_header(header: Option<&str>, base: &Url) -> PageLinks {
        match header {
            Some(header) => PageLinks::from_rels(&link_header::parse_with_base(header, base)),
            None => PageLinks::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.prev.is_none() && self.first.is_none() && self.last.is_none()
    }
}

/// One page of a collection, newest items first
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub url: Url,
    pub items: Vec<T>,
    pub links: PageLinks,
}

impl<T> Page<T> {
    pub fn new(url: Url, items: Vec<T>, links: PageLinks) -> Page<T> {
        Page { url, items, links }
    }

    /// A page with no pagination metadata
    pub fn single(url: Url, items: Vec<T>) -> Page<T> {
        Page::new(url, items, PageLinks::default())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
