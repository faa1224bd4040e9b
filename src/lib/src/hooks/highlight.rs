//! # Reddit Highlighter
//!
//! Highlights the stories on a Reddit listing that have not been seen before.
//! Seen stories are remembered for the lifetime of the hook only.
//!

use std::collections::HashSet;

use crate::error::PagePatchError;
use crate::hooks::{Hook, PageContext, PageEvent, Patch};

pub const NAME: &str = "reddit-highlighter";

/// Front page, subreddits, and their hot/new/rising/controversial/top listings
pub const URL_PATTERN: &str =
    r"^https?://([^.]+\.)?reddit\.com(/r/[^/]+(/(hot|new|rising|controversial|top))?)?/?$";

/// One story, identified by its `data-fullname`
pub const ITEM: &str = "div#siteTable div.thing[data-fullname]";

/// The element of a story that gets highlighted
pub const TARGET: &str = "a.title";

pub struct HighlightHook {
    seen: HashSet<String>,
}

impl HighlightHook {
    pub fn new() -> HighlightHook {
        HighlightHook {
            seen: HashSet::new(),
        }
    }

    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Ids in `ids` not seen before, in page order. All of them are marked seen.
    pub fn unseen<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut fresh = Vec::new();
        for id in ids {
            if self.seen.insert(id.to_string()) {
                fresh.push(id.to_string());
            }
        }
        fresh
    }
}

impl Default for HighlightHook {
    fn default() -> Self {
        HighlightHook::new()
    }
}

impl Hook for HighlightHook {
    fn name(&self) -> &str {
        NAME
    }

    fn url_pattern(&self) -> &str {
        URL_PATTERN
    }

    fn events(&self) -> Vec<PageEvent> {
        vec![PageEvent::Load]
    }

    fn handle(
        &mut self,
        _event: &PageEvent,
        ctx: &PageContext,
    ) -> Result<Vec<Patch>, PagePatchError> {
        let ids = ctx
            .select(ITEM)
            .iter()
            .filter_map(|item| item.id.as_deref());
        let fresh = self.unseen(ids);
        log::debug!("hooks::highlight {} new items", fresh.len());

        if fresh.is_empty() {
            return Ok(vec![]);
        }
        Ok(vec![Patch::Highlight {
            selector: String::from(TARGET),
            ids: fresh,
        }])
    }
}
