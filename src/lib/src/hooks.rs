//! # Page hooks
//!
//! Each hook subscribes to page events on the urls it matches and answers
//! with the DOM patches the host should apply. The page is handed to the
//! hook as an explicit [`PageContext`]; hooks never touch global state.
//!

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::error::PagePatchError;

pub mod first_commit;
pub mod full_summary;
pub mod highlight;
pub mod my_issues;

pub use crate::hooks::first_commit::{FirstCommitHook, FirstCommitWidget};
pub use crate::hooks::full_summary::FullSummaryHook;
pub use crate::hooks::highlight::HighlightHook;
pub use crate::hooks::my_issues::MyIssuesHook;

/// Lifecycle events raised by the host page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    /// Full page load or in-app navigation (`turbo:load`)
    Load,
    /// Content matching `selector` was inserted
    Inserted { selector: String },
}

/// One matched element of the page
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// Identifying attribute (`id`, `data-fullname`, ...)
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Ids of the elements nested in this one
    #[serde(default)]
    pub children: Vec<String>,
}

impl Region {
    pub fn with_text(text: impl AsRef<str>) -> Region {
        Region {
            text: text.as_ref().to_string(),
            ..Region::default()
        }
    }

    pub fn with_id(id: impl AsRef<str>) -> Region {
        Region {
            id: Some(id.as_ref().to_string()),
            ..Region::default()
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.children.iter().any(|child| child == id)
    }
}

/// The page state a hook runs against
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageContext {
    pub url: Url,
    /// `<meta name=... content=...>` pairs
    #[serde(default)]
    pub meta: HashMap<String, String>,
    /// Matched elements by selector, in document order
    #[serde(default)]
    pub regions: HashMap<String, Vec<Region>>,
}

impl PageContext {
    pub fn new(url: Url) -> PageContext {
        PageContext {
            url,
            meta: HashMap::new(),
            regions: HashMap::new(),
        }
    }

    pub fn parse(url: &str) -> Result<PageContext, PagePatchError> {
        Ok(PageContext::new(Url::parse(url)?))
    }

    pub fn with_meta(mut self, name: impl AsRef<str>, content: impl AsRef<str>) -> PageContext {
        self.meta
            .insert(name.as_ref().to_string(), content.as_ref().to_string());
        self
    }

    pub fn with_region(mut self, selector: impl AsRef<str>, region: Region) -> PageContext {
        self.regions
            .entry(selector.as_ref().to_string())
            .or_default()
            .push(region);
        self
    }

    /// Meta content, empty values count as missing
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta
            .get(name)
            .map(|content| content.as_str())
            .filter(|content| !content.is_empty())
    }

    pub fn select(&self, selector: &str) -> &[Region] {
        self.regions
            .get(selector)
            .map(|regions| regions.as_slice())
            .unwrap_or_default()
    }

    pub fn select_one(&self, selector: &str) -> Option<&Region> {
        self.select(selector).first()
    }
}

/// The labelled link a hook inserts as a tab
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub href: String,
    pub hotkey: Option<String>,
    pub selected: bool,
}

/// A clickable widget appended to a container
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: String,
    pub label: String,
}

/// DOM operations requested from the host
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    AddStyle { css: String },
    Remove { selector: String },
    InsertTabAfter { anchor: String, tab: Tab },
    AppendWidget { container: String, widget: Widget },
    SetText { selector: String, text: String },
    AddClass { selector: String, class: String },
    RemoveClass { selector: String, class: String },
    Highlight { selector: String, ids: Vec<String> },
}

pub trait Hook: Send {
    fn name(&self) -> &str;

    /// Regex the page url must match
    fn url_pattern(&self) -> &str;

    /// Events this hook subscribes to
    fn events(&self) -> Vec<PageEvent>;

    /// Patches for one event. Missing elements mean no patches, not an error.
    fn handle(
        &mut self,
        event: &PageEvent,
        ctx: &PageContext,
    ) -> Result<Vec<Patch>, PagePatchError>;
}

struct Registered {
    pattern: Regex,
    events: Vec<PageEvent>,
    hook: Box<dyn Hook>,
}

/// Hooks by url pattern and event
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Registered>,
}

impl HookRegistry {
    pub fn new() -> HookRegistry {
        HookRegistry::default()
    }

    /// The GitHub, Reddit and IMDb hooks
    pub fn with_default_hooks() -> Result<HookRegistry, PagePatchError> {
        let mut registry = HookRegistry::new();
        registry.register(Box::new(MyIssuesHook::new()))?;
        registry.register(Box::new(FirstCommitHook::new()))?;
        registry.register(Box::new(HighlightHook::new()))?;
        registry.register(Box::new(FullSummaryHook::new()))?;
        Ok(registry)
    }

    pub fn register(&mut self, hook: Box<dyn Hook>) -> Result<(), PagePatchError> {
        let pattern = Regex::new(hook.url_pattern())
            .map_err(|err| PagePatchError::invalid_pattern(hook.url_pattern(), err))?;
        log::debug!("hooks::register {} on {}", hook.name(), pattern);
        self.hooks.push(Registered {
            pattern,
            events: hook.events(),
            hook,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of the hooks active on `url`
    pub fn matching(&self, url: &Url) -> Vec<&str> {
        self.hooks
            .iter()
            .filter(|registered| registered.pattern.is_match(url.as_str()))
            .map(|registered| registered.hook.name())
            .collect()
    }

    /// Run every hook subscribed to `event` on the context url, in registration order
    pub fn dispatch(
        &mut self,
        event: &PageEvent,
        ctx: &PageContext,
    ) -> Result<Vec<Patch>, PagePatchError> {
        let mut patches = Vec::new();
        for registered in self.hooks.iter_mut() {
            if !registered.pattern.is_match(ctx.url.as_str()) || !registered.events.contains(event)
            {
                continue;
            }

            let hook_patches = registered.hook.handle(event, ctx)?;
            log::debug!(
                "hooks::dispatch {} on {:?} produced {} patches",
                registered.hook.name(),
                event,
                hook_patches.len()
            );
            patches.extend(hook_patches);
        }
        Ok(patches)
    }
}
