//! # GitHub First Commit
//!
//! Appends a "1st commit" widget to a repository's commit bar. Clicking it
//! resolves the oldest commit through the commits api and hands its url to
//! the caller for navigation.
//!

use crate::api;
use crate::config::ApiConfig;
use crate::error::PagePatchError;
use crate::hooks::{Hook, PageContext, PageEvent, Patch, Widget};
use crate::model::RepoRef;

pub const NAME: &str = "github-first-commit";
pub const URL_PATTERN: &str = r"^https://github\.com/";

pub const COMMIT_BAR: &str =
    "div.js-details-container[data-issue-and-pr-hovercards-enabled] > *:last ul";

pub const ID: &str = "first-commit";
pub const LABEL: &str = "1st commit";
pub const LOADING: &str = "Loading...";

/// Meta tag holding the `<owner>/<repo>` of the root of the fork network
pub const NETWORK_ROOT: &str = "octolytics-dimension-repository_network_root_nwo";

pub struct FirstCommitHook;

impl FirstCommitHook {
    pub fn new() -> FirstCommitHook {
        FirstCommitHook
    }

    fn event() -> PageEvent {
        PageEvent::Inserted {
            selector: String::from(COMMIT_BAR),
        }
    }
}

impl Default for FirstCommitHook {
    fn default() -> Self {
        FirstCommitHook::new()
    }
}

impl Hook for FirstCommitHook {
    fn name(&self) -> &str {
        NAME
    }

    fn url_pattern(&self) -> &str {
        URL_PATTERN
    }

    fn events(&self) -> Vec<PageEvent> {
        vec![FirstCommitHook::event()]
    }

    fn handle(
        &mut self,
        _event: &PageEvent,
        ctx: &PageContext,
    ) -> Result<Vec<Patch>, PagePatchError> {
        let Some(bar) = ctx.select_one(COMMIT_BAR) else {
            return Ok(vec![]);
        };

        // Pages restored from history may still carry the widget
        if bar.contains(ID) {
            log::debug!("hooks::first_commit widget already present");
            return Ok(vec![]);
        }

        let Some(widget) = FirstCommitWidget::from_context(ctx) else {
            return Ok(vec![]);
        };

        Ok(vec![Patch::AppendWidget {
            container: String::from(COMMIT_BAR),
            widget: Widget {
                id: String::from(ID),
                label: widget.label,
            },
        }])
    }
}

/// Label state of one "1st commit" widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstCommitWidget {
    pub repo: RepoRef,
    pub label: String,
}

impl FirstCommitWidget {
    pub fn new(repo: RepoRef) -> FirstCommitWidget {
        FirstCommitWidget {
            repo,
            label: String::from(LABEL),
        }
    }

    /// Widget for the repository named in the page meta tags
    pub fn from_context(ctx: &PageContext) -> Option<FirstCommitWidget> {
        let nwo = ctx.meta(NETWORK_ROOT)?;
        match RepoRef::from_nwo(nwo) {
            Ok(repo) => Some(FirstCommitWidget::new(repo)),
            Err(err) => {
                log::debug!("hooks::first_commit {}", err);
                None
            }
        }
    }

    /// Show the loading label and return the repository to resolve
    pub fn click(&mut self) -> &RepoRef {
        self.label = String::from(LOADING);
        &self.repo
    }

    /// Put the original label back, e.g. before leaving the page
    pub fn restore(&mut self) {
        self.label = String::from(LABEL);
    }

    /// Click, then resolve the first commit url. The label is restored on failure.
    pub async fn open(&mut self, config: &ApiConfig) -> Result<String, PagePatchError> {
        let repo = self.click().clone();
        match api::client::commits::first_commit_url(config, &repo).await {
            Ok(url) => Ok(url),
            Err(err) => {
                self.restore();
                Err(err)
            }
        }
    }
}
