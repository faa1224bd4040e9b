//! # GitHub My Issues
//!
//! Adds a "My Issues" tab next to a repository's Issues tab, linking to the
//! issues the logged-in user is involved in.
//!

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::PagePatchError;
use crate::hooks::{Hook, PageContext, PageEvent, Patch, Tab};

pub const NAME: &str = "github-my-issues";
pub const URL_PATTERN: &str = r"^https://github\.com/";

/// Id of the inserted link, used to find and replace a stale one on navigation
pub const ID: &str = "my-issues-tab";

/// The stock Issues link, the new tab is cloned from and inserted after its tab
pub const ISSUES_LINK: &str = "a#issues-tab";

pub const MY_ISSUES: &str = "My Issues";
pub const HOTKEY: &str = "g I";
pub const DESELECTED: &str = "deselected";

/// Meta tag holding `<owner>/<repo>`
pub const REPO: &str = "octolytics-dimension-repository_nwo";

/// Meta tag holding the logged-in user
pub const SELF: &str = "user-login";

/// Meta tag holding the repository owner
pub const USER: &str = "octolytics-dimension-user_login";

pub const STYLE: &str = ".deselected::after {\n    background: transparent !important;\n}\n";

// Characters JavaScript's escape() leaves alone
const ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b'*')
    .remove(b'_')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyIssuesLink {
    pub href: String,
    pub selected: bool,
}

/// Search terms for the issues involving `self_login`, narrowed to open,
/// unarchived issues on the user's own repositories
pub fn query_terms(self_login: &str, owner: &str) -> Vec<String> {
    let mut terms = vec![format!("involves:{self_login}"), String::from("sort:updated-desc")];
    if owner == self_login {
        terms.insert(0, String::from("archived:false"));
        terms.insert(0, String::from("is:open"));
    }
    terms
}

/// The link target and whether the current page already shows it
pub fn my_issues_link(self_login: &str, owner: &str, nwo: &str, current: &Url) -> MyIssuesLink {
    let query = query_terms(self_login, owner).join("+");
    let path = format!("/{nwo}/issues");
    let href = format!("{path}?q={}", utf8_percent_encode(&query, ESCAPE));

    let involves = format!("involves:{self_login}");
    let selected = current.path() == path
        && current
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, q)| q.split_whitespace().any(|term| term == involves))
            .unwrap_or(false);

    MyIssuesLink { href, selected }
}

pub struct MyIssuesHook {
    style_added: bool,
}

impl MyIssuesHook {
    pub fn new() -> MyIssuesHook {
        MyIssuesHook { style_added: false }
    }
}

impl Default for MyIssuesHook {
    fn default() -> Self {
        MyIssuesHook::new()
    }
}

impl Hook for MyIssuesHook {
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
        let mut patches = Vec::new();
        if !self.style_added {
            self.style_added = true;
            patches.push(Patch::AddStyle {
                css: String::from(STYLE),
            });
        }

        // A tab from the previous navigation has dead handlers, replace it
        patches.push(Patch::Remove {
            selector: format!("#{ID}"),
        });

        let (Some(self_login), Some(owner), Some(nwo)) =
            (ctx.meta(SELF), ctx.meta(USER), ctx.meta(REPO))
        else {
            log::debug!("hooks::my_issues not logged in or not on a repository");
            return Ok(patches);
        };

        if ctx.select(ISSUES_LINK).len() != 1 {
            log::debug!("hooks::my_issues no unique issues tab");
            return Ok(patches);
        }

        let link = my_issues_link(self_login, owner, nwo, &ctx.url);
        if link.selected {
            patches.push(Patch::AddClass {
                selector: String::from(ISSUES_LINK),
                class: String::from(DESELECTED),
            });
        } else {
            patches.push(Patch::RemoveClass {
                selector: String::from(ISSUES_LINK),
                class: String::from(DESELECTED),
            });
        }

        patches.push(Patch::InsertTabAfter {
            anchor: String::from(ISSUES_LINK),
            tab: Tab {
                id: String::from(ID),
                label: String::from(MY_ISSUES),
                href: link.href,
                hotkey: Some(String::from(HOTKEY)),
                selected: link.selected,
            },
        });

        Ok(patches)
    }
}
