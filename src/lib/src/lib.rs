//! libpagepatch
//!
//! Small page patches for GitHub, Reddit and IMDb, and the one piece with
//! real logic behind them: finding the oldest item of a paged collection.
//!
//! # Examples
//!
//! Find the url of a repository's first commit:
//!
//! ```
//! use libpagepatch::api;
//! use libpagepatch::config::ApiConfig;
//! use libpagepatch::model::RepoRef;
//!
//! let config = ApiConfig::get()?;
//! let repo: RepoRef = "rust-lang/rust".parse()?;
//! let url = api::client::commits::first_commit_url(&config, &repo).await?;
//! println!("{url}");
//! ```
//!
//! Run the page hooks against a page:
//!
//! ```
//! use libpagepatch::hooks::{HookRegistry, PageContext, PageEvent};
//!
//! let mut registry = HookRegistry::with_default_hooks()?;
//! let ctx = PageContext::parse("https://github.com/rust-lang/rust")?
//!     .with_meta("user-login", "octocat");
//! let patches = registry.dispatch(&PageEvent::Load, &ctx)?;
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod hooks;
pub mod model;
pub mod test;
pub mod util;
pub mod view;
