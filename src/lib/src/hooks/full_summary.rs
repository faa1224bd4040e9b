//! # IMDb Full Summary
//!
//! Replaces the truncated plot summary at the top of a title page with the
//! full storyline text from further down the page, and puts it back whenever
//! the site rewrites the summary.
//!

use crate::error::PagePatchError;
use crate::hooks::{Hook, PageContext, PageEvent, Patch};

pub const NAME: &str = "imdb-full-summary";
pub const URL_PATTERN: &str = r"^https://www\.imdb\.com/title/tt";

/// The truncated summary
pub const SUMMARY: &str = r#"[data-testid="plot-xl"]"#;

/// The full summary; its text is the first child's
pub const STORYLINE: &str = r#"[data-testid="storyline-plot-summary"] > div > div"#;

pub struct FullSummaryHook;

impl FullSummaryHook {
    pub fn new() -> FullSummaryHook {
        FullSummaryHook
    }
}

impl Default for FullSummaryHook {
    fn default() -> Self {
        FullSummaryHook::new()
    }
}

/// The text to put in the summary, if the page has both parts and they differ
pub fn replacement(ctx: &PageContext) -> Option<String> {
    let summary = ctx.select_one(SUMMARY)?;
    let storyline = ctx.select_one(STORYLINE)?;

    if storyline.text.is_empty() || summary.text == storyline.text {
        return None;
    }
    Some(storyline.text.clone())
}

impl Hook for FullSummaryHook {
    fn name(&self) -> &str {
        NAME
    }

    fn url_pattern(&self) -> &str {
        URL_PATTERN
    }

    fn events(&self) -> Vec<PageEvent> {
        vec![
            PageEvent::Load,
            PageEvent::Inserted {
                selector: String::from(SUMMARY),
            },
        ]
    }

    fn handle(
        &mut self,
        event: &PageEvent,
        ctx: &PageContext,
    ) -> Result<Vec<Patch>, PagePatchError> {
        match replacement(ctx) {
            Some(text) => {
                log::debug!("hooks::full_summary replacing summary on {:?}", event);
                Ok(vec![Patch::SetText {
                    selector: String::from(SUMMARY),
                    text,
                }])
            }
            None => Ok(vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::Region;

    const FULL: &str = "A ragtag group of survivors travels across a ruined continent in search of a home they only know from stories.";

    fn title_page(summary: &str, storyline: Option<&str>) -> PageContext {
        let ctx = PageContext::parse("https://www.imdb.com/title/tt7638460/")
            .unwrap()
            .with_region(SUMMARY, Region::with_text(summary));
        match storyline {
            Some(text) => ctx.with_region(STORYLINE, Region::with_text(text)),
            None => ctx,
        }
    }

    #[test]
    fn test_replaces_truncated_summary() -> Result<(), PagePatchError> {
        let mut hook = FullSummaryHook::new();
        let ctx = title_page("A ragtag group of survivors...", Some(FULL));

        let patches = hook.handle(&PageEvent::Load, &ctx)?;

        assert_eq!(
            patches,
            vec![Patch::SetText {
                selector: String::from(SUMMARY),
                text: String::from(FULL),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_reapplies_after_summary_rewritten() -> Result<(), PagePatchError> {
        let mut hook = FullSummaryHook::new();
        let inserted = PageEvent::Inserted {
            selector: String::from(SUMMARY),
        };

        // Already replaced: nothing to do
        let replaced = title_page(FULL, Some(FULL));
        assert!(hook.handle(&inserted, &replaced)?.is_empty());

        // The site put the short text back
        let rewritten = title_page("A ragtag group...", Some(FULL));
        assert_eq!(hook.handle(&inserted, &rewritten)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_skips_when_storyline_missing_or_empty() -> Result<(), PagePatchError> {
        let mut hook = FullSummaryHook::new();

        assert!(hook.handle(&PageEvent::Load, &title_page("Short", None))?.is_empty());
        assert!(hook.handle(&PageEvent::Load, &title_page("Short", Some("")))?.is_empty());

        let no_summary = PageContext::parse("https://www.imdb.com/title/tt0108983/")?
            .with_region(STORYLINE, Region::with_text(FULL));
        assert!(hook.handle(&PageEvent::Load, &no_summary)?.is_empty());
        Ok(())
    }
}
