use async_trait::async_trait;
use clap::{Arg, Command};
use std::path::Path;

use libpagepatch::error::PagePatchError;
use libpagepatch::hooks::{HookRegistry, PageContext, PageEvent};
use libpagepatch::util;

use crate::cmd::RunCmd;

pub const NAME: &str = "hooks";
pub struct HooksCmd;

#[async_trait]
impl RunCmd for HooksCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Run the page hooks against a page snapshot and print the patches as json")
            .arg(
                Arg::new("page")
                    .help("Json file holding the page url, meta tags and regions")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("event")
                    .long("event")
                    .short('e')
                    .help("Event to raise")
                    .value_parser(["load", "inserted"])
                    .default_value("load")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("selector")
                    .long("selector")
                    .short('s')
                    .help("Selector of the inserted content, for --event inserted")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("list")
                    .long("list")
                    .help("Only list the hooks active on the page url")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        let Some(page) = args.get_one::<String>("page") else {
            return Err(PagePatchError::basic_str("Must supply a page file"));
        };
        let contents = util::fs::read_from_path(Path::new(page))?;
        let ctx: PageContext = serde_json::from_str(&contents)?;

        let mut registry = HookRegistry::with_default_hooks()?;
        if args.get_flag("list") {
            for name in registry.matching(&ctx.url) {
                println!("{name}");
            }
            return Ok(());
        }

        let event = parse_event(
            args.get_one::<String>("event").map(String::as_str),
            args.get_one::<String>("selector"),
        )?;
        let patches = registry.dispatch(&event, &ctx)?;
        println!("{}", serde_json::to_string_pretty(&patches)?);
        Ok(())
    }
}

fn parse_event(event: Option<&str>, selector: Option<&String>) -> Result<PageEvent, PagePatchError> {
    match (event, selector) {
        (Some("inserted"), Some(selector)) => Ok(PageEvent::Inserted {
            selector: selector.to_string(),
        }),
        (Some("inserted"), None) => Err(PagePatchError::basic_str(
            "--event inserted needs a --selector",
        )),
        _ => Ok(PageEvent::Load),
    }
}
