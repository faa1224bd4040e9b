use async_trait::async_trait;
use clap::{Arg, Command};

use libpagepatch::api;
use libpagepatch::constants::{REL_FIRST, REL_LAST, REL_NEXT, REL_PREV};
use libpagepatch::error::PagePatchError;
use libpagepatch::util::link_header::{self, LinkRel};
use libpagepatch::view::{Page, PageLinks};

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "links";
pub struct LinksCmd;

#[async_trait]
impl RunCmd for LinksCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the pagination links of a collection url, one `rel url` per line")
            .arg(
                Arg::new("url")
                    .help("Collection url to fetch, or the base url for --header")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("header")
                    .long("header")
                    .help("Parse this Link header value instead of fetching the url")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        let Some(url) = args.get_one::<String>("url") else {
            return Err(PagePatchError::basic_str("Must supply a url"));
        };
        let url = url::Url::parse(url)?;

        let links = match args.get_one::<String>("header") {
            Some(header) => link_header::parse_with_base(header, &url),
            None => {
                let config = helpers::api_config(None)?;
                let client = api::client::new_for_config(&config)?;
                let page: Page<serde_json::Value> =
                    api::client::pages::get_page(&client, &url).await?;
                page_rels(&page.links)
            }
        };

        for link in links {
            println!("{} {}", link.rel, link.url);
        }
        Ok(())
    }
}

fn page_rels(links: &PageLinks) -> Vec<LinkRel> {
    [
        (REL_FIRST, &links.first),
        (REL_PREV, &links.prev),
        (REL_NEXT, &links.next),
        (REL_LAST, &links.last),
    ]
    .into_iter()
    .filter_map(|(rel, url)| {
        url.as_ref().map(|url| LinkRel {
            url: url.clone(),
            rel: rel.to_string(),
        })
    })
    .collect()
}
