use async_trait::async_trait;
use clap::{Arg, Command};

use libpagepatch::api;
use libpagepatch::error::PagePatchError;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "oldest";
pub struct OldestCmd;

#[async_trait]
impl RunCmd for OldestCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the oldest item of a newest-first paged json collection")
            .arg(
                Arg::new("url")
                    .help("Url or api path of the collection, e.g. /repos/OWNER/NAME/commits")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("api-host")
                    .long("api-host")
                    .help("Api host that relative paths are resolved against")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        let Some(target) = args.get_one::<String>("url") else {
            return Err(PagePatchError::basic_str("Must supply a collection url"));
        };
        let config = helpers::api_config(args.get_one::<String>("api-host"))?;

        let url = if target.starts_with('/') {
            api::endpoint::url_from_config(&config, target)?
        } else {
            url::Url::parse(target)?
        };

        let oldest = match api::client::commits::oldest_at(&config, url).await {
            Ok(item) => item,
            Err(err) => {
                let message = helpers::lookup_error_message("items", target, &err);
                return Err(PagePatchError::basic_str(message));
            }
        };

        println!("{}", serde_json::to_string_pretty(&oldest)?);
        Ok(())
    }
}
