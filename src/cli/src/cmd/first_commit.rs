use async_trait::async_trait;
use clap::{Arg, Command};

use libpagepatch::api;
use libpagepatch::error::PagePatchError;
use libpagepatch::model::RepoRef;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "first-commit";
pub struct FirstCommitCmd;

#[async_trait]
impl RunCmd for FirstCommitCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the web url of the first commit of a GitHub repository")
            .arg(
                Arg::new("repo")
                    .help("Repository as OWNER/NAME or a github.com url")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("api-host")
                    .long("api-host")
                    .help("Api host to query instead of the configured one")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("sha")
                    .long("sha")
                    .help("Print the commit sha and summary as well")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        let Some(value) = args.get_one::<String>("repo") else {
            return Err(PagePatchError::basic_str("Must supply a repository"));
        };
        let repo = parse_repo(value)?;
        let config = helpers::api_config(args.get_one::<String>("api-host"))?;

        let commit = match api::client::commits::first_commit(&config, &repo).await {
            Ok(commit) => commit,
            Err(err) => {
                let message = helpers::lookup_error_message("commits", &repo.nwo(), &err);
                return Err(PagePatchError::basic_str(message));
            }
        };

        if args.get_flag("sha") {
            println!("{}", commit);
        }
        println!("{}", commit.html_url);
        Ok(())
    }
}

/// OWNER/NAME, or a repository url on github.com
pub fn parse_repo(value: &str) -> Result<RepoRef, PagePatchError> {
    value.parse()
}
