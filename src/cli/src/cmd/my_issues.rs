use async_trait::async_trait;
use clap::{Arg, Command};

use libpagepatch::error::PagePatchError;
use libpagepatch::hooks::my_issues;
use libpagepatch::model::RepoRef;

use crate::cmd::RunCmd;

pub const NAME: &str = "my-issues";
pub struct MyIssuesCmd;

#[async_trait]
impl RunCmd for MyIssuesCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the \"My Issues\" link for a repository")
            .arg(
                Arg::new("user")
                    .long("user")
                    .short('u')
                    .help("Login of the signed-in user")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("repo")
                    .long("repo")
                    .short('r')
                    .help("Repository as OWNER/NAME")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("url")
                    .long("url")
                    .help("Current page url, used to tell whether the tab is selected")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        let (Some(user), Some(nwo)) = (
            args.get_one::<String>("user"),
            args.get_one::<String>("repo"),
        ) else {
            return Err(PagePatchError::basic_str("Must supply --user and --repo"));
        };
        let repo = RepoRef::from_nwo(nwo)?;

        let current = match args.get_one::<String>("url") {
            Some(url) => url::Url::parse(url)?,
            None => url::Url::parse(&format!("https://github.com/{}", repo.nwo()))?,
        };

        let link = my_issues::my_issues_link(user, &repo.owner, &repo.nwo(), &current);
        println!("https://github.com{}", link.href);
        if link.selected {
            println!("selected");
        }
        Ok(())
    }
}
