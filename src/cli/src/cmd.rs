use clap;
use libpagepatch::error::PagePatchError;

use async_trait::async_trait;

pub mod config;
pub use config::ConfigCmd;

pub mod first_commit;
pub use first_commit::FirstCommitCmd;

pub mod hooks;
pub use hooks::HooksCmd;

pub mod links;
pub use links::LinksCmd;

pub mod my_issues;
pub use my_issues::MyIssuesCmd;

pub mod oldest;
pub use oldest::OldestCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError>;
}
