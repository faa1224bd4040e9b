use async_trait::async_trait;
use clap::{Arg, Command};

use libpagepatch::config::ApiConfig;
use libpagepatch::error::PagePatchError;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Sets the api configuration in ~/.config/pagepatch/api_config.toml")
            .arg(
                Arg::new("api-host")
                    .long("api-host")
                    .help("Set the api host that collections are read from, e.g. a GitHub Enterprise api url.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("user-agent")
                    .long("user-agent")
                    .help("Set the user agent sent with every request.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("timeout")
                    .long("timeout")
                    .help("Set a request timeout in seconds. 0 removes it.")
                    .value_parser(clap::value_parser!(u64))
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("show")
                    .long("show")
                    .help("Print the current configuration.")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg_required_else_help(true)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), PagePatchError> {
        if args.get_flag("show") {
            print!("{}", toml::to_string(&ApiConfig::get()?)?);
            return Ok(());
        }

        // Start from the saved file so an env override is not persisted
        let path = ApiConfig::config_path()?;
        let mut config = if path.exists() {
            ApiConfig::new(&path)?
        } else {
            ApiConfig::default()
        };

        if let Some(host) = args.get_one::<String>("api-host") {
            config.api_host = host.trim_end_matches('/').to_string();
        }
        if let Some(user_agent) = args.get_one::<String>("user-agent") {
            config.user_agent = user_agent.to_string();
        }
        if let Some(timeout) = args.get_one::<u64>("timeout") {
            config.timeout_secs = match timeout {
                0 => None,
                secs => Some(*secs),
            };
        }

        config.save_default()?;
        Ok(())
    }
}
