use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;

pub mod cmd;
pub mod helpers;

#[tokio::main]
async fn main() -> ExitCode {
    libpagepatch::util::logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::FirstCommitCmd),
        Box::new(cmd::HooksCmd),
        Box::new(cmd::LinksCmd),
        Box::new(cmd::MyIssuesCmd),
        Box::new(cmd::OldestCmd),
    ];

    let mut command = Command::new("pagepatch")
        .version(libpagepatch::constants::PAGEPATCH_VERSION)
        .about("Page patches for GitHub, Reddit and IMDb")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            if let Some(runner) = runners.get(command) {
                if let Err(err) = runner.run(args).await {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            } else {
                eprintln!("Unknown command `pagepatch {command}`");
                return ExitCode::FAILURE;
            }
        }
        None => unreachable!(), // subcommand_required
    }

    ExitCode::SUCCESS
}
