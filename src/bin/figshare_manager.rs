use colored::Colorize;
use structopt::StructOpt;

use figshare_get::cli::base::Matcher;
use figshare_get::cli::manager::ManagerCommand;
use figshare_get::client::BaseClient;
use figshare_get::console::Terminal;

fn main() {
    let cmd = ManagerCommand::from_args();

    let client = match BaseClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            println!("\n{} {}\n", "Error:".red().bold(), err);
            std::process::exit(err.exit_code());
        }
    };

    std::process::exit(cmd.process(&client, &mut Terminal));
}
