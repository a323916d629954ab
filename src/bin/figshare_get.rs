use colored::Colorize;
use structopt::StructOpt;

use figshare_get::cli::base::Matcher;
use figshare_get::cli::get::GetCommand;
use figshare_get::client::BaseClient;
use figshare_get::console::Terminal;

static HEADER: &str = r#"
--- figshare collection download ---
"#;

fn main() {
    let cmd = GetCommand::from_args();

    // FIGSHARE_API_URL may point at another API root, e.g. a staging instance
    let client = match BaseClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            println!("\n{} {}\n", "Error:".red().bold(), err);
            std::process::exit(err.exit_code());
        }
    };

    if atty::is(atty::Stream::Stdout) {
        println!("{}", HEADER.bold());
    }

    std::process::exit(cmd.process(&client, &mut Terminal));
}
