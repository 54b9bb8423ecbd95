use agent_console::app::App;
use agent_console::cli;
use agent_console::config::Config;
use agent_console::logger::{level_for_verbosity, ConsoleLogger};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();
    ConsoleLogger::new(level_for_verbosity(matches.occurrences_of("verbose"))).init()?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let command = cli::command(&matches)?;
    App::start(config, command).await
}
