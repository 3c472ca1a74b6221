use clap::Parser;
use hurl_lib::core::logger::Logger;
use hurl_lib::HurlConfig;
use std::path::PathBuf;

mod commands;
mod core;

use crate::core::exit_code::ExitCode;
use commands::Commands;

#[derive(Parser)]
#[command(name = "hurl")]
#[command(about = "Make HTTP requests, keep every exchange, look it up later by id.")]
#[command(version = hurl_lib::core::version::app_version())]
struct Args {
    #[arg(long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[arg(
        long,
        value_name = "HOST",
        help = "Host this deployment answers on; requests to it are refused [env: WEBSITE]",
        global = true
    )]
    website: Option<String>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding stored hurls and views [env: HURL_DB]",
        global = true
    )]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Args {
    /// Environment first, command line flags on top.
    fn config(&self) -> HurlConfig {
        let mut config = HurlConfig::from_env();
        if self.debug {
            config.debug = true;
        }
        if let Some(website) = &self.website {
            config = config.with_website(website.clone());
        }
        if let Some(store) = &self.store {
            config = config.with_store_path(store.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.config();
    Logger::init(config.debug);

    match &args.command {
        Commands::Run(run_args) => commands::run::execute_run(&config, run_args).await,
        Commands::Show(show_args) => commands::show::execute_show(&config, show_args),
        Commands::View(view_args) => commands::view::execute_view(&config, view_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_combine_with_run_shorthands() {
        let args = Args::try_parse_from([
            "hurl",
            "--debug",
            "run",
            "https://example.com",
            "-d",
            "a=1",
            "-H",
            "X: 1",
        ])
        .unwrap();

        assert!(args.debug);
        assert!(args.config().debug);
        match args.command {
            Commands::Run(run_args) => {
                let form = run_args.to_form();
                assert_eq!(form.param_keys, vec!["a"]);
                assert_eq!(form.header_keys, vec!["X"]);
            }
            _ => panic!("expected the run subcommand"),
        }
    }
}
