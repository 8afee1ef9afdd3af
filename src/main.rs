use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};
use clap_complete::{Shell, generate};

use spotyears::{cli, config, error, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  after_help="Requires SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET in the environment \
              or in the .env file of the local data directory.",
  styles=styles(),
)]
struct Cli {
    /// Newline-delimited list of track URLs or ids
    input: Option<PathBuf>,

    /// Credential cache file (default: spotify.creds)
    #[clap(long, value_name = "FILE")]
    creds: Option<PathBuf>,

    /// Directory for the songs-<year>.txt files (default: .)
    #[clap(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Per-request HTTP timeout in seconds (default: 30)
    #[clap(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            // help and usage errors both exit 1
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let Some(input) = cli.input else {
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let mut config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };
    if let Some(creds) = cli.creds {
        config.creds_path = creds;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = std::time::Duration::from_secs(timeout);
    }

    if let Err(e) = cli::sort(&config, &input).await {
        error!("{}", e);
    }
}
