use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use freqcrack::config::Config;
use freqcrack::pipeline::Pipeline;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: Config,

    /// JSON file with default settings; flags given on the command line win
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the ciphertext, map it onto the reference ranking and write the plaintext
    Decode(cmd::decode::DecodeArgs),
    /// Print both frequency rankings and rebuild the cipher cache without decoding
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            let sub_matches = matches
                .subcommand()
                .map(|(_, m)| m)
                .unwrap_or(&matches);
            file_config.merge_from_cli(&cli.config, sub_matches);
            file_config
        }
        None => cli.config.clone(),
    };

    let pipeline = Pipeline::new(config);

    let result = match cli.command {
        Some(Commands::Analyze(args)) => cmd::analyze::run(args, &pipeline),
        Some(Commands::Decode(args)) => cmd::decode::run(args, &pipeline),
        None => cmd::decode::run(cmd::decode::DecodeArgs::default(), &pipeline),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
