use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use locmap_cli::commands::{decode, encode, generate, load, show};
use locmap_cli::config::LocmapConfig;
use locmap_cli::error::{convert_io_error, CliError};

#[derive(Parser, Debug)]
#[command(name = "locmap")]
#[command(about = "Location graph encoder and C map generator", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Configuration file (defaults to the nearest locmap.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Generate C sources, JSON and a binary table from a map document
    Generate {
        /// JSON map document
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output directory (defaults to [output].dir)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Print the stored map document
    Load {
        /// Directory holding generated files (defaults to [output].dir)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Encode a map document as a binary location table
    Encode {
        /// JSON map document
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Binary table to write
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Decode a binary location table into a map document
    Decode {
        /// Binary table
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// List the locations and connections of a map file
    Show {
        /// Map document (.json) or binary table (.bin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(args)?;
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<LocmapConfig, CliError> {
    match path {
        Some(path) => LocmapConfig::load(&path),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| convert_io_error(e, PathBuf::from("."), "resolving working directory"))?;
            LocmapConfig::discover(&cwd)
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Generate { input, out_dir } => {
            let config = load_config(args.config)?;
            let out_dir = config.output_dir(out_dir.as_deref());
            let files = generate::handle_generate(&input, &out_dir, &config)?;
            println!("{}", files.source.display());
        }
        Command::Load { out_dir } => {
            let config = load_config(args.config)?;
            let out_dir = config.output_dir(out_dir.as_deref());
            println!("{}", load::handle_load(&out_dir, &config)?);
        }
        Command::Encode { input, output } => {
            let count = encode::handle_encode(&input, &output)?;
            println!("Encoded {} locations into {}", count, output.display());
        }
        Command::Decode { input, output } => {
            let json = decode::handle_decode(&input, output.as_deref())?;
            if output.is_none() {
                println!("{}", json);
            }
        }
        Command::Show { file } => {
            print!("{}", show::handle_show(&file)?);
        }
    }
    Ok(())
}
