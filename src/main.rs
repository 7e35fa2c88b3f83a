use clap::{Parser, Subcommand};
use filename::{Config, Verbosity};
use std::path::PathBuf;
use std::process::ExitCode;

/// POSIX filename utilities and syntax tree renderer
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Print every status line
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the directory part of a path
    Dirname { path: String },
    /// Print the last component of a path
    Basename {
        path: String,
        /// Remove this extension if the component ends with it
        #[arg(long)]
        ext: Option<String>,
    },
    /// Print the extension of the last component
    Extension { path: String },
    /// Print the path without its extension
    Rootname {
        path: String,
        /// Remove this extension instead of the detected one
        #[arg(long)]
        ext: Option<String>,
    },
    /// Print the components of a path, one per line
    Split { path: String },
    /// Print whether a path is absolute or relative
    Pathtype { path: String },
    /// Join segments into one normalized path
    Join {
        #[arg(required = true)]
        segments: Vec<String>,
    },
    /// Render a syntax tree document with an external code generator
    Render {
        /// The file containing the serialized syntax tree
        #[arg(short, long, default_value = "tree.json")]
        input: PathBuf,
        /// Write the source to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// The renderer command. The tree is passed as its last argument
        #[arg(short, long, default_value = "escodegen")]
        renderer: String,
    },
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);
    let verbosity = cli.verbosity();

    match cli.command {
        Command::Dirname { path } => println!("{}", filename::dirname(&path)),
        Command::Basename { path, ext } => match ext {
            Some(ext) => println!("{}", filename::basename_ext(&path, &ext)),
            None => println!("{}", filename::basename(&path)),
        },
        Command::Extension { path } => println!("{}", filename::extension(&path)),
        Command::Rootname { path, ext } => match ext {
            Some(ext) => println!("{}", filename::rootname_ext(&path, &ext)),
            None => println!("{}", filename::rootname(&path)),
        },
        Command::Split { path } => {
            for component in filename::split(&path) {
                println!("{component}");
            }
        }
        Command::Pathtype { path } => println!("{}", filename::pathtype(&path)),
        Command::Join { segments } => println!("{}", filename::join(&segments)),
        Command::Render {
            input,
            output,
            renderer,
        } => {
            let config = Config {
                renderer_cmd: renderer,
                input,
                output,
                verbosity,
            };
            if filename::render(config).is_err() {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
