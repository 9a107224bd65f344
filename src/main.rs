use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use scribe::areas::buffer::Buffer;
use scribe::areas::options::BufferOptions;
use scribe::areas::session::Session;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "scribe",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Stage file writes in memory and flush them to disk",
    long_about = "Files are collected in an in-memory buffer before being written. \
    Every revision of a buffered file can be kept, listed and diffed line by line.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level used when RUST_LOG is not set"
    )]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StageOptions {
    #[arg(short, long, default_value = ".", help = "Directory the buffer is flushed into")]
    out_dir: PathBuf,
    #[arg(long, help = "Resolve target paths without writing anything")]
    dry: bool,
    #[arg(long, help = "Keep the history of every staged file")]
    log_changes: bool,
    #[arg(long, help = "Origin label attached to staged files")]
    origin: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "stage",
        about = "Buffer files and flush them into an output directory",
        long_about = "This command reads every source file, stages it under its relative path \
        and flushes the buffer into the output directory, printing one line per written file."
    )]
    Stage {
        #[command(flatten)]
        options: StageOptions,
        #[arg(index = 1, required = true, help = "Relative paths of the files to stage")]
        sources: Vec<PathBuf>,
    },
    #[command(
        name = "diff",
        about = "Show the line diff between two revisions of a file",
        long_about = "This command records OLD and then NEW as consecutive revisions of the same \
        path and prints the difference between them."
    )]
    Diff {
        #[arg(index = 1)]
        old: PathBuf,
        #[arg(index = 2)]
        new: PathBuf,
        #[arg(short, long, help = "Path the revisions are recorded under")]
        path: Option<String>,
        #[arg(long, help = "Print markers without colors")]
        plain: bool,
    },
    #[command(
        name = "history",
        about = "List the recorded revisions of a file",
        long_about = "This command records every given file, in order, as a revision of the same \
        path and lists the resulting history."
    )]
    History {
        #[arg(index = 1, required = true)]
        revisions: Vec<PathBuf>,
        #[arg(short, long, help = "Path the revisions are recorded under")]
        path: Option<String>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Stage { options, sources } => {
            let buffer = Buffer::new(
                BufferOptions::new(options.out_dir.clone(), options.dry, options.log_changes)
                    .with_origin(options.origin.clone()),
            );
            let session = Session::new(buffer, &pwd, Box::new(std::io::stdout()));

            session.stage(sources)?
        }
        Commands::Diff {
            old,
            new,
            path,
            plain,
        } => {
            let buffer = Buffer::new(BufferOptions::default().with_log_changes(true));
            let session = Session::new(buffer, &pwd, Box::new(std::io::stdout()));

            session.diff(old, new, path.as_deref(), *plain)?
        }
        Commands::History { revisions, path } => {
            let buffer = Buffer::new(BufferOptions::default().with_log_changes(true));
            let session = Session::new(buffer, &pwd, Box::new(std::io::stdout()));

            session.history(revisions, path.as_deref())?
        }
    }

    Ok(())
}
