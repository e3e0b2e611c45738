use std::{
    io::{Read, Write},
    path::PathBuf,
};

use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    tracing::debug,
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(name = "uncloze", about = "Strip cloze markers from flashcard text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn", env = "UNCLOZE_LOG")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip cloze markers (and their hints) from a file or stdin.
    Strip {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Output file; writes stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Strip { file, output } => strip(file.as_deref(), output.as_deref()),
    }
}

fn strip(file: Option<&std::path::Path>, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        },
    };
    debug!(bytes = input.len(), "read input");

    let stripped = uncloze_markup::strip_clozes(&input);

    match output {
        Some(path) => std::fs::write(path, stripped)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(stripped.as_bytes())
            .context("failed to write stdout")?,
    }
    Ok(())
}
