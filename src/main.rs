use anyhow::{Context, Result};
use clap::Parser;
use filelog::LogLevel;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Append a leveled line to a log file", long_about = None)]
struct Args {
    /// Log file to append to
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// One of info, warn, error
    #[arg(short, long, default_value = "info")]
    level: LogLevel,

    /// Message to write; multiple words are joined with spaces
    #[arg(required = true)]
    message: Vec<String>,
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("filelog")
        .join("filelog.log")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args.path.unwrap_or_else(default_log_path);

    filelog::init_logger(&path)
        .with_context(|| format!("failed to initialize logger at {}", path.display()))?;
    filelog::log!(args.level, "{}", args.message.join(" "));
    filelog::close()?;
    Ok(())
}
