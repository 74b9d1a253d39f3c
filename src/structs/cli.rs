use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "llm-speedtest")]
#[clap(about = "Streaming chat-completion speed benchmark", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/llm-speedtest/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
