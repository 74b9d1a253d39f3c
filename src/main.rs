use clap::Parser;
use llm_speedtest::structs::cli::Cli;
use llm_speedtest::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new(cli.config).run_command(cli.command).await?;
    Ok(())
}
