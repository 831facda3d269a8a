use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    lilac_menu::logging::init().context("init logging")?;

    let cli = lilac_menu::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        lilac_menu::cli::Command::Run(args) => {
            lilac_menu::pipeline::run(args).await.context("run")?;
        }
        lilac_menu::cli::Command::Extract(args) => {
            lilac_menu::pipeline::extract(args).context("extract")?;
        }
        lilac_menu::cli::Command::Latest(args) => {
            lilac_menu::pipeline::latest(args).await.context("latest")?;
        }
        lilac_menu::cli::Command::Show(args) => {
            lilac_menu::pipeline::show(args).context("show")?;
        }
    }

    Ok(())
}
