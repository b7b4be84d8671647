use clap::Parser;
use remitlens::cli;
use remitlens::cli::commands::{Cli, Commands};
use remitlens::domain::entities::selection::Selection;
use remitlens::domain::values::amount::TransferAmount;
use remitlens::domain::values::corridor::Corridor;
use remitlens::infrastructure::http::config::ClientConfig;
use remitlens::infrastructure::telemetry;
use remitlens::RemitLens;
use std::time::Duration;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    telemetry::init();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let rl = match RemitLens::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error initializing remitlens: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(rl, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rl: RemitLens, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Snapshot { corridor, amount } => {
            let selection = parse_selection(&corridor, amount.as_deref())?;
            let view = rl.snapshot(selection).await;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::Health => {
            let status = rl.health().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
            if !status.is_healthy() {
                return Err(format!("service reported status '{}'", status.status).into());
            }
        }
        Commands::Corridors => {
            for c in RemitLens::corridors() {
                println!("{}\t{}\t{}", c.code, c.currency, c.name);
            }
        }
        Commands::Watch { corridor, amount } => {
            let selection = parse_selection(&corridor, amount.as_deref())?;
            watch(rl, selection).await?;
        }
    }
    Ok(())
}

fn parse_selection(corridor: &str, amount: Option<&str>) -> Result<Selection, String> {
    let corridor: Corridor = corridor.parse()?;
    Ok(Selection::new(
        corridor,
        amount.and_then(TransferAmount::parse_input),
    ))
}

async fn watch(rl: RemitLens, initial: Selection) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = BufReader::new(tokio::io::stdin());
    cli::watch::run(rl.controller(), initial, stdin, |view| {
        match serde_json::to_string(view.as_ref()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing view: {e}"),
        }
    })
    .await?;
    Ok(())
}
