use anyhow::Context;
use clap::Parser;
use seatwise_cli::{app_config::Config, cli::Cli, output, seat_passengers};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatwise=info,seatwise_cli=info,seatwise_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply(&mut config);
    tracing::info!(
        passengers = config.seating.passengers,
        format = ?config.output.format,
        "Seating passengers"
    );

    let outcome = seat_passengers(&config.seating).inspect_err(|err| {
        tracing::error!("Seat assignment failed: {:#}", err);
    })?;

    let rendered = output::render(&outcome, &config.output).context("Failed to render seat map")?;
    println!("{}", rendered);

    Ok(())
}
