mod cli;
mod interactive;
mod render;
mod telemetry;

use clap::Parser;
use cli::Cli;
use telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    // Logs go to stderr so they never mix with the tables on stdout
    let subscriber = get_subscriber("calendar_client".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    cli.run().await
}
