use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use twin_ledger::bin_utils::{Session, config::SessionConfig};

fn main() -> Result<()> {
    // stdout carries the dialogue, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let session = Session {
        input: std::io::stdin().lock(),
        output: &mut std::io::stdout(),
        config: SessionConfig::default(),
    };
    session.run()
}
