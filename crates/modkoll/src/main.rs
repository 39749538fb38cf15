//! Implements the CLI for modkoll

use clap::Parser;
use modkoll::cli::Cli;
use modkoll_core::CollectorConfiguration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(target_env = "musl")]
use mimalloc::MiMalloc;

#[cfg(target_env = "musl")]
#[cfg_attr(target_env = "musl", global_allocator)]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    // Standard output is reserved for the modaliases, log to stderr
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .with(tracing_error::ErrorLayer::default())
        .init();
    let _cli = Cli::parse();

    modkoll::run(&CollectorConfiguration::default(), std::io::stdout().lock())
}
