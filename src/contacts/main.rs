use clap::Parser;
use contacts::api::ContactsApi;
use contacts::config::ContactsConfig;
use contacts::error::Result;
use contacts::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

mod args;
mod cli;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        cli::print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = ContactsConfig::resolve(&cwd)?;
    debug!(data_file = %config.data_file.display(), pretty = config.pretty, "resolved config");

    let store = FileStore::new(config.data_file).with_pretty(config.pretty);
    let mut api = ContactsApi::new(store);

    let (action, result) = cli::invoke_action(&mut api, cli)?;
    cli::print_result(action, &result);
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
