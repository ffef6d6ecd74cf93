use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};

use keyshow::config::{Args, Config};
use keyshow::gui;
use keyshow::input::InputListener;
use keyshow::utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Starting keyshow v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_args(&args);
    debug!("Configuration: {:#?}", config);

    // Open devices first so a setuid install can drop root right after
    let listener = match InputListener::open(&config.device_path) {
        Ok(listener) => listener,
        Err(e) => {
            error!("{}", e);
            utils::print_permission_help();
            std::process::exit(1);
        }
    };
    utils::drop_privileges()?;

    let (key_sender, key_receiver) = tokio::sync::mpsc::unbounded_channel();
    listener.spawn(key_sender);

    // Blocks for the window lifetime; capture tasks die with the process
    gui::run(&config, key_receiver)?;

    info!("Shutting down...");
    Ok(())
}
