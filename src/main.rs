use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Notify;

use pureserve::{config::Config, logger, server};

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to build runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime.block_on(async_main()) {
        logger::log_error(&e.to_string());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn async_main() -> io::Result<()> {
    let config = Arc::new(
        Config::resolve()
            .map_err(|e| io::Error::new(e.kind(), format!("Failed to resolve serving root: {e}")))?,
    );

    let listener = server::bind(config.addr)
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to bind {}: {e}", config.addr)))?;

    let shutdown = Arc::new(Notify::new());
    server::signal::spawn_interrupt_listener(Arc::clone(&shutdown));

    logger::log_server_start(&config.addr, &config.root);

    server::run(listener, config, shutdown).await
}
