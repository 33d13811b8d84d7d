use std::{io, process};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to bind HTTP server to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP server stopped with an error: {0}")]
    Run(#[source] io::Error),
}

/// Start-up failures are not retried, the process exits straight away.
pub fn crash_server(reason: StartupError) -> ! {
    log::error!("Server crash: {}", reason);

    process::exit(1);
}
