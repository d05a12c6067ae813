//! Container health-check command for Dockge.
//!
//! Example Docker HEALTHCHECK:
//!   HEALTHCHECK --interval=60s --timeout=30s --start-period=60s \
//!     CMD ["/app/dockge-healthcheck"]
//!
//! Exits 0 once a response has been fully read, whatever its status code,
//! and 1 on any transport or read failure.

use ::dockge_healthcheck::{config::ProbeConfig, probe};
use ::log::*;
use ::std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    ::env_logger::Builder::from_env(
        ::env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = ProbeConfig::from_env();

    match probe::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", ::anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}
