use crate::config::ProbeConfig;
use ::log::*;
use ::reqwest::{Client, Response, StatusCode};
use ::std::time::Duration;

/// Upper bound on the whole request, body included. Kept just below the
/// 30s default Docker health-check timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(28);

#[derive(Debug, ::thiserror::Error)]
pub enum ProbeError {
    /// No response: connect, DNS, TLS handshake or timeout.
    #[error("transport error")]
    Transport(#[source] ::reqwest::Error),

    /// A response arrived but its body could not be read to the end.
    #[error("read error")]
    Read(#[source] ::reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: StatusCode,
    pub body_len: u64,
}

/// Certificate and hostname verification are disabled: the target is the
/// local Dockge instance, which commonly serves a self-signed certificate.
pub fn build_client(timeout: Duration) -> Result<Client, ProbeError> {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .timeout(timeout)
        .build()
        .map_err(ProbeError::Transport)
}

/// Issues a single GET and drains the body. The status code is reported,
/// never judged.
pub async fn probe(client: &Client, url: &str) -> Result<ProbeOutcome, ProbeError> {
    let response = client.get(url).send().await.map_err(ProbeError::Transport)?;
    let status = response.status();
    let body_len = drain(response).await?;

    debug!("drained {body_len} body bytes");

    Ok(ProbeOutcome { status, body_len })
}

// Takes ownership so the connection is released on every return path.
async fn drain(mut response: Response) -> Result<u64, ProbeError> {
    let mut drained = 0u64;

    while let Some(chunk) = response.chunk().await.map_err(ProbeError::Read)? {
        drained += chunk.len() as u64;
    }

    Ok(drained)
}

pub async fn run(config: &ProbeConfig) -> Result<ProbeOutcome, ProbeError> {
    if config.is_kubernetes {
        debug!("DOCKGE_PORT holds a Kubernetes service address, using default port");
    }
    debug!("tls: {}", config.use_tls);

    info!("Checking {}", config.url);

    let client = build_client(PROBE_TIMEOUT)?;
    let outcome = probe(&client, &config.url).await?;

    info!("Health Check OK [Res Code: {}]", outcome.status.as_u16());

    Ok(outcome)
}
