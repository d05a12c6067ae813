//! Single-shot liveness probe for a locally running Dockge server.
//!
//! The probe resolves its target from `DOCKGE_*` environment variables,
//! performs one `GET /` with a fixed timeout and drains the response body.
//! Any HTTP status counts as healthy; only transport and read failures do not.

pub mod config;
pub mod probe;
