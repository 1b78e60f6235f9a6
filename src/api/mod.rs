//! Remote Habit Client
//!
//! HTTP bindings to the habit service, organized by resource. Each operation
//! is a single round trip with no retry; failures map onto [`Error`].

mod habits;

pub use habits::*;

use gloo_net::http::Response;
use leptos::prelude::window;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Base URL of the habit service.
///
/// Same-origin by default; `HABITS_API_URL` at compile time points the client
/// at a separately hosted backend.
fn base_url() -> String {
    if let Some(url) = option_env!("HABITS_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let location = window().location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_default();
    format!("{}//{}", protocol, host)
}

fn habits_url(path: &str) -> String {
    format!("{}/habits{}", base_url(), path)
}

/// Check the status line, then decode the JSON body.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    if !resp.ok() {
        return Err(Error::Server(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| Error::Network(e.to_string()))
}
