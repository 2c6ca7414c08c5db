//! HTTP client for the lead API

use serde::Serialize;

use crate::core::leads::{FormKind, SubmitFailure};

/// POST a validated payload to the endpoint for `kind`
#[cfg(not(feature = "ssr"))]
pub async fn submit_lead<P: Serialize>(kind: FormKind, payload: &P) -> Result<(), SubmitFailure> {
    use crate::core::leads::ApiErrorBody;
    use gloo_net::http::Request;

    let response = Request::post(kind.api_path())
        .json(payload)
        .map_err(|e| SubmitFailure::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitFailure::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => Err(body.into_failure()),
        Err(_) => Err(SubmitFailure::Server(format!("HTTP {}", status))),
    }
}

#[cfg(feature = "ssr")]
pub async fn submit_lead<P: Serialize>(_kind: FormKind, _payload: &P) -> Result<(), SubmitFailure> {
    Err(SubmitFailure::Network(
        "Lead submission not available on server".to_string(),
    ))
}
