use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)
        .map_err(|e| ServerError::Internal(format!("serialize json: {e}")))?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Cache-Control", "no-store")
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(format!("json response: {e}")))
}
