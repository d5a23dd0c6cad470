use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response};
use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!("{err}");
    }

    let page = error_page(status.as_u16(), &err.public_message());

    // Built by hand so the error path itself cannot fail.
    let mut resp = Response::new(Body::from(page.into_string()));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}
