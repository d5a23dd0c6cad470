// responses/image.rs
use crate::errors::ServerError;
use crate::relay::RelayedImage;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Relayed images may be cached by the browser for a day.
pub const RELAY_CACHE_CONTROL: &str = "public, max-age=86400";

/// Return relayed image bytes with the upstream content type.
/// Upstream may send any type, so the body is never sniffed or run as a document.
pub fn image_response(image: RelayedImage) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", image.content_type)
        .header("Cache-Control", RELAY_CACHE_CONTROL)
        .header("X-Content-Type-Options", "nosniff")
        .header("Content-Security-Policy", "sandbox")
        .body(Body::from(image.bytes))
        .map_err(|e| ServerError::Internal(format!("image response: {e}")))
}

pub fn svg_response(svg: String) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::IMAGE_SVG.as_ref())
        .header("Cache-Control", RELAY_CACHE_CONTROL)
        .body(Body::from(svg))
        .map_err(|e| ServerError::Internal(format!("svg response: {e}")))
}
