use crate::app::App;
use crate::errors::ServerError;
use crate::ingest;
use crate::responses::{html_response, image_response, json_response, svg_response, ResultResp};
use crate::templates;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

/// Largest `/upload` body accepted, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(&app.lottery.snapshot())),

        ("POST", "/upload") => {
            let raw = read_body(&mut req)?;
            if raw.is_empty() {
                return Err(ServerError::BadRequest("Missing CSV body".into()));
            }

            // Content never causes a rejection; undecodable bytes become U+FFFD.
            let text = String::from_utf8_lossy(&raw);
            let snapshot = app.lottery.load(ingest::parse(&text));

            html_response(templates::lottery_root(&snapshot))
        }

        ("POST", "/lottery/start") => {
            let snapshot = app.lottery.start()?;
            html_response(templates::lottery_panel(&snapshot))
        }
        ("POST", "/lottery/reset") => html_response(templates::lottery_panel(&app.lottery.reset())),
        ("GET", "/lottery/panel") => {
            html_response(templates::lottery_panel(&app.lottery.snapshot()))
        }
        ("GET", "/lottery/state") => json_response(&app.lottery.snapshot()),

        ("GET", "/proxy") => {
            let params = parse_query(&req);
            let url = params
                .get("url")
                .filter(|u| !u.is_empty())
                .ok_or_else(|| ServerError::BadRequest("Missing URL".into()))?;

            let image = app.relay.fetch(url).map_err(|e| {
                warn!(url = url.as_str(), "image relay failed: {e}");
                ServerError::from(e)
            })?;

            image_response(image)
        }

        ("GET", "/placeholder.svg") => svg_response(templates::placeholder_svg()),

        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_UPLOAD_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Could not read request body: {e}")))?;

    if buf.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(ServerError::BadRequest("CSV too large".into()));
    }
    Ok(buf)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
