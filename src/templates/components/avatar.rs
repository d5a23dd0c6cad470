use crate::domain::CommentRecord;
use maud::{html, Markup};

pub const PLACEHOLDER_PATH: &str = "/placeholder.svg";

/// Where the page should load an avatar from. Remote images go through the
/// relay; records without one get the placeholder.
pub fn avatar_src(record: &CommentRecord) -> String {
    let url = record.avatar_url();
    if url.is_empty() {
        return PLACEHOLDER_PATH.to_string();
    }

    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    format!("/proxy?url={encoded}")
}

pub fn avatar(record: &CommentRecord, large: bool) -> Markup {
    let fallback = record.avatar_initial().unwrap_or_default();

    html! {
        div class=(if large { "avatar large" } else { "avatar" }) {
            span { (fallback) }
            img
                src=(avatar_src(record))
                alt=(record.username())
                onerror="this.onerror=null;this.src='/placeholder.svg'";
        }
    }
}

pub fn placeholder_svg() -> String {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64" {
            rect width="64" height="64" fill="#e5e7eb" {}
            circle cx="32" cy="24" r="12" fill="#9ca3af" {}
            path d="M10 58c2-12 12-18 22-18s20 6 22 18z" fill="#9ca3af" {}
        }
    }
    .into_string()
}
