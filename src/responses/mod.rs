pub mod errors;
pub mod html;
pub mod image;
pub mod json;

pub use errors::{html_error_response, ResultResp};

pub use html::html_response;
pub use image::{image_response, svg_response};
pub use json::json_response;
