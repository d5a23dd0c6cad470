use maud::{html, Markup};

pub mod avatar;
pub mod error;
pub mod lottery;

pub use avatar::{avatar, placeholder_svg};
pub use error::error_page;
pub use lottery::{lottery_panel, lottery_root};

pub fn card(body: Markup) -> Markup {
    html! {
        section class="card" {
            (body)
        }
    }
}
