pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_page, lottery_panel, lottery_root, placeholder_svg};
pub use layouts::desktop::desktop_layout;
