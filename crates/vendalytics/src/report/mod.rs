pub mod html;
pub mod plots;
pub mod render;

pub use render::{format_currency, render_text};
