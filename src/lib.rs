pub mod font;
pub mod generate;
pub mod manifest;
pub mod render;

pub use generate::{generate_icons, Options, ICON_SIZES};
