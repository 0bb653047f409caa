pub mod theme;

pub use theme::{Theme, THEME_KEY};
