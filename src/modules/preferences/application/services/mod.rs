pub mod theme_preference;

pub use theme_preference::ThemePreference;
