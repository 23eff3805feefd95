pub mod icons;
pub mod output;
pub mod theme;

pub use icons::Icons;
pub use output::{blank, error, fatal, hint, info, line, section, success, warn};
pub use theme::{theme, Theme};
