pub mod locator;
pub mod theme;

pub use locator::{Located, ResourceLocator};
pub use theme::ActiveTheme;
