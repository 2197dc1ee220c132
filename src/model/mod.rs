pub mod cursor;
pub mod mapping;
pub mod role;
pub mod theme;

pub use cursor::{CursorFile, CursorFormat};
pub use mapping::CursorMapping;
pub use role::Role;
pub use theme::{IndexTheme, Theme};
