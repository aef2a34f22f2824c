//! Themeable UI components for gpui: text, buttons, avatars, progress bars,
//! level indicators, and cards, all reading a shared light/dark theme.

pub mod components;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, PositionalParentElement};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
