//! Theme system providing colors, typography, spacing, and shadows.
//!
//! A theme carries a shared palette and one semantic color record per mode;
//! the active record is derived from the mode selection (light, dark, or
//! system) whenever a component reads the theme.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod mode;
pub use mode::*;

mod provider;
pub use provider::*;

mod typography;
pub use typography::*;
