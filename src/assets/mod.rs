mod assets;
pub use assets::*;

mod circuit_assets;
pub use circuit_assets::*;
