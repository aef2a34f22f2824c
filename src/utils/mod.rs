mod colors;
pub use colors::*;

mod element;
pub use element::*;
