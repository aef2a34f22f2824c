mod avatar;
pub use avatar::*;

mod button;
pub use button::*;

mod circuit_card;
pub use circuit_card::*;

mod icon;
pub use icon::*;

mod learning_path_card;
pub use learning_path_card::*;

mod level_indicator;
pub use level_indicator::*;

mod progress_bar;
pub use progress_bar::*;

mod text;
pub use text::*;
