pub mod teams;
pub mod drives;
pub mod game_clock;
pub mod play_type;
pub mod play_by_play;
pub mod yards;

pub use drives::*;
pub use game_clock::*;
pub use play_type::*;
pub use play_by_play::*;
pub use teams::*;
pub use yards::*;
