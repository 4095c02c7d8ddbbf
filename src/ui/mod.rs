//! Terminal UI: the game view, and the falling-token animation that plays
//! after each drop.

pub mod animation;
mod app;
mod game_view;

pub use animation::FallAnimation;
pub use app::App;
