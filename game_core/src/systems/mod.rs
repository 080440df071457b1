pub mod ai;
pub mod collision;
pub mod movement;
pub mod scoring;
pub mod victory;

pub use ai::*;
pub use collision::*;
pub use movement::*;
pub use scoring::*;
pub use victory::*;
