pub mod config;
pub mod enums;
pub mod roster;
pub mod session;
pub mod settlement;

pub use config::*;
pub use enums::*;
pub use roster::*;
pub use session::*;
pub use settlement::*;
