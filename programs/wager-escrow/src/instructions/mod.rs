pub mod create_global_config;
pub mod create_session;
pub mod distribute;
pub mod join;
pub mod pay_to_spawn;
pub mod record_kill;
pub mod refund;
pub mod update_global_config;
pub mod vault;

pub use create_global_config::*;
pub use create_session::*;
pub use distribute::*;
pub use join::*;
pub use pay_to_spawn::*;
pub use record_kill::*;
pub use refund::*;
pub use update_global_config::*;
