pub mod config_cmd;
pub mod status;
pub mod tree;

pub use config_cmd::*;
pub use status::*;
pub use tree::*;
