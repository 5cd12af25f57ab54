//! CLI command implementations

pub mod init;
pub mod scaffold;

pub use init::InitCommand;
pub use scaffold::ScaffoldCommand;
