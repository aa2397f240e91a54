// Core domain layer
pub mod assembler;
pub mod mode;
pub mod naming;
pub mod optimization;
pub mod paths;
pub mod plugins;
pub mod rules;
pub mod server;

pub use assembler::*;
pub use mode::*;
pub use naming::*;
pub use optimization::*;
pub use paths::*;
pub use plugins::*;
pub use rules::*;
pub use server::*;
