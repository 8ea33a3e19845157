pub mod config;
pub mod filter;
pub mod todo;

pub use config::*;
pub use filter::*;
pub use todo::*;
