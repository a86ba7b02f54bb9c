pub mod client;
pub mod error;
pub mod mock;
pub mod prompts;

pub use client::*;
pub use error::*;
pub use mock::*;
pub use prompts::*;
