pub mod analysis;
pub mod outcome;

pub use analysis::*;
pub use outcome::*;
