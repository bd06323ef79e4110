//! Type definitions for evalcost

mod error;
mod results;

pub use error::*;
pub use results::*;
