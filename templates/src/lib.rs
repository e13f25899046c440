pub mod distinct;
pub mod error;
pub mod io;
pub mod judge;
pub mod monoid;
pub mod segment_tree;

pub use error::{Error, Result};
