mod categorization;
mod grocery;

pub use categorization::*;
pub use grocery::*;
