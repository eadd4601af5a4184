mod catalog;
mod dietary;
mod nutrition;
mod scale;
mod types;

pub use catalog::*;
pub use dietary::*;
pub use nutrition::*;
pub use types::*;
