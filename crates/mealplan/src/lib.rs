mod algorithm;
mod calendar;
mod fallback;
mod filter;
mod meal;
mod nutrition;
mod preferences;
mod scoring;
mod slot;
mod store;
mod strategy;
mod variety;

pub use algorithm::*;
pub use calendar::*;
pub use fallback::*;
pub use filter::*;
pub use meal::*;
pub use nutrition::*;
pub use preferences::*;
pub use scoring::*;
pub use slot::*;
pub use store::*;
pub use strategy::*;
pub use variety::*;
