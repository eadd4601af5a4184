mod command;
mod date;
mod meal_type;

pub use command::*;
pub use date::*;
pub use meal_type::*;
