pub mod entities;
pub mod ports;
pub mod prompt;
pub mod schema;

pub use entities::*;
pub use ports::*;
