pub mod entities;
pub mod keywords;
pub mod ports;
pub mod ranking;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
