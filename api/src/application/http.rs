pub mod health;
pub mod preference;
pub mod recommendation;
pub mod server;
