pub mod food;
pub mod order;
pub mod user;
