// Module exports for models

pub mod cursor;
pub mod grid;
pub mod template;
pub mod user;
