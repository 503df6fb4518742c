mod file_handler;
mod health_handler;

pub use file_handler::*;
pub use health_handler::*;
