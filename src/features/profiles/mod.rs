mod routes;
mod service;
pub mod types;

pub use routes::*;
pub use service::*;
