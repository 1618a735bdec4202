mod routes;
mod service;
pub mod types;
pub mod zodiac;

pub use routes::*;
pub use service::*;
