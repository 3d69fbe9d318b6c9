pub mod config;
pub mod error;
pub mod http;
pub mod logging;

pub use error::CommonError;
pub use error::Result;
