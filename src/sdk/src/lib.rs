//! Typed client for the cloud platform REST API.
//!
//! Each resource family (organizations, robots, teams, tokens) has a client
//! wrapping a shared [`transport::Transport`]. Clients are stateless: every
//! call is a single round trip whose response is decoded into a typed value,
//! and every failure is returned to the caller as an [`SdkError`].

pub mod error;
pub mod ids;
pub mod organizations;
pub mod provider;
pub mod resource;
pub mod robots;
pub mod stub;
pub mod teams;
pub mod tokens;
pub mod transport;

pub use error::Result;
pub use error::SdkError;
pub use provider::SdkProvider;
pub use transport::HttpTransport;
pub use transport::Transport;
