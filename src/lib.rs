//! A one-shot HTTP/1.1 GET client.
//!
//! See the `url` module for turning a command-line URL into a hostname, port and path.
//! See the `protocol` module for the request format.
//! See the `client` module for connecting, sending and streaming the response.

pub mod client;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod url;
