//! protoc plugin emitting Go gRPC bindings. The generator itself lives in
//! `grpc-go-build`; this crate only speaks the plugin protocol.

mod error;
mod plugin;

pub use error::{Error, Result};
pub use plugin::{generate, read_request, run, write_response};
