//! Core Mercury request types.
//!
//! This crate provides the types shared by everything that builds or decodes
//! Mercury requests (`mercury-client` and transports).
//!
//! ## Modules
//!
//! - [`error`]: Decoding and construction errors
//! - [`request`]: Raw requests, their builder and methods
//! - [`response`]: Raw responses handed back by a transport
//! - [`decoder`]: Decoding strategy trait and the protobuf strategy
//! - [`proto`]: Protobuf mirrors of the Mercury wire schema

mod decoder;
mod error;
pub mod proto;
mod request;
mod response;

pub use decoder::*;
pub use error::*;
pub use request::*;
pub use response::*;
