//! Infrastructure Layer
//!
//! HTTP gateway implementation and session persistence.

pub mod http_gateway;
pub mod session_store;
