//! Domain Layer
//!
//! Client-side entities, the auth response contract, and the ports the
//! application layer drives.

pub mod auth;
pub mod patient;
pub mod ports;
pub mod session;
