//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the browser-equivalent primitives the client runs on:
//! - Persistent key-value storage (in-memory and JSON file backed)
//! - HTTP client construction and request header assembly
//! - HTML escaping and local timestamp formatting for rendered views

pub mod html;
pub mod request;
pub mod storage;
