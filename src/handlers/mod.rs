//! HTTP request handlers and shared state.

pub mod http;
