//! Adapters: implementations of the ports against real infrastructure.

pub mod auth;
pub mod http;
pub mod ml;
pub mod postgres;
