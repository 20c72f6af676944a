//! Application layer: use-case handlers composing ports.

pub mod handlers;
