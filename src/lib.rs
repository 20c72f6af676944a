//! Serene - Behavioral Health Companion Backend
//!
//! This crate serves the mobile companion app: metric ingestion, user
//! profiles, and ML inference orchestration against an external
//! model-serving endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
