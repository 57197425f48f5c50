//! # Happy Thoughts API Server Library
//!
//! HTTP surface over the shared thought and account services.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and the response envelope
//! - `middleware`: Request extractors (bearer authentication)
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
