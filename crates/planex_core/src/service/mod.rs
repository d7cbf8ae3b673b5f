//! Core use-case services.
//!
//! # Responsibility
//! - Own the dashboard state and expose its mutation and projection APIs.
//! - Keep callers decoupled from record encoding and storage details.

pub mod dashboard_store;
pub mod mutation;
pub mod projection;
pub mod theme_service;
