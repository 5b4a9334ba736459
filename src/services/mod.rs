//! Business logic services
//!
//! Services validate input, call the adapters held in `AppState`, and log
//! the outcome. Handlers stay limited to HTTP extraction and status mapping.

pub mod cache_service;
pub mod queue_service;
