//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate analyzer calls into use-case level APIs.
//! - Keep boundary layers (CLI, HTTP) decoupled from analyzer backends.

pub mod inflection_service;
