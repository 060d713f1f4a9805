//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the vote-casting use case.
//! - Keep transport layers decoupled from persistence details.
//!
//! # Invariants
//! - Services never bypass the store contract or cache its data.

pub mod voting_service;
