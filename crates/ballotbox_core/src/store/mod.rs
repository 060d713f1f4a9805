//! Store layer abstractions for voting persistence collaborators.
//!
//! # Responsibility
//! - Define the capability contract the voting service depends on.
//! - Keep persistence technology details outside the core crate.
//!
//! # Invariants
//! - The core never owns persisted state; it consumes the store contract
//!   transiently inside one `cast_vote` invocation.
//! - Store transport failures surface as semantic-free `StoreError` values
//!   and are never interpreted by the core.

pub mod voting_store;
