//! Database repositories.
//!
//! One repository per aggregate. Repositories hold a reference to the pooled
//! connection, convert entities to domain models at this boundary, and run
//! every multi-step mutation inside a single transaction so collection
//! replacements are all-or-nothing.

pub mod generation;
pub mod poke_type;
pub mod pokemon;
pub mod user;

#[cfg(test)]
mod test;
