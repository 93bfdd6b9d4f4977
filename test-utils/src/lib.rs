//! Pokedex Test Utils
//!
//! Shared testing utilities for the pokedex backend. Provides a builder for
//! test contexts backed by in-memory SQLite databases, plus entity factories
//! with unique defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_something() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_pokedex_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let generation = test_utils::factory::generation::create_generation(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
