//! API backend for the Pokemon reference database.
//!
//! The server follows a layered architecture:
//!
//! - **Controller layer** (`controller/`) - HTTP request handlers, access
//!   control and DTO conversion
//! - **Service layer** (`service/`) - Business logic between controllers and
//!   the data layer (referential checks, slug/color normalization, login)
//! - **Data layer** (`data/`) - Database operations; multi-step mutations run
//!   inside single transactions
//! - **Model layer** (`model/`) - Domain models, operation parameters and the
//!   pure view mappers
//! - **Error layer** (`error/`) - Application error types and their HTTP
//!   response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and auth guard
//!
//! A typical request flows router → controller (guard + validation pass) →
//! service → repository → entity, and the resulting domain model is mapped
//! back to a DTO wrapped in the `{success, data}` envelope.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
