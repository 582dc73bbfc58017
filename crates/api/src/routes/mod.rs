//! Route modules.
//!
//! Route hierarchy (all mounted at root level):
//!
//! ```text
//! GET    /health                                health probe
//! GET    /activities                            full catalog
//! POST   /activities/{name}/signup?email=...    sign a student up
//! DELETE /activities/{name}/unregister?email=.. remove a student
//! ```

pub mod activities;
pub mod health;
