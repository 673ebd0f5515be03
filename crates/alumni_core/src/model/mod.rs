//! Domain records and operator forms of the alumni network.
//!
//! # Responsibility
//! - Define the typed records written to the store.
//! - Define the raw-string forms operators submit, and parse them.
//!
//! # Invariants
//! - A form only becomes a record through its `parse` method.
//! - Parsing validates required fields before types, and never touches the store.

pub mod alumni;
pub mod committee;
pub mod department;
pub mod education;
pub mod event;
pub mod form;
pub mod mentorship;
pub mod participation;
pub mod student;
