//! `shelfstack-dashboard`
//!
//! **Responsibility:** the interaction shell over the catalog.
//!
//! This crate wires user input to the domain and the store without doing any
//! rendering: debounced search text, filter-panel state, create/edit form
//! sessions, delete confirmation, and the first-load gate. A front end of
//! any kind can sit on top of [`Dashboard`] and stay dumb.

pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod form;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DeleteRequest, SubmitOutcome};
pub use debounce::Debouncer;
pub use form::{FormMode, FormSession};
