//! Models and request bodies shared between the taskboard server and its
//! clients.

pub mod api;
pub mod models;

pub use models::*;
