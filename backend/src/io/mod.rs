//! Interface layer between the domain and the presentation collaborator.

pub mod change_api;
pub mod mappers;

pub use change_api::*;
