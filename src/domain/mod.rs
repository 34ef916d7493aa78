pub mod article;
pub mod errors;

pub use errors::{DomainError, DomainResult};
