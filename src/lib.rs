//! In-memory article model with derived text views and type-checked
//! attributes.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{ConfigError, TextConfig};
pub use domain::article::{
    Article, ArticleField, ArticleId, ArticleIdSequence, FieldOwner, FieldSlots, FieldValue,
    NewArticle,
};
pub use domain::errors::{DomainError, DomainResult};
