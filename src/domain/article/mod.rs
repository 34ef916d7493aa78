pub mod entity;
pub mod field;
pub mod text;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use field::{ArticleField, FieldOwner, FieldSlots, FieldValue};
pub use value_objects::{ArticleId, ArticleIdSequence};
