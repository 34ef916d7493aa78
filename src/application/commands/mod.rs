pub mod articles;

pub use articles::{ArticleCommandService, CreateArticleCommand, EditContentCommand};
