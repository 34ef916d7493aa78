pub mod articles;

pub use articles::{ArticleQueryService, DigestQuery};
