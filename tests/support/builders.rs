// tests/support/builders.rs
use article_kit::{Article, ArticleIdSequence, NewArticle};
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    title: String,
    author: String,
    publication_date: DateTime<Utc>,
    content: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Fun with Rust".into(),
            author: "Ferris".into(),
            publication_date: fixed_now(),
            content: "This is a test article. It contains many words.".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.publication_date = at;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self, ids: &ArticleIdSequence) -> Article {
        Article::create(
            NewArticle::new(self.title, self.author, self.publication_date, self.content),
            ids,
        )
    }
}
