use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable summary of an article and its derived text views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDigestDto {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    #[serde(default)]
    pub last_edited: Option<DateTime<Utc>>,
    pub length: usize,
    pub introduction: String,
    pub common_words: IndexMap<String, usize>,
}

impl ArticleDigestDto {
    pub fn from_article(article: &Article, intro_characters: usize, top_words: usize) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.clone(),
            author: article.author.clone(),
            publication_date: article.publication_date,
            last_edited: article.last_edited(),
            length: article.len(),
            introduction: article.short_introduction(intro_characters).to_owned(),
            common_words: article.most_common_words(top_words),
        }
    }
}
