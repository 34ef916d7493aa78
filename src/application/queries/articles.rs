use crate::{
    application::{dto::ArticleDigestDto, error::ApplicationResult},
    config::TextConfig,
    domain::article::Article,
};

/// Overrides for a single digest; unset values fall back to [`TextConfig`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DigestQuery {
    pub intro_characters: Option<usize>,
    pub top_words: Option<usize>,
}

pub struct ArticleQueryService {
    config: TextConfig,
}

impl ArticleQueryService {
    pub const fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> ApplicationResult<Self> {
        Ok(Self::new(TextConfig::from_env()?))
    }

    pub const fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn digest(&self, article: &Article, query: DigestQuery) -> ArticleDigestDto {
        let intro_characters = query
            .intro_characters
            .unwrap_or(self.config.intro_characters());
        let top_words = query.top_words.unwrap_or(self.config.top_words());
        tracing::debug!(
            article_id = %article.id,
            intro_characters,
            top_words,
            "building article digest"
        );
        ArticleDigestDto::from_article(article, intro_characters, top_words)
    }

    /// Sorts by publication date, oldest first. Articles published at the
    /// same instant keep their relative order.
    pub fn chronological(&self, mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(Article::compare_order);
        articles
    }
}
