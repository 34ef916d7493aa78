use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::article::{Article, ArticleField, ArticleIdSequence, FieldValue, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    pub content: String,
}

pub struct EditContentCommand {
    pub content: String,
}

pub struct ArticleCommandService {
    ids: Arc<ArticleIdSequence>,
    clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(ids: Arc<ArticleIdSequence>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    pub fn create_article(&self, command: CreateArticleCommand) -> Article {
        let article = Article::create(
            NewArticle::new(
                command.title,
                command.author,
                command.publication_date,
                command.content,
            ),
            &self.ids,
        );
        tracing::info!(
            article_id = %article.id,
            author = %article.author,
            "article created"
        );
        article
    }

    /// Replaces the content of `article` and stamps the edit from the clock.
    ///
    /// Returns the new `last_edited` value.
    pub fn edit_content(&self, article: &mut Article, command: EditContentCommand) -> DateTime<Utc> {
        let now = self.clock.now();
        article.set_content_at(command.content, now);
        let edited = article.last_edited().unwrap_or(now);
        tracing::debug!(
            article_id = %article.id,
            length = article.len(),
            %edited,
            "article content edited"
        );
        edited
    }

    /// Writes a guarded attribute on `article`. A value of the wrong type is
    /// rejected and the attribute keeps its previous value.
    pub fn set_field<T>(
        &self,
        article: &mut Article,
        field: &ArticleField<T>,
        value: FieldValue,
    ) -> ApplicationResult<()>
    where
        T: std::any::Any + Send + Sync,
    {
        field.set(article, value)?;
        tracing::debug!(
            article_id = %article.id,
            attribute = field.name().unwrap_or_default(),
            "article field updated"
        );
        Ok(())
    }
}
