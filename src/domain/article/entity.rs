// src/domain/article/entity.rs
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::domain::article::field::{FieldOwner, FieldSlots};
use crate::domain::article::text;
use crate::domain::article::value_objects::{ArticleId, ArticleIdSequence};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    content: String,
    last_edited: Option<DateTime<Utc>>,
    fields: FieldSlots,
}

impl Article {
    pub fn create(new: NewArticle, ids: &ArticleIdSequence) -> Self {
        Self {
            id: ids.next_id(),
            title: new.title,
            author: new.author,
            publication_date: new.publication_date,
            content: new.content,
            last_edited: None,
            fields: FieldSlots::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the content and stamps `last_edited` with the wall clock.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.set_content_at(content, Utc::now());
    }

    /// Replaces the content and stamps `last_edited` with `now`. The stamp
    /// never moves backwards, even if `now` is older than the previous edit.
    pub fn set_content_at(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.content = content.into();
        self.last_edited = Some(self.last_edited.map_or(now, |prev| prev.max(now)));
    }

    pub const fn last_edited(&self) -> Option<DateTime<Utc>> {
        self.last_edited
    }

    /// Number of characters in the content.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Orders articles by publication date only.
    pub fn compare_order(&self, other: &Self) -> Ordering {
        self.publication_date.cmp(&other.publication_date)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.compare_order(other) == Ordering::Less
    }

    /// Like [`Self::compare_order`], for values whose type is only known at
    /// runtime.
    pub fn compare_any(&self, other: &dyn Any) -> DomainResult<Ordering> {
        other
            .downcast_ref::<Self>()
            .map(|article| self.compare_order(article))
            .ok_or(DomainError::NotComparable)
    }

    pub fn short_introduction(&self, max_characters: usize) -> &str {
        text::short_introduction(&self.content, max_characters)
    }

    pub fn most_common_words(&self, n: usize) -> IndexMap<String, usize> {
        text::most_common_words(&self.content, n)
    }

    pub const fn fields(&self) -> &FieldSlots {
        &self.fields
    }
}

impl FieldOwner for Article {
    fn field_slots(&self) -> &FieldSlots {
        &self.fields
    }

    fn field_slots_mut(&mut self) -> &mut FieldSlots {
        &mut self.fields
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Article title={:?} author={:?} publication_date={:?}>",
            self.title,
            self.author,
            self.publication_date
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    pub content: String,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_date,
            content: content.into(),
        }
    }
}
