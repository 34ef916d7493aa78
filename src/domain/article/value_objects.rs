use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(u64);

impl ArticleId {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out article ids in creation order, starting at 0.
///
/// Every article built from the same sequence receives a distinct id, and ids
/// strictly increase with construction order even when articles are created
/// from several threads at once.
#[derive(Debug, Default)]
pub struct ArticleIdSequence {
    next: AtomicU64,
}

impl ArticleIdSequence {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> ArticleId {
        ArticleId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Id the next call to [`Self::next_id`] would return.
    pub fn peek(&self) -> ArticleId {
        ArticleId(self.next.load(Ordering::Relaxed))
    }
}
