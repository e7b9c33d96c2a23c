//! Post records

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::{User, UserId};

/// Store-assigned post identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A post as stored.
///
/// `published` only ever moves from false to true and `view_count` only
/// grows, one per increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub view_count: i64,
    pub author_id: UserId,
}

impl Post {
    pub fn is_draft(&self) -> bool {
        !self.published
    }

    /// Case-sensitive substring match against title or content.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self
                .content
                .as_deref()
                .is_some_and(|content| content.contains(needle))
    }
}

/// A freshly created post together with its resolved author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: User,
}

/// Insert payload. The author is already resolved to an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub author_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: Option<&str>) -> Post {
        Post {
            id: PostId(1),
            title: title.into(),
            content: content.map(Into::into),
            published: false,
            view_count: 0,
            author_id: UserId(1),
        }
    }

    #[test]
    fn mentions_title_or_content() {
        assert!(post("Hello Rust", None).mentions("Rust"));
        assert!(post("Hello", Some("all about rust")).mentions("rust"));
        assert!(!post("Hello", None).mentions("rust"));
    }

    #[test]
    fn mentions_is_case_sensitive() {
        assert!(!post("Hello", Some("world")).mentions("hello"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(post("t", None)).unwrap();
        assert_eq!(json["viewCount"], 0);
        assert_eq!(json["authorId"], 1);
        assert_eq!(json["published"], false);
    }
}
