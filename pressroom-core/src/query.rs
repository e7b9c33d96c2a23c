//! Query builder - turns caller parameters into store filters
//!
//! Everything here is a pure function of its inputs. Stores consume the
//! resulting [`PostFilter`]; the PostgreSQL adapter renders it to SQL and the
//! memory adapter evaluates [`PostFilter::matches`] directly.
//!
//! # Search semantics
//!
//! A present, non-empty search string matches posts whose title OR content
//! contains it as a plain, case-sensitive substring. Every store implements
//! exactly this; no collation or wildcard behavior leaks through.

use crate::models::{Post, UserId, Window};

/// Read filter over posts.
///
/// Listings built from a filter are always ordered by post identity,
/// ascending, before the window is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    published: Option<bool>,
    author: Option<UserId>,
    search: Option<String>,
    window: Window,
}

impl PostFilter {
    /// Required published state, if any.
    pub fn published(&self) -> Option<bool> {
        self.published
    }

    /// Required author, if any.
    pub fn author(&self) -> Option<UserId> {
        self.author
    }

    /// Substring that must appear in title or content, if any. Never empty.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Evaluate the predicate part of the filter (the window is not applied).
    pub fn matches(&self, post: &Post) -> bool {
        self.published.map_or(true, |published| post.published == published)
            && self.author.map_or(true, |author| post.author_id == author)
            && self.search().map_or(true, |needle| post.mentions(needle))
    }
}

/// Public feed filter: published posts, optionally searched, optionally windowed.
///
/// An empty search string applies no text filter. `skip`/`take` become the
/// window's offset/limit verbatim.
pub fn feed_filter(search: Option<&str>, skip: Option<u64>, take: Option<u64>) -> PostFilter {
    PostFilter {
        published: Some(true),
        author: None,
        search: search.filter(|s| !s.is_empty()).map(str::to_owned),
        window: Window::new(skip, take),
    }
}

/// Unpublished posts of one author, unwindowed.
pub fn drafts_filter(author: UserId) -> PostFilter {
    PostFilter {
        published: Some(false),
        author: Some(author),
        search: None,
        window: Window::unbounded(),
    }
}

/// Coerce a raw skip/take parameter.
///
/// Absent, blank, negative or non-numeric text yields `None` ("no bound"),
/// never zero.
pub fn parse_bound(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u64>().ok())
}
