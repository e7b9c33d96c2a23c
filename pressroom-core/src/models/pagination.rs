//! Offset/limit windows over ordered listings

use serde::{Deserialize, Serialize};

/// Pagination window.
///
/// `None` on either side means unbounded: no offset skips nothing, no limit
/// returns every remaining row. A present zero is honored as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Rows to skip from the start
    pub offset: Option<u64>,
    /// Maximum rows to return
    pub limit: Option<u64>,
}

impl Window {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self { offset, limit }
    }

    /// Window that returns everything.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.offset.is_none() && self.limit.is_none()
    }

    /// OFFSET value for SQL binds. Values past `i64::MAX` saturate.
    pub fn sql_offset(&self) -> Option<i64> {
        self.offset.map(saturating_i64)
    }

    /// LIMIT value for SQL binds. Values past `i64::MAX` saturate.
    pub fn sql_limit(&self) -> Option<i64> {
        self.limit.map(saturating_i64)
    }

    /// Apply the window to an already ordered iterator.
    pub fn apply<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
    {
        let skip = self.offset.map_or(0, saturating_usize);
        let take = self.limit.map_or(usize::MAX, saturating_usize);
        items.into_iter().skip(skip).take(take).collect()
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
