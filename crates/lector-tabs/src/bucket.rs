//! Bucket layout
//!
//! The tab sequence is cut into consecutive buckets of `step` tabs. Only one
//! bucket is rendered at a time; the seek controls page between them.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How many tabs of `tab_width_px` fit in `available_width`. Never zero.
pub fn step_tabs(available_width: u32, tab_width_px: u32) -> usize {
    let fitting = available_width / tab_width_px.max(1);
    (fitting as usize).max(1)
}

/// Number of buckets needed for `tab_count` tabs. Never zero.
pub fn bucket_count(tab_count: usize, step: usize) -> usize {
    tab_count.div_ceil(step.max(1)).max(1)
}

/// Bucket holding the tab at `index`
pub fn bucket_of(index: usize, step: usize) -> usize {
    index / step.max(1)
}

/// Tab indices shown when `bucket` is rendered
pub fn bucket_range(bucket: usize, step: usize, tab_count: usize) -> Range<usize> {
    let step = step.max(1);
    let start = bucket.saturating_mul(step).min(tab_count);
    let end = start.saturating_add(step).min(tab_count);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeekState {
    Active,
    Inactive,
}

impl SeekState {
    fn from_flag(active: bool) -> Self {
        if active {
            SeekState::Active
        } else {
            SeekState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SeekState::Active)
    }
}

/// Enabled state of the left/right paging controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekControls {
    pub left: SeekState,
    pub right: SeekState,
}

impl Default for SeekControls {
    fn default() -> Self {
        Self {
            left: SeekState::Inactive,
            right: SeekState::Inactive,
        }
    }
}

/// Seek controls for the shown bucket
pub fn seek_controls(buckets: usize, current_bucket: usize) -> SeekControls {
    if buckets <= 1 {
        return SeekControls::default();
    }

    SeekControls {
        left: SeekState::from_flag(current_bucket > 0),
        right: SeekState::from_flag(current_bucket < buckets - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_tabs() {
        assert_eq!(step_tabs(800, 100), 8);
        assert_eq!(step_tabs(350, 100), 3);
        // Narrower than a single tab still shows one
        assert_eq!(step_tabs(40, 100), 1);
        assert_eq!(step_tabs(500, 0), 500);
    }

    #[test]
    fn test_bucket_count() {
        assert_eq!(bucket_count(0, 3), 1);
        assert_eq!(bucket_count(3, 3), 1);
        assert_eq!(bucket_count(4, 3), 2);
        assert_eq!(bucket_count(5, 2), 3);
    }

    #[test]
    fn test_bucket_of() {
        assert_eq!(bucket_of(0, 3), 0);
        assert_eq!(bucket_of(2, 3), 0);
        assert_eq!(bucket_of(3, 3), 1);
    }

    #[test]
    fn test_bucket_range_clips_to_tab_count() {
        assert_eq!(bucket_range(0, 3, 4), 0..3);
        assert_eq!(bucket_range(1, 3, 4), 3..4);
        assert!(bucket_range(2, 3, 4).is_empty());
    }

    #[test]
    fn test_seek_controls_table() {
        let single = seek_controls(1, 0);
        assert_eq!(single.left, SeekState::Inactive);
        assert_eq!(single.right, SeekState::Inactive);

        let first = seek_controls(3, 0);
        assert_eq!(first.left, SeekState::Inactive);
        assert_eq!(first.right, SeekState::Active);

        let middle = seek_controls(3, 1);
        assert_eq!(middle.left, SeekState::Active);
        assert_eq!(middle.right, SeekState::Active);

        let last = seek_controls(3, 2);
        assert_eq!(last.left, SeekState::Active);
        assert_eq!(last.right, SeekState::Inactive);
    }
}
