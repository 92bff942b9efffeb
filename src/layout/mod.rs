//! Size distribution and the layout pass
//!
//! [`distribute`] resolves one container axis; [`LayoutTree::arrange`] walks
//! the tree top-down applying it to every panel and group.
//!
//! [`LayoutTree::arrange`]: crate::model::LayoutTree::arrange

pub mod arrange;
pub mod distribute;

pub use arrange::SplitterBar;
pub use distribute::{distribute, effective_lengths, summarize, ChildMeasure, SizeSummary};
