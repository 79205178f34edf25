// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight segmentation and rendering.
//!
//! The segmenter partitions a document into match and non-match spans;
//! the renderer paints those spans on a terminal. Only the segmenter has
//! invariants (reconstruction, coverage); rendering is chrome.

pub mod render;
pub mod segmenter;

pub use render::write_segments;
pub use segmenter::{HighlightedSegment, combine, segment};
