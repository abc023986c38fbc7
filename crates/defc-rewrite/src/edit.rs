//! Byte-range edits applied to the original source.

use std::ops::Range;

use ropey::Rope;

use crate::error::{RewriteError, RewriteResult};

/// A replacement of `range` (byte offsets into the original source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self {
            range: offset..offset,
            new_text: new_text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            new_text: String::new(),
        }
    }

    pub fn replace(range: Range<usize>, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Apply `edits` to `source`.
///
/// Edits are checked for overlap first; two edits starting at the same
/// offset also count as overlapping since their order would be ambiguous.
/// On error `source` is left untouched.
pub fn apply_edits(source: &mut Rope, mut edits: Vec<TextEdit>) -> RewriteResult<()> {
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

    for pair in edits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.range.end > b.range.start || a.range.start == b.range.start {
            return Err(RewriteError::OverlappingEdits {
                offset: b.range.start,
            });
        }
    }

    // Back to front, so earlier offsets stay valid.
    for edit in edits.iter().rev() {
        let start = source.byte_to_char(edit.range.start);
        let end = source.byte_to_char(edit.range.end);
        if start < end {
            source.remove(start..end);
        }
        if !edit.new_text.is_empty() {
            source.insert(start, &edit.new_text);
        }
    }

    Ok(())
}
