//! Editable-field model.
//!
//! [`FieldBuffer`] is the add-on's view of the focused rich-text field: its
//! text, the active selection, and the caret. The host owns the real widget;
//! it copies state in before a removal command and applies the result after.

use std::ops::Range;

use tracing::debug;

use crate::scanner::{cloze_at, strip_clozes};

/// Focused-field state a removal command operates on.
///
/// All offsets are byte offsets into UTF-8 text. Setters ignore offsets that
/// are out of range or off a char boundary rather than panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    selection: Option<Range<usize>>,
    caret: usize,
}

impl FieldBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
            caret: 0,
        }
    }

    /// Set the active selection. Invalid ranges are ignored.
    #[must_use]
    pub fn with_selection(mut self, range: Range<usize>) -> Self {
        if range.start <= range.end
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
        {
            self.caret = range.end;
            self.selection = Some(range);
        } else {
            debug!(?range, "ignoring invalid selection");
        }
        self
    }

    /// Place the caret. Invalid positions are ignored.
    #[must_use]
    pub fn with_caret(mut self, caret: usize) -> Self {
        if self.text.is_char_boundary(caret) {
            self.caret = caret;
        } else {
            debug!(caret, "ignoring invalid caret");
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Strip every marker from the selection, or from the whole field when
    /// nothing is selected. The caret lands at the end of the rewritten span
    /// and the selection collapses.
    pub fn remove_clozes(&mut self) {
        let range = self.selection.take().unwrap_or(0..self.text.len());
        let replacement = strip_clozes(&self.text[range.clone()]);
        let end = range.start + replacement.len();
        self.text.replace_range(range, &replacement);
        self.caret = end;
    }

    /// Strip only the innermost marker enclosing the caret.
    ///
    /// An active selection collapses to its start first, so a selection
    /// inside a nested marker removes the nested one, not its parent. Leaves
    /// the field untouched when the caret is not inside a marker.
    pub fn remove_cloze_at_caret(&mut self) {
        let pos = match self.selection.take() {
            Some(range) => range.start,
            None => self.caret,
        };
        let Some(span) = cloze_at(&self.text, pos) else {
            debug!(pos, "caret is not inside a cloze");
            self.caret = pos;
            return;
        };
        let content = span.content(&self.text).to_string();
        self.text
            .replace_range(span.open_start..span.close_end, &content);
        self.caret = span.open_start + content.len();
    }
}
