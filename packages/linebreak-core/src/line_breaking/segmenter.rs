//! Segmentation of text into line-breakable units

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use super::decoder::TextSource;
use super::types::CodePoint;

/// Iterator over the units between consecutive break points
///
/// A unit starts at every code point index `i > 0` whose flag is `true`;
/// the last unit runs to the end of the text. Flags past the end of the
/// text are ignored and missing flags count as `false`. Units borrow from
/// the text only, so the flags may be dropped before the units are.
pub struct BreakUnits<'t, 'b, S: TextSource + ?Sized> {
    text: &'t S,
    code_points: Vec<CodePoint>,
    breakables: Cow<'b, [bool]>,
    cursor: usize,
    start: usize,
    finished: bool,
}

impl<'t, 'b, S: TextSource + ?Sized> BreakUnits<'t, 'b, S> {
    pub fn new(text: &'t S, breakables: impl Into<Cow<'b, [bool]>>) -> Self {
        let code_points = text.decode();
        let finished = code_points.is_empty();
        Self {
            text,
            code_points,
            breakables: breakables.into(),
            cursor: 1,
            start: 0,
            finished,
        }
    }

    #[inline]
    fn is_break(&self, index: usize) -> bool {
        self.breakables.get(index).copied().unwrap_or(false)
    }
}

impl<'t, S: TextSource + ?Sized> Iterator for BreakUnits<'t, '_, S> {
    type Item = &'t S;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let text: &'t S = self.text;

        while self.cursor < self.code_points.len() {
            let index = self.cursor;
            self.cursor += 1;
            if self.is_break(index) {
                let offset = self.code_points[index].offset;
                let unit = text.slice(self.start..offset);
                self.start = offset;
                return Some(unit);
            }
        }

        self.finished = true;
        Some(text.slice(self.start..text.unit_len()))
    }
}

impl<S: TextSource + ?Sized> FusedIterator for BreakUnits<'_, '_, S> {}

impl<S: TextSource + ?Sized> Clone for BreakUnits<'_, '_, S> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            code_points: self.code_points.clone(),
            breakables: self.breakables.clone(),
            cursor: self.cursor,
            start: self.start,
            finished: self.finished,
        }
    }
}

impl<S: TextSource + ?Sized> fmt::Debug for BreakUnits<'_, '_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakUnits")
            .field("code_points", &self.code_points.len())
            .field("cursor", &self.cursor)
            .field("start", &self.start)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Split `text` at the given breakable flags
pub fn break_units<'t, 'b, S: TextSource + ?Sized>(
    text: &'t S,
    breakables: &'b [bool],
) -> BreakUnits<'t, 'b, S> {
    BreakUnits::new(text, breakables)
}
