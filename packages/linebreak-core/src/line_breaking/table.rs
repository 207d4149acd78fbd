//! In-memory classification table loaded from UCD `LineBreak.txt` data
//!
//! Lets callers pin the classification data to a particular Unicode
//! version instead of the tables compiled into `unicode-linebreak`.

use super::character_classification::ClassLookup;
use super::types::LineBreakClass;
use crate::error::{LineBreakError, LineBreakResult};

const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Sorted, non-overlapping code point ranges with their classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTable {
    ranges: Vec<(u32, u32, LineBreakClass)>,
}

impl ClassTable {
    /// Build from inclusive `(start, end, class)` ranges in any order
    pub fn from_ranges(
        ranges: impl IntoIterator<Item = (u32, u32, LineBreakClass)>,
    ) -> LineBreakResult<Self> {
        let mut ranges: Vec<_> = ranges.into_iter().collect();
        for &(start, end, _) in &ranges {
            if start > end || end > MAX_CODE_POINT {
                return Err(LineBreakError::InvalidRange { start, end });
            }
        }

        ranges.sort_unstable_by_key(|&(start, _, _)| start);
        for pair in ranges.windows(2) {
            let (_, prev_end, _) = pair[0];
            let (start, end, _) = pair[1];
            if start <= prev_end {
                return Err(LineBreakError::InvalidRange { start, end });
            }
        }

        Ok(Self { ranges })
    }

    /// Parse `LineBreak.txt` formatted data
    ///
    /// Each data line is `XXXX;CLASS` or `XXXX..YYYY;CLASS`; anything after
    /// `#` is a comment and blank lines are skipped.
    pub fn parse(data: &str) -> LineBreakResult<Self> {
        let mut ranges = Vec::new();

        for (index, line) in data.lines().enumerate() {
            let line_no = index + 1;
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let (points, class) =
                content
                    .split_once(';')
                    .ok_or_else(|| LineBreakError::MalformedLine {
                        line: line_no,
                        reason: "missing ';' separator".to_string(),
                    })?;

            let (start, end) = match points.trim().split_once("..") {
                Some((start, end)) => (
                    parse_code_point(start, line_no)?,
                    parse_code_point(end, line_no)?,
                ),
                None => {
                    let cp = parse_code_point(points, line_no)?;
                    (cp, cp)
                }
            };

            ranges.push((start, end, class.trim().parse::<LineBreakClass>()?));
        }

        let table = Self::from_ranges(ranges)?;
        log::debug!("Loaded line break table with {} ranges", table.len());
        Ok(table)
    }

    /// Class of `codepoint`, if the table covers it
    pub fn get(&self, codepoint: u32) -> Option<LineBreakClass> {
        let index = self
            .ranges
            .partition_point(|&(start, _, _)| start <= codepoint);
        let (start, end, class) = *self.ranges.get(index.checked_sub(1)?)?;
        (start..=end).contains(&codepoint).then_some(class)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl ClassLookup for ClassTable {
    fn resolve(&self, codepoint: u32) -> LineBreakClass {
        self.get(codepoint).unwrap_or(LineBreakClass::XX)
    }
}

fn parse_code_point(text: &str, line: usize) -> LineBreakResult<u32> {
    u32::from_str_radix(text.trim(), 16).map_err(|err| LineBreakError::MalformedLine {
        line,
        reason: format!("invalid code point {:?}: {}", text.trim(), err),
    })
}
