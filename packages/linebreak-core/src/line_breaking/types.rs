//! UAX #14 Line Breaking Types and Enums
//!
//! This module defines the types shared by every stage of the line
//! breaking pipeline: decoded code points, line break classes, boundary
//! tokens and the break decisions produced by the rule table.

use std::fmt;
use std::str::FromStr;

use crate::error::LineBreakError;

/// UAX #14 Line Breaking Classes
///
/// Closed set: every code point resolves to exactly one of these. `XX`
/// doubles as the "Other" class for code points the lookup table does not
/// know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineBreakClass {
    // Non-tailorable
    BK = 1,  // Mandatory Break
    CR = 2,  // Carriage Return
    LF = 3,  // Line Feed
    CM = 4,  // Combining Mark
    NL = 5,  // Next Line
    SG = 6,  // Surrogate
    WJ = 7,  // Word Joiner
    ZW = 8,  // Zero Width Space
    GL = 9,  // Non-breaking Glue
    SP = 10, // Space

    // Break opportunities
    B2 = 11, // Break Opportunity Before and After
    BA = 12, // Break After
    BB = 13, // Break Before
    HY = 14, // Hyphen
    CB = 15, // Contingent Break Opportunity

    // Characters prohibiting certain breaks
    CL = 16, // Close Punctuation
    CP = 17, // Close Parenthesis
    EX = 18, // Exclamation/Interrogation
    IN = 19, // Inseparable
    NS = 20, // Nonstarter
    OP = 21, // Open Punctuation
    QU = 22, // Quotation

    // Numeric context
    IS = 23, // Infix Numeric Separator
    NU = 24, // Numeric
    PO = 25, // Postfix Numeric
    PR = 26, // Prefix Numeric
    SY = 27, // Symbols Allowing Break After

    // Other characters
    AI = 28, // Ambiguous (Alphabetic or Ideographic)
    AL = 29, // Alphabetic
    CJ = 30, // Conditional Japanese Starter
    H2 = 31, // Hangul LV Syllable
    H3 = 32, // Hangul LVT Syllable
    HL = 33, // Hebrew Letter
    ID = 34, // Ideographic
    JL = 35, // Hangul L Jamo
    JV = 36, // Hangul V Jamo
    JT = 37, // Hangul T Jamo
    RI = 38, // Regional Indicator
    SA = 39, // South East Asian
    XX = 40, // Unknown
}

impl LineBreakClass {
    /// Every class, in declaration order
    pub const ALL: [LineBreakClass; 40] = [
        Self::BK, Self::CR, Self::LF, Self::CM, Self::NL, Self::SG, Self::WJ, Self::ZW,
        Self::GL, Self::SP, Self::B2, Self::BA, Self::BB, Self::HY, Self::CB, Self::CL,
        Self::CP, Self::EX, Self::IN, Self::NS, Self::OP, Self::QU, Self::IS, Self::NU,
        Self::PO, Self::PR, Self::SY, Self::AI, Self::AL, Self::CJ, Self::H2, Self::H3,
        Self::HL, Self::ID, Self::JL, Self::JV, Self::JT, Self::RI, Self::SA, Self::XX,
    ];

    /// Two-letter property value alias as used in `LineBreak.txt`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BK => "BK",
            Self::CR => "CR",
            Self::LF => "LF",
            Self::CM => "CM",
            Self::NL => "NL",
            Self::SG => "SG",
            Self::WJ => "WJ",
            Self::ZW => "ZW",
            Self::GL => "GL",
            Self::SP => "SP",
            Self::B2 => "B2",
            Self::BA => "BA",
            Self::BB => "BB",
            Self::HY => "HY",
            Self::CB => "CB",
            Self::CL => "CL",
            Self::CP => "CP",
            Self::EX => "EX",
            Self::IN => "IN",
            Self::NS => "NS",
            Self::OP => "OP",
            Self::QU => "QU",
            Self::IS => "IS",
            Self::NU => "NU",
            Self::PO => "PO",
            Self::PR => "PR",
            Self::SY => "SY",
            Self::AI => "AI",
            Self::AL => "AL",
            Self::CJ => "CJ",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::HL => "HL",
            Self::ID => "ID",
            Self::JL => "JL",
            Self::JV => "JV",
            Self::JT => "JT",
            Self::RI => "RI",
            Self::SA => "SA",
            Self::XX => "XX",
        }
    }

    /// Classes that end a line unconditionally (LB4, LB5)
    #[inline]
    pub fn is_hard_break(self) -> bool {
        matches!(self, Self::BK | Self::CR | Self::LF | Self::NL)
    }

    /// Classes that reset combining mark attachment during preprocessing
    #[inline]
    pub fn resets_mark_run(self) -> bool {
        matches!(
            self,
            Self::BK | Self::CR | Self::LF | Self::SP | Self::NL | Self::ZW
        )
    }

    /// Hangul jamo and syllable classes (LB26, LB27)
    #[inline]
    pub fn is_hangul(self) -> bool {
        matches!(self, Self::JL | Self::JV | Self::JT | Self::H2 | Self::H3)
    }
}

impl fmt::Display for LineBreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineBreakClass {
    type Err = LineBreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        // "Other" is how unmapped code points were historically labelled
        if tag.eq_ignore_ascii_case("other") {
            return Ok(Self::XX);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == tag)
            .ok_or_else(|| LineBreakError::UnknownClass(tag.to_string()))
    }
}

/// One logical character and its span in the source text
///
/// `offset` and `length` are measured in storage units of the source:
/// bytes for `str`, 16-bit units for UTF-16 slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePoint {
    pub value: u32,
    pub offset: usize,
    pub length: usize,
}

impl CodePoint {
    /// Storage-unit offset one past the end of this code point
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether this is a lone UTF-16 surrogate
    #[inline]
    pub fn is_surrogate(&self) -> bool {
        is_surrogate(self.value)
    }
}

/// Whether `value` falls in the UTF-16 surrogate range
#[inline]
pub fn is_surrogate(value: u32) -> bool {
    (0xD800..=0xDFFF).contains(&value)
}

/// Boundary produced by the preprocessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryToken {
    /// Code point index of the first member
    pub position: usize,
    /// Class before normalization
    pub raw_class: LineBreakClass,
    /// Number of code points this token covers (1 + folded marks)
    pub span_length: usize,
}

/// Outcome of the rule table for one boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BreakAction {
    /// Breaking is prohibited
    Prohibited = 0,
    /// Breaking is allowed
    Allowed = 1,
    /// Breaking is required (mandatory)
    Mandatory = 2,
}

impl BreakAction {
    /// Collapse to the breakable flag
    #[inline]
    pub fn is_break(self) -> bool {
        !matches!(self, Self::Prohibited)
    }
}

/// Break opportunity located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOpportunity {
    /// Code point index of the character following the break
    pub position: usize,
    /// Storage-unit offset of the character following the break
    pub offset: usize,
    /// Allowed or mandatory
    pub action: BreakAction,
}

/// Rolling context for rule application
///
/// Only the two preceding resolved classes matter to the rule table, so the
/// window never grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakContextState {
    /// Class of the token immediately before the current one
    pub prev_class: Option<LineBreakClass>,
    /// Class of the token before `prev_class`
    pub prev_prev_class: Option<LineBreakClass>,
}

impl BreakContextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn advance(&mut self, next_class: LineBreakClass) {
        self.prev_prev_class = self.prev_class;
        self.prev_class = Some(next_class);
    }
}
