//! Unicode character classification for line breaking
//!
//! The raw class and width data live behind two read-only traits so that
//! callers can inject their own tables. The defaults are backed by the
//! `unicode-linebreak` crate and the ICU4X East_Asian_Width property map.

use std::fmt;
use std::sync::Arc;

use icu_properties::{maps, EastAsianWidth};
use once_cell::sync::Lazy;
use unicode_linebreak::{break_property, BreakClass};

use super::types::{is_surrogate, LineBreakClass};

/// Code point to line break class lookup
pub trait ClassLookup: Send + Sync {
    /// Class of `codepoint`; code points without data resolve to `XX`
    fn resolve(&self, codepoint: u32) -> LineBreakClass;
}

/// East Asian width lookup, consulted only in legacy mode
pub trait WidthLookup: Send + Sync {
    fn is_wide(&self, codepoint: u32) -> bool;
}

/// Class lookup backed by the `unicode-linebreak` property tables
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassLookup;

impl ClassLookup for UnicodeClassLookup {
    fn resolve(&self, codepoint: u32) -> LineBreakClass {
        from_unicode_break_class(break_property(codepoint))
    }
}

/// Width lookup backed by the compiled ICU4X East_Asian_Width data
///
/// A code point counts as wide when its East Asian width is Ambiguous:
/// narrow in ordinary text, wide in a CJK context.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWidthLookup;

impl WidthLookup for UnicodeWidthLookup {
    fn is_wide(&self, codepoint: u32) -> bool {
        maps::east_asian_width().get32(codepoint) == EastAsianWidth::Ambiguous
    }
}

static DEFAULT_CLASS_LOOKUP: Lazy<Arc<dyn ClassLookup>> =
    Lazy::new(|| Arc::new(UnicodeClassLookup));

static DEFAULT_WIDTH_LOOKUP: Lazy<Arc<dyn WidthLookup>> =
    Lazy::new(|| Arc::new(UnicodeWidthLookup));

/// Shared handle to the default class data
pub fn default_class_lookup() -> Arc<dyn ClassLookup> {
    Arc::clone(&DEFAULT_CLASS_LOOKUP)
}

/// Shared handle to the default width data
pub fn default_width_lookup() -> Arc<dyn WidthLookup> {
    Arc::clone(&DEFAULT_WIDTH_LOOKUP)
}

/// Fold the `unicode-linebreak` classes into the closed class set
///
/// ZWJ behaves as a combining mark and the emoji classes as ideographs,
/// which is how UAX #14 treated them before they were split out.
#[allow(unreachable_patterns)]
fn from_unicode_break_class(class: BreakClass) -> LineBreakClass {
    match class {
        BreakClass::Mandatory => LineBreakClass::BK,
        BreakClass::CarriageReturn => LineBreakClass::CR,
        BreakClass::LineFeed => LineBreakClass::LF,
        BreakClass::CombiningMark => LineBreakClass::CM,
        BreakClass::NextLine => LineBreakClass::NL,
        BreakClass::Surrogate => LineBreakClass::SG,
        BreakClass::WordJoiner => LineBreakClass::WJ,
        BreakClass::ZeroWidthSpace => LineBreakClass::ZW,
        BreakClass::NonBreakingGlue => LineBreakClass::GL,
        BreakClass::Space => LineBreakClass::SP,
        BreakClass::ZeroWidthJoiner => LineBreakClass::CM,
        BreakClass::BeforeAndAfter => LineBreakClass::B2,
        BreakClass::After => LineBreakClass::BA,
        BreakClass::Before => LineBreakClass::BB,
        BreakClass::Hyphen => LineBreakClass::HY,
        BreakClass::Contingent => LineBreakClass::CB,
        BreakClass::ClosePunctuation => LineBreakClass::CL,
        BreakClass::CloseParenthesis => LineBreakClass::CP,
        BreakClass::Exclamation => LineBreakClass::EX,
        BreakClass::Inseparable => LineBreakClass::IN,
        BreakClass::NonStarter => LineBreakClass::NS,
        BreakClass::OpenPunctuation => LineBreakClass::OP,
        BreakClass::Quotation => LineBreakClass::QU,
        BreakClass::InfixSeparator => LineBreakClass::IS,
        BreakClass::Numeric => LineBreakClass::NU,
        BreakClass::Postfix => LineBreakClass::PO,
        BreakClass::Prefix => LineBreakClass::PR,
        BreakClass::Symbol => LineBreakClass::SY,
        BreakClass::Ambiguous => LineBreakClass::AI,
        BreakClass::Alphabetic => LineBreakClass::AL,
        BreakClass::ConditionalJapaneseStarter => LineBreakClass::CJ,
        BreakClass::EmojiBase => LineBreakClass::ID,
        BreakClass::EmojiModifier => LineBreakClass::ID,
        BreakClass::HangulLvSyllable => LineBreakClass::H2,
        BreakClass::HangulLvtSyllable => LineBreakClass::H3,
        BreakClass::HebrewLetter => LineBreakClass::HL,
        BreakClass::Ideographic => LineBreakClass::ID,
        BreakClass::HangulLJamo => LineBreakClass::JL,
        BreakClass::HangulVJamo => LineBreakClass::JV,
        BreakClass::HangulTJamo => LineBreakClass::JT,
        BreakClass::RegionalIndicator => LineBreakClass::RI,
        BreakClass::ComplexContext => LineBreakClass::SA,
        BreakClass::Unknown => LineBreakClass::XX,
        _ => LineBreakClass::XX,
    }
}

/// Resolves code points to raw and normalized line break classes
#[derive(Clone)]
pub struct ClassResolver {
    classes: Arc<dyn ClassLookup>,
    widths: Arc<dyn WidthLookup>,
}

impl ClassResolver {
    pub fn new(classes: Arc<dyn ClassLookup>, widths: Arc<dyn WidthLookup>) -> Self {
        Self { classes, widths }
    }

    /// Class straight from the lookup data; surrogates are always SG
    pub fn raw_class(&self, codepoint: u32) -> LineBreakClass {
        if is_surrogate(codepoint) {
            return LineBreakClass::SG;
        }
        self.classes.resolve(codepoint)
    }

    /// Normalize a raw class for rule evaluation
    pub fn normalize(&self, codepoint: u32, raw: LineBreakClass, legacy: bool) -> LineBreakClass {
        let class = match raw {
            LineBreakClass::AL if legacy && self.widths.is_wide(codepoint) => LineBreakClass::ID,
            LineBreakClass::AI if legacy => LineBreakClass::ID,
            LineBreakClass::AI => LineBreakClass::AL,
            other => other,
        };

        match class {
            LineBreakClass::CJ => LineBreakClass::NS,
            LineBreakClass::CM | LineBreakClass::XX | LineBreakClass::SA => LineBreakClass::AL,
            other => other,
        }
    }

    /// Normalized class of `codepoint`
    pub fn class_of(&self, codepoint: u32, legacy: bool) -> LineBreakClass {
        self.normalize(codepoint, self.raw_class(codepoint), legacy)
    }
}

impl Default for ClassResolver {
    fn default() -> Self {
        Self::new(default_class_lookup(), default_width_lookup())
    }
}

impl fmt::Debug for ClassResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassResolver").finish_non_exhaustive()
    }
}
