//! UAX #14 Unicode Line Breaking Algorithm Implementation
//!
//! This module determines every position at which a line break is
//! permitted and splits text into line-breakable units.
//!
//! The module is organized into focused submodules, in pipeline order:
//! - `decoder`: Code point decoding for UTF-8 and UTF-16 text
//! - `character_classification`: Lookup traits and class normalization
//! - `preprocess`: Combining mark folding into boundary tokens
//! - `rule_application`: The ordered UAX #14 rule table
//! - `segmenter`: Splitting text at break points
//! - `analyzer`: Main analyzer wiring the stages together
//! - `table`: Classification data parsed from `LineBreak.txt`
//! - `types`: Line breaking types, enums, and data structures

pub mod analyzer;
pub mod character_classification;
pub mod decoder;
pub mod preprocess;
pub mod rule_application;
pub mod segmenter;
pub mod table;
pub mod types;

// Re-export main public APIs
pub use analyzer::{BreakActions, Breakables, LineBreakAnalyzer};
pub use character_classification::{
    default_class_lookup, default_width_lookup, ClassLookup, ClassResolver, UnicodeClassLookup,
    UnicodeWidthLookup, WidthLookup,
};
pub use decoder::{decode, TextSource};
pub use preprocess::preprocess;
pub use rule_application::{apply_rules, matching_rule, Rule, RuleContext, RuleEngine, RULES};
pub use segmenter::{break_units, BreakUnits};
pub use table::ClassTable;
pub use types::{
    BoundaryToken, BreakAction, BreakContextState, BreakOpportunity, CodePoint, LineBreakClass,
};
