//! Unicode line break opportunities for Blitz
//!
//! This crate implements the UAX #14 Line Breaking Algorithm:
//! - Code point decoding for UTF-8 and UTF-16 (surrogate pair aware) text
//! - Line break classification with injectable lookup data
//! - Combining mark folding and the ordered pair rule table
//! - Segmentation of text into line-breakable units
//!
//! ```
//! let flags: Vec<bool> = linebreak_core::get_breakable_points("Hello world", false).collect();
//! assert_eq!(flags.iter().position(|&b| b), Some(6));
//!
//! let units: Vec<&str> = linebreak_core::break_units("Hello world", &flags).collect();
//! assert_eq!(units, ["Hello ", "world"]);
//! ```

pub mod config;
pub mod error;
pub mod line_breaking;

pub use config::LineBreakConfig;
pub use error::{LineBreakError, LineBreakResult};
pub use line_breaking::{
    break_units, BoundaryToken, BreakAction, BreakActions, BreakOpportunity, BreakUnits,
    Breakables, ClassLookup, ClassResolver, ClassTable, CodePoint, LineBreakAnalyzer,
    LineBreakClass, TextSource, UnicodeClassLookup, UnicodeWidthLookup, WidthLookup,
};

/// Breakable flags for `text` using the default Unicode data
pub fn get_breakable_points<S: TextSource + ?Sized>(text: &S, legacy: bool) -> Breakables {
    LineBreakAnalyzer::with_config(LineBreakConfig::new(legacy)).breakable_points(text)
}
