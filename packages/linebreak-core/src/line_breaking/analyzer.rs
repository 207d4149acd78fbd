//! Line break analyzer
//!
//! This module contains the `LineBreakAnalyzer`, which wires decoding,
//! classification, preprocessing, rule application and segmentation into a
//! single pass over the text.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use super::character_classification::{ClassLookup, ClassResolver, WidthLookup};
use super::decoder::TextSource;
use super::preprocess::preprocess;
use super::rule_application::RuleEngine;
use super::segmenter::BreakUnits;
use super::types::{BoundaryToken, BreakAction, BreakOpportunity, CodePoint, LineBreakClass};
use crate::config::LineBreakConfig;

/// UAX #14 line break analyzer
///
/// Immutable once built; share it freely between threads. The lookup data
/// it holds is read-only and reference counted.
#[derive(Clone, Default)]
pub struct LineBreakAnalyzer {
    resolver: ClassResolver,
    config: LineBreakConfig,
}

impl LineBreakAnalyzer {
    /// Analyzer over the default Unicode data, non-legacy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LineBreakConfig) -> Self {
        Self::with_resolver(ClassResolver::default(), config)
    }

    /// Analyzer over caller-provided class and width data
    pub fn with_lookups(
        classes: Arc<dyn ClassLookup>,
        widths: Arc<dyn WidthLookup>,
        config: LineBreakConfig,
    ) -> Self {
        Self::with_resolver(ClassResolver::new(classes, widths), config)
    }

    pub fn with_resolver(resolver: ClassResolver, config: LineBreakConfig) -> Self {
        log::debug!("Creating line break analyzer (legacy: {})", config.legacy);
        Self { resolver, config }
    }

    pub fn config(&self) -> &LineBreakConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ClassResolver {
        &self.resolver
    }

    /// Raw (pre-normalization) class of every code point
    pub fn classify<S: TextSource + ?Sized>(&self, text: &S) -> Vec<LineBreakClass> {
        text.decode()
            .iter()
            .map(|cp| self.resolver.raw_class(cp.value))
            .collect()
    }

    /// Boundary tokens after combining mark folding
    pub fn boundaries<S: TextSource + ?Sized>(&self, text: &S) -> Vec<BoundaryToken> {
        preprocess(&self.classify(text))
    }

    /// Per code point break actions; folded marks are always prohibited
    pub fn break_actions<S: TextSource + ?Sized>(&self, text: &S) -> BreakActions {
        self.actions_for(&text.decode())
    }

    fn actions_for(&self, code_points: &[CodePoint]) -> BreakActions {
        let values: Vec<u32> = code_points.iter().map(|cp| cp.value).collect();
        let raw: Vec<LineBreakClass> = values
            .iter()
            .map(|&value| self.resolver.raw_class(value))
            .collect();
        let tokens = preprocess(&raw);

        log::trace!(
            "Analyzing {} code points in {} boundaries",
            values.len(),
            tokens.len()
        );

        BreakActions {
            resolver: self.resolver.clone(),
            legacy: self.config.legacy,
            values,
            tokens: tokens.into_iter(),
            engine: RuleEngine::new(),
            pending_marks: 0,
        }
    }

    /// Lazy breakable flag for every code point; index 0 is always `false`
    pub fn breakable_points<S: TextSource + ?Sized>(&self, text: &S) -> Breakables {
        Breakables {
            actions: self.break_actions(text),
        }
    }

    /// Collected form of [`LineBreakAnalyzer::breakable_points`]
    pub fn breakable_vec<S: TextSource + ?Sized>(&self, text: &S) -> Vec<bool> {
        self.breakable_points(text).collect()
    }

    /// Positions where a break is allowed or required
    pub fn break_opportunities<S: TextSource + ?Sized>(
        &self,
        text: &S,
    ) -> impl Iterator<Item = BreakOpportunity> {
        let code_points = text.decode();
        self.actions_for(&code_points)
            .zip(code_points)
            .enumerate()
            .filter(|(_, (action, _))| action.is_break())
            .map(|(position, (action, cp))| BreakOpportunity {
                position,
                offset: cp.offset,
                action,
            })
    }

    /// Split `text` into line-breakable units
    pub fn break_units<'t, S: TextSource + ?Sized>(
        &self,
        text: &'t S,
    ) -> BreakUnits<'t, 'static, S> {
        BreakUnits::new(text, self.breakable_vec(text))
    }

    /// Split `text` at mandatory breaks only
    pub fn lines<'t, S: TextSource + ?Sized>(
        &self,
        text: &'t S,
    ) -> BreakUnits<'t, 'static, S> {
        let mandatory: Vec<bool> = self
            .break_actions(text)
            .map(|action| action == BreakAction::Mandatory)
            .collect();
        BreakUnits::new(text, mandatory)
    }
}

impl fmt::Debug for LineBreakAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBreakAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Lazy per code point break actions
///
/// Owns everything it needs, so it outlives the analyzer that built it.
#[derive(Clone)]
pub struct BreakActions {
    resolver: ClassResolver,
    legacy: bool,
    values: Vec<u32>,
    tokens: std::vec::IntoIter<BoundaryToken>,
    engine: RuleEngine,
    pending_marks: usize,
}

impl Iterator for BreakActions {
    type Item = BreakAction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_marks > 0 {
            self.pending_marks -= 1;
            return Some(BreakAction::Prohibited);
        }

        let token = self.tokens.next()?;
        let class =
            self.resolver
                .normalize(self.values[token.position], token.raw_class, self.legacy);
        let action = self.engine.step(token.position, class);
        self.pending_marks = token.span_length.saturating_sub(1);
        Some(action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pending_marks
            + self
                .tokens
                .as_slice()
                .iter()
                .map(|t| t.span_length)
                .sum::<usize>();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BreakActions {}

impl FusedIterator for BreakActions {}

impl fmt::Debug for BreakActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakActions")
            .field("legacy", &self.legacy)
            .field("remaining", &self.len())
            .finish_non_exhaustive()
    }
}

/// Lazy breakable flags, one per code point
#[derive(Debug, Clone)]
pub struct Breakables {
    actions: BreakActions,
}

impl Iterator for Breakables {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.actions.next().map(BreakAction::is_break)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.actions.size_hint()
    }
}

impl ExactSizeIterator for Breakables {}

impl FusedIterator for Breakables {}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(text: &str) -> Vec<bool> {
        LineBreakAnalyzer::new().breakable_vec(text)
    }

    fn true_positions(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    #[test]
    fn test_hello_world() {
        let result = flags("Hello world");
        assert_eq!(result.len(), 11);
        assert_eq!(true_positions(&result), vec![6]);
    }

    #[test]
    fn test_parenthesized_letter() {
        assert_eq!(flags("(x)"), vec![false, false, false]);
    }

    #[test]
    fn test_quotes_attach_both_sides() {
        assert!(flags("\"word\"").iter().all(|&b| !b));
        assert!(!flags("a \"b\" c")[3]);
    }

    #[test]
    fn test_crlf_is_one_break() {
        let result = flags("a\r\nb");
        assert_eq!(result, vec![false, false, false, true]);
    }

    #[test]
    fn test_combining_marks_never_break() {
        // e + two combining acutes, then an ideograph
        let result = flags("e\u{301}\u{301}\u{4E00}");
        assert_eq!(result, vec![false, false, false, true]);
    }

    #[test]
    fn test_size_hint_matches_code_points() {
        let analyzer = LineBreakAnalyzer::new();
        let points = analyzer.breakable_points("a\u{301} b");
        assert_eq!(points.len(), 4);
        assert_eq!(points.count(), 4);
    }

    #[test]
    fn test_break_opportunities_report_offsets() {
        let analyzer = LineBreakAnalyzer::new();
        let opportunities: Vec<_> = analyzer.break_opportunities("é b\nc").collect();
        assert_eq!(
            opportunities,
            vec![
                BreakOpportunity {
                    position: 2,
                    offset: 3,
                    action: BreakAction::Allowed,
                },
                BreakOpportunity {
                    position: 4,
                    offset: 5,
                    action: BreakAction::Mandatory,
                },
            ]
        );
    }

    #[test]
    fn test_break_opportunities_use_utf16_offsets() {
        let analyzer = LineBreakAnalyzer::new();
        let text: Vec<u16> = "\u{1F600} \u{1F600}".encode_utf16().collect();
        let opportunities: Vec<_> = analyzer.break_opportunities(text.as_slice()).collect();
        assert_eq!(
            opportunities,
            vec![BreakOpportunity {
                position: 2,
                offset: 3,
                action: BreakAction::Allowed,
            }]
        );
    }

    #[test]
    fn test_lines_split_only_at_mandatory_breaks() {
        let analyzer = LineBreakAnalyzer::new();
        let lines: Vec<&str> = analyzer.lines("one two\nthree\r\nfour").collect();
        assert_eq!(lines, vec!["one two\n", "three\r\n", "four"]);
    }

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineBreakAnalyzer>();
        assert_send_sync::<Breakables>();
    }
}
