//! Boundary preprocessing
//!
//! Collapses runs of combining marks into the token before them so the
//! rule table only ever sees one boundary per base character.

use super::types::{BoundaryToken, LineBreakClass};

/// Reduce per-code-point raw classes to boundary tokens
///
/// A CM directly after a reset class (BK, CR, LF, SP, NL, ZW) or at the
/// start of input starts its own token; every other CM extends the span of
/// the token before it.
pub fn preprocess(raw_classes: &[LineBreakClass]) -> Vec<BoundaryToken> {
    let mut tokens: Vec<BoundaryToken> = Vec::with_capacity(raw_classes.len());
    let mut previous: Option<LineBreakClass> = None;

    for (position, &raw_class) in raw_classes.iter().enumerate() {
        let emit = if raw_class.resets_mark_run() {
            previous = None;
            true
        } else if raw_class == LineBreakClass::CM {
            if previous.is_none() {
                previous = Some(raw_class);
                true
            } else {
                false
            }
        } else {
            previous = Some(raw_class);
            true
        };

        if emit {
            tokens.push(BoundaryToken {
                position,
                raw_class,
                span_length: 1,
            });
        } else if let Some(last) = tokens.last_mut() {
            last.span_length += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_breaking::types::LineBreakClass::*;

    fn spans(tokens: &[BoundaryToken]) -> Vec<(usize, LineBreakClass, usize)> {
        tokens
            .iter()
            .map(|t| (t.position, t.raw_class, t.span_length))
            .collect()
    }

    #[test]
    fn test_marks_fold_into_base() {
        let tokens = preprocess(&[AL, CM, CM, AL]);
        assert_eq!(spans(&tokens), vec![(0, AL, 3), (3, AL, 1)]);
    }

    #[test]
    fn test_leading_mark_is_own_token() {
        let tokens = preprocess(&[CM, CM, AL]);
        assert_eq!(spans(&tokens), vec![(0, CM, 2), (2, AL, 1)]);
    }

    #[test]
    fn test_mark_after_reset_class_is_own_token() {
        let tokens = preprocess(&[AL, SP, CM, CM, LF, CM]);
        assert_eq!(
            spans(&tokens),
            vec![(0, AL, 1), (1, SP, 1), (2, CM, 2), (4, LF, 1), (5, CM, 1)]
        );
    }

    #[test]
    fn test_reset_classes_are_never_folded() {
        let tokens = preprocess(&[AL, SP, SP, ZW, BK]);
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.span_length == 1));
    }

    #[test]
    fn test_span_lengths_cover_input() {
        let classes = [CM, AL, CM, SP, CM, CM, ID, CM, NU];
        let tokens = preprocess(&classes);
        let covered: usize = tokens.iter().map(|t| t.span_length).sum();
        assert_eq!(covered, classes.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(preprocess(&[]).is_empty());
    }
}
