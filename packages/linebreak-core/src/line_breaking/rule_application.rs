//! UAX #14 rule application and break determination
//!
//! The pair rules are an ordered table of `(predicate, action)` entries.
//! The first entry whose predicate holds decides the boundary; LB31 is
//! applied outside the table, so every boundary gets a decision.

use std::fmt;

use super::types::{BoundaryToken, BreakAction, BreakContextState, LineBreakClass};

use LineBreakClass::*;

/// Classes visible to a rule at one boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// Boundary sits at the start of text
    pub at_start: bool,
    /// Class after the boundary
    pub curr: LineBreakClass,
    /// Class before the boundary
    pub prev: Option<LineBreakClass>,
    /// Class before `prev`
    pub prev_prev: Option<LineBreakClass>,
}

impl RuleContext {
    pub fn new(at_start: bool, state: &BreakContextState, curr: LineBreakClass) -> Self {
        Self {
            at_start,
            curr,
            prev: state.prev_class,
            prev_prev: state.prev_prev_class,
        }
    }

    #[inline]
    fn prev_is(&self, class: LineBreakClass) -> bool {
        self.prev == Some(class)
    }

    #[inline]
    fn prev_in(&self, classes: &[LineBreakClass]) -> bool {
        self.prev.is_some_and(|prev| classes.contains(&prev))
    }

    #[inline]
    fn prev_prev_is(&self, class: LineBreakClass) -> bool {
        self.prev_prev == Some(class)
    }

    #[inline]
    fn prev_prev_in(&self, classes: &[LineBreakClass]) -> bool {
        self.prev_prev.is_some_and(|pp| classes.contains(&pp))
    }

    #[inline]
    fn curr_in(&self, classes: &[LineBreakClass]) -> bool {
        classes.contains(&self.curr)
    }

    #[inline]
    fn pair_in(&self, pairs: &[(LineBreakClass, LineBreakClass)]) -> bool {
        self.prev.is_some_and(|prev| pairs.contains(&(prev, self.curr)))
    }
}

/// One entry of the rule table
#[derive(Clone, Copy)]
pub struct Rule {
    /// UAX #14 rule label
    pub name: &'static str,
    pub applies: fn(&RuleContext) -> bool,
    pub action: BreakAction,
}

impl Rule {
    const fn new(
        name: &'static str,
        applies: fn(&RuleContext) -> bool,
        action: BreakAction,
    ) -> Self {
        Self {
            name,
            applies,
            action,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("action", &self.action)
            .finish()
    }
}

const HANGUL: [LineBreakClass; 5] = [JL, JV, JT, H2, H3];

const LB23_PAIRS: [(LineBreakClass, LineBreakClass); 5] =
    [(ID, PO), (AL, NU), (HL, NU), (NU, AL), (NU, HL)];

const LB24_PAIRS: [(LineBreakClass, LineBreakClass); 5] =
    [(PR, ID), (PR, AL), (PR, HL), (PO, AL), (PO, HL)];

const LB25_PAIRS: [(LineBreakClass, LineBreakClass); 14] = [
    (CL, PO),
    (CP, PO),
    (CL, PR),
    (CP, PR),
    (NU, PO),
    (NU, PR),
    (PO, OP),
    (PO, NU),
    (PR, OP),
    (PR, NU),
    (HY, NU),
    (IS, NU),
    (NU, NU),
    (SY, NU),
];

// LB2: never break at the start of text
fn lb2(c: &RuleContext) -> bool {
    c.at_start
}

// LB4: always break after hard line breaks
fn lb4(c: &RuleContext) -> bool {
    c.prev_is(BK)
}

// LB5: CR × LF
fn lb5_crlf(c: &RuleContext) -> bool {
    c.prev_is(CR) && c.curr == LF
}

// LB5: break after CR, LF and NL
fn lb5(c: &RuleContext) -> bool {
    c.prev_in(&[CR, LF, NL])
}

// LB6: × ( BK | CR | LF | NL )
fn lb6(c: &RuleContext) -> bool {
    c.curr.is_hard_break()
}

// LB7: × SP, × ZW
fn lb7(c: &RuleContext) -> bool {
    c.curr_in(&[SP, ZW])
}

// LB8: ZW SP* ÷
fn lb8(c: &RuleContext) -> bool {
    (c.prev_prev_is(ZW) && c.prev_is(SP)) || c.prev_is(ZW)
}

// LB11: × WJ, WJ ×
fn lb11(c: &RuleContext) -> bool {
    c.curr == WJ || c.prev_is(WJ)
}

// LB12: GL ×
fn lb12(c: &RuleContext) -> bool {
    c.prev_is(GL)
}

// LB12a: [^SP BA HY] × GL
fn lb12a(c: &RuleContext) -> bool {
    !c.prev_in(&[SP, BA, HY]) && c.curr == GL
}

// LB13: × CL, × CP, × EX, × IS, × SY
fn lb13(c: &RuleContext) -> bool {
    c.curr_in(&[CL, CP, EX, IS, SY])
}

// LB14: OP SP* ×
fn lb14(c: &RuleContext) -> bool {
    (c.prev_prev_is(OP) && c.prev_is(SP)) || c.prev_is(OP)
}

// LB15: QU SP* × OP
fn lb15(c: &RuleContext) -> bool {
    c.curr == OP && ((c.prev_prev_is(QU) && c.prev_is(SP)) || c.prev_is(QU))
}

// LB16: (CL | CP) SP* × NS
fn lb16(c: &RuleContext) -> bool {
    c.curr == NS && ((c.prev_prev_in(&[CL, CP]) && c.prev_is(SP)) || c.prev_in(&[CL, CP]))
}

// LB17: B2 SP* × B2
fn lb17(c: &RuleContext) -> bool {
    c.curr == B2 && ((c.prev_prev_is(B2) && c.prev_is(SP)) || c.prev_is(B2))
}

// LB18: SP ÷
fn lb18(c: &RuleContext) -> bool {
    c.prev_is(SP)
}

// LB19: × QU, QU ×
fn lb19(c: &RuleContext) -> bool {
    c.curr == QU || c.prev_is(QU)
}

// LB20: ÷ CB, CB ÷
fn lb20(c: &RuleContext) -> bool {
    c.curr == CB || c.prev_is(CB)
}

// LB21: × BA, × HY, × NS, BB ×
fn lb21(c: &RuleContext) -> bool {
    c.curr_in(&[BA, HY, NS]) || c.prev_is(BB)
}

// LB22: (AL | HL | ID | IN | NU) × IN
fn lb22(c: &RuleContext) -> bool {
    c.curr == IN && c.prev_in(&[AL, HL, ID, IN, NU])
}

fn lb23(c: &RuleContext) -> bool {
    c.pair_in(&LB23_PAIRS)
}

fn lb24(c: &RuleContext) -> bool {
    c.pair_in(&LB24_PAIRS)
}

fn lb25(c: &RuleContext) -> bool {
    c.pair_in(&LB25_PAIRS)
}

// LB26: Korean syllable blocks
fn lb26(c: &RuleContext) -> bool {
    (c.prev_is(JL) && c.curr_in(&[JL, JV, H2, H3]))
        || (c.prev_in(&[JV, H2]) && c.curr_in(&[JV, JT]))
        || (c.prev_in(&[JT, H3]) && c.curr == JT)
}

// LB27: Korean syllable blocks behave as ID around numerics
fn lb27(c: &RuleContext) -> bool {
    (c.prev_in(&HANGUL) && c.curr_in(&[IN, PO])) || (c.prev_is(PR) && c.curr.is_hangul())
}

// LB28: (AL | HL) × (AL | HL)
fn lb28(c: &RuleContext) -> bool {
    c.prev_in(&[AL, HL]) && c.curr_in(&[AL, HL])
}

// LB29: IS × (AL | HL)
fn lb29(c: &RuleContext) -> bool {
    c.prev_is(IS) && c.curr_in(&[AL, HL])
}

// LB30: (AL | HL | NU) × OP, CP × (AL | HL | NU)
fn lb30(c: &RuleContext) -> bool {
    (c.prev_in(&[AL, HL, NU]) && c.curr == OP) || (c.prev_is(CP) && c.curr_in(&[AL, HL, NU]))
}

// LB30a: RI × RI
fn lb30a(c: &RuleContext) -> bool {
    c.prev_is(RI) && c.curr == RI
}

// LB31: ALL ÷ ALL
fn lb31(_: &RuleContext) -> bool {
    true
}

/// The rule table in priority order
pub static RULES: [Rule; 29] = [
    Rule::new("LB2", lb2, BreakAction::Prohibited),
    Rule::new("LB4", lb4, BreakAction::Mandatory),
    Rule::new("LB5", lb5_crlf, BreakAction::Prohibited),
    Rule::new("LB5", lb5, BreakAction::Mandatory),
    Rule::new("LB6", lb6, BreakAction::Prohibited),
    Rule::new("LB7", lb7, BreakAction::Prohibited),
    Rule::new("LB8", lb8, BreakAction::Allowed),
    Rule::new("LB11", lb11, BreakAction::Prohibited),
    Rule::new("LB12", lb12, BreakAction::Prohibited),
    Rule::new("LB12a", lb12a, BreakAction::Prohibited),
    Rule::new("LB13", lb13, BreakAction::Prohibited),
    Rule::new("LB14", lb14, BreakAction::Prohibited),
    Rule::new("LB15", lb15, BreakAction::Prohibited),
    Rule::new("LB16", lb16, BreakAction::Prohibited),
    Rule::new("LB17", lb17, BreakAction::Prohibited),
    Rule::new("LB18", lb18, BreakAction::Allowed),
    Rule::new("LB19", lb19, BreakAction::Prohibited),
    Rule::new("LB20", lb20, BreakAction::Allowed),
    Rule::new("LB21", lb21, BreakAction::Prohibited),
    Rule::new("LB22", lb22, BreakAction::Prohibited),
    Rule::new("LB23", lb23, BreakAction::Prohibited),
    Rule::new("LB24", lb24, BreakAction::Prohibited),
    Rule::new("LB25", lb25, BreakAction::Prohibited),
    Rule::new("LB26", lb26, BreakAction::Prohibited),
    Rule::new("LB27", lb27, BreakAction::Prohibited),
    Rule::new("LB28", lb28, BreakAction::Prohibited),
    Rule::new("LB29", lb29, BreakAction::Prohibited),
    Rule::new("LB30", lb30, BreakAction::Prohibited),
    Rule::new("LB30a", lb30a, BreakAction::Prohibited),
];

/// LB31: break everywhere else
pub static DEFAULT_RULE: Rule = Rule::new("LB31", lb31, BreakAction::Allowed);

/// First rule in the table that decides this boundary
pub fn matching_rule(context: &RuleContext) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(context))
        .unwrap_or(&DEFAULT_RULE)
}

/// Decide a single boundary
#[inline]
pub fn apply_rules(context: &RuleContext) -> BreakAction {
    matching_rule(context).action
}

/// Stateful walker over boundary tokens keeping the two-class window
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    state: BreakContextState,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the boundary before a token and slide the window forward
    pub fn step(&mut self, position: usize, class: LineBreakClass) -> BreakAction {
        let context = RuleContext::new(position == 0, &self.state, class);
        let rule = matching_rule(&context);
        log::trace!(
            "boundary {} {:?} {:?} {}: {} -> {:?}",
            position,
            context.prev_prev,
            context.prev,
            class,
            rule.name,
            rule.action
        );
        self.state.advance(class);
        rule.action
    }
}

/// Decide every token; `classes[i]` is the normalized class of `tokens[i]`
pub fn evaluate(tokens: &[BoundaryToken], classes: &[LineBreakClass]) -> Vec<BreakAction> {
    debug_assert_eq!(tokens.len(), classes.len());
    let mut engine = RuleEngine::new();
    tokens
        .iter()
        .zip(classes)
        .map(|(token, &class)| engine.step(token.position, class))
        .collect()
}

/// Spread token decisions over the code points each token covers
///
/// Only the first code point of a span can carry a break.
pub fn expand(tokens: &[BoundaryToken], actions: &[BreakAction]) -> Vec<bool> {
    let total = tokens.iter().map(|t| t.span_length).sum();
    let mut breakables = Vec::with_capacity(total);
    for (token, action) in tokens.iter().zip(actions) {
        breakables.push(action.is_break());
        breakables.extend(std::iter::repeat(false).take(token.span_length.saturating_sub(1)));
    }
    breakables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(
        prev_prev: Option<LineBreakClass>,
        prev: Option<LineBreakClass>,
        curr: LineBreakClass,
    ) -> RuleContext {
        RuleContext {
            at_start: false,
            curr,
            prev,
            prev_prev,
        }
    }

    fn rule_for(
        prev_prev: Option<LineBreakClass>,
        prev: LineBreakClass,
        curr: LineBreakClass,
    ) -> &'static str {
        matching_rule(&ctx(prev_prev, Some(prev), curr)).name
    }

    fn tokens_for(classes: &[LineBreakClass]) -> Vec<BoundaryToken> {
        classes
            .iter()
            .enumerate()
            .map(|(position, &raw_class)| BoundaryToken {
                position,
                raw_class,
                span_length: 1,
            })
            .collect()
    }

    #[test]
    fn test_start_of_text_is_never_breakable() {
        let start = RuleContext {
            at_start: true,
            curr: AL,
            prev: None,
            prev_prev: None,
        };
        assert_eq!(apply_rules(&start), BreakAction::Prohibited);
        assert_eq!(matching_rule(&start).name, "LB2");
    }

    #[test]
    fn test_mandatory_breaks() {
        assert_eq!(apply_rules(&ctx(None, Some(BK), AL)), BreakAction::Mandatory);
        assert_eq!(apply_rules(&ctx(None, Some(BK), SP)), BreakAction::Mandatory);
        assert_eq!(apply_rules(&ctx(None, Some(LF), AL)), BreakAction::Mandatory);
        assert_eq!(apply_rules(&ctx(None, Some(NL), CL)), BreakAction::Mandatory);
        assert_eq!(apply_rules(&ctx(None, Some(CR), AL)), BreakAction::Mandatory);
        assert_eq!(apply_rules(&ctx(None, Some(CR), LF)), BreakAction::Prohibited);
    }

    #[test]
    fn test_no_break_before_hard_breaks_and_spaces() {
        assert_eq!(rule_for(None, AL, BK), "LB6");
        assert_eq!(rule_for(None, AL, LF), "LB6");
        assert_eq!(rule_for(None, AL, SP), "LB7");
        assert_eq!(rule_for(None, AL, ZW), "LB7");
    }

    #[test]
    fn test_zero_width_space() {
        assert_eq!(rule_for(None, ZW, AL), "LB8");
        assert_eq!(rule_for(Some(ZW), SP, AL), "LB8");
        assert_eq!(apply_rules(&ctx(Some(ZW), Some(SP), CL)), BreakAction::Allowed);
    }

    #[test]
    fn test_glue_and_word_joiner() {
        assert_eq!(rule_for(None, AL, WJ), "LB11");
        assert_eq!(rule_for(None, WJ, ID), "LB11");
        assert_eq!(rule_for(None, GL, ID), "LB12");
        assert_eq!(rule_for(None, AL, GL), "LB12a");
        assert_eq!(apply_rules(&ctx(None, Some(BA), GL)), BreakAction::Allowed);
        assert_eq!(apply_rules(&ctx(None, Some(HY), GL)), BreakAction::Allowed);
    }

    #[test]
    fn test_punctuation_attachment() {
        assert_eq!(rule_for(None, AL, CL), "LB13");
        assert_eq!(rule_for(None, ID, EX), "LB13");
        assert_eq!(rule_for(None, OP, AL), "LB14");
        assert_eq!(rule_for(Some(OP), SP, ID), "LB14");
        assert_eq!(rule_for(None, QU, OP), "LB15");
        assert_eq!(rule_for(Some(QU), SP, OP), "LB15");
        assert_eq!(rule_for(None, CP, NS), "LB16");
        assert_eq!(rule_for(Some(CL), SP, NS), "LB16");
        assert_eq!(rule_for(None, B2, B2), "LB17");
        assert_eq!(rule_for(Some(B2), SP, B2), "LB17");
    }

    #[test]
    fn test_break_after_space() {
        assert_eq!(rule_for(Some(AL), SP, AL), "LB18");
        assert_eq!(apply_rules(&ctx(Some(AL), Some(SP), ID)), BreakAction::Allowed);
    }

    #[test]
    fn test_quotes_contingent_and_break_classes() {
        assert_eq!(rule_for(None, AL, QU), "LB19");
        assert_eq!(rule_for(None, QU, ID), "LB19");
        assert_eq!(rule_for(None, AL, CB), "LB20");
        assert_eq!(apply_rules(&ctx(None, Some(CB), AL)), BreakAction::Allowed);
        assert_eq!(rule_for(None, ID, BA), "LB21");
        assert_eq!(rule_for(None, ID, NS), "LB21");
        assert_eq!(rule_for(None, BB, ID), "LB21");
        assert_eq!(rule_for(None, NU, IN), "LB22");
    }

    #[test]
    fn test_numeric_pairs() {
        assert_eq!(rule_for(None, AL, NU), "LB23");
        assert_eq!(rule_for(None, ID, PO), "LB23");
        assert_eq!(rule_for(None, PR, ID), "LB24");
        assert_eq!(rule_for(None, PO, HL), "LB24");
        for (prev, curr) in LB25_PAIRS {
            assert_eq!(rule_for(None, prev, curr), "LB25", "{prev} {curr}");
        }
    }

    #[test]
    fn test_hangul_rules() {
        assert_eq!(rule_for(None, JL, H2), "LB26");
        assert_eq!(rule_for(None, H2, JT), "LB26");
        assert_eq!(rule_for(None, H3, JT), "LB26");
        assert_eq!(rule_for(None, H3, PO), "LB27");
        assert_eq!(rule_for(None, PR, JL), "LB27");
        assert_eq!(apply_rules(&ctx(None, Some(H3), JL)), BreakAction::Allowed);
    }

    #[test]
    fn test_alphabetic_rules() {
        assert_eq!(rule_for(None, AL, HL), "LB28");
        assert_eq!(rule_for(None, IS, AL), "LB29");
        assert_eq!(rule_for(None, NU, OP), "LB30");
        assert_eq!(rule_for(None, CP, AL), "LB30");
        assert_eq!(rule_for(None, RI, RI), "LB30a");
    }

    #[test]
    fn test_default_rule() {
        assert_eq!(rule_for(None, ID, ID), "LB31");
        assert_eq!(rule_for(None, AL, ID), "LB31");
        assert_eq!(apply_rules(&ctx(None, Some(ID), AL)), BreakAction::Allowed);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(rule_for(None, OP, CL), "LB13");
        assert_eq!(rule_for(None, BK, BK), "LB4");
        assert_eq!(rule_for(Some(ZW), SP, SP), "LB7");
    }

    #[test]
    fn test_evaluate_tracks_window() {
        let classes = [AL, SP, OP, SP, AL];
        let actions = evaluate(&tokens_for(&classes), &classes);
        assert_eq!(
            actions,
            vec![
                BreakAction::Prohibited,
                BreakAction::Prohibited,
                BreakAction::Allowed,
                BreakAction::Prohibited,
                BreakAction::Prohibited,
            ]
        );
    }

    #[test]
    fn test_expand_masks_folded_marks() {
        let tokens = vec![
            BoundaryToken {
                position: 0,
                raw_class: AL,
                span_length: 3,
            },
            BoundaryToken {
                position: 3,
                raw_class: ID,
                span_length: 2,
            },
        ];
        let breakables = expand(&tokens, &[BreakAction::Prohibited, BreakAction::Allowed]);
        assert_eq!(breakables, vec![false, false, false, true, false]);
    }
}
