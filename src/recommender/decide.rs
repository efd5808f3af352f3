//! Platform recommender
//!
//! Pure, total functions over a fully defaulted [`CourseConstraints`].
//! Same inputs always produce the same decision.

use serde::Serialize;

use super::constraints::CourseConstraints;
use super::label::PlatformLabel;
use super::rules::{RuleId, FALLBACK_LABEL, RULES};

/// Recommend a platform for the course.
///
/// The first rule whose guard is satisfied decides; later rules are never
/// evaluated.
pub fn recommend(constraints: &CourseConstraints) -> PlatformLabel {
    RULES
        .iter()
        .find(|rule| rule.matches(constraints))
        .map_or(FALLBACK_LABEL, |rule| rule.label)
}

/// Every rule the course satisfies, in table order.
pub fn matching_rules(constraints: &CourseConstraints) -> Vec<RuleId> {
    RULES
        .iter()
        .filter(|rule| rule.matches(constraints))
        .map(|rule| rule.id)
        .collect()
}

/// Outcome of a recommendation with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Recommended platform
    pub suggested_platform: PlatformLabel,
    /// Rule that decided
    pub rule: RuleId,
    /// 1-based position of the deciding rule (table length + 1 for fallback)
    pub position: usize,
    /// Later rules that also matched but were pre-empted
    pub shadowed: Vec<RuleId>,
}

impl Decision {
    /// True when no rule matched
    pub fn is_fallback(&self) -> bool {
        self.rule == RuleId::Fallback
    }
}

/// Recommend a platform and report which rule decided it.
pub fn explain(constraints: &CourseConstraints) -> Decision {
    let mut matched = RULES
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.matches(constraints));

    match matched.next() {
        Some((index, rule)) => Decision {
            suggested_platform: rule.label,
            rule: rule.id,
            position: index + 1,
            shadowed: matched.map(|(_, rule)| rule.id).collect(),
        },
        None => Decision {
            suggested_platform: FALLBACK_LABEL,
            rule: RuleId::Fallback,
            position: RULES.len() + 1,
            shadowed: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::vocabulary::Mentions;

    #[test]
    fn test_default_falls_back_to_vm() {
        let decision = explain(&CourseConstraints::default());
        assert!(decision.is_fallback());
        assert_eq!(decision.suggested_platform, PlatformLabel::VirtualMachine);
        assert_eq!(decision.position, 15);
    }

    #[test]
    fn test_explain_reports_shadowed_rules() {
        let c = CourseConstraints {
            is_discussion_based: true,
            computer_use_note_taking_only: true,
            has_hpc_access: true,
            ..Default::default()
        };
        let decision = explain(&c);
        assert_eq!(decision.rule, RuleId::NoComputerNeeded);
        assert_eq!(decision.position, 1);
        assert_eq!(
            decision.shadowed,
            vec![RuleId::NoteTakingOnly, RuleId::HpcAvailable]
        );
    }

    #[test]
    fn test_matching_rules_in_table_order() {
        let c = CourseConstraints {
            dependency_issues: Mentions::scan("major"),
            learning_needs: Mentions::scan("diverse"),
            min_computer_specs_met: false,
            ..Default::default()
        };
        assert_eq!(
            matching_rules(&c),
            vec![
                RuleId::IsolatedDependencies,
                RuleId::DiverseLearners,
                RuleId::BelowMinimumSpecs
            ]
        );
        assert_eq!(recommend(&c), PlatformLabel::Docker);
    }

    #[test]
    fn test_recommend_agrees_with_explain() {
        let c = CourseConstraints {
            has_cloud_budget: true,
            ..Default::default()
        };
        assert_eq!(recommend(&c), explain(&c).suggested_platform);
        assert_eq!(recommend(&c), PlatformLabel::Cloud);
    }
}
