//! Closed vocabularies for the free-text course fields
//!
//! Each text field is scanned once for the terms its vocabulary recognizes.
//! Matching is case-insensitive substring containment, so a single text may
//! mention several terms ("No major issues" mentions both `no` and `major`).
//! A text that mentions none of them is unrecognized and satisfies no check.

use std::fmt;
use std::marker::PhantomData;

/// A closed set of recognized terms for one text field.
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    /// Recognized terms paired with the lowercase substring that signals them.
    const TERMS: &'static [(Self, &'static str)];
}

/// The set of vocabulary terms mentioned by a piece of text.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mentions<V: Vocabulary> {
    mask: u16,
    _vocabulary: PhantomData<V>,
}

impl<V: Vocabulary> Mentions<V> {
    /// Mentions nothing (the value of an unset field).
    pub fn none() -> Self {
        Self {
            mask: 0,
            _vocabulary: PhantomData,
        }
    }

    /// Scan text for every recognized term.
    pub fn scan(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let mask = V::TERMS
            .iter()
            .enumerate()
            .filter(|(_, (_, needle))| lowered.contains(*needle))
            .fold(0u16, |mask, (bit, _)| mask | (1 << bit));

        Self {
            mask,
            _vocabulary: PhantomData,
        }
    }

    /// Whether the text mentions `term`.
    pub fn has(&self, term: V) -> bool {
        V::TERMS
            .iter()
            .position(|(candidate, _)| *candidate == term)
            .map_or(false, |bit| self.mask & (1u16 << bit) != 0)
    }

    /// Whether the text mentions at least one of `terms`.
    pub fn has_any(&self, terms: &[V]) -> bool {
        terms.iter().any(|term| self.has(*term))
    }

    /// True when no recognized term was found.
    pub fn is_unrecognized(&self) -> bool {
        self.mask == 0
    }

    /// Mentioned terms, in vocabulary order.
    pub fn terms(&self) -> impl Iterator<Item = V> + '_ {
        V::TERMS
            .iter()
            .enumerate()
            .filter(move |(bit, _)| self.mask & (1u16 << *bit) != 0)
            .map(|(_, (term, _))| *term)
    }
}

impl<V: Vocabulary> Default for Mentions<V> {
    fn default() -> Self {
        Self::none()
    }
}

impl<V: Vocabulary> fmt::Debug for Mentions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.terms()).finish()
    }
}

impl<V: Vocabulary> From<&str> for Mentions<V> {
    fn from(text: &str) -> Self {
        Self::scan(text)
    }
}

/// Delivery mode of the course (`online_onsite`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Online,
    Onsite,
}

impl Vocabulary for DeliveryMode {
    const TERMS: &'static [(Self, &'static str)] =
        &[(Self::Online, "online"), (Self::Onsite, "onsite")];
}

/// Severity of software dependency problems (`dependency_issues`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyIssues {
    No,
    Minor,
    Major,
}

impl Vocabulary for DependencyIssues {
    const TERMS: &'static [(Self, &'static str)] = &[
        (Self::No, "no"),
        (Self::Minor, "minor"),
        (Self::Major, "major"),
    ];
}

/// Expected environment setup effort (`setup_time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupTime {
    Slow,
    Moderate,
}

impl Vocabulary for SetupTime {
    const TERMS: &'static [(Self, &'static str)] =
        &[(Self::Slow, "slow"), (Self::Moderate, "moderate")];
}

/// How much of the training data participants can reach (`training_data_access`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataAccess {
    All,
    Some,
}

impl Vocabulary for DataAccess {
    const TERMS: &'static [(Self, &'static str)] = &[(Self::All, "all"), (Self::Some, "some")];
}

/// Pipeline fairness (`pipeline_fairness`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineFairness {
    All,
    Custom,
}

impl Vocabulary for PipelineFairness {
    const TERMS: &'static [(Self, &'static str)] =
        &[(Self::All, "all"), (Self::Custom, "custom")];
}

/// Coverage of a FAIR property (`data_fairness`, `data_citability`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    All,
}

impl Vocabulary for Coverage {
    const TERMS: &'static [(Self, &'static str)] = &[(Self::All, "all")];
}

/// Participant learning needs (`learning_needs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningNeeds {
    Diverse,
}

impl Vocabulary for LearningNeeds {
    const TERMS: &'static [(Self, &'static str)] = &[(Self::Diverse, "diverse")];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_is_case_insensitive() {
        let mode = Mentions::<DeliveryMode>::scan("Fully ONLINE");
        assert!(mode.has(DeliveryMode::Online));
        assert!(!mode.has(DeliveryMode::Onsite));
    }

    #[test]
    fn test_scan_finds_every_term() {
        let issues = Mentions::<DependencyIssues>::scan("No major issues");
        assert!(issues.has(DependencyIssues::No));
        assert!(issues.has(DependencyIssues::Major));
        assert!(!issues.has(DependencyIssues::Minor));
        assert_eq!(
            issues.terms().collect::<Vec<_>>(),
            vec![DependencyIssues::No, DependencyIssues::Major]
        );
    }

    #[test]
    fn test_substring_not_token() {
        // "unknown" contains "no"
        let issues = Mentions::<DependencyIssues>::scan("unknown");
        assert!(issues.has(DependencyIssues::No));

        let access = Mentions::<DataAccess>::scan("smallest subset");
        assert!(access.has(DataAccess::All));
    }

    #[test]
    fn test_empty_text_is_unrecognized() {
        let needs = Mentions::<LearningNeeds>::scan("");
        assert!(needs.is_unrecognized());
        assert_eq!(needs, Mentions::none());
    }

    #[test]
    fn test_has_any() {
        let pace = Mentions::<SetupTime>::scan("moderately quick");
        assert!(pace.has_any(&[SetupTime::Slow, SetupTime::Moderate]));
        assert!(!pace.has_any(&[SetupTime::Slow]));
    }

    #[test]
    fn test_debug_lists_terms() {
        let mode = Mentions::<DeliveryMode>::scan("online and onsite");
        assert_eq!(format!("{:?}", mode), "{Online, Onsite}");
    }
}
