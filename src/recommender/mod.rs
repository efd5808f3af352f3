//! Platform recommender for training courses
//!
//! Maps a course's logistical and technical constraints to one computing
//! platform from a fixed catalog.
//!
//! # Design Principles
//!
//! - Pure: no I/O, no shared state, no side effects
//! - Total: every fully defaulted record yields exactly one label
//! - Ordered: rules are evaluated in table order, first match wins
//! - Deterministic: same record, same label
//!
//! # Usage
//!
//! ```
//! use platform_advisor::recommender::{recommend, CourseConstraints, PlatformLabel};
//!
//! let course = CourseConstraints {
//!     is_computer_mandatory: false,
//!     ..Default::default()
//! };
//! assert_eq!(recommend(&course), PlatformLabel::NoComputerRequired);
//! ```

mod constraints;
mod label;
mod decide;
mod rules;
pub mod vocabulary;

pub use constraints::{CourseConstraints, CourseContext};
pub use label::PlatformLabel;
pub use decide::{explain, matching_rules, recommend, Decision};
pub use rules::{Rule, RuleId, FALLBACK_LABEL, RULES};
pub use vocabulary::Mentions;
