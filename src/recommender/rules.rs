//! Decision table
//!
//! Rules are evaluated in table order and the first satisfied rule decides
//! the platform. A course matching no rule falls back to a virtual machine.
//!
//! Priority (strict order):
//! 1. No computer needed
//! 2. Note taking only
//! 3. Web GUI reachable
//! 4. Online course with light dependencies
//! 5. Slow onsite setup
//! 6. Major dependency conflicts or custom pipelines
//! 7. Fully FAIR pipeline and data
//! 8. Diverse learning needs
//! 9. Software incompatible with participant machines
//! 10. Machines below minimum specs
//! 11. VM sharing or bandwidth limits
//! 12. Cloud execution required
//! 13. Funded cloud
//! 14. HPC available

use std::fmt;

use serde::{Serialize, Serializer};

use super::constraints::CourseConstraints;
use super::label::PlatformLabel;
use super::vocabulary::{
    Coverage, DataAccess, DeliveryMode, DependencyIssues, LearningNeeds, PipelineFairness,
    SetupTime,
};

/// Stable rule identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    NoComputerNeeded,
    NoteTakingOnly,
    WebGuiReachable,
    OnlineLightDependencies,
    SlowOnsiteSetup,
    IsolatedDependencies,
    FairPipelineAndData,
    DiverseLearners,
    IncompatibleSoftware,
    BelowMinimumSpecs,
    LimitedSharingOrBandwidth,
    CloudExecutionRequired,
    FundedCloud,
    HpcAvailable,
    /// No rule matched
    Fallback,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::NoComputerNeeded => "no_computer_needed",
            RuleId::NoteTakingOnly => "note_taking_only",
            RuleId::WebGuiReachable => "web_gui_reachable",
            RuleId::OnlineLightDependencies => "online_light_dependencies",
            RuleId::SlowOnsiteSetup => "slow_onsite_setup",
            RuleId::IsolatedDependencies => "isolated_dependencies",
            RuleId::FairPipelineAndData => "fair_pipeline_and_data",
            RuleId::DiverseLearners => "diverse_learners",
            RuleId::IncompatibleSoftware => "incompatible_software",
            RuleId::BelowMinimumSpecs => "below_minimum_specs",
            RuleId::LimitedSharingOrBandwidth => "limited_sharing_or_bandwidth",
            RuleId::CloudExecutionRequired => "cloud_execution_required",
            RuleId::FundedCloud => "funded_cloud",
            RuleId::HpcAvailable => "hpc_available",
            RuleId::Fallback => "fallback",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One guard of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub description: &'static str,
    pub label: PlatformLabel,
    predicate: fn(&CourseConstraints) -> bool,
}

impl Rule {
    /// Whether the course satisfies this rule's guard
    pub fn matches(&self, c: &CourseConstraints) -> bool {
        (self.predicate)(c)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

/// Label returned when no rule matches.
pub const FALLBACK_LABEL: PlatformLabel = PlatformLabel::VirtualMachine;

/// The decision table, in priority order.
pub static RULES: [Rule; 14] = [
    Rule {
        id: RuleId::NoComputerNeeded,
        description: "Computer is optional or the course is discussion based",
        label: PlatformLabel::NoComputerRequired,
        predicate: |c| !c.is_computer_mandatory || c.is_discussion_based,
    },
    Rule {
        id: RuleId::NoteTakingOnly,
        description: "Computer is used for note taking only",
        label: PlatformLabel::DefaultOs,
        predicate: |c| c.computer_use_note_taking_only,
    },
    Rule {
        id: RuleId::WebGuiReachable,
        description: "Software has a web GUI and web servers are reachable",
        label: PlatformLabel::WebGui,
        predicate: |c| c.software_via_web_gui && c.webservers_accessible,
    },
    Rule {
        id: RuleId::OnlineLightDependencies,
        description: "Online course with no or minor dependency issues, reachable data and nothing to install",
        label: PlatformLabel::GoogleColab,
        predicate: |c| {
            c.online_onsite.has(DeliveryMode::Online)
                && c
                    .dependency_issues
                    .has_any(&[DependencyIssues::No, DependencyIssues::Minor])
                && c
                    .training_data_access
                    .has_any(&[DataAccess::All, DataAccess::Some])
                && !c.need_software_installed
        },
    },
    Rule {
        id: RuleId::SlowOnsiteSetup,
        description: "Onsite course with slow or moderate setup time",
        label: PlatformLabel::VirtualMachine,
        predicate: |c| {
            c.setup_time.has_any(&[SetupTime::Slow, SetupTime::Moderate])
                && c.online_onsite.has(DeliveryMode::Onsite)
        },
    },
    Rule {
        id: RuleId::IsolatedDependencies,
        description: "Major dependency issues or a custom pipeline",
        label: PlatformLabel::Docker,
        predicate: |c| {
            c.dependency_issues.has(DependencyIssues::Major)
                || c.pipeline_fairness.has(PipelineFairness::Custom)
        },
    },
    Rule {
        id: RuleId::FairPipelineAndData,
        description: "Pipeline, data and citations are all FAIR",
        label: PlatformLabel::CloudAwsGcp,
        predicate: |c| {
            c.pipeline_fairness.has(PipelineFairness::All)
                && c.data_fairness.has(Coverage::All)
                && c.data_citability.has(Coverage::All)
        },
    },
    Rule {
        id: RuleId::DiverseLearners,
        description: "Participants have diverse learning needs",
        label: PlatformLabel::GoogleColab,
        predicate: |c| c.learning_needs.has(LearningNeeds::Diverse),
    },
    Rule {
        id: RuleId::IncompatibleSoftware,
        description: "Software must be installed but does not fit participant machines",
        label: PlatformLabel::VirtualMachine,
        predicate: |c| {
            c.need_software_installed
                && (!c.is_software_cross_platform
                    || !c.software_free_and_compatible
                    || c.need_windows_os_or_license
                    || !c.participant_os_access)
        },
    },
    Rule {
        id: RuleId::BelowMinimumSpecs,
        description: "Participant computers do not meet minimum specs",
        label: PlatformLabel::VirtualMachine,
        predicate: |c| !c.min_computer_specs_met,
    },
    Rule {
        id: RuleId::LimitedSharingOrBandwidth,
        description: "VM cannot be shared at scale or bandwidth is inadequate",
        label: PlatformLabel::GoogleColab,
        predicate: |c| !c.can_share_vm_at_scale || !c.internet_bandwidth_ok,
    },
    Rule {
        id: RuleId::CloudExecutionRequired,
        description: "Execution must happen in the cloud",
        label: PlatformLabel::CloudColabAws,
        predicate: |c| c.must_execute_on_cloud,
    },
    Rule {
        id: RuleId::FundedCloud,
        description: "Cloud budget exists and the workload can run on Colab or cloud",
        label: PlatformLabel::Cloud,
        predicate: |c| c.has_cloud_budget && c.can_run_on_colab_or_cloud,
    },
    Rule {
        id: RuleId::HpcAvailable,
        description: "HPC access is available",
        label: PlatformLabel::Hpc,
        predicate: |c| c.has_hpc_access,
    },
];
