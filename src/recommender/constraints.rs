//! Course constraints record
//!
//! The fully defaulted input consumed by the recommender. Free-text fields
//! are already scanned into [`Mentions`] sets; there is no optional field
//! left to resolve at decision time.

use super::vocabulary::{
    Coverage, DataAccess, DeliveryMode, DependencyIssues, LearningNeeds, Mentions,
    PipelineFairness, SetupTime,
};

/// Logistical and technical constraints of one training course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseConstraints {
    // Scanned text fields
    pub online_onsite: Mentions<DeliveryMode>,
    pub dependency_issues: Mentions<DependencyIssues>,
    pub setup_time: Mentions<SetupTime>,
    pub training_data_access: Mentions<DataAccess>,
    pub pipeline_fairness: Mentions<PipelineFairness>,
    pub data_fairness: Mentions<Coverage>,
    pub data_citability: Mentions<Coverage>,
    pub learning_needs: Mentions<LearningNeeds>,

    // Decision flags
    pub is_computer_mandatory: bool,
    pub is_discussion_based: bool,
    pub computer_use_note_taking_only: bool,
    pub software_via_web_gui: bool,
    pub webservers_accessible: bool,
    pub need_software_installed: bool,
    pub is_software_cross_platform: bool,
    pub need_windows_os_or_license: bool,
    pub software_free_and_compatible: bool,
    pub participant_os_access: bool,
    pub min_computer_specs_met: bool,
    pub can_share_vm_at_scale: bool,
    pub internet_bandwidth_ok: bool,
    pub must_execute_on_cloud: bool,
    pub has_cloud_budget: bool,
    pub can_run_on_colab_or_cloud: bool,
    pub has_hpc_access: bool,

    /// Accepted but not consulted by any rule
    pub context: CourseContext,
}

impl Default for CourseConstraints {
    fn default() -> Self {
        Self {
            online_onsite: Mentions::none(),
            dependency_issues: Mentions::none(),
            setup_time: Mentions::none(),
            training_data_access: Mentions::none(),
            pipeline_fairness: Mentions::none(),
            data_fairness: Mentions::none(),
            data_citability: Mentions::none(),
            learning_needs: Mentions::none(),
            is_computer_mandatory: true,
            is_discussion_based: false,
            computer_use_note_taking_only: false,
            software_via_web_gui: false,
            webservers_accessible: true,
            need_software_installed: false,
            is_software_cross_platform: true,
            need_windows_os_or_license: false,
            software_free_and_compatible: true,
            participant_os_access: true,
            min_computer_specs_met: true,
            can_share_vm_at_scale: true,
            internet_bandwidth_ok: true,
            must_execute_on_cloud: false,
            has_cloud_budget: false,
            can_run_on_colab_or_cloud: true,
            has_hpc_access: false,
            context: CourseContext::default(),
        }
    }
}

/// Course details carried through a request without affecting the decision.
///
/// Kept so that callers may send the complete course description and so that
/// future rules have the data available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseContext {
    pub location: String,
    pub software_tools: String,
    pub required_os: String,
    pub computer_owner: String,
    pub institution_allows_software: bool,
    pub data_share_method: String,
    pub can_use_globus: bool,
    pub can_build_linux_vm: bool,
    pub can_install_on_ubuntu: bool,
    pub share_vm_method: String,
    pub course_goals: String,
    pub participant_demographics: String,
}

impl Default for CourseContext {
    fn default() -> Self {
        Self {
            location: String::new(),
            software_tools: String::new(),
            required_os: String::new(),
            computer_owner: "participants".to_string(),
            institution_allows_software: true,
            data_share_method: "internet".to_string(),
            can_use_globus: true,
            can_build_linux_vm: true,
            can_install_on_ubuntu: true,
            share_vm_method: String::new(),
            course_goals: String::new(),
            participant_demographics: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let c = CourseConstraints::default();
        assert!(c.is_computer_mandatory);
        assert!(c.webservers_accessible);
        assert!(c.is_software_cross_platform);
        assert!(c.software_free_and_compatible);
        assert!(c.participant_os_access);
        assert!(c.min_computer_specs_met);
        assert!(c.can_share_vm_at_scale);
        assert!(c.internet_bandwidth_ok);
        assert!(c.can_run_on_colab_or_cloud);

        assert!(!c.is_discussion_based);
        assert!(!c.computer_use_note_taking_only);
        assert!(!c.software_via_web_gui);
        assert!(!c.need_software_installed);
        assert!(!c.need_windows_os_or_license);
        assert!(!c.must_execute_on_cloud);
        assert!(!c.has_cloud_budget);
        assert!(!c.has_hpc_access);
    }

    #[test]
    fn test_default_text_fields_mention_nothing() {
        let c = CourseConstraints::default();
        assert!(c.online_onsite.is_unrecognized());
        assert!(c.dependency_issues.is_unrecognized());
        assert!(c.learning_needs.is_unrecognized());
    }

    #[test]
    fn test_context_defaults() {
        let ctx = CourseContext::default();
        assert_eq!(ctx.computer_owner, "participants");
        assert_eq!(ctx.data_share_method, "internet");
        assert!(ctx.institution_allows_software);
        assert!(ctx.location.is_empty());
    }
}
