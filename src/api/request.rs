//! API request types
//!
//! JSON request parsing for course descriptions. `online_onsite` is the only
//! required field; every other field may be absent or `null` and then takes
//! its documented default.
//!
//! Boolean fields are lax: besides JSON booleans they accept `0`/`1` and the
//! strings `true`/`false`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n`, `1`/`0`
//! in any case. Form-driven clients send these.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::recommender::{CourseConstraints, CourseContext, Mentions};

use super::errors::ApiResult;

/// Course description as sent by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseRequest {
    pub online_onsite: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dependency_issues: Option<String>,
    #[serde(default)]
    pub setup_time: Option<String>,
    #[serde(default)]
    pub software_tools: Option<String>,
    #[serde(default)]
    pub training_data_access: Option<String>,
    #[serde(default)]
    pub pipeline_fairness: Option<String>,
    #[serde(default)]
    pub data_fairness: Option<String>,
    #[serde(default)]
    pub data_citability: Option<String>,
    #[serde(default)]
    pub course_goals: Option<String>,
    #[serde(default)]
    pub participant_demographics: Option<String>,
    #[serde(default)]
    pub learning_needs: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub need_software_installed: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_software_cross_platform: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub need_windows_os_or_license: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub min_computer_specs_met: Option<bool>,
    #[serde(default)]
    pub share_vm_method: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub can_share_vm_at_scale: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_computer_mandatory: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_discussion_based: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub software_via_web_gui: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub computer_use_note_taking_only: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub software_free_and_compatible: Option<bool>,
    #[serde(default)]
    pub required_os: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub participant_os_access: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub can_build_linux_vm: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub can_run_on_colab_or_cloud: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub must_execute_on_cloud: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub webservers_accessible: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub has_cloud_budget: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub can_install_on_ubuntu: Option<bool>,
    #[serde(default)]
    pub computer_owner: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub institution_allows_software: Option<bool>,
    #[serde(default)]
    pub data_share_method: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub internet_bandwidth_ok: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub can_use_globus: Option<bool>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub has_hpc_access: Option<bool>,
}

impl CourseRequest {
    /// Parse a request from a raw JSON body
    ///
    /// Invalid UTF-8 is a JSON syntax error.
    pub fn parse(body: impl AsRef<[u8]>) -> ApiResult<Self> {
        Ok(serde_json::from_slice(body.as_ref())?)
    }

    /// Build the fully defaulted record consumed by the recommender
    pub fn into_constraints(self) -> CourseConstraints {
        let d = CourseConstraints::default();
        let ctx = CourseContext::default();

        CourseConstraints {
            online_onsite: Mentions::scan(&self.online_onsite),
            dependency_issues: scan(self.dependency_issues.as_deref()),
            setup_time: scan(self.setup_time.as_deref()),
            training_data_access: scan(self.training_data_access.as_deref()),
            pipeline_fairness: scan(self.pipeline_fairness.as_deref()),
            data_fairness: scan(self.data_fairness.as_deref()),
            data_citability: scan(self.data_citability.as_deref()),
            learning_needs: scan(self.learning_needs.as_deref()),

            is_computer_mandatory: self.is_computer_mandatory.unwrap_or(d.is_computer_mandatory),
            is_discussion_based: self.is_discussion_based.unwrap_or(d.is_discussion_based),
            computer_use_note_taking_only: self
                .computer_use_note_taking_only
                .unwrap_or(d.computer_use_note_taking_only),
            software_via_web_gui: self.software_via_web_gui.unwrap_or(d.software_via_web_gui),
            webservers_accessible: self
                .webservers_accessible
                .unwrap_or(d.webservers_accessible),
            need_software_installed: self
                .need_software_installed
                .unwrap_or(d.need_software_installed),
            is_software_cross_platform: self
                .is_software_cross_platform
                .unwrap_or(d.is_software_cross_platform),
            need_windows_os_or_license: self
                .need_windows_os_or_license
                .unwrap_or(d.need_windows_os_or_license),
            software_free_and_compatible: self
                .software_free_and_compatible
                .unwrap_or(d.software_free_and_compatible),
            participant_os_access: self
                .participant_os_access
                .unwrap_or(d.participant_os_access),
            min_computer_specs_met: self
                .min_computer_specs_met
                .unwrap_or(d.min_computer_specs_met),
            can_share_vm_at_scale: self
                .can_share_vm_at_scale
                .unwrap_or(d.can_share_vm_at_scale),
            internet_bandwidth_ok: self
                .internet_bandwidth_ok
                .unwrap_or(d.internet_bandwidth_ok),
            must_execute_on_cloud: self
                .must_execute_on_cloud
                .unwrap_or(d.must_execute_on_cloud),
            has_cloud_budget: self.has_cloud_budget.unwrap_or(d.has_cloud_budget),
            can_run_on_colab_or_cloud: self
                .can_run_on_colab_or_cloud
                .unwrap_or(d.can_run_on_colab_or_cloud),
            has_hpc_access: self.has_hpc_access.unwrap_or(d.has_hpc_access),

            context: CourseContext {
                location: self.location.unwrap_or(ctx.location),
                software_tools: self.software_tools.unwrap_or(ctx.software_tools),
                required_os: self.required_os.unwrap_or(ctx.required_os),
                computer_owner: self.computer_owner.unwrap_or(ctx.computer_owner),
                institution_allows_software: self
                    .institution_allows_software
                    .unwrap_or(ctx.institution_allows_software),
                data_share_method: self.data_share_method.unwrap_or(ctx.data_share_method),
                can_use_globus: self.can_use_globus.unwrap_or(ctx.can_use_globus),
                can_build_linux_vm: self.can_build_linux_vm.unwrap_or(ctx.can_build_linux_vm),
                can_install_on_ubuntu: self
                    .can_install_on_ubuntu
                    .unwrap_or(ctx.can_install_on_ubuntu),
                share_vm_method: self.share_vm_method.unwrap_or(ctx.share_vm_method),
                course_goals: self.course_goals.unwrap_or(ctx.course_goals),
                participant_demographics: self
                    .participant_demographics
                    .unwrap_or(ctx.participant_demographics),
            },
        }
    }
}

fn scan<V: crate::recommender::vocabulary::Vocabulary>(text: Option<&str>) -> Mentions<V> {
    text.map(Mentions::scan).unwrap_or_default()
}

/// Deserialize an optional boolean, accepting the lax spellings
fn lax_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(LaxBoolVisitor)
}

struct LaxBoolVisitor;

impl<'de> Visitor<'de> for LaxBoolVisitor {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, 0 or 1, or one of true/false/yes/no/on/off")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v == 0.0 {
            Ok(Some(false))
        } else if v == 1.0 {
            Ok(Some(true))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(Some(true)),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}
