//! Platform labels
//!
//! The fixed catalog of platforms the recommender can return. The string
//! forms are part of the public response contract and must not change.

use std::fmt;

use serde::{Serialize, Serializer};

/// A recommended computing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformLabel {
    /// No computer is needed for the course
    NoComputerRequired,
    /// Participants use their machines as-is
    DefaultOs,
    /// Software is reached through a browser
    WebGui,
    /// Google Colab notebooks
    GoogleColab,
    /// Prebuilt virtual machine image
    VirtualMachine,
    /// Container image
    Docker,
    /// Cloud platform for fully FAIR pipelines
    CloudAwsGcp,
    /// Cloud platform because execution must happen remotely
    CloudColabAws,
    /// Funded cloud platform
    Cloud,
    /// Institutional HPC cluster
    Hpc,
}

impl PlatformLabel {
    /// Number of labels in the catalog.
    pub const COUNT: usize = 10;

    /// Every label, in catalog order.
    pub const ALL: [PlatformLabel; Self::COUNT] = [
        PlatformLabel::NoComputerRequired,
        PlatformLabel::DefaultOs,
        PlatformLabel::WebGui,
        PlatformLabel::GoogleColab,
        PlatformLabel::VirtualMachine,
        PlatformLabel::Docker,
        PlatformLabel::CloudAwsGcp,
        PlatformLabel::CloudColabAws,
        PlatformLabel::Cloud,
        PlatformLabel::Hpc,
    ];

    /// Returns the response string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformLabel::NoComputerRequired => "No computer platform required",
            PlatformLabel::DefaultOs => "Default OS Usage",
            PlatformLabel::WebGui => "Web-based GUI Platform",
            PlatformLabel::GoogleColab => "Google Colab",
            PlatformLabel::VirtualMachine => "Virtual Machine",
            PlatformLabel::Docker => "Docker",
            PlatformLabel::CloudAwsGcp => "Cloud Platform (e.g., AWS, GCP)",
            PlatformLabel::CloudColabAws => "Cloud Platform (e.g., Google Colab, AWS)",
            PlatformLabel::Cloud => "Cloud Platform",
            PlatformLabel::Hpc => "High Performance Computing (HPC)",
        }
    }
}

impl fmt::Display for PlatformLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PlatformLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_distinct() {
        let strings: HashSet<_> = PlatformLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(strings.len(), PlatformLabel::ALL.len());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlatformLabel::Hpc).unwrap();
        assert_eq!(json, "\"High Performance Computing (HPC)\"");
    }
}
