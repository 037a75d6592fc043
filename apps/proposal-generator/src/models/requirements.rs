use serde::{Deserialize, Serialize};

/// Project requirements captured in the discovery call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequirements {
    pub scope: String,
    pub timeline: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub technical_needs: Vec<String>,
    #[serde(default)]
    pub key_deliverables: Vec<String>,
}

impl ProjectRequirements {
    pub fn new(scope: impl Into<String>, timeline: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            timeline: timeline.into(),
            ..Self::default()
        }
    }
}
