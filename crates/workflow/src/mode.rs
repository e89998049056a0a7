//! Protocol-generation resolution for persisted records.
//!
//! Records created across several product generations carry different
//! markers. Classification is priority-ordered and must stay stable:
//! misreading an old record as the newer family selects incompatible
//! behavior for it.

use serde::{Deserialize, Serialize};

/// Marker identifying the current workspace family.
pub const WORKSPACE_FAMILY: &str = "evidence_validation_workspace";

/// Transitional marker from the repo-validation era; records tagged with it
/// belong to the workspace family.
pub const LEGACY_REPO_V2: &str = "repo_validation_v2";

/// Marker for first-generation workflows.
pub const WORKFLOW_V1: &str = "workflow_v1";

/// Label shown when a record has no custom name.
pub const DEFAULT_WORKFLOW_NAME: &str = "Validation workflow";

/// The protocol generation a persisted record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowMode {
    WorkspaceV2,
    LegacyV1,
}

/// Metadata snapshot of a persisted record, as loaded from storage.
///
/// All fields are optional: records from before either marker existed carry
/// none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMeta {
    #[serde(default)]
    pub workflow_family: Option<String>,
    #[serde(default)]
    pub protocol_mode: Option<String>,
    #[serde(default)]
    pub workflow_name: Option<String>,
}

impl WorkflowMeta {
    /// Classifies this record's protocol generation.
    ///
    /// Pure and total; first match wins:
    /// 1. `workflow_family` names the workspace family → [`WorkflowMode::WorkspaceV2`];
    /// 2. `protocol_mode` carries the old repo-validation marker → still
    ///    [`WorkflowMode::WorkspaceV2`] (transitional alias);
    /// 3. `protocol_mode` carries the v1 marker → [`WorkflowMode::LegacyV1`];
    /// 4. no recognized marker → [`WorkflowMode::LegacyV1`], because
    ///    historical records predate both markers.
    #[must_use]
    pub fn mode(&self) -> WorkflowMode {
        if normalized(&self.workflow_family).as_deref() == Some(WORKSPACE_FAMILY) {
            return WorkflowMode::WorkspaceV2;
        }
        match normalized(&self.protocol_mode).as_deref() {
            Some(LEGACY_REPO_V2) => WorkflowMode::WorkspaceV2,
            // `workflow_v1`, unrecognized, and absent markers are all v1:
            // records predating both markers must not land in the new family.
            _ => WorkflowMode::LegacyV1,
        }
    }

    /// Whether this record belongs to the workspace family.
    #[must_use]
    pub fn is_workspace(&self) -> bool {
        self.mode() == WorkflowMode::WorkspaceV2
    }

    /// The record's display name: the trimmed custom name when present,
    /// else the default label.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.workflow_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| DEFAULT_WORKFLOW_NAME.to_string(), str::to_string)
    }
}

fn normalized(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(family: Option<&str>, mode: Option<&str>) -> WorkflowMeta {
        WorkflowMeta {
            workflow_family: family.map(str::to_string),
            protocol_mode: mode.map(str::to_string),
            workflow_name: None,
        }
    }

    #[test]
    fn test_workspace_family_marker() {
        let m = meta(Some("evidence_validation_workspace"), None);
        assert_eq!(m.mode(), WorkflowMode::WorkspaceV2);
        assert!(m.is_workspace());
    }

    #[test]
    fn test_repo_validation_alias_maps_to_workspace() {
        let m = meta(None, Some("repo_validation_v2"));
        assert_eq!(m.mode(), WorkflowMode::WorkspaceV2);
    }

    #[test]
    fn test_v1_marker() {
        let m = meta(None, Some("workflow_v1"));
        assert_eq!(m.mode(), WorkflowMode::LegacyV1);
        assert!(!m.is_workspace());
    }

    #[test]
    fn test_empty_meta_defaults_to_legacy() {
        assert_eq!(WorkflowMeta::default().mode(), WorkflowMode::LegacyV1);
    }

    #[test]
    fn test_unrecognized_markers_default_to_legacy() {
        let m = meta(Some("something_else"), Some("protocol_v9"));
        assert_eq!(m.mode(), WorkflowMode::LegacyV1);
    }

    #[test]
    fn test_family_marker_wins_over_v1_protocol_mode() {
        let m = meta(Some("evidence_validation_workspace"), Some("workflow_v1"));
        assert_eq!(m.mode(), WorkflowMode::WorkspaceV2);
    }

    #[test]
    fn test_markers_normalized_before_comparison() {
        let m = meta(Some("  Evidence_Validation_Workspace \n"), None);
        assert_eq!(m.mode(), WorkflowMode::WorkspaceV2);
        let m = meta(None, Some(" REPO_VALIDATION_V2 "));
        assert_eq!(m.mode(), WorkflowMode::WorkspaceV2);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let m = meta(None, Some("repo_validation_v2"));
        assert_eq!(m.mode(), m.mode());
    }

    #[test]
    fn test_display_name_custom_trimmed() {
        let m = WorkflowMeta {
            workflow_name: Some("  Q3 audit  ".into()),
            ..WorkflowMeta::default()
        };
        assert_eq!(m.display_name(), "Q3 audit");
    }

    #[test]
    fn test_display_name_default_when_blank_or_absent() {
        let m = WorkflowMeta {
            workflow_name: Some("   ".into()),
            ..WorkflowMeta::default()
        };
        assert_eq!(m.display_name(), DEFAULT_WORKFLOW_NAME);
        assert_eq!(WorkflowMeta::default().display_name(), DEFAULT_WORKFLOW_NAME);
    }

    #[test]
    fn test_deserializes_from_partial_record_json() {
        let m: WorkflowMeta =
            serde_json::from_str(r#"{"protocol_mode": "workflow_v1", "other": 1}"#).unwrap();
        assert_eq!(m.mode(), WorkflowMode::LegacyV1);
        assert!(m.workflow_family.is_none());
    }
}
