//! Workflow-generation classification for persisted veriwork records.

pub mod mode;

pub use mode::{
    DEFAULT_WORKFLOW_NAME, LEGACY_REPO_V2, WORKFLOW_V1, WORKSPACE_FAMILY, WorkflowMeta,
    WorkflowMode,
};
