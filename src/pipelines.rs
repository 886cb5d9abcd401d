//! Deal and ticket pipelines, their stages, and audit trails.

use serde::{Deserialize, Serialize};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::ListResponse;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default)]
    pub stages: Vec<PipelineStage>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// A step of a pipeline. `metadata` is object-type specific, e.g.
/// `{"probability": "0.2"}` for deals or `{"ticketState": "OPEN"}` for
/// tickets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Full pipeline definition, used by create and replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineInput {
    pub label: String,
    pub display_order: i64,
    pub stages: Vec<PipelineStageInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStageInput {
    pub label: String,
    pub display_order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelinePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineAudit {
    pub portal_id: i64,
    pub identifier: String,
    pub action: String,
    pub timestamp: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub raw_object: Option<serde_json::Value>,
    #[serde(default)]
    pub from_user_id: Option<i64>,
}

pub struct PipelinesClient<'a> {
    pub(crate) base: &'a BaseClient,
}

impl PipelinesClient<'_> {
    pub fn list(&self, object_type: &str) -> Result<ListResponse<Pipeline>> {
        self.base.get(&format!("/crm/v3/pipelines/{object_type}"), &())
    }

    pub fn create(&self, object_type: &str, input: &PipelineInput) -> Result<Pipeline> {
        self.base
            .post(&format!("/crm/v3/pipelines/{object_type}"), input)
    }

    pub fn read(&self, object_type: &str, pipeline_id: &str) -> Result<Pipeline> {
        self.base.get(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}"),
            &(),
        )
    }

    pub fn update(
        &self,
        object_type: &str,
        pipeline_id: &str,
        patch: &PipelinePatch,
    ) -> Result<Pipeline> {
        self.base.patch(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}"),
            patch,
        )
    }

    /// Overwrite a pipeline, stages included.
    pub fn replace(
        &self,
        object_type: &str,
        pipeline_id: &str,
        input: &PipelineInput,
    ) -> Result<Pipeline> {
        self.base.put(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}"),
            Some(input),
        )
    }

    pub fn delete(&self, object_type: &str, pipeline_id: &str) -> Result<()> {
        self.base
            .delete(&format!("/crm/v3/pipelines/{object_type}/{pipeline_id}"))
    }

    pub fn audit(&self, object_type: &str, pipeline_id: &str) -> Result<ListResponse<PipelineAudit>> {
        self.base.get(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/audit"),
            &(),
        )
    }

    // ---- stages -----------------------------------------------------------

    pub fn list_stages(
        &self,
        object_type: &str,
        pipeline_id: &str,
    ) -> Result<ListResponse<PipelineStage>> {
        self.base.get(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages"),
            &(),
        )
    }

    pub fn create_stage(
        &self,
        object_type: &str,
        pipeline_id: &str,
        input: &PipelineStageInput,
    ) -> Result<PipelineStage> {
        self.base.post(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages"),
            input,
        )
    }

    pub fn read_stage(
        &self,
        object_type: &str,
        pipeline_id: &str,
        stage_id: &str,
    ) -> Result<PipelineStage> {
        self.base.get(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}"),
            &(),
        )
    }

    pub fn update_stage(
        &self,
        object_type: &str,
        pipeline_id: &str,
        stage_id: &str,
        patch: &PipelineStagePatch,
    ) -> Result<PipelineStage> {
        self.base.patch(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}"),
            patch,
        )
    }

    pub fn replace_stage(
        &self,
        object_type: &str,
        pipeline_id: &str,
        stage_id: &str,
        input: &PipelineStageInput,
    ) -> Result<PipelineStage> {
        self.base.put(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}"),
            Some(input),
        )
    }

    pub fn delete_stage(&self, object_type: &str, pipeline_id: &str, stage_id: &str) -> Result<()> {
        self.base.delete(&format!(
            "/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}"
        ))
    }

    pub fn audit_stage(
        &self,
        object_type: &str,
        pipeline_id: &str,
        stage_id: &str,
    ) -> Result<ListResponse<PipelineAudit>> {
        self.base.get(
            &format!("/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}/audit"),
            &(),
        )
    }
}
