//! Association labels and links (v4 API).

use serde::{Deserialize, Serialize};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::{ListAssociationsQuery, ListResponse};

/// Who defined an association type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociationCategory {
    #[serde(rename = "HUBSPOT_DEFINED")]
    HubSpotDefined,
    UserDefined,
    IntegratorDefined,
}

/// HubSpot-defined association type id for line item → deal.
pub const LINE_ITEM_TO_DEAL: i64 = 20;

/// A (category, type id) pair identifying one association type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationSpec {
    pub association_category: AssociationCategory,
    pub association_type_id: i64,
}

impl AssociationSpec {
    pub fn hubspot_defined(association_type_id: i64) -> Self {
        Self {
            association_category: AssociationCategory::HubSpotDefined,
            association_type_id,
        }
    }
}

/// Association attached to a record at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    pub to: AssociationTarget,
    pub types: Vec<AssociationSpec>,
}

impl Association {
    pub fn new(to_id: impl Into<String>, spec: AssociationSpec) -> Self {
        Self {
            to: AssociationTarget { id: to_id.into() },
            types: vec![spec],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationTarget {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationType {
    pub category: AssociationCategory,
    pub type_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationListResult {
    pub to_object_id: i64,
    #[serde(default)]
    pub association_types: Vec<AssociationType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationCreateOutput {
    pub from_object_type_id: String,
    pub from_object_id: i64,
    pub to_object_type_id: String,
    pub to_object_id: i64,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// An association label defined between two object types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDefinition {
    pub category: AssociationCategory,
    pub type_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDefinition {
    pub label: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDefinition {
    pub label: String,
    pub association_type_id: i64,
}

pub struct AssociationsClient<'a> {
    pub(crate) base: &'a BaseClient,
}

impl AssociationsClient<'_> {
    /// List the records of `to_type` associated with a record.
    pub fn list(
        &self,
        from_type: &str,
        from_id: &str,
        to_type: &str,
        query: &ListAssociationsQuery,
    ) -> Result<ListResponse<AssociationListResult>> {
        self.base.get(
            &format!("/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}"),
            query,
        )
    }

    /// Associate two records with one or more labels.
    pub fn create(
        &self,
        from_type: &str,
        from_id: &str,
        to_type: &str,
        to_id: &str,
        types: &[AssociationSpec],
    ) -> Result<AssociationCreateOutput> {
        self.base.put(
            &format!("/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}/{to_id}"),
            Some(types),
        )
    }

    /// Remove every association between two records.
    pub fn delete(&self, from_type: &str, from_id: &str, to_type: &str, to_id: &str) -> Result<()> {
        self.base.delete(&format!(
            "/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}/{to_id}"
        ))
    }

    /// Association types defined between two object types.
    pub fn read_definitions(
        &self,
        from_type: &str,
        to_type: &str,
    ) -> Result<ListResponse<AssociationDefinition>> {
        self.base
            .get(&format!("/crm/v4/associations/{from_type}/{to_type}/labels"), &())
    }

    pub fn create_definition(
        &self,
        from_type: &str,
        to_type: &str,
        options: &CreateDefinition,
    ) -> Result<ListResponse<AssociationDefinition>> {
        self.base.post(
            &format!("/crm/v4/associations/{from_type}/{to_type}/labels"),
            options,
        )
    }

    pub fn update_definition(
        &self,
        from_type: &str,
        to_type: &str,
        options: &UpdateDefinition,
    ) -> Result<()> {
        self.base.put(
            &format!("/crm/v4/associations/{from_type}/{to_type}/labels"),
            Some(options),
        )
    }

    pub fn delete_definition(&self, from_type: &str, to_type: &str, type_id: i64) -> Result<()> {
        self.base.delete(&format!(
            "/crm/v4/associations/{from_type}/{to_type}/labels/{type_id}"
        ))
    }
}
