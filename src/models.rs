use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::associations::Association;
use crate::error::ErrorResponse;

/// Free-form property bag. HubSpot returns `null` for requested properties
/// that have no value, hence the `Option`.
pub type Properties = BTreeMap<String, Option<String>>;

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// A CRM record (contact, deal, ticket, ...) as returned by the API.
///
/// `P` is the property shape, either one of the typed structs in
/// [`crate::properties`] or the free-form [`Properties`] map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmObject<P> {
    pub id: String,
    #[serde(default)]
    pub properties: P,
    #[serde(default)]
    pub properties_with_history: Option<BTreeMap<String, Vec<PropertyHistory>>>,
    #[serde(default)]
    pub associations: Option<BTreeMap<String, ListResponse<AssociatedObject>>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub archived_at: Option<String>,
}

/// One historical value of a property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyHistory {
    pub value: Option<String>,
    pub timestamp: String,
    pub source_type: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub updated_by_user_id: Option<i64>,
}

/// Body of create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateOrUpdate<P> {
    pub properties: P,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<Association>,
}

impl<P> CreateOrUpdate<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            associations: Vec::new(),
        }
    }
}

/// A record linked to another through an association.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssociatedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub association_type: String,
}

// ---------------------------------------------------------------------------
// Pagination and envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<NextPage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NextPage {
    pub after: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Results of a list call plus the cursor for the next page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl<T> ListResponse<T> {
    /// Cursor to pass as `after` to fetch the next page, if any.
    pub fn next_after(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .map(|n| n.after.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub total: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Result of the `batch/*` endpoints. Partial failures (HTTP 207) are
/// reported in `errors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse<T> {
    pub status: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub requested_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub num_errors: Option<u32>,
    #[serde(default)]
    pub errors: Vec<ErrorResponse>,
}

// ---------------------------------------------------------------------------
// Query parameters (GET)
// ---------------------------------------------------------------------------

/// Query for `List` calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub properties: Vec<String>,
    pub properties_with_history: Vec<String>,
    pub associations: Vec<String>,
    pub archived: Option<bool>,
}

/// Query for `Read` calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadQuery {
    pub properties: Vec<String>,
    pub properties_with_history: Vec<String>,
    pub associations: Vec<String>,
    pub archived: Option<bool>,
    pub id_property: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAssociationsQuery {
    pub after: Option<String>,
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Request bodies (POST)
// ---------------------------------------------------------------------------

/// `{"inputs": [...]}` wrapper used by every batch endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchInputs<T> {
    pub inputs: Vec<T>,
}

impl<T> BatchInputs<T> {
    pub fn new(inputs: Vec<T>) -> Self {
        Self { inputs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchId {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdateInput<P> {
    pub id: String,
    pub properties: P,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReadOptions {
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties_with_history: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_property: Option<String>,
    pub inputs: Vec<BatchId>,
}

impl BatchReadOptions {
    pub fn for_ids<I, S>(ids: I, properties: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties,
            inputs: ids.into_iter().map(|id| BatchId { id: id.into() }).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Between,
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    ContainsToken,
    NotContainsToken,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: FilterOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_value: Option<String>,
}

impl Filter {
    pub fn new(property_name: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator,
            value: Some(value.into()),
            values: Vec::new(),
            high_value: None,
        }
    }
}

/// Filters within a group are ANDed, groups are ORed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub property_name: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOptions {
    pub primary_object_id: String,
    pub object_id_to_merge: String,
}

/// Body of the contacts GDPR delete call. `id_property` selects a unique
/// property (such as `email`) instead of the record id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprDeleteOptions {
    pub object_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_property: Option<String>,
}
