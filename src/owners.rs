use serde::{Deserialize, Serialize};

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::ListResponse;

/// A HubSpot user who can own records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OwnerListQuery {
    pub email: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
    pub archived: Option<bool>,
}

/// `id_property` is `id` (default) or `userId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReadQuery {
    pub id_property: Option<String>,
    pub archived: Option<bool>,
}

pub struct OwnersClient<'a> {
    pub(crate) base: &'a BaseClient,
}

impl OwnersClient<'_> {
    pub fn list(&self, query: &OwnerListQuery) -> Result<ListResponse<Owner>> {
        self.base.get("/crm/v3/owners", query)
    }

    pub fn read(&self, owner_id: &str, query: &OwnerReadQuery) -> Result<Owner> {
        self.base.get(&format!("/crm/v3/owners/{owner_id}"), query)
    }
}
