//! Generic client for the `/crm/v3/objects/{type}` family of endpoints.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::BaseClient;
use crate::error::Result;
use crate::models::*;
use crate::properties::ContactProperties;

/// CRUD, batch, search, merge and association calls for one object type.
///
/// `P` is the property shape used both for request bodies and decoded
/// records.
pub struct ObjectsClient<'a, P> {
    base: &'a BaseClient,
    object_type: &'a str,
    _properties: PhantomData<fn() -> P>,
}

impl<'a, P> ObjectsClient<'a, P> {
    pub(crate) fn new(base: &'a BaseClient, object_type: &'a str) -> Self {
        Self {
            base,
            object_type,
            _properties: PhantomData,
        }
    }

    /// URL segment of this object type, e.g. `contacts`.
    pub fn object_type(&self) -> &str {
        self.object_type
    }

    fn path(&self, suffix: &str) -> String {
        format!("/crm/v3/objects/{}{suffix}", self.object_type)
    }
}

impl<P> ObjectsClient<'_, P>
where
    P: Serialize + DeserializeOwned + Default,
{
    /// List a page of records.
    pub fn list(&self, query: &ListQuery) -> Result<ListResponse<CrmObject<P>>> {
        self.base.get(&self.path(""), query)
    }

    pub fn create(&self, input: &CreateOrUpdate<P>) -> Result<CrmObject<P>> {
        self.base.post(&self.path(""), input)
    }

    /// Read one record by id, or by the unique property named in
    /// `query.id_property`.
    pub fn read(&self, id: &str, query: &ReadQuery) -> Result<CrmObject<P>> {
        self.base.get(&self.path(&format!("/{id}")), query)
    }

    /// Partial update; only the properties present in `input` change.
    pub fn update(&self, id: &str, input: &CreateOrUpdate<P>) -> Result<CrmObject<P>> {
        self.base.patch(&self.path(&format!("/{id}")), input)
    }

    /// Move a record to the recycling bin.
    pub fn archive(&self, id: &str) -> Result<()> {
        self.base.delete(&self.path(&format!("/{id}")))
    }

    pub fn batch_archive<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        let body = BatchInputs::new(
            ids.iter()
                .map(|id| BatchId {
                    id: id.as_ref().to_string(),
                })
                .collect(),
        );
        self.base.post(&self.path("/batch/archive"), &body)
    }

    pub fn batch_create(
        &self,
        inputs: &BatchInputs<CreateOrUpdate<P>>,
    ) -> Result<BatchResponse<CrmObject<P>>> {
        self.base.post(&self.path("/batch/create"), inputs)
    }

    pub fn batch_read(&self, options: &BatchReadOptions) -> Result<BatchResponse<CrmObject<P>>> {
        self.base.post(&self.path("/batch/read"), options)
    }

    pub fn batch_update(
        &self,
        inputs: &BatchInputs<BatchUpdateInput<P>>,
    ) -> Result<BatchResponse<CrmObject<P>>> {
        self.base.post(&self.path("/batch/update"), inputs)
    }

    pub fn search(&self, options: &SearchOptions) -> Result<SearchResponse<CrmObject<P>>> {
        self.base.post(&self.path("/search"), options)
    }

    /// Merge `object_id_to_merge` into `primary_object_id`.
    pub fn merge(&self, options: &MergeOptions) -> Result<CrmObject<P>> {
        self.base.post(&self.path("/merge"), options)
    }

    pub fn list_associations(
        &self,
        id: &str,
        to_object_type: &str,
        query: &ListAssociationsQuery,
    ) -> Result<ListResponse<AssociatedObject>> {
        self.base.get(
            &self.path(&format!("/{id}/associations/{to_object_type}")),
            query,
        )
    }

    pub fn associate(
        &self,
        id: &str,
        to_object_type: &str,
        to_object_id: &str,
        association_type: &str,
    ) -> Result<CrmObject<P>> {
        self.base.put::<(), _>(
            &self.path(&format!(
                "/{id}/associations/{to_object_type}/{to_object_id}/{association_type}"
            )),
            None,
        )
    }

    pub fn disassociate(
        &self,
        id: &str,
        to_object_type: &str,
        to_object_id: &str,
        association_type: &str,
    ) -> Result<()> {
        self.base.delete(&self.path(&format!(
            "/{id}/associations/{to_object_type}/{to_object_id}/{association_type}"
        )))
    }
}

impl ObjectsClient<'_, ContactProperties> {
    /// Permanently delete a contact and its data (GDPR).
    pub fn gdpr_delete(&self, options: &GdprDeleteOptions) -> Result<()> {
        self.base.post(&self.path("/gdpr-delete"), options)
    }
}

/// The read-only subset of [`ObjectsClient`], for object types the API
/// does not let integrations write.
pub struct ReadOnlyObjectsClient<'a, P> {
    inner: ObjectsClient<'a, P>,
}

impl<'a, P> ReadOnlyObjectsClient<'a, P> {
    pub(crate) fn new(base: &'a BaseClient, object_type: &'a str) -> Self {
        Self {
            inner: ObjectsClient::new(base, object_type),
        }
    }

    pub fn object_type(&self) -> &str {
        self.inner.object_type()
    }
}

impl<P> ReadOnlyObjectsClient<'_, P>
where
    P: Serialize + DeserializeOwned + Default,
{
    pub fn list(&self, query: &ListQuery) -> Result<ListResponse<CrmObject<P>>> {
        self.inner.list(query)
    }

    pub fn read(&self, id: &str, query: &ReadQuery) -> Result<CrmObject<P>> {
        self.inner.read(id, query)
    }

    pub fn batch_read(&self, options: &BatchReadOptions) -> Result<BatchResponse<CrmObject<P>>> {
        self.inner.batch_read(options)
    }

    pub fn search(&self, options: &SearchOptions) -> Result<SearchResponse<CrmObject<P>>> {
        self.inner.search(options)
    }

    pub fn list_associations(
        &self,
        id: &str,
        to_object_type: &str,
        query: &ListAssociationsQuery,
    ) -> Result<ListResponse<AssociatedObject>> {
        self.inner.list_associations(id, to_object_type, query)
    }
}
