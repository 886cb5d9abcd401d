//! HubSpot CRM API client library for Rust.
//!
//! A blocking, typed client for the [HubSpot CRM API](https://developers.hubspot.com/docs/api/crm).
//! Every object type (contacts, companies, deals, tickets, engagements,
//! products, line items, quotes, feedback submissions) is served by one
//! generic [`ObjectsClient`], parameterized by its property shape.
//! Associations, pipelines and owners have their own clients.
//!
//! Each method performs exactly one HTTP round trip. There is no retry,
//! rate limiting or pagination loop; a 429 surfaces as
//! [`HubSpotError::Api`] for the caller to handle.
//!
//! # Quick Start
//!
//! ```no_run
//! use hubspot_client::{ContactProperties, CreateOrUpdate, HubSpotClient};
//!
//! let client = HubSpotClient::new("pat-na1-...").unwrap();
//!
//! let contact = client
//!     .contacts()
//!     .create(&CreateOrUpdate::new(ContactProperties {
//!         email: Some("a@b.com".into()),
//!         ..Default::default()
//!     }))
//!     .unwrap();
//! println!("created contact {}", contact.id);
//! ```

pub mod associations;
pub mod client;
pub mod error;
pub mod models;
pub mod objects;
pub mod owners;
pub mod pipelines;
pub mod properties;
pub mod query;

// Re-export the main public types at the crate root for convenience.
pub use associations::{
    Association, AssociationCategory, AssociationCreateOutput, AssociationDefinition,
    AssociationListResult, AssociationSpec, AssociationTarget, AssociationType,
    AssociationsClient, CreateDefinition, UpdateDefinition, LINE_ITEM_TO_DEAL,
};
pub use client::{ClientConfig, HubSpotClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ErrorObject, ErrorResponse, HubSpotError, Result};
pub use models::{
    AssociatedObject, BatchId, BatchInputs, BatchReadOptions, BatchResponse, BatchUpdateInput,
    CreateOrUpdate, CrmObject, Filter, FilterGroup, FilterOperator, GdprDeleteOptions,
    ListAssociationsQuery, ListQuery, ListResponse, MergeOptions, NextPage, Paging, Properties,
    PropertyHistory, ReadQuery, SearchOptions, SearchResponse, Sort, SortDirection,
};
pub use objects::{ObjectsClient, ReadOnlyObjectsClient};
pub use owners::{Owner, OwnerListQuery, OwnerReadQuery, OwnersClient, Team};
pub use pipelines::{
    Pipeline, PipelineAudit, PipelineInput, PipelinePatch, PipelineStage, PipelineStageInput,
    PipelineStagePatch, PipelinesClient,
};
pub use properties::{
    CallProperties, CompanyProperties, ContactProperties, DealProperties, EmailProperties,
    FeedbackSubmissionProperties, LineItemProperties, MeetingProperties, NoteProperties,
    ProductProperties, QuoteProperties, TaskProperties, TicketProperties,
};
