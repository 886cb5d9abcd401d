//! Integration tests for the associations (v4), pipelines and owners
//! clients.

mod common;

use common::MockApi;
use hubspot_client::{
    AssociationCategory, AssociationSpec, CreateDefinition, ListAssociationsQuery, OwnerListQuery,
    OwnerReadQuery, PipelineInput, PipelinePatch, PipelineStageInput, PipelineStagePatch,
    UpdateDefinition,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

// ---------------------------------------------------------------------------
// Associations
// ---------------------------------------------------------------------------

#[test]
fn v4_list_and_create_associations() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v4/objects/deals/10/associations/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "toObjectId": 2001,
                    "associationTypes": [
                        {"category": "HUBSPOT_DEFINED", "typeId": 341, "label": null},
                        {"category": "USER_DEFINED", "typeId": 7, "label": "Reseller"}
                    ]
                }],
                "paging": {"next": {"after": "MjAwMQ=="}}
            }))),
    );
    api.mount(
        Mock::given(method("PUT"))
            .and(path("/crm/v4/objects/deals/10/associations/companies/2001"))
            .and(body_json(json!([
                {"associationCategory": "USER_DEFINED", "associationTypeId": 7}
            ])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "fromObjectTypeId": "0-3",
                "fromObjectId": 10,
                "toObjectTypeId": "0-2",
                "toObjectId": 2001,
                "labels": ["Reseller"]
            }))),
    );

    let client = api.client();
    let listed = client
        .associations()
        .list("deals", "10", "companies", &ListAssociationsQuery::default())
        .unwrap();
    assert_eq!(listed.results[0].to_object_id, 2001);
    assert_eq!(listed.results[0].association_types.len(), 2);
    assert_eq!(
        listed.results[0].association_types[1].category,
        AssociationCategory::UserDefined
    );
    assert_eq!(listed.next_after(), Some("MjAwMQ=="));

    let created = client
        .associations()
        .create(
            "deals",
            "10",
            "companies",
            "2001",
            &[AssociationSpec {
                association_category: AssociationCategory::UserDefined,
                association_type_id: 7,
            }],
        )
        .unwrap();
    assert_eq!(created.from_object_id, 10);
    assert_eq!(created.labels, vec!["Reseller".to_string()]);
}

#[test]
fn v4_delete_association() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("DELETE"))
            .and(path("/crm/v4/objects/contacts/1/associations/companies/2"))
            .respond_with(ResponseTemplate::new(204)),
    );

    api.client()
        .associations()
        .delete("contacts", "1", "companies", "2")
        .unwrap();
}

#[test]
fn association_label_definitions() {
    let api = MockApi::start();
    let labels = json!({"results": [
        {"category": "HUBSPOT_DEFINED", "typeId": 1, "label": null},
        {"category": "USER_DEFINED", "typeId": 36, "label": "Billing contact"}
    ]});
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v4/associations/contacts/companies/labels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(labels.clone())),
    );
    api.mount(
        Mock::given(method("POST"))
            .and(path("/crm/v4/associations/contacts/companies/labels"))
            .and(body_json(json!({"label": "Billing contact", "name": "billing_contact"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(labels)),
    );
    api.mount(
        Mock::given(method("PUT"))
            .and(path("/crm/v4/associations/contacts/companies/labels"))
            .and(body_json(json!({"label": "Accounts payable", "associationTypeId": 36})))
            .respond_with(ResponseTemplate::new(204)),
    );
    api.mount(
        Mock::given(method("DELETE"))
            .and(path("/crm/v4/associations/contacts/companies/labels/36"))
            .respond_with(ResponseTemplate::new(204)),
    );

    let client = api.client();
    let assoc = client.associations();

    let defs = assoc.read_definitions("contacts", "companies").unwrap();
    assert_eq!(defs.results.len(), 2);
    assert_eq!(defs.results[1].label.as_deref(), Some("Billing contact"));

    let created = assoc
        .create_definition(
            "contacts",
            "companies",
            &CreateDefinition {
                label: "Billing contact".into(),
                name: "billing_contact".into(),
            },
        )
        .unwrap();
    assert_eq!(created.results[1].type_id, 36);

    assoc
        .update_definition(
            "contacts",
            "companies",
            &UpdateDefinition {
                label: "Accounts payable".into(),
                association_type_id: 36,
            },
        )
        .unwrap();
    assoc.delete_definition("contacts", "companies", 36).unwrap();

    let methods: Vec<String> = api
        .requests()
        .iter()
        .map(|r| r.method.as_str().to_string())
        .collect();
    assert_eq!(methods, ["GET", "POST", "PUT", "DELETE"]);
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

fn pipeline_json() -> serde_json::Value {
    json!({
        "id": "default",
        "label": "Sales Pipeline",
        "displayOrder": 0,
        "archived": false,
        "createdAt": "2023-03-01T10:00:00Z",
        "updatedAt": "2023-03-01T10:00:00Z",
        "stages": [
            {"id": "appointmentscheduled", "label": "Appointment Scheduled", "displayOrder": 0,
             "metadata": {"isClosed": "false", "probability": "0.2"}, "archived": false},
            {"id": "closedwon", "label": "Closed Won", "displayOrder": 1,
             "metadata": {"isClosed": "true", "probability": "1.0"}, "archived": false}
        ]
    })
}

#[test]
fn pipelines_crud() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/deals"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"results": [pipeline_json()]})),
            ),
    );
    api.mount(
        Mock::given(method("POST"))
            .and(path("/crm/v3/pipelines/deals"))
            .and(body_json(json!({
                "label": "Sales Pipeline",
                "displayOrder": 0,
                "stages": [{"label": "Appointment Scheduled", "displayOrder": 0, "metadata": {"probability": "0.2"}}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(pipeline_json())),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/deals/default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pipeline_json())),
    );
    api.mount(
        Mock::given(method("PATCH"))
            .and(path("/crm/v3/pipelines/deals/default"))
            .and(body_json(json!({"label": "Renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(pipeline_json())),
    );
    api.mount(
        Mock::given(method("PUT"))
            .and(path("/crm/v3/pipelines/deals/default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pipeline_json())),
    );
    api.mount(
        Mock::given(method("DELETE"))
            .and(path("/crm/v3/pipelines/deals/default"))
            .respond_with(ResponseTemplate::new(204)),
    );

    let client = api.client();
    let pipelines = client.pipelines();

    let all = pipelines.list("deals").unwrap();
    assert_eq!(all.results[0].stages.len(), 2);
    assert_eq!(
        all.results[0].stages[1].metadata.as_ref().unwrap()["probability"],
        "1.0"
    );

    let input = PipelineInput {
        label: "Sales Pipeline".into(),
        display_order: 0,
        stages: vec![PipelineStageInput {
            label: "Appointment Scheduled".into(),
            display_order: 0,
            metadata: Some(json!({"probability": "0.2"})),
        }],
    };
    let created = pipelines.create("deals", &input).unwrap();
    assert_eq!(created.id, "default");

    let read = pipelines.read("deals", "default").unwrap();
    assert_eq!(read.label, "Sales Pipeline");

    pipelines
        .update(
            "deals",
            "default",
            &PipelinePatch {
                label: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .unwrap();
    pipelines.replace("deals", "default", &input).unwrap();
    pipelines.delete("deals", "default").unwrap();

    assert_eq!(api.requests().len(), 6);
}

#[test]
fn pipeline_stages_and_audit() {
    let api = MockApi::start();
    let stage = json!({
        "id": "1", "label": "New", "displayOrder": 0,
        "metadata": {"ticketState": "OPEN"}, "archived": false
    });
    let audit = json!({"results": [{
        "portalId": 62515,
        "identifier": "0",
        "action": "UPDATE",
        "timestamp": "2023-04-01T12:00:00Z",
        "message": "Stage renamed",
        "rawObject": {"label": "New"},
        "fromUserId": 99
    }]});

    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/tickets/0/stages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [stage.clone()]}))),
    );
    api.mount(
        Mock::given(method("POST"))
            .and(path("/crm/v3/pipelines/tickets/0/stages"))
            .respond_with(ResponseTemplate::new(201).set_body_json(stage.clone())),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/tickets/0/stages/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stage.clone())),
    );
    api.mount(
        Mock::given(method("PATCH"))
            .and(path("/crm/v3/pipelines/tickets/0/stages/1"))
            .and(body_json(json!({"displayOrder": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(stage.clone())),
    );
    api.mount(
        Mock::given(method("PUT"))
            .and(path("/crm/v3/pipelines/tickets/0/stages/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stage)),
    );
    api.mount(
        Mock::given(method("DELETE"))
            .and(path("/crm/v3/pipelines/tickets/0/stages/1"))
            .respond_with(ResponseTemplate::new(204)),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/tickets/0/stages/1/audit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(audit.clone())),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/pipelines/tickets/0/audit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(audit)),
    );

    let client = api.client();
    let pipelines = client.pipelines();
    let input = PipelineStageInput {
        label: "New".into(),
        display_order: 0,
        metadata: Some(json!({"ticketState": "OPEN"})),
    };

    assert_eq!(pipelines.list_stages("tickets", "0").unwrap().results.len(), 1);
    assert_eq!(pipelines.create_stage("tickets", "0", &input).unwrap().id, "1");
    assert_eq!(pipelines.read_stage("tickets", "0", "1").unwrap().label, "New");
    pipelines
        .update_stage(
            "tickets",
            "0",
            "1",
            &PipelineStagePatch {
                display_order: Some(3),
                ..Default::default()
            },
        )
        .unwrap();
    pipelines.replace_stage("tickets", "0", "1", &input).unwrap();
    pipelines.delete_stage("tickets", "0", "1").unwrap();

    let stage_audit = pipelines.audit_stage("tickets", "0", "1").unwrap();
    assert_eq!(stage_audit.results[0].action, "UPDATE");
    assert_eq!(stage_audit.results[0].from_user_id, Some(99));

    let pipeline_audit = pipelines.audit("tickets", "0").unwrap();
    assert_eq!(pipeline_audit.results[0].portal_id, 62515);
}

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

#[test]
fn owners_list_and_read() {
    let api = MockApi::start();
    let owner = json!({
        "id": "41",
        "email": "rep@example.com",
        "firstName": "Sam",
        "lastName": "Rep",
        "userId": 9001,
        "createdAt": "2022-01-01T00:00:00Z",
        "updatedAt": "2022-06-01T00:00:00Z",
        "archived": false,
        "teams": [{"id": "7", "name": "EMEA", "primary": true}]
    });
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/owners"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [owner.clone()]}))),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path("/crm/v3/owners/9001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(owner)),
    );

    let client = api.client();
    let owners = client
        .owners()
        .list(&OwnerListQuery {
            email: Some("rep@example.com".into()),
            limit: Some(1),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(owners.results[0].teams[0].name, "EMEA");

    let owner = client
        .owners()
        .read(
            "9001",
            &OwnerReadQuery {
                id_property: Some("userId".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(owner.user_id, Some(9001));
    assert_eq!(owner.first_name.as_deref(), Some("Sam"));

    let requests = api.requests();
    assert_eq!(
        requests[0].url.query(),
        Some("email=rep%40example.com&limit=1")
    );
    assert_eq!(requests[1].url.query(), Some("idProperty=userId"));
}
