//! Property shapes of the built-in CRM objects.
//!
//! Each field is named after the HubSpot internal property name. Every value
//! travels as a string (numbers and dates included) and is omitted from
//! request bodies when `None`. Properties without a dedicated field, such as
//! custom properties, land in `other`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

macro_rules! property_shape {
    ($(#[$meta:meta])* $name:ident { $($field:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
            #[serde(flatten)]
            pub other: BTreeMap<String, Option<String>>,
        }
    };
}

property_shape!(ContactProperties {
    email,
    firstname,
    lastname,
    phone,
    mobilephone,
    company,
    website,
    jobtitle,
    lifecyclestage,
    hs_lead_status,
    address,
    city,
    state,
    zip,
    country,
    hubspot_owner_id,
    createdate,
    lastmodifieddate,
    hs_object_id,
});

property_shape!(CompanyProperties {
    name,
    domain,
    industry,
    phone,
    address,
    city,
    state,
    zip,
    country,
    numberofemployees,
    annualrevenue,
    description,
    lifecyclestage,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
    hs_object_id,
});

property_shape!(DealProperties {
    dealname,
    amount,
    dealstage,
    pipeline,
    closedate,
    dealtype,
    description,
    hs_priority,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
    hs_object_id,
});

property_shape!(TicketProperties {
    subject,
    content,
    hs_pipeline,
    hs_pipeline_stage,
    hs_ticket_priority,
    hs_ticket_category,
    source_type,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
    hs_object_id,
});

property_shape!(EmailProperties {
    hs_timestamp,
    hs_email_direction,
    hs_email_sender_email,
    hs_email_sender_firstname,
    hs_email_sender_lastname,
    hs_email_status,
    hs_email_subject,
    hs_email_text,
    hs_email_html,
    hs_email_to_email,
    hs_email_to_firstname,
    hs_email_to_lastname,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
});

property_shape!(CallProperties {
    hs_timestamp,
    hs_call_body,
    hs_call_direction,
    hs_call_disposition,
    hs_call_duration,
    hs_call_from_number,
    hs_call_recording_url,
    hs_call_status,
    hs_call_title,
    hs_call_to_number,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
});

property_shape!(MeetingProperties {
    hs_timestamp,
    hs_meeting_title,
    hs_meeting_body,
    hs_internal_meeting_notes,
    hs_meeting_external_url,
    hs_meeting_location,
    hs_meeting_start_time,
    hs_meeting_end_time,
    hs_meeting_outcome,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
});

property_shape!(NoteProperties {
    hs_timestamp,
    hs_note_body,
    hs_attachment_ids,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
});

property_shape!(TaskProperties {
    hs_timestamp,
    hs_task_subject,
    hs_task_body,
    hs_task_status,
    hs_task_priority,
    hs_task_type,
    hubspot_owner_id,
    createdate,
    hs_lastmodifieddate,
});

property_shape!(ProductProperties {
    name,
    description,
    price,
    hs_sku,
    hs_cost_of_goods_sold,
    hs_recurring_billing_period,
    recurringbillingfrequency,
    tax,
    createdate,
    hs_lastmodifieddate,
    hs_object_id,
});

property_shape!(LineItemProperties {
    name,
    description,
    quantity,
    price,
    amount,
    discount,
    hs_discount_percentage,
    hs_total_discount,
    hs_pre_discount_amount,
    tax,
    hs_product_id,
    hs_sku,
    hs_line_item_currency_code,
    hs_cost_of_goods_sold,
    hs_margin,
    hs_acv,
    hs_arr,
    hs_mrr,
    hs_tcv,
    hs_term_in_months,
    hs_recurring_billing_period,
    hs_recurring_billing_start_date,
    hs_recurring_billing_end_date,
    hs_recurring_billing_number_of_payments,
    recurringbillingfrequency,
    hs_position_on_quote,
    hs_url,
    hs_images,
    hs_external_id,
    hubspot_owner_id,
    createdate,
    hs_createdate,
    hs_lastmodifieddate,
    hs_object_id,
});

property_shape!(QuoteProperties {
    hs_title,
    hs_status,
    hs_quote_number,
    hs_quote_amount,
    hs_expiration_date,
    hs_terms,
    hs_currency,
    hubspot_owner_id,
    hs_createdate,
    hs_lastmodifieddate,
});

property_shape!(FeedbackSubmissionProperties {
    hs_content,
    hs_ingestion_id,
    hs_response_group,
    hs_submission_name,
    hs_survey_channel,
    hs_survey_id,
    hs_survey_name,
    hs_survey_type,
    hs_value,
    hs_createdate,
    hs_lastmodifieddate,
});
