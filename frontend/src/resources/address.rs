//! The `/customers/{customer_id}/addresses` resource.

use common::model::address::Address;
use common::requests::AddressPayload;

use crate::components::admin::{Action, FieldValues, RequestPlan};

use super::{FieldSpec, FormResource};

pub struct AddressResource;

impl AddressResource {
    fn payload(form: &FieldValues) -> AddressPayload {
        AddressPayload {
            customer_id: form.get("customer_id").to_string(),
            name: form.get("name").to_string(),
            street: form.get("street").to_string(),
            city: form.get("city").to_string(),
            state: form.get("state").to_string(),
            postalcode: form.get("postalcode").to_string(),
        }
    }
}

impl FormResource for AddressResource {
    type Record = Address;

    const ENTITY: &'static str = "Address";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "id", label: "Address ID" },
        FieldSpec { key: "customer_id", label: "Customer ID" },
        FieldSpec { key: "name", label: "Name" },
        FieldSpec { key: "street", label: "Street" },
        FieldSpec { key: "city", label: "City" },
        FieldSpec { key: "state", label: "State" },
        FieldSpec { key: "postalcode", label: "Postal Code" },
    ];

    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Customer ID",
        "Name",
        "Street",
        "City",
        "State",
        "Postal Code",
    ];

    const ACTIONS: &'static [(Action, &'static str)] = &[
        (Action::Retrieve, "Retrieve"),
        (Action::Search, "List"),
        (Action::Clear, "Clear"),
        (Action::Create, "Create"),
        (Action::Update, "Update"),
        (Action::Delete, "Delete"),
    ];

    fn plan(action: Action, form: &FieldValues) -> Option<RequestPlan> {
        let customer_id = form.get("customer_id");
        let address_id = form.get("id");
        match action {
            Action::Create => Some(RequestPlan::post(
                format!("/customers/{customer_id}/addresses"),
                &Self::payload(form),
            )),
            Action::Update => Some(RequestPlan::put(
                format!("/customers/{customer_id}/addresses/{address_id}"),
                &Self::payload(form),
            )),
            Action::Retrieve => Some(RequestPlan::get(format!(
                "/customers/{customer_id}/addresses/{address_id}"
            ))),
            Action::Delete => Some(RequestPlan::delete(format!(
                "/customers/{customer_id}/addresses/{address_id}"
            ))),
            Action::Search => Some(RequestPlan::get(format!(
                "/customers/{customer_id}/addresses"
            ))),
            // Account actions and Clear do not apply to addresses.
            Action::Suspend | Action::Restore | Action::Clear => None,
        }
    }

    fn record_fields(record: &Address) -> Vec<String> {
        vec![
            record.id.to_string(),
            record.customer_id.to_string(),
            record.name.clone().unwrap_or_default(),
            record.street.clone().unwrap_or_default(),
            record.city.clone().unwrap_or_default(),
            record.state.clone().unwrap_or_default(),
            record.postalcode.clone().unwrap_or_default(),
        ]
    }

    fn record_cells(record: &Address) -> Vec<String> {
        Self::record_fields(record)
    }
}
