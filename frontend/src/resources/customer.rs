//! The `/customers` resource.

use common::model::customer::Customer;
use common::requests::CustomerPayload;

use crate::components::admin::{Action, FieldValues, RequestPlan};

use super::{FieldSpec, FormResource};

pub struct CustomerResource;

impl CustomerResource {
    /// Builds the write payload from the form. Suspend and restore pass a
    /// fixed `account_status`; the other writes take it from the form.
    fn payload(form: &FieldValues, account_status: &str) -> CustomerPayload {
        CustomerPayload {
            name: form.get("name").to_string(),
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone_number: form.get("phone_number").to_string(),
            addresses: String::new(),
            account_status: account_status.to_string(),
        }
    }
}

/// Search suffix: an id (when present) selects a single record by path;
/// remaining non-empty filters join as a regular `?a=b&c=d` query string.
/// Values pass through verbatim; the server parses them as-is.
fn search_suffix(form: &FieldValues) -> String {
    let mut suffix = String::new();
    let id = form.get("id");
    if !id.is_empty() {
        suffix.push('/');
        suffix.push_str(id);
    }
    let filters = ["name", "first_name", "last_name", "email"]
        .into_iter()
        .map(|key| (key, form.get(key)))
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    if !filters.is_empty() {
        suffix.push('?');
        suffix.push_str(&filters);
    }
    suffix
}

impl FormResource for CustomerResource {
    type Record = Customer;

    const ENTITY: &'static str = "Customer";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "id", label: "ID" },
        FieldSpec { key: "name", label: "Username" },
        FieldSpec { key: "first_name", label: "First Name" },
        FieldSpec { key: "last_name", label: "Last Name" },
        FieldSpec { key: "email", label: "Email" },
        FieldSpec { key: "phone_number", label: "Phone Number" },
        FieldSpec { key: "account_status", label: "Account Status" },
    ];

    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Username",
        "First Name",
        "Last Name",
        "Email",
        "Phone Number",
    ];

    const ACTIONS: &'static [(Action, &'static str)] = &[
        (Action::Retrieve, "Retrieve"),
        (Action::Search, "Search"),
        (Action::Clear, "Clear"),
        (Action::Create, "Create"),
        (Action::Update, "Update"),
        (Action::Delete, "Delete"),
        (Action::Suspend, "Suspend"),
        (Action::Restore, "Restore"),
    ];

    fn plan(action: Action, form: &FieldValues) -> Option<RequestPlan> {
        let id = form.get("id");
        match action {
            Action::Create => Some(RequestPlan::post(
                "/customers",
                &Self::payload(form, form.get("account_status")),
            )),
            Action::Update => Some(RequestPlan::put(
                format!("/customers/{id}"),
                &Self::payload(form, form.get("account_status")),
            )),
            Action::Retrieve => Some(RequestPlan::get(format!("/customers/{id}"))),
            Action::Delete => Some(RequestPlan::delete(format!("/customers/{id}"))),
            Action::Search => Some(RequestPlan::get(format!(
                "/customers{}",
                search_suffix(form)
            ))),
            Action::Suspend => Some(RequestPlan::put(
                format!("/customers/{id}/suspend"),
                &Self::payload(form, "suspended"),
            )),
            Action::Restore => Some(RequestPlan::put(
                format!("/customers/{id}/restore"),
                &Self::payload(form, "active"),
            )),
            Action::Clear => None,
        }
    }

    fn record_fields(record: &Customer) -> Vec<String> {
        vec![
            record.id.to_string(),
            record.name.clone().unwrap_or_default(),
            record.first_name.clone().unwrap_or_default(),
            record.last_name.clone().unwrap_or_default(),
            record.email.clone().unwrap_or_default(),
            record.phone_number.clone().unwrap_or_default(),
            record.account_status.clone().unwrap_or_default(),
        ]
    }

    // The table omits account status.
    fn record_cells(record: &Customer) -> Vec<String> {
        vec![
            record.id.to_string(),
            record.name.clone().unwrap_or_default(),
            record.first_name.clone().unwrap_or_default(),
            record.last_name.clone().unwrap_or_default(),
            record.email.clone().unwrap_or_default(),
            record.phone_number.clone().unwrap_or_default(),
        ]
    }
}
