//! Per-resource descriptors for the generic admin panel.
//!
//! Each resource is data plus a pure request planner; the panel component
//! itself is shared between the customers and addresses consoles.

use serde::de::DeserializeOwned;

use crate::components::admin::{Action, FieldValues, RequestPlan};

pub mod address;
pub mod customer;

pub use address::AddressResource;
pub use customer::CustomerResource;

/// A named form field. `key` doubles as the record's JSON field name so
/// responses map into the form name-to-name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// Everything the panel needs to know about one REST resource.
pub trait FormResource: 'static {
    type Record: DeserializeOwned + Clone + PartialEq + 'static;

    /// Display name, used in the deletion flash.
    const ENTITY: &'static str;
    /// Form fields in display order.
    const FIELDS: &'static [FieldSpec];
    /// Results table headers.
    const COLUMNS: &'static [&'static str];
    /// Supported actions with their button labels.
    const ACTIONS: &'static [(Action, &'static str)];

    /// Maps a trigger to the single request it issues. `Clear` is local and
    /// yields no request.
    fn plan(action: Action, form: &FieldValues) -> Option<RequestPlan>;

    /// Record values in `FIELDS` order, for populating the form.
    fn record_fields(record: &Self::Record) -> Vec<String>;

    /// Record values in `COLUMNS` order, for one table row.
    fn record_cells(record: &Self::Record) -> Vec<String>;
}
