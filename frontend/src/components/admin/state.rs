//! Panel state and the pure transitions applied to it.
//!
//! The form is an owned value, not the DOM: inputs are controlled and mirror
//! [`FieldValues`]. Request completions go through [`AdminPanel::finish`],
//! which is a plain function of (state, action, outcome) so every transition
//! is testable without a browser.

use crate::resources::{FieldSpec, FormResource};

use super::messages::{Action, Completed};

/// Ordered form field values, aligned with the resource's field list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues {
    entries: Vec<(&'static str, String)>,
}

impl FieldValues {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            entries: fields.iter().map(|f| (f.key, String::new())).collect(),
        }
    }

    /// Current value of a field; unknown keys read as empty.
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.1.clear();
        }
    }

    /// Overwrites all fields with `values`, in field-list order.
    pub fn fill(&mut self, values: Vec<String>) {
        for (entry, value) in self.entries.iter_mut().zip(values) {
            entry.1 = value;
        }
    }
}

/// State of one resource console: the form, the flash message, the last
/// rendered result set, and the token of the latest issued request.
pub struct AdminPanel<R: FormResource> {
    pub fields: FieldValues,
    pub flash: String,
    /// `None` until the first list/search completes; the table (headers
    /// included) is only rendered after that.
    pub results: Option<Vec<R::Record>>,
    seq: u32,
}

impl<R: FormResource> AdminPanel<R> {
    pub fn new() -> Self {
        Self {
            fields: FieldValues::new(R::FIELDS),
            flash: String::new(),
            results: None,
            seq: 0,
        }
    }

    /// Marks the start of a new request: clears the flash and returns the
    /// token the completion must carry to be applied.
    pub fn begin(&mut self) -> u32 {
        self.flash.clear();
        self.seq += 1;
        self.seq
    }

    /// The local Clear action: empty form, empty flash. The results table is
    /// left alone.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.flash.clear();
    }

    /// Applies a request completion. Returns `false` (state untouched) when
    /// the token has been superseded by a later request.
    pub fn finish(
        &mut self,
        seq: u32,
        action: Action,
        outcome: Result<Completed<R::Record>, String>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(Completed::Entity(record)) => {
                self.fields.fill(R::record_fields(&record));
                self.flash = "Success".to_string();
            }
            Ok(Completed::Deleted) => {
                self.fields.clear();
                self.flash = format!("{} has been Deleted!", R::ENTITY);
            }
            Ok(Completed::Listing(records)) => {
                if let Some(first) = records.first() {
                    self.fields.fill(R::record_fields(first));
                }
                self.results = Some(records);
                self.flash = "Success".to_string();
            }
            Err(message) => {
                if action.clears_form_on_failure() {
                    self.fields.clear();
                }
                self.flash = message;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use common::model::address::Address;
    use common::model::customer::Customer;

    use crate::resources::{AddressResource, CustomerResource};

    use super::*;

    fn customer(id: i64) -> Customer {
        Customer {
            id,
            name: Some("alice".into()),
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            email: Some("a@x.com".into()),
            phone_number: Some("555".into()),
            account_status: Some("active".into()),
        }
    }

    fn address(id: i64) -> Address {
        Address {
            id,
            customer_id: 9,
            name: Some("home".into()),
            street: Some("123 Main St".into()),
            city: Some("Anytown".into()),
            state: Some("NY".into()),
            postalcode: Some("10001".into()),
        }
    }

    #[test]
    fn entity_success_fills_form_name_to_name() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Create, Ok(Completed::Entity(customer(7)))));
        assert_eq!(panel.fields.get("id"), "7");
        assert_eq!(panel.fields.get("name"), "alice");
        assert_eq!(panel.fields.get("email"), "a@x.com");
        assert_eq!(panel.fields.get("account_status"), "active");
        assert_eq!(panel.flash, "Success");
    }

    #[test]
    fn delete_success_clears_form_and_flashes() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        panel.fields.set("id", "5".into());
        panel.fields.set("name", "alice".into());
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Delete, Ok(Completed::Deleted)));
        assert_eq!(panel.fields.get("id"), "");
        assert_eq!(panel.fields.get("name"), "");
        assert_eq!(panel.flash, "Customer has been Deleted!");
    }

    #[test]
    fn address_delete_flash_names_the_entity() {
        let mut panel = AdminPanel::<AddressResource>::new();
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Delete, Ok(Completed::Deleted)));
        assert_eq!(panel.flash, "Address has been Deleted!");
    }

    #[test]
    fn failed_retrieve_clears_form_and_shows_server_message() {
        let mut panel = AdminPanel::<AddressResource>::new();
        panel.fields.set("id", "3".into());
        panel.fields.set("customer_id", "9".into());
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Retrieve, Err("not found".into())));
        assert_eq!(panel.fields.get("id"), "");
        assert_eq!(panel.fields.get("customer_id"), "");
        assert_eq!(panel.fields.get("street"), "");
        assert_eq!(panel.flash, "not found");
    }

    #[test]
    fn failed_delete_clears_form() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        panel.fields.set("id", "5".into());
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Delete, Err("boom".into())));
        assert_eq!(panel.fields.get("id"), "");
        assert_eq!(panel.flash, "boom");
    }

    #[test]
    fn failed_create_leaves_form_unchanged() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        panel.fields.set("name", "alice".into());
        panel.fields.set("email", "a@x.com".into());
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Create, Err("name is required".into())));
        assert_eq!(panel.fields.get("name"), "alice");
        assert_eq!(panel.fields.get("email"), "a@x.com");
        assert_eq!(panel.flash, "name is required");
    }

    #[test]
    fn listing_copies_first_result_into_form() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        let seq = panel.begin();
        let mut second = customer(8);
        second.name = Some("bob".into());

        let outcome = Ok(Completed::Listing(vec![customer(7), second]));
        assert!(panel.finish(seq, Action::Search, outcome));
        assert_eq!(panel.fields.get("id"), "7");
        assert_eq!(panel.fields.get("name"), "alice");
        assert_eq!(panel.results.as_ref().map(Vec::len), Some(2));
        assert_eq!(panel.flash, "Success");
    }

    #[test]
    fn empty_listing_leaves_form_alone() {
        let mut panel = AdminPanel::<AddressResource>::new();
        panel.fields.set("customer_id", "9".into());
        let seq = panel.begin();

        assert!(panel.finish(seq, Action::Search, Ok(Completed::Listing(vec![]))));
        assert_eq!(panel.fields.get("customer_id"), "9");
        assert_eq!(panel.results.as_ref().map(Vec::len), Some(0));
        assert_eq!(panel.flash, "Success");
    }

    #[test]
    fn listing_fills_address_form_from_first_row() {
        let mut panel = AdminPanel::<AddressResource>::new();
        let seq = panel.begin();

        let outcome = Ok(Completed::Listing(vec![address(3)]));
        assert!(panel.finish(seq, Action::Search, outcome));
        assert_eq!(panel.fields.get("id"), "3");
        assert_eq!(panel.fields.get("customer_id"), "9");
        assert_eq!(panel.fields.get("postalcode"), "10001");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        let stale = panel.begin();
        let latest = panel.begin();

        assert!(!panel.finish(stale, Action::Retrieve, Ok(Completed::Entity(customer(7)))));
        assert_eq!(panel.fields.get("id"), "");
        assert_eq!(panel.flash, "");

        assert!(panel.finish(latest, Action::Retrieve, Ok(Completed::Entity(customer(8)))));
        assert_eq!(panel.fields.get("id"), "8");
    }

    #[test]
    fn reset_clears_form_and_flash_but_keeps_results() {
        let mut panel = AdminPanel::<CustomerResource>::new();
        let seq = panel.begin();
        panel.finish(seq, Action::Search, Ok(Completed::Listing(vec![customer(7)])));

        panel.reset();
        assert_eq!(panel.fields.get("id"), "");
        assert_eq!(panel.flash, "");
        assert_eq!(panel.results.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn unknown_field_keys_read_empty_and_ignore_writes() {
        let mut fields = FieldValues::new(CustomerResource::FIELDS);
        fields.set("no_such_field", "x".into());
        assert_eq!(fields.get("no_such_field"), "");
        assert_eq!(fields.get("name"), "");
    }
}
