use serde::{Deserialize, Serialize};

/// Request body for creating, updating, suspending, or restoring a customer.
///
/// Every field is a plain string because the values come straight out of the
/// form; the server is the validation authority. `addresses` is always sent
/// as the empty string — the service manages the nested records itself and
/// the console never submits any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub addresses: String,
    pub account_status: String,
}

/// Request body for creating or updating a customer address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub customer_id: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postalcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_payload_always_carries_empty_addresses() {
        let payload = CustomerPayload {
            name: "alice".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@x.com".into(),
            phone_number: "555".into(),
            addresses: String::new(),
            account_status: "active".into(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "alice",
                "first_name": "A",
                "last_name": "B",
                "email": "a@x.com",
                "phone_number": "555",
                "addresses": "",
                "account_status": "active"
            })
        );
    }

    #[test]
    fn address_payload_serializes_form_values_verbatim() {
        let payload = AddressPayload {
            customer_id: "9".into(),
            name: "home".into(),
            street: "123 Main St".into(),
            city: "Anytown".into(),
            state: "NY".into(),
            postalcode: "10001".into(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "customer_id": "9",
                "name": "home",
                "street": "123 Main St",
                "city": "Anytown",
                "state": "NY",
                "postalcode": "10001"
            })
        );
    }
}
