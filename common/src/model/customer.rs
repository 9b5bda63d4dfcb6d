use serde::{Deserialize, Serialize};

/// A customer account as returned by the service.
///
/// The service serializes every column, including an `addresses` array with
/// the nested address records. The console never reads that array (addresses
/// have their own panel), so the field is omitted here and serde drops it on
/// deserialization. Text columns are nullable on the server side, hence
/// `Option<String>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Username of the account.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number is optional on the server.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// "active" or "suspended".
    #[serde(default)]
    pub account_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record_and_ignores_addresses() {
        let body = json!({
            "id": 7,
            "name": "alice",
            "first_name": "A",
            "last_name": "B",
            "email": "a@x.com",
            "phone_number": "555",
            "addresses": [{"id": 1, "customer_id": 7, "name": "home",
                           "street": "s", "city": "c", "state": "NY",
                           "postalcode": "10001"}],
            "account_status": "active"
        });

        let customer: Customer = serde_json::from_value(body).unwrap();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name.as_deref(), Some("alice"));
        assert_eq!(customer.email.as_deref(), Some("a@x.com"));
        assert_eq!(customer.account_status.as_deref(), Some("active"));
    }

    #[test]
    fn deserializes_null_phone_number() {
        let body = json!({
            "id": 3,
            "name": "bob",
            "first_name": "Bob",
            "last_name": "Jones",
            "email": "b@x.com",
            "phone_number": null,
            "addresses": [],
            "account_status": "suspended"
        });

        let customer: Customer = serde_json::from_value(body).unwrap();
        assert_eq!(customer.phone_number, None);
        assert_eq!(customer.account_status.as_deref(), Some("suspended"));
    }
}
