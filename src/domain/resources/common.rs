//! Records shared by several resources.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub has_more: bool,

    pub total_count: Option<u64>,
}

impl<T> ListResponse<T> {
    /// Total reported by the API, or the size of this page when absent.
    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(self.data.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_response_defaults_has_more() {
        let list: ListResponse<Address> =
            serde_json::from_value(json!({"data": [{"city": "San José"}]})).unwrap();
        assert!(!list.has_more);
        assert_eq!(list.total(), 1);
    }

    #[test]
    fn list_response_prefers_reported_total() {
        let list: ListResponse<Address> = serde_json::from_value(json!({
            "data": [], "hasMore": true, "totalCount": 42
        }))
        .unwrap();
        assert!(list.has_more);
        assert!(list.is_empty());
        assert_eq!(list.total(), 42);
    }

    #[test]
    fn address_reads_camel_case() {
        let address: Address =
            serde_json::from_value(json!({"line1": "Calle 1", "postalCode": "10101"})).unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("10101"));
        assert_eq!(address.country, None);
    }
}
