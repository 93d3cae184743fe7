//! Customer domain models.
//!
//! Field names follow the graph's property names (`contactName`,
//! `companyName`, ...) on the wire, so the same structs deserialize from
//! submitted forms and serialize to JSON.

use serde::{Deserialize, Serialize};

/// A Customer node as stored in the graph.
///
/// Nothing is enforced on the node's properties, so every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Customer {
    /// True when `term` is a substring of the company name, contact name or address.
    ///
    /// Absent properties never match, mirroring `CONTAINS` on a null value.
    pub fn matches(&self, term: &str) -> bool {
        [&self.company_name, &self.contact_name, &self.address]
            .into_iter()
            .flatten()
            .any(|value| value.contains(term))
    }
}

/// Payload of the add form. Missing form fields stay absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub contact_name: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Return the upsert key, rejecting a missing or blank `contactName`.
    pub fn key(&self) -> crate::CustResult<&str> {
        match self.contact_name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(crate::CustError::validation("contactName is required")),
        }
    }

    /// The customer this payload would create.
    pub fn to_customer(&self) -> Customer {
        Customer {
            contact_name: self.contact_name.clone(),
            company_name: self.company_name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Payload of the edit form: the current key plus the new value of every field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub old_name: String,
    pub contact_name: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
}

impl CustomerUpdate {
    /// Overwrite every property of `customer` with the submitted values.
    pub fn apply(&self, customer: &mut Customer) {
        customer.contact_name = Some(self.contact_name.clone());
        customer.company_name = Some(self.company_name.clone());
        customer.address = Some(self.address.clone());
        customer.phone = Some(self.phone.clone());
    }
}
