//! Party records: supplier, client and payment details

use serde::{Deserialize, Serialize};

/// The issuing company shown in the document header and signature block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierInfo {
    pub name: String,
    /// Representative name, rendered next to the seal in the signature block
    pub ceo: String,
    pub registration_number: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// The receiving party ("bill to")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Bank account details for the payment footer section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
    pub bank: String,
    pub account_number: String,
    pub holder: String,
}
