//! Azure subnet wire models.
//!
//! Request and response shapes are kept separate: the outgoing descriptor must
//! OMIT an unset address prefix entirely, while the response snapshot reports
//! it as `null` when the server (or mock) has no value for it.

use serde::{Deserialize, Serialize};

/// Properties block of an outgoing subnet request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProperties {
    /// CIDR block of the subnet. `None` means "inherit/unspecified" and the
    /// field is left out of the request body (omitted, not sent as empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix: Option<String>,
}

/// Outgoing request body for a subnet create-or-update call.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubnetDescriptor {
    /// Name of the subnet, unique within the parent virtual network.
    pub name: String,
    pub properties: SubnetProperties,
}

impl SubnetDescriptor {
    pub fn new(name: &str, address_prefix: Option<&str>) -> Self {
        SubnetDescriptor {
            name: name.to_string(),
            properties: SubnetProperties {
                address_prefix: address_prefix.map(|p| p.to_string()),
            },
        }
    }
}

/// Properties block of a subnet as reported by the server.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecordProperties {
    /// CIDR block, `null` when the subnet has none configured.
    #[serde(default)]
    pub address_prefix: Option<String>,
    /// Server-reported lifecycle status, e.g. "Succeeded".
    #[serde(default)]
    pub provisioning_state: Option<String>,
}

/// Snapshot of a subnet's (claimed) state after a create-or-update call.
///
/// Server-assigned fields are optional so partial ARM responses still parse.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecord {
    /// Fully-qualified resource path, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub properties: SubnetRecordProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}
