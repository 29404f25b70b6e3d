//! Compile-time configuration constants.

/// Base URL of the Azure Resource Manager endpoint (public cloud).
pub const MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// OAuth scope requested for ARM bearer tokens.
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// ARM api-version used for Microsoft.Network subnet requests.
pub const API_VERSION: &str = "2023-09-01";

/// Fixed placeholder subscription id used in mock resource ids.
/// Deliberately not a random GUID so tests get byte-identical output.
pub const MOCK_SUBSCRIPTION_ID: &str = "########-####-####-####-############";
