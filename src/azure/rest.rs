//! ARM REST client for subnet create-or-update.
//!
//! Issues the management-plane PUT for the subnet resource, authenticated via
//! the standard Azure credential chain.

use crate::azure::NetworkClient;
use crate::config;
use crate::error::{ErrorResponse, OperationError};
use crate::models::{SubnetDescriptor, SubnetRecord};
use async_trait::async_trait;
use azure_core::auth::TokenCredential;
use azure_identity::DefaultAzureCredential;
use colored::Colorize;
use std::sync::Arc;

/// Real network client talking to Azure Resource Manager.
pub struct ArmNetworkClient {
    http: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    subscription_id: String,
}

impl ArmNetworkClient {
    /// Build a client for the given subscription using the default Azure
    /// credential chain (env vars, az cli login, managed identity).
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self::with_credential(subscription_id, Arc::new(DefaultAzureCredential::default()))
    }

    /// Build a client with an explicit credential.
    pub fn with_credential(
        subscription_id: impl Into<String>,
        credential: Arc<dyn TokenCredential>,
    ) -> Self {
        ArmNetworkClient {
            http: reqwest::Client::new(),
            credential,
            subscription_id: subscription_id.into(),
        }
    }

    fn subnet_url(&self, resource_group: &str, virtual_network_name: &str, subnet_name: &str) -> String {
        format!(
            "{endpoint}/subscriptions/{sub}/resourceGroups/{resource_group}/providers/Microsoft.Network/virtualNetworks/{virtual_network_name}/subnets/{subnet_name}?api-version={version}",
            endpoint = config::MANAGEMENT_ENDPOINT,
            sub = self.subscription_id,
            version = config::API_VERSION,
        )
    }
}

#[async_trait]
impl NetworkClient for ArmNetworkClient {
    async fn create_or_update_subnet(
        &self,
        resource_group: &str,
        virtual_network_name: &str,
        subnet_name: &str,
        subnet: &SubnetDescriptor,
    ) -> Result<SubnetRecord, OperationError> {
        let url = self.subnet_url(resource_group, virtual_network_name, subnet_name);
        log::debug!("PUT {url}", url = url.on_blue());

        let token = self
            .credential
            .get_token(&[config::MANAGEMENT_SCOPE])
            .await?;

        let response = self
            .http
            .put(&url)
            .bearer_auth(token.token.secret())
            .json(subnet)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("status={status} body.len()={len}", len = body.len());

        if status.is_success() {
            let mut deserializer = serde_json::Deserializer::from_str(&body);
            let record: SubnetRecord = serde_path_to_error::deserialize(&mut deserializer)
                .map_err(|e| {
                    log::error!("RESPONSE START:\n\n{body}\n\nRESPONSE END\n");
                    OperationError::Body(format!("path={} error={}", e.path(), e))
                })?;
            Ok(record)
        } else {
            log::warn!(
                "{failed} PUT subnet {subnet_name} status={status}",
                failed = "failed".on_red(),
            );
            // A non-JSON error body degrades to an empty message.
            let parsed: ErrorResponse = serde_json::from_str(&body).unwrap_or_default();
            Err(OperationError::Operation {
                status: status.as_u16(),
                body: parsed,
            })
        }
    }
}
