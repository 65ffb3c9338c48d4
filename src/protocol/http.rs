// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Nature Remo cloud API.

use std::time::Duration;

use reqwest::Client;

use crate::command::ButtonCommand;
use crate::error::ProtocolError;
use crate::protocol::CommandSender;

/// Configuration for the Nature Remo cloud connection.
///
/// The bearer access token and the target appliance id are per-deployment
/// values and must be injected here; they are never hard-coded. The base
/// URL defaults to the public cloud endpoint and is overridable for tests.
///
/// # Examples
///
/// ```
/// use remo_bridge::RemoConfig;
/// use std::time::Duration;
///
/// let config = RemoConfig::new("remo-access-token", "appliance-id")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(
///     config.tv_url(),
///     "https://api.nature.global/1/appliances/appliance-id/tv"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RemoConfig {
    access_token: String,
    appliance_id: String,
    base_url: String,
    timeout: Duration,
}

impl RemoConfig {
    /// Default cloud API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.nature.global";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given access token and appliance id.
    #[must_use]
    pub fn new(access_token: impl Into<String>, appliance_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            appliance_id: appliance_id.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the base URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured appliance id.
    #[must_use]
    pub fn appliance_id(&self) -> &str {
        &self.appliance_id
    }

    /// Returns the TV control resource URL for this appliance.
    #[must_use]
    pub fn tv_url(&self) -> String {
        format!("{}/1/appliances/{}/tv", self.base_url, self.appliance_id)
    }

    /// Creates a [`RemoClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<RemoClient, ProtocolError> {
        if self.base_url.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(RemoClient {
            tv_url: self.tv_url(),
            access_token: self.access_token,
            client,
        })
    }
}

/// HTTP client sending button commands to the Nature Remo cloud.
///
/// Each command is one POST to the appliance's `/tv` resource carrying a
/// bearer token header and a `button=<code>` form body.
#[derive(Debug, Clone)]
pub struct RemoClient {
    tv_url: String,
    access_token: String,
    client: Client,
}

impl RemoClient {
    /// Returns the target resource URL.
    #[must_use]
    pub fn tv_url(&self) -> &str {
        &self.tv_url
    }
}

impl CommandSender for RemoClient {
    async fn send(&self, command: &ButtonCommand) -> Result<(), ProtocolError> {
        let code = command.code();

        tracing::debug!(url = %self.tv_url, button = %code, "Sending button command");

        let response = self
            .client
            .post(&self.tv_url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("button", code.as_str())])
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }
        if !status.is_success() {
            return Err(ProtocolError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(button = %code, status = status.as_u16(), "Button command accepted");

        Ok(())
    }
}
