// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform setup.
//!
//! [`setup_platform`] is the entry point the host calls for each
//! configuration block: validate, connect, sample the initial position,
//! register.

use serde_json::Value;

use crate::config::CoverConfig;
use crate::cover::MiioCover;
use crate::error::Result;
use crate::protocol::Connector;
use crate::registry::CoverRegistry;

/// Sets up one curtain from a raw configuration block.
///
/// Returns the entity id assigned to the new cover.
///
/// # Errors
///
/// - `Error::Config` if the block is invalid; no connection is attempted.
/// - `Error::NotReady` if the device is unreachable or rejects the token;
///   nothing is registered and the host may retry later.
pub async fn setup_platform<K: Connector>(
    raw_config: Value,
    connector: &K,
    registry: &CoverRegistry<MiioCover<K::Client>>,
) -> Result<String> {
    let config = CoverConfig::from_value(raw_config)?;
    setup_cover(&config, connector, registry).await
}

/// Sets up one curtain from an already validated configuration.
///
/// # Errors
///
/// Returns `Error::NotReady` if the device cannot be set up.
pub async fn setup_cover<K: Connector>(
    config: &CoverConfig,
    connector: &K,
    registry: &CoverRegistry<MiioCover<K::Client>>,
) -> Result<String> {
    tracing::info!(
        host = %config.host,
        token = %config.token,
        "Initializing Xiaomi curtain"
    );

    let cover = match MiioCover::connect(connector, config).await {
        Ok(cover) => cover,
        Err(e) => {
            tracing::error!(host = %config.host, error = %e, "Failed to set up Xiaomi curtain");
            return Err(e);
        }
    };

    Ok(registry.register(config.host.clone(), cover).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cover::Cover;
    use crate::error::{ConfigError, ProtocolError};
    use crate::testing::{MockConnector, MockProtocol};

    const TOKEN: &str = "abcdefabcdefabcdefabcdefabcdef12";

    #[tokio::test]
    async fn valid_config_registers_cover() {
        let device = MockProtocol::with_position(30);
        let connector = MockConnector::new(device.clone());
        let registry = CoverRegistry::new();

        let entity_id = setup_platform(
            json!({"host": "10.0.0.5", "token": TOKEN}),
            &connector,
            &registry,
        )
        .await
        .unwrap();

        assert_eq!(entity_id, "cover.xiaomi_miio_device");
        assert_eq!(device.calls().len(), 1);
        let cover = registry.get("10.0.0.5").await.unwrap();
        assert_eq!(cover.current_position(), 30);
    }

    #[tokio::test]
    async fn invalid_config_never_connects() {
        let connector = MockConnector::new(MockProtocol::with_position(0));
        let registry = CoverRegistry::new();

        let err = setup_platform(json!({"host": "10.0.0.5", "token": "short"}), &connector, &registry)
            .await
            .unwrap_err();

        match err {
            crate::Error::Config(ConfigError::Invalid(message)) => {
                assert_eq!(message, "token must be exactly 32 characters, got 5");
            }
            other => panic!("expected a configuration error, got {other:?}"),
        }
        assert!(connector.connected_hosts().is_empty());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn unreachable_device_is_not_ready() {
        let connector = MockConnector::refusing(ProtocolError::Timeout(5000));
        let registry = CoverRegistry::new();

        let err = setup_platform(json!({"host": "10.0.0.5", "token": TOKEN}), &connector, &registry)
            .await
            .unwrap_err();

        assert!(err.is_not_ready());
        assert!(registry.is_empty().await);
    }
}
