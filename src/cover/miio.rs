// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover backed by a miio curtain motor.

use parking_lot::RwLock;

use super::Cover;
use crate::capabilities::CoverFeatures;
use crate::command::{Command, OperationCommand, PropertyQuery, SetPositionCommand};
use crate::config::CoverConfig;
use crate::error::{Error, ProtocolError, Result};
use crate::protocol::{Connector, Protocol};
use crate::state::CoverState;
use crate::types::Position;

/// A Xiaomi curtain motor exposed as a cover.
///
/// Commands are fire-and-forget: they return once the device acknowledges
/// the call, without waiting for the motor. The cached position only changes
/// on [`update`](Cover::update).
///
/// # Examples
///
/// ```ignore
/// use miio_cover::{Cover, CoverConfig, MiioCover};
///
/// let config = CoverConfig::new("10.0.0.5", "abcdefabcdefabcdefabcdefabcdef12")?;
/// let cover = MiioCover::connect(&connector, &config).await?;
///
/// cover.open_cover().await?;
/// cover.update().await?;
/// println!("{} is at {}", cover.name(), cover.current_position());
/// ```
#[derive(Debug)]
pub struct MiioCover<P: Protocol> {
    protocol: P,
    name: String,
    state: RwLock<CoverState>,
}

impl<P: Protocol> MiioCover<P> {
    /// Wraps a device client and samples the initial position.
    ///
    /// Exactly one property query is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the query fails, or `Error::Parse` if the
    /// reply has no usable position.
    pub async fn new(protocol: P, name: impl Into<String>) -> Result<Self> {
        let cover = Self {
            protocol,
            name: name.into(),
            state: RwLock::new(CoverState::new()),
        };
        cover.update().await?;
        Ok(cover)
    }

    /// Creates the device client for `config` and constructs the cover.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if the client cannot be created or the
    /// initial query fails, so the host can retry setup later.
    pub async fn connect<K>(connector: &K, config: &CoverConfig) -> Result<Self>
    where
        K: Connector<Client = P>,
    {
        let not_ready = |source: ProtocolError| Error::NotReady {
            host: config.host.clone(),
            source,
        };

        let protocol = connector
            .connect(&config.host, &config.token)
            .await
            .map_err(not_ready)?;

        match Self::new(protocol, config.name.clone()).await {
            Err(Error::Protocol(source)) => Err(not_ready(source)),
            other => other,
        }
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<()> {
        tracing::debug!(
            cover = %self.name,
            method = command.method(),
            params = %command.params(),
            "Sending curtain command"
        );

        let response = self.protocol.send_command(command).await?;

        if !response.is_ok() {
            tracing::warn!(
                cover = %self.name,
                method = command.method(),
                reply = %response.result(),
                "Curtain did not acknowledge command"
            );
        }
        Ok(())
    }
}

impl<P: Protocol> Cover for MiioCover<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn features(&self) -> CoverFeatures {
        CoverFeatures::curtain()
    }

    fn state(&self) -> CoverState {
        self.state.read().clone()
    }

    async fn open_cover(&self) -> Result<()> {
        self.send(&OperationCommand::open()).await
    }

    async fn close_cover(&self) -> Result<()> {
        self.send(&OperationCommand::close()).await
    }

    async fn stop_cover(&self) -> Result<()> {
        self.send(&OperationCommand::stop()).await
    }

    async fn set_cover_position(&self, position: Position) -> Result<()> {
        self.send(&SetPositionCommand::new(position)).await
    }

    async fn update(&self) -> Result<CoverState> {
        let response = self.protocol.send_command(&PropertyQuery).await?;
        let position = PropertyQuery::parse_position(response.result())?;

        tracing::debug!(cover = %self.name, position, "Sampled curtain position");

        let mut state = self.state.write();
        state.set_position(position);
        Ok(state.clone())
    }
}
