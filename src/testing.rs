// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory device used by unit tests.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::error::ProtocolError;
use crate::protocol::{Connector, Protocol};
use crate::types::Token;

#[derive(Debug)]
struct DeviceState {
    calls: Vec<(String, Value)>,
    position: Value,
    ack: Value,
    failure: Option<ProtocolError>,
}

/// Records every call and answers like a curtain motor.
#[derive(Debug, Clone)]
pub(crate) struct MockProtocol {
    inner: Arc<Mutex<DeviceState>>,
}

impl MockProtocol {
    pub(crate) fn with_position(position: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DeviceState {
                calls: Vec::new(),
                position: json!(position),
                ack: json!(["ok"]),
                failure: None,
            })),
        }
    }

    pub(crate) fn set_position(&self, position: i64) {
        self.inner.lock().position = json!(position);
    }

    /// Makes `get_prop` report an arbitrary value at the position index.
    pub(crate) fn set_position_reply(&self, reply: Value) {
        self.inner.lock().position = reply;
    }

    pub(crate) fn set_ack(&self, ack: Value) {
        self.inner.lock().ack = ack;
    }

    pub(crate) fn fail_with(&self, error: ProtocolError) {
        self.inner.lock().failure = Some(error);
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.inner.lock().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

impl Protocol for MockProtocol {
    async fn send(&self, method: &str, params: Value) -> Result<Value, ProtocolError> {
        let mut device = self.inner.lock();
        device.calls.push((method.to_string(), params));

        if let Some(error) = &device.failure {
            return Err(error.clone());
        }

        Ok(match method {
            "get_prop" => json!([1, device.position.clone(), 0]),
            _ => device.ack.clone(),
        })
    }
}

/// Hands out a prepared [`MockProtocol`], or refuses to connect.
#[derive(Debug)]
pub(crate) struct MockConnector {
    device: Option<MockProtocol>,
    refusal: Option<ProtocolError>,
    hosts: Mutex<Vec<String>>,
}

impl MockConnector {
    pub(crate) fn new(device: MockProtocol) -> Self {
        Self {
            device: Some(device),
            refusal: None,
            hosts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn refusing(error: ProtocolError) -> Self {
        Self {
            device: None,
            refusal: Some(error),
            hosts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn connected_hosts(&self) -> Vec<String> {
        self.hosts.lock().clone()
    }
}

impl Connector for MockConnector {
    type Client = MockProtocol;

    async fn connect(&self, host: &str, _token: &Token) -> Result<MockProtocol, ProtocolError> {
        self.hosts.lock().push(host.to_string());
        match (&self.device, &self.refusal) {
            (_, Some(error)) => Err(error.clone()),
            (Some(device), None) => Ok(device.clone()),
            (None, None) => Err(ProtocolError::ConnectionFailed("no device".to_string())),
        }
    }
}
