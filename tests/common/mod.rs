// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory curtain shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use miio_cover::types::Token;
use miio_cover::{Connector, Protocol, ProtocolError};
use parking_lot::Mutex;
use serde_json::{Value, json};

pub const TOKEN: &str = "abcdefabcdefabcdefabcdefabcdef12";

#[derive(Debug)]
struct Motor {
    calls: Vec<(String, Value)>,
    position: i64,
    failure: Option<ProtocolError>,
}

/// A fake curtain motor that records every call.
///
/// `setPosition` moves the motor instantly and `setOperation` jumps to the
/// end stop, so a refresh after a command sees the new position.
#[derive(Debug, Clone)]
pub struct FakeCurtain {
    motor: Arc<Mutex<Motor>>,
}

impl FakeCurtain {
    pub fn at(position: i64) -> Self {
        Self {
            motor: Arc::new(Mutex::new(Motor {
                calls: Vec::new(),
                position,
                failure: None,
            })),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.motor.lock().calls.clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(m, _)| m == method)
            .map(|(_, params)| params)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.motor.lock().calls.clear();
    }

    pub fn fail_with(&self, error: ProtocolError) {
        self.motor.lock().failure = Some(error);
    }
}

impl Protocol for FakeCurtain {
    async fn send(&self, method: &str, params: Value) -> Result<Value, ProtocolError> {
        let mut motor = self.motor.lock();
        motor.calls.push((method.to_string(), params.clone()));

        if let Some(error) = &motor.failure {
            return Err(error.clone());
        }

        match method {
            "get_prop" => Ok(json!([1, motor.position, 0])),
            "setOperation" => {
                match params[0].as_i64() {
                    Some(0) => motor.position = 0,
                    Some(2) => motor.position = 100,
                    _ => {}
                }
                Ok(json!(["ok"]))
            }
            "setPosition" => {
                if let Some(target) = params[0].as_i64() {
                    motor.position = target;
                }
                Ok(json!(["ok"]))
            }
            other => Err(ProtocolError::DeviceError {
                code: -32601,
                message: format!("method {other} not found"),
            }),
        }
    }
}

/// Hands out one [`FakeCurtain`] per host; unknown hosts are unreachable.
#[derive(Debug, Default)]
pub struct FakeNetwork {
    devices: HashMap<String, FakeCurtain>,
    attempts: Mutex<Vec<String>>,
}

impl FakeNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, host: &str, device: FakeCurtain) -> Self {
        self.devices.insert(host.to_string(), device);
        self
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().clone()
    }
}

impl Connector for FakeNetwork {
    type Client = FakeCurtain;

    async fn connect(&self, host: &str, _token: &Token) -> Result<FakeCurtain, ProtocolError> {
        self.attempts.lock().push(host.to_string());
        self.devices
            .get(host)
            .cloned()
            .ok_or_else(|| ProtocolError::ConnectionFailed(format!("{host} unreachable")))
    }
}
