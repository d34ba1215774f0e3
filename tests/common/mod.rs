use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hue_ble::{Transport, TransportError};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectBehavior {
    Succeed,
    Fail,
    Hang,
}

/// Transport call, in the order the session made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect,
    Read(Uuid),
    Write(Uuid),
}

#[derive(Debug)]
pub struct MockState {
    pub calls: Vec<Call>,
    pub connect_behavior: ConnectBehavior,
    pub connects: Vec<String>,
    pub reads: Vec<Uuid>,
    pub writes: Vec<(Uuid, Vec<u8>)>,
    /// Values returned on read. Writes overwrite them.
    pub values: HashMap<Uuid, Vec<u8>>,
    pub fail_io: bool,
}

/// In-memory transport that echoes writes back on read.
#[derive(Clone)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                calls: Vec::new(),
                connect_behavior: ConnectBehavior::Succeed,
                connects: Vec::new(),
                reads: Vec::new(),
                writes: Vec::new(),
                values: HashMap::new(),
                fail_io: false,
            })),
        }
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        MockTransport::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn connect(&mut self, address: &str, _timeout: Duration) -> Result<(), TransportError> {
        let behavior = {
            let mut state = self.state();
            state.calls.push(Call::Connect);
            state.connects.push(address.to_string());
            state.connect_behavior
        };

        match behavior {
            ConnectBehavior::Succeed => Ok(()),
            ConnectBehavior::Fail => Err(TransportError::DeviceNotFound),
            ConnectBehavior::Hang => futures::future::pending().await,
        }
    }

    async fn read(&mut self, uuid: Uuid) -> Result<Vec<u8>, TransportError> {
        let mut state = self.state();
        if state.fail_io {
            return Err(TransportError::NotConnected);
        }
        state.calls.push(Call::Read(uuid));
        state.reads.push(uuid);
        Ok(state.values.get(&uuid).cloned().unwrap_or_default())
    }

    async fn write(&mut self, uuid: Uuid, data: &[u8]) -> Result<(), TransportError> {
        let mut state = self.state();
        if state.fail_io {
            return Err(TransportError::NotConnected);
        }
        state.calls.push(Call::Write(uuid));
        state.writes.push((uuid, data.to_vec()));
        state.values.insert(uuid, data.to_vec());
        Ok(())
    }
}
