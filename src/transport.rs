use std::time::Duration;

use async_trait::async_trait;
use btleplug::Result;
use uuid::Uuid;

/// Link to a single peripheral that can read and write characteristics.
///
/// [`BtleTransport`](crate::BtleTransport) is the default implementation. Anything
/// else that satisfies these three operations can drive a [`Session`](crate::Session).
#[async_trait]
pub trait Transport: Send {
    /// Connect to the peripheral with the given address.
    ///
    /// `timeout` is an upper bound for the whole attempt. The session enforces it as
    /// well, so implementations may use it only as a hint.
    async fn connect(&mut self, address: &str, timeout: Duration) -> Result<()>;

    /// Read the raw value of a characteristic.
    async fn read(&mut self, uuid: Uuid) -> Result<Vec<u8>>;

    /// Write a raw value to a characteristic.
    async fn write(&mut self, uuid: Uuid, data: &[u8]) -> Result<()>;
}
