use std::time::Duration;

use crate::{BtleTransport, Endpoint, Error, Result, Transport};

/// Upper bound for establishing the link.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
/// Pause between link establishment and the first attribute access.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

const POWER_ON: u8 = 0x01;
const POWER_OFF: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The connection attempt fails when this duration is reached.
    connect_timeout: Duration,
    /// Some lights reject requests right after the link comes up. Zero disables the pause.
    settle_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl SessionConfig {
    /// Give up connecting after given duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Wait for given duration after connecting
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Connection to a single light.
///
/// The session connects lazily: the first attribute access (or an explicit
/// [`connect`](Session::connect)) establishes the link, and it is kept for the rest of
/// the session's lifetime. A failed attempt leaves the session disconnected, so the
/// next access tries again.
///
/// Every operation borrows the session mutably, so only one of them can be in flight
/// at a time.
pub struct Session<T = BtleTransport> {
    address: String,
    connected: bool,
    config: SessionConfig,
    transport: T,
}

impl Session<BtleTransport> {
    /// Create a session for the light with the given address. Does not connect.
    pub fn new(address: impl Into<String>) -> Self {
        Self::with_transport(address, BtleTransport::new())
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(address: impl Into<String>, transport: T) -> Self {
        Self {
            address: address.into(),
            connected: false,
            config: SessionConfig::default(),
            transport,
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connect to the light.
    ///
    /// Fails with [`Error::Connection`] if the transport reports an error or does not
    /// finish within the configured timeout. Nothing is retried.
    pub async fn connect(&mut self) -> Result<()> {
        let timeout = self.config.connect_timeout;

        log::debug!("Connecting to {}", self.address);

        let result = match tokio::time::timeout(
            timeout,
            self.transport.connect(&self.address, timeout),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(btleplug::Error::TimedOut(timeout)),
        };

        if let Err(source) = result {
            return Err(Error::Connection {
                address: self.address.clone(),
                source,
            });
        }

        if !self.config.settle_delay.is_zero() {
            log::trace!(
                "Waiting {:?} for {} to settle",
                self.config.settle_delay,
                self.address
            );
            tokio::time::sleep(self.config.settle_delay).await;
        }

        self.connected = true;

        log::info!("Connected to {}", self.address);

        Ok(())
    }

    async fn ensure_connected(&mut self) -> Result<()> {
        if !self.connected {
            self.connect().await?;
        }
        Ok(())
    }

    async fn write(&mut self, endpoint: Endpoint, data: &[u8]) -> Result<()> {
        self.ensure_connected().await?;

        log::trace!("Writing {:?} to {}", data, endpoint);

        self.transport
            .write(endpoint.uuid(), data)
            .await
            .map_err(|source| Error::Communication { endpoint, source })
    }

    async fn read(&mut self, endpoint: Endpoint) -> Result<Vec<u8>> {
        self.ensure_connected().await?;

        let data = self
            .transport
            .read(endpoint.uuid())
            .await
            .map_err(|source| Error::Communication { endpoint, source })?;

        log::trace!("Read {:?} from {}", data, endpoint);

        Ok(data)
    }

    async fn write_byte(&mut self, endpoint: Endpoint, value: impl Into<i64>) -> Result<()> {
        let value = value.into();
        let byte = u8::try_from(value).map_err(|_| Error::Encoding { endpoint, value })?;

        self.write(endpoint, &[byte]).await
    }

    async fn read_byte(&mut self, endpoint: Endpoint) -> Result<u8> {
        match self.read(endpoint).await?.as_slice() {
            [byte] => Ok(*byte),
            data => Err(Error::Decoding {
                endpoint,
                len: data.len(),
            }),
        }
    }

    /// Set brightness. Values outside `0..=255` fail with [`Error::Encoding`].
    pub async fn set_brightness(&mut self, brightness: impl Into<i64>) -> Result<()> {
        self.write_byte(Endpoint::Brightness, brightness).await
    }

    pub async fn get_brightness(&mut self) -> Result<u8> {
        self.read_byte(Endpoint::Brightness).await
    }

    /// Set color temperature. Values outside `0..=255` fail with [`Error::Encoding`].
    pub async fn set_temperature(&mut self, temperature: impl Into<i64>) -> Result<()> {
        self.write_byte(Endpoint::Temperature, temperature).await
    }

    pub async fn get_temperature(&mut self) -> Result<u8> {
        self.read_byte(Endpoint::Temperature).await
    }

    pub async fn turn_on(&mut self) -> Result<()> {
        self.write(Endpoint::Power, &[POWER_ON]).await
    }

    pub async fn turn_off(&mut self) -> Result<()> {
        self.write(Endpoint::Power, &[POWER_OFF]).await
    }

    /// Whether the light reports itself as on.
    ///
    /// Only a value of exactly `0x01` counts as on; any other byte reads as off.
    pub async fn is_on(&mut self) -> Result<bool> {
        Ok(self.read_byte(Endpoint::Power).await? == POWER_ON)
    }
}
