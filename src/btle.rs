use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{
    Central, CentralEvent, Characteristic, Manager as _, Peripheral as _, WriteType,
};
use btleplug::platform::{Adapter, Manager, Peripheral};
use btleplug::{Error, Result};
use futures::StreamExt;
use uuid::Uuid;

use crate::Transport;

struct Link {
    _manager: Manager,
    _adapter: Adapter,
    peripheral: Peripheral,
}

/// [`Transport`] backed by the host's Bluetooth adapter.
#[derive(Default)]
pub struct BtleTransport {
    /// Index of the Bluetooth adapter to use. The first found adapter is used by default.
    adapter_index: usize,
    link: Option<Link>,
}

impl BtleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of bluetooth adapter to use
    pub fn adapter_index(mut self, index: usize) -> Self {
        self.adapter_index = index;
        self
    }

    fn peripheral(&self) -> Result<&Peripheral> {
        self.link
            .as_ref()
            .map(|link| &link.peripheral)
            .ok_or(Error::NotConnected)
    }

    fn characteristic(&self, uuid: Uuid) -> Result<Characteristic> {
        self.peripheral()?
            .characteristics()
            .into_iter()
            .find(|characteristic| characteristic.uuid == uuid)
            .ok_or_else(|| characteristic_not_found(uuid))
    }
}

#[async_trait]
impl Transport for BtleTransport {
    async fn connect(&mut self, address: &str, timeout: Duration) -> Result<()> {
        let manager = Manager::new().await?;
        let mut adapters = manager.adapters().await?;

        if self.adapter_index >= adapters.len() {
            return Err(Error::DeviceNotFound);
        }

        let adapter = adapters.swap_remove(self.adapter_index);

        log::trace!("Using adapter: {:?}", adapter);

        let peripheral = search_with_timeout(
            timeout,
            find_peripheral(&adapter, address),
            adapter.stop_scan(),
        )
        .await?;

        log::debug!("Connecting to device {}", peripheral.address());

        if !peripheral.is_connected().await? {
            peripheral.connect().await?;
        }
        peripheral.discover_services().await?;

        self.link = Some(Link {
            _manager: manager,
            _adapter: adapter,
            peripheral,
        });

        Ok(())
    }

    async fn read(&mut self, uuid: Uuid) -> Result<Vec<u8>> {
        let characteristic = self.characteristic(uuid)?;
        self.peripheral()?.read(&characteristic).await
    }

    async fn write(&mut self, uuid: Uuid, data: &[u8]) -> Result<()> {
        let characteristic = self.characteristic(uuid)?;
        self.peripheral()?
            .write(&characteristic, data, WriteType::WithResponse)
            .await
    }
}

/// Runs `search` for at most `timeout`, then runs `stop_scan` whether the search
/// finished or was cancelled.
async fn search_with_timeout<T>(
    timeout: Duration,
    search: impl Future<Output = Result<T>>,
    stop_scan: impl Future<Output = Result<()>>,
) -> Result<T> {
    let found = tokio::time::timeout(timeout, search).await;

    stop_scan.await.ok();

    found.map_err(|_| Error::TimedOut(timeout))?
}

/// Scans until a peripheral with the given address shows up.
async fn find_peripheral(adapter: &Adapter, address: &str) -> Result<Peripheral> {
    let mut events = adapter.events().await?;

    log::info!("Scanning for device {}", address);

    adapter.start_scan(Default::default()).await?;

    // The adapter may already know the device from an earlier scan.
    let mut found = adapter
        .peripherals()
        .await?
        .into_iter()
        .find(|peripheral| has_address(peripheral, address));

    while found.is_none() {
        let peripheral_id = match events.next().await {
            Some(CentralEvent::DeviceDiscovered(id)) | Some(CentralEvent::DeviceUpdated(id)) => id,
            Some(_) => continue,
            None => break,
        };

        if let Ok(peripheral) = adapter.peripheral(&peripheral_id).await {
            log::trace!("Device discovered: {:?}", peripheral);

            if has_address(&peripheral, address) {
                found = Some(peripheral);
            }
        }
    }

    found.ok_or(Error::DeviceNotFound)
}

fn has_address(peripheral: &Peripheral, address: &str) -> bool {
    peripheral
        .address()
        .to_string()
        .eq_ignore_ascii_case(address)
}

fn characteristic_not_found(uuid: Uuid) -> Error {
    Error::NotSupported(format!("characteristic {} not found", uuid))
}
