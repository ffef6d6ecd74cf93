//! Global keyboard capture via evdev
//!
//! Scans /dev/input for keyboard-capable devices and runs one blocking
//! reader per device. Requires membership in the 'input' group or an
//! initially-root (setuid) process.

use std::path::{Path, PathBuf};
use std::time::Instant;

use evdev::{Device, EventType, InputEvent, Key};
use log::{debug, error, info, warn};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task;

use crate::keys::RawKey;

#[derive(Debug, Error)]
pub enum InputError {
    #[error(
        "no readable keyboard devices found under {0} \
         (are you in the 'input' group?)"
    )]
    NoDevices(PathBuf),
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A press or release notification from the capture layer.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub raw: RawKey,
    pub pressed: bool,
    pub timestamp: Instant,
}

/// Owns the opened keyboard devices until the reader tasks take them.
pub struct InputListener {
    devices: Vec<Device>,
}

impl InputListener {
    /// Discover and open all keyboard devices under `device_dir`.
    pub fn open(device_dir: &Path) -> Result<Self, InputError> {
        let mut devices = Vec::new();

        let entries = std::fs::read_dir(device_dir).map_err(|source| InputError::Scan {
            path: device_dir.to_path_buf(),
            source,
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with("event") {
                continue;
            }

            match Device::open(&path) {
                Ok(device) => {
                    if is_keyboard_device(&device) {
                        info!(
                            "Found keyboard device: {} ({})",
                            device.name().unwrap_or("unnamed"),
                            path.display()
                        );
                        devices.push(device);
                    }
                }
                Err(e) => {
                    debug!("Could not open {}: {}", path.display(), e);
                }
            }
        }

        if devices.is_empty() {
            return Err(InputError::NoDevices(device_dir.to_path_buf()));
        }

        info!("Monitoring {} keyboard device(s)", devices.len());
        Ok(Self { devices })
    }

    /// Spawn one blocking reader task per device. The tasks run for the
    /// process lifetime and stop only when the receiver is dropped.
    pub fn spawn(self, sender: UnboundedSender<KeyEvent>) {
        for mut device in self.devices {
            let sender = sender.clone();
            task::spawn_blocking(move || loop {
                match device.fetch_events() {
                    Ok(events) => {
                        for event in events {
                            let Some(key_event) = parse_input_event(event) else {
                                continue;
                            };
                            debug!("Key event: {:?}", key_event);
                            if sender.send(key_event).is_err() {
                                warn!("Key event receiver dropped, stopping reader");
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        error!("Error reading input events: {}", e);
                        std::thread::sleep(std::time::Duration::from_millis(100));
                    }
                }
            });
        }
    }
}

/// Convert a raw evdev event into a capture-layer key event.
///
/// Value 1 is a press and 2 an auto-repeat; repeats count as presses so
/// a held key keeps refreshing the idle timer. Value 0 is a release.
pub fn parse_input_event(event: InputEvent) -> Option<KeyEvent> {
    if event.event_type() != EventType::KEY {
        return None;
    }

    let pressed = match event.value() {
        1 | 2 => true,
        0 => false,
        _ => return None,
    };

    Some(KeyEvent {
        raw: RawKey::from_evdev(Key::new(event.code())),
        pressed,
        timestamp: Instant::now(),
    })
}

fn is_keyboard_device(device: &Device) -> bool {
    if !device.supported_events().contains(EventType::KEY) {
        return false;
    }
    match device.supported_keys() {
        Some(keys) => {
            keys.contains(Key::KEY_A) && keys.contains(Key::KEY_ENTER) && keys.contains(Key::KEY_SPACE)
        }
        None => false,
    }
}
