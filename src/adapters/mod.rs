//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                  |
//! |----------------|--------------------|------------------------------|
//! | `ble`          | (uses GattClient)  | Button peripheral link       |
//! | `sim_gatt`     | GattClient         | Simulated Bluetooth stack    |
//! | `log_sink`     | EventSink          | `log` output                 |
//! |                | RenderPort         |                              |
//! | `config_store` | ConfigPort         | JSON file                    |

pub mod ble;
pub mod config_store;
pub mod log_sink;
pub mod sim_gatt;
