//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                     | Connects to                 |
//! |-------------|--------------------------------|-----------------------------|
//! | `hardware`  | Door, DirtFilter,              | Simulated drivers           |
//! |             | WaterPump, Engine              |                             |
//! | `gpio_door` | Door                           | embedded-hal reed + latch   |
//! | `log_sink`  | EventSink                      | `log` facade                |

pub mod gpio_door;
pub mod hardware;
pub mod log_sink;
