//! # simroom-core
//!
//! Value model for Apple simulator devices on macOS.
//!
//! The types here describe a simulator as a front-end over `xcrun simctl`
//! sees it: name, UDID and lifecycle state, plus the hardware classification
//! used to group simulators by platform and pick their icon.
//!
//! ## Modules
//!
//! - [`simulator`] - The [`Simulator`](simulator::Simulator) value and its platform/state enums
//! - [`type_identifier`] - Device type identifiers, family conformance and icons
//! - [`config`] - Persistent user configuration in `~/.simroom`
//!
//! ## Example
//!
//! ```
//! use simroom_core::simulator::{Platform, Simulator, State};
//!
//! let mut sims = vec![
//!     Simulator::new("iPhone 15", "U1", State::from_device_state(Some("Booted")), None, None),
//!     Simulator::new("Apple Watch Series 9", "U2", State::from_device_state(None), None, None),
//! ];
//! sims.sort();
//!
//! assert_eq!(sims[0].platform(), Platform::Watch);
//! assert_eq!(sims[0].state(), State::Unknown);
//! ```

pub mod config;
pub mod simulator;
pub mod type_identifier;
