//! The simulator value type.
//!
//! A [`Simulator`] is assembled from the raw values `simctl` reports for a
//! device (name, UDID, status string) plus optional runtime and device type
//! metadata. The type identifier, icon and platform are derived once, in
//! [`Simulator::new`], and never change afterwards.
//!
//! # Example
//!
//! ```
//! use simroom_core::simulator::{Platform, Simulator, State};
//! use simroom_core::type_identifier::TypeIdentifier;
//!
//! let sim = Simulator::new(
//!     "iPad Air (5th generation)",
//!     "9A1F3C2E-0000-4D1B-A6B4-6E5D3F1C2A10",
//!     State::from_device_state(Some("Shutdown")),
//!     None,
//!     None,
//! );
//!
//! assert_eq!(sim.platform(), Platform::IPad);
//! assert_eq!(sim.state(), State::Shutdown);
//! assert_eq!(sim.type_identifier(), &TypeIdentifier::DEFAULT_IPAD);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::type_identifier::{Icon, TypeIdentifier};

/// Hardware platform a simulator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    IPhone,
    IPad,
    Watch,
    Tv,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 4] = [Platform::IPhone, Platform::IPad, Platform::Watch, Platform::Tv];

    /// The name shown to users for this platform.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::IPhone => "iPhone",
            Platform::IPad => "iPad",
            Platform::Watch => "Apple Watch",
            Platform::Tv => "Apple TV",
        }
    }

    /// Classifies a type identifier, checking iPad, then watch, then TV.
    /// Anything else is treated as a phone.
    pub fn classify(type_identifier: &TypeIdentifier) -> Self {
        if type_identifier.conforms_to(&TypeIdentifier::PAD) {
            Platform::IPad
        } else if type_identifier.conforms_to(&TypeIdentifier::WATCH) {
            Platform::Watch
        } else if type_identifier.conforms_to(&TypeIdentifier::TV) {
            Platform::Tv
        } else {
            Platform::IPhone
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a platform name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown platform '{0}' (expected iphone, ipad, watch or tv)")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iphone" => Ok(Platform::IPhone),
            "ipad" => Ok(Platform::IPad),
            "watch" => Ok(Platform::Watch),
            "tv" => Ok(Platform::Tv),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

/// Lifecycle state of a simulator as reported by `simctl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Unknown,
    Creating,
    Booting,
    Booted,
    ShuttingDown,
    Shutdown,
}

impl State {
    /// Maps a raw `simctl` status string to a state.
    ///
    /// Matching is exact and case-sensitive. Unrecognized strings and a
    /// missing status both become [`State::Unknown`].
    pub fn from_device_state(device_state: Option<&str>) -> Self {
        match device_state {
            Some("Creating") => State::Creating,
            Some("Booting") => State::Booting,
            Some("Booted") => State::Booted,
            Some("ShuttingDown") => State::ShuttingDown,
            Some("Shutdown") => State::Shutdown,
            _ => State::Unknown,
        }
    }

    /// The `simctl` status string for this state, if it has one.
    pub fn as_device_state(self) -> Option<&'static str> {
        match self {
            State::Unknown => None,
            State::Creating => Some("Creating"),
            State::Booting => Some("Booting"),
            State::Booted => Some("Booted"),
            State::ShuttingDown => Some("ShuttingDown"),
            State::Shutdown => Some("Shutdown"),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::Unknown => "Unknown",
            State::Creating => "Creating",
            State::Booting => "Booting",
            State::Booted => "Booted",
            State::ShuttingDown => "Shutting Down",
            State::Shutdown => "Shutdown",
        };
        f.write_str(label)
    }
}

/// An OS runtime installed for the simulator service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runtime {
    /// Display name, e.g. "iOS 17.0".
    pub name: String,

    /// e.g. "com.apple.CoreSimulator.SimRuntime.iOS-17-0".
    pub identifier: String,

    /// Marketing version, e.g. "17.0".
    pub version: String,

    #[serde(rename = "buildversion")]
    pub build_version: String,

    #[serde(default)]
    pub is_available: bool,
}

impl Runtime {
    /// Placeholder runtime for simulators whose OS could not be resolved.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown OS".to_string(),
            identifier: "Unknown".to_string(),
            version: "0.0".to_string(),
            build_version: String::new(),
            is_available: false,
        }
    }
}

/// A simulated hardware model, e.g. "iPhone 15 Pro".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceType {
    pub name: String,

    /// e.g. "com.apple.CoreSimulator.SimDeviceType.iPhone-15-Pro".
    pub identifier: String,

    /// "iPhone", "iPad", "Apple Watch" or "Apple TV".
    #[serde(default)]
    pub product_family: Option<String>,

    /// The uniform type identifier of the hardware model, when the caller
    /// was able to resolve one. Takes precedence over name heuristics.
    #[serde(default)]
    pub model_type_identifier: Option<TypeIdentifier>,
}

/// One simulator and its identifier.
///
/// Equality and hashing cover every field. Ordering only looks at the name
/// so that lists sort alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Simulator {
    name: String,
    udid: String,
    type_identifier: TypeIdentifier,
    image: Icon,
    platform: Platform,
    runtime: Option<Runtime>,
    device_type: Option<DeviceType>,
    state: State,
}

impl Simulator {
    /// The UDID alias simctl resolves to a running simulator.
    pub const DEFAULT_TARGET_UDID: &'static str = "booted";

    /// Builds a simulator, deriving its type identifier, icon and platform.
    ///
    /// The type identifier comes from the device type's model when present.
    /// Otherwise the name is searched for "iPad", "Watch" and "TV" in that
    /// order, falling back to the default iPhone model.
    pub fn new(
        name: impl Into<String>,
        udid: impl Into<String>,
        state: State,
        runtime: Option<Runtime>,
        device_type: Option<DeviceType>,
    ) -> Self {
        let name = name.into();
        let udid = udid.into();

        let model = device_type
            .as_ref()
            .and_then(|device_type| device_type.model_type_identifier.clone());
        let type_identifier = match model {
            Some(model) => {
                debug!(%udid, %model, "type identifier from device type model");
                model
            }
            None => {
                let guessed = Self::guess_type_identifier(&name);
                debug!(%udid, %name, type_identifier = %guessed, "type identifier from name");
                guessed
            }
        };

        let image = type_identifier.icon();
        let platform = Platform::classify(&type_identifier);

        Self {
            name,
            udid,
            type_identifier,
            image,
            platform,
            runtime,
            device_type,
            state,
        }
    }

    fn guess_type_identifier(name: &str) -> TypeIdentifier {
        if name.contains("iPad") {
            TypeIdentifier::DEFAULT_IPAD
        } else if name.contains("Watch") {
            TypeIdentifier::DEFAULT_WATCH
        } else if name.contains("TV") {
            TypeIdentifier::DEFAULT_TV
        } else {
            TypeIdentifier::DEFAULT_IPHONE
        }
    }

    /// A booted iPhone with a random UDID, for previews and demos.
    pub fn example() -> Self {
        Self::new(
            "iPhone 11 Pro max",
            uuid::Uuid::new_v4().to_string().to_uppercase(),
            State::Booted,
            Some(Runtime::unknown()),
            None,
        )
    }

    /// Whichever simulator `simctl` resolves the `booted` alias to.
    ///
    /// If only one simulator is running that one is used; with several,
    /// simctl picks one.
    pub fn default_target() -> Self {
        Self::new("Default", Self::DEFAULT_TARGET_UDID, State::Booted, None, None)
    }

    /// The user-facing name, e.g. "iPhone 11 Pro Max".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn udid(&self) -> &str {
        &self.udid
    }

    /// Identity key; same as [`Self::udid`].
    pub fn id(&self) -> &str {
        &self.udid
    }

    pub fn type_identifier(&self) -> &TypeIdentifier {
        &self.type_identifier
    }

    /// The icon representing this simulator's hardware.
    pub fn image(&self) -> &Icon {
        &self.image
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn runtime(&self) -> Option<&Runtime> {
        self.runtime.as_ref()
    }

    pub fn device_type(&self) -> Option<&DeviceType> {
        self.device_type.as_ref()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Compares two simulators alphabetically by name.
    pub fn cmp_by_name(a: &Simulator, b: &Simulator) -> Ordering {
        a.name.cmp(&b.name)
    }
}

impl PartialOrd for Simulator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Simulator::cmp_by_name(self, other))
    }
}

// Simulators with equal names compare Equal here even when `==` is false;
// sorts keep such entries in their original order.
impl Ord for Simulator {
    fn cmp(&self, other: &Self) -> Ordering {
        Simulator::cmp_by_name(self, other)
    }
}
