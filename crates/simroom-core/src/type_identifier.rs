//! Uniform type identifiers for simulator hardware.
//!
//! Every simulated device model is described by a reverse-DNS identifier such
//! as `com.apple.ipad-pro-12point9-2`. Model identifiers belong to a family
//! (`com.apple.ipad`, `com.apple.watch`, ...) and the family decides both the
//! platform a simulator is grouped under and the icon it is shown with.
//!
//! # Example
//!
//! ```
//! use simroom_core::type_identifier::TypeIdentifier;
//!
//! let model = TypeIdentifier::new("com.apple.ipad-air-4");
//! assert!(model.conforms_to(&TypeIdentifier::PAD));
//! assert!(!model.conforms_to(&TypeIdentifier::PHONE));
//! assert_eq!(model.icon().symbol_name(), "ipad");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

static FAMILIES: [TypeIdentifier; 4] = [
    TypeIdentifier::PHONE,
    TypeIdentifier::PAD,
    TypeIdentifier::WATCH,
    TypeIdentifier::TV,
];

/// A device type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeIdentifier(Cow<'static, str>);

impl TypeIdentifier {
    /// Root of the hierarchy; every device family conforms to it.
    pub const ANY_DEVICE: Self = Self::from_static("public.device");
    /// The iPhone family.
    pub const PHONE: Self = Self::from_static("com.apple.iphone");
    /// The iPad family.
    pub const PAD: Self = Self::from_static("com.apple.ipad");
    /// The Apple Watch family.
    pub const WATCH: Self = Self::from_static("com.apple.watch");
    /// The Apple TV family.
    pub const TV: Self = Self::from_static("com.apple.apple-tv");

    /// Model used when nothing better is known about a phone.
    pub const DEFAULT_IPHONE: Self = Self::from_static("com.apple.iphone-11-1");
    /// Model used for simulators whose name mentions "iPad".
    pub const DEFAULT_IPAD: Self = Self::from_static("com.apple.ipad-pro-12point9-2");
    /// Model used for simulators whose name mentions "Watch".
    pub const DEFAULT_WATCH: Self = Self::from_static("com.apple.watch-series5-1");
    /// Model used for simulators whose name mentions "TV".
    pub const DEFAULT_TV: Self = Self::from_static("com.apple.apple-tv-4k");

    const fn from_static(raw: &'static str) -> Self {
        Self(Cow::Borrowed(raw))
    }

    /// Wraps a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Cow::Owned(raw.into()))
    }

    /// The raw reverse-DNS string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this identifier is `other` or a refinement of it.
    ///
    /// A model refines a family when its raw value continues the family's
    /// value after a `-` separator, so `com.apple.iphone-11-1` conforms to
    /// `com.apple.iphone` while `com.apple.ipad-air-4` does not. Every
    /// member of a known family also conforms to [`Self::ANY_DEVICE`].
    pub fn conforms_to(&self, other: &TypeIdentifier) -> bool {
        if self == other {
            return true;
        }
        if *other == Self::ANY_DEVICE {
            return self.family().is_some();
        }
        self.as_str()
            .strip_prefix(other.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    }

    /// The device family this identifier belongs to, if any.
    pub fn family(&self) -> Option<&'static TypeIdentifier> {
        FAMILIES.iter().find(|family| self.conforms_to(family))
    }

    /// Resolves the icon shown for devices of this type.
    pub fn icon(&self) -> Icon {
        let symbol = match self.family() {
            Some(family) if *family == Self::PAD => "ipad",
            Some(family) if *family == Self::WATCH => "applewatch",
            Some(family) if *family == Self::TV => "appletv",
            Some(_) => "iphone",
            None => Icon::FALLBACK_SYMBOL,
        };
        Icon {
            type_identifier: self.clone(),
            symbol_name: symbol,
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TypeIdentifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TypeIdentifier {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// The image shown for a simulator.
///
/// Icons are resolved from a [`TypeIdentifier`]; the UI layer turns the
/// symbol name into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Icon {
    type_identifier: TypeIdentifier,
    symbol_name: &'static str,
}

impl Icon {
    /// Symbol used for identifiers outside every known device family.
    pub const FALLBACK_SYMBOL: &'static str = "questionmark.square.dashed";

    /// The identifier this icon was resolved for.
    pub fn type_identifier(&self) -> &TypeIdentifier {
        &self.type_identifier
    }

    /// Name of the symbol image to draw.
    pub fn symbol_name(&self) -> &'static str {
        self.symbol_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conformance() {
        assert!(TypeIdentifier::PAD.conforms_to(&TypeIdentifier::PAD));
        assert!(TypeIdentifier::new("com.apple.watch").conforms_to(&TypeIdentifier::WATCH));
    }

    #[test]
    fn test_defaults_conform_to_their_family() {
        assert!(TypeIdentifier::DEFAULT_IPHONE.conforms_to(&TypeIdentifier::PHONE));
        assert!(TypeIdentifier::DEFAULT_IPAD.conforms_to(&TypeIdentifier::PAD));
        assert!(TypeIdentifier::DEFAULT_WATCH.conforms_to(&TypeIdentifier::WATCH));
        assert!(TypeIdentifier::DEFAULT_TV.conforms_to(&TypeIdentifier::TV));
    }

    #[test]
    fn test_prefix_without_separator_does_not_conform() {
        // "com.apple.iphone" is not a family prefix of "com.apple.ipad..."
        assert!(!TypeIdentifier::DEFAULT_IPAD.conforms_to(&TypeIdentifier::PHONE));
        assert!(!TypeIdentifier::new("com.apple.watchkit").conforms_to(&TypeIdentifier::WATCH));
    }

    #[test]
    fn test_families_do_not_cross() {
        assert!(!TypeIdentifier::DEFAULT_IPHONE.conforms_to(&TypeIdentifier::PAD));
        assert!(!TypeIdentifier::DEFAULT_TV.conforms_to(&TypeIdentifier::WATCH));
        assert!(!TypeIdentifier::PHONE.conforms_to(&TypeIdentifier::DEFAULT_IPHONE));
    }

    #[test]
    fn test_any_device_root() {
        assert!(TypeIdentifier::DEFAULT_WATCH.conforms_to(&TypeIdentifier::ANY_DEVICE));
        assert!(TypeIdentifier::TV.conforms_to(&TypeIdentifier::ANY_DEVICE));
        assert!(TypeIdentifier::ANY_DEVICE.conforms_to(&TypeIdentifier::ANY_DEVICE));
        assert!(!TypeIdentifier::new("public.png").conforms_to(&TypeIdentifier::ANY_DEVICE));
    }

    #[test]
    fn test_family_lookup() {
        assert_eq!(
            TypeIdentifier::new("com.apple.apple-tv-4k-3").family(),
            Some(&TypeIdentifier::TV)
        );
        assert_eq!(TypeIdentifier::new("org.example.toaster").family(), None);
    }

    #[test]
    fn test_icon_symbols() {
        assert_eq!(TypeIdentifier::DEFAULT_IPHONE.icon().symbol_name(), "iphone");
        assert_eq!(TypeIdentifier::DEFAULT_IPAD.icon().symbol_name(), "ipad");
        assert_eq!(TypeIdentifier::DEFAULT_WATCH.icon().symbol_name(), "applewatch");
        assert_eq!(TypeIdentifier::DEFAULT_TV.icon().symbol_name(), "appletv");
        assert_eq!(
            TypeIdentifier::new("org.example.toaster").icon().symbol_name(),
            Icon::FALLBACK_SYMBOL
        );
    }

    #[test]
    fn test_icon_remembers_identifier() {
        let model = TypeIdentifier::new("com.apple.iphone-13-pro-1");
        assert_eq!(model.icon().type_identifier(), &model);
    }

    #[test]
    fn test_borrowed_and_owned_compare_equal() {
        assert_eq!(TypeIdentifier::new("com.apple.ipad"), TypeIdentifier::PAD);
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&TypeIdentifier::DEFAULT_TV).unwrap();
        assert_eq!(json, "\"com.apple.apple-tv-4k\"");
        let parsed: TypeIdentifier = serde_json::from_str("\"com.apple.watch-series7-1\"").unwrap();
        assert!(parsed.conforms_to(&TypeIdentifier::WATCH));
    }
}
