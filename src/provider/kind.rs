//! Closed sets of capability kinds and adapter types.
//!
//! Every capability kind is bound at compile time to the data category its
//! provider draws supported tags from. Nothing here is looked up by runtime
//! type name; string forms exist only for logging and the HTTP surface.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data category names understood by the base dataset.
pub mod category {
    pub const FORMAT_DATA: &str = "FormatData";
    pub const COLLATION_DATA: &str = "CollationData";
    pub const CURRENCY_NAMES: &str = "CurrencyNames";
    pub const LOCALE_NAMES: &str = "LocaleNames";
    pub const TIME_ZONE_NAMES: &str = "TimeZoneNames";
    pub const CALENDAR_DATA: &str = "CalendarData";
    /// Special category listing every installed locale.
    pub const AVAILABLE_LOCALES: &str = "AvailableLocales";

    /// Every category name above.
    pub const ALL: [&str; 7] = [
        FORMAT_DATA,
        COLLATION_DATA,
        CURRENCY_NAMES,
        LOCALE_NAMES,
        TIME_ZONE_NAMES,
        CALENDAR_DATA,
        AVAILABLE_LOCALES,
    ];

    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// A locale service capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityKind {
    BreakIterator,
    Collator,
    DateFormat,
    DateFormatSymbols,
    DecimalFormatSymbols,
    NumberFormat,
    CurrencyName,
    LocaleName,
    TimeZoneName,
    CalendarData,
    CalendarName,
    Calendar,
    DateTimePattern,
}

impl CapabilityKind {
    /// Number of kinds.
    pub const COUNT: usize = 13;

    /// Every kind, in declaration order.
    pub const ALL: [CapabilityKind; Self::COUNT] = [
        CapabilityKind::BreakIterator,
        CapabilityKind::Collator,
        CapabilityKind::DateFormat,
        CapabilityKind::DateFormatSymbols,
        CapabilityKind::DecimalFormatSymbols,
        CapabilityKind::NumberFormat,
        CapabilityKind::CurrencyName,
        CapabilityKind::LocaleName,
        CapabilityKind::TimeZoneName,
        CapabilityKind::CalendarData,
        CapabilityKind::CalendarName,
        CapabilityKind::Calendar,
        CapabilityKind::DateTimePattern,
    ];

    /// The data category whose tag set parameterizes this kind's provider.
    pub fn category(self) -> &'static str {
        match self {
            CapabilityKind::BreakIterator
            | CapabilityKind::DateFormat
            | CapabilityKind::DateFormatSymbols
            | CapabilityKind::DecimalFormatSymbols
            | CapabilityKind::NumberFormat
            | CapabilityKind::CalendarName
            | CapabilityKind::DateTimePattern => category::FORMAT_DATA,
            CapabilityKind::Collator => category::COLLATION_DATA,
            CapabilityKind::CurrencyName => category::CURRENCY_NAMES,
            CapabilityKind::LocaleName => category::LOCALE_NAMES,
            CapabilityKind::TimeZoneName => category::TIME_ZONE_NAMES,
            CapabilityKind::CalendarData | CapabilityKind::Calendar => category::CALENDAR_DATA,
        }
    }

    /// Provider interface name, e.g. `CollatorProvider`.
    pub fn provider_name(self) -> &'static str {
        match self {
            CapabilityKind::BreakIterator => "BreakIteratorProvider",
            CapabilityKind::Collator => "CollatorProvider",
            CapabilityKind::DateFormat => "DateFormatProvider",
            CapabilityKind::DateFormatSymbols => "DateFormatSymbolsProvider",
            CapabilityKind::DecimalFormatSymbols => "DecimalFormatSymbolsProvider",
            CapabilityKind::NumberFormat => "NumberFormatProvider",
            CapabilityKind::CurrencyName => "CurrencyNameProvider",
            CapabilityKind::LocaleName => "LocaleNameProvider",
            CapabilityKind::TimeZoneName => "TimeZoneNameProvider",
            CapabilityKind::CalendarData => "CalendarDataProvider",
            CapabilityKind::CalendarName => "CalendarNameProvider",
            CapabilityKind::Calendar => "CalendarProvider",
            CapabilityKind::DateTimePattern => "DateTimePatternProvider",
        }
    }

    /// Short kebab-case name, e.g. `decimal-format-symbols`.
    pub fn short_name(self) -> &'static str {
        match self {
            CapabilityKind::BreakIterator => "break-iterator",
            CapabilityKind::Collator => "collator",
            CapabilityKind::DateFormat => "date-format",
            CapabilityKind::DateFormatSymbols => "date-format-symbols",
            CapabilityKind::DecimalFormatSymbols => "decimal-format-symbols",
            CapabilityKind::NumberFormat => "number-format",
            CapabilityKind::CurrencyName => "currency-name",
            CapabilityKind::LocaleName => "locale-name",
            CapabilityKind::TimeZoneName => "time-zone-name",
            CapabilityKind::CalendarData => "calendar-data",
            CapabilityKind::CalendarName => "calendar-name",
            CapabilityKind::Calendar => "calendar",
            CapabilityKind::DateTimePattern => "date-time-pattern",
        }
    }

    /// Position in [`CapabilityKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_name())
    }
}

impl FromStr for CapabilityKind {
    type Err = RegistryError;

    /// Accepts either the provider name or the short name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapabilityKind::ALL
            .into_iter()
            .find(|kind| kind.provider_name() == s || kind.short_name() == s)
            .ok_or_else(|| RegistryError::UnknownKind(s.to_string()))
    }
}

/// The domain a registry serves. Discovered data modules declare one and are
/// only consulted by a registry of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdapterType {
    Jre,
    Cldr,
    Spi,
    Host,
    Fallback,
}

impl AdapterType {
    pub fn name(self) -> &'static str {
        match self {
            AdapterType::Jre => "JRE",
            AdapterType::Cldr => "CLDR",
            AdapterType::Spi => "SPI",
            AdapterType::Host => "HOST",
            AdapterType::Fallback => "FALLBACK",
        }
    }
}

impl fmt::Display for AdapterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdapterType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JRE" => Ok(AdapterType::Jre),
            "CLDR" => Ok(AdapterType::Cldr),
            "SPI" => Ok(AdapterType::Spi),
            "HOST" => Ok(AdapterType::Host),
            "FALLBACK" => Ok(AdapterType::Fallback),
            _ => Err(RegistryError::UnknownAdapter(s.to_string())),
        }
    }
}
