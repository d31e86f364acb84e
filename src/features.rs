//! VCP feature metadata.
//!
//! Each feature code has a static [`VcpFeatureDescriptor`] carrying separate
//! flags, names and value tables for MCCS 2.0, 2.1, 3.0 and 2.2. Resolution
//! picks the definition for a version:
//!
//! - 3.0 and later use the 3.0 entry, 2.2 uses the 2.2 entry;
//! - when that is empty, versions at or above 2.1 (on either branch) use the 2.1 entry;
//! - otherwise the 2.0 entry applies.
//!
//! Flags, names and value tables are resolved independently, so a feature
//! may be renamed in one version while keeping its older flags.

use std::fmt;
use std::ops::Deref;
use bitflags::bitflags;
use crate::commands::{FeatureCode, VcpValue};
use crate::feature_table::FEATURES;
use crate::version::VersionSpec;
use crate::Error;

bitflags! {
    /// Version specific feature flags.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct VcpFlags: u16 {
        /// Read only
        const RO = 0x0400;
        /// Write only
        const WO = 0x0200;
        /// Read write
        const RW = 0x0100;
        /// Continuous value made of a high and low non-continuous byte
        const NC_CONT = 0x0800;
        /// Standard continuous
        const STD_CONT = 0x0080;
        /// Complex continuous
        const COMPLEX_CONT = 0x0040;
        /// Simple non-continuous, values enumerated by an SL table
        const SIMPLE_NC = 0x0020;
        /// Complex non-continuous
        const COMPLEX_NC = 0x0010;
        /// Write only non-continuous
        const WO_NC = 0x0008;
        /// Table
        const TABLE = 0x0004;
        /// Write only table
        const WO_TABLE = 0x0002;
        /// Deprecated in this version
        const DEPRECATED = 0x0001;

        /// Any readable feature
        const READABLE = Self::RO.bits() | Self::RW.bits();
        /// Any writable feature
        const WRITABLE = Self::WO.bits() | Self::RW.bits();
        /// Any continuous feature
        const CONT = Self::STD_CONT.bits() | Self::COMPLEX_CONT.bits();
        /// Any non-continuous feature
        const NC = Self::SIMPLE_NC.bits() | Self::COMPLEX_NC.bits() | Self::WO_NC.bits() | Self::NC_CONT.bits();
        /// Any table feature
        const ANY_TABLE = Self::TABLE.bits() | Self::WO_TABLE.bits();
    }
}

bitflags! {
    /// Flags that apply to a feature regardless of version.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct GlobalFlags: u8 {
        /// Generated for a code without static metadata
        const SYNTHETIC = 0x80;
    }
}

bitflags! {
    /// MCCS specification groups a feature is listed under.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SpecGroups: u16 {
        /// Preset operations
        const PRESET = 0x0080;
        /// Image adjustment
        const IMAGE = 0x0040;
        /// Display control
        const CONTROL = 0x0020;
        /// Geometry
        const GEOMETRY = 0x0010;
        /// Miscellaneous
        const MISC = 0x0008;
        /// Audio
        const AUDIO = 0x0004;
        /// DPVL
        const DPVL = 0x0002;
        /// Manufacturer specific
        const MFG = 0x0001;
        /// Window operations
        const WINDOW = 0x8000;
    }
}

bitflags! {
    /// Named feature subsets.
    ///
    /// The upper byte is stored on descriptors. The lower byte names
    /// subsets computed at selection time.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Subsets: u16 {
        /// Color profile features
        const PROFILE = 0x8000;
        /// Color features
        const COLOR = 0x4000;
        /// Lookup table features
        const LUT = 0x2000;
        /// CRT only features
        const CRT = 0x1000;
        /// TV features
        const TV = 0x0800;
        /// Audio features
        const AUDIO = 0x0400;
        /// Window features
        const WINDOW = 0x0200;
        /// DPVL features
        const DPVL = 0x0100;
        /// Every code 0x00 to 0xFF
        const SCAN = 0x0080;
        /// Every known feature
        const ALL = 0x0040;
        /// Known features reported as supported
        const SUPPORTED = 0x0020;
        /// Every known feature
        const KNOWN = 0x0010;
        /// Preset features
        const PRESET = 0x0008;
        /// Manufacturer codes 0xE0 to 0xFF
        const MFG = 0x0004;
        /// Table features
        const TABLE = 0x0002;
        /// One feature code
        const SINGLE_FEATURE = 0x0001;
    }
}

/// One named value of a simple non-continuous feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlValue {
    /// SL byte
    pub value: u8,
    /// Human readable meaning
    pub name: &'static str,
}

/// Value table of a simple non-continuous feature.
pub type SlValues = &'static [SlValue];

/// Looks up the name of an SL value.
pub fn sl_value_name(table: SlValues, value: u8) -> Option<&'static str> {
    table.iter().find(|v| v.value == value).map(|v| v.name)
}

/// Definition of a feature for one MCCS version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct VersionInfo {
    /// Empty when the version does not define the feature
    pub flags: VcpFlags,
    /// Name, when it differs from the previous version
    pub name: Option<&'static str>,
    /// SL value table, for simple non-continuous features
    pub sl_values: Option<SlValues>,
}

impl VersionInfo {
    /// Undefined in this version.
    pub const NONE: VersionInfo = VersionInfo {
        flags: VcpFlags::empty(),
        name: None,
        sl_values: None,
    };
}

pub(crate) const fn v(flags: VcpFlags, name: Option<&'static str>, sl_values: Option<SlValues>) -> VersionInfo {
    VersionInfo {
        flags: flags,
        name: name,
        sl_values: sl_values,
    }
}

/// Static metadata of a VCP feature code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VcpFeatureDescriptor {
    /// Feature code
    pub code: FeatureCode,
    /// Description of the feature
    pub description: &'static str,
    /// Version independent flags
    pub global_flags: GlobalFlags,
    /// Specification groups
    pub spec_groups: SpecGroups,
    /// Subsets the feature belongs to
    pub subsets: Subsets,
    /// MCCS 2.0
    pub v20: VersionInfo,
    /// MCCS 2.1
    pub v21: VersionInfo,
    /// MCCS 3.0
    pub v30: VersionInfo,
    /// MCCS 2.2
    pub v22: VersionInfo,
    /// Formatter for complex values, raw bytes when unset
    pub format: Option<ValueFormat>,
}

/// How a feature value is rendered for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// Current and maximum value of a standard continuous feature
    Continuous,
    /// Name of the SL byte from the feature's value table
    SlLookup,
    /// The SL byte in hex
    SlByte,
    /// SH and SL as one 16 bit integer
    Ushort,
    /// All four value bytes
    DebugBytes,
    /// MCCS version in SH and SL
    MccsVersion,
    /// Table bytes in hex
    TableBytes,
}

impl ValueFormat {
    /// Picks the formatter for a feature's flags in one version. Complex
    /// features use the descriptor's `custom` formatter.
    pub fn for_flags(flags: VcpFlags, custom: Option<ValueFormat>) -> Self {
        if flags.intersects(VcpFlags::ANY_TABLE) {
            ValueFormat::TableBytes
        } else if flags.contains(VcpFlags::STD_CONT) {
            ValueFormat::Continuous
        } else if flags.contains(VcpFlags::SIMPLE_NC) {
            ValueFormat::SlLookup
        } else {
            custom.unwrap_or(ValueFormat::DebugBytes)
        }
    }
}

/// The resolved view of a feature for one MCCS version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFeature {
    /// Feature code
    pub code: FeatureCode,
    /// Flags for the version, empty if undefined
    pub flags: VcpFlags,
    /// Name for the version
    pub name: Option<&'static str>,
    /// SL values for the version
    pub sl_values: Option<SlValues>,
    /// Version independent flags
    pub global_flags: GlobalFlags,
    /// Value formatter for the version
    pub format: ValueFormat,
}

impl ResolvedFeature {
    /// Whether the feature can be read.
    pub fn is_readable(&self) -> bool {
        self.flags.intersects(VcpFlags::READABLE)
    }

    /// Whether the feature can be written.
    pub fn is_writable(&self) -> bool {
        self.flags.intersects(VcpFlags::WRITABLE)
    }

    /// Whether values are transferred as tables.
    pub fn is_table(&self) -> bool {
        self.flags.intersects(VcpFlags::ANY_TABLE)
    }

    /// Continuous value.
    pub fn is_continuous(&self) -> bool {
        self.flags.intersects(VcpFlags::CONT)
    }

    /// Non-continuous value.
    pub fn is_non_continuous(&self) -> bool {
        self.flags.intersects(VcpFlags::NC)
    }

    /// Deprecated in the resolved version.
    pub fn is_deprecated(&self) -> bool {
        self.flags.contains(VcpFlags::DEPRECATED)
    }

    /// Generated rather than taken from the static table.
    pub fn is_synthetic(&self) -> bool {
        self.global_flags.contains(GlobalFlags::SYNTHETIC)
    }

    /// Name of an SL value, if the feature has a value table.
    pub fn sl_value_name(&self, value: u8) -> Option<&'static str> {
        self.sl_values.and_then(|table| sl_value_name(table, value))
    }

    /// Renders a value read from the display.
    ///
    /// A value whose shape does not match the formatter, such as a table
    /// read for a feature that is non-table in this version, is shown as
    /// raw bytes.
    pub fn format_value(&self, value: &VcpValue) -> String {
        let (mh, ml, sh, sl) = match *value {
            VcpValue::Table(ref data) => return hex_bytes(data),
            VcpValue::NonTable { mh, ml, sh, sl } => (mh, ml, sh, sl),
        };
        let current = ((sh as u16) << 8) | sl as u16;
        match self.format {
            ValueFormat::Continuous => {
                let maximum = ((mh as u16) << 8) | ml as u16;
                format!("current value = {:5}, max value = {:5}", current, maximum)
            },
            ValueFormat::SlLookup =>
                format!("{} (sl=0x{:02x})", self.sl_value_name(sl).unwrap_or("Unrecognized value"), sl),
            ValueFormat::SlByte => format!("Value: 0x{:02x}", sl),
            ValueFormat::Ushort => format!("{:5} (0x{:04x})", current, current),
            ValueFormat::MccsVersion => {
                let version = VersionSpec::from_vcp_value(sh, sl);
                format!("{}.{}", version.major, version.minor)
            },
            ValueFormat::DebugBytes | ValueFormat::TableBytes =>
                format!("mh=0x{:02x}, ml=0x{:02x}, sh=0x{:02x}, sl=0x{:02x}", mh, ml, sh, sl),
        }
    }
}

fn hex_bytes(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ResolvedFeature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VCP {:02X} ({})", self.code, self.name.unwrap_or("unnamed"))
    }
}

/// Picks the value defined for `version`, falling back through 2.1 and 2.0.
fn specific<T, F: Fn(&VersionInfo) -> Option<T>>(desc: &VcpFeatureDescriptor, version: VersionSpec, get: F) -> Option<T> {
    let branch = if version.selects_v30() {
        get(&desc.v30)
    } else if version.selects_v22() {
        get(&desc.v22)
    } else {
        None
    };

    branch
        .or_else(|| if version.includes_v21() { get(&desc.v21) } else { None })
        .or_else(|| get(&desc.v20))
}

/// As [`specific`], then tries 2.1, 3.0 and 2.2 for versions older than the
/// first one defining the value.
fn sensitive<T, F: Fn(&VersionInfo) -> Option<T>>(desc: &VcpFeatureDescriptor, version: VersionSpec, get: F) -> Option<T> {
    specific(desc, version, &get)
        .or_else(|| get(&desc.v21))
        .or_else(|| get(&desc.v30))
        .or_else(|| get(&desc.v22))
}

fn flags_of(info: &VersionInfo) -> Option<VcpFlags> {
    if info.flags.is_empty() { None } else { Some(info.flags) }
}

fn name_of(info: &VersionInfo) -> Option<&'static str> {
    info.name
}

fn sl_of(info: &VersionInfo) -> Option<SlValues> {
    info.sl_values
}

impl VcpFeatureDescriptor {
    /// A descriptor with nothing defined.
    pub const EMPTY: VcpFeatureDescriptor = VcpFeatureDescriptor {
        code: 0,
        description: "",
        global_flags: GlobalFlags::empty(),
        spec_groups: SpecGroups::empty(),
        subsets: Subsets::empty(),
        v20: VersionInfo::NONE,
        v21: VersionInfo::NONE,
        v30: VersionInfo::NONE,
        v22: VersionInfo::NONE,
        format: None,
    };

    /// Flags defined for exactly `version`, empty if the feature is undefined there.
    pub fn version_specific_flags(&self, version: VersionSpec) -> VcpFlags {
        specific(self, version, flags_of).unwrap_or(VcpFlags::empty())
    }

    /// Flags for `version`, or for the first version defining the feature
    /// when `version` predates it.
    pub fn version_sensitive_flags(&self, version: VersionSpec) -> VcpFlags {
        sensitive(self, version, flags_of).unwrap_or(VcpFlags::empty())
    }

    /// Name defined for `version`.
    pub fn version_specific_name(&self, version: VersionSpec) -> Option<&'static str> {
        specific(self, version, name_of)
    }

    /// Name for `version` with fallback to later versions.
    pub fn version_sensitive_name(&self, version: VersionSpec) -> Option<&'static str> {
        sensitive(self, version, name_of)
    }

    /// A generic name, as resolved for MCCS 2.2.
    pub fn non_version_specific_name(&self) -> Option<&'static str> {
        self.version_sensitive_name(VersionSpec::V22)
    }

    /// SL value table defined for `version`.
    pub fn version_specific_sl_values(&self, version: VersionSpec) -> Option<SlValues> {
        specific(self, version, sl_of)
    }

    /// SL value table for `version` with fallback to later versions.
    pub fn version_sensitive_sl_values(&self, version: VersionSpec) -> Option<SlValues> {
        sensitive(self, version, sl_of)
    }

    /// Value formatter for exactly `version`.
    pub fn version_specific_format(&self, version: VersionSpec) -> ValueFormat {
        ValueFormat::for_flags(self.version_specific_flags(version), self.format)
    }

    /// Value formatter for `version` with fallback to later versions.
    pub fn version_sensitive_format(&self, version: VersionSpec) -> ValueFormat {
        ValueFormat::for_flags(self.version_sensitive_flags(version), self.format)
    }

    /// Defined and not deprecated in `version`.
    pub fn is_supported_in_version(&self, version: VersionSpec) -> bool {
        let flags = self.version_specific_flags(version);
        !flags.is_empty() && !flags.contains(VcpFlags::DEPRECATED)
    }

    /// More than one version defines flags for this feature.
    pub fn has_version_specific_features(&self) -> bool {
        [&self.v20, &self.v21, &self.v30, &self.v22].iter()
            .filter(|info| !info.flags.is_empty())
            .count() > 1
    }

    /// The newest version in which the feature is not deprecated, checking
    /// 2.2, 3.0, 2.1 and 2.0 in that order.
    pub fn highest_non_deprecated_version(&self) -> Option<VersionSpec> {
        let candidates = [
            (&self.v22, VersionSpec::V22),
            (&self.v30, VersionSpec::V30),
            (&self.v21, VersionSpec::V21),
            (&self.v20, VersionSpec::V20),
        ];
        candidates.iter()
            .find(|&&(info, _)| !info.flags.is_empty() && !info.flags.contains(VcpFlags::DEPRECATED))
            .map(|&(_, version)| version)
    }

    /// Table in some versions and non-table in others.
    pub fn is_version_conditional_type(&self) -> bool {
        let all = self.v20.flags | self.v21.flags | self.v30.flags | self.v22.flags;
        all.intersects(VcpFlags::CONT | VcpFlags::NC) && all.contains(VcpFlags::TABLE)
    }

    /// Generated rather than taken from the static table.
    pub fn is_synthetic(&self) -> bool {
        self.global_flags.contains(GlobalFlags::SYNTHETIC)
    }

    /// Resolves flags, name and SL values for `version` without fallback to
    /// later versions.
    pub fn resolve(&self, version: VersionSpec) -> ResolvedFeature {
        ResolvedFeature {
            code: self.code,
            flags: self.version_specific_flags(version),
            name: self.version_specific_name(version),
            sl_values: self.version_specific_sl_values(version),
            global_flags: self.global_flags,
            format: self.version_specific_format(version),
        }
    }

    /// Resolves for `version`, falling back to 2.1, 3.0 then 2.2 for parts
    /// undefined at that version.
    pub fn resolve_version_sensitive(&self, version: VersionSpec) -> ResolvedFeature {
        ResolvedFeature {
            code: self.code,
            flags: self.version_sensitive_flags(version),
            name: self.version_sensitive_name(version),
            sl_values: self.version_sensitive_sl_values(version),
            global_flags: self.global_flags,
            format: self.version_sensitive_format(version),
        }
    }
}

/// Resolves a descriptor for a version.
pub fn resolve_for_version(descriptor: &VcpFeatureDescriptor, version: VersionSpec) -> ResolvedFeature {
    descriptor.resolve(version)
}

/// Looks up the static metadata for a feature code.
pub fn lookup(code: FeatureCode) -> Option<&'static VcpFeatureDescriptor> {
    FEATURES.binary_search_by_key(&code, |desc| desc.code).ok()
        .map(|idx| &FEATURES[idx])
}

/// All statically known features, ordered by code.
pub fn features() -> &'static [VcpFeatureDescriptor] {
    FEATURES
}

fn dummy_name(code: FeatureCode) -> &'static str {
    if code >= 0xe0 { "Manufacturer Specific" } else { "Unknown feature" }
}

/// Synthesizes a read-write complex non-continuous descriptor for a code
/// without static metadata.
pub fn dummy_for_unknown(code: FeatureCode) -> Box<VcpFeatureDescriptor> {
    Box::new(VcpFeatureDescriptor {
        code: code,
        description: if code >= 0xe0 { "Feature code reserved for manufacturer use" } else { "Undefined feature code" },
        global_flags: GlobalFlags::SYNTHETIC,
        v20: v(VcpFlags::RW | VcpFlags::COMPLEX_NC, Some(dummy_name(code)), None),
        ..VcpFeatureDescriptor::EMPTY
    })
}

/// Synthesizes a read-write table descriptor for a code without static metadata.
pub fn dummy_table_for_unknown(code: FeatureCode) -> Box<VcpFeatureDescriptor> {
    Box::new(VcpFeatureDescriptor {
        code: code,
        description: if code >= 0xe0 { "Feature code reserved for manufacturer use" } else { "Undefined feature code" },
        global_flags: GlobalFlags::SYNTHETIC,
        v20: v(VcpFlags::RW | VcpFlags::TABLE, Some(dummy_name(code)), None),
        ..VcpFeatureDescriptor::EMPTY
    })
}

/// A feature descriptor, either from the static table or synthesized and owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureDescriptor {
    /// Entry of the static table
    Static(&'static VcpFeatureDescriptor),
    /// Synthesized for a code without static metadata
    Owned(Box<VcpFeatureDescriptor>),
}

impl FeatureDescriptor {
    /// The static entry for `code`, or a synthesized descriptor.
    pub fn lookup_or_dummy(code: FeatureCode) -> Self {
        match lookup(code) {
            Some(desc) => FeatureDescriptor::Static(desc),
            None => FeatureDescriptor::Owned(dummy_for_unknown(code)),
        }
    }

    /// The static entry for `code`, failing unless `force` allows synthesis.
    pub fn find(code: FeatureCode, force: bool) -> Result<Self, Error> {
        match lookup(code) {
            Some(desc) => Ok(FeatureDescriptor::Static(desc)),
            None if force => Ok(FeatureDescriptor::Owned(dummy_for_unknown(code))),
            None => Err(Error::UnknownFeature(code)),
        }
    }
}

impl Deref for FeatureDescriptor {
    type Target = VcpFeatureDescriptor;

    fn deref(&self) -> &Self::Target {
        match *self {
            FeatureDescriptor::Static(desc) => desc,
            FeatureDescriptor::Owned(ref desc) => desc,
        }
    }
}

/// Name of a feature code for a version, falling back to a generic
/// description for unknown codes.
pub fn feature_name(code: FeatureCode, version: VersionSpec) -> &'static str {
    match lookup(code) {
        Some(desc) => desc.version_sensitive_name(version)
            .or_else(|| desc.non_version_specific_name())
            .unwrap_or("Unnamed feature"),
        None if code >= 0xe0 => "Manufacturer specific feature",
        None => "Unrecognized feature",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(FEATURES.windows(2).all(|w| w[0].code < w[1].code));
        assert!(FEATURES.iter().all(|d| !d.v20.flags.is_empty() || !d.v21.flags.is_empty() || !d.v30.flags.is_empty() || !d.v22.flags.is_empty()));
    }

    #[test]
    fn input_source_diverges_between_branches() {
        let desc = lookup(0x60).unwrap();
        let v30 = desc.resolve(VersionSpec::V30);
        let v22 = desc.resolve(VersionSpec::V22);
        let v21 = desc.resolve(VersionSpec::V21);
        assert!(v30.is_table());
        assert!(!v22.is_table());
        assert!(v22.flags.contains(VcpFlags::SIMPLE_NC));
        assert!(v21.flags.contains(VcpFlags::SIMPLE_NC));
        assert!(desc.is_version_conditional_type());
        assert_eq!(v22.name, Some("Input Source"));
        assert_eq!(v22.sl_value_name(0x0f), Some("DisplayPort-1"));
    }

    #[test]
    fn names_and_flags_resolve_independently() {
        let desc = lookup(0x10).unwrap();
        let v30 = desc.resolve(VersionSpec::V30);
        assert_eq!(v30.name, Some("Luminosity"));
        assert_eq!(v30.flags, VcpFlags::RW | VcpFlags::STD_CONT);
        assert_eq!(desc.resolve(VersionSpec::V22).name, Some("Brightness"));
        assert!(!desc.has_version_specific_features());
    }

    #[test]
    fn version_sensitive_fallback() {
        let desc = lookup(0x13).unwrap();
        assert!(desc.version_specific_flags(VersionSpec::V20).is_empty());
        assert_eq!(desc.version_sensitive_flags(VersionSpec::V20), VcpFlags::RW | VcpFlags::COMPLEX_CONT);
        assert_eq!(desc.version_sensitive_name(VersionSpec::V20), Some("Backlight control"));
        assert!(desc.is_supported_in_version(VersionSpec::V21));
        assert!(!desc.is_supported_in_version(VersionSpec::V22));
        assert!(!desc.is_supported_in_version(VersionSpec::V20));
        assert_eq!(desc.highest_non_deprecated_version(), Some(VersionSpec::V21));
        assert!(desc.has_version_specific_features());
    }

    #[test]
    fn formatters_follow_the_version() {
        let input = lookup(0x60).unwrap();
        assert_eq!(input.resolve(VersionSpec::V30).format, ValueFormat::TableBytes);
        assert_eq!(input.resolve(VersionSpec::V22).format, ValueFormat::SlLookup);
        assert_eq!(lookup(0x10).unwrap().resolve(VersionSpec::V20).format, ValueFormat::Continuous);
        assert_eq!(lookup(0xdf).unwrap().resolve(VersionSpec::V30).format, ValueFormat::MccsVersion);
        assert_eq!(lookup(0x13).unwrap().resolve_version_sensitive(VersionSpec::V20).format, ValueFormat::DebugBytes);
        assert_eq!(FeatureDescriptor::lookup_or_dummy(0xe5).resolve(VersionSpec::V21).format, ValueFormat::DebugBytes);

        let brightness = lookup(0x10).unwrap().resolve(VersionSpec::V21);
        assert_eq!(brightness.format_value(&VcpValue::Table(vec![0xab, 0x01])), "ab 01");
        let version = lookup(0xdf).unwrap().resolve(VersionSpec::V21);
        assert_eq!(version.format_value(&VcpValue::NonTable { mh: 0, ml: 0, sh: 3, sl: 0 }), "3.0");
    }

    #[test]
    fn unknown_codes() {
        assert!(lookup(0xe5).is_none());
        assert_eq!(feature_name(0xe5, VersionSpec::V21), "Manufacturer specific feature");
        assert_eq!(feature_name(0x0f, VersionSpec::V21), "Unrecognized feature");
        assert_eq!(feature_name(0x10, VersionSpec::V30), "Luminosity");

        let dummy = FeatureDescriptor::lookup_or_dummy(0xe5);
        assert!(dummy.is_synthetic());
        let resolved = dummy.resolve(VersionSpec::V30);
        assert_eq!(resolved.name, Some("Manufacturer Specific"));
        assert!(resolved.is_readable() && resolved.is_writable() && !resolved.is_table());
        assert!(dummy_table_for_unknown(0x0f).resolve(VersionSpec::V21).is_table());

        assert!(FeatureDescriptor::find(0x0f, false).is_err());
        assert!(FeatureDescriptor::find(0x0f, true).is_ok());
        match FeatureDescriptor::find(0x10, false).unwrap() {
            FeatureDescriptor::Static(desc) => assert_eq!(desc.code, 0x10),
            other => panic!("{:?}", other),
        }
    }
}
