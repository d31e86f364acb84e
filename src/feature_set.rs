//! Selection of feature codes by named subset.

use std::fmt;
use bitflags::bitflags;
use crate::commands::FeatureCode;
use crate::features::{self, FeatureDescriptor, ResolvedFeature, SpecGroups, Subsets, VcpFlags};
use crate::version::VersionSpec;

bitflags! {
    /// Options applied while building a [`FeatureSet`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FeatureSetFlags: u8 {
        /// Keep features undefined or deprecated in the version
        const SHOW_UNSUPPORTED = 0x01;
        /// Drop table features
        const NO_TABLE = 0x02;
        /// Only read-write features
        const RW_ONLY = 0x04;
        /// Only read-only features
        const RO_ONLY = 0x08;
        /// Only write-only features
        const WO_ONLY = 0x10;
        /// Synthesize metadata for an unknown single feature
        const FORCE = 0x20;
    }
}

/// A named group of feature codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeatureSubset {
    /// Color profile features
    Profile,
    /// Color features
    Color,
    /// Lookup table features
    Lut,
    /// CRT only features
    Crt,
    /// TV features
    Tv,
    /// Audio features
    Audio,
    /// Window features
    Window,
    /// DPVL features
    Dpvl,
    /// Every code from 0x00 to 0xFF
    Scan,
    /// Every known feature
    All,
    /// Known features, to be filtered by what the display reports
    Supported,
    /// Every known feature
    Known,
    /// Preset features
    Preset,
    /// Manufacturer codes 0xE0 to 0xFF
    Mfg,
    /// Table features of the version
    Table,
    /// One feature code
    SingleFeature(FeatureCode),
}

impl FeatureSubset {
    /// The corresponding subset flag.
    pub fn flag(&self) -> Subsets {
        match *self {
            FeatureSubset::Profile => Subsets::PROFILE,
            FeatureSubset::Color => Subsets::COLOR,
            FeatureSubset::Lut => Subsets::LUT,
            FeatureSubset::Crt => Subsets::CRT,
            FeatureSubset::Tv => Subsets::TV,
            FeatureSubset::Audio => Subsets::AUDIO,
            FeatureSubset::Window => Subsets::WINDOW,
            FeatureSubset::Dpvl => Subsets::DPVL,
            FeatureSubset::Scan => Subsets::SCAN,
            FeatureSubset::All => Subsets::ALL,
            FeatureSubset::Supported => Subsets::SUPPORTED,
            FeatureSubset::Known => Subsets::KNOWN,
            FeatureSubset::Preset => Subsets::PRESET,
            FeatureSubset::Mfg => Subsets::MFG,
            FeatureSubset::Table => Subsets::TABLE,
            FeatureSubset::SingleFeature(_) => Subsets::SINGLE_FEATURE,
        }
    }

    fn name(&self) -> &'static str {
        match *self {
            FeatureSubset::Profile => "PROFILE",
            FeatureSubset::Color => "COLOR",
            FeatureSubset::Lut => "LUT",
            FeatureSubset::Crt => "CRT",
            FeatureSubset::Tv => "TV",
            FeatureSubset::Audio => "AUDIO",
            FeatureSubset::Window => "WINDOW",
            FeatureSubset::Dpvl => "DPVL",
            FeatureSubset::Scan => "SCAN",
            FeatureSubset::All => "ALL",
            FeatureSubset::Supported => "SUPPORTED",
            FeatureSubset::Known => "KNOWN",
            FeatureSubset::Preset => "PRESET",
            FeatureSubset::Mfg => "MFG",
            FeatureSubset::Table => "TABLE",
            FeatureSubset::SingleFeature(_) => "SINGLE_FEATURE",
        }
    }
}

impl fmt::Display for FeatureSubset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FeatureSubset::SingleFeature(code) => write!(f, "{}(0x{:02x})", self.name(), code),
            _ => f.write_str(self.name()),
        }
    }
}

/// An ordered list of feature descriptors selected for one MCCS version.
///
/// Synthesized descriptors are owned by the set and dropped with it.
#[derive(Clone, Debug)]
pub struct FeatureSet {
    subset: FeatureSubset,
    version: VersionSpec,
    members: Vec<FeatureDescriptor>,
}

impl FeatureSet {
    /// Builds the set of features in `subset` for `version`.
    ///
    /// `Scan` and `Mfg` cover every code in their range, synthesizing
    /// descriptors for codes without static metadata. Other subsets select
    /// from the static table.
    pub fn new(subset: FeatureSubset, version: VersionSpec, flags: FeatureSetFlags) -> Self {
        let members = match subset {
            FeatureSubset::SingleFeature(code) =>
                return FeatureSet::single(code, version, flags.contains(FeatureSetFlags::FORCE))
                    .unwrap_or_else(|| FeatureSet::empty(subset, version)),
            FeatureSubset::Scan | FeatureSubset::Mfg => {
                let start = if subset == FeatureSubset::Mfg { 0xe0 } else { 0x00 };
                (start..=0xffu8).map(FeatureDescriptor::lookup_or_dummy).collect::<Vec<_>>()
            },
            _ => features::features().iter()
                .filter(|desc| match subset {
                    FeatureSubset::Preset => desc.spec_groups.contains(SpecGroups::PRESET),
                    FeatureSubset::Table => desc.version_specific_flags(version).contains(VcpFlags::TABLE),
                    FeatureSubset::Known | FeatureSubset::All | FeatureSubset::Supported => true,
                    _ => desc.subsets.intersects(subset.flag()),
                })
                .filter(|desc| flags.contains(FeatureSetFlags::SHOW_UNSUPPORTED)
                    || !version.is_known()
                    || desc.is_supported_in_version(version)
                )
                .map(FeatureDescriptor::Static)
                .collect(),
        };

        let members = members.into_iter()
            .filter(|desc| Self::accepts(&desc.resolve_version_sensitive(version), flags))
            .collect();

        FeatureSet {
            subset: subset,
            version: version,
            members: members,
        }
    }

    /// A set holding one feature. Unknown codes yield `None` unless `force`
    /// asks for synthesized metadata.
    pub fn single(code: FeatureCode, version: VersionSpec, force: bool) -> Option<Self> {
        let desc = match features::lookup(code) {
            Some(desc) => FeatureDescriptor::Static(desc),
            None if force => FeatureDescriptor::Owned(features::dummy_for_unknown(code)),
            None => return None,
        };

        Some(FeatureSet {
            subset: FeatureSubset::SingleFeature(code),
            version: version,
            members: vec![desc],
        })
    }

    fn empty(subset: FeatureSubset, version: VersionSpec) -> Self {
        FeatureSet {
            subset: subset,
            version: version,
            members: Vec::new(),
        }
    }

    fn accepts(feature: &ResolvedFeature, flags: FeatureSetFlags) -> bool {
        if flags.contains(FeatureSetFlags::NO_TABLE) && feature.is_table() {
            return false
        }

        let access = feature.flags & (VcpFlags::RO | VcpFlags::WO | VcpFlags::RW);
        let wanted = [
            (FeatureSetFlags::RW_ONLY, VcpFlags::RW),
            (FeatureSetFlags::RO_ONLY, VcpFlags::RO),
            (FeatureSetFlags::WO_ONLY, VcpFlags::WO),
        ];
        wanted.iter()
            .filter(|&&(flag, _)| flags.contains(flag))
            .all(|&(_, required)| access.contains(required))
    }

    /// The subset this set was built from.
    pub fn subset(&self) -> FeatureSubset {
        self.subset
    }

    /// The version members are resolved for.
    pub fn version(&self) -> VersionSpec {
        self.version
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member descriptors in order.
    pub fn members(&self) -> &[FeatureDescriptor] {
        &self.members
    }

    /// Feature codes in order.
    pub fn codes(&self) -> Vec<FeatureCode> {
        self.members.iter().map(|desc| desc.code).collect()
    }

    /// Members resolved for the set's version, falling back to later
    /// versions for features newer than it.
    pub fn resolved(&self) -> impl Iterator<Item=ResolvedFeature> + '_ {
        let version = self.version;
        self.members.iter().map(move |desc| desc.resolve_version_sensitive(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_covers_every_code() {
        let set = FeatureSet::new(FeatureSubset::Scan, VersionSpec::V21, FeatureSetFlags::empty());
        assert_eq!(set.len(), 256);
        assert_eq!(set.codes(), (0..=0xffu8).collect::<Vec<_>>());
        let synthetic = set.resolved().filter(|f| f.is_synthetic()).count();
        assert_eq!(synthetic, 256 - features::features().len());
    }

    #[test]
    fn mfg_range() {
        let set = FeatureSet::new(FeatureSubset::Mfg, VersionSpec::V22, FeatureSetFlags::empty());
        assert_eq!(set.codes().first(), Some(&0xe0));
        assert_eq!(set.len(), 0x20);
        assert!(set.resolved().all(|f| f.name == Some("Manufacturer Specific")));
    }

    #[test]
    fn table_subset_depends_on_version() {
        let v30 = FeatureSet::new(FeatureSubset::Table, VersionSpec::V30, FeatureSetFlags::empty());
        let v22 = FeatureSet::new(FeatureSubset::Table, VersionSpec::V22, FeatureSetFlags::empty());
        assert!(v30.codes().contains(&0x60));
        assert!(!v22.codes().contains(&0x60));
        assert!(v22.codes().contains(&0x73));
    }

    #[test]
    fn filters() {
        let all = FeatureSet::new(FeatureSubset::Known, VersionSpec::V21, FeatureSetFlags::SHOW_UNSUPPORTED);
        assert_eq!(all.len(), features::features().len());

        let no_table = FeatureSet::new(FeatureSubset::Known, VersionSpec::V21, FeatureSetFlags::NO_TABLE);
        assert!(no_table.resolved().all(|f| !f.is_table()));
        assert!(!no_table.codes().contains(&0x73));

        let ro = FeatureSet::new(FeatureSubset::Known, VersionSpec::V21, FeatureSetFlags::RO_ONLY);
        assert!(ro.codes().contains(&0xdf));
        assert!(!ro.codes().contains(&0x10));

        let color = FeatureSet::new(FeatureSubset::Color, VersionSpec::V22, FeatureSetFlags::empty());
        assert!(color.codes().contains(&0x10));
        assert!(!color.codes().contains(&0x13));
        let color = FeatureSet::new(FeatureSubset::Color, VersionSpec::V22, FeatureSetFlags::SHOW_UNSUPPORTED);
        assert!(color.codes().contains(&0x13));
    }

    #[test]
    fn single_feature() {
        assert!(FeatureSet::single(0x0f, VersionSpec::V21, false).is_none());
        let forced = FeatureSet::single(0x0f, VersionSpec::V21, true).unwrap();
        assert!(forced.resolved().all(|f| f.is_synthetic()));

        let set = FeatureSet::new(FeatureSubset::SingleFeature(0x10), VersionSpec::V21, FeatureSetFlags::empty());
        assert_eq!(set.codes(), vec![0x10]);
        assert_eq!(set.subset().to_string(), "SINGLE_FEATURE(0x10)");
        assert!(FeatureSet::new(FeatureSubset::SingleFeature(0x0f), VersionSpec::V21, FeatureSetFlags::empty()).is_empty());
    }
}
