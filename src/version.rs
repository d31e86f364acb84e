//! MCCS version numbers.
//!
//! MCCS versions do not form a line: 3.0 and 2.2 were published as separate
//! branches after 2.1, so neither is greater than the other.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An MCCS version as reported by a display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct VersionSpec {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
}

/// Named MCCS versions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VersionId {
    /// MCCS 1.0
    V10,
    /// MCCS 2.0
    V20,
    /// MCCS 2.1
    V21,
    /// MCCS 3.0
    V30,
    /// MCCS 2.2
    V22,
    /// Any other value
    Unknown,
}

impl VersionSpec {
    /// MCCS 1.0
    pub const V10: VersionSpec = VersionSpec::new(1, 0);
    /// MCCS 2.0
    pub const V20: VersionSpec = VersionSpec::new(2, 0);
    /// MCCS 2.1
    pub const V21: VersionSpec = VersionSpec::new(2, 1);
    /// MCCS 3.0
    pub const V30: VersionSpec = VersionSpec::new(3, 0);
    /// MCCS 2.2
    pub const V22: VersionSpec = VersionSpec::new(2, 2);
    /// The display was asked and gave no usable answer.
    pub const UNKNOWN: VersionSpec = VersionSpec::new(0, 0);
    /// The display has not been asked yet.
    pub const UNQUERIED: VersionSpec = VersionSpec::new(0xff, 0xff);

    /// Creates a version from its parts.
    pub const fn new(major: u8, minor: u8) -> Self {
        VersionSpec {
            major: major,
            minor: minor,
        }
    }

    /// Parses `"major.minor"`.
    ///
    /// Anything unparsable or beyond the published versions (major above 3 or
    /// minor above 2) yields [`VersionSpec::UNKNOWN`].
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or(VersionSpec::UNKNOWN)
    }

    /// Decodes the value of VCP feature 0xDF: major in SH, minor in SL.
    pub fn from_vcp_value(sh: u8, sl: u8) -> Self {
        VersionSpec::new(sh, sl)
    }

    /// One of the five published versions.
    pub fn id(&self) -> VersionId {
        match (self.major, self.minor) {
            (1, 0) => VersionId::V10,
            (2, 0) => VersionId::V20,
            (2, 1) => VersionId::V21,
            (3, 0) => VersionId::V30,
            (2, 2) => VersionId::V22,
            _ => VersionId::Unknown,
        }
    }

    /// Whether this is one of the five published versions.
    pub fn is_known(&self) -> bool {
        self.id() != VersionId::Unknown
    }

    /// Whether the display was never asked.
    pub fn is_unqueried(&self) -> bool {
        *self == VersionSpec::UNQUERIED
    }

    /// Whether the display was asked without a usable answer.
    pub fn is_unknown(&self) -> bool {
        *self == VersionSpec::UNKNOWN
    }

    /// 3.0 or later: resolves to 3.0 definitions.
    pub(crate) fn selects_v30(&self) -> bool {
        self.major >= 3
    }

    /// 2.2 or a later 2.x: resolves to 2.2 definitions.
    pub(crate) fn selects_v22(&self) -> bool {
        self.major == 2 && self.minor >= 2
    }

    /// At or above 2.1 on either branch: 2.1 definitions apply when the branch has none.
    pub(crate) fn includes_v21(&self) -> bool {
        self.major >= 3 || (self.major == 2 && self.minor >= 1)
    }

    /// `self <= other` in MCCS order. Returns `false` when the two are on
    /// different branches (2.2 and 3.0).
    pub fn le(&self, other: &VersionSpec) -> bool {
        match self.partial_cmp(other) {
            Some(Ordering::Less) | Some(Ordering::Equal) => true,
            _ => false,
        }
    }

    /// `self > other` in MCCS order. Returns `false` for incomparable versions.
    pub fn gt(&self, other: &VersionSpec) -> bool {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }
}

impl PartialOrd for VersionSpec {
    fn partial_cmp(&self, other: &VersionSpec) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal)
        }

        let branch = |v: &VersionSpec| if v.selects_v30() {
            Some(3)
        } else if v.selects_v22() {
            Some(2)
        } else {
            None
        };

        match (branch(self), branch(other)) {
            (Some(a), Some(b)) if a != b => None,
            _ => Some((self.major, self.minor).cmp(&(other.major, other.minor))),
        }
    }
}

/// Error returned when a version string is not `"major.minor"` within the published range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(String);

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid MCCS version: {:?}", self.0)
    }
}

impl std::error::Error for ParseVersionError { }

impl FromStr for VersionSpec {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_owned());
        let mut parts = s.trim().splitn(2, '.');
        let major = parts.next().map(str::trim).ok_or_else(err)?;
        let minor = parts.next().map(str::trim).ok_or_else(err)?;
        let major: u8 = major.parse().map_err(|_| err())?;
        let minor: u8 = minor.parse().map_err(|_| err())?;
        if major > 3 || minor > 2 {
            return Err(err())
        }

        Ok(VersionSpec::new(major, minor))
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unqueried() {
            f.write_str("Unqueried")
        } else if self.is_unknown() {
            f.write_str("Unknown")
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}
