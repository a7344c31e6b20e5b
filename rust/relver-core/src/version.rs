//! Version value type and pre-release staging.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

// ---------------------------------------------------------------------------
// PreReleaseKind
// ---------------------------------------------------------------------------

/// Pre-release stage of a [`Version`].
///
/// The discriminant is the stage's rank: a higher ordinal is a later stage
/// in the release pipeline. `None` deliberately ranks lowest, so an
/// untagged build compares as an earlier stage than any tagged one.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum PreReleaseKind {
    /// Untagged build; renders with no suffix at all.
    #[default]
    #[strum(serialize = "")]
    None = 0,
    /// `dev` builds, the earliest tagged stage.
    #[strum(serialize = "dev")]
    Development = 1,
    #[strum(serialize = "alpha")]
    Alpha = 2,
    /// The canonical token is spelled `betha`; the spelling is part of the
    /// wire vocabulary and must not be "corrected".
    #[strum(serialize = "betha")]
    Betha = 3,
    #[strum(serialize = "rc")]
    ReleaseCandidate = 4,
}

impl PreReleaseKind {
    /// Rank used when comparing two kinds.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical tag text, without the leading `-`. Empty for `None`.
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Exact, case-sensitive lookup over the closed tag vocabulary.
    /// Anything unrecognized maps to `None`.
    pub fn from_token(token: &str) -> Self {
        Self::from_str(token).unwrap_or(Self::None)
    }
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// A release version: `major.minor.patch` plus an optional pre-release
/// stage and stage number.
///
/// Plain value type — copied freely, compared by value, no identity beyond
/// its fields. `pre_release_version` is meaningful only while `pre_release`
/// is tagged; with [`PreReleaseKind::None`] it is carried but never
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub pre_release: PreReleaseKind,
    pub pre_release_version: u16,
}

impl Version {
    /// Version with no pre-release tag.
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: PreReleaseKind::None,
            pre_release_version: 0,
        }
    }

    /// Completes construction with a pre-release stage.
    pub const fn with_pre_release(
        mut self,
        pre_release: PreReleaseKind,
        pre_release_version: u16,
    ) -> Self {
        self.pre_release = pre_release;
        self.pre_release_version = pre_release_version;
        self
    }

    /// Reassigns all five fields in one call; there is no partial-update
    /// variant.
    pub fn set(
        &mut self,
        major: u16,
        minor: u16,
        patch: u16,
        pre_release: PreReleaseKind,
        pre_release_version: u16,
    ) {
        self.major = major;
        self.minor = minor;
        self.patch = patch;
        self.pre_release = pre_release;
        self.pre_release_version = pre_release_version;
    }

    /// Whether any pre-release stage is tagged.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release != PreReleaseKind::None
    }

    /// Copy with the pre-release stage stripped.
    pub fn base(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Returns true at the first field, scanned in order major, minor,
    /// patch, pre-release rank, pre-release number, where `self` strictly
    /// exceeds `other`.
    ///
    /// This is a first-excess scan, not a lexicographic comparison: a
    /// deficit in an earlier field does not stop the scan, so `1.5.0`
    /// reports itself both newer and older than `2.0.0`. Callers depend on
    /// this historical behavior; it is also why `Version` implements
    /// neither `PartialOrd` nor `Ord`: the relation cannot back a
    /// consistent order.
    pub fn is_newer_than(&self, other: &Version) -> bool {
        if self.major > other.major {
            return true;
        }
        if self.minor > other.minor {
            return true;
        }
        if self.patch > other.patch {
            return true;
        }
        if self.pre_release > other.pre_release {
            return true;
        }
        if self.pre_release_version > other.pre_release_version {
            return true;
        }
        false
    }

    /// Mirror of [`is_newer_than`](Self::is_newer_than): returns true at
    /// the first field where `self` falls strictly below `other`.
    pub fn is_older_than(&self, other: &Version) -> bool {
        if self.major < other.major {
            return true;
        }
        if self.minor < other.minor {
            return true;
        }
        if self.patch < other.patch {
            return true;
        }
        if self.pre_release < other.pre_release {
            return true;
        }
        if self.pre_release_version < other.pre_release_version {
            return true;
        }
        false
    }
}

impl Default for Version {
    /// Historical baseline: a fresh version is `0.1.0`, not `0.0.0`.
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
