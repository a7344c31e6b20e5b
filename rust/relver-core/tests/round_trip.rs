//! End-to-end coverage for `relver_core`: text round-trips across the
//! field ranges, serde round-trips, and the bounded-buffer contract as
//! seen through the public API.

use relver_core::{decode, encode, encode_into, PreReleaseKind, TextBuffer, Version, VersionText};

// ===========================================================================
// Text round-trips
// ===========================================================================

#[test]
fn round_trip_core_versions_at_range_boundaries() {
    for major in [0, 1, 255, 65535] {
        for minor in [0, 1, 65535] {
            for patch in [0, 7, 65535] {
                let v = Version::new(major, minor, patch);
                assert_eq!(decode(encode(&v).as_str()), v, "core {v}");
            }
        }
    }
}

#[test]
fn round_trip_every_tagged_kind() {
    let kinds = [
        PreReleaseKind::Development,
        PreReleaseKind::Alpha,
        PreReleaseKind::Betha,
        PreReleaseKind::ReleaseCandidate,
    ];
    for kind in kinds {
        for n in [0, 1, 65535] {
            let v = Version::new(1, 2, 3).with_pre_release(kind, n);
            assert_eq!(decode(encode(&v).as_str()), v, "tagged {v}");
        }
    }
}

#[test]
fn round_trip_default_version() {
    let v = Version::default();
    assert_eq!(encode(&v).as_str(), "0.1.0");
    assert_eq!(decode("0.1.0"), v);
}

#[test]
fn untagged_stage_number_does_not_round_trip() {
    // with kind None the stage number is never rendered, so it is lost on
    // the way through the text form
    let v = Version::new(1, 2, 3).with_pre_release(PreReleaseKind::None, 9);
    assert_eq!(decode(encode(&v).as_str()), Version::new(1, 2, 3));
}

// ===========================================================================
// Serde round-trips
// ===========================================================================

#[test]
fn serde_round_trip_preserves_all_fields() {
    let v = Version::new(3, 1, 4).with_pre_release(PreReleaseKind::Betha, 15);
    let json = serde_json::to_string(&v).expect("serialize");
    let back: Version = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, v);
}

#[test]
fn serde_kind_uses_variant_names() {
    let json = serde_json::to_string(&PreReleaseKind::ReleaseCandidate).expect("serialize");
    assert_eq!(json, "\"ReleaseCandidate\"");
}

// ===========================================================================
// Bounded-buffer contract
// ===========================================================================

#[test]
fn encode_at_exact_minimum_capacity() {
    // "1.0.0-rc" is 8 characters; 9 bytes of storage is the minimum that
    // holds it untruncated
    let v = Version::new(1, 0, 0).with_pre_release(PreReleaseKind::ReleaseCandidate, 0);
    let mut buf = TextBuffer::<9>::new();
    encode_into(&v, &mut buf);
    assert_eq!(buf.as_str(), "1.0.0-rc");
    assert_eq!(buf.storage()[8], 0);
}

#[test]
fn reused_buffer_never_leaks_previous_content() {
    let long = Version::new(65535, 65535, 65535).with_pre_release(PreReleaseKind::Betha, 65535);
    let short = Version::new(9, 9, 9);

    let mut buf = VersionText::new();
    encode_into(&long, &mut buf);
    assert_eq!(buf.as_str(), "65535.65535.65535-betha.65535");

    encode_into(&short, &mut buf);
    assert_eq!(buf.as_str(), "9.9.9");
    assert!(buf.storage()[5..].iter().all(|&b| b == 0));
}

#[test]
fn truncated_encode_still_decodes_leniently() {
    let v = Version::new(12345, 678, 9).with_pre_release(PreReleaseKind::Alpha, 2);
    let mut buf = TextBuffer::<10>::new();
    encode_into(&v, &mut buf);
    assert_eq!(buf.as_str(), "12345.678");
    // the cut text still scans as far as it goes
    assert_eq!(decode(buf.as_str()), Version::new(12345, 678, 0));
}

// ===========================================================================
// Comparison quirks visible through the public API
// ===========================================================================

#[test]
fn tagged_build_outranks_untagged_same_core() {
    // the kind ordinal ranks an untagged build lowest, so a release
    // candidate of the same core reports itself newer
    let plain = Version::new(1, 0, 0);
    let rc = Version::new(1, 0, 0).with_pre_release(PreReleaseKind::ReleaseCandidate, 1);
    assert!(rc.is_newer_than(&plain));
    assert!(plain.is_older_than(&rc));
}

#[test]
fn newer_and_older_are_not_mutually_exclusive() {
    let a = Version::new(1, 5, 0);
    let b = Version::new(2, 0, 0);
    assert!(a.is_newer_than(&b));
    assert!(a.is_older_than(&b));
}
