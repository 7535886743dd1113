//! Unit tests for decoder options.

use std::str::FromStr;

use rstest::rstest;
use serde_json::json;

use super::*;

#[test]
fn defaults_are_strict() {
    let options = DecodeOptions::default();
    assert_eq!(options.negative_ids(), NegativeIdPolicy::Reject);
    assert_eq!(options.version_check(), VersionCheck::Strict);
}

#[test]
fn builders_replace_individual_policies() {
    let options = DecodeOptions::default().with_version_check(VersionCheck::Lenient);
    assert_eq!(options.negative_ids(), NegativeIdPolicy::Reject);
    assert_eq!(options.version_check(), VersionCheck::Lenient);
    assert_eq!(
        options.with_negative_ids(NegativeIdPolicy::Stringify),
        DecodeOptions::new(NegativeIdPolicy::Stringify, VersionCheck::Lenient)
    );
}

#[rstest]
#[case::reject("reject", NegativeIdPolicy::Reject)]
#[case::stringify("stringify", NegativeIdPolicy::Stringify)]
#[case::mixed_case("Stringify", NegativeIdPolicy::Stringify)]
fn negative_id_policy_parses_from_text(#[case] raw: &str, #[case] expected: NegativeIdPolicy) {
    assert_eq!(NegativeIdPolicy::from_str(raw).expect("parse"), expected);
}

#[rstest]
#[case::strict("strict", VersionCheck::Strict)]
#[case::lenient("LENIENT", VersionCheck::Lenient)]
fn version_check_parses_from_text(#[case] raw: &str, #[case] expected: VersionCheck) {
    assert_eq!(VersionCheck::from_str(raw).expect("parse"), expected);
}

#[test]
fn unknown_policy_name_fails_to_parse() {
    assert!(NegativeIdPolicy::from_str("truncate").is_err());
}

#[test]
fn display_uses_snake_case() {
    assert_eq!(NegativeIdPolicy::Stringify.to_string(), "stringify");
    assert_eq!(VersionCheck::Lenient.to_string(), "lenient");
}

#[test]
fn deserialises_partial_option_sets() {
    let options: DecodeOptions =
        serde_json::from_value(json!({ "negative_ids": "stringify" })).expect("deserialise");
    assert_eq!(
        options,
        DecodeOptions::default().with_negative_ids(NegativeIdPolicy::Stringify)
    );
}
