//! Scenario bindings for the envelope codec feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Numeric and text identifiers stay distinct"
)]
fn numeric_and_text_ids(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "A boolean identifier is rejected"
)]
fn boolean_id_rejected(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Negative identifiers are rejected by default"
)]
fn negative_id_rejected(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Negative identifiers can be kept as text"
)]
fn negative_id_stringified(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Notifications carry no identifier"
)]
fn notification_without_id(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Decoded messages re-encode to the same value"
)]
fn re_encode_round_trip(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Batches are refused"
)]
fn batches_refused(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "A missing version is accepted by the lenient check"
)]
fn lenient_missing_version(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "A missing version is rejected by the strict check"
)]
fn strict_missing_version(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/envelope_codec.feature",
    name = "Truncated input is a parse error"
)]
fn truncated_input(world: RefCell<TestWorld>) {
    drop(world);
}
