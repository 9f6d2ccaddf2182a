/// Fixture-driven property tests
///
/// Each case in `fixture/uri_tests.json` names an input, creation flags and
/// the expected value of any subset of properties.
#[path = "fixture/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixture/fixture_runner.rs"]
mod fixture_runner;
