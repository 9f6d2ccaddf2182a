#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, UriCase, load_fixture};
/// Fixture runner
///
/// Reads every property through the id-based slot API
use urimon::{CreateFlags, Property, Status, Uri};

fn property_by_name(name: &str) -> Option<Property> {
    let property = match name {
        "absolute_uri" => Property::AbsoluteUri,
        "authority" => Property::Authority,
        "display_uri" => Property::DisplayUri,
        "domain" => Property::Domain,
        "extension" => Property::Extension,
        "fragment" => Property::Fragment,
        "host" => Property::Host,
        "password" => Property::Password,
        "path" => Property::Path,
        "path_and_query" => Property::PathAndQuery,
        "query" => Property::Query,
        "raw_uri" => Property::RawUri,
        "scheme_name" => Property::SchemeName,
        "user_info" => Property::UserInfo,
        "user_name" => Property::UserName,
        "host_type" => Property::HostType,
        "port" => Property::Port,
        "scheme" => Property::Scheme,
        "zone" => Property::Zone,
        _ => return None,
    };
    Some(property)
}

fn expected_strings(case: &UriCase) -> [(Property, Option<&String>); 15] {
    [
        (Property::AbsoluteUri, case.absolute_uri.as_ref()),
        (Property::Authority, case.authority.as_ref()),
        (Property::DisplayUri, case.display_uri.as_ref()),
        (Property::Domain, case.domain.as_ref()),
        (Property::Extension, case.extension.as_ref()),
        (Property::Fragment, case.fragment.as_ref()),
        (Property::Host, case.host.as_ref()),
        (Property::Password, case.password.as_ref()),
        (Property::Path, case.path.as_ref()),
        (Property::PathAndQuery, case.path_and_query.as_ref()),
        (Property::Query, case.query.as_ref()),
        (Property::RawUri, case.raw_uri.as_ref()),
        (Property::SchemeName, case.scheme_name.as_ref()),
        (Property::UserInfo, case.user_info.as_ref()),
        (Property::UserName, case.user_name.as_ref()),
    ]
}

fn read(uri: &Uri, property: Property) -> (Status, String) {
    if property.is_string() {
        let mut value = String::new();
        let status = uri.get_property_str(property.id(), Some(&mut value)).unwrap();
        (status, value)
    } else {
        let mut value = 0;
        let status = uri.get_property_u32(property.id(), Some(&mut value)).unwrap();
        (status, value.to_string())
    }
}

/// Run fixture cases and collect every mismatch
pub fn run_fixture_tests(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UriTest(case) = test else {
            continue;
        };
        test_num += 1;
        let mut failures = Vec::new();
        let mut fail = |field: &str, expected: String, actual: String| {
            failures.push(FixtureFailure {
                test_num,
                input: case.input.clone(),
                field: field.to_string(),
                expected,
                actual,
            });
        };

        let parsed = Uri::parse(&case.input, CreateFlags::from_bits(case.flags));
        let uri = match (parsed, case.failure == Some(true)) {
            (Ok(uri), false) => uri,
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (Ok(_), true) => {
                fail("parsing", "failure".to_string(), "success".to_string());
                result.failed += 1;
                result.failures.append(&mut failures);
                continue;
            }
            (Err(err), false) => {
                fail("parsing", "success".to_string(), err.to_string());
                result.failed += 1;
                result.failures.append(&mut failures);
                continue;
            }
        };

        for (property, expected) in expected_strings(&case) {
            if let Some(expected) = expected {
                let actual = read(&uri, property);
                if actual != (Status::Ok, expected.clone()) {
                    fail(&format!("{property:?}"), expected.clone(), format!("{actual:?}"));
                }
            }
        }

        let numerics = [
            (Property::HostType, case.host_type),
            (Property::Port, case.port),
            (Property::Scheme, case.scheme),
        ];
        for (property, expected) in numerics {
            if let Some(expected) = expected {
                let actual = read(&uri, property);
                if actual != (Status::Ok, expected.to_string()) {
                    fail(&format!("{property:?}"), expected.to_string(), format!("{actual:?}"));
                }
            }
        }

        for name in &case.not_applicable {
            let Some(property) = property_by_name(name) else {
                fail("not_applicable", "a property name".to_string(), name.clone());
                continue;
            };
            let (status, value) = read(&uri, property);
            if status != Status::NotApplicable {
                fail(&format!("{property:?}"), "not applicable".to_string(), value);
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.append(&mut failures);
        }
    }

    result
}

#[test]
fn test_uri_fixture() {
    let tests = load_fixture(include_str!("./uri_tests.json"));
    let result = run_fixture_tests(tests);

    println!("\n{}", result.summary());
    for failure in &result.failures {
        println!(
            "Test #{} {:?}: {} expected {:?}, got {}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }

    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed >= 30, "fixture shrank: {}", result.summary());
}
