//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error body with matching status and message
pub fn assert_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Full response: {json}"
    );
    assert_eq!(json["error"].as_str(), Some(message), "Full response: {json}");
}

/// Assert a successful render with the expected shape
pub fn assert_rendered(response: &TestResponse, width: usize, height: usize) -> Vec<String> {
    assert_ok(response);
    let rows = response.rows();
    assert_eq!(rows.len(), height, "row count");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {i} width");
        assert!(
            row.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)),
            "row {i} has non-braille characters: {row:?}"
        );
    }
    rows
}
