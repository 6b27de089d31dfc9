//! Custom assertion macros
//!
//! Status assertions print the response body on failure, which is usually
//! the fastest way to see why a request was rejected.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert a response status, showing the body when it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status,
            $status,
            "unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Assert that a JSON error response carries `message`
#[macro_export]
macro_rules! assert_error_message {
    ($response:expr, $message:expr) => {
        let body: serde_json::Value = $response.json();
        assert_eq!(body["error"], $message, "error body: {}", body);
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
