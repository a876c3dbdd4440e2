// Library exports for integration tests and reusable components

pub mod catalog;
pub mod config;
pub mod ygoprodeck;

// UI modules needed by the binary (hidden from docs)
#[doc(hidden)]
pub mod ui;

// Test support (only available in unit tests or with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
