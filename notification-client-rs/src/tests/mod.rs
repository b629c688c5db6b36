//! Tests for the notification client

mod client_mock_tests;
