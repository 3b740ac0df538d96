//! Tests for favorite service
