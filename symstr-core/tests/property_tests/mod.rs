//! Property-based tests for symstr-core
//!
//! This module uses proptest to check hash-consing, the lifting protocol and
//! session rollback.

mod lift_properties;
mod session_properties;
