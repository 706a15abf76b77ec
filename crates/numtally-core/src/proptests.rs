//! Property-based tests for validation and summation.
