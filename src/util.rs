/// Numeric conversion helpers.
///
/// This module provides functions for converting between integer and
/// floating-point types without silent data loss. Conversions that can fail
/// return `Option`, so callers can degrade to null instead of erroring.
pub mod num;
/// Calendar helpers for time values.
///
/// Parses and prints ISO-8601 time stamps and performs calendar month
/// arithmetic on seconds since the epoch.
pub mod time;
