/// The value type shared by all operators.
///
/// Defines the `Value` enum with its variants, primary time, truthiness,
/// structural equality and the partial ordering used by sorting and
/// aggregation.
pub mod core;
/// Canonical textual form of values.
///
/// Implements `Display` for `Value`. This is the stringifier the string
/// operators fall back to for anything that is not a string.
pub mod format;
