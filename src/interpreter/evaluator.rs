/// Core evaluation logic and context management.
///
/// Contains the evaluation engine, the runtime context and the checking of
/// `=>` statements.
pub mod core;
