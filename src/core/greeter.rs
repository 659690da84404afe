/// The fixed greeting text. Immutable for the lifetime of the process.
pub const GREETING: &str = "Hello world!";

/// Returns the greeting.
///
/// Pure and total: no inputs, no side effects, cannot fail. The returned
/// `&'static str` may be shared across threads without synchronization.
pub fn say_hello() -> &'static str {
    GREETING
}
