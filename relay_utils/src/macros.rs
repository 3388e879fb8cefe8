/// Asserts that an expression matches a pattern, optionally followed by a
/// guard. The guarded form only borrows the value, so it can still be used
/// afterwards.
///
/// ```rust
/// # use relay_utils::assert_matches;
/// let result: Result<u8, &str> = Ok(3);
/// assert_matches!(result, Ok(_));
/// assert_matches!(result, Ok(n) if *n > 2);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(,)?) => {
        match $expr {
            $pat => (),
            ref other => ::core::panic!(
                "assertion failed: `{:?}` does not match `{}`",
                other,
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr $(,)?) => {{
        let value = &$expr;
        match value {
            $pat if $guard => (),
            _ => ::core::panic!(
                "assertion failed: `{:?}` does not match `{} if {}`",
                value,
                ::core::stringify!($pat),
                ::core::stringify!($guard)
            ),
        }
    }};
}
