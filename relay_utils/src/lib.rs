use std::sync::LazyLock;

mod macros;

/// Returns the version of the contact relay, including the abbreviated git
/// commit when `RELAY_GIT_COMMIT` was set at build time.
pub fn relay_version() -> &'static str {
    static VERSION: LazyLock<String> = LazyLock::new(|| match option_env!("RELAY_GIT_COMMIT") {
        Some(commit) if !commit.is_empty() => format!(
            "{}-{}",
            env!("CARGO_PKG_VERSION"),
            commit.get(..7).unwrap_or(commit)
        ),
        _ => env!("CARGO_PKG_VERSION").into(),
    });

    &VERSION
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use relay_utils::Apply;
    /// fn add_option(a: i32, b: Option<i32>) -> i32 {
    ///     a.apply_map(b, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(add_option(1, None), 1);
    /// assert_eq!(add_option(1, Some(2)), 3);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
