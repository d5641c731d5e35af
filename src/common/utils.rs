use alloc::borrow::Cow;

/// A value that can be read from an environment variable.
///
/// Unset, empty or unparsable variables read as `None` so the caller's default wins.
pub trait ParseFromEnv: Sized + 'static {
    type Output: From<Self>;

    fn parse_from_env(key: &str) -> Option<Self::Output>;

    #[inline]
    fn parse_from_env_or(key: &str, default: Self) -> Self::Output {
        Self::parse_from_env(key).unwrap_or_else(|| default.into())
    }
}

impl ParseFromEnv for bool {
    type Output = bool;

    #[inline]
    fn parse_from_env(key: &str) -> Option<bool> {
        let val = ::std::env::var(key).ok()?;
        let val = val.trim();
        if val.eq_ignore_ascii_case("true") || val == "1" {
            Some(true)
        } else if val.eq_ignore_ascii_case("false") || val == "0" {
            Some(false)
        } else {
            None
        }
    }
}

impl ParseFromEnv for &'static str {
    type Output = Cow<'static, str>;

    #[inline]
    fn parse_from_env(key: &str) -> Option<Cow<'static, str>> {
        let value = ::std::env::var(key).ok()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(Cow::Owned(value))
        } else {
            Some(Cow::Owned(trimmed.to_owned()))
        }
    }
}

#[inline]
pub fn parse_from_env<T: ParseFromEnv>(key: &str, default: T) -> T::Output {
    T::parse_from_env_or(key, default)
}
