//! Typed access to configuration from environment variables.

use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};

/// Parse the env var `varname` as a `T`. Unset gives `None`, set but
/// unparseable gives an error naming the variable.
pub fn opt_get_env<T: FromStr>(varname: &str) -> Result<Option<T>>
    where T::Err: Display
{
    match env::var(varname) {
        Ok(s) => {
            Ok(Some(s.parse().map_err(
                |e| anyhow!("could not parse {varname:?} env var with contents {s:?}: {e}"))?))
        },
        Err(e) => match e {
            env::VarError::NotPresent => Ok(None),
            env::VarError::NotUnicode(_) => bail!("could not decode {varname:?} env var: {e}")
        }
    }
}

/// Like `opt_get_env` but accepting the usual spellings of yes and
/// no (`1`, `on`, `yes`, `0`, `off`, `no`, ...). Unset means false.
pub fn get_env_bool(varname: &str) -> Result<bool> {
    match opt_get_env::<String>(varname)? {
        None => Ok(false),
        Some(s) => parse_bool(&s).ok_or_else(
            || anyhow!("could not parse {varname:?} env var with contents {s:?} \
                        as a boolean")),
    }
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "" | "off" | "false" | "no" => Some(false),
        _ => None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_parse_bool() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool(" 1 "), Some(true));
        assert_eq!(parse_bool(""), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn t_opt_get_env() {
        // Names unique to this test, the environment is process global.
        env::set_var("CHJ_UTIL_TEST_NUM", "42");
        env::set_var("CHJ_UTIL_TEST_BAD", "4x2");
        assert_eq!(opt_get_env::<u32>("CHJ_UTIL_TEST_NUM").unwrap(), Some(42));
        assert!(opt_get_env::<u32>("CHJ_UTIL_TEST_BAD").is_err());
        assert_eq!(opt_get_env::<u32>("CHJ_UTIL_TEST_UNSET").unwrap(), None);
        assert!(!get_env_bool("CHJ_UTIL_TEST_UNSET").unwrap());
        assert!(get_env_bool("CHJ_UTIL_TEST_BAD").is_err());
    }
}
