//! Render settings, loadable from JSON or the environment.

use chj_util::env::{opt_get_env, parse_bool};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::ComponentId;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for env var {var}: {message}")]
    Env { var: &'static str, value: String, message: String },
}

/// How component markup and selectors are tied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeScheme {
    /// `<p data-cID>` and `p[data-cID]`
    #[default]
    DataAttribute,
    /// `<p lang="x-ID">` and `p:lang(x-ID)`. Elements carrying their
    /// own `lang` attribute inside a component get a second one and
    /// their scoped styles no longer apply; this is logged as a
    /// warning.
    Lang,
}

impl ScopeScheme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data-attribute" | "data" => Some(ScopeScheme::DataAttribute),
            "lang" => Some(ScopeScheme::Lang),
            _ => None
        }
    }

    /// The marker added to every tag inside a component.
    pub fn attribute(self, id: &ComponentId) -> String {
        match self {
            ScopeScheme::DataAttribute => format!("data-c{id}"),
            ScopeScheme::Lang => format!("lang=\"x-{id}\""),
        }
    }

    /// The suffix added to every selector in a component's styles.
    pub fn selector_suffix(self, id: &ComponentId) -> String {
        match self {
            ScopeScheme::DataAttribute => format!("[data-c{id}]"),
            ScopeScheme::Lang => format!(":lang(x-{id})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub initial_buffer_capacity: usize,
    pub scope_scheme: ScopeScheme,
    /// HTML-escape text and attribute values, except within raw text
    /// elements like `script` and `style`.
    pub escape_text: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            initial_buffer_capacity: 4096,
            scope_scheme: ScopeScheme::DataAttribute,
            escape_text: false,
        }
    }
}

fn env_error(var: &'static str, value: String, message: impl ToString) -> SettingsError {
    SettingsError::Env { var, value, message: message.to_string() }
}

fn get_env(var: &'static str) -> Result<Option<String>, SettingsError> {
    opt_get_env::<String>(var).map_err(|e| env_error(var, String::new(), e))
}

impl RenderSettings {
    pub fn from_json(s: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(s)?)
    }

    /// The defaults, overridden by `COMPHTML_SCOPE_SCHEME`,
    /// `COMPHTML_BUFFER_CAPACITY` and `COMPHTML_ESCAPE_TEXT` where set.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut settings = RenderSettings::default();
        if let Some(v) = get_env("COMPHTML_SCOPE_SCHEME")? {
            settings.scope_scheme = ScopeScheme::parse(v.trim()).ok_or_else(
                || env_error("COMPHTML_SCOPE_SCHEME", v.clone(),
                             "expecting \"data-attribute\" or \"lang\""))?;
        }
        if let Some(v) = get_env("COMPHTML_BUFFER_CAPACITY")? {
            settings.initial_buffer_capacity = v.trim().parse().map_err(
                |e| env_error("COMPHTML_BUFFER_CAPACITY", v.clone(), e))?;
        }
        if let Some(v) = get_env("COMPHTML_ESCAPE_TEXT")? {
            settings.escape_text = parse_bool(&v).ok_or_else(
                || env_error("COMPHTML_ESCAPE_TEXT", v.clone(), "expecting a boolean"))?;
        }
        Ok(settings)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_json() {
        assert_eq!(RenderSettings::from_json("{}").unwrap(), RenderSettings::default());
        let s = RenderSettings::from_json(
            r#"{"scope_scheme": "lang", "escape_text": true}"#).unwrap();
        assert_eq!(s.scope_scheme, ScopeScheme::Lang);
        assert!(s.escape_text);
        assert_eq!(s.initial_buffer_capacity, 4096);
        assert!(matches!(RenderSettings::from_json(r#"{"scope_scheme": "css"}"#),
                         Err(SettingsError::Json(_))));
    }

    #[test]
    fn t_env() {
        // The only test touching these variables.
        std::env::set_var("COMPHTML_SCOPE_SCHEME", "lang");
        std::env::set_var("COMPHTML_BUFFER_CAPACITY", "128");
        std::env::set_var("COMPHTML_ESCAPE_TEXT", "yes");
        let s = RenderSettings::from_env().unwrap();
        assert_eq!(s, RenderSettings {
            initial_buffer_capacity: 128,
            scope_scheme: ScopeScheme::Lang,
            escape_text: true,
        });
        std::env::set_var("COMPHTML_BUFFER_CAPACITY", "lots");
        let e = RenderSettings::from_env().unwrap_err();
        assert!(e.to_string().contains("COMPHTML_BUFFER_CAPACITY"));
        std::env::remove_var("COMPHTML_SCOPE_SCHEME");
        std::env::remove_var("COMPHTML_BUFFER_CAPACITY");
        std::env::remove_var("COMPHTML_ESCAPE_TEXT");
    }

    #[test]
    fn t_markers() {
        let id = ComponentId::named("card");
        assert_eq!(ScopeScheme::DataAttribute.attribute(&id), "data-ccard");
        assert_eq!(ScopeScheme::DataAttribute.selector_suffix(&id), "[data-ccard]");
        assert_eq!(ScopeScheme::Lang.attribute(&id), "lang=\"x-card\"");
        assert_eq!(ScopeScheme::Lang.selector_suffix(&id), ":lang(x-card)");
    }
}
