//! Cleaned up and indexed element data for fast lookup during tree
//! construction.

use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use chj_util::env::{get_env_bool, opt_get_env};
use kstring::KString;

use crate::types::{Closing, ElementEntry, ElementsFile};

// The database compiled into the binary; can be overridden at
// startup via the COMPHTML_META_DB_JSON env var.
const EMBEDDED_ELEMENTS_JSON: &str = include_str!("../data/elements.json");

#[derive(Debug)]
pub struct ElementMeta {
    pub tag_name: KString,
    pub closing: Closing,
    pub raw_text: bool,
}

impl ElementMeta {
    pub fn is_self_closing(&self) -> bool {
        self.closing == Closing::SelfClosing
    }
}

impl PartialEq for ElementMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.tag_name == other.tag_name
    }
}

impl Eq for ElementMeta {}

impl From<ElementEntry> for ElementMeta {
    fn from(e: ElementEntry) -> Self {
        ElementMeta {
            tag_name: KString::from_string(e.tag_name),
            closing: e.closing,
            raw_text: e.raw_text,
        }
    }
}

#[derive(Debug)]
pub struct MetaDb {
    pub elementmeta: HashMap<KString, ElementMeta>,
}

impl MetaDb {
    pub fn get(&self, tag_name: &str) -> Option<&ElementMeta> {
        self.elementmeta.get(tag_name)
    }

    pub fn len(&self) -> usize {
        self.elementmeta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elementmeta.is_empty()
    }
}

pub fn parse_meta_db(json: &str) -> Result<MetaDb> {
    let file: ElementsFile = serde_json::from_str(json)
        .context("parsing element database")?;
    let mut elementmeta = HashMap::with_capacity(file.elements.len());
    for entry in file.elements {
        if entry.tag_name.is_empty() {
            bail!("element database entry with empty tag_name")
        }
        let meta = ElementMeta::from(entry);
        let key = meta.tag_name.clone();
        if elementmeta.insert(key, meta).is_some() {
            bail!("duplicate element database entry")
        }
    }
    Ok(MetaDb { elementmeta })
}

pub fn read_meta_db_from_json(path: &Path) -> Result<MetaDb> {
    (|| -> Result<MetaDb> {
        let s = std::fs::read_to_string(path)?;
        parse_meta_db(&s)
    })().with_context(|| anyhow!("reading element database from {path:?}"))
}

pub fn read_meta_db() -> Result<MetaDb> {
    let debug = get_env_bool("COMPHTML_META_DEBUG")?;
    if let Some(path) = opt_get_env::<String>("COMPHTML_META_DB_JSON")? {
        if debug { log::debug!("reading meta db from {path:?}") };
        read_meta_db_from_json(path.as_ref())
    } else {
        if debug { log::debug!("reading meta db from embedded json") };
        parse_meta_db(EMBEDDED_ELEMENTS_JSON)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_embedded() {
        let db = parse_meta_db(EMBEDDED_ELEMENTS_JSON).unwrap();
        assert!(db.len() > 100);
        assert!(db.get("img").unwrap().is_self_closing());
        assert!(db.get("br").unwrap().is_self_closing());
        assert!(!db.get("div").unwrap().is_self_closing());
        assert!(db.get("script").unwrap().raw_text);
        assert!(!db.get("p").unwrap().raw_text);
        assert!(db.get("blink").is_none());
    }

    #[test]
    fn t_defaults() {
        let db = parse_meta_db(r#"{"elements": [{"tag_name": "x-widget"}]}"#).unwrap();
        let m = db.get("x-widget").unwrap();
        assert_eq!(m.closing, Closing::Normal);
        assert!(!m.raw_text);
    }

    #[test]
    fn t_invalid() {
        assert!(parse_meta_db(r#"{"elements": [{"tag_name": ""}]}"#).is_err());
        assert!(parse_meta_db(
            r#"{"elements": [{"tag_name": "a"}, {"tag_name": "a"}]}"#).is_err());
        assert!(parse_meta_db(
            r#"{"elements": [{"tag_name": "a", "closing": "sometimes"}]}"#).is_err());
    }
}
