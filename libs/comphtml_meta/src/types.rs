//! The on-disk (JSON) representation of the element database.

use serde::{Deserialize, Serialize};

/// How the end of an element is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Closing {
    /// `<p>..</p>`
    Normal,
    /// `<img/>`, never has a closing tag.
    SelfClosing,
}

impl Default for Closing {
    fn default() -> Self {
        Closing::Normal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementEntry {
    pub tag_name: String,
    #[serde(default)]
    pub closing: Closing,
    /// Contents are emitted verbatim even when escaping is enabled
    /// (`script`, `style`).
    #[serde(default)]
    pub raw_text: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementsFile {
    pub elements: Vec<ElementEntry>,
}
