//! Metainformation about HTML elements, as far as serialisation
//! needs it: whether an element has a closing tag, and whether its
//! contents are raw text.

pub mod types;
pub mod meta;
