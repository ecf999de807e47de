//! Build HTML documents, with CSS scoped to components, from nested
//! constructor calls, then serialize them in one pass.
//!
//! ```
//! use comphtml::prelude::*;
//!
//! let card = |title: &'static str| {
//!     component(ComponentId::named("card"),
//!               vec![rule(".title", [color("green")])],
//!               div(h1((_class("title"), title))))
//! };
//! let page = doc(html((
//!     head(style_target()),
//!     body((card("One"), card("Two"))),
//! )));
//! assert_eq!(
//!     page.to_html_string(),
//!     "<!doctype html><html><head><style>.title[data-ccard]{color:green;}</style></head>\
//!      <body><div data-ccard><h1 class=\"title\" data-ccard>One</h1></div>\
//!      <div data-ccard><h1 class=\"title\" data-ccard>Two</h1></div></body></html>");
//! ```

pub mod arc_util;
pub mod text;
pub mod css;
pub mod node;
pub mod component;
pub mod collect;
pub mod settings;
pub mod render;
pub mod util;
pub mod elements;
pub mod attributes;
pub mod properties;

use comphtml_meta::meta::{read_meta_db, MetaDb};
use lazy_static::lazy_static;

lazy_static!{
    /// The element database; see `comphtml_meta` for overriding it
    /// via the environment.
    pub static ref METADB: MetaDb = read_meta_db().expect("element database should load");
}

pub mod prelude {
    pub use crate::{attributes::*,
                    component::{component, head_target, style_target, Component, ComponentId},
                    css::{at_nested, at_single, prop, rule, CssRule},
                    elements::*,
                    node::{att, doc, el, fragment, lazy, text, Attribute, IntoChildren,
                           IntoValues, Node},
                    properties::*,
                    render::{render, render_css, render_to_writer, Render, RenderOptions},
                    settings::{RenderSettings, ScopeScheme},
                    text::{placeholder, Text},
                    util::*};
}
