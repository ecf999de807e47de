//! Serialisation of trees into HTML and CSS text.

use std::{borrow::Cow, io::Write};

use anyhow::Result;
use chj_util::time_guard;

use crate::{collect::{Collected, Expansions},
            component::ComponentId,
            css::CssRule,
            node::{Attribute, CollectionKind, Node},
            settings::{RenderSettings, ScopeScheme},
            text::Text};

pub type Populator<'o> = Box<dyn Fn(&str, &str) -> String + 'o>;
pub type Sink<'o> = Box<dyn FnMut(&str, &mut String) + 'o>;

/// Per-call rendering options.
#[derive(Default)]
pub struct RenderOptions<'o> {
    populator: Option<Populator<'o>>,
    sink: Option<Sink<'o>>,
    settings: RenderSettings,
}

impl<'o> RenderOptions<'o> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the raw value of each placeholder and the name of
    /// the enclosing element (or attribute, or property); its result
    /// is emitted instead.
    pub fn populator(mut self, f: impl Fn(&str, &str) -> String + 'o) -> Self {
        self.populator = Some(Box::new(f));
        self
    }

    /// Called with every chunk of output and the render buffer,
    /// instead of appending the chunk to the buffer.
    pub fn sink(mut self, f: impl FnMut(&str, &mut String) + 'o) -> Self {
        self.sink = Some(Box::new(f));
        self
    }

    pub fn settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }
}


/// The output side of a render call.
pub struct Emitter<'o> {
    buffer: String,
    populator: Option<Populator<'o>>,
    sink: Option<Sink<'o>>,
    settings: RenderSettings,
}

impl<'o> Emitter<'o> {
    pub fn new(options: RenderOptions<'o>) -> Self {
        let RenderOptions { populator, sink, settings } = options;
        Emitter {
            buffer: String::with_capacity(settings.initial_buffer_capacity),
            populator,
            sink,
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn emit(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        match &mut self.sink {
            Some(sink) => sink(chunk, &mut self.buffer),
            None => self.buffer.push_str(chunk),
        }
    }

    /// The character data to emit for `text`, placeholders populated.
    pub fn resolve<'t>(&self, text: &'t Text<'_>, context: &str) -> Cow<'t, str> {
        match (text, &self.populator) {
            (Text::Placeholder(raw), Some(populator)) =>
                Cow::Owned(populator(&raw.view(), context)),
            _ => text.view(),
        }
    }

    /// Emit `text`, HTML-escaped if so configured and `raw` is false.
    pub fn emit_text(&mut self, text: &Text<'_>, context: &str, raw: bool) {
        let s = self.resolve(text, context);
        if self.settings.escape_text && !raw {
            let escaped = html_escape(&s);
            self.emit(&escaped);
        } else {
            self.emit(&s);
        }
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c)
        }
    }
    Cow::Owned(buf)
}


/// Things that can be rendered on their own.
pub trait Render {
    fn render_to(&self, out: &mut Emitter<'_>);

    fn to_html_string(&self) -> String {
        render(self, RenderOptions::default())
    }
}

pub fn render<T: Render + ?Sized>(thing: &T, options: RenderOptions<'_>) -> String {
    time_guard!("render");
    let mut out = Emitter::new(options);
    thing.render_to(&mut out);
    out.into_string()
}

/// Render only the styles of the components in `root`, each
/// component identity once.
pub fn render_css(root: &Node<'_>, options: RenderOptions<'_>) -> String {
    time_guard!("render_css");
    let mut out = Emitter::new(options);
    let expansions = Expansions::build(root);
    let collected = Collected::collect(root, &expansions);
    let walker = Walker { expansions: &expansions, collected: &collected };
    walker.gathered_css(&mut out);
    out.into_string()
}

/// Like `render`, but passing the output on to `writer` in chunks
/// of about the configured buffer capacity. Any sink in `options` is
/// replaced.
pub fn render_to_writer<T: Render + ?Sized>(
    thing: &T,
    writer: &mut impl Write,
    options: RenderOptions<'_>,
) -> Result<()> {
    let capacity = options.settings.initial_buffer_capacity.max(1);
    let mut error = None;
    {
        let sink = |chunk: &str, buffer: &mut String| {
            buffer.push_str(chunk);
            if buffer.len() >= capacity {
                if error.is_none() {
                    if let Err(e) = writer.write_all(buffer.as_bytes()) {
                        error = Some(e);
                    }
                }
                buffer.clear();
            }
        };
        let rest = render(thing, options.sink(sink));
        if error.is_none() {
            writer.write_all(rest.as_bytes())?;
        }
    }
    if let Some(e) = error {
        return Err(e.into());
    }
    writer.flush()?;
    Ok(())
}


struct Walker<'t, 'a> {
    expansions: &'t Expansions<'a>,
    collected: &'t Collected<'t, 'a>,
}

impl<'t, 'a> Walker<'t, 'a> {
    /// `context` is the name of the nearest enclosing element, `raw`
    /// whether that is a raw text element.
    fn node(&self,
            out: &mut Emitter<'_>,
            node: &Node<'a>,
            scope: Option<&ComponentId>,
            context: &str,
            raw: bool)
    {
        if node.emits() != CollectionKind::None {
            return;
        }
        let scope = node.component().or(scope);
        out.emit(node.prefix());

        let tag_name = node.tag_name();
        let self_closing = node.is_self_closing();
        let (context, raw) = if tag_name.is_empty() {
            (context, raw)
        } else {
            (tag_name, raw || node.options().raw_text)
        };
        if !tag_name.is_empty() {
            out.emit("<");
            out.emit(tag_name);
            for att in node.attributes() {
                out.emit(" ");
                att.render_to(out);
            }
            if let Some(id) = scope {
                let scheme = out.settings().scope_scheme;
                if scheme == ScopeScheme::Lang
                    && node.attributes().iter().any(|att| att.name() == "lang")
                {
                    log::warn!("element {tag_name:?} in component {id} has its own \
                                lang attribute, its scoped styles will not match");
                }
                let marker = scheme.attribute(id);
                out.emit(" ");
                out.emit(&marker);
            }
            if self_closing {
                if !node.children().is_empty() || node.producer().is_some() {
                    log::warn!("self-closing element {tag_name:?} has children, \
                                rendering them anyway");
                }
                out.emit("/");
            }
            out.emit(">");
        }

        out.emit_text(node.content(), context, raw);

        for child in self.expansions.children_of(node) {
            self.node(out, child, scope, context, raw);
        }

        if let Some(css) = node.css() {
            for rule in css.iter() {
                rule_to(out, rule, None);
            }
        }

        match node.gathers() {
            CollectionKind::None => (),
            CollectionKind::Css => self.gathered_css(out),
            CollectionKind::Head => {
                for &(id, head) in &self.collected.head {
                    for child in self.expansions.children_of(head) {
                        self.node(out, child, Some(id), context, raw);
                    }
                }
            }
        }

        if !self_closing && !tag_name.is_empty() {
            out.emit("</");
            out.emit(tag_name);
            out.emit(">");
        }
    }

    fn gathered_css(&self, out: &mut Emitter<'_>) {
        for &(id, css) in &self.collected.css {
            for rule in css.iter() {
                rule_to(out, rule, Some(id));
            }
        }
    }
}

fn rule_to(out: &mut Emitter<'_>, rule: &CssRule<'_>, scope: Option<&ComponentId>) {
    let label = rule.label();
    if !rule.can_nest() {
        out.emit(label);
        if !rule.selectors().is_empty() {
            out.emit(" ");
            selectors_to(out, rule, None);
        }
        let value = out.resolve(rule.value(), label);
        if !value.is_empty() {
            out.emit(":");
            out.emit(&value);
        }
        out.emit(";");
    } else {
        if rule.is_scoped_block() {
            selectors_to(out, rule, scope);
        } else {
            out.emit(label);
            if !rule.selectors().is_empty() {
                out.emit(" ");
                selectors_to(out, rule, None);
            }
        }
        out.emit("{");
        for child in rule.children() {
            rule_to(out, child, scope);
        }
        out.emit("}");
    }
}

fn selectors_to(out: &mut Emitter<'_>, rule: &CssRule<'_>, scope: Option<&ComponentId>) {
    let suffix = scope.map(|id| out.settings().scope_scheme.selector_suffix(id));
    for (i, selector) in rule.selectors().iter().enumerate() {
        if i > 0 {
            out.emit(",");
        }
        out.emit_text(selector, rule.label(), true);
        if let Some(suffix) = &suffix {
            out.emit(suffix);
        }
    }
}


impl<'a> Render for Node<'a> {
    fn render_to(&self, out: &mut Emitter<'_>) {
        let expansions = Expansions::build(self);
        let collected = if expansions.has_targets() {
            Collected::collect(self, &expansions)
        } else {
            Collected::empty()
        };
        let walker = Walker { expansions: &expansions, collected: &collected };
        walker.node(out, self, None, "", false);
    }
}

impl<'a> Render for Attribute<'a> {
    fn render_to(&self, out: &mut Emitter<'_>) {
        let name = self.name();
        out.emit(name);
        if self.values().is_empty() {
            return;
        }
        out.emit("=\"");
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                out.emit(" ");
            }
            out.emit_text(value, name, false);
        }
        out.emit("\"");
    }
}

/// Each attribute preceded by a space, as within a tag.
impl<'a> Render for [Attribute<'a>] {
    fn render_to(&self, out: &mut Emitter<'_>) {
        for att in self {
            out.emit(" ");
            att.render_to(out);
        }
    }
}

impl<'a> Render for Vec<Attribute<'a>> {
    fn render_to(&self, out: &mut Emitter<'_>) {
        self.as_slice().render_to(out)
    }
}

impl<'a> Render for CssRule<'a> {
    fn render_to(&self, out: &mut Emitter<'_>) {
        rule_to(out, self, None)
    }
}

impl<'a> Render for [CssRule<'a>] {
    fn render_to(&self, out: &mut Emitter<'_>) {
        for rule in self {
            rule_to(out, rule, None)
        }
    }
}

impl<'a> Render for Vec<CssRule<'a>> {
    fn render_to(&self, out: &mut Emitter<'_>) {
        self.as_slice().render_to(out)
    }
}
