//! The HTML side of the tree: elements, attributes, text and the
//! conversions that let constructors take children of mixed kinds.

use std::{fmt, sync::Arc};

use kstring::KString;

use crate::{component::ComponentId, css::CssRule, text::Text, METADB};

/// Which kind of gathered content a node takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionKind {
    #[default]
    None,
    Css,
    Head,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    /// Empty for fragments and text nodes.
    pub tag_name: KString,
    /// Emitted verbatim before the tag, e.g. a doctype.
    pub prefix: KString,
    pub self_closing: bool,
    /// Content is never escaped (`script`, `style`).
    pub raw_text: bool,
    /// Collected content of this kind is spliced in here.
    pub gathers: CollectionKind,
    /// This node's content is collected instead of rendered in place.
    pub emits: CollectionKind,
}

impl TagOptions {
    pub fn fragment() -> Self {
        TagOptions {
            tag_name: KString::from_static(""),
            prefix: KString::from_static(""),
            self_closing: false,
            raw_text: false,
            gathers: CollectionKind::None,
            emits: CollectionKind::None,
        }
    }

    /// Options for the element `tag_name`, with closing behaviour
    /// taken from the element database; unknown tags get a closing
    /// tag.
    pub fn element(tag_name: KString) -> Self {
        let (self_closing, raw_text) = match METADB.get(tag_name.as_str()) {
            Some(meta) => (meta.is_self_closing(), meta.raw_text),
            None => (false, false),
        };
        TagOptions {
            tag_name,
            self_closing,
            raw_text,
            ..Self::fragment()
        }
    }
}


#[derive(Clone, Debug)]
pub struct Attribute<'a> {
    name: KString,
    values: Vec<Text<'a>>,
}

impl<'a> Attribute<'a> {
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn values(&self) -> &[Text<'a>] { &self.values }
}

/// An attribute with any name; `values` are space separated when
/// rendered, none at all gives a bare attribute.
pub fn att<'a>(name: impl Into<KString>, values: impl IntoValues<'a>) -> Attribute<'a> {
    Attribute {
        name: name.into(),
        values: values.into_values(),
    }
}

pub trait IntoValues<'a> {
    fn into_values(self) -> Vec<Text<'a>>;
}

impl<'a> IntoValues<'a> for () {
    fn into_values(self) -> Vec<Text<'a>> {
        Vec::new()
    }
}

macro_rules! single_value {
    ($t:ty) => {
        impl<'a> IntoValues<'a> for $t {
            fn into_values(self) -> Vec<Text<'a>> {
                vec![self.into()]
            }
        }
    }
}
single_value!(&'a str);
single_value!(&'a String);
single_value!(String);
single_value!(KString);
single_value!(Text<'a>);

impl<'a, T: Into<Text<'a>>, const N: usize> IntoValues<'a> for [T; N] {
    fn into_values(self) -> Vec<Text<'a>> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<'a, T: Into<Text<'a>>> IntoValues<'a> for Vec<T> {
    fn into_values(self) -> Vec<Text<'a>> {
        self.into_iter().map(Into::into).collect()
    }
}


/// A deferred subtree, produced anew for every render.
#[derive(Clone)]
pub struct Producer<'a>(Arc<dyn Fn() -> Node<'a> + Send + Sync + 'a>);

impl<'a> Producer<'a> {
    pub fn produce(&self) -> Node<'a> {
        (self.0)()
    }
}

impl<'a> fmt::Debug for Producer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}


#[derive(Clone, Debug)]
pub struct Node<'a> {
    pub(crate) options: TagOptions,
    pub(crate) attributes: Vec<Attribute<'a>>,
    pub(crate) children: Vec<Node<'a>>,
    pub(crate) content: Text<'a>,
    pub(crate) producer: Option<Producer<'a>>,
    pub(crate) css: Option<Arc<Vec<CssRule<'a>>>>,
    pub(crate) component: Option<ComponentId>,
}

impl<'a> Node<'a> {
    pub fn new(options: TagOptions, children: impl IntoChildren<'a>) -> Self {
        let mut node = Node {
            options,
            attributes: Vec::new(),
            children: Vec::new(),
            content: Text::default(),
            producer: None,
            css: None,
            component: None,
        };
        node.add(children);
        node
    }

    /// Append more children (attributes, nodes, rules) after
    /// construction.
    pub fn add(&mut self, children: impl IntoChildren<'a>) -> &mut Self {
        let mut c = Children::default();
        children.add_to(&mut c);
        let Children { attributes, nodes, css } = c;
        self.attributes.extend(attributes);
        self.children.extend(nodes);
        if !css.is_empty() {
            match &mut self.css {
                Some(rules) => Arc::make_mut(rules).extend(css),
                None => self.css = Some(Arc::new(css)),
            }
        }
        self
    }

    pub fn options(&self) -> &TagOptions { &self.options }
    pub fn tag_name(&self) -> &str { self.options.tag_name.as_str() }
    pub fn prefix(&self) -> &str { self.options.prefix.as_str() }
    pub fn is_self_closing(&self) -> bool { self.options.self_closing }
    pub fn is_fragment(&self) -> bool { self.options.tag_name.is_empty() }
    pub fn gathers(&self) -> CollectionKind { self.options.gathers }
    pub fn emits(&self) -> CollectionKind { self.options.emits }
    pub fn attributes(&self) -> &[Attribute<'a>] { &self.attributes }
    pub fn children(&self) -> &[Node<'a>] { &self.children }
    pub fn content(&self) -> &Text<'a> { &self.content }
    pub fn producer(&self) -> Option<&Producer<'a>> { self.producer.as_ref() }
    pub fn css(&self) -> Option<&Arc<Vec<CssRule<'a>>>> { self.css.as_ref() }
    pub fn component(&self) -> Option<&ComponentId> { self.component.as_ref() }

    /// The text content only, ignoring markup, placeholders
    /// unpopulated, css and gathered content left out.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        self.print_plain(&mut out);
        out
    }

    fn print_plain(&self, out: &mut String) {
        if self.options.emits != CollectionKind::None {
            return;
        }
        out.push_str(&self.content.view());
        for child in &self.children {
            child.print_plain(out);
        }
        if let Some(producer) = &self.producer {
            producer.produce().print_plain(out);
        }
    }
}


/// The pieces a constructor's children argument is sorted into.
#[derive(Default)]
pub struct Children<'a> {
    pub attributes: Vec<Attribute<'a>>,
    pub nodes: Vec<Node<'a>>,
    pub css: Vec<CssRule<'a>>,
}

/// Anything that can be passed as the children of a node.
pub trait IntoChildren<'a> {
    fn add_to(self, children: &mut Children<'a>);
}

impl<'a> IntoChildren<'a> for () {
    fn add_to(self, _children: &mut Children<'a>) {}
}

impl<'a> IntoChildren<'a> for Node<'a> {
    fn add_to(self, children: &mut Children<'a>) {
        children.nodes.push(self)
    }
}

impl<'a> IntoChildren<'a> for Attribute<'a> {
    fn add_to(self, children: &mut Children<'a>) {
        children.attributes.push(self)
    }
}

impl<'a> IntoChildren<'a> for CssRule<'a> {
    fn add_to(self, children: &mut Children<'a>) {
        children.css.push(self)
    }
}

macro_rules! text_child {
    ($t:ty) => {
        impl<'a> IntoChildren<'a> for $t {
            fn add_to(self, children: &mut Children<'a>) {
                children.nodes.push(text(self))
            }
        }
    }
}
text_child!(Text<'a>);
text_child!(&'a str);
text_child!(&'a String);
text_child!(String);
text_child!(KString);

impl<'a, T: IntoChildren<'a>> IntoChildren<'a> for Option<T> {
    fn add_to(self, children: &mut Children<'a>) {
        if let Some(v) = self {
            v.add_to(children)
        }
    }
}

impl<'a, T: IntoChildren<'a>> IntoChildren<'a> for Vec<T> {
    fn add_to(self, children: &mut Children<'a>) {
        for v in self {
            v.add_to(children)
        }
    }
}

impl<'a, T: IntoChildren<'a>, const N: usize> IntoChildren<'a> for [T; N] {
    fn add_to(self, children: &mut Children<'a>) {
        for v in self {
            v.add_to(children)
        }
    }
}

macro_rules! tuple_children {
    ($($name:ident)+) => {
        impl<'a, $($name: IntoChildren<'a>),+> IntoChildren<'a> for ($($name,)+) {
            #[allow(non_snake_case)]
            fn add_to(self, children: &mut Children<'a>) {
                let ($($name,)+) = self;
                $( $name.add_to(children); )+
            }
        }
    }
}
tuple_children!(A);
tuple_children!(A B);
tuple_children!(A B C);
tuple_children!(A B C D);
tuple_children!(A B C D E);
tuple_children!(A B C D E F);
tuple_children!(A B C D E F G);
tuple_children!(A B C D E F G H);
tuple_children!(A B C D E F G H I);
tuple_children!(A B C D E F G H I J);
tuple_children!(A B C D E F G H I J K);
tuple_children!(A B C D E F G H I J K L);


/// An element with any tag name.
pub fn el<'a>(tag_name: impl Into<KString>, children: impl IntoChildren<'a>) -> Node<'a> {
    Node::new(TagOptions::element(tag_name.into()), children)
}

/// Children without a wrapping tag.
pub fn fragment<'a>(children: impl IntoChildren<'a>) -> Node<'a> {
    Node::new(TagOptions::fragment(), children)
}

pub fn text<'a>(value: impl Into<Text<'a>>) -> Node<'a> {
    let mut node = fragment(());
    node.content = value.into();
    node
}

/// A subtree that is built by `f` when rendering, anew for every
/// render call.
pub fn lazy<'a, F, C>(f: F) -> Node<'a>
where F: Fn() -> C + Send + Sync + 'a,
      C: IntoChildren<'a>
{
    let mut node = fragment(());
    node.producer = Some(Producer(Arc::new(move || fragment(f()))));
    node
}

/// `<!doctype html>` followed by the children.
pub fn doc<'a>(children: impl IntoChildren<'a>) -> Node<'a> {
    Node::new(
        TagOptions {
            prefix: KString::from_static("<!doctype html>"),
            ..TagOptions::fragment()
        },
        children)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::prop;

    #[test]
    fn t_sorting_children() {
        let n = el("div", (
            att("class", "x"),
            "some text",
            prop("color", "red"),
            el("br", ()),
            None::<Node>,
            Some(att("id", "y")),
            vec![text("a"), text("b")],
        ));
        assert_eq!(n.attributes().len(), 2);
        assert_eq!(n.children().len(), 4);
        assert_eq!(n.css().map(|c| c.len()), Some(1));
        assert!(n.children()[1].is_self_closing());
        assert_eq!(n.children()[0].content().view(), "some text");
    }

    #[test]
    fn t_element_meta() {
        assert!(el("img", ()).is_self_closing());
        assert!(!el("p", ()).is_self_closing());
        assert!(el("script", ()).options().raw_text);
        let custom = el("my-widget", ());
        assert!(!custom.is_self_closing());
        assert_eq!(custom.tag_name(), "my-widget");
        assert!(fragment(()).is_fragment());
        assert_eq!(doc(()).prefix(), "<!doctype html>");
    }

    #[test]
    fn t_add() {
        let mut n = el("ul", ());
        for i in 0..3 {
            n.add(el("li", i.to_string()));
        }
        n.add(att("id", "list")).add(prop("margin", "0"));
        assert_eq!(n.children().len(), 3);
        assert_eq!(n.attributes()[0].name(), "id");
        assert_eq!(n.css().map(|c| c.len()), Some(1));
    }

    #[test]
    fn t_values() {
        assert!(att("disabled", ()).values().is_empty());
        assert_eq!(att("class", ["big", "tall"]).values().len(), 2);
        assert_eq!(att("class", vec![String::from("a")]).values()[0].view(), "a");
    }

    #[test]
    fn t_plain() {
        let n = el("p", ("Hello ", el("b", "world"), lazy(|| "!"),
                         att("title", "ignored")));
        assert_eq!(n.to_plain_string(), "Hello world!");
    }

    #[test]
    fn t_send_sync() {
        fn is_send_sync<T: Send + Sync>(_: &T) {}
        let n = el("p", lazy(|| text(Text::lazy(|| "x".into()))));
        is_send_sync(&n);
    }
}
