//! Components: subtrees whose styles (and head content) are gathered
//! once per component identity, and whose markup and selectors carry
//! a scope marker.

use std::{any::type_name, fmt, sync::Arc};

use kstring::KString;

use crate::{arc_util::IntoArc,
            css::CssRule,
            node::{fragment, Children, CollectionKind, IntoChildren, Node, TagOptions}};

const ID_CHARS: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";
const ID_LEN: usize = 6;

/// The identity all instances of a component share; gathered styles
/// are deduplicated by it and it is the text of the scope marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    name: KString,
}

impl ComponentId {
    /// Use `name` verbatim; it ends up in attribute names and
    /// selectors, thus should consist of letters, digits, `-` and
    /// `_` only.
    pub fn named(name: impl Into<KString>) -> Self {
        ComponentId { name: name.into() }
    }

    /// A 6 character identity derived from the name of the type
    /// `T`. Distinct types can collide.
    pub fn of<T: ?Sized>() -> Self {
        ComponentId {
            name: KString::from_string(hash_id(type_name::<T>())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn type_hash(s: &str) -> u32 {
    let mut hash: u32 = 0;
    for c in s.bytes() {
        hash ^= u32::from(c);
        hash <<= 1;
    }
    hash
}

fn hash_id(s: &str) -> String {
    let mut hash = type_hash(s);
    let mut buf = [b'0'; ID_LEN];
    for c in buf.iter_mut().rev() {
        *c = ID_CHARS[(hash & 63) as usize];
        hash >>= 6;
    }
    buf.iter().map(|&c| char::from(c)).collect()
}


/// Builder for a component instance.
pub struct Component<'a> {
    id: ComponentId,
    styles: Option<Arc<Vec<CssRule<'a>>>>,
    head: Children<'a>,
    root: Children<'a>,
}

impl<'a> Component<'a> {
    pub fn new(id: ComponentId, root: impl IntoChildren<'a>) -> Self {
        let mut children = Children::default();
        root.add_to(&mut children);
        Component {
            id,
            styles: None,
            head: Children::default(),
            root: children,
        }
    }

    /// Rules rendered at the style target once per component
    /// identity, scoped to the component's markup. Pass an `Arc` (or
    /// `&Arc`) to share one rule set between instances.
    pub fn styles(mut self, styles: impl IntoArc<Vec<CssRule<'a>>>) -> Self {
        self.styles = Some(styles.into_arc());
        self
    }

    /// Nodes rendered at the head target once per component identity.
    pub fn head(mut self, head: impl IntoChildren<'a>) -> Self {
        head.add_to(&mut self.head);
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn into_node(self) -> Node<'a> {
        let Component { id, styles, head, root } = self;
        let mut node = fragment(());
        if let Some(styles) = styles {
            let mut styles_node = Node::new(
                TagOptions { emits: CollectionKind::Css, ..TagOptions::fragment() },
                ());
            styles_node.css = Some(styles);
            node.children.push(styles_node);
        }
        let Children { attributes, nodes, css } = root;
        if !attributes.is_empty() {
            log::warn!("component {id}: attributes outside of any element are ignored");
        }
        if !css.is_empty() {
            log::warn!("component {id}: css rules outside of any element are ignored, \
                        pass them as styles");
        }
        node.children.push(fragment(nodes));
        if !head.nodes.is_empty() {
            node.children.push(Node::new(
                TagOptions { emits: CollectionKind::Head, ..TagOptions::fragment() },
                head.nodes));
        }
        node.component = Some(id);
        node
    }
}

impl<'a> From<Component<'a>> for Node<'a> {
    fn from(c: Component<'a>) -> Self {
        c.into_node()
    }
}

impl<'a> IntoChildren<'a> for Component<'a> {
    fn add_to(self, children: &mut Children<'a>) {
        children.nodes.push(self.into_node())
    }
}

/// A component instance with the given styles and markup.
pub fn component<'a>(
    id: ComponentId,
    styles: impl IntoArc<Vec<CssRule<'a>>>,
    root: impl IntoChildren<'a>,
) -> Node<'a> {
    Component::new(id, root).styles(styles).into_node()
}

/// A `<style>` element receiving the styles of all components in the
/// tree, each once.
pub fn style_target<'a>() -> Node<'a> {
    Node::new(
        TagOptions {
            gathers: CollectionKind::Css,
            ..TagOptions::element(KString::from_static("style"))
        },
        ())
}

/// Receives the head nodes of all components in the tree, each once.
pub fn head_target<'a>() -> Node<'a> {
    Node::new(
        TagOptions { gathers: CollectionKind::Head, ..TagOptions::fragment() },
        ())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{css::{prop, rule}, node::{att, el}, render::Render};

    struct Widget;
    struct Gadget;

    #[test]
    fn t_hash_id() {
        assert_eq!(hash_id(""), "000000");
        // 'a' = 97; hash = 194 = 3*64 + 2
        assert_eq!(hash_id("a"), "000032");
        let w = ComponentId::of::<Widget>();
        assert_eq!(w.as_str().len(), 6);
        assert_eq!(w, ComponentId::of::<Widget>());
        assert_ne!(w, ComponentId::of::<Gadget>());
        assert!(w.as_str().bytes().all(|c| ID_CHARS.contains(&c)));
        for (i, &c) in ID_CHARS.iter().enumerate() {
            assert!(c.is_ascii_alphanumeric() || c == b'_' || c == b'-');
            assert!(!ID_CHARS[..i].contains(&c));
        }
    }

    #[test]
    fn t_root_stray_children() {
        let node = Component::new(
            ComponentId::named("c"),
            (att("id", "lost"), prop("color", "red"), el("p", ())))
            .into_node();
        assert_eq!(node.children().len(), 1);
        assert!(node.children()[0].css().is_none());
        assert_eq!(node.to_html_string(), "<p data-cc></p>");
    }

    #[test]
    fn t_structure() {
        let node = Component::new(ComponentId::named("card"), el("div", "x"))
            .styles(vec![rule(".card", [prop("color", "red")])])
            .head(el("meta", ()))
            .into_node();
        assert_eq!(node.component().map(|c| c.as_str()), Some("card"));
        assert!(node.is_fragment());
        let kinds: Vec<_> = node.children().iter().map(|c| c.emits()).collect();
        assert_eq!(kinds, [CollectionKind::Css, CollectionKind::None, CollectionKind::Head]);
        assert_eq!(node.children()[0].css().map(|c| c.len()), Some(1));
    }

    #[test]
    fn t_shared_styles() {
        let styles = Arc::new(vec![rule(".a", Vec::<CssRule>::new())]);
        let n1 = component(ComponentId::named("a"), &styles, el("p", ()));
        let n2 = component(ComponentId::named("a"), &styles, el("p", ()));
        let s1 = n1.children()[0].css().unwrap();
        let s2 = n2.children()[0].css().unwrap();
        assert!(Arc::ptr_eq(s1, s2));
    }

    #[test]
    fn t_targets() {
        let s = style_target();
        assert_eq!(s.tag_name(), "style");
        assert_eq!(s.gathers(), CollectionKind::Css);
        let h = head_target();
        assert!(h.is_fragment());
        assert_eq!(h.gathers(), CollectionKind::Head);
    }
}
