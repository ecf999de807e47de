//! The passes run before rendering: resolving lazy subtrees into a
//! table owned by the render call, and gathering the styles and head
//! nodes of every component identity in the tree, first seen wins.

use std::{collections::HashMap, sync::Arc};

use crate::{component::ComponentId,
            css::CssRule,
            node::{CollectionKind, Node}};

/// Produced subtrees, keyed by the address of the authored node
/// carrying the producer. The authored tree is borrowed for the
/// duration of the render call, so the addresses stay valid.
pub struct Expansions<'a> {
    produced: HashMap<*const Node<'a>, Node<'a>>,
    has_targets: bool,
}

impl<'a> Expansions<'a> {
    pub fn build(root: &Node<'a>) -> Self {
        let mut expansions = Expansions {
            produced: HashMap::new(),
            has_targets: false,
        };
        expansions.visit(root);
        expansions
    }

    fn visit(&mut self, node: &Node<'a>) {
        if node.gathers() != CollectionKind::None {
            self.has_targets = true;
        }
        for child in node.children() {
            self.visit(child);
        }
        if let Some(producer) = node.producer() {
            let produced = self.expand_owned(producer.produce());
            log::trace!("expanded lazy node into {} children", produced.children().len());
            self.produced.insert(node as *const Node<'a>, produced);
        }
    }

    /// Resolve all producers within a freshly produced subtree in
    /// place, so it does not need table entries of its own.
    fn expand_owned(&mut self, mut node: Node<'a>) -> Node<'a> {
        if node.gathers() != CollectionKind::None {
            self.has_targets = true;
        }
        let children = std::mem::take(&mut node.children);
        node.children = children.into_iter()
            .map(|child| self.expand_owned(child))
            .collect();
        if let Some(producer) = node.producer.take() {
            let produced = self.expand_owned(producer.produce());
            log::trace!("expanded nested lazy node into {} children",
                        produced.children().len());
            node.children.push(produced);
        }
        node
    }

    /// Whether a style or head target occurs anywhere in the tree,
    /// including produced subtrees.
    pub fn has_targets(&self) -> bool {
        self.has_targets
    }

    pub fn len(&self) -> usize {
        self.produced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.produced.is_empty()
    }

    /// The children of `node` followed by its produced subtree, if
    /// any.
    pub fn children_of<'t>(&'t self, node: &'t Node<'a>)
                           -> impl Iterator<Item = &'t Node<'a>> + 't
    {
        node.children().iter()
            .chain(self.produced.get(&(node as *const Node<'a>)))
    }
}


/// The content gathered for the style and head targets, in the order
/// the components were first seen (pre-order).
pub struct Collected<'t, 'a> {
    pub css: Vec<(&'t ComponentId, &'t Arc<Vec<CssRule<'a>>>)>,
    pub head: Vec<(&'t ComponentId, &'t Node<'a>)>,
}

impl<'t, 'a> Collected<'t, 'a> {
    pub fn empty() -> Self {
        Collected { css: Vec::new(), head: Vec::new() }
    }

    pub fn collect(root: &'t Node<'a>, expansions: &'t Expansions<'a>) -> Self {
        let mut collector = Collector {
            expansions,
            seen_css: HashMap::new(),
            seen_head: HashMap::new(),
            collected: Collected::empty(),
        };
        collector.visit(root, None);
        let collected = collector.collected;
        log::debug!("collected {} style sets and {} head sets",
                    collected.css.len(), collected.head.len());
        collected
    }
}

struct Collector<'t, 'a> {
    expansions: &'t Expansions<'a>,
    seen_css: HashMap<&'t ComponentId, &'t Arc<Vec<CssRule<'a>>>>,
    seen_head: HashMap<&'t ComponentId, &'t Node<'a>>,
    collected: Collected<'t, 'a>,
}

impl<'t, 'a> Collector<'t, 'a> {
    fn visit(&mut self, node: &'t Node<'a>, scope: Option<&'t ComponentId>) {
        let scope = node.component().or(scope);
        match node.emits() {
            CollectionKind::None => {
                for child in self.expansions.children_of(node) {
                    self.visit(child, scope);
                }
            }
            CollectionKind::Css => {
                let (Some(id), Some(css)) = (scope, node.css()) else {
                    if scope.is_none() {
                        log::warn!("style set outside of any component is ignored");
                    }
                    return;
                };
                if css.is_empty() {
                    return;
                }
                if let Some(first) = self.seen_css.get(id) {
                    log::debug!("component {id}: styles already collected (shared: {})",
                                Arc::ptr_eq(first, css));
                } else {
                    self.seen_css.insert(id, css);
                    self.collected.css.push((id, css));
                }
            }
            CollectionKind::Head => {
                let Some(id) = scope else {
                    log::warn!("head set outside of any component is ignored");
                    return;
                };
                if self.seen_head.contains_key(id) {
                    log::debug!("component {id}: head already collected");
                } else {
                    self.seen_head.insert(id, node);
                    self.collected.head.push((id, node));
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::{component::{component, style_target, Component},
                css::{prop, rule},
                node::{el, fragment, lazy, text, Node, TagOptions}};

    fn card<'a>(label: &'a str) -> Node<'a> {
        Component::new(ComponentId::named("card"), el("div", label))
            .styles(vec![rule(".card", [prop("color", "red")])])
            .head(el("link", ()))
            .into_node()
    }

    #[test]
    fn t_dedup_first_seen() {
        let tree = el("body", (
            card("one"),
            component(ComponentId::named("other"),
                      vec![rule("p", Vec::<CssRule>::new())],
                      card("nested")),
            card("two"),
        ));
        let expansions = Expansions::build(&tree);
        assert!(!expansions.has_targets());
        let c = Collected::collect(&tree, &expansions);
        let ids: Vec<&str> = c.css.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["card", "other"]);
        assert_eq!(c.head.len(), 1);
        assert_eq!(c.head[0].0.as_str(), "card");
    }

    #[test]
    fn t_lazy_expanded_once() {
        let calls = AtomicUsize::new(0);
        let tree = fragment((
            style_target(),
            lazy(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                (card("lazy"), lazy(|| text("inner")))
            }),
        ));
        let expansions = Expansions::build(&tree);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(expansions.has_targets());
        assert_eq!(expansions.len(), 1);
        let c = Collected::collect(&tree, &expansions);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(c.css.len(), 1);
        let lazy_node = &tree.children()[1];
        assert_eq!(expansions.children_of(lazy_node).count(), 1);
    }

    #[test]
    fn t_targets_in_produced() {
        let tree = lazy(style_target);
        assert!(Expansions::build(&tree).has_targets());
    }

    #[test]
    fn t_outside_component() {
        let stray = Node::new(
            TagOptions { emits: CollectionKind::Css, ..TagOptions::fragment() },
            prop("color", "red"));
        let tree = el("div", stray);
        let expansions = Expansions::build(&tree);
        assert!(Collected::collect(&tree, &expansions).css.is_empty());
    }
}
