//! Helpers for building children from data and conditions.

use crate::node::{fragment, Attribute, IntoChildren, Node};

/// Position of the current item in `each_loop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop {
    pub index: usize,
    pub count: usize,
}

impl Loop {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

/// A fragment with the children `f` makes from each item.
pub fn each<'a, I, C>(items: I, f: impl FnMut(I::Item) -> C) -> Node<'a>
where I: IntoIterator,
      C: IntoChildren<'a>
{
    fragment(items.into_iter().map(f).collect::<Vec<C>>())
}

/// Like `each`, also passing the position of the item.
pub fn each_loop<'a, I, C>(items: I, mut f: impl FnMut(I::Item, Loop) -> C) -> Node<'a>
where I: IntoIterator,
      I::IntoIter: ExactSizeIterator,
      C: IntoChildren<'a>
{
    let items = items.into_iter();
    let count = items.len();
    fragment(
        items.enumerate()
            .map(|(index, item)| f(item, Loop { index, count }))
            .collect::<Vec<C>>())
}

/// The children made by `f` if `condition` holds, an empty fragment
/// otherwise.
pub fn maybe<'a, C: IntoChildren<'a>>(condition: bool, f: impl FnOnce() -> C) -> Node<'a> {
    if condition {
        fragment(f())
    } else {
        fragment(())
    }
}

/// Like `maybe`, handing `value` to `f`.
pub fn maybe_with<'a, V, C: IntoChildren<'a>>(
    condition: bool,
    value: V,
    f: impl FnOnce(V) -> C,
) -> Node<'a> {
    if condition {
        fragment(f(value))
    } else {
        fragment(())
    }
}

pub fn maybe_attr(condition: bool, attr: Attribute<'_>) -> Option<Attribute<'_>> {
    condition.then_some(attr)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attributes::{_class, _disabled},
                elements::{button, div, li, ol, p},
                render::{render, Render, RenderOptions},
                text::placeholder};

    struct Post {
        title: &'static str,
    }

    const POSTS: [Post; 3] = [
        Post { title: "10 ways to leak memory" },
        Post { title: "1 simple trick" },
        Post { title: "Is Rust dead? 💀" },
    ];

    fn post_item(post: &Post) -> Node<'static> {
        li(post.title)
    }

    #[test]
    fn t_each() {
        assert_eq!(ol(each(&POSTS, |post| li(post.title))).to_html_string(),
                   "<ol><li>10 ways to leak memory</li><li>1 simple trick</li>\
                    <li>Is Rust dead? 💀</li></ol>");
        assert_eq!(ol(each(&POSTS, post_item)).to_html_string(),
                   ol(each(POSTS.iter(), |post| li(post.title))).to_html_string());
        let none: Vec<Post> = Vec::new();
        assert_eq!(ol(each(&none, post_item)).to_html_string(), "<ol></ol>");
    }

    #[test]
    fn t_each_loop() {
        let html = ol(each_loop(["a", "b", "c"], |item, l| {
            li((
                maybe_attr(l.is_first(), _class("first")),
                maybe_attr(l.is_last(), _class("last")),
                format!("{item}{}/{}", l.index, l.count),
            ))
        })).to_html_string();
        assert_eq!(html, "<ol><li class=\"first\">a0/3</li><li>b1/3</li>\
                          <li class=\"last\">c2/3</li></ol>");
    }

    #[test]
    fn t_maybe() {
        let will = "You will see me.";
        let wont = "You won't see me.";
        assert_eq!(div((maybe(false, || wont), maybe(true, || will))).to_html_string(),
                   "<div>You will see me.</div>");
        assert_eq!(div((maybe_with(false, wont, |x| x),
                        maybe_with(true, will, |x| x))).to_html_string(),
                   "<div>You will see me.</div>");

        let thing = String::from("Inflatable trousers");
        let no_thing = String::new();
        assert_eq!(
            div((maybe_with(!thing.is_empty(), &thing, |x| p(x)),
                 maybe_with(!no_thing.is_empty(), &no_thing, |x| p(("Not a thing.", x)))))
                .to_html_string(),
            "<div><p>Inflatable trousers</p></div>");
        assert_eq!(button((maybe_attr(true, _disabled(())), "Go")).to_html_string(),
                   "<button disabled>Go</button>");
    }

    #[test]
    fn t_placeholders() {
        let list = ol((li(placeholder("a")), li(placeholder("b")), li(placeholder("x"))));
        let options = RenderOptions::new().populator(|raw, context| {
            assert_eq!(context, "li");
            match raw {
                "a" => "A".into(),
                "b" => "B".into(),
                _ => "?".into(),
            }
        });
        assert_eq!(render(&list, options), "<ol><li>A</li><li>B</li><li>?</li></ol>");
        assert_eq!(list.to_html_string(), "<ol><li>a</li><li>b</li><li>x</li></ol>");
    }
}
