//! One constructor per HTML element; `el` covers custom elements.
//! Whether an element is self-closing comes from the element
//! database.

use kstring::KString;

use crate::node::{el, IntoChildren, Node};

macro_rules! elements {
    ($($name:ident)*) => {
        $(
            pub fn $name<'a>(children: impl IntoChildren<'a>) -> Node<'a> {
                el(KString::from_static(stringify!($name)), children)
            }
        )*

        pub const TAG_NAMES: &[&str] = &[$(stringify!($name)),*];
    }
}

elements! {
    a
    abbr
    address
    area
    article
    aside
    audio
    b
    base
    bdi
    bdo
    blockquote
    body
    br
    button
    canvas
    caption
    cite
    code
    col
    colgroup
    data
    datalist
    dd
    del
    details
    dfn
    dialog
    div
    dl
    dt
    em
    embed
    fieldset
    figcaption
    figure
    footer
    form
    h1
    h2
    h3
    h4
    h5
    h6
    head
    header
    hr
    html
    i
    iframe
    img
    input
    ins
    kbd
    label
    legend
    li
    link
    main
    map
    mark
    math
    menu
    meta
    meter
    nav
    noscript
    object
    ol
    optgroup
    option
    output
    p
    picture
    portal
    pre
    progress
    q
    rp
    rt
    ruby
    s
    samp
    script
    section
    select
    slot
    small
    source
    span
    strong
    style
    sub
    summary
    sup
    svg
    table
    tbody
    td
    template
    textarea
    tfoot
    th
    thead
    time
    title
    tr
    track
    u
    ul
    var
    video
    wbr
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attributes::{_class, _href, _id}, node::doc, render::Render, METADB};

    #[test]
    fn t_catalog_matches_metadb() {
        for tag in TAG_NAMES {
            assert!(METADB.get(tag).is_some(), "{tag} missing from the element database");
        }
        assert_eq!(TAG_NAMES.len(), METADB.len());
    }

    #[test]
    fn t_render() {
        assert_eq!(h1(()).to_html_string(), "<h1></h1>");
        assert_eq!(h1("Hello world").to_html_string(), "<h1>Hello world</h1>");
        assert_eq!(h1(("Hello", " world")).to_html_string(), "<h1>Hello world</h1>");
        assert_eq!(h1((a("Hello"), span(" world"))).to_html_string(),
                   "<h1><a>Hello</a><span> world</span></h1>");
        assert_eq!(
            h1((_class("title"), _id("theTitle"), "Hello", a(" world"), "!")).to_html_string(),
            "<h1 class=\"title\" id=\"theTitle\">Hello<a> world</a>!</h1>");
        assert_eq!(img(()).to_html_string(), "<img/>");
        assert_eq!(img((_class("logo"), _href("/logo.gif"))).to_html_string(),
                   "<img class=\"logo\" href=\"/logo.gif\"/>");
        assert_eq!(doc(()).to_html_string(), "<!doctype html>");
    }

    #[test]
    fn t_nested() {
        let t = title("Hey");
        let page = html((
            head(t),
            body((h1((_class("title"), "Hello!")), p("Goodbye."))),
        ));
        assert_eq!(page.to_html_string(),
                   "<html><head><title>Hey</title></head><body>\
                    <h1 class=\"title\">Hello!</h1><p>Goodbye.</p></body></html>");
    }
}
