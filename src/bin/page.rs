use std::io::Write;

use anyhow::Result;
use clap::Parser as ClapParser;
use comphtml::prelude::*;

#[derive(clap::Parser, Debug)]
/// Print a to-do list page as HTML to stdout.
struct Args {
    /// Print only the CSS of the components on the page
    #[clap(long)]
    css_only: bool,

    /// Leave out the items that are done
    #[clap(long)]
    hide_done: bool,
}

struct Item {
    title: &'static str,
    done: bool,
}

const ITEMS: [Item; 4] = [
    Item { title: "Buy milk", done: true },
    Item { title: "Water the plants", done: false },
    Item { title: "Fix the bike <soon>", done: false },
    Item { title: "Call grandma", done: true },
];

struct TodoItem;

fn todo_item<'a>(item: &Item) -> Node<'a> {
    Component::new(
        ComponentId::of::<TodoItem>(),
        li((
            maybe_attr(item.done, _class("done")),
            input((_type("checkbox"), maybe_attr(item.done, _checked(())))),
            span((_class("title"), item.title)),
        )))
        .styles(vec![
            rule("li", [display("flex"), gap("0.5em"), list_style("none")]),
            rule(".done .title", [text_decoration("line-through"), opacity("0.6")]),
        ])
        .head(meta((_name("color-scheme"), _content("light dark"))))
        .into_node()
}

fn page(items: &[Item], hide_done: bool) -> Node<'_> {
    let open = items.iter().filter(|item| !item.done).count();
    doc(html((
        _lang("en"),
        head((
            meta(_charset("utf-8")),
            title("To do"),
            head_target(),
            style((
                rule("body", [font_family("sans-serif"), margin("2em auto"),
                              max_width("40em")]),
                at_media("(prefers-color-scheme: dark)",
                         [rule("body", [background("#222"), color("#eee")])]),
            )),
            style_target(),
        )),
        body((
            h1("To do"),
            maybe(open == 0, || p("All done.")),
            ul(each(items.iter().filter(|item| !(hide_done && item.done)), todo_item)),
            p(format!("{open} of {} open", items.len())),
        )),
    )))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = RenderSettings::from_env()?;
    let options = RenderOptions::new().settings(settings);

    let page = page(&ITEMS, args.hide_done);
    let mut out = std::io::stdout().lock();
    if args.css_only {
        writeln!(&mut out, "{}", render_css(&page, options))?;
    } else {
        render_to_writer(&page, &mut out, options)?;
        writeln!(&mut out)?;
    }
    Ok(())
}
