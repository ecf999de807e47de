//! CSS rule trees: declarations, at-rules and selector blocks.

use kstring::KString;

use crate::text::Text;

#[derive(Clone, Debug)]
pub struct CssRule<'a> {
    can_nest: bool,
    label: KString,
    value: Text<'a>,
    selectors: Vec<Text<'a>>,
    children: Vec<CssRule<'a>>,
}

impl<'a> CssRule<'a> {
    pub fn can_nest(&self) -> bool { self.can_nest }
    pub fn label(&self) -> &str { self.label.as_str() }
    pub fn value(&self) -> &Text<'a> { &self.value }
    pub fn selectors(&self) -> &[Text<'a>] { &self.selectors }
    pub fn children(&self) -> &[CssRule<'a>] { &self.children }

    /// Selector blocks without a label get the scope suffix of the
    /// component they are rendered for, at-rule arguments never do.
    pub fn is_scoped_block(&self) -> bool {
        self.can_nest && self.label.is_empty()
    }
}

/// A declaration, `name:value;`.
pub fn prop<'a>(name: impl Into<KString>, value: impl Into<Text<'a>>) -> CssRule<'a> {
    CssRule {
        can_nest: false,
        label: name.into(),
        value: value.into(),
        selectors: Vec::new(),
        children: Vec::new(),
    }
}

/// An at-rule with a single argument and no block, `@import url(..);`.
pub fn at_single<'a>(label: impl Into<KString>, value: impl Into<Text<'a>>) -> CssRule<'a> {
    CssRule {
        can_nest: false,
        label: label.into(),
        value: Text::default(),
        selectors: vec![value.into()],
        children: Vec::new(),
    }
}

/// An at-rule with a block, `@media screen{..}`.
pub fn at_nested<'a>(
    label: impl Into<KString>,
    selectors: impl IntoSelectors<'a>,
    children: impl IntoIterator<Item = CssRule<'a>>,
) -> CssRule<'a> {
    CssRule {
        can_nest: true,
        label: label.into(),
        value: Text::default(),
        selectors: selectors.into_selectors(),
        children: children.into_iter().collect(),
    }
}

/// A selector block, `.a,.b{..}`.
pub fn rule<'a>(
    selectors: impl IntoSelectors<'a>,
    children: impl IntoIterator<Item = CssRule<'a>>,
) -> CssRule<'a> {
    CssRule {
        can_nest: true,
        label: KString::from_static(""),
        value: Text::default(),
        selectors: selectors.into_selectors(),
        children: children.into_iter().collect(),
    }
}


/// Things usable as the selector list of a rule.
pub trait IntoSelectors<'a> {
    fn into_selectors(self) -> Vec<Text<'a>>;
}

impl<'a> IntoSelectors<'a> for () {
    fn into_selectors(self) -> Vec<Text<'a>> {
        Vec::new()
    }
}

impl<'a> IntoSelectors<'a> for &'a str {
    fn into_selectors(self) -> Vec<Text<'a>> {
        vec![self.into()]
    }
}

impl<'a> IntoSelectors<'a> for String {
    fn into_selectors(self) -> Vec<Text<'a>> {
        vec![self.into()]
    }
}

impl<'a> IntoSelectors<'a> for KString {
    fn into_selectors(self) -> Vec<Text<'a>> {
        vec![self.into()]
    }
}

impl<'a> IntoSelectors<'a> for Text<'a> {
    fn into_selectors(self) -> Vec<Text<'a>> {
        vec![self]
    }
}

impl<'a, const N: usize> IntoSelectors<'a> for [&'a str; N] {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self.into_iter().map(Text::from).collect()
    }
}

impl<'a, const N: usize> IntoSelectors<'a> for [Text<'a>; N] {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self.into_iter().collect()
    }
}

impl<'a> IntoSelectors<'a> for &'a [&'a str] {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self.iter().map(|s| Text::from(*s)).collect()
    }
}

impl<'a> IntoSelectors<'a> for Vec<&'a str> {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self.into_iter().map(Text::from).collect()
    }
}

impl<'a> IntoSelectors<'a> for Vec<String> {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self.into_iter().map(Text::from).collect()
    }
}

impl<'a> IntoSelectors<'a> for Vec<Text<'a>> {
    fn into_selectors(self) -> Vec<Text<'a>> {
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_shapes() {
        let p = prop("color", "red");
        assert!(!p.can_nest());
        assert_eq!(p.label(), "color");
        assert_eq!(p.value().view(), "red");
        assert!(p.selectors().is_empty());

        let i = at_single("@import", "url(/x.css)");
        assert!(!i.can_nest());
        assert!(i.value().is_empty());
        assert_eq!(i.selectors().len(), 1);

        let r = rule([".a", ".b"], [prop("color", "red")]);
        assert!(r.can_nest());
        assert!(r.is_scoped_block());
        assert_eq!(r.selectors().len(), 2);
        assert_eq!(r.children().len(), 1);

        let m = at_nested("@media", "print", [r]);
        assert!(m.can_nest());
        assert!(!m.is_scoped_block());
        assert_eq!(m.children()[0].selectors()[1].view(), ".b");
    }

    #[test]
    fn t_selectors() {
        let owned = String::from(".x");
        let sels: &[&str] = &["a", "b"];
        assert_eq!(rule(owned, Vec::<CssRule>::new()).selectors().len(), 1);
        assert_eq!(rule(sels, Vec::<CssRule>::new()).selectors().len(), 2);
        assert_eq!(rule((), Vec::<CssRule>::new()).selectors().len(), 0);
        assert_eq!(rule(vec![String::from("p"), String::from("q")],
                        Vec::<CssRule>::new()).selectors()[1].view(), "q");
    }
}
