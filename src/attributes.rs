//! Constructors for the common HTML attributes. They are prefixed
//! with `_` to keep them apart from elements and properties of the
//! same name (`_style` vs. `style`, `_width` vs. `width`), hyphens
//! become underscores. `att` and `data_attr` cover anything else.

use kstring::KString;

use crate::node::{att, Attribute, IntoValues};

macro_rules! attributes {
    ($($name:ident $html:literal)*) => {
        $(
            pub fn $name<'a>(values: impl IntoValues<'a>) -> Attribute<'a> {
                att(KString::from_static($html), values)
            }
        )*

        pub const ATTRIBUTE_NAMES: &[&str] = &[$($html),*];
    }
}

/// `data-<name>`
pub fn data_attr<'a>(name: &str, values: impl IntoValues<'a>) -> Attribute<'a> {
    att(KString::from_string(format!("data-{name}")), values)
}

attributes! {
    _accept "accept"
    _accept_charset "accept-charset"
    _accesskey "accesskey"
    _action "action"
    _align "align"
    _allow "allow"
    _alt "alt"
    _as "as"
    _async "async"
    _autocapitalize "autocapitalize"
    _autocomplete "autocomplete"
    _autocorrect "autocorrect"
    _autofill "autofill"
    _autofocus "autofocus"
    _autoplay "autoplay"
    _blocking "blocking"
    _buffered "buffered"
    _capture "capture"
    _challenge "challenge"
    _charset "charset"
    _checked "checked"
    _cite "cite"
    _class "class"
    _code "code"
    _codebase "codebase"
    _cols "cols"
    _colspan "colspan"
    _content "content"
    _contenteditable "contenteditable"
    _contextmenu "contextmenu"
    _controls "controls"
    _coords "coords"
    _crossorigin "crossorigin"
    _csp "csp"
    _data "data"
    _datetime "datetime"
    _decoding "decoding"
    _default "default"
    _defer "defer"
    _dir "dir"
    _dirname "dirname"
    _disabled "disabled"
    _download "download"
    _draggable "draggable"
    _enctype "enctype"
    _enterkeyhint "enterkeyhint"
    _for "for"
    _form "form"
    _formaction "formaction"
    _formenctype "formenctype"
    _formmethod "formmethod"
    _formnovalidate "formnovalidate"
    _formtarget "formtarget"
    _headers "headers"
    _height "height"
    _hidden "hidden"
    _high "high"
    _href "href"
    _hreflang "hreflang"
    _http_equiv "http-equiv"
    _icon "icon"
    _id "id"
    _importance "importance"
    _integrity "integrity"
    _inputmode "inputmode"
    _ismap "ismap"
    _itemprop "itemprop"
    _keytype "keytype"
    _kind "kind"
    _label "label"
    _lang "lang"
    _loading "loading"
    _list "list"
    _loop "loop"
    _low "low"
    _max "max"
    _maxlength "maxlength"
    _minlength "minlength"
    _media "media"
    _method "method"
    _min "min"
    _multiple "multiple"
    _muted "muted"
    _name "name"
    _novalidate "novalidate"
    _open "open"
    _optimum "optimum"
    _pattern "pattern"
    _ping "ping"
    _placeholder "placeholder"
    _poster "poster"
    _preload "preload"
    _radiogroup "radiogroup"
    _readonly "readonly"
    _referrerpolicy "referrerpolicy"
    _rel "rel"
    _required "required"
    _reversed "reversed"
    _role "role"
    _rows "rows"
    _rowspan "rowspan"
    _sandbox "sandbox"
    _scope "scope"
    _selected "selected"
    _shape "shape"
    _size "size"
    _sizes "sizes"
    _slot "slot"
    _span "span"
    _spellcheck "spellcheck"
    _src "src"
    _srcdoc "srcdoc"
    _srclang "srclang"
    _srcset "srcset"
    _start "start"
    _step "step"
    _style "style"
    _tabindex "tabindex"
    _target "target"
    _title "title"
    _translate "translate"
    _type "type"
    _usemap "usemap"
    _value "value"
    _width "width"
    _wrap "wrap"
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Render;

    #[test]
    fn t_names() {
        assert_eq!(_class("big").name(), "class");
        assert_eq!(_http_equiv("refresh").name(), "http-equiv");
        assert_eq!(_type("text").name(), "type");
        assert!(ATTRIBUTE_NAMES.contains(&"accept-charset"));
    }

    #[test]
    fn t_render() {
        assert_eq!(_class(()).to_html_string(), "class");
        assert_eq!(_class("big").to_html_string(), "class=\"big\"");
        assert_eq!(_class(["big", "tall"]).to_html_string(), "class=\"big tall\"");
        assert_eq!(data_attr("custom", "something").to_html_string(),
                   "data-custom=\"something\"");
        let list = vec![
            _class("big small"),
            _id("thing"),
            _disabled(()),
            data_attr("custom", "hello"),
        ];
        assert_eq!(list.to_html_string(),
                   " class=\"big small\" id=\"thing\" disabled data-custom=\"hello\"");
        assert_eq!(Vec::<Attribute>::new().to_html_string(), "");
    }
}
