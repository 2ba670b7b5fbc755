//! The [`Barf`] renderer and its tag shortcuts.

use std::fmt::Display;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::attribute::write_attributes;
use crate::css::write_declarations;
use crate::{
    Attribute, Attributes, Declarations, Diagnostics, IntoAttribute, IntoChildren,
    NoopDiagnostics, Options, Warning,
};

static NOOP: NoopDiagnostics = NoopDiagnostics;

/// Renders elements straight into strings allocated in a bump allocator.
///
/// Every call returns a finished string, so trees are built inside-out by passing the
/// output of one call as a child of the next.
///
/// # Example
///
/// ```
/// use barfhtml::{bumpalo::Bump, Barf};
///
/// let bump = Bump::new();
/// let b = Barf::new(&bump);
/// let html = b.div(
///     [],
///     [b.a(
///         [b.attr(("href", "http://www.example.com"))],
///         [b.p(
///             [b.attr(("style", b.css([("fontSize", "12px")])))],
///             "Hello World!",
///         )],
///     )],
/// );
/// assert_eq!(
///     html.as_str(),
///     r#"<div><a href="http://www.example.com"><p style="font-size:12px;">Hello World!</p></a></div>"#
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Barf<'bump> {
    bump: &'bump Bump,
    diagnostics: &'bump dyn Diagnostics,
}
impl<'bump> Barf<'bump> {
    /// Create a new renderer with the given bump allocator. Warnings are dropped.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            diagnostics: &NOOP,
        }
    }

    /// Send warnings to `diagnostics` instead of dropping them.
    pub fn with_diagnostics(self, diagnostics: &'bump dyn Diagnostics) -> Self {
        Self {
            diagnostics,
            ..self
        }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    pub(crate) fn warn(&self, warning: Warning) {
        self.diagnostics.warn(&warning);
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
        value.into_attribute(self.bump)
    }

    /// Create an attribute map from a list of attributes.
    pub fn attrs(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Attributes<'bump> {
        Attributes::from_iter_in(self.bump, attributes)
    }

    /// Create a map of CSS declarations, usable as a `style` attribute value or with
    /// [`Barf::rule`].
    pub fn css<K: AsRef<str>, V: Display>(
        &self,
        declarations: impl IntoIterator<Item = (K, V)>,
    ) -> Declarations<'bump> {
        Declarations::from_pairs_in(self.bump, declarations)
    }

    /// Render an element.
    ///
    /// Produces `<tag attrs>children</tag>`, or just `<tag attrs>` when the options
    /// mark the element as singular. Children and attribute values are written verbatim.
    pub fn serialize(
        &self,
        tag: &str,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        children: impl IntoChildren,
        options: Options,
    ) -> BumpString<'bump> {
        let options = options.resolve();
        let attributes = Attributes::from_iter_in(self.bump, attributes);

        let mut output = BumpString::new_in(self.bump);
        output.push('<');
        output.push_str(tag);
        write_attributes(&mut output, attributes.as_slice(), options);
        output.push('>');

        let mut inner = BumpString::new_in(self.bump);
        children.flatten_into(&mut inner);

        if options.singular {
            if !inner.is_empty() {
                self.warn(Warning::ChildrenDiscarded { tag: tag.to_string() });
            }
            return output;
        }

        output.push_str(inner.as_str());
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
        output
    }

    /// Create a shortcut bound to `tag`, with `defaults` sitting under any per-call options.
    pub fn shortcut(&self, tag: &str, defaults: Options) -> Shortcut<'bump> {
        Shortcut {
            barf: *self,
            tag: self.bump.alloc_str(tag),
            defaults,
        }
    }

    /// Create a shortcut for `tag`, using the defaults from [`SHORTCUTS`] if it is listed.
    pub fn named(&self, tag: &str) -> Shortcut<'bump> {
        self.shortcut(tag, shortcut_defaults(tag).unwrap_or_default())
    }

    /// Render a standalone CSS rule: `selector {prop:value;...} `.
    ///
    /// Property names are always converted to dashed-case.
    pub fn rule(&self, selector: &str, declarations: &Declarations<'_>) -> BumpString<'bump> {
        let mut output = BumpString::from_str_in(selector, self.bump);
        output.push_str(" {");
        write_declarations(&mut output, declarations.as_slice(), true);
        output.push_str("} ");
        output
    }

    /// Flatten children without wrapping them in a tag.
    pub fn raw(&self, children: impl IntoChildren) -> BumpString<'bump> {
        let mut output = BumpString::new_in(self.bump);
        children.flatten_into(&mut output);
        output
    }

    /// Escape `text` for use as element content.
    ///
    /// The renderer never escapes on its own; use this for untrusted text.
    pub fn text(&self, text: &str) -> BumpString<'bump> {
        BumpString::from_str_in(&html_escape::encode_text(text), self.bump)
    }

    /// Escape `value` for use inside a double-quoted attribute value.
    pub fn quoted(&self, value: &str) -> BumpString<'bump> {
        BumpString::from_str_in(
            &html_escape::encode_double_quoted_attribute(value),
            self.bump,
        )
    }
}

/// A renderer bound to one tag name and a set of default options.
#[derive(Clone, Copy)]
pub struct Shortcut<'bump> {
    pub(crate) barf: Barf<'bump>,
    pub(crate) tag: &'bump str,
    pub(crate) defaults: Options,
}
impl<'bump> Shortcut<'bump> {
    /// The tag this shortcut renders.
    pub fn tag(&self) -> &'bump str {
        self.tag
    }

    /// The default options of this shortcut.
    pub fn defaults(&self) -> Options {
        self.defaults
    }

    /// Render the element with the default options.
    pub fn render(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        children: impl IntoChildren,
    ) -> BumpString<'bump> {
        self.render_with(attributes, children, Options::new())
    }

    /// Render the element; fields set in `options` override the defaults.
    pub fn render_with(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        children: impl IntoChildren,
        options: Options,
    ) -> BumpString<'bump> {
        self.barf
            .serialize(self.tag, attributes, children, options.or(self.defaults))
    }
}

/// Look up the default options of a tag in [`SHORTCUTS`].
pub fn shortcut_defaults(tag: &str) -> Option<Options> {
    SHORTCUTS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, defaults)| *defaults)
}

macro_rules! shortcuts {
    ($($tag_ident:ident => $defaults:expr),* $(,)?) => {
        impl<'bump> Barf<'bump> {
            $(
                #[doc = concat!("Render a `<", stringify!($tag_ident), ">` element.\n\nShorthand for [`Barf::named`]`(\"", stringify!($tag_ident), "\").render(attributes, children)`.")]
                pub fn $tag_ident(
                    &self,
                    attributes: impl IntoIterator<Item = Attribute<'bump>>,
                    children: impl IntoChildren,
                ) -> BumpString<'bump> {
                    Shortcut {
                        barf: *self,
                        tag: stringify!($tag_ident),
                        defaults: $defaults,
                    }
                    .render(attributes, children)
                }
            )*
        }
        /// Every tag with a shortcut method on [`Barf`], with its default options.
        pub const SHORTCUTS: &[(&str, Options)] = &[$((stringify!($tag_ident), $defaults)),*];
    };
}
shortcuts! {
    html => Options::new(),
    head => Options::new(),
    title => Options::new(),
    body => Options::new(),
    div => Options::new(),
    h1 => Options::new(),
    h2 => Options::new(),
    h3 => Options::new(),
    h4 => Options::new(),
    h5 => Options::new(),
    img => Options::new().singular(true),
    a => Options::new(),
    b => Options::new(),
    span => Options::new(),
    p => Options::new(),
    input => Options::new(),
    button => Options::new(),
    table => Options::new(),
    tr => Options::new(),
    td => Options::new(),
    li => Options::new(),
    ul => Options::new(),
    style => Options::new(),
    script => Options::new(),
    meta => Options::new().singular(true),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_serialize_plain_element() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let output = b.serialize(
            "a",
            [b.attr(("href", "http://example.com"))],
            "link",
            Options::new(),
        );
        assert_eq!(output.as_str(), r#"<a href="http://example.com">link</a>"#);
    }

    #[test]
    fn test_serialize_without_attributes_or_children() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        assert_eq!(b.serialize("div", [], (), Options::new()).as_str(), "<div></div>");
    }

    #[test]
    fn test_singular_drops_children_and_closing_tag() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let output = b.serialize(
            "img",
            [b.attr(("src", "x.png"))],
            "ignored",
            Options::new().singular(true),
        );
        assert_eq!(output.as_str(), r#"<img src="x.png">"#);
    }

    #[test]
    fn test_singular_with_children_warns() {
        let warnings = RefCell::new(vec![]);
        let sink = |w: &Warning| warnings.borrow_mut().push(w.clone());
        let bump = Bump::new();
        let b = Barf::new(&bump).with_diagnostics(&sink);

        b.img([], "ignored");
        b.meta([b.attr(("charset", "utf-8"))], ());

        assert_eq!(
            warnings.borrow().clone(),
            vec![Warning::ChildrenDiscarded { tag: "img".into() }]
        );
    }

    #[test]
    fn test_convert_camel_case_can_be_disabled() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let attributes = || {
            [
                b.attr(("dataRole", "x")),
                b.attr(("style", b.css([("fontSize", "12px")]))),
            ]
        };
        assert_eq!(
            b.p(attributes(), "text").as_str(),
            r#"<p data-role="x" style="font-size:12px;">text</p>"#
        );
        assert_eq!(
            b.named("p")
                .render_with(attributes(), "text", Options::new().convert_camel_case(false))
                .as_str(),
            r#"<p dataRole="x" style="fontSize:12px;">text</p>"#
        );
    }

    #[test]
    fn test_shortcut_defaults_sit_under_call_options() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let img = b.named("img");
        assert_eq!(img.defaults(), Options::new().singular(true));
        assert_eq!(
            img.render_with([], "child", Options::new().singular(false))
                .as_str(),
            "<img>child</img>"
        );
        assert_eq!(img.render([], "child").as_str(), "<img>");
    }

    #[test]
    fn test_custom_shortcut() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let br = b.shortcut("br", Options::new().singular(true));
        assert_eq!(br.tag(), "br");
        assert_eq!(br.render([], ()).as_str(), "<br>");

        let section = b.named("section");
        assert_eq!(section.defaults(), Options::new());
        assert_eq!(section.render([], "x").as_str(), "<section>x</section>");
    }

    #[test]
    fn test_shortcut_table() {
        let names: Vec<&str> = SHORTCUTS.iter().map(|(name, _)| *name).collect();
        for expected in [
            "html", "head", "title", "body", "div", "h1", "h2", "h3", "h4", "h5", "img", "a", "b",
            "span", "p", "input", "button", "table", "tr", "td", "li", "ul", "style", "script",
            "meta",
        ] {
            assert!(names.contains(&expected), "missing shortcut {expected}");
        }
        let singular: Vec<&str> = SHORTCUTS
            .iter()
            .filter(|(_, defaults)| defaults.resolve().singular)
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(singular, ["img", "meta"]);
    }

    #[test]
    fn test_tag_methods_do_not_copy_the_tag() {
        fn used(bump: &mut Bump) -> usize {
            bump.iter_allocated_chunks().map(|chunk| chunk.len()).sum()
        }

        let mut direct = Bump::new();
        Barf::new(&direct).serialize("div", [], "x", Options::new());
        let mut method = Bump::new();
        Barf::new(&method).div([], "x");

        assert_eq!(used(&mut method), used(&mut direct));
    }

    #[test]
    fn test_rule_forces_dashed_keys() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        let output = b.rule("body", &b.css([("backgroundColor", "#1d1d1d")]));
        assert_eq!(output.as_str(), "body {background-color:#1d1d1d;} ");
    }

    #[test]
    fn test_raw_joins_children() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        assert_eq!(b.raw(["<i>a</i>", "b"]).as_str(), "<i>a</i>b");
        assert_eq!(b.raw("only").as_str(), "only");
    }

    #[test]
    fn test_escaping_helpers() {
        let bump = Bump::new();
        let b = Barf::new(&bump);
        assert_eq!(
            b.p([], b.text("1 < 2 & 3")).as_str(),
            "<p>1 &lt; 2 &amp; 3</p>"
        );
        assert_eq!(
            b.span([b.attr(("title", b.quoted(r#"say "hi""#)))], ()).as_str(),
            r#"<span title="say &quot;hi&quot;"></span>"#
        );
    }
}
