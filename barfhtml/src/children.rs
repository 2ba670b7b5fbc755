use bumpalo::collections::String as BumpString;

/// Types that can be flattened into the children of an element.
///
/// A single string is written verbatim. A sequence of strings is concatenated in order
/// with no separator; each entry is expected to be already-rendered markup or literal
/// text. `()` and `None` produce no children.
///
/// Nothing is escaped here: see [`crate::Barf::text`] for that.
pub trait IntoChildren {
    /// Append the flattened children to `out`.
    fn flatten_into(self, out: &mut BumpString<'_>);
}

/// A single string usable as one entry of a children sequence.
pub trait ChildText {
    /// The text of this child.
    fn child_text(&self) -> &str;
}

macro_rules! text_children {
    ($($ty:ty),*) => {
        $(
            impl ChildText for $ty {
                fn child_text(&self) -> &str {
                    self
                }
            }
            impl IntoChildren for $ty {
                fn flatten_into(self, out: &mut BumpString<'_>) {
                    out.push_str(self.child_text());
                }
            }
        )*
    };
}
text_children!(&str, String, &String, BumpString<'_>, &BumpString<'_>);

impl IntoChildren for () {
    fn flatten_into(self, _out: &mut BumpString<'_>) {}
}
impl<T: IntoChildren> IntoChildren for Option<T> {
    fn flatten_into(self, out: &mut BumpString<'_>) {
        if let Some(children) = self {
            children.flatten_into(out);
        }
    }
}
impl<T: ChildText, const N: usize> IntoChildren for [T; N] {
    fn flatten_into(self, out: &mut BumpString<'_>) {
        for child in &self {
            out.push_str(child.child_text());
        }
    }
}
impl<T: ChildText> IntoChildren for Vec<T> {
    fn flatten_into(self, out: &mut BumpString<'_>) {
        self.as_slice().flatten_into(out);
    }
}
impl<T: ChildText> IntoChildren for &[T] {
    fn flatten_into(self, out: &mut BumpString<'_>) {
        for child in self {
            out.push_str(child.child_text());
        }
    }
}
impl<T: ChildText> IntoChildren for bumpalo::collections::Vec<'_, T> {
    fn flatten_into(self, out: &mut BumpString<'_>) {
        self.as_slice().flatten_into(out);
    }
}
