//! Rendering from loosely-typed [`serde_json::Value`] input.
//!
//! This accepts the same shapes the typed API does, but checks them at runtime:
//! attributes and children of the wrong shape are dropped with a [`Warning`], while
//! values that cannot be rendered at all are reported as a [`BarfError`].

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;
use serde_json::{Map, Number, Value};

use crate::error::Result;
use crate::{
    Attribute, AttributeValue, Attributes, Barf, BarfError, Declaration, Declarations, Options,
    Shortcut, Warning,
};

impl<'bump> Barf<'bump> {
    /// Render an element from JSON attributes, children and options.
    ///
    /// - `attributes` must be an object or `null`; anything else is dropped with a warning.
    /// - `children` must be a string, an array of strings, or `null`; other non-array
    ///   values are dropped with a warning, and a non-string array entry is an error.
    /// - `options` is `null` or an object with `convertCamelCase` and/or `singular`.
    ///
    /// ```
    /// use barfhtml::{bumpalo::Bump, Barf};
    /// use serde_json::json;
    ///
    /// let bump = Bump::new();
    /// let b = Barf::new(&bump);
    /// let attributes = json!({ "maxLength": 3, "disabled": null });
    /// let html = b
    ///     .serialize_value("input", &attributes, &json!(null), &json!(null))
    ///     .unwrap();
    /// assert_eq!(html.as_str(), r#"<input max-length="3" disabled></input>"#);
    /// ```
    pub fn serialize_value(
        &self,
        tag: &str,
        attributes: &Value,
        children: &Value,
        options: &Value,
    ) -> Result<BumpString<'bump>> {
        let options = parse_options(options)?;
        self.serialize_value_with(tag, attributes, children, options)
    }

    fn serialize_value_with(
        &self,
        tag: &str,
        attributes: &Value,
        children: &Value,
        options: Options,
    ) -> Result<BumpString<'bump>> {
        let attributes = match attributes {
            Value::Null => Attributes::new_in(self.bump()),
            Value::Object(map) => attributes_from_map(self.bump(), map)?,
            other => {
                self.warn(Warning::AttributesIgnored {
                    tag: tag.to_string(),
                    found: kind(other),
                });
                Attributes::new_in(self.bump())
            }
        };

        let children = match children {
            Value::Null => BumpString::new_in(self.bump()),
            Value::String(text) => BumpString::from_str_in(text, self.bump()),
            Value::Array(list) => flatten_list(self.bump(), tag, list)?,
            other => {
                self.warn(Warning::ChildrenIgnored {
                    tag: tag.to_string(),
                    found: kind(other),
                });
                BumpString::new_in(self.bump())
            }
        };

        Ok(self.serialize(tag, attributes, children, options))
    }
}

impl<'bump> Shortcut<'bump> {
    /// Render the element from JSON input; see [`Barf::serialize_value`].
    ///
    /// Options set in `options` override this shortcut's defaults.
    pub fn render_value(
        &self,
        attributes: &Value,
        children: &Value,
        options: &Value,
    ) -> Result<BumpString<'bump>> {
        let options = parse_options(options)?.or(self.defaults);
        self.barf
            .serialize_value_with(self.tag, attributes, children, options)
    }
}

/// Overlay `b` onto `a`, recursing where both hold an object at the same key.
///
/// Both inputs are consumed; any other pair of values is resolved in favour of `b`.
pub fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut ours), Value::Object(theirs)) => {
            for (key, theirs) in theirs {
                match ours.get_mut(&key) {
                    Some(existing) => {
                        let previous = std::mem::take(existing);
                        *existing = deep_merge(previous, theirs);
                    }
                    None => {
                        ours.insert(key, theirs);
                    }
                }
            }
            Value::Object(ours)
        }
        (_, theirs) => theirs,
    }
}

fn parse_options(options: &Value) -> Result<Options> {
    match options {
        Value::Null => Ok(Options::new()),
        Value::Object(_) => serde_json::from_value(options.clone())
            .map_err(|e| BarfError::InvalidOptions(Box::new(e))),
        // serde reads a sequence positionally into a struct, so arrays never reach it
        other => Err(BarfError::InvalidOptions(
            format!("expected an object, found {}", kind(other)).into(),
        )),
    }
}

/// Whole numbers print without a fractional part, so `1.0` renders as `1`.
fn number_in<'bump>(bump: &'bump Bump, n: &Number) -> BumpString<'bump> {
    if let Some(i) = n.as_i64() {
        bumpalo::format!(in bump, "{}", i)
    } else if let Some(u) = n.as_u64() {
        bumpalo::format!(in bump, "{}", u)
    } else if let Some(f) = n.as_f64() {
        bumpalo::format!(in bump, "{}", f)
    } else {
        bumpalo::format!(in bump, "{}", n)
    }
}

fn attributes_from_map<'bump>(
    bump: &'bump Bump,
    map: &Map<String, Value>,
) -> Result<Attributes<'bump>> {
    let mut attributes = Attributes::new_in(bump);
    for (key, value) in map {
        let value = match value {
            Value::String(s) => AttributeValue::Str(BumpString::from_str_in(s, bump)),
            Value::Number(n) => AttributeValue::Str(number_in(bump, n)),
            Value::Null => AttributeValue::Flag,
            Value::Object(declarations) => {
                AttributeValue::Style(declarations_from_map(bump, declarations)?)
            }
            other => {
                return Err(BarfError::UnsupportedAttributeValue {
                    key: key.clone(),
                    found: kind(other),
                })
            }
        };
        attributes.insert(Attribute {
            key: BumpString::from_str_in(key, bump),
            value,
        });
    }
    Ok(attributes)
}

fn declarations_from_map<'bump>(
    bump: &'bump Bump,
    map: &Map<String, Value>,
) -> Result<Declarations<'bump>> {
    let mut declarations = Declarations::new_in(bump);
    for (property, value) in map {
        let value = match value {
            Value::String(s) => BumpString::from_str_in(s, bump),
            Value::Number(n) => number_in(bump, n),
            Value::Bool(b) => bumpalo::format!(in bump, "{}", b),
            other => {
                return Err(BarfError::UnsupportedStyleValue {
                    property: property.clone(),
                    found: kind(other),
                })
            }
        };
        declarations.insert(Declaration {
            property: BumpString::from_str_in(property, bump),
            value,
        });
    }
    Ok(declarations)
}

fn flatten_list<'bump>(
    bump: &'bump Bump,
    tag: &str,
    list: &[Value],
) -> Result<BumpString<'bump>> {
    let mut output = BumpString::new_in(bump);
    for (index, child) in list.iter().enumerate() {
        match child {
            Value::String(text) => output.push_str(text),
            other => {
                return Err(BarfError::NonStringChild {
                    tag: tag.to_string(),
                    index,
                    found: kind(other),
                })
            }
        }
    }
    Ok(output)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
