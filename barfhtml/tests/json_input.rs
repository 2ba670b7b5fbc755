use std::cell::RefCell;

use barfhtml::{bumpalo::Bump, json::deep_merge, Barf, BarfError, Warning};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn render(
    b: &Barf<'_>,
    tag: &str,
    attributes: Value,
    children: Value,
    options: Value,
) -> String {
    b.serialize_value(tag, &attributes, &children, &options)
        .unwrap()
        .as_str()
        .to_string()
}

#[test]
fn test_matches_typed_rendering() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    let inner = render(
        &b,
        "p",
        json!({ "style": { "fontSize": "12px" } }),
        json!(["Hello World!"]),
        Value::Null,
    );
    let link = render(
        &b,
        "a",
        json!({ "href": "http://www.example.com" }),
        json!([inner]),
        Value::Null,
    );
    let output = render(&b, "div", json!({}), json!([link]), Value::Null);
    assert_eq!(
        output,
        r#"<div><a href="http://www.example.com"><p style="font-size:12px;">Hello World!</p></a></div>"#
    );
}

#[test]
fn test_options_control_case_and_singular() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    assert_eq!(
        render(
            &b,
            "p",
            json!({ "style": { "fontSize": "12px" } }),
            Value::Null,
            json!({ "convertCamelCase": false }),
        ),
        r#"<p style="fontSize:12px;"></p>"#
    );
    assert_eq!(
        render(
            &b,
            "img",
            json!({ "src": "x.png" }),
            json!("ignored"),
            json!({ "singular": true }),
        ),
        r#"<img src="x.png">"#
    );
    assert_eq!(
        render(&b, "hr", Value::Null, Value::Null, json!({ "bSingular": true })),
        "<hr>"
    );
}

#[test]
fn test_malformed_attributes_warn_and_render_as_empty() {
    let warnings = RefCell::new(Vec::new());
    let sink = |w: &Warning| warnings.borrow_mut().push(w.clone());
    let bump = Bump::new();
    let b = Barf::new(&bump).with_diagnostics(&sink);

    let malformed = render(&b, "div", json!("class=x"), json!("body"), Value::Null);
    let empty = render(&b, "div", json!({}), json!("body"), Value::Null);

    assert_eq!(malformed, empty);
    assert_eq!(
        warnings.borrow().clone(),
        vec![Warning::AttributesIgnored {
            tag: "div".into(),
            found: "a string",
        }]
    );
}

#[test]
fn test_array_attributes_are_malformed() {
    let warnings = RefCell::new(Vec::new());
    let sink = |w: &Warning| warnings.borrow_mut().push(w.clone());
    let bump = Bump::new();
    let b = Barf::new(&bump).with_diagnostics(&sink);

    assert_eq!(
        render(&b, "div", json!(["a"]), Value::Null, Value::Null),
        "<div></div>"
    );
    assert_eq!(
        warnings.borrow().clone(),
        vec![Warning::AttributesIgnored {
            tag: "div".into(),
            found: "an array",
        }]
    );
}

#[test]
fn test_malformed_children_warn_and_render_as_empty() {
    let warnings = RefCell::new(Vec::new());
    let sink = |w: &Warning| warnings.borrow_mut().push(w.clone());
    let bump = Bump::new();
    let b = Barf::new(&bump).with_diagnostics(&sink);

    assert_eq!(render(&b, "span", Value::Null, json!(42), Value::Null), "<span></span>");
    assert_eq!(
        render(&b, "span", Value::Null, json!({ "a": "b" }), Value::Null),
        "<span></span>"
    );
    assert_eq!(
        warnings.borrow().clone(),
        vec![
            Warning::ChildrenIgnored {
                tag: "span".into(),
                found: "a number",
            },
            Warning::ChildrenIgnored {
                tag: "span".into(),
                found: "an object",
            },
        ]
    );
}

#[test]
fn test_attribute_value_kinds() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    assert_eq!(
        render(
            &b,
            "input",
            json!({ "maxLength": 10, "step": 0.5, "readOnly": null }),
            Value::Null,
            Value::Null,
        ),
        r#"<input max-length="10" step="0.5" readOnly></input>"#
    );
}

#[test]
fn test_whole_floats_render_without_fraction() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    assert_eq!(
        render(
            &b,
            "div",
            json!({ "width": 10.0, "style": { "opacity": 1.0, "flexGrow": 2, "lineHeight": 1.5 } }),
            Value::Null,
            Value::Null,
        ),
        r#"<div width="10" style="opacity:1;flex-grow:2;line-height:1.5;"></div>"#
    );
}

#[test]
fn test_non_string_child_is_an_error() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    let err = b
        .serialize_value("ul", &Value::Null, &json!(["<li>a</li>", 7]), &Value::Null)
        .unwrap_err();
    match err {
        BarfError::NonStringChild { tag, index, found } => {
            assert_eq!(tag, "ul");
            assert_eq!(index, 1);
            assert_eq!(found, "a number");
        }
        other => panic!("Expected NonStringChild error, got {other:?}"),
    }
}

#[test]
fn test_unsupported_values_are_errors() {
    let bump = Bump::new();
    let b = Barf::new(&bump);

    let err = b
        .serialize_value("input", &json!({ "checked": true }), &Value::Null, &Value::Null)
        .unwrap_err();
    assert!(matches!(
        err,
        BarfError::UnsupportedAttributeValue { ref key, found: "a boolean" } if key == "checked"
    ));
    assert_eq!(
        err.to_string(),
        "attribute `checked` has an unsupported value (a boolean)"
    );

    let err = b
        .serialize_value(
            "div",
            &json!({ "style": { "margin": [0, 1] } }),
            &Value::Null,
            &Value::Null,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BarfError::UnsupportedStyleValue { ref property, found: "an array" } if property == "margin"
    ));
}

#[test]
fn test_invalid_options_are_errors() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    let err = b
        .serialize_value("p", &Value::Null, &Value::Null, &json!("singular"))
        .unwrap_err();
    assert!(matches!(err, BarfError::InvalidOptions(_)));
}

#[test]
fn test_options_must_be_an_object() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    for options in [json!([false, true]), json!(true), json!(1)] {
        let err = b
            .serialize_value("p", &Value::Null, &json!("x"), &options)
            .unwrap_err();
        assert!(
            matches!(err, BarfError::InvalidOptions(_)),
            "{options} should be rejected, got {err:?}"
        );
    }
    let err = b
        .named("p")
        .render_value(&Value::Null, &json!("x"), &json!([false, true]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid render options: expected an object, found an array"
    );
}

#[test]
fn test_shortcut_render_value_merges_options() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    let meta = b.named("meta");
    assert_eq!(
        meta.render_value(&json!({ "charset": "utf-8" }), &Value::Null, &Value::Null)
            .unwrap()
            .as_str(),
        r#"<meta charset="utf-8">"#
    );
    assert_eq!(
        meta.render_value(&Value::Null, &json!("x"), &json!({ "singular": false }))
            .unwrap()
            .as_str(),
        "<meta>x</meta>"
    );
}

#[test]
fn test_deep_merged_attributes_render() {
    let bump = Bump::new();
    let b = Barf::new(&bump);
    let attributes = deep_merge(
        json!({ "class": "card", "style": { "color": "red", "padding": "1em" } }),
        json!({ "style": { "color": "blue" } }),
    );
    assert_eq!(
        render(&b, "div", attributes, Value::Null, Value::Null),
        r#"<div class="card" style="color:blue;padding:1em;"></div>"#
    );
}
