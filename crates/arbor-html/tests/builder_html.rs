use arbor_core::prelude::*;
use arbor_html::to_html;
use pretty_assertions::assert_eq;

#[test]
fn tag_spec_with_adjacent_markers() {
    assert_eq!(
        to_html(&element("span#faq.right", ())),
        r#"<span id="faq" class="right"></span>"#
    );
}

#[test]
fn tag_spec_with_spaced_markers() {
    assert_eq!(
        to_html(&element("table .grid12 .tiny #mainTable", ())),
        r#"<table id="mainTable" class="grid12 tiny"></table>"#
    );
}

#[test]
fn nested_tags_and_text() {
    assert_eq!(
        to_html(&element(
            "div",
            (
                "Announcement: ",
                element("span", "hello"),
                " ",
                element("span", "world"),
            ),
        )),
        "<div>Announcement: <span>hello</span> <span>world</span></div>"
    );
}

#[test]
fn mapped_children() {
    let arr = ["apa", "bepa"];
    assert_eq!(
        to_html(&element(
            "div",
            arr.iter().map(|e| element("span", *e)).collect::<Vec<_>>(),
        )),
        "<div><span>apa</span><span>bepa</span></div>"
    );
}

#[test]
fn conditional_content_is_filtered() {
    let arr = ["apa", "bepa"];
    assert_eq!(
        to_html(&element(
            "div",
            (
                (arr[0] != "apa").then_some("first"),
                (arr[1] != "apa").then_some("second"),
                arr.get(2).copied(),
            ),
        )),
        "<div>second</div>"
    );
}

#[test]
fn id_descriptor() {
    assert_eq!(
        to_html(&element("div", id("root"))),
        r#"<div id="root"></div>"#
    );
}

#[test]
fn classes_descriptor() {
    assert_eq!(
        to_html(&element("div", classes([("example", true)]))),
        r#"<div class="example"></div>"#
    );
}

#[test]
fn classes_accumulate_across_descriptors() {
    assert_eq!(
        to_html(&element(
            "div",
            (
                classes([("nav", true), ("strip", true)]),
                classes([("left-side", true)]),
            ),
        )),
        r#"<div class="nav strip left-side"></div>"#
    );
}

#[test]
fn class_turned_off_again_disappears() {
    assert_eq!(
        to_html(&element(
            "div",
            (classes([("nav", true)]), classes([("nav", false)])),
        )),
        "<div></div>"
    );
}

#[test]
fn classed_single() {
    assert_eq!(
        to_html(&element("div", classed("navbar"))),
        r#"<div class="navbar"></div>"#
    );
}

#[test]
fn classed_splits_on_whitespace() {
    assert_eq!(
        to_html(&element(
            "div",
            classed(" colourless green idea sleeping  furious ")
        )),
        r#"<div class="colourless green idea sleeping furious"></div>"#
    );
}

#[test]
fn styles_descriptor() {
    assert_eq!(
        to_html(&element(
            "div",
            styles([("display", "inline-block"), ("text-transform", "uppercase")]),
        )),
        r#"<div style="display: inline-block; text-transform: uppercase"></div>"#
    );
}

#[test]
fn single_style() {
    assert_eq!(
        to_html(&element("div", style("display", "inline-block"))),
        r#"<div style="display: inline-block"></div>"#
    );
}

#[test]
fn attrs_descriptor() {
    assert_eq!(
        to_html(&element("div", attrs([("example", 1)]))),
        r#"<div example="1"></div>"#
    );
}

#[test]
fn attrs_accumulate_across_descriptors() {
    assert_eq!(
        to_html(&element(
            "div",
            (attrs([("a", 1), ("b", 2)]), attrs([("c", 3)])),
        )),
        r#"<div a="1" b="2" c="3"></div>"#
    );
}

#[test]
fn later_attr_wins() {
    assert_eq!(
        to_html(&element("div", (attrs([("a", 1)]), attrs([("a", 2)])))),
        r#"<div a="2"></div>"#
    );
}

#[test]
fn key_is_structural_not_rendered() {
    let node = element("div", key("example_key"));
    assert_eq!(node.key(), Some(&Key::Str("example_key".into())));
    assert_eq!(to_html(&node), "<div></div>");
}

#[test]
fn handler_by_event_kind() {
    let node = element("div", on(EventKind::KeyDown, |_| {}));
    assert!(node.as_element().unwrap().on.contains_key("keydown"));
}

#[test]
fn handler_by_arbitrary_name() {
    let node = element("div", on_named("keydown", |_| {}));
    assert!(node.as_element().unwrap().on.contains_key("keydown"));
}

#[test]
fn hook_registration() {
    let node = element("div", hook(HookKind::Insert, |_| {}));
    assert!(node.as_element().unwrap().hooks.contains_key(&HookKind::Insert));
}

#[test]
fn props_are_structural_only() {
    let node = element("div", props([("example", 1)]));
    let el = node.as_element().unwrap();
    assert_eq!(el.props.get("example"), Some(&Value::Int(1)));
    assert_eq!(to_html(&node), "<div></div>");
}

#[test]
fn props_accumulate_and_later_wins() {
    let node = element("div", (props([("a", 1), ("b", 2)]), props([("c", 3)])));
    let el = node.as_element().unwrap();
    assert_eq!(el.props.get("a"), Some(&Value::Int(1)));
    assert_eq!(el.props.get("b"), Some(&Value::Int(2)));
    assert_eq!(el.props.get("c"), Some(&Value::Int(3)));

    let node = element("div", (props([("a", 1)]), props([("a", 2)])));
    assert_eq!(
        node.as_element().unwrap().props.get("a"),
        Some(&Value::Int(2))
    );
}

#[test]
fn dataset_renders_as_data_attributes() {
    let node = element("div", dataset([("foo", "bar")]));
    assert_eq!(
        node.as_element().unwrap().dataset.get("foo").map(String::as_str),
        Some("bar")
    );
    assert_eq!(to_html(&node), r#"<div data-foo="bar"></div>"#);
}

#[test]
fn text_and_attribute_values_are_escaped() {
    assert_eq!(
        to_html(&element("span", "1 < 2 & 3 > 2")),
        "<span>1 &lt; 2 &amp; 3 &gt; 2</span>"
    );
    assert_eq!(
        to_html(&element("div", attrs([("title", r#"say "hi""#)]))),
        r#"<div title="say &quot;hi&quot;"></div>"#
    );
}

#[test]
fn boolean_attrs_render_bare() {
    assert_eq!(
        to_html(&element("input", attrs([("disabled", true)]))),
        "<input disabled>"
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    assert_eq!(
        to_html(&element("div", (element("br", ()), "after"))),
        "<div><br>after</div>"
    );
}
