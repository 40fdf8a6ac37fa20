//! Rendering text that may contain one allowed kind of tag.
//!
//! Plain text is appended as text nodes, so nothing in it can become markup.
//! Each tag fragment goes through two stages:
//!
//! 1. it is parsed into a detached fragment tree that is never attached
//!    anywhere (the equivalent of a `<template>`'s content);
//! 2. a fixed allow-list of fields is read out of the first element of that
//!    tree and copied onto a brand-new element.
//!
//! Event handlers, styles, ids, nested elements and every other attribute
//! stay behind in the detached tree and are dropped with it.

use stoffe_common::url::resolve_url;
use stoffe_common::warning::warn_once;
use stoffe_dom::{DomTree, ElementData, NodeContainer, NodeId};
use stoffe_html::{ParseIssue, parse_fragment, parse_fragment_with_issues};

use crate::error::TagTextError;
use crate::splitter::{FragmentKind, scan};

/// Elements with an `href` IDL attribute.
///
/// [§ 4.6.2](https://html.spec.whatwg.org/multipage/links.html#api-for-a-and-area-elements),
/// [§ 4.2.3](https://html.spec.whatwg.org/multipage/semantics.html#the-base-element),
/// [§ 4.2.4](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
const HREF_ELEMENTS: &[&str] = &["a", "area", "base", "link"];

/// Elements with a `target` IDL attribute.
const TARGET_ELEMENTS: &[&str] = &["a", "area", "base", "form"];

/// Options for [`set_text_with_tag_opts`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Document base URL used to resolve relative `href` values. Without one,
    /// relative values are copied as written.
    pub base_url: Option<String>,
}

/// The fields allowed to cross from parsed markup into the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedProperties {
    /// Text content of the parsed element (descendant text, markup removed).
    pub text: String,
    /// The `class` attribute, if present.
    pub class: Option<String>,
    /// The resolved `href`, if present and the element kind exposes one.
    pub href: Option<String>,
    /// The `target`, if present and the element kind exposes one.
    pub target: Option<String>,
}

impl AllowedProperties {
    /// Read the allow-listed fields out of `markup`.
    ///
    /// Returns `None` when the markup contains no element.
    #[must_use]
    pub fn from_markup(markup: &str, options: &RenderOptions) -> Option<Self> {
        Self::from_fragment(&parse_fragment(markup), options)
    }

    /// Stage 2 over an already parsed, detached fragment tree.
    fn from_fragment(fragment: &DomTree, options: &RenderOptions) -> Option<Self> {
        let first = fragment.first_element_child(NodeId::ROOT)?;
        let element = fragment.as_element(first)?;
        let tag = element.tag_name.as_str();

        // Stage 2: copy the allow-list.
        Some(Self {
            text: fragment.text_content(first),
            class: element.attr("class").map(str::to_string),
            href: element
                .attr("href")
                .filter(|_| HREF_ELEMENTS.contains(&tag))
                .map(|href| resolve_url(href, options.base_url.as_deref())),
            target: element
                .attr("target")
                .filter(|_| TARGET_ELEMENTS.contains(&tag))
                .map(str::to_string),
        })
    }

    /// Build a fresh element named `tag_name` carrying these fields as
    /// attributes. The text is not included; it becomes a child node.
    ///
    /// `href` and `target` are only set when `tag_name` itself exposes them.
    #[must_use]
    pub fn to_element(&self, tag_name: &str) -> ElementData {
        let mut element = ElementData::new(tag_name);
        let tag = element.tag_name.as_str();
        let fields = [
            ("class", &self.class, true),
            ("href", &self.href, HREF_ELEMENTS.contains(&tag)),
            ("target", &self.target, TARGET_ELEMENTS.contains(&tag)),
        ];
        for (name, value, allowed) in fields {
            if allowed && let Some(value) = value {
                let _ = element.attrs.insert(name.to_string(), value.clone());
            }
        }
        element
    }
}

/// What a render call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Text nodes appended (empty ones included).
    pub text_nodes: usize,
    /// Elements appended.
    pub elements: usize,
    /// Problems recovered from, in the order met.
    pub issues: Vec<TagTextError>,
    /// Parse errors inside tag fragments. The fragment is still rendered from
    /// whatever parsed.
    pub markup_issues: Vec<ParseIssue>,
}

/// Replace the content of `container` with `text`, turning every
/// `open_marker ... close_marker` span into a new `tag_name` element that
/// carries only the allow-listed fields of the span's markup.
///
/// The container is always cleared first. Rendering never fails: an
/// unterminated tag is rendered as text and a span without an element is
/// skipped, both reported in [`RenderReport::issues`] and through the
/// warning sink.
pub fn set_text_with_tag(
    container: &mut impl NodeContainer,
    text: &str,
    tag_name: &str,
    open_marker: &str,
    close_marker: &str,
) -> RenderReport {
    set_text_with_tag_opts(
        container,
        text,
        tag_name,
        open_marker,
        close_marker,
        &RenderOptions::default(),
    )
}

/// [`set_text_with_tag`] with explicit [`RenderOptions`].
pub fn set_text_with_tag_opts(
    container: &mut impl NodeContainer,
    text: &str,
    tag_name: &str,
    open_marker: &str,
    close_marker: &str,
    options: &RenderOptions,
) -> RenderReport {
    let mut report = RenderReport::default();

    let (fragments, problem) = scan(text, open_marker, close_marker);
    if let Some(problem) = problem {
        warn_once("Renderer", &format!("{}; rendered as text", problem.kind()));
        report.issues.push(problem);
    }

    container.remove_all_children();

    for (index, fragment) in fragments.iter().enumerate() {
        match fragment.kind {
            FragmentKind::Text => {
                container.append_text(fragment.value);
                report.text_nodes += 1;
            }
            FragmentKind::Tag => {
                // Stage 1: detached, inert tree.
                let (parsed, markup_issues) = parse_fragment_with_issues(fragment.value);
                report.markup_issues.extend(markup_issues);

                if let Some(allowed) = AllowedProperties::from_fragment(&parsed, options) {
                    container.append_element(allowed.to_element(tag_name), &allowed.text);
                    report.elements += 1;
                } else {
                    let issue = TagTextError::MalformedFragment {
                        index,
                        value: fragment.value.to_string(),
                    };
                    warn_once("Renderer", &format!("{}; skipped", issue.kind()));
                    report.issues.push(issue);
                }
            }
        }
    }

    report
}
