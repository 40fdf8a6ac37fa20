use std::fmt::{self, Write};

use stoffe_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::{HTMLTokenizer, Token};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A parse error or warning encountered during tree construction.
///
/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Description of the problem.
    pub message: String,
    /// Index into the token stream where this issue was encountered, or
    /// `None` for issues raised by the tokenizer.
    pub token_index: Option<usize>,
}

/// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#the-template-element)
///
/// "The template element is used to declare fragments of HTML that can be
/// cloned and inserted in the document by script. ... the template contents
/// are not rendered"
///
/// Builds the content of a detached template from a token stream. The
/// resulting [`DomTree`] is never connected to a live document: nothing in it
/// is executed, fetched or styled. Callers read what they need out of it and
/// drop it.
///
/// NOTE: This is a simplified "in body" tree builder. There is no adoption
/// agency, no implied end tags and no table handling; end tags close the
/// nearest matching open element and stray end tags are ignored.
pub struct FragmentParser {
    tokens: Vec<Token>,
    tree: DomTree,
    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    open_elements: Vec<NodeId>,
    issues: Vec<ParseIssue>,
}

impl FragmentParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            tree: DomTree::new(),
            open_elements: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Build the fragment tree. The fragment's top-level nodes are the
    /// children of the tree's root.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Build the fragment tree and return the issues encountered.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.into_iter().enumerate() {
            match token {
                Token::Character { data } => self.insert_character(data),
                Token::Comment { data } => {
                    let comment = self.tree.alloc(NodeType::Comment(data));
                    self.tree.append_child(self.current_node(), comment);
                }
                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                } => {
                    let attrs: AttributesMap = attributes
                        .into_iter()
                        .map(|attr| (attr.name, attr.value))
                        .collect();
                    self.insert_element(index, name, attrs, self_closing);
                }
                Token::EndTag { name, .. } => self.close_element(index, &name),
                Token::EndOfFile => break,
            }
        }
        (self.tree, self.issues)
    }

    /// [§ 13.2.6.1 Creating and inserting nodes](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-place-for-inserting-a-node)
    ///
    /// "the current node is the bottommost node in this stack of open elements"
    /// - or the fragment root while the stack is empty.
    fn current_node(&self) -> NodeId {
        self.open_elements.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    ///
    /// "If there is a Text node immediately before the adjusted insertion
    /// location, then append data to that Text node's data. Otherwise, create
    /// a new Text node whose data is data"
    fn insert_character(&mut self, c: char) {
        let parent = self.current_node();
        if let Some(&last) = self.tree.children(parent).last()
            && let Some(node) = self.tree.get_mut(last)
            && let NodeType::Text(text) = &mut node.node_type
        {
            text.push(c);
            return;
        }
        let text = self.tree.alloc(NodeType::Text(c.to_string()));
        self.tree.append_child(parent, text);
    }

    /// [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
    fn insert_element(
        &mut self,
        index: usize,
        tag_name: String,
        attrs: AttributesMap,
        self_closing: bool,
    ) {
        // [§ 13.2.6.4.7 "in body"](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
        // "A start tag whose tag name is "a" - If the list of active formatting
        // elements contains an a element ... act as if an end tag with the tag
        // name "a" had been seen"
        if tag_name == "a" && self.has_open_element("a") {
            self.issue(index, "nested <a> closes the previous one");
            self.pop_until("a");
        }

        let element = self
            .tree
            .alloc(NodeType::Element(ElementData { tag_name, attrs }));
        self.tree.append_child(self.current_node(), element);

        let is_void = self
            .tree
            .as_element(element)
            .is_some_and(|e| VOID_ELEMENTS.contains(&e.tag_name.as_str()));
        if is_void {
            return;
        }
        if self_closing {
            // "non-void-html-element-start-tag-with-trailing-solidus"
            self.issue(index, "self-closing flag on a non-void element ignored");
        }
        self.open_elements.push(element);
    }

    /// "An end tag whose tag name is ... - If the stack of open elements does
    /// not have an element in scope that is an HTML element with the same tag
    /// name as that of the token, then this is a parse error; ignore the token."
    fn close_element(&mut self, index: usize, tag_name: &str) {
        if !self.has_open_element(tag_name) {
            self.issue(index, &format!("stray end tag </{tag_name}> ignored"));
            return;
        }
        let current_matches = self
            .tree
            .as_element(self.current_node())
            .is_some_and(|e| e.tag_name == tag_name);
        if !current_matches {
            self.issue(index, &format!("</{tag_name}> closes unclosed children"));
        }
        self.pop_until(tag_name);
    }

    fn has_open_element(&self, tag_name: &str) -> bool {
        self.open_elements
            .iter()
            .any(|&id| self.tree.as_element(id).is_some_and(|e| e.tag_name == tag_name))
    }

    /// "Pop elements from the stack of open elements until an element with the
    /// same tag name as the token has been popped from the stack."
    fn pop_until(&mut self, tag_name: &str) {
        while let Some(id) = self.open_elements.pop() {
            if self.tree.as_element(id).is_some_and(|e| e.tag_name == tag_name) {
                break;
            }
        }
    }

    fn issue(&mut self, index: usize, message: &str) {
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: Some(index),
        });
    }
}

/// Tokenize and parse `markup` into a detached fragment tree.
#[must_use]
pub fn parse_fragment(markup: &str) -> DomTree {
    parse_fragment_with_issues(markup).0
}

/// Like [`parse_fragment`], also returning tokenizer and tree-construction
/// issues (tokenizer issues first).
#[must_use]
pub fn parse_fragment_with_issues(markup: &str) -> (DomTree, Vec<ParseIssue>) {
    let mut tokenizer = HTMLTokenizer::new(markup.to_string());
    tokenizer.run();
    let mut issues: Vec<ParseIssue> = tokenizer
        .errors()
        .iter()
        .map(|e| ParseIssue {
            message: format!("{} at byte {}", e.code, e.position),
            token_index: None,
        })
        .collect();

    let (tree, tree_issues) = FragmentParser::new(tokenizer.into_tokens()).run_with_issues();
    issues.extend(tree_issues);
    (tree, issues)
}

/// Render the subtree at `id` as an indented outline, one node per line.
///
/// Attributes are sorted by name so the output is stable.
#[must_use]
pub fn tree_to_string(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, tree, id, 0);
    out
}

/// Write the subtree at `id` to `out`, starting at `indent` levels.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_tree(out: &mut impl Write, tree: &DomTree, id: NodeId, indent: usize) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    let Some(node) = tree.get(id) else {
        return Ok(());
    };
    match &node.node_type {
        NodeType::Document => writeln!(out, "{prefix}#fragment")?,
        NodeType::Element(data) => {
            let mut attrs: Vec<(&String, &String)> = data.attrs.iter().collect();
            attrs.sort();
            write!(out, "{prefix}<{}", data.tag_name)?;
            for (name, value) in attrs {
                if value.is_empty() {
                    write!(out, " {name}")?;
                } else {
                    write!(out, " {name}=\"{value}\"")?;
                }
            }
            writeln!(out, ">")?;
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")?;
        }
        NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->")?,
    }
    for &child_id in tree.children(id) {
        write_tree(out, tree, child_id, indent + 1)?;
    }
    Ok(())
}
