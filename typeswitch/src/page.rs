//! In-memory document used by the CLI preview and by tests.
//!
//! Nodes live in a flat vector and are addressed by index. The tree only
//! models what the font applier observes: tags, the `id` and `class`
//! attributes, inline style declarations and text.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::document::Document;
use crate::rules::Selector;

/// Index of a node inside a [`Page`].
pub type NodeId = usize;

/// Nominal line height used to answer layout reads.
const LINE_HEIGHT: f64 = 16.0;

#[derive(Debug)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    class: String,
    style: BTreeMap<String, String>,
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: Option<NodeId>,
    layout_reads: usize,
}

impl Tree {
    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    fn push_element(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        self.push(
            NodeKind::Element(ElementData {
                tag: tag.to_string(),
                id: None,
                class: String::new(),
                style: BTreeMap::new(),
            }),
            parent,
        )
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.nodes.get(node).map(|node| &node.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(node).map(|node| &mut node.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    /// Pre-order traversal starting at (and including) `start`.
    fn preorder(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            order.push(node);
            if let Some(entry) = self.nodes.get(node) {
                stack.extend(entry.children.iter().rev().copied());
            }
        }
        order
    }
}

/// Shared handle to an in-memory document.
#[derive(Debug, Clone)]
pub struct Page {
    tree: Rc<RefCell<Tree>>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// A parsed document with `<html>`, `<head>` and `<body>`.
    pub fn new() -> Self {
        let page = Self::loading();
        page.attach_body();
        page
    }

    /// A document whose `<body>` has not been parsed yet.
    pub fn loading() -> Self {
        let mut tree = Tree {
            nodes: Vec::new(),
            root: 0,
            head: 0,
            body: None,
            layout_reads: 0,
        };
        tree.root = tree.push_element("html", None);
        tree.head = tree.push_element("head", Some(tree.root));
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// Attach `<body>` if missing and return it.
    pub fn attach_body(&self) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        if let Some(body) = tree.body {
            return body;
        }
        let root = tree.root;
        let body = tree.push_element("body", Some(root));
        tree.body = Some(body);
        body
    }

    pub fn head(&self) -> NodeId {
        self.tree.borrow().head
    }

    /// Append a child element and return it.
    pub fn append_element(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree.borrow_mut().push_element(tag, Some(parent))
    }

    /// Append a child text node and return it.
    pub fn append_text(&self, parent: NodeId, text: &str) -> NodeId {
        self.tree
            .borrow_mut()
            .push(NodeKind::Text(text.to_string()), Some(parent))
    }

    pub fn set_class(&self, node: NodeId, class: &str) {
        if let Some(element) = self.tree.borrow_mut().element_mut(node) {
            element.class = class.to_string();
        }
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        if let Some(element) = self.tree.borrow_mut().element_mut(node) {
            element.id = Some(id.to_string());
        }
    }

    /// Inline value of `property` on `node`, if set.
    pub fn inline_style(
        &self,
        node: NodeId,
        property: &str,
    ) -> Option<String> {
        self.tree
            .borrow()
            .element(node)
            .and_then(|data| data.style.get(property).cloned())
    }

    /// Concatenated text of every text node under `node`.
    pub fn text_content(&self, node: NodeId) -> String {
        let tree = self.tree.borrow();
        tree.preorder(node)
            .into_iter()
            .filter_map(|id| match &tree.nodes[id].kind {
                NodeKind::Text(text) => Some(text.as_str()),
                NodeKind::Element(_) => None,
            })
            .collect()
    }

    /// Number of attached elements carrying `id`.
    pub fn count_with_id(&self, id: &str) -> usize {
        let tree = self.tree.borrow();
        tree.preorder(tree.root)
            .into_iter()
            .filter(|node| {
                tree.element(*node)
                    .is_some_and(|data| data.id.as_deref() == Some(id))
            })
            .count()
    }

    /// Attached elements in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.preorder(tree.root)
            .into_iter()
            .filter(|node| tree.element(*node).is_some())
            .collect()
    }

    /// How many layout reads the page has answered.
    pub fn layout_reads(&self) -> usize {
        self.tree.borrow().layout_reads
    }
}

impl Document for Page {
    type Element = NodeId;

    fn document_element(&self) -> NodeId {
        self.tree.borrow().root
    }

    fn body(&self) -> Option<NodeId> {
        self.tree.borrow().body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.preorder(tree.root).into_iter().find(|node| {
            tree.element(*node)
                .is_some_and(|data| data.id.as_deref() == Some(id))
        })
    }

    fn append_style_element(&self, id: &str) -> Option<NodeId> {
        let mut tree = self.tree.borrow_mut();
        let head = tree.head;
        let style = tree.push_element("style", Some(head));
        if let Some(element) = tree.element_mut(style) {
            element.id = Some(id.to_string());
        }
        Some(style)
    }

    fn set_text_content(&self, element: &NodeId, text: &str) {
        let mut tree = self.tree.borrow_mut();
        let children = match tree.nodes.get_mut(*element) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };

        // Rewrite the first text child in place so repeated writes do not
        // grow the arena.
        let reused = children.iter().copied().find(|child| {
            matches!(tree.nodes[*child].kind, NodeKind::Text(_))
        });
        for child in children {
            if Some(child) != reused || text.is_empty() {
                tree.nodes[child].parent = None;
            }
        }
        match reused {
            Some(child) if !text.is_empty() => {
                tree.nodes[child].kind = NodeKind::Text(text.to_string());
                tree.nodes[*element].children.push(child);
            },
            _ if !text.is_empty() => {
                tree.push(NodeKind::Text(text.to_string()), Some(*element));
            },
            _ => {},
        }
    }

    fn set_style_property(
        &self,
        element: &NodeId,
        property: &str,
        value: &str,
    ) {
        if let Some(data) = self.tree.borrow_mut().element_mut(*element) {
            data.style.insert(property.to_string(), value.to_string());
        }
    }

    fn remove_style_property(&self, element: &NodeId, property: &str) {
        if let Some(data) = self.tree.borrow_mut().element_mut(*element) {
            data.style.remove(property);
        }
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.preorder(tree.root)
            .into_iter()
            .filter(|node| {
                tree.element(*node).is_some_and(|data| {
                    selector.matches(&data.tag, &data.class)
                })
            })
            .collect()
    }

    fn text_node_parents(&self, root: &NodeId) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.preorder(*root)
            .into_iter()
            .filter(|node| matches!(tree.nodes[*node].kind, NodeKind::Text(_)))
            .filter_map(|node| tree.nodes[node].parent)
            .collect()
    }

    fn force_layout(&self) -> f64 {
        let mut tree = self.tree.borrow_mut();
        tree.layout_reads += 1;
        let rows = tree
            .nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Text(_)))
            .count();
        rows as f64 * LINE_HEIGHT
    }
}
