use typeswitch::Document;
use typeswitch::rules::Selector;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement};

use crate::errors::{WebError, describe};

/// `NodeFilter.SHOW_TEXT`.
const SHOW_TEXT: u32 = 0x4;

/// [`Document`] backed by the live browser DOM.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
    root: Element,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Result<Self, WebError> {
        let root = document.document_element().ok_or(WebError::NoDocument)?;
        Ok(Self { document, root })
    }

    fn head_or_root(&self) -> Element {
        match self.document.head() {
            Some(head) => head.into(),
            None => self.root.clone(),
        }
    }
}

fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

impl Document for WebDocument {
    type Element = Element;

    fn document_element(&self) -> Element {
        self.root.clone()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn append_style_element(&self, id: &str) -> Option<Element> {
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                log::warn!("style element creation failed: {}", describe(&err));
                return None;
            },
        };
        style.set_id(id);
        match self.head_or_root().append_child(&style) {
            Ok(_) => Some(style),
            Err(err) => {
                log::warn!(
                    "style element insertion failed: {}",
                    describe(&err)
                );
                None
            },
        }
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style_property(
        &self,
        element: &Element,
        property: &str,
        value: &str,
    ) {
        let Some(style) = inline_style(element) else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            log::debug!("setting {property} failed: {}", describe(&err));
        }
    }

    fn remove_style_property(&self, element: &Element, property: &str) {
        let Some(style) = inline_style(element) else {
            return;
        };
        if let Err(err) = style.remove_property(property) {
            log::debug!("removing {property} failed: {}", describe(&err));
        }
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let list = match self.document.query_selector_all(&selector.to_string())
        {
            Ok(list) => list,
            Err(err) => {
                log::warn!("selector query failed: {}", describe(&err));
                return Vec::new();
            },
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn text_node_parents(&self, root: &Element) -> Vec<Element> {
        let walker = match self
            .document
            .create_tree_walker_with_what_to_show(root, SHOW_TEXT)
        {
            Ok(walker) => walker,
            Err(err) => {
                log::warn!("text walker creation failed: {}", describe(&err));
                return Vec::new();
            },
        };

        let mut parents = Vec::new();
        while let Ok(Some(node)) = walker.next_node() {
            if let Some(parent) = node.parent_element() {
                parents.push(parent);
            }
        }
        parents
    }

    fn force_layout(&self) -> f64 {
        self.document
            .body()
            .map_or(0.0, |body| f64::from(body.offset_height()))
    }
}
