use crate::rules::Selector;

/// The slice of a rendered document the font applier touches.
///
/// Handles are cheap clones sharing one underlying tree, and every method
/// takes `&self`, mirroring how browser DOM bindings behave.
pub trait Document: Clone + 'static {
    /// Handle to one element of the document.
    type Element: Clone;

    /// The root (`<html>`) element.
    fn document_element(&self) -> Self::Element;

    /// The `<body>` element, absent while the document is still parsing.
    fn body(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Create a `<style>` element with the given id and append it to the
    /// document head. Returns `None` when the document cannot host it.
    fn append_style_element(&self, id: &str) -> Option<Self::Element>;

    fn set_text_content(&self, element: &Self::Element, text: &str);

    /// Set an inline style property, custom properties included.
    fn set_style_property(
        &self,
        element: &Self::Element,
        property: &str,
        value: &str,
    );

    fn remove_style_property(&self, element: &Self::Element, property: &str);

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Element>;

    /// Parent element of every text node under `root`, in document order.
    fn text_node_parents(&self, root: &Self::Element) -> Vec<Self::Element>;

    /// Read a layout-dependent value so pending style changes are committed.
    fn force_layout(&self) -> f64;
}
