//! Runtime-independent display tree.

use crate::state::Interaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    /// Attribute order is preserved so renders compare structurally.
    pub attrs: Vec<(&'static str, String)>,
    pub on_click: Option<Interaction>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn style(self, value: impl Into<String>) -> Self {
        self.attr("style", value)
    }

    pub fn on_click(mut self, interaction: Interaction) -> Self {
        self.on_click = Some(interaction);
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

impl ViewNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(el) => Some(el),
            ViewNode::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ViewNode::Text(text) => out.push_str(text),
            ViewNode::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Depth-first, document-order search.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        self.find_all(pred).into_iter().next()
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.has_class(class))
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let ViewNode::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
            for child in &el.children {
                child.walk(pred, found);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_attribute_order() {
        let el = Element::new("a").attr("href", "#x").class("nav-link").style("color: red");
        let names: Vec<_> = el.attrs.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["href", "class", "style"]);
        assert_eq!(el.get_attr("href"), Some("#x"));
        assert_eq!(el.get_attr("id"), None);
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        let el = Element::new("div").class("overlay-backdrop fade-in");
        assert!(el.has_class("fade-in"));
        assert!(!el.has_class("overlay"));
    }

    #[test]
    fn test_text_content_and_search() {
        let tree: ViewNode = Element::new("ul")
            .child(Element::new("li").class("item").text("one"))
            .child(Element::new("li").class("item").text("two"))
            .into();
        assert_eq!(tree.text_content(), "onetwo");
        let items = tree.find_all(&|el: &Element| el.has_class("item"));
        assert_eq!(items.len(), 2);
        assert_eq!(
            tree.find_by_class("item").map(|el| ViewNode::Element(el.clone()).text_content()),
            Some("one".to_string())
        );
    }
}
