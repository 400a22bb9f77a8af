//! Component declarations in HTML pages
//!
//! Pages mark component mount points with `data-component="<id>"`. The page is
//! run through the html5ever tree builder with a sink that keeps no tree, only
//! the attribute values of elements as they are created. Comments and the text
//! of `<script>`, `<style>` and `<textarea>` never become elements, so markers
//! mentioned there are not picked up.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute, ParseOpts, QualName, local_name, ns, parse_document};

const COMPONENT_ATTR: &str = "data-component";

/// A node created by the tree builder. Only the element name is kept; the
/// builder asks for it when checking scopes.
#[derive(Debug)]
struct SinkNode {
    id: usize,
    name: QualName,
}

/// Tree sink that records `data-component` values in creation order
struct DeclarationSink {
    next_id: Cell<usize>,
    document: Rc<SinkNode>,
    values: RefCell<Vec<String>>,
}

impl DeclarationSink {
    fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            document: Rc::new(SinkNode {
                id: 0,
                name: unnamed(),
            }),
            values: RefCell::new(Vec::new()),
        }
    }

    fn node(&self, name: QualName) -> Rc<SinkNode> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Rc::new(SinkNode { id, name })
    }

    fn record(&self, attrs: &[Attribute]) {
        let mut values = self.values.borrow_mut();
        values.extend(
            attrs
                .iter()
                .filter(|attr| attr.name.local.as_ref() == COMPONENT_ATTR)
                .map(|attr| attr.value.to_string()),
        );
    }
}

fn unnamed() -> QualName {
    QualName::new(None, ns!(), local_name!(""))
}

impl TreeSink for DeclarationSink {
    type Handle = Rc<SinkNode>;
    type Output = Vec<String>;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self.values.into_inner()
    }

    fn parse_error(&self, _msg: Cow<'static, str>) {}

    fn get_document(&self) -> Self::Handle {
        Rc::clone(&self.document)
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        &target.name
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        self.record(&attrs);
        self.node(name)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        self.node(unnamed())
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        self.node(unnamed())
    }

    fn append(&self, _parent: &Self::Handle, _child: NodeOrText<Self::Handle>) {}

    fn append_based_on_parent_node(
        &self,
        _element: &Self::Handle,
        _prev_element: &Self::Handle,
        _child: NodeOrText<Self::Handle>,
    ) {
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        Rc::clone(target)
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.id == y.id
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, _sibling: &Self::Handle, _new_node: NodeOrText<Self::Handle>) {}

    // A repeated <html> or <body> tag merges its attributes into the open one
    fn add_attrs_if_missing(&self, _target: &Self::Handle, attrs: Vec<Attribute>) {
        self.record(&attrs);
    }

    fn remove_from_parent(&self, _target: &Self::Handle) {}

    fn reparent_children(&self, _node: &Self::Handle, _new_parent: &Self::Handle) {}
}

/// Raw `data-component` values of a document, in creation order
fn declared_values(html: &str) -> Vec<String> {
    parse_document(DeclarationSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
}

/// Distinct component identifiers declared in a page, in first-seen order
pub fn component_ids(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    declared_values(html)
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
