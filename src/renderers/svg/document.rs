//! SVG DOM construction
//!
//! Builds a markup tree as live DOM nodes in the SVG namespace. The host owns
//! the returned element and removes it to unmount.

use web_sys::{Document, Element};

use super::errors::RenderError;
use crate::icons::arrow_dropup::SVG_NAMESPACE;
use crate::models::svg::SvgElement;

pub struct SVGDocumentGenerator;

impl SVGDocumentGenerator {
    /// Resolve `window.document`
    pub fn document() -> Result<Document, RenderError> {
        let window = web_sys::window().ok_or(RenderError::NoWindow)?;
        window.document().ok_or(RenderError::NoDocument)
    }

    /// Build a detached element tree in the given document
    pub fn build(document: &Document, tree: &SvgElement) -> Result<Element, RenderError> {
        let element = document
            .create_element_ns(Some(SVG_NAMESPACE), &tree.tag)
            .map_err(|e| RenderError::from_js("createElementNS", e))?;

        for attr in &tree.attributes {
            // The namespace comes from createElementNS
            if attr.name == "xmlns" {
                continue;
            }
            element
                .set_attribute(&attr.name, &attr.value)
                .map_err(|e| RenderError::from_js("setAttribute", e))?;
        }

        for child in &tree.children {
            let child_el = Self::build(document, child)?;
            element
                .append_child(&child_el)
                .map_err(|e| RenderError::from_js("appendChild", e))?;
        }

        Ok(element)
    }

    /// Build a detached tree in the current window's document
    pub fn build_detached(tree: &SvgElement) -> Result<Element, RenderError> {
        let document = Self::document()?;
        Self::build(&document, tree)
    }

    /// Build the tree and append it under `parent`, returning the new root
    pub fn mount(parent: &Element, tree: &SvgElement) -> Result<Element, RenderError> {
        let document = parent
            .owner_document()
            .map_or_else(Self::document, Ok)?;
        let element = Self::build(&document, tree)?;
        parent
            .append_child(&element)
            .map_err(|e| RenderError::from_js("appendChild", e))?;

        log::debug!("mounted <{}> with {} children", tree.tag, tree.children.len());
        Ok(element)
    }
}
