//! SVG element serialization
//!
//! Compact markup: attributes in insertion order, escaped values, childless
//! elements self-closed, no whitespace between elements.

use quick_xml::escape::escape;

use crate::models::svg::SvgElement;

pub struct SVGElementRenderer;

impl SVGElementRenderer {
    /// Serialize a tree to markup
    pub fn to_markup(element: &SvgElement) -> String {
        let mut out = String::new();
        Self::write_element(element, &mut out);
        out
    }

    fn write_element(element: &SvgElement, out: &mut String) {
        out.push('<');
        out.push_str(&element.tag);

        for attr in &element.attributes {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&escape(attr.value.as_str()));
            out.push('"');
        }

        if element.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &element.children {
            Self::write_element(child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}
