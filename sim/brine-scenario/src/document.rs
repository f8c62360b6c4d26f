//! Owned element tree over the XML event stream.
//!
//! The compiler works against a generic tree of named elements with
//! string-keyed attributes, so builders can look up named children and
//! attributes in the fixed dependency order the compilation requires,
//! independent of the order elements appear in the document.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, ScenarioError};

/// A parsed scenario document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Parse a document from an XML string.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::XmlParse`] if the XML is malformed.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut elements = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(Element::from_start(e)),
                Ok(Event::Empty(ref e)) => {
                    let element = Element::from_start(e);
                    Self::attach(&mut stack, &mut elements, element);
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| ScenarioError::XmlParse("unmatched closing tag".into()))?;
                    Self::attach(&mut stack, &mut elements, element);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ScenarioError::XmlParse(e.to_string())),
            }
        }

        if let Some(open) = stack.pop() {
            return Err(ScenarioError::XmlParse(format!(
                "unexpected EOF in {}",
                open.name
            )));
        }

        Ok(Self { elements })
    }

    /// Get the first top-level element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == name)
    }

    fn attach(stack: &mut Vec<Element>, top: &mut Vec<Element>, element: Element) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => top.push(element),
        }
    }
}

/// A named element with string-keyed attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    fn from_start(e: &BytesStart) -> Self {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attributes = e
            .attributes()
            .flatten()
            .filter_map(|attr| {
                let key = String::from_utf8(attr.key.as_ref().to_vec()).ok()?;
                let value = String::from_utf8(attr.value.to_vec()).ok()?;
                Some((key, value))
            })
            .collect();
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.name == name)
    }

    /// Iterate over all child elements with the given name, in document
    /// order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |e| e.name == name)
    }

    /// A human-readable description of the element: its name, plus its
    /// `name` attribute when it carries one.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.attr("name") {
            Some(name) => format!("{} '{}'", self.name, name),
            None => self.name.clone(),
        }
    }

    /// Get a required child element.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::MissingElement`] if absent.
    pub fn require_child(&self, name: &'static str) -> Result<&Element> {
        self.child(name)
            .ok_or_else(|| ScenarioError::missing_element(name, self.describe()))
    }

    /// Get a required attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::MissingAttribute`] if absent.
    pub fn require_attr(&self, name: &'static str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| ScenarioError::missing_attribute(name, self.describe()))
    }

    /// Get a required scalar attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::MissingAttribute`] if absent or
    /// [`ScenarioError::InvalidAttribute`] if not a number.
    pub fn require_f64(&self, name: &'static str) -> Result<f64> {
        let value = self.require_attr(name)?;
        value.parse().map_err(|_| {
            ScenarioError::invalid_attribute(name, self.describe(), format!("invalid float: {value}"))
        })
    }

    /// Get a required boolean attribute (`true`/`false`/`1`/`0`).
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::MissingAttribute`] if absent or
    /// [`ScenarioError::InvalidAttribute`] if not a boolean literal.
    pub fn require_bool(&self, name: &'static str) -> Result<bool> {
        let value = self.require_attr(name)?;
        match value {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ScenarioError::invalid_attribute(
                name,
                self.describe(),
                format!("invalid boolean: {value}"),
            )),
        }
    }

    /// Get a scalar attribute, falling back to a default when the
    /// attribute is absent or malformed.
    #[must_use]
    pub fn f64_or(&self, name: &str, default: f64) -> f64 {
        self.attr(name).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Get an integer attribute, falling back to a default when the
    /// attribute is absent or malformed.
    #[must_use]
    pub fn i32_or(&self, name: &str, default: i32) -> i32 {
        self.attr(name).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Get a boolean attribute, falling back to a default when the
    /// attribute is absent or malformed.
    #[must_use]
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.attr(name) {
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            _ => default,
        }
    }
}
