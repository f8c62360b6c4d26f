//! Error types for scenario compilation.

use thiserror::Error;

use brine_types::RobotError;

/// Errors that can occur while compiling a scenario document.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element.
    #[error("missing required element: {element} in {context}")]
    MissingElement {
        /// The missing element name.
        element: &'static str,
        /// Where the element was expected.
        context: String,
    },

    /// Missing required attribute.
    #[error("missing required attribute: {attribute} on {element}")]
    MissingAttribute {
        /// The missing attribute name.
        attribute: &'static str,
        /// The element that should have the attribute.
        element: String,
    },

    /// Invalid attribute value.
    #[error("invalid value for {attribute} on {element}: {message}")]
    InvalidAttribute {
        /// The attribute with the invalid value.
        attribute: &'static str,
        /// The element containing the attribute.
        element: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// Unknown static entity type tag.
    #[error("unknown static entity type: {0}")]
    UnknownStaticKind(String),

    /// Unknown solid entity type tag.
    #[error("unknown solid entity type: {0}")]
    UnknownSolidKind(String),

    /// Unknown body physics mode.
    #[error("unknown physics mode: {0}")]
    UnknownPhysicsMode(String),

    /// Unknown joint type tag.
    #[error("unknown joint type: {0}")]
    UnknownJointKind(String),

    /// Unknown sensor type tag.
    #[error("unknown sensor type: {0}")]
    UnknownSensorKind(String),

    /// Unsupported scenario feature.
    #[error("unsupported scenario feature: {0}")]
    Unsupported(String),

    /// Robot definition error (unresolved or duplicate link references).
    #[error("robot definition error: {0}")]
    Robot(#[from] RobotError),
}

impl ScenarioError {
    /// Create a missing element error.
    pub fn missing_element(element: &'static str, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element,
            context: context.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(attribute: &'static str, element: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute,
            element: element.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(
        attribute: &'static str,
        element: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            attribute,
            element: element.into(),
            message: message.into(),
        }
    }
}

/// Result type for scenario compilation.
pub type Result<T> = std::result::Result<T, ScenarioError>;
