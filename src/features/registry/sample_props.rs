//! Sample Props - Demo Arguments per Component Identity
//!
//! Each showcased component gets a typed sample payload chosen from its
//! registry name. Unknown components are rendered without props.

use crate::domain::{ComponentDescriptor, Props};

pub const CARD_SAMPLE_CONTENT: &str = "This is sample content for the card component.";
pub const CARD_SAMPLE_BUTTON_TEXT: &str = "Click Me";
pub const BUTTON_SAMPLE_TITLE: &str = "Sample Button";

/// Sample invocation arguments for a showcased component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleProps {
    /// The `card` component
    Card {
        content: String,
        button_text: String,
    },
    /// The `button` component
    Button { title: String },
    /// Any other component: rendered with no props
    Bare,
}

impl SampleProps {
    /// Pick the sample payload for a component identity
    pub fn for_identity(name: &str) -> Self {
        match name {
            "card" => SampleProps::Card {
                content: CARD_SAMPLE_CONTENT.to_string(),
                button_text: CARD_SAMPLE_BUTTON_TEXT.to_string(),
            },
            "button" => SampleProps::Button {
                title: BUTTON_SAMPLE_TITLE.to_string(),
            },
            _ => SampleProps::Bare,
        }
    }

    pub fn for_descriptor(descriptor: &ComponentDescriptor) -> Self {
        Self::for_identity(&descriptor.name)
    }

    /// Convert to the props object handed to the render target
    pub fn to_props(&self) -> Props {
        match self {
            SampleProps::Card {
                content,
                button_text,
            } => Props::new()
                .with("content", content.as_str())
                .with("buttonText", button_text.as_str()),
            SampleProps::Button { title } => Props::new().with("title", title.as_str()),
            SampleProps::Bare => Props::new(),
        }
    }
}
