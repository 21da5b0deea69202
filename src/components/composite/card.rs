//! Card Component
//!
//! A content card with a heading, body text and an action button.

use gpui::{
    div, prelude::*, px, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::domain::Props;
use crate::theme::colors::RegistryColors;

pub const DEFAULT_CARD_TITLE: &str = "Card Title";
pub const DEFAULT_CARD_BUTTON_TEXT: &str = "Click Me";

/// Card component
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    title: SharedString,
    content: SharedString,
    button_text: SharedString,
}

impl Card {
    /// Create a card with the default title and button text
    pub fn new(id: impl Into<ElementId>, content: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_CARD_TITLE.into(),
            content: content.into(),
            button_text: DEFAULT_CARD_BUTTON_TEXT.into(),
        }
    }

    /// Build the showcase card from a props object (`title`, `content`, `buttonText`)
    pub fn from_props(id: impl Into<ElementId>, props: &Props) -> Self {
        Self::new(id, props.get_or("content", "").to_string())
            .title(props.get_or("title", DEFAULT_CARD_TITLE).to_string())
            .button_text(props.get_or("buttonText", DEFAULT_CARD_BUTTON_TEXT).to_string())
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn button_text(mut self, text: impl Into<SharedString>) -> Self {
        self.button_text = text.into();
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(self.id)
            .w_full()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(RegistryColors::border_light())
            .bg(RegistryColors::surface())
            .shadow_sm()
            .flex()
            .flex_col()
            .child(
                div()
                    .mb_4()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(RegistryColors::text_dark())
                            .child(self.title),
                    )
                    .child(
                        div()
                            .mt_2()
                            .text_size(px(14.0))
                            .text_color(RegistryColors::text_body())
                            .child(self.content),
                    ),
            )
            .child(div().mt_4().child(Button::new("action", self.button_text)))
    }
}
