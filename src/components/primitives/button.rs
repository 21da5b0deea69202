//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::Props;
use crate::theme::colors::RegistryColors;

/// Label used when no `title` prop is supplied
pub const DEFAULT_BUTTON_TITLE: &str = "Button";

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Ghost button (transparent)
    Ghost,
}

impl ButtonVariant {
    /// Parse the `variant` prop; unknown names fall back to primary
    pub fn from_prop(value: &str) -> Self {
        match value {
            "secondary" => ButtonVariant::Secondary,
            "ghost" => ButtonVariant::Ghost,
            _ => ButtonVariant::Primary,
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Parse the `size` prop (`sm`, `md`, `lg`); unknown names fall back to medium
    pub fn from_prop(value: &str) -> Self {
        match value {
            "sm" => ButtonSize::Small,
            "lg" => ButtonSize::Large,
            _ => ButtonSize::Medium,
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Build the showcase button from a props object
    /// (`title`, `variant`, `size`, `disabled`)
    pub fn from_props(id: impl Into<ElementId>, props: &Props) -> Self {
        let title = props.get_or("title", DEFAULT_BUTTON_TITLE).to_string();
        Self::new(id, title)
            .variant(ButtonVariant::from_prop(props.get_or("variant", "primary")))
            .size(ButtonSize::from_prop(props.get_or("size", "md")))
            .disabled(props.get("disabled") == Some("true"))
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                RegistryColors::button_primary_bg(),
                RegistryColors::button_primary_text(),
                RegistryColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                RegistryColors::button_secondary_bg(),
                RegistryColors::text_dark(),
                RegistryColors::button_secondary_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                RegistryColors::button_ghost_text(),
                gpui::rgba(0xffffff22),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .cursor_pointer()
            .opacity(opacity)
            .child(self.label);

        if !self.disabled {
            element = element.hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_props_defaults() {
        let button = Button::from_props("b", &Props::new());
        assert_eq!(button.label.to_string(), DEFAULT_BUTTON_TITLE);
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Medium);
        assert!(!button.disabled);
    }

    #[test]
    fn test_from_props_reads_styling() {
        let props = Props::new()
            .with("title", "Delete")
            .with("variant", "ghost")
            .with("size", "lg")
            .with("disabled", "true");
        let button = Button::from_props("b", &props);
        assert_eq!(button.label.to_string(), "Delete");
        assert_eq!(button.variant, ButtonVariant::Ghost);
        assert_eq!(button.size, ButtonSize::Large);
        assert!(button.disabled);
    }

    #[test]
    fn test_unknown_styling_falls_back() {
        assert_eq!(ButtonVariant::from_prop("loud"), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::from_prop("secondary"), ButtonVariant::Secondary);
        assert_eq!(ButtonSize::from_prop("xl"), ButtonSize::Medium);
        assert_eq!(ButtonSize::from_prop("sm"), ButtonSize::Small);
    }
}
