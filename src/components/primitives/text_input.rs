//! TextInput Component
//!
//! Single-line input. Printable keystrokes append, backspace deletes the last
//! character; every edit emits `TextInputEvent::Changed` with the full value.

use gpui::{
    div, prelude::*, px, App, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::theme::colors::FormColors;
use crate::utils::format::mask_secret;

/// Events emitted by a text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Changed(String),
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    masked: bool,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            masked: false,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value without emitting a change
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Render the value as bullets
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        if keystroke.key == "backspace" {
            if self.value.pop().is_none() {
                return;
            }
        } else {
            match keystroke.key_char.as_deref() {
                Some(text) if !text.is_empty() && !text.chars().any(char::is_control) => {
                    self.value.push_str(text);
                }
                _ => return,
            }
        }

        cx.emit(TextInputEvent::Changed(self.value.clone()));
        cx.notify();
    }

    fn handle_mouse_down(&mut self, _event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            FormColors::border_focus()
        } else {
            FormColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            SharedString::from(mask_secret(&self.value))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            FormColors::input_placeholder()
        } else {
            FormColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .key_context("TextInput")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .w_full()
            .h(px(36.0))
            .px_3()
            .flex()
            .items_center()
            .bg(FormColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_sm()
            .cursor_text()
            .child(div().text_color(text_color).child(display_text))
            .when(is_focused, |el| {
                el.child(div().text_color(FormColors::text_primary()).child("|"))
            })
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    masked: bool,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input.set_masked(masked);
        input
    })
}
