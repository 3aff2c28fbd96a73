//! Stock widget behaviors: label, button, text box.

use glam::Vec2;

use crate::gfx::{Color, FontHandle, RenderSink};
use crate::input::{Input, TextCapture};

use super::widget::{WidgetBehavior, WidgetFrame};

/// Static text.
pub struct Label {
    pub text: String,
    pub font: FontHandle,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontHandle) -> Self {
        Self {
            text: text.into(),
            font,
            color: Color::WHITE,
        }
    }
}

impl WidgetBehavior for Label {
    fn render(&self, frame: &WidgetFrame, sink: &mut dyn RenderSink) {
        sink.draw_text(&self.text, frame.position, self.font, self.color);
    }
}

/// Clickable button with an optional on-click callback.
pub struct Button {
    pub label: String,
    pub font: FontHandle,
    pub background: Color,
    pub text_color: Color,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: impl Into<String>, font: FontHandle) -> Self {
        Self {
            label: label.into(),
            font,
            background: Color::rgb(0.2, 0.2, 0.25),
            text_color: Color::WHITE,
            on_click: None,
        }
    }

    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }
}

impl WidgetBehavior for Button {
    fn render(&self, frame: &WidgetFrame, sink: &mut dyn RenderSink) {
        sink.draw_rect(frame.position, frame.size, self.background);
        if frame.focused() {
            sink.draw_rect_outline(frame.position, frame.size, Color::WHITE);
        }
        sink.draw_text(&self.label, frame.position, self.font, self.text_color);
    }

    fn clicked(&mut self, _frame: &mut WidgetFrame, _point: Vec2) {
        if let Some(callback) = &mut self.on_click {
            callback();
        }
    }
}

/// Single-line text entry backed by [`TextCapture`]. Captures keyboard
/// input only while its widget holds focus.
pub struct TextBox {
    capture: TextCapture,
    pub font: FontHandle,
    pub text_color: Color,
    pub border: Color,
}

impl TextBox {
    pub fn new(font: FontHandle) -> Self {
        Self {
            capture: TextCapture::new(),
            font,
            text_color: Color::WHITE,
            border: Color::rgb(0.5, 0.5, 0.5),
        }
    }

    pub fn text(&self) -> &str {
        self.capture.value()
    }

    pub fn clear(&mut self) {
        self.capture.clear();
    }
}

impl WidgetBehavior for TextBox {
    fn update(&mut self, frame: &mut WidgetFrame, input: &Input) {
        if frame.focused() {
            self.capture.update(&input.keyboard);
        }
    }

    fn render(&self, frame: &WidgetFrame, sink: &mut dyn RenderSink) {
        let border = if frame.focused() {
            Color::WHITE
        } else {
            self.border
        };
        sink.draw_rect_outline(frame.position, frame.size, border);
        sink.draw_text(
            self.capture.value(),
            frame.position,
            self.font,
            self.text_color,
        );
    }
}
