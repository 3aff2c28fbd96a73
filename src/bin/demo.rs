//! Toolkit demo binary.
//!
//! Opens a window, wires winit events into the input poller, and runs a
//! small UI canvas plus a camera through the standard frame order:
//! poll input, canvas update, canvas render.
//!
//! There is no graphics backend here; draw calls go to a logging sink.
//! Controls:
//!   Click: focus/activate widgets
//!   Type (with the text box focused): enter text
//!   Arrow keys: pan the camera
//!   Escape: quit

use glam::Vec2;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use bramble::gfx::{Color, FontHandle, ImageHandle, RenderSink, Resources};
use bramble::input::{Input, Key, WinitInput};
use bramble::ui::{Button, Label, TextBox, UiCanvas, Widget};
use bramble::{Camera, ToolkitConfig};

/// Render sink that logs draw calls instead of drawing.
struct LogSink {
    offset: Vec2,
}

impl RenderSink for LogSink {
    fn draw_text(&mut self, text: &str, position: Vec2, _font: FontHandle, _color: Color) {
        tracing::trace!(?position, text, "draw_text");
    }

    fn draw_rect(&mut self, position: Vec2, size: Vec2, _color: Color) {
        tracing::trace!(?position, ?size, "draw_rect");
    }

    fn draw_rect_outline(&mut self, position: Vec2, size: Vec2, _color: Color) {
        tracing::trace!(?position, ?size, "draw_rect_outline");
    }

    fn draw_image(&mut self, image: ImageHandle, position: Vec2) {
        tracing::trace!(?position, ?image, "draw_image");
    }

    fn translate(&mut self, offset: Vec2) {
        self.offset += offset;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ToolkitConfig::default();
    tracing::info!(title = %config.window_title, "starting bramble demo");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.view_width,
            config.view_height,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    // The host engine would load real fonts; the demo registers a dummy
    // handle under the name the widgets look up.
    let mut resources = Resources::new();
    resources.register_font("ui", FontHandle(0));
    let font = resources.font("ui").expect("ui font registered above");

    let mut canvas = UiCanvas::new();
    canvas.add(Widget::new(
        Vec2::new(20.0, 20.0),
        Vec2::new(200.0, 24.0),
        Label::new("bramble demo", font),
    ));
    canvas.add(Widget::new(
        Vec2::new(20.0, 60.0),
        Vec2::new(120.0, 32.0),
        Button::new("click me", font).on_click(|| tracing::info!("button clicked")),
    ));
    canvas.add(Widget::new(
        Vec2::new(20.0, 110.0),
        Vec2::new(240.0, 28.0),
        TextBox::new(font),
    ));

    let mut camera = Camera::new(config.view_width, config.view_height)
        .with_speed(config.camera_speed);
    camera.set_bounds(4000.0, 4000.0);
    let mut camera_target = Vec2::ZERO;

    let mut source = WinitInput::new();
    let mut input = Input::new(&source);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                source.handle_event(&event);
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        input.poll(&source);

                        if input.keyboard.pressed(Key::Escape) {
                            elwt.exit();
                            return;
                        }
                        if input.keyboard.down(Key::Left) {
                            camera_target.x -= config.camera_speed;
                        }
                        if input.keyboard.down(Key::Right) {
                            camera_target.x += config.camera_speed;
                        }
                        if input.keyboard.down(Key::Up) {
                            camera_target.y -= config.camera_speed;
                        }
                        if input.keyboard.down(Key::Down) {
                            camera_target.y += config.camera_speed;
                        }

                        canvas.update(&input);
                        camera.pan(camera_target.x, camera_target.y, true);

                        let mut sink = LogSink { offset: Vec2::ZERO };
                        camera.translate(&mut sink);
                        canvas.render(&mut sink);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .expect("Event loop error");
}
