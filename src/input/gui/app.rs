//! Main GUI application loop.

use log::{debug, info};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::core::colour::hue_gradient::HueGradient;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::render::pass::render;
use crate::input::gui::state::AppState;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;
const MAX_ITERATIONS: u32 = 360;

/// Application wiring: the pixels framebuffer, the colour buffer it is
/// filled from, and the interaction state that decides when to refill it.
struct App {
    pixels: Pixels<'static>,
    state: AppState,
    gradient: HueGradient,
    buffer: PixelBuffer,
}

impl App {
    /// Creates a new App with a pixels surface tied to the window.
    fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let gradient =
            HueGradient::new(MAX_ITERATIONS).expect("iteration budget constant is positive");
        let buffer =
            PixelBuffer::new(size.width, size.height).expect("window starts with a visible size");

        Self {
            pixels,
            state: AppState::new(size.width, size.height),
            gradient,
            buffer,
        }
    }

    /// Runs a render pass if the view changed since the last one, then
    /// presents whatever the colour buffer holds.
    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let (width, height) = self.state.dimensions();
        // Skip rendering for invalid size (e.g., minimized window)
        if width == 0 || height == 0 {
            return Ok(());
        }

        if self.state.needs_render() && self.state.begin_render() {
            render(&self.state.viewport(), &self.gradient, &mut self.buffer);
            self.state.finish_render();
            window.set_title(&self.status_title());
        }

        let frame = self.pixels.frame_mut();
        for (colour, out) in self.buffer.pixels().iter().zip(frame.chunks_exact_mut(4)) {
            out.copy_from_slice(&colour.to_rgba());
        }

        self.pixels.render()
    }

    /// Handles window resize by recreating the pixels surface and buffer.
    fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);

        if width > 0 && height > 0 {
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
            self.pixels
                .resize_buffer(width, height)
                .expect("Failed to resize buffer");
            self.buffer
                .resize(width, height)
                .expect("dimensions checked above");
        }
    }

    fn status_title(&self) -> String {
        let (re, im) = self.state.viewport().center();
        format!(
            "Mandelbrot Explorer | center ({re:.6}, {im:.6}) | zoom {:.2}x",
            self.state.zoom_level()
        )
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(
                INITIAL_WIDTH as f64,
                INITIAL_HEIGHT as f64,
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window);
    info!(
        "starting explorer at {}x{}, {} iteration budget",
        INITIAL_WIDTH, INITIAL_HEIGHT, MAX_ITERATIONS
    );

    event_loop
        .run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = app.redraw(window) {
                        eprintln!("Render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    debug!("window resized to {}x{}", size.width, size.height);
                    app.resize(size.width, size.height);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed {
                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::KeyR) => app.state.reset_view(),
                            PhysicalKey::Code(KeyCode::KeyF) => {
                                let fullscreen = app.state.toggle_fullscreen();
                                window.set_fullscreen(
                                    fullscreen.then(|| Fullscreen::Borderless(None)),
                                );
                            }
                            PhysicalKey::Code(KeyCode::KeyQ)
                            | PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                            _ => {}
                        }
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.state.set_cursor(position.x, position.y);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if *button == MouseButton::Left {
                        match state {
                            ElementState::Pressed => app.state.begin_drag(),
                            ElementState::Released => app.state.end_drag(),
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                        MouseScrollDelta::PixelDelta(pos) => pos.y,
                    };
                    if scroll != 0.0 {
                        app.state.zoom_at_cursor(scroll > 0.0);
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Only request redraw if the view changed
                if app.state.needs_render() {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .expect("Event loop error");
}
