//! Window and input plumbing
//!
//! Bridges winit with the game loop: creates the window and GPU surface,
//! converts OS events into [`InputEvent`]s, and drives one
//! input -> simulate -> render step per `RedrawRequested`. Events are
//! buffered between frames and drained at the redraw boundary so each tick
//! sees the queue's immediate contents and nothing blocks.

use std::fmt;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::consts::{FRAME_DELAY_MS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::input::{InputEvent, InputHandler, KeyState};
use crate::renderer::{self, InitError, RenderState};
use crate::sim::{self, GameState};

/// Event loop startup or execution failure
#[derive(Debug)]
pub enum PlatformError {
    EventLoop(winit::error::EventLoopError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "event loop failed: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Run the game to completion on this thread's event loop
pub fn run(state: GameState) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(PlatformError::EventLoop)?;
    let mut app = App::new(state);
    event_loop.run_app(&mut app).map_err(PlatformError::EventLoop)
}

/// Application state driven by winit callbacks
struct App {
    /// OS window handle (created lazily in `resumed`)
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    state: GameState,
    handler: InputHandler,
    keys: KeyState,
    /// Events buffered since the last frame, drained at `RedrawRequested`
    events: Vec<InputEvent>,
    /// Last cursor position in logical pixels; button events carry none
    cursor: (i32, i32),
    running: bool,
}

impl App {
    fn new(state: GameState) -> Self {
        Self {
            window: None,
            render: None,
            state,
            handler: InputHandler::new(),
            keys: KeyState::default(),
            events: Vec::new(),
            cursor: (0, 0),
            running: true,
        }
    }

    fn init_graphics(&self, window: Arc<Window>) -> Result<RenderState, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .map_err(InitError::CreateSurface)?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(InitError::RequestAdapter)?;

        let size = window.inner_size();
        pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))
    }

    /// One full tick: input, simulation, render, score line, frame delay
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let events: Vec<InputEvent> = self.events.drain(..).collect();
        if !self
            .handler
            .process(&events, self.keys, &mut self.state.paddle)
        {
            self.running = false;
        }

        sim::tick(&mut self.state);

        if let Some(render) = &mut self.render {
            let vertices = renderer::frame_vertices(&self.state);
            match render.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = render.size;
                    render.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("out of GPU memory, shutting down");
                    self.running = false;
                }
                Err(e) => warn!("render error: {e:?}"),
            }
        }

        println!(
            "Your score is: {}/{}",
            self.state.score, self.state.gold_spawned
        );

        if !self.running || self.state.game_over {
            println!(
                "Your Final Score is: {}/{}",
                self.state.score, self.state.gold_spawned
            );
            info!(
                "run finished after {} ticks (score {}/{})",
                self.state.time_ticks, self.state.score, self.state.gold_spawned
            );
            event_loop.exit();
            return;
        }

        std::thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Raindrop")
            .with_position(LogicalPosition::new(0.0, 0.0))
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("window creation failed: {e}");
                eprintln!("error initializing window: {e}");
                process::exit(1);
            }
        };

        match self.init_graphics(window.clone()) {
            Ok(render) => {
                info!(
                    "window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.render = Some(render);
            }
            Err(e) => {
                error!("graphics initialization failed: {e}");
                eprintln!("error initializing graphics: {e}");
                process::exit(1);
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                self.events.push(InputEvent::Quit);
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let pos: LogicalPosition<f64> = position.to_logical(window.scale_factor());
                    self.cursor = (pos.x as i32, pos.y as i32);
                    self.events.push(InputEvent::PointerMoved {
                        x: self.cursor.0,
                        y: self.cursor.1,
                    });
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        x: self.cursor.0,
                        y: self.cursor.1,
                    },
                    ElementState::Released => InputEvent::PointerUp,
                };
                self.events.push(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let held = event.state.is_pressed();
                    match code {
                        KeyCode::ArrowLeft => self.keys.left = held,
                        KeyCode::ArrowRight => self.keys.right = held,
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}
