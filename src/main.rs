//! Parched entry point
//!
//! Owns the window and event loop, samples mouse state into tick input,
//! and drives the fixed-step simulation plus the per-frame render.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use parched::consts::*;
use parched::renderer::RenderState;
use parched::sim::{TickInput, World, tick};
use parched::{Settings, screen_to_ndc};

struct App {
    settings: Settings,
    world: World,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    input: TickInput,
    /// Last cursor position in physical pixels
    cursor_px: Option<Vec2>,
    accumulator: f32,
    last_frame: Instant,
}

impl App {
    fn new(settings: Settings, seed: u64) -> Self {
        let world = World::new(settings.ball_capacity, seed);
        Self {
            settings,
            world,
            window: None,
            render_state: None,
            input: TickInput::default(),
            cursor_px: None,
            accumulator: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Run simulation ticks for the elapsed frame time.
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        if let (Some(pos), Some(render_state)) = (self.cursor_px, &self.render_state) {
            let (w, h) = render_state.size;
            self.input.cursor = Some(screen_to_ndc(pos, w, h));
        } else {
            self.input.cursor = None;
        }

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.world, &input);
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Parched")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let inner = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            inner.width.max(1),
            inner.height.max(1),
            self.world.pool(),
            self.settings.clear_colour,
        ));

        debug_assert_eq!(self.world.pool().capacity(), self.settings.ball_capacity);
        debug_assert_eq!(self.world.ball_count(), 0);

        window.request_redraw();
        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_px = Some(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor_px = None;
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let held = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.input.spawn_small = held,
                    MouseButton::Middle => self.input.spawn_large = held,
                    MouseButton::Right => self.input.pop = held,
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.update(dt);
                log::debug!("{} balls", self.world.ball_count());

                if let Some(render_state) = &mut self.render_state {
                    match render_state.render(self.world.pool_mut()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                            if let Some(window) = &self.window {
                                let inner = window.inner_size();
                                render_state.resize(inner.width, inner.height);
                            }
                        }
                        Err(e) => log::error!("render error: {e:?}"),
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!(
        "Parched starting: {} slots, seed {seed}",
        settings.ball_capacity
    );

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, seed);
    event_loop.run_app(&mut app).expect("Event loop error");
}
