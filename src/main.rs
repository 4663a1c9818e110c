//! Iron Filings
//!
//! Drag a bar magnet around a second, fixed one and watch a field of iron
//! filings line up with the combined field.

mod input;
mod systems;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use filings::config::AppConfig;
use filings_core::{SimulationCommand, MAX_FILING_COUNT};
use filings_input::MagnetController;

use input::{InputAction, InputMapper};
use systems::{RenderError, RenderSystem, SimulationSystem, TitleInfo, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: SimulationSystem,
    controller: MagnetController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let sim_config = config.simulation.to_simulation_config();
        let controller = MagnetController::new()
            .with_bounds(sim_config.bounds)
            .with_rotate_step(config.input.rotate_step_degrees)
            .with_strength_slider(config.input.strength_slider(sim_config.strength))
            .with_count_input(config.input.count_input(sim_config.filing_count));
        let simulation = SimulationSystem::new(sim_config);

        Self {
            config,
            window_system: None,
            render_system: None,
            simulation,
            controller,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window_system) = &self.window_system {
                    window_system.toggle_fullscreen();
                }
            }
            // Queued behind earlier magnet input so events apply in order
            InputAction::Regenerate => self.controller.push_command(SimulationCommand::Regenerate),
            InputAction::ResetMagnet => {
                self.controller.push_command(SimulationCommand::ResetMovable)
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.simulation.update(&mut self.controller);

        if let Some(window_system) = &mut self.window_system {
            let state = self.simulation.state();
            window_system.update_title(TitleInfo {
                strength: state.strength(),
                filing_count: state.filing_count(),
                max_filing_count: MAX_FILING_COUNT,
                count_limit_reached: result.count_limit_reached,
            });
        }

        let Some(render_system) = &mut self.render_system else {
            return;
        };

        if result.geometry_dirty {
            render_system.upload_snapshot(&self.simulation.snapshot());
            self.simulation.mark_drawn();
        }

        match render_system.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render_system.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(window_system) = &self.window_system {
            window_system.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.to_palette(),
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        self.controller.set_surface_size(width, height);

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
                self.controller
                    .set_surface_size(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(action) => self.handle_action(action, event_loop),
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.controller.process_cursor_left();
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Load configuration first so it can pick the log level
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };

    // Initialize logging; RUST_LOG still takes precedence
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Iron Filings");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
