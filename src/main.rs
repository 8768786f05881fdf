//! Hypermorph - morphing tesseract viewer
//!
//! Animates the 3D perspective view of a tesseract's wireframe (its 4D to
//! 3D projection) as it folds inside out, while rotating the whole figure.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hypermorph::config::AppConfig;
use hypermorph::input::{InputAction, InputMapper};
use hypermorph::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    animation: AnimationSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let animation = AnimationSystem::new(&config.animation);
        Self {
            config,
            window: None,
            renderer: None,
            animation,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.animation.update();

        if let Some(window) = &self.window {
            let clock = self.animation.clock();
            window.update_title(clock.transformation(), clock.rotation(), clock.is_running());
        }

        if let Some(renderer) = &mut self.renderer {
            match renderer.render_frame(&frame) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => renderer.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

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

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            &self.config.camera,
            self.config.window.vsync,
        ) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => event_loop.exit(),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {
                            self.animation.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Hypermorph");

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
