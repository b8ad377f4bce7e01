//! Window creation, event handling, and the per-frame driver.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]: it owns the GPU
//! context, the simulation context, and the scene renderers, runs the fixed
//! timestep loop on redraw, and steps the camera between planets on arrow
//! keys.

use std::sync::Arc;

use glam::Vec3;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use helios_config::Config;
use helios_render::{
    Camera, DepthBuffer, RenderContext, SphereInstance, SurfaceError, SurfaceWrapper,
    init_render_context_blocking,
};
use helios_scene::{
    AsteroidBeltGenerator, OrbitLineRenderer, RingRenderer, SphereSceneRenderer,
    StarfieldRenderer, body_instances, rock_instances,
};
use helios_system::SolarSystem;

use crate::focus::{CameraFocus, OVERVIEW_POSITION, framing_position};
use crate::game_loop::GameLoop;

/// Background clear color: near-black deep space.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.003,
    g: 0.004,
    b: 0.010,
    a: 1.0,
};

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ));
    if config.window.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    attrs
}

/// Application state: window, GPU context, simulation, and scene renderers.
pub struct AppState {
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    surface_wrapper: SurfaceWrapper,
    game_loop: GameLoop,
    config: Config,
    camera: Camera,
    system: SolarSystem,
    focus: CameraFocus,
    /// Static belt rock instances, generated once at startup.
    belt_instances: Vec<SphereInstance>,
    depth_buffer: Option<DepthBuffer>,
    sphere_renderer: Option<SphereSceneRenderer>,
    orbit_lines: Option<OrbitLineRenderer>,
    rings: Option<RingRenderer>,
    starfield: Option<StarfieldRenderer>,
    tick_count: u64,
}

impl AppState {
    /// Build the application state from a [`Config`]. The GPU context and
    /// renderers are created later, once a window exists.
    pub fn with_config(config: Config) -> Self {
        let system = SolarSystem::from_catalog();
        let focus = CameraFocus::new(system.len());

        let belt_instances = if config.render.show_belt {
            let rocks =
                AsteroidBeltGenerator::new(config.simulation.seed, config.render.belt_rock_count)
                    .generate();
            rock_instances(&rocks)
        } else {
            Vec::new()
        };

        let mut camera = Camera {
            position: OVERVIEW_POSITION,
            ..Camera::default()
        };
        camera.look_at(Vec3::ZERO, Vec3::Z);

        Self {
            window: None,
            gpu: None,
            surface_wrapper: SurfaceWrapper::new(config.window.width, config.window.height, 1.0),
            game_loop: GameLoop::new(),
            config,
            camera,
            system,
            focus,
            belt_instances,
            depth_buffer: None,
            sphere_renderer: None,
            orbit_lines: None,
            rings: None,
            starfield: None,
            tick_count: 0,
        }
    }

    fn surface_width(&self) -> u32 {
        self.surface_wrapper.physical_width()
    }

    fn surface_height(&self) -> u32 {
        self.surface_wrapper.physical_height()
    }

    /// Create the depth buffer and scene renderers once the GPU is up.
    fn initialize_rendering(&mut self, gpu: &RenderContext) {
        let depth_buffer =
            DepthBuffer::new(&gpu.device, self.surface_width(), self.surface_height());
        let depth_format = Some(DepthBuffer::FORMAT);

        self.sphere_renderer = Some(SphereSceneRenderer::new(
            &gpu.device,
            gpu.surface_format,
            depth_format,
        ));
        if self.config.render.show_orbits {
            self.orbit_lines = Some(OrbitLineRenderer::new(
                &gpu.device,
                gpu.surface_format,
                depth_format,
                &self.system,
            ));
        }
        self.rings = Some(RingRenderer::new(
            &gpu.device,
            gpu.surface_format,
            depth_format,
            &self.system,
        ));
        self.starfield = Some(StarfieldRenderer::new(
            &gpu.device,
            gpu.surface_format,
            depth_format,
            self.config.simulation.seed,
            self.config.render.star_count,
        ));
        self.depth_buffer = Some(depth_buffer);

        self.camera
            .set_aspect_ratio(self.surface_width() as f32, self.surface_height() as f32);

        info!("Scene renderers initialized");
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        if let Some(resize) = self.surface_wrapper.handle_resize(width, height) {
            let (w, h) = (resize.physical.width, resize.physical.height);
            self.camera.set_aspect_ratio(w as f32, h as f32);
            if let Some(gpu) = &mut self.gpu {
                gpu.resize(w, h);
            }
            if let (Some(depth_buffer), Some(gpu)) = (&mut self.depth_buffer, &self.gpu) {
                depth_buffer.resize(&gpu.device, w, h);
            }
            info!("Window resized to {w}x{h}");
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::ArrowRight => {
                self.focus.next();
                self.log_focus();
            }
            KeyCode::ArrowLeft => {
                self.focus.prev();
                self.log_focus();
            }
            KeyCode::Escape => {
                self.focus.clear();
                self.camera.position = OVERVIEW_POSITION;
                self.camera.look_at(Vec3::ZERO, Vec3::Z);
                self.log_focus();
            }
            _ => {}
        }
    }

    fn log_focus(&self) {
        match self.focus.focused().and_then(|index| self.system.body(index)) {
            Some(body) => info!("Focused planet: {}", body.name()),
            None => info!("System overview"),
        }
    }

    /// Run simulation ticks, update the camera and GPU state, and draw.
    fn frame(&mut self) {
        // Fixed-rate simulation: each tick advances every body by the
        // configured simulated time step.
        let time_step = self.config.simulation.time_step;
        let system = &mut self.system;
        let tick_count = &mut self.tick_count;
        self.game_loop.tick(
            |_dt, _sim_time| {
                system.advance(time_step);
                *tick_count += 1;
            },
            |_alpha| {},
        );

        // Camera follows the focused planet, if any.
        if let Some(body) = self.focus.focused().and_then(|index| self.system.body(index)) {
            let target = body.position.as_vec3();
            let size = body.size() as f32;
            self.camera.position = framing_position(target, size);
            self.camera.look_at(target, Vec3::Z);
        }

        let Some(gpu) = &self.gpu else {
            return;
        };
        let (Some(sphere_renderer), Some(rings), Some(starfield), Some(depth_buffer)) = (
            &mut self.sphere_renderer,
            &self.rings,
            &self.starfield,
            &self.depth_buffer,
        ) else {
            return;
        };

        let camera_uniform = self.camera.to_uniform();

        let mut instances = body_instances(&self.system);
        instances.extend_from_slice(&self.belt_instances);

        sphere_renderer.update(&gpu.queue, &camera_uniform, &instances);
        rings.update(&gpu.queue, &camera_uniform, &self.system);
        starfield.update(&gpu.queue, &camera_uniform);
        if let Some(orbit_lines) = &self.orbit_lines {
            orbit_lines.update(&gpu.queue, &camera_uniform);
        }

        match gpu.get_current_texture() {
            Ok(surface_texture) => {
                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder =
                    gpu.device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("frame-encoder"),
                        });
                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("scene-pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: Some(
                            wgpu::RenderPassDepthStencilAttachment {
                                view: &depth_buffer.view,
                                depth_ops: Some(wgpu::Operations {
                                    load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                                    store: wgpu::StoreOp::Store,
                                }),
                                stencil_ops: None,
                            },
                        ),
                        timestamp_writes: None,
                        occlusion_query_set: None,
                        multiview_mask: None,
                    });

                    starfield.render(&mut pass);
                    if let Some(orbit_lines) = &self.orbit_lines {
                        orbit_lines.render(&mut pass);
                    }
                    rings.render(&mut pass);
                    sphere_renderer.render(&mut pass);
                }
                gpu.queue.submit(std::iter::once(encoder.finish()));
                surface_texture.present();
            }
            Err(SurfaceError::Timeout) => {
                // Recoverable: skip this frame.
            }
            Err(e) => {
                error!("Failed to acquire surface texture: {e}");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            let window = match event_loop.create_window(attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let scale_factor = window.scale_factor();
            let inner_size = window.inner_size();
            self.surface_wrapper =
                SurfaceWrapper::new(inner_size.width, inner_size.height, scale_factor);

            match init_render_context_blocking(window.clone()) {
                Ok(ctx) => {
                    self.initialize_rendering(&ctx);
                    self.gpu = Some(ctx);
                }
                Err(e) => {
                    error!("GPU initialization failed: {e}");
                    event_loop.exit();
                    return;
                }
            }

            self.window = Some(window);
            self.log_focus();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size.width, new_size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let new_inner = window.inner_size();
                    if let Some(resize) = self.surface_wrapper.handle_scale_factor_changed(
                        scale_factor,
                        new_inner.width,
                        new_inner.height,
                    ) {
                        let (w, h) = (resize.physical.width, resize.physical.height);
                        self.camera.set_aspect_ratio(w as f32, h as f32);
                        if let Some(gpu) = &mut self.gpu {
                            gpu.resize(w, h);
                        }
                        if let (Some(depth_buffer), Some(gpu)) =
                            (&mut self.depth_buffer, &self.gpu)
                        {
                            depth_buffer.resize(&gpu.device, w, h);
                        }
                        info!("Scale factor changed to {scale_factor:.2}, resized to {w}x{h}");
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && let PhysicalKey::Code(key) = event.physical_key
                {
                    self.handle_key(key);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
