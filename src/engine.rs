//! The rendering engine: owns the GPU context, the camera, and one
//! renderer per scene element, and records the per-frame render pass.

use std::time::{Duration, Instant};

use winit::event::WindowEvent;

use crate::camera::controller::CameraController;
use crate::camera::input::InputHandler;
use crate::error::FacetaError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::lighting::Lighting;
use crate::options::Options;
use crate::renderer::lamp::LampRenderer;
use crate::renderer::solid::SolidRenderer;
use crate::scene;
use crate::util::frame_timing::FrameTiming;

/// How often the smoothed FPS is written to the debug log.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Renders the static scene under the fly camera.
///
/// All mutable state in the program lives here (the camera and the input
/// tracking); the render loop owns one engine and passes it `&mut` into
/// event handling — no globals.
pub struct SceneRenderEngine {
    /// Core wgpu resources.
    pub context: RenderContext,
    /// The fly camera and its GPU bridge.
    pub camera_controller: CameraController,
    /// Window-event → camera translation.
    pub input_handler: InputHandler,
    /// Two-point-light setup.
    pub lighting: Lighting,
    /// Smoothed frame timing.
    pub frame_timing: FrameTiming,
    solid_renderer: SolidRenderer,
    lamp_renderer: LampRenderer,
    depth_texture: DepthTexture,
    options: Options,
    last_fps_log: Instant,
}

impl SceneRenderEngine {
    /// Create the engine for the given window surface and initial size.
    ///
    /// # Errors
    ///
    /// Returns [`FacetaError::Gpu`] if GPU context initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        options: Options,
    ) -> Result<Self, FacetaError> {
        let context = RenderContext::new(window, initial_size).await?;

        let camera_controller = CameraController::new(
            &context,
            &options.camera,
            scene::CAMERA_START,
        );
        let lighting = Lighting::new(&context, &options.lighting);
        let solid_renderer = SolidRenderer::new(
            &context,
            &camera_controller.layout,
            &lighting.layout,
            &options.scene,
        );
        let lamp_renderer =
            LampRenderer::new(&context, &camera_controller.layout);
        let depth_texture = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        log::info!(
            "engine initialized: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.format()
        );

        Ok(Self {
            context,
            camera_controller,
            input_handler: InputHandler::new(),
            lighting,
            frame_timing: FrameTiming::new(),
            solid_renderer,
            lamp_renderer,
            depth_texture,
            options,
            last_fps_log: Instant::now(),
        })
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and push the changes to the camera, lighting,
    /// and object uniforms.
    pub fn set_options(&mut self, options: Options) {
        self.camera_controller.apply_options(&options.camera);
        self.lighting.apply_options(&options.lighting);
        self.solid_renderer
            .apply_options(&self.context.queue, &options.scene);
        self.options = options;
    }

    /// Forward a window event to the camera input handler.
    ///
    /// Returns true if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.input_handler
            .handle_event(&mut self.camera_controller, event)
    }

    /// Per-frame update: apply held movement keys and upload uniforms.
    ///
    /// All input events received before this call are already applied to
    /// the camera, so the frame reflects every input up to its start.
    pub fn update(&mut self, dt: f32) {
        self.input_handler
            .integrate(&mut self.camera_controller, dt);
        self.camera_controller.update_gpu(&self.context.queue);
        self.lighting.update_gpu(&self.context.queue);
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; the caller resizes on `Lost`/`Outdated` and logs
    /// otherwise.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        {
            let background = self.options.scene.background;
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Render Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(background[0]),
                                    g: f64::from(background[1]),
                                    b: f64::from(background[2]),
                                    a: f64::from(background[3]),
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_texture.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            // Lamps first, then the lit solids.
            self.lamp_renderer
                .draw(&mut render_pass, &self.camera_controller.bind_group);
            self.solid_renderer.draw(
                &mut render_pass,
                &self.camera_controller.bind_group,
                &self.lighting.bind_group,
            );
        }

        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        let now = Instant::now();
        if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
            log::debug!("{:.0} fps", self.frame_timing.fps());
            self.last_fps_log = now;
        }
        Ok(())
    }

    /// Reconfigure the surface, camera aspect, and depth target for a new
    /// window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_controller.resize(width, height);
        self.depth_texture = DepthTexture::new(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }
}
