use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns the fly camera plus everything the GPU needs to consume it: the
/// uniform struct, its buffer, and the bind group.
///
/// The projection matrix lives here rather than on the camera — it combines
/// the camera's zoom with the viewport aspect ratio, which the camera does
/// not own.
pub struct CameraController {
    /// The fly camera itself.
    pub camera: Camera,
    /// CPU copy of the GPU uniform.
    pub uniform: CameraUniform,
    /// Uniform buffer holding [`CameraUniform`].
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in both shaders).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`buffer`](Self::buffer).
    pub bind_group: wgpu::BindGroup,
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl CameraController {
    /// Create a controller with the camera at `position`, movement
    /// parameters from `options`, and the aspect ratio of the current
    /// surface configuration.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        options: &CameraOptions,
        position: Vec3,
    ) -> Self {
        let mut camera = Camera::new(position, Vec3::Y);
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;

        let aspect =
            context.config.width as f32 / context.config.height as f32;

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(
            &camera,
            Self::projection_for(&camera, aspect, options.znear, options.zfar),
        );

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    fn projection_for(
        camera: &Camera,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(camera.zoom().to_radians(), aspect, znear, zfar)
    }

    /// Projection matrix built from the camera's current zoom and the
    /// stored aspect ratio.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Self::projection_for(&self.camera, self.aspect, self.znear, self.zfar)
    }

    /// Refresh the uniform from the camera and write it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera, self.projection());
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }

    /// Track a viewport resize. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Re-apply camera options (movement speed, sensitivity, clip planes).
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.movement_speed = options.movement_speed;
        self.camera.mouse_sensitivity = options.mouse_sensitivity;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }
}
