//! Two-point-light setup shared by the lit-solid shader.

use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;
use crate::scene;

/// Lighting configuration shared by the lit-solid shader.
/// NOTE: Must match WGSL struct layout exactly (80 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// First point light, world-space position.
    pub light1_pos: [f32; 3],
    pub(crate) _pad1: f32,
    /// First point light color (RGBA, alpha used as intensity scale).
    pub light1_color: [f32; 4],
    /// Second point light, world-space position.
    pub light2_pos: [f32; 3],
    pub(crate) _pad2: f32,
    /// Second point light color.
    pub light2_color: [f32; 4],
    /// Ambient term.
    pub ambient: f32,
    /// Specular strength.
    pub specular_strength: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
    pub(crate) _pad3: f32,
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

impl LightingUniform {
    /// Build the uniform from lighting options plus the fixed scene light
    /// placement.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            light1_pos: scene::LIGHT1_POS.to_array(),
            _pad1: 0.0,
            light1_color: options.light1_color,
            light2_pos: scene::LIGHT2_POS.to_array(),
            _pad2: 0.0,
            light2_color: options.light2_color,
            ambient: options.ambient,
            specular_strength: options.specular_strength,
            shininess: options.shininess,
            _pad3: 0.0,
        }
    }
}

/// Two-point-light setup: uniform, buffer, and bind group.
pub struct Lighting {
    /// CPU copy of the GPU uniform.
    pub uniform: LightingUniform,
    /// Uniform buffer holding [`LightingUniform`].
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the solid shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`buffer`](Self::buffer).
    pub bind_group: wgpu::BindGroup,
    dirty: bool,
}

impl Lighting {
    /// Create the lighting buffer and bind group from options.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
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
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
            dirty: false,
        }
    }

    /// Replace the lighting parameters; uploaded on the next
    /// [`update_gpu`](Self::update_gpu).
    pub fn apply_options(&mut self, options: &LightingOptions) {
        self.uniform = LightingUniform::from_options(options);
        self.dirty = true;
    }

    /// Write the uniform to the GPU if it changed since the last upload.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        if self.dirty {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
                self.uniform,
            ]));
            self.dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightingUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 80);
    }

    #[test]
    fn defaults_place_lights_at_scene_positions() {
        let uniform = LightingUniform::default();
        assert_eq!(uniform.light1_pos, [-0.1, 1.0, 0.3]);
        assert_eq!(uniform.light2_pos, [1.0, 1.2, -0.1]);
        assert_eq!(uniform.light1_color, [1.0, 1.0, 1.0, 1.0]);
    }
}
