use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{DEPTH_FORMAT, PixelTexture};
use crate::options::SceneOptions;
use crate::scene;
use crate::scene::geometry::{
    PRISM_INDICES, PRISM_VERTICES, PYRAMID_INDICES, PYRAMID_VERTICES,
    SolidVertex,
};

/// Per-object uniform: placement, normal correction, and base color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    color: [f32; 4],
}

/// One lit solid: its mesh buffers, placement uniform, and surface texture.
struct SolidObject {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
}

impl SolidObject {
    #[allow(clippy::too_many_arguments)]
    fn new(
        context: &RenderContext,
        label: &str,
        vertices: &[SolidVertex],
        indices: &[u32],
        uniform: ObjectUniform,
        object_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
        texture: &PixelTexture,
    ) -> Self {
        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertex Buffer")),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Index Buffer")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );
        let object_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Object Buffer")),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let object_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: object_buffer.as_entire_binding(),
                    }],
                    label: Some(&format!("{label} Object Bind Group")),
                });
        let texture_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: texture_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(
                                &texture.view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(
                                &texture.sampler,
                            ),
                        },
                    ],
                    label: Some(&format!("{label} Texture Bind Group")),
                });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            object_buffer,
            object_bind_group,
            texture_bind_group,
        }
    }
}

/// Renders the two lit solids with a shared Blinn-Phong pipeline.
///
/// Bind groups: 0 = camera, 1 = lighting, 2 = per-object uniform,
/// 3 = surface texture. The pyramid samples a procedural brick texture;
/// the prism samples a 1×1 white texel.
pub struct SolidRenderer {
    pipeline: wgpu::RenderPipeline,
    pyramid: SolidObject,
    prism: SolidObject,
    // Textures are kept alive for the bind groups above.
    _brick_texture: PixelTexture,
    _white_texture: PixelTexture,
}

impl SolidRenderer {
    /// Build the pipeline, mesh buffers, and textures.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        options: &SceneOptions,
    ) -> Self {
        let object_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Object Bind Group Layout"),
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
        let texture_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Surface Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            },
        );

        let pipeline = Self::create_pipeline(
            context,
            camera_layout,
            lighting_layout,
            &object_layout,
            &texture_layout,
        );

        let (brick_w, brick_h, brick_pixels) = scene::brick_texture_pixels();
        let brick_texture = PixelTexture::from_pixels(
            &context.device,
            &context.queue,
            "Brick Texture",
            brick_w,
            brick_h,
            &brick_pixels,
        );
        let white_texture =
            PixelTexture::white(&context.device, &context.queue);

        let pyramid = SolidObject::new(
            context,
            "Pyramid",
            &PYRAMID_VERTICES,
            &PYRAMID_INDICES,
            ObjectUniform {
                model: scene::pyramid_model().to_cols_array_2d(),
                normal: Mat4::IDENTITY.to_cols_array_2d(),
                color: options.pyramid_color,
            },
            &object_layout,
            &texture_layout,
            &brick_texture,
        );
        let prism = SolidObject::new(
            context,
            "Prism",
            &PRISM_VERTICES,
            &PRISM_INDICES,
            ObjectUniform {
                model: scene::prism_model().to_cols_array_2d(),
                normal: scene::prism_rotation().to_cols_array_2d(),
                color: options.prism_color,
            },
            &object_layout,
            &texture_layout,
            &white_texture,
        );

        Self {
            pipeline,
            pyramid,
            prism,
            _brick_texture: brick_texture,
            _white_texture: white_texture,
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/solid.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Solid Pipeline Layout"),
                bind_group_layouts: &[
                    camera_layout,
                    lighting_layout,
                    object_layout,
                    texture_layout,
                ],
                push_constant_ranges: &[],
            },
        );

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1, // tex_coords
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 20,
                    shader_location: 2, // normal
                },
            ],
        };

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Solid Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // The mesh tables mix windings; depth testing alone
                    // resolves visibility for these closed solids.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )
    }

    /// Re-upload per-object colors from changed scene options.
    pub fn apply_options(&self, queue: &wgpu::Queue, options: &SceneOptions) {
        let pyramid = ObjectUniform {
            model: scene::pyramid_model().to_cols_array_2d(),
            normal: Mat4::IDENTITY.to_cols_array_2d(),
            color: options.pyramid_color,
        };
        let prism = ObjectUniform {
            model: scene::prism_model().to_cols_array_2d(),
            normal: scene::prism_rotation().to_cols_array_2d(),
            color: options.prism_color,
        };
        queue.write_buffer(&self.pyramid.object_buffer, 0, bytemuck::cast_slice(
            &[pyramid],
        ));
        queue.write_buffer(&self.prism.object_buffer, 0, bytemuck::cast_slice(
            &[prism],
        ));
    }

    /// Record draws for both solids.
    ///
    /// Caller has begun the render pass; camera and lighting bind groups
    /// are set here.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
        lighting_bind_group: &'a wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, lighting_bind_group, &[]);
        for object in [&self.pyramid, &self.prism] {
            render_pass.set_bind_group(2, &object.object_bind_group, &[]);
            render_pass.set_bind_group(3, &object.texture_bind_group, &[]);
            render_pass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
            render_pass.set_index_buffer(
                object.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.draw_indexed(0..object.index_count, 0, 0..1);
        }
    }
}
