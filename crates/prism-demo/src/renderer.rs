use anyhow::Result;
use wgpu::util::DeviceExt;

use prism_engine::paint::Color;
use prism_engine::render::{compile_stage, DynamicUniformBuffer, RenderCtx, RenderTarget};
use prism_shader::{ShaderProgramSource, ShaderStage};

use crate::scene::{Layer, Vertex, VERTICES};

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Draws the prism scene: one static vertex buffer, one draw call per [`Layer`],
/// each with its own uniform color selected by dynamic offset.
pub struct SceneRenderer {
    source: ShaderProgramSource,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    colors: Option<DynamicUniformBuffer<Color>>,

    vbo: Option<wgpu::Buffer>,
}

impl SceneRenderer {
    pub fn new(source: ShaderProgramSource) -> Self {
        Self {
            source,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            colors: None,
            vbo: None,
        }
    }

    /// Renders every layer with `colors[layer.index()]`.
    ///
    /// Fails only when the pipeline cannot be built (shader compile error).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        colors: &[Color; Layer::COUNT],
    ) -> Result<()> {
        self.ensure_pipeline(ctx)?;
        self.ensure_vertex_buffer(ctx);
        self.ensure_bindings(ctx);

        let Some(uniforms) = self.colors.as_mut() else { return Ok(()) };
        uniforms.write(ctx.queue, colors);

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(bind_group) = self.bind_group.as_ref() else { return Ok(()) };
        let Some(vbo) = self.vbo.as_ref() else { return Ok(()) };
        let Some(uniforms) = self.colors.as_ref() else { return Ok(()) };

        let mut rpass = target.begin_load_pass("prism scene pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        for layer in Layer::ALL {
            rpass.set_bind_group(0, bind_group, &[uniforms.offset(layer.index())]);
            rpass.draw(layer.vertices(), 0..1);
        }

        Ok(())
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return Ok(());
        }

        let vs = compile_stage(
            ctx.device,
            ShaderStage::Vertex,
            self.source.stage(ShaderStage::Vertex),
            VERTEX_ENTRY,
        )?;
        let fs = compile_stage(
            ctx.device,
            ShaderStage::Fragment,
            self.source.stage(ShaderStage::Fragment),
            FRAGMENT_ENTRY,
        )?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("prism color bgl"),
                    entries: &[DynamicUniformBuffer::<Color>::layout_entry(
                        0,
                        wgpu::ShaderStages::FRAGMENT,
                    )],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("prism pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // No blending: alpha is written, not composited.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("scene pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        Ok(())
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.colors.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let colors = self.colors.get_or_insert_with(|| {
            DynamicUniformBuffer::new(ctx.device, "prism color ubo", Layer::COUNT)
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism color bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: colors.binding(),
            }],
        });

        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism scene vbo"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }
}
