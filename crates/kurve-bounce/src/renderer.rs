use bytemuck::{Pod, Zeroable};

use kurve_engine::paint::Color;
use kurve_engine::render::{create_checked_shader, RenderCtx, RenderTarget};
use kurve_geom::ShaderParams;

const DISC_COLOR: Color = Color::RED;
const BAR_COLOR: Color = Color::BLACK;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct BounceUniform {
    center: [f32; 2],
    viewport: [f32; 2],
    radius: f32,
    half_segment: f32,
    line_thickness: f32,
    _pad: f32,
    disc_color: [f32; 4],
    bar_color: [f32; 4],
}

impl BounceUniform {
    fn new(ctx: &RenderCtx<'_>, params: &ShaderParams) -> Self {
        Self {
            center: [params.center.x, params.center.y],
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            radius: params.radius,
            half_segment: params.half_segment,
            line_thickness: params.line_thickness,
            _pad: 0.0,
            disc_color: DISC_COLOR.to_array(),
            bar_color: BAR_COLOR.to_array(),
        }
    }
}

/// Full-screen pass that paints the disc and the horizontal bar.
///
/// No geometry is uploaded: the vertex shader emits one oversized triangle
/// and every pixel is classified in the fragment shader.
pub struct BounceRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
}

impl Default for BounceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceRenderer {
    pub fn new() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            ubo: None,
            bind_group: None,
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        params: &ShaderParams,
    ) {
        self.ensure_pipeline(ctx);

        let (Some(pipeline), Some(ubo), Some(bind_group)) =
            (self.pipeline.as_ref(), self.ubo.as_ref(), self.bind_group.as_ref())
        else {
            return;
        };

        ctx.queue
            .write_buffer(ubo, 0, bytemuck::bytes_of(&BounceUniform::new(ctx, params)));

        let mut rpass = target.begin_load_pass("kurve bounce pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline.is_some() && self.pipeline_format == Some(ctx.surface_format) {
            return;
        }

        let (shader, diag) = create_checked_shader(
            ctx.device,
            "kurve bounce shader",
            include_str!("shaders/bounce.wgsl"),
        );
        if diag.errors > 0 {
            log::warn!("bounce shader has {} error(s); frames will stay blank", diag.errors);
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("kurve bounce bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<BounceUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("kurve bounce ubo"),
            size: std::mem::size_of::<BounceUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("kurve bounce bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("kurve bounce pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("kurve bounce pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_layout() {
        // vec2 + vec2 + 4 x f32 + 2 x vec4
        assert_eq!(std::mem::size_of::<BounceUniform>(), 64);
    }
}
