use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{create_checked_shader, RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{triangle_pipeline, DynamicBuffer, ViewportBinding};

/// Renderer for `DrawCmd::Circle`.
///
/// One instanced quad per disc; the fragment shader cuts the disc out with a
/// one-pixel antialiased edge.
pub struct CircleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    viewport: Option<ViewportBinding>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
    instances: DynamicBuffer,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            viewport: None,
            quad_vbo: None,
            quad_ibo: None,
            instances: DynamicBuffer::new("kurve circle instance vbo", wgpu::BufferUsages::VERTEX),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let instances: Vec<CircleInstance> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(cmd) if cmd.radius > 0.0 => Some(CircleInstance {
                    center: [cmd.center.x, cmd.center.y],
                    radius: [cmd.radius, 0.0],
                    color: cmd.color.to_array(),
                }),
                _ => None,
            })
            .collect();

        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);

        let Some(viewport) = self.viewport.as_ref() else { return };
        viewport.write(ctx);

        let Some(instance_vbo) = self.instances.upload(ctx, bytemuck::cast_slice(&instances))
        else {
            return;
        };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.begin_load_pass("kurve circle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &viewport.bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let (shader, _) =
            create_checked_shader(ctx.device, "kurve circle shader", include_str!("shaders/circle.wgsl"));
        let viewport = ViewportBinding::new(ctx.device, "kurve circle viewport");

        let pipeline = triangle_pipeline(
            ctx,
            "kurve circle pipeline",
            &shader,
            &viewport.layout,
            &[QuadVertex::layout(), CircleInstance::layout()],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport = Some(viewport);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("kurve circle quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("kurve circle quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // -1..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, -1.0] },
    QuadVertex { pos: [1.0, -1.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [-1.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Instance data layout (32 bytes):
///
///  offset  0  center  [f32; 2]   loc 1
///  offset  8  radius  [f32; 2]   loc 2  (.x = radius, .y unused)
///  offset 16  color   [f32; 4]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius: [f32; 2],
    color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
