use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::{create_checked_shader, RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{triangle_pipeline, DynamicBuffer, ViewportBinding};

/// Renderer for `DrawCmd::Polyline`.
///
/// Every polyline in the draw list is expanded on the CPU into one shared
/// triangle-list vertex buffer (a quad of the requested width per segment),
/// uploaded once, and drawn with a single call.
pub struct PolylineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    viewport: Option<ViewportBinding>,
    vertices: DynamicBuffer,
    scratch: Vec<LineVertex>,
}

impl Default for PolylineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolylineRenderer {
    pub fn new() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            viewport: None,
            vertices: DynamicBuffer::new("kurve polyline vbo", wgpu::BufferUsages::VERTEX),
            scratch: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.scratch.clear();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Polyline(cmd) = &item.cmd else { continue };
            let color = cmd.color.to_array();
            self.scratch.extend(
                expand_polyline(&cmd.points, cmd.width)
                    .into_iter()
                    .map(|p| LineVertex { pos: [p.x, p.y], color }),
            );
        }

        if self.scratch.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);

        let Some(viewport) = self.viewport.as_ref() else { return };
        viewport.write(ctx);

        let count = self.scratch.len() as u32;
        let Some(vbo) = self.vertices.upload(ctx, bytemuck::cast_slice(&self.scratch)) else {
            return;
        };
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.begin_load_pass("kurve polyline pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &viewport.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..count, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let (shader, _) = create_checked_shader(
            ctx.device,
            "kurve polyline shader",
            include_str!("shaders/polyline.wgsl"),
        );
        let viewport = ViewportBinding::new(ctx.device, "kurve polyline viewport");
        let pipeline = triangle_pipeline(
            ctx,
            "kurve polyline pipeline",
            &shader,
            &viewport.layout,
            &[LineVertex::layout()],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport = Some(viewport);
    }
}

/// Expands a polyline into triangle-list positions, six per segment.
///
/// Each segment becomes a rectangle of `width` centred on it. Zero-length
/// segments are skipped. Joints are left open, which is invisible at the
/// thin widths used here.
pub fn expand_polyline(points: &[Vec2], width: f32) -> Vec<Vec2> {
    let half = width.max(0.0) * 0.5;
    let mut out = Vec::with_capacity(points.len().saturating_sub(1) * 6);

    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let d = b - a;
        let len = d.length();
        if len <= f32::EPSILON {
            continue;
        }

        let n = Vec2::new(-d.y, d.x) * (half / len);
        let (a0, a1, b0, b1) = (a + n, a - n, b + n, b - n);
        out.extend_from_slice(&[a0, a1, b1, a0, b1, b0]);
    }

    out
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_segment_becomes_band() {
        let tris = expand_polyline(&[Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0)], 2.0);
        assert_eq!(tris.len(), 6);
        for p in &tris {
            assert!((p.y - 10.0).abs() <= 1.0 + 1e-6);
            assert!(p.x == 0.0 || p.x == 100.0);
        }
        assert!(tris.iter().any(|p| p.y == 11.0));
        assert!(tris.iter().any(|p| p.y == 9.0));
    }

    #[test]
    fn degenerate_segments_are_skipped() {
        let p = Vec2::new(5.0, 5.0);
        assert!(expand_polyline(&[p, p, p], 2.0).is_empty());
        assert_eq!(expand_polyline(&[p, p, Vec2::new(6.0, 5.0)], 2.0).len(), 6);
    }

    #[test]
    fn single_point_has_no_geometry() {
        assert!(expand_polyline(&[Vec2::new(1.0, 1.0)], 2.0).is_empty());
    }
}
