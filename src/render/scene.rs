use crate::constants::*;
use crate::core::{FocusTarget, SceneFrame};
use rand::{rngs::StdRng, Rng, SeedableRng};
use wgpu::util::DeviceExt;

use super::helpers;

pub(crate) const MODE_SOLID: f32 = 0.0;
pub(crate) const MODE_MONITOR: f32 = 1.0;
pub(crate) const MODE_FUN: f32 = 2.0;

/// Upper bound on instances drawn per frame: scene pieces plus the star field.
pub(crate) const MAX_INSTANCES: usize = STAR_COUNT + 64;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) fog: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BoxInstance {
    pub(crate) center_mode: [f32; 4],
    pub(crate) half_time: [f32; 4],
    pub(crate) color_a: [f32; 4],
    pub(crate) color_b: [f32; 4],
}

impl BoxInstance {
    pub(crate) fn solid(center: [f32; 3], half: [f32; 3], rgb: [f32; 3]) -> Self {
        Self::new(center, half, rgb, rgb, MODE_SOLID, 0.0)
    }

    pub(crate) fn new(
        center: [f32; 3],
        half: [f32; 3],
        a: [f32; 3],
        b: [f32; 3],
        mode: f32,
        time: f32,
    ) -> Self {
        Self {
            center_mode: [center[0], center[1], center[2], mode],
            half_time: [half[0], half[1], half[2], time],
            color_a: [a[0], a[1], a[2], 1.0],
            color_b: [b[0], b[1], b[2], 1.0],
        }
    }

    const ATTRS: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeVertex {
    pos: [f32; 3],
    normal: [f32; 3],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit cube spanning [-1, 1] on every axis; four vertices per face.
fn cube_mesh() -> (Vec<CubeVertex>, Vec<u16>) {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut verts = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let base = verts.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let pos = [
                n[0] + u[0] * su + v[0] * sv,
                n[1] + u[1] * su + v[1] * sv,
                n[2] + u[2] * su + v[2] * sv,
            ];
            verts.push(CubeVertex { pos, normal: n });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (verts, indices)
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_instanced_pipeline(
        device,
        &pl,
        &shader,
        &[CubeVertex::layout(), BoxInstance::layout()],
        color_format,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let (verts, indices) = cube_mesh();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_vertices"),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_instances"),
        size: (MAX_INSTANCES * std::mem::size_of::<BoxInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        instance_buffer,
    }
}

/// Seeded star field in a spherical shell around the scene.
pub(crate) fn star_instances(seed: u64) -> Vec<BoxInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..STAR_COUNT)
        .map(|_| {
            let u: f32 = rng.gen_range(-1.0..1.0);
            let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let r: f32 = rng.gen_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
            let s = (1.0 - u * u).sqrt();
            let center = [r * s * theta.cos(), r * u, r * s * theta.sin()];
            let size = rng.gen_range(0.12..0.3);
            let glow = rng.gen_range(0.7..1.0);
            BoxInstance::solid(center, [size; 3], [glow * 1.05, glow * 1.05, glow * 1.1])
        })
        .collect()
}

/// Per-frame instance list: static RV pieces plus everything the scene animates.
pub(crate) fn push_frame_instances(frame: &SceneFrame, out: &mut Vec<BoxInstance>) {
    for (center, half, rgb) in RV_PIECES {
        out.push(BoxInstance::solid(center, half, rgb));
    }
    for (center, radius, rgb) in PLANETS {
        out.push(BoxInstance::solid(center, [radius; 3], rgb));
    }

    // neon signs
    for (i, anchor) in PICK_ANCHORS.iter().take(SIGN_HALF_EXTENTS.len()).enumerate() {
        out.push(BoxInstance::solid(
            anchor.center.to_array(),
            SIGN_HALF_EXTENTS[i],
            frame.sign_colors[i],
        ));
    }

    // project cards, scaled around their centers
    let cards = &PICK_ANCHORS[SIGN_HALF_EXTENTS.len()..SIGN_HALF_EXTENTS.len() + 4];
    for (anchor, scale) in cards.iter().zip(frame.card_scales) {
        let half = CARD_HALF_EXTENTS.map(|h| h * scale);
        out.push(BoxInstance::solid(anchor.center.to_array(), half, CARD_COLOR));
    }

    if let Some(target) = frame.go_back {
        let (name, color) = match target {
            FocusTarget::About => ("aboutGoBack", ABOUT_GO_BACK_COLOR),
            FocusTarget::Project => ("projectGoBack", PROJECT_GO_BACK_COLOR),
        };
        if let Some(anchor) = PICK_ANCHORS.iter().find(|a| a.name == name) {
            let half = match target {
                FocusTarget::About => GO_BACK_HALF_EXTENTS,
                // project button faces +x
                FocusTarget::Project => [
                    GO_BACK_HALF_EXTENTS[2],
                    GO_BACK_HALF_EXTENTS[1],
                    GO_BACK_HALF_EXTENTS[0],
                ],
            };
            out.push(BoxInstance::solid(anchor.center.to_array(), half, color));
        }
    }

    for m in MONITORS {
        out.push(BoxInstance::new(
            m.center,
            m.half,
            m.color_start,
            m.color_end,
            MODE_MONITOR,
            frame.shader_times[m.clock],
        ));
    }
    let (fun_center, fun_half) = FUN_MONITOR;
    out.push(BoxInstance::new(
        fun_center,
        fun_half,
        FUN_MONITOR_COLORS.0,
        FUN_MONITOR_COLORS.1,
        MODE_FUN,
        frame.torus_angle,
    ));

    out.push(BoxInstance::solid(BATTERY_CENTER, BATTERY_HALF, [0.2, 0.2, 0.24]));
    for (x, y) in frame.gauge_x.iter().zip(GAUGE_BAR_Y) {
        out.push(BoxInstance::solid(
            [*x + 0.1, y, BATTERY_CENTER[2]],
            GAUGE_BAR_HALF,
            [0.12, 1.2, 0.4],
        ));
    }
}
