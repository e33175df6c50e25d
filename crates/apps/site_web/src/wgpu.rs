#[cfg(target_arch = "wasm32")]
mod imp {
    use ::wgpu::util::DeviceExt;
    use gpu::{Globals, SurfaceSize};
    use scene::components::Mesh;
    use std::borrow::Cow;
    use wasm_bindgen::prelude::*;

    const SAMPLE_COUNT: u32 = 4;
    const DEPTH_FORMAT: ::wgpu::TextureFormat = ::wgpu::TextureFormat::Depth24Plus;

    #[derive(Debug)]
    pub struct GpuMesh {
        vertex_buffer: ::wgpu::Buffer,
        index_buffer: ::wgpu::Buffer,
        index_count: u32,
    }

    #[derive(Debug)]
    pub struct WgpuContext {
        pub _instance: &'static ::wgpu::Instance,
        pub surface: ::wgpu::Surface<'static>,
        pub device: ::wgpu::Device,
        pub queue: ::wgpu::Queue,
        pub config: ::wgpu::SurfaceConfiguration,
        pub _canvas: web_sys::HtmlCanvasElement,
        pub pipeline: ::wgpu::RenderPipeline,
        pub uniform_buffer: ::wgpu::Buffer,
        pub uniform_bind_group: ::wgpu::BindGroup,
        pub msaa_view: ::wgpu::TextureView,
        pub depth_view: ::wgpu::TextureView,
        pub emblem: Option<GpuMesh>,
    }

    impl WgpuContext {
        pub fn has_emblem(&self) -> bool {
            self.emblem.is_some()
        }
    }

    const EMBLEM_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    ambient: vec4<f32>,
    accent_color: vec4<f32>,
    accent_position: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct VsOut {
    @builtin(position) pos: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(1) normal: vec3<f32>) -> VsOut {
    let world = globals.model * vec4<f32>(position, 1.0);
    let n = (globals.model * vec4<f32>(normal, 0.0)).xyz;
    return VsOut(globals.view_proj * world, world.xyz, n);
}

@fragment
fn fs_main(fs_in: VsOut) -> @location(0) vec4<f32> {
    let n = normalize(fs_in.normal);
    // w = 0: directional light shining from xyz towards the origin.
    // w = 1: point light located at xyz.
    let p = globals.accent_position;
    let l = normalize(mix(p.xyz, p.xyz - fs_in.world_pos, p.w));
    let ndotl = max(dot(n, l), 0.0);

    let base = vec3<f32>(0.8, 0.8, 0.8);
    let lit = base * (globals.ambient.rgb + globals.accent_color.rgb * ndotl);
    return vec4<f32>(lit, 1.0);
}
"#;

    fn create_target_view(
        device: &::wgpu::Device,
        config: &::wgpu::SurfaceConfiguration,
        label: &str,
        format: ::wgpu::TextureFormat,
    ) -> ::wgpu::TextureView {
        let tex = device.create_texture(&::wgpu::TextureDescriptor {
            label: Some(label),
            size: ::wgpu::Extent3d {
                width: config.width.max(1),
                height: config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: ::wgpu::TextureDimension::D2,
            format,
            usage: ::wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        tex.create_view(&::wgpu::TextureViewDescriptor::default())
    }

    pub async fn init_wgpu(
        canvas: web_sys::HtmlCanvasElement,
        size: SurfaceSize,
    ) -> Result<WgpuContext, JsValue> {
        // `wgpu::Surface` must not outlive its `wgpu::Instance`; the instance
        // lives for the whole page.
        let instance: &'static ::wgpu::Instance = Box::leak(Box::new(::wgpu::Instance::new(
            &::wgpu::InstanceDescriptor {
                backends: ::wgpu::Backends::GL,
                ..Default::default()
            },
        )));

        let surface = instance
            .create_surface(::wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("surface error: {e}")))?;

        let adapter = instance
            .request_adapter(&::wgpu::RequestAdapterOptions {
                power_preference: ::wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("adapter error: {e}")))?;

        let (device, queue) = adapter
            .request_device(&::wgpu::DeviceDescriptor {
                label: Some("asc-wgpu-device"),
                required_features: ::wgpu::Features::empty(),
                required_limits: ::wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("device error: {e}")))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .cloned()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().cloned())
            .ok_or_else(|| JsValue::from_str("surface reports no formats"))?;
        // Transparent canvas over the page background.
        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&::wgpu::CompositeAlphaMode::PreMultiplied)
        {
            ::wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            surface_caps
                .alpha_modes
                .first()
                .cloned()
                .unwrap_or(::wgpu::CompositeAlphaMode::Auto)
        };

        let config = ::wgpu::SurfaceConfiguration {
            usage: ::wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            desired_maximum_frame_latency: 2,
            present_mode: ::wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let msaa_view = create_target_view(&device, &config, "asc-msaa", config.format);
        let depth_view = create_target_view(&device, &config, "asc-depth", DEPTH_FORMAT);

        let shader = device.create_shader_module(::wgpu::ShaderModuleDescriptor {
            label: Some("asc-emblem-shader"),
            source: ::wgpu::ShaderSource::Wgsl(Cow::Borrowed(EMBLEM_SHADER)),
        });

        let uniform_buffer = device.create_buffer(&::wgpu::BufferDescriptor {
            label: Some("asc-globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: ::wgpu::BufferUsages::UNIFORM | ::wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&::wgpu::BindGroupLayoutDescriptor {
                label: Some("asc-globals-bgl"),
                entries: &[::wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ::wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: ::wgpu::BindingType::Buffer {
                        ty: ::wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&::wgpu::BindGroupDescriptor {
            label: Some("asc-globals-bg"),
            layout: &uniform_bind_group_layout,
            entries: &[::wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&::wgpu::PipelineLayoutDescriptor {
            label: Some("asc-emblem-pipeline-layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&::wgpu::RenderPipelineDescriptor {
            label: Some("asc-emblem-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: ::wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[::wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 6]>() as ::wgpu::BufferAddress,
                    step_mode: ::wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        ::wgpu::VertexAttribute {
                            format: ::wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        ::wgpu::VertexAttribute {
                            format: ::wgpu::VertexFormat::Float32x3,
                            offset: 12,
                            shader_location: 1,
                        },
                    ],
                }],
            },
            fragment: Some(::wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(::wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(::wgpu::BlendState::REPLACE),
                    write_mask: ::wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: ::wgpu::PrimitiveState {
                topology: ::wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: ::wgpu::FrontFace::Ccw,
                // Authored models are not guaranteed to be closed or consistently wound.
                cull_mode: None,
                polygon_mode: ::wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(::wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: ::wgpu::CompareFunction::Less,
                stencil: ::wgpu::StencilState::default(),
                bias: ::wgpu::DepthBiasState::default(),
            }),
            multisample: ::wgpu::MultisampleState {
                count: SAMPLE_COUNT,
                ..Default::default()
            },
            multiview_mask: None,
            cache: None,
        });

        Ok(WgpuContext {
            _instance: instance,
            surface,
            device,
            queue,
            config,
            _canvas: canvas,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            msaa_view,
            depth_view,
            emblem: None,
        })
    }

    pub fn upload_emblem(ctx: &mut WgpuContext, mesh: &Mesh) {
        let vertices = mesh.interleaved();
        let vertex_buffer = ctx
            .device
            .create_buffer_init(&::wgpu::util::BufferInitDescriptor {
                label: Some("asc-emblem-vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: ::wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = ctx
            .device
            .create_buffer_init(&::wgpu::util::BufferInitDescriptor {
                label: Some("asc-emblem-indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: ::wgpu::BufferUsages::INDEX,
            });
        ctx.emblem = Some(GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        });
    }

    pub fn resize_wgpu(ctx: &mut WgpuContext, size: SurfaceSize) {
        ctx.config.width = size.width.max(1);
        ctx.config.height = size.height.max(1);
        ctx.surface.configure(&ctx.device, &ctx.config);
        ctx.msaa_view = create_target_view(&ctx.device, &ctx.config, "asc-msaa", ctx.config.format);
        ctx.depth_view = create_target_view(&ctx.device, &ctx.config, "asc-depth", DEPTH_FORMAT);
    }

    pub fn render_frame(ctx: &WgpuContext, globals: &Globals) -> Result<(), JsValue> {
        let frame = ctx
            .surface
            .get_current_texture()
            .map_err(|e| JsValue::from_str(&format!("surface acquire failed: {e}")))?;
        let view = frame
            .texture
            .create_view(&::wgpu::TextureViewDescriptor::default());

        ctx.queue
            .write_buffer(&ctx.uniform_buffer, 0, bytemuck::bytes_of(globals));

        let mut encoder = ctx
            .device
            .create_command_encoder(&::wgpu::CommandEncoderDescriptor {
                label: Some("asc-frame-encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&::wgpu::RenderPassDescriptor {
                label: Some("asc-emblem-pass"),
                color_attachments: &[Some(::wgpu::RenderPassColorAttachment {
                    view: &ctx.msaa_view,
                    resolve_target: Some(&view),
                    depth_slice: None,
                    ops: ::wgpu::Operations {
                        load: ::wgpu::LoadOp::Clear(::wgpu::Color::TRANSPARENT),
                        store: ::wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(::wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_view,
                    depth_ops: Some(::wgpu::Operations {
                        load: ::wgpu::LoadOp::Clear(1.0),
                        store: ::wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });

            // An empty pass still clears the canvas while the model loads.
            if let Some(mesh) = &ctx.emblem {
                rpass.set_pipeline(&ctx.pipeline);
                rpass.set_bind_group(0, &ctx.uniform_bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), ::wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use gpu::{Globals, SurfaceSize};
    use scene::components::Mesh;
    use wasm_bindgen::prelude::JsValue;

    #[derive(Debug, Default)]
    pub struct WgpuContext;

    impl WgpuContext {
        pub fn has_emblem(&self) -> bool {
            false
        }
    }

    pub async fn init_wgpu(
        _canvas: web_sys::HtmlCanvasElement,
        _size: SurfaceSize,
    ) -> Result<WgpuContext, JsValue> {
        Err(JsValue::from_str(
            "wgpu initialization is only available on wasm32 targets",
        ))
    }

    pub fn upload_emblem(_ctx: &mut WgpuContext, _mesh: &Mesh) {}

    pub fn resize_wgpu(_ctx: &mut WgpuContext, _size: SurfaceSize) {}

    pub fn render_frame(_ctx: &WgpuContext, _globals: &Globals) -> Result<(), JsValue> {
        Err(JsValue::from_str(
            "wgpu rendering is only available on wasm32 targets",
        ))
    }
}

pub use imp::{WgpuContext, init_wgpu, render_frame, resize_wgpu, upload_emblem};
