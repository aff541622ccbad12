use std::sync::Arc;

use futures::executor::block_on;
use log::{debug, warn};
use noisebox::{
    framebuffer::Framebuffer,
    util::get_channel,
    viewport::{Rect, Size},
    Error, Result,
};
use wgpu::{
    include_wgsl, AddressMode, Adapter, BindGroup, BindGroupDescriptor, BindGroupEntry,
    BindGroupLayout, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingResource,
    BindingType, Color, ColorTargetState, ColorWrites, Device, DeviceDescriptor, Extent3d,
    FilterMode, FragmentState, FrontFace, ImageDataLayout, Instance, InstanceDescriptor, LoadOp,
    MultisampleState, Operations, PipelineLayoutDescriptor, PolygonMode, PowerPreference,
    PresentMode, PrimitiveState, PrimitiveTopology, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor, RequestAdapterOptions,
    SamplerBindingType, SamplerDescriptor, ShaderStages, StoreOp, Surface, SurfaceConfiguration,
    Texture, TextureDescriptor, TextureDimension, TextureFormat, TextureSampleType,
    TextureUsages, TextureViewDescriptor, TextureViewDimension, VertexState,
};
use winit::window::Window;

pub struct Renderer {
    _instance: Instance,
    _adapter: Adapter,
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    needs_reconfig: bool,

    source: Size,
    texture: Texture,
    bind_group: BindGroup,
    pipeline: RenderPipeline,
}
impl Renderer {
    pub fn init(window: Arc<Window>, source: Size) -> Result<Self> {
        let size = window.inner_size();

        let instance = Instance::new(InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;
        let adapter = block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(Error::NoAdapter)?;
        debug!("Using adapter {:?}", adapter.get_info());

        let mut config = surface
            .get_default_config(&adapter, size.width, size.height)
            .ok_or(Error::SurfaceConfig)?;
        config.present_mode = PresentMode::AutoVsync;

        let (device, queue) = block_on(adapter.request_device(
            &DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
            },
            None,
        ))?;

        let texture = create_frame_texture(&device, source);
        let layout = create_bind_group_layout(&device);
        let bind_group = create_bind_group(&device, &layout, &texture);
        let pipeline = create_render_pipeline(&device, &config, &layout);

        Ok(Self {
            _instance: instance,
            _adapter: adapter,
            device,
            queue,
            surface,
            config,
            needs_reconfig: true,
            source,
            texture,
            bind_group,
            pipeline,
        })
    }

    pub fn resize(&mut self, size: Size) {
        self.config.width = size.width;
        self.config.height = size.height;
        self.needs_reconfig = true;
    }

    fn acquire(&mut self) -> Option<wgpu::SurfaceTexture> {
        let surface = &mut self.surface;

        match surface.get_current_texture() {
            Ok(frame) => Some(frame),
            // If we timed out, just try again
            Err(wgpu::SurfaceError::Timeout) => surface.get_current_texture().ok(),
            Err(
                wgpu::SurfaceError::Outdated
                | wgpu::SurfaceError::Lost
                | wgpu::SurfaceError::OutOfMemory,
            ) => {
                surface.configure(&self.device, &self.config);
                surface.get_current_texture().ok()
            }
        }
    }

    pub fn render(&mut self, framebuffer: &Framebuffer, letterbox: Rect, background: u32) {
        if self.config.width == 0 || self.config.height == 0 {
            return;
        };
        if self.needs_reconfig {
            self.surface.configure(&self.device, &self.config);
            self.needs_reconfig = false;
        }
        let Some(tex) = self.acquire() else {
            warn!("Dropping frame, surface texture unavailable");
            return;
        };

        self.upload(framebuffer);

        let mut cmd = self.device.create_command_encoder(&Default::default());
        {
            let view = tex.texture.create_view(&TextureViewDescriptor::default());
            let mut pass = cmd.begin_render_pass(&RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(to_color(background)),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let Rect {
                x,
                y,
                width,
                height,
            } = clip(letterbox, self.config.width, self.config.height);
            if width != 0 && height != 0 {
                pass.set_viewport(
                    x as f32,
                    y as f32,
                    width as f32,
                    height as f32,
                    0.0,
                    1.0,
                );
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.draw(0..6, 0..1);
            }
        }

        self.queue.submit(Some(cmd.finish()));
        tex.present();
    }

    fn upload(&self, framebuffer: &Framebuffer) {
        self.queue.write_texture(
            self.texture.as_image_copy(),
            framebuffer.as_bytes(),
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.source.width * 4),
                rows_per_image: None,
            },
            extent(self.source),
        );
    }
}

// The surface can lag a resize by a frame; the viewport must stay inside it.
fn clip(rect: Rect, width: u32, height: u32) -> Rect {
    let x = rect.x.min(width);
    let y = rect.y.min(height);
    Rect::new(
        x,
        y,
        rect.width.min(width - x),
        rect.height.min(height - y),
    )
}

fn to_color(color: u32) -> Color {
    let channel = |n| get_channel(color, n) as f64 / 255.0;
    Color {
        r: channel(2),
        g: channel(1),
        b: channel(0),
        a: channel(3),
    }
}

fn extent(size: Size) -> Extent3d {
    Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    }
}

fn create_frame_texture(device: &Device, source: Size) -> Texture {
    // Little-endian 0xAARRGGBB is laid out as B, G, R, A in memory.
    device.create_texture(&TextureDescriptor {
        label: Some("framebuffer"),
        size: extent(source),
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Bgra8Unorm,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn create_bind_group_layout(device: &Device) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: None,
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    sample_type: TextureSampleType::Float { filterable: false },
                    view_dimension: TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::NonFiltering),
                count: None,
            },
        ],
    })
}

fn create_bind_group(device: &Device, layout: &BindGroupLayout, texture: &Texture) -> BindGroup {
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: None,
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });
    let view = texture.create_view(&Default::default());

    device.create_bind_group(&BindGroupDescriptor {
        label: None,
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&sampler),
            },
        ],
    })
}

fn create_render_pipeline(
    device: &Device,
    config: &SurfaceConfiguration,
    layout: &BindGroupLayout,
) -> RenderPipeline {
    let src = include_wgsl!("shader.wgsl");
    let module = device.create_shader_module(src);

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: None,
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: None,
        layout: Some(&pipeline_layout),
        vertex: VertexState {
            module: &module,
            entry_point: "vs_main",
            buffers: &[],
        },
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Cw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(FragmentState {
            module: &module,
            entry_point: "fs_main",
            targets: &[Some(ColorTargetState {
                format: config.format,
                blend: None,
                write_mask: ColorWrites::ALL,
            })],
        }),
        multiview: None,
    })
}
