use super::init::*;
use super::render::render_aurora_pass;
use super::uniforms::Uniforms;
use crate::renderer::{RenderError, Renderer};
use crate::shading::ShadingParameters;

/// GPU resources, dropped together on release
struct GpuState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    #[allow(dead_code)]
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

/// Renders the aurora shader into a canvas through wgpu
pub struct GpuRenderer {
    gpu: Option<GpuState>,
}

impl GpuRenderer {
    /// Acquire a GPU context for `canvas`
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let (instance, surface, width, height) = Self::create_surface(canvas)?;
        let (device, queue, adapter) = create_device(&instance, &surface).await?;
        let (surface_config, surface_format) =
            configure_surface(&surface, &adapter, &device, width, height)?;
        let (uniform_buffer, bind_group_layout, bind_group) =
            create_uniform_resources(&device, width, height);
        let pipeline = create_pipeline(&device, &bind_group_layout, surface_format);

        Ok(Self {
            gpu: Some(GpuState {
                device,
                queue,
                surface,
                surface_config,
                bind_group_layout,
                bind_group,
                uniform_buffer,
                pipeline,
            }),
        })
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), String> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {}", e))?;

        Ok((instance, surface, width, height))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), String> {
        Err("GpuRenderer only supports WASM targets".to_string())
    }
}

impl GpuState {
    /// Get surface texture with error handling
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Err(RenderError::Timeout),
            #[allow(unreachable_patterns)]
            Err(e) => Err(RenderError::Backend(e.to_string())),
        }
    }
}

impl Renderer for GpuRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        gpu.surface_config.width = width;
        gpu.surface_config.height = height;
        gpu.surface.configure(&gpu.device, &gpu.surface_config);
    }

    fn draw(&mut self, params: &ShadingParameters) -> Result<(), RenderError> {
        let gpu = self
            .gpu
            .as_mut()
            .ok_or_else(|| RenderError::Backend("renderer released".to_string()))?;

        let uniforms = Uniforms::from_params(params);
        gpu.queue
            .write_buffer(&gpu.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let output = gpu.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Aurora Encoder"),
            });
        render_aurora_pass(&mut encoder, &gpu.pipeline, &gpu.bind_group, &view);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn release(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.uniform_buffer.destroy();
            gpu.device.destroy();
        }
    }
}
