//! Present pipeline for displaying a CPU-rendered frame
//!
//! The [`PixelBuffer`] is uploaded unchanged into an `R16Uint` texture each
//! frame; a full-screen triangle then decodes the RGB565 pixels in the
//! fragment shader. The texture is recreated only when the frame size changes.

use hypercube_raster::PixelBuffer;

/// Texture format holding one packed RGB565 pixel per texel
pub const FRAME_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R16Uint;

/// Vertices drawn per frame (one triangle covering the screen)
pub const FULLSCREEN_VERTEX_COUNT: u32 = 3;

/// Render pipeline that blits a [`PixelBuffer`] to the surface
pub struct PresentPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    /// Frame texture and its bind group, sized to the last uploaded buffer
    frame: Option<FrameTexture>,
}

struct FrameTexture {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

impl PresentPipeline {
    /// Create a new present pipeline targeting `surface_format`
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Present Bind Group Layout"),
            entries: &[
                // Frame texture
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Uint,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Present Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/present.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Present Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Present Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            frame: None,
        }
    }

    /// Ensure the frame texture exists and matches `width` x `height`
    pub fn ensure_frame_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.frame.as_ref().map(|f| f.size) == Some((width, height)) {
            return;
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FRAME_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Present Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            }],
        });

        log::debug!("Created {}x{} frame texture", width, height);
        self.frame = Some(FrameTexture {
            texture,
            bind_group,
            size: (width, height),
        });
    }

    /// Copy the pixel buffer into the frame texture
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, buffer: &PixelBuffer) {
        self.ensure_frame_texture(device, buffer.width(), buffer.height());
        let Some(frame) = &self.frame else {
            return;
        };

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &frame.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(buffer.as_slice()),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row(buffer)),
                rows_per_image: Some(buffer.height()),
            },
            wgpu::Extent3d {
                width: buffer.width(),
                height: buffer.height(),
                depth_or_array_layers: 1,
            },
        );
    }

    /// Draw the last uploaded frame over the whole target
    ///
    /// Does nothing but clear if no frame has been uploaded yet.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Present Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some(frame) = &self.frame {
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &frame.bind_group, &[]);
            render_pass.draw(0..FULLSCREEN_VERTEX_COUNT, 0..1);
        }
    }
}

/// Bytes between rows of `buffer` in its raw memory
pub fn bytes_per_row(buffer: &PixelBuffer) -> u32 {
    buffer.stride() * buffer.format().bytes_per_pixel() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_row_uses_stride() {
        let packed = PixelBuffer::new(600, 600);
        assert_eq!(bytes_per_row(&packed), 1200);

        let padded = PixelBuffer::with_stride(600, 10, 640);
        assert_eq!(bytes_per_row(&padded), 1280);
    }

    #[test]
    fn test_frame_format_matches_pixel_size() {
        assert_eq!(FRAME_TEXTURE_FORMAT.block_copy_size(None), Some(2));
    }

    #[test]
    fn test_upload_byte_length() {
        let buffer = PixelBuffer::new(7, 5);
        let bytes: &[u8] = bytemuck::cast_slice(buffer.as_slice());
        assert_eq!(bytes.len(), (bytes_per_row(&buffer) * buffer.height()) as usize);
    }
}
