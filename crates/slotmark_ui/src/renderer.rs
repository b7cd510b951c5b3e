use std::collections::HashMap;
use std::sync::Arc;

use winit::window::Window;

use crate::color_pipeline::ColorPipeline;
use crate::context::GpuContext;
use crate::error::Result;
use crate::image::ImageHandle;
use crate::layout::{Point, Rectangle};
use crate::texture::Texture;
use crate::texture_pipeline::TexturePipeline;

/// RGBA color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Deferred drawing operations, flushed front-to-back on `render`
#[derive(Debug, Clone)]
enum DrawCommand {
    Image {
        handle: ImageHandle,
        rect: Rectangle,
    },
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        thickness: f32,
        color: Color,
    },
}

/// Owns the GPU context and pipelines and turns queued draw commands
/// into render passes.
pub struct Renderer {
    context: GpuContext,
    color_pipeline: ColorPipeline,
    texture_pipeline: TexturePipeline,
    draw_commands: Vec<DrawCommand>,
    texture_cache: HashMap<usize, (Texture, wgpu::BindGroup)>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let context = GpuContext::new(window).await?;
        let color_pipeline = ColorPipeline::new(&context.device, context.surface_config.format);
        let texture_pipeline =
            TexturePipeline::new(&context.device, context.surface_config.format);

        Ok(Self {
            context,
            color_pipeline,
            texture_pipeline,
            draw_commands: Vec::new(),
            texture_cache: HashMap::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.context.width(), self.context.height())
    }

    /// Queue an image to be drawn stretched over `rect`.
    pub fn draw_image(&mut self, handle: &ImageHandle, rect: Rectangle) {
        self.draw_commands.push(DrawCommand::Image {
            handle: handle.clone(),
            rect,
        });
    }

    /// Queue a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.draw_commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Queue a line segment of the given thickness.
    pub fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.draw_commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    /// Flush queued commands to the surface. Surface loss is handled by
    /// reconfiguring and skipping the frame.
    pub fn render(&mut self) {
        let commands = std::mem::take(&mut self.draw_commands);
        let width = self.context.width() as f32;
        let height = self.context.height() as f32;

        // Upload textures for any image the cache has not seen yet
        for command in &commands {
            if let DrawCommand::Image { handle, .. } = command {
                let key = handle.data().as_ptr() as usize;
                if !self.texture_cache.contains_key(&key) {
                    match Texture::from_rgba8(
                        &self.context,
                        handle.data(),
                        handle.width(),
                        handle.height(),
                    ) {
                        Ok(texture) => {
                            let bind_group = self
                                .texture_pipeline
                                .create_texture_bind_group(&self.context.device, &texture);
                            self.texture_cache.insert(key, (texture, bind_group));
                        }
                        Err(e) => {
                            log::error!("Failed to upload image texture: {e}");
                        }
                    }
                }
            }
        }

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = (self.context.width(), self.context.height());
                self.context.resize(w, h);
                return;
            }
            Err(e) => {
                log::error!("Failed to acquire surface texture: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build all vertex buffers before the passes borrow the encoder
        let mut image_quads = Vec::new();
        let mut color_quads = Vec::new();
        for command in &commands {
            match command {
                DrawCommand::Image { handle, rect } => {
                    let key = handle.data().as_ptr() as usize;
                    if self.texture_cache.contains_key(&key) {
                        image_quads.push((
                            key,
                            TexturePipeline::create_quad_vertices(
                                &self.context.device,
                                *rect,
                                width,
                                height,
                            ),
                        ));
                    }
                }
                DrawCommand::FillRect { rect, color } => {
                    color_quads.push(ColorPipeline::create_rect_vertices(
                        &self.context.device,
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        color.to_array(),
                        width,
                        height,
                    ));
                }
                DrawCommand::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => {
                    if let Some(buffers) = ColorPipeline::create_line_vertices(
                        &self.context.device,
                        *from,
                        *to,
                        color.to_array(),
                        *thickness,
                        width,
                        height,
                    ) {
                        color_quads.push(buffers);
                    }
                }
            }
        }

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        for (key, (vertex_buffer, index_buffer, index_count)) in &image_quads {
            let Some((_, bind_group)) = self.texture_cache.get(key) else {
                continue;
            };
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Image Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.texture_pipeline.render_pipeline);
            pass.set_bind_group(0, bind_group, &[]);
            pass.set_vertex_buffer(0, vertex_buffer.slice(..));
            pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..*index_count, 0, 0..1);
        }

        if !color_quads.is_empty() {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.color_pipeline.render_pipeline);
            for (vertex_buffer, index_buffer, index_count) in &color_quads {
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..*index_count, 0, 0..1);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
