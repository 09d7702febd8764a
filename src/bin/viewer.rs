use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes};

use tilegrid::{CanvasSurface, GridParameters, Palette, draw_grid, load_parameters};

/// Transparent (cleared) pixels are shown against this colour.
const MATTE: [u8; 3] = [255, 255, 255];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();
    let _binary = args.next();
    let source = match args.next() {
        Some(source) => source,
        None => {
            eprintln!("usage: viewer <grid.yaml | share-string>");
            return Ok(());
        }
    };

    let params = if Path::new(&source).is_file() {
        load_parameters(&source)?
    } else {
        tilegrid::share::apply_query_string(&GridParameters::default(), &source)?
    };
    let (surface, layout) = draw_grid(&params, &Palette::default())?;
    log::info!(
        "previewing {} grid, canvas {}x{}",
        params.grid_type,
        layout.canvas_width(),
        layout.canvas_height()
    );

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(surface);
    event_loop.run_app(&mut app)?;

    Ok(())
}

struct ViewerApp {
    surface: CanvasSurface,
    base_frame: Vec<u8>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl ViewerApp {
    fn new(surface: CanvasSurface) -> Self {
        Self {
            surface,
            base_frame: Vec::new(),
            window: None,
            pixels: None,
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("Tileset Grid Preview")
                .with_inner_size(PhysicalSize::new(self.surface.width(), self.surface.height())),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        // Pixels scales the buffer to the window, so the buffer stays at canvas size.
        let window_size = window.inner_size();
        let buffer_width = self.surface.width().max(1);
        let buffer_height = self.surface.height().max(1);
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let mut pixels = match Pixels::new(buffer_width, buffer_height, surface_texture) {
            Ok(pixels) => pixels,
            Err(err) => {
                log::error!("failed to create pixels surface: {err}");
                event_loop.exit();
                return;
            }
        };

        self.base_frame = build_frame(&self.surface, pixels.frame_mut().len());
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    let _ = pixels.resize_surface(size.width.max(1), size.height.max(1));
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(pixels) = self.pixels.as_mut() {
                    let frame = pixels.frame_mut();
                    if frame.len() != self.base_frame.len() {
                        self.base_frame = build_frame(&self.surface, frame.len());
                    }
                    frame.copy_from_slice(&self.base_frame);
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Opaque RGBA frame of the surface, with alpha composited over [`MATTE`].
fn build_frame(surface: &CanvasSurface, frame_len: usize) -> Vec<u8> {
    let mut frame = vec![0u8; frame_len];

    for (idx, px) in surface.as_raw().chunks_exact(4).enumerate() {
        let offset = idx * 4;
        if offset + 3 >= frame_len {
            break;
        }
        let alpha = px[3] as u32;
        for channel in 0..3 {
            let fg = px[channel] as u32 * alpha;
            let bg = MATTE[channel] as u32 * (255 - alpha);
            frame[offset + channel] = ((fg + bg) / 255) as u8;
        }
        frame[offset + 3] = 255;
    }

    frame
}
