// File: crates/gascost/src/preview.rs
// Summary: Blocking preview window (winit + softbuffer RGBA blit); a logged no-op without the `preview` feature.

use anyhow::Result;
use gascost_chart::{Chart, RenderOptions};

#[cfg(not(feature = "preview"))]
pub fn show(_chart: &Chart, _opts: &RenderOptions) -> Result<()> {
    tracing::warn!("built without the `preview` feature; skipping the chart window");
    Ok(())
}

/// Open a window with the rendered chart and block until it is closed.
#[cfg(feature = "preview")]
pub fn show(chart: &Chart, opts: &RenderOptions) -> Result<()> {
    use std::num::NonZeroU32;
    use winit::event::{Event, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::platform::run_return::EventLoopExtRunReturn;
    use winit::window::WindowBuilder;

    let (rgba, width, height, _stride) = chart.render_to_rgba8(opts)?;
    // softbuffer expects 0RGB in native-endian u32
    let frame: Vec<u32> = rgba
        .chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect();

    let mut event_loop = EventLoop::new();
    let title = if chart.title.is_empty() { "gascost" } else { chart.title.as_str() };
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    tracing::info!(width, height, "preview open; close the window to continue");
    let mut failure: Option<anyhow::Error> = None;
    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *cf = ControlFlow::Exit;
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = blit(&mut surface, &window, &frame, width, height) {
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    fn blit(
        surface: &mut softbuffer::Surface,
        window: &winit::window::Window,
        frame: &[u32],
        width: u32,
        height: u32,
    ) -> Result<()> {
        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
        let mut buffer = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
        buffer.fill(0x00ff_ffff);
        let (bw, bh) = (size.width as usize, size.height as usize);
        let (fw, fh) = (width as usize, height as usize);
        for y in 0..bh.min(fh) {
            let n = bw.min(fw);
            buffer[y * bw..y * bw + n].copy_from_slice(&frame[y * fw..y * fw + n]);
        }
        buffer.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
        Ok(())
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
