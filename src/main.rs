use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    window::WindowBuilder,
};

use helix_core::HelixParameters;
use helix_view::background::Viewport;
use helix_view::constants::APP_TITLE;
use helix_view::frame::FrameContext;
use helix_view::input::{command_for_key, Command, PointerTilt};
use helix_view::render::GpuState;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let params = HelixParameters::default();
    let mut frame_ctx = FrameContext::new(params, rand::random())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(APP_TITLE)
        .with_inner_size(LogicalSize::new(540.0, 960.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut tilt = PointerTilt::default();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                tilt.set_cursor(
                    position.x as f32,
                    position.y as f32,
                    state.width,
                    state.height,
                );
            }
            WindowEvent::CursorLeft { .. } => tilt.clear(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match command_for_key(&event.logical_key) {
                    Some(Command::ToggleMetrics) => frame_ctx.toggle_metrics(),
                    Some(Command::Quit) => elwt.exit(),
                    None => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;

            let viewport = Viewport::new(state.width, state.height);
            let frame_out = frame_ctx.step(dt, viewport, &mut tilt);

            if let Some(title) = &frame_out.title {
                log::debug!("{title}");
                state.window.set_title(title);
            }

            match state.render(&frame_out) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("render error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
