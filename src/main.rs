//! SDL2 frontend: window, streaming texture and event pump wired to
//! the tiled renderer.
//!
//! Workers share the in-memory framebuffer behind the render context's
//! lock; each present tick uploads its bytes to the texture and flips
//! the canvas.  The SDL canvas itself never crosses a thread boundary.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::EventPump;

use mandelbrot::config::{HEIGHT, MAX_ITERATIONS, NUM_THREADS, POLL_INTERVAL, WIDTH, WINDOW_TITLE};
use mandelbrot::{EventSource, FrameBuffer, InitError, RenderContext, TiledRenderer};

struct SdlEvents(EventPump);

impl EventSource for SdlEvents {
    fn poll_quit_requested(&mut self) -> bool {
        let mut quit = false;
        for event in self.0.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                _ => {}
            }
        }
        quit
    }
}

fn run() -> Result<(), InitError> {
    let sdl_context = sdl2::init().map_err(InitError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(InitError::Sdl)?;
    let window = video_subsystem
        .window(WINDOW_TITLE, WIDTH, HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| InitError::Window(e.to_string()))?;
    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| InitError::Renderer(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, WIDTH, HEIGHT)
        .map_err(|e| InitError::Renderer(e.to_string()))?;
    let mut events = SdlEvents(sdl_context.event_pump().map_err(InitError::Sdl)?);

    let renderer = TiledRenderer::new(WIDTH, HEIGHT, MAX_ITERATIONS, NUM_THREADS, POLL_INTERVAL);
    let ctx = RenderContext::new(FrameBuffer::new(WIDTH, HEIGHT));

    renderer.render(&ctx, &mut events, |frame| {
        texture.update(None, frame.as_bytes(), frame.pitch()).unwrap();
        canvas.copy(&texture, None, None).unwrap();
        canvas.present();
    });

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
