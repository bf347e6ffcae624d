//! Line-drawing peripheral at 0x0500-0x0502.
//!
//! The program writes a vertex pair into 0x0500/0x0501 and a command into
//! 0x0502. Command `1` latches the pair into an eight-byte vertex buffer,
//! command `2` uploads the whole buffer to the renderer as normalised
//! floats. The command cell is cleared after every tick.
//!
//! Windowing lives behind the [`Renderer`] trait so the device can run
//! headless.

use log::{debug, trace};

use crate::bus::Peripheral;
use crate::MemoryBus;

/// Base address of the drawing window.
pub const DRAWING_BASE: u16 = 0x0500;

/// Size of the drawing window in bytes.
pub const DRAWING_SIZE: u16 = 3;

const VERTEX_X: u16 = DRAWING_BASE;
const VERTEX_Y: u16 = DRAWING_BASE + 1;
const COMMAND: u16 = DRAWING_BASE + 2;

const COMMAND_LATCH: u8 = 0x01;
const COMMAND_UPLOAD: u8 = 0x02;

/// Vertex buffer contents before the program touches it.
pub const INITIAL_VERTICES: [i8; 8] = [-0x5F, -0x5F, -0x5F, 0x7F, 0x7F, 0x5F, 0x5F, -0x5F];

/// Output surface for the drawing device.
pub trait Renderer {
    /// Replaces the displayed quad. Coordinates are in -1.0..1.0.
    fn update(&mut self, vertices: [f32; 8]);

    /// Draws one frame.
    fn render(&mut self);

    /// True once the surface wants the emulator to stop.
    fn should_close(&self) -> bool {
        false
    }
}

/// Renderer that only remembers what it was given.
#[derive(Debug, Default, Clone)]
pub struct HeadlessRenderer {
    /// Last uploaded quad, if any
    pub vertices: Option<[f32; 8]>,
    /// Number of frames rendered
    pub frames: u64,
    /// Reported through `should_close`
    pub close_requested: bool,
}

impl Renderer for HeadlessRenderer {
    fn update(&mut self, vertices: [f32; 8]) {
        self.vertices = Some(vertices);
    }

    fn render(&mut self) {
        self.frames += 1;
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }
}

/// Drawing peripheral driving a [`Renderer`].
pub struct DrawingDevice<R: Renderer = HeadlessRenderer> {
    renderer: R,
    vertices: [i8; 8],
    cursor: usize,
    close_requested: bool,
}

impl<R: Renderer> DrawingDevice<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            vertices: INITIAL_VERTICES,
            cursor: 0,
            close_requested: false,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current vertex buffer.
    pub fn vertices(&self) -> [i8; 8] {
        self.vertices
    }

    /// Index the next latched pair will be written to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn run_command(&mut self, bus: &mut dyn MemoryBus) {
        match bus.read(COMMAND) {
            COMMAND_LATCH => {
                let x = bus.read(VERTEX_X) as i8;
                let y = bus.read(VERTEX_Y) as i8;
                self.vertices[self.cursor] = x;
                self.vertices[self.cursor + 1] = y;
                trace!("latched vertex ({x}, {y}) at {}", self.cursor);
                self.cursor = (self.cursor + 2) % self.vertices.len();
            }
            COMMAND_UPLOAD => {
                let normalised = self.vertices.map(|v| v as f32 / 128.0);
                debug!("uploading vertex buffer {:?}", self.vertices);
                self.renderer.update(normalised);
                self.cursor = 0;
            }
            _ => {}
        }
        bus.write(COMMAND, 0x00);
    }
}

impl<R: Renderer> Peripheral for DrawingDevice<R> {
    fn tick(&mut self, bus: &mut dyn MemoryBus) {
        if self.renderer.should_close() && !self.close_requested {
            debug!("renderer requested termination");
            self.close_requested = true;
        }
        self.run_command(bus);
        self.renderer.render();
    }

    fn wants_termination(&self) -> bool {
        self.close_requested
    }

    fn reset(&mut self) {
        self.vertices = [0; 8];
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn device() -> (DrawingDevice, FlatMemory) {
        (DrawingDevice::new(HeadlessRenderer::default()), FlatMemory::new())
    }

    #[test]
    fn test_initial_buffer() {
        let (device, _) = device();
        assert_eq!(device.vertices(), INITIAL_VERTICES);
        assert_eq!(device.cursor(), 0);
    }

    #[test]
    fn test_latch_advances_cursor_and_clears_command() {
        let (mut device, mut mem) = device();
        mem.write(0x0500, 0x10);
        mem.write(0x0501, 0xF0);
        mem.write(0x0502, 0x01);

        device.tick(&mut mem);

        assert_eq!(device.vertices()[0], 0x10);
        assert_eq!(device.vertices()[1], -0x10);
        assert_eq!(device.cursor(), 2);
        assert_eq!(mem.read(0x0502), 0x00);
        assert_eq!(device.renderer().frames, 1);
    }

    #[test]
    fn test_cursor_wraps_after_four_pairs() {
        let (mut device, mut mem) = device();
        for _ in 0..4 {
            mem.write(0x0502, 0x01);
            device.tick(&mut mem);
        }
        assert_eq!(device.cursor(), 0);
        assert_eq!(device.vertices(), [0; 8]);
    }

    #[test]
    fn test_upload_normalises_and_resets_cursor() {
        let (mut device, mut mem) = device();
        mem.write(0x0500, 0x40);
        mem.write(0x0501, 0x80);
        mem.write(0x0502, 0x01);
        device.tick(&mut mem);

        mem.write(0x0502, 0x02);
        device.tick(&mut mem);

        let uploaded = device.renderer().vertices.unwrap();
        assert_eq!(uploaded[0], 0.5);
        assert_eq!(uploaded[1], -1.0);
        assert_eq!(uploaded[2], -0x5F as f32 / 128.0);
        assert_eq!(device.cursor(), 0);
    }

    #[test]
    fn test_unknown_command_is_ignored_but_cleared() {
        let (mut device, mut mem) = device();
        mem.write(0x0502, 0x07);

        device.tick(&mut mem);

        assert_eq!(device.vertices(), INITIAL_VERTICES);
        assert!(device.renderer().vertices.is_none());
        assert_eq!(mem.read(0x0502), 0x00);
    }

    #[test]
    fn test_close_request_is_reported() {
        let (mut device, mut mem) = device();
        assert!(!device.wants_termination());

        device.renderer_mut().close_requested = true;
        device.tick(&mut mem);

        assert!(device.wants_termination());
    }

    #[test]
    fn test_reset_zeroes_buffer() {
        let (mut device, mut mem) = device();
        mem.write(0x0502, 0x01);
        device.tick(&mut mem);

        device.reset();

        assert_eq!(device.vertices(), [0; 8]);
        assert_eq!(device.cursor(), 0);
    }
}
