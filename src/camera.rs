//! Camera collaborator interface.
//!
//! Frame acquisition and decoding live outside the core; the pipeline only
//! needs `next_frame()`. Frames are ephemeral — created and dropped every
//! tick, never part of persisted pipeline state.

/// One decoded camera frame, RGB8 row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Creates a black frame at the given resolution.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }
}

/// Trait for camera frame acquisition.
///
/// This trait allows swapping implementations (real capture device vs mock).
pub trait FrameSource: Send {
    /// Pulls the next frame. `None` means no frame is available this tick
    /// (device starting up, or a finite source exhausted).
    fn next_frame(&mut self) -> Option<Frame>;
}

/// Frame source for testing that yields a fixed number of blank frames.
pub struct ScriptedFrameSource {
    remaining: usize,
    width: u32,
    height: u32,
}

impl ScriptedFrameSource {
    /// Yields `count` blank frames at the default resolution, then `None`.
    pub fn blank_frames(count: usize) -> Self {
        Self {
            remaining: count,
            width: crate::defaults::FRAME_WIDTH,
            height: crate::defaults::FRAME_HEIGHT,
        }
    }

    /// Overrides the frame resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl FrameSource for ScriptedFrameSource {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Frame::blank(self.width, self.height))
    }
}
