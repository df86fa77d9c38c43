//! Scripted input and recorded drawing, for driving the run loops in tests

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use glam::{IVec2, Vec2};

use super::{FrameClock, InputSource, Key, Surface, clock::frame_duration};
use crate::error::Result;
use crate::renderer::Color;

/// Fixed text metrics (logical units per glyph)
pub const GLYPH_SIZE: IVec2 = IVec2::new(16, 32);

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { pos: IVec2, size: IVec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { pos: IVec2, text: String, color: Color },
}

/// Platform that plays back a key script and keeps every presented frame
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    size: IVec2,
    script: VecDeque<Vec<Key>>,
    held: HashSet<Key>,
    close_on_poll: Option<usize>,
    closed: bool,
    polls: usize,
    pending: Vec<DrawCommand>,
    /// Presented frames, oldest first
    pub frames: Vec<Vec<DrawCommand>>,
}

impl HeadlessPlatform {
    pub fn new(size: IVec2) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Keys held on successive polls; nothing is held once the script runs out
    pub fn with_script(mut self, script: Vec<Vec<Key>>) -> Self {
        self.script = script.into();
        self
    }

    /// Request close on the given poll (1-based)
    pub fn close_on_poll(mut self, poll: usize) -> Self {
        self.close_on_poll = Some(poll);
        self
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// All text drawn in a frame
    pub fn texts(frame: &[DrawCommand]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl InputSource for HeadlessPlatform {
    fn poll(&mut self) -> Result<()> {
        self.polls += 1;
        if self.close_on_poll.is_some_and(|poll| self.polls >= poll) {
            self.closed = true;
        }
        self.held = self.script.pop_front().unwrap_or_default().into_iter().collect();
        Ok(())
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn close_requested(&self) -> bool {
        self.closed
    }
}

impl Surface for HeadlessPlatform {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, pos: IVec2, size: IVec2, color: Color) -> Result<()> {
        self.pending.push(DrawCommand::Rect { pos, size, color });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<()> {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn text_extent(&self, text: &str) -> IVec2 {
        IVec2::new(GLYPH_SIZE.x * text.chars().count() as i32, GLYPH_SIZE.y)
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, color: Color) -> Result<()> {
        self.pending.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

/// Clock that never sleeps; reports the nominal frame time and logs every call
#[derive(Debug, Default)]
pub struct ManualClock {
    /// Rate passed to each `tick`
    pub ticks: Vec<u32>,
    /// Delays passed to `wait`
    pub waits: Vec<Duration>,
}

impl FrameClock for ManualClock {
    fn tick(&mut self, rate: u32) -> Duration {
        self.ticks.push(rate);
        frame_duration(rate)
    }

    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}
