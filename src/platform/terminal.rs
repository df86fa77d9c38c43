//! Terminal backend (ratatui on crossterm)
//!
//! The logical screen is scaled onto the terminal's character grid. Shapes
//! are painted as cell backgrounds into a `Canvas` buffer, which is rendered
//! as a widget on `present` so ratatui only flushes the cells that changed.

use std::collections::HashSet;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use glam::{IVec2, Vec2};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::widgets::Widget;

use super::{InputSource, Key, Surface};
use crate::error::Result;
use crate::renderer::Color;

type Tui = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Maps logical coordinates onto a `cols` x `rows` grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grid {
    logical: IVec2,
    cols: i32,
    rows: i32,
}

impl Grid {
    fn new(logical: IVec2, cols: u16, rows: u16) -> Self {
        Self {
            logical: logical.max(IVec2::ONE),
            cols: i32::from(cols).max(1),
            rows: i32::from(rows).max(1),
        }
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.cols as u16, self.rows as u16)
    }

    /// Cell containing a logical point (may be off-grid)
    fn cell_of(&self, p: IVec2) -> IVec2 {
        IVec2::new(
            scale_floor(p.x, self.cols, self.logical.x),
            scale_floor(p.y, self.rows, self.logical.y),
        )
    }

    /// Cells covered by a logical rectangle, as a clipped half-open range
    fn cover(&self, pos: IVec2, size: IVec2) -> (IVec2, IVec2) {
        let end = pos.saturating_add(size);
        let min = self.cell_of(pos).max(IVec2::ZERO);
        let max = IVec2::new(
            scale_ceil(end.x, self.cols, self.logical.x),
            scale_ceil(end.y, self.rows, self.logical.y),
        )
        .min(IVec2::new(self.cols, self.rows));
        (min, max)
    }

    /// Logical centre of a cell
    fn cell_center(&self, cell: IVec2) -> Vec2 {
        let cell_size = self.logical.as_vec2() / Vec2::new(self.cols as f32, self.rows as f32);
        (cell.as_vec2() + Vec2::splat(0.5)) * cell_size
    }

    /// Logical size of one cell, at least one unit
    fn cell_size(&self) -> IVec2 {
        IVec2::new(self.logical.x / self.cols, self.logical.y / self.rows).max(IVec2::ONE)
    }

    fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }
}

fn scale_floor(v: i32, cells: i32, logical: i32) -> i32 {
    (i64::from(v) * i64::from(cells)).div_euclid(i64::from(logical)) as i32
}

fn scale_ceil(v: i32, cells: i32, logical: i32) -> i32 {
    let n = i64::from(v) * i64::from(cells);
    let d = i64::from(logical);
    (n.div_euclid(d) + i64::from(n.rem_euclid(d) != 0)) as i32
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// Off-screen cell buffer in terminal cells, painted in logical coordinates
#[derive(Debug, Clone)]
struct Canvas {
    grid: Grid,
    buffer: Buffer,
}

impl Canvas {
    fn new(logical: IVec2, cols: u16, rows: u16) -> Self {
        let grid = Grid::new(logical, cols, rows);
        Self {
            grid,
            buffer: Buffer::empty(grid.area()),
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(self.grid.logical, cols, rows);
    }

    fn paint(&mut self, cell: IVec2, f: impl FnOnce(&mut Cell)) {
        if self.grid.contains(cell) {
            f(self.buffer.get_mut(cell.x as u16, cell.y as u16));
        }
    }

    fn fill(&mut self, cell: IVec2, color: Color) {
        self.paint(cell, |c| {
            c.reset();
            c.set_bg(term_color(color));
        });
    }

    fn clear(&mut self, color: Color) {
        for cell in self.buffer.content.iter_mut() {
            cell.reset();
            cell.set_bg(term_color(color));
        }
    }

    fn fill_rect(&mut self, pos: IVec2, size: IVec2, color: Color) {
        let (min, max) = self.grid.cover(pos, size);
        for y in min.y..max.y {
            for x in min.x..max.x {
                self.fill(IVec2::new(x, y), color);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let corner = (center - Vec2::splat(radius)).floor().as_ivec2();
        let side = (radius * 2.0).ceil() as i32 + 1;
        let (min, max) = self.grid.cover(corner, IVec2::splat(side));
        for y in min.y..max.y {
            for x in min.x..max.x {
                let cell = IVec2::new(x, y);
                if self.grid.cell_center(cell).distance(center) <= radius {
                    self.fill(cell, color);
                }
            }
        }
    }

    fn text_extent(&self, text: &str) -> IVec2 {
        let cell = self.grid.cell_size();
        IVec2::new(cell.x * text.chars().count() as i32, cell.y)
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, color: Color) {
        let start = self.grid.cell_of(pos);
        for (i, ch) in text.chars().enumerate() {
            self.paint(start + IVec2::new(i as i32, 0), |cell| {
                cell.set_char(ch).set_fg(term_color(color));
            });
        }
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.buffer.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                *buf.get_mut(x, y) = self.buffer.get(x, y).clone();
            }
        }
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Key::A),
            'd' => Some(Key::D),
            'w' => Some(Key::W),
            's' => Some(Key::S),
            _ => None,
        },
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Enter the alternate screen and build the ratatui terminal on top of it
fn open_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut tui = Tui::new(CrosstermBackend::new(stdout))?;
    tui.hide_cursor()?;
    tui.clear()?;
    Ok(tui)
}

/// Raw-mode alternate-screen terminal acting as both input source and surface.
/// The terminal is restored when this is dropped.
pub struct Terminal {
    tui: Tui,
    canvas: Canvas,
    held: HashSet<Key>,
    /// Key release events are reported, so `held` tracks true key state
    enhanced: bool,
    closed: bool,
}

impl Terminal {
    /// Switch the terminal into game mode, mapping `logical` onto the full window
    pub fn enter(logical: IVec2) -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        enable_raw_mode()?;
        let tui = match open_screen() {
            Ok(tui) => tui,
            Err(err) => {
                let _ = io::stdout().execute(LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err);
            }
        };
        let mut term = Self {
            tui,
            canvas: Canvas::new(logical, cols, rows),
            held: HashSet::new(),
            enhanced: false,
            closed: false,
        };

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            term.tui
                .backend_mut()
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))?;
            term.enhanced = true;
        }
        log::info!(
            "Terminal {}x{} cells (key release events: {})",
            cols,
            rows,
            term.enhanced
        );
        Ok(term)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press && is_quit(&key) {
            self.closed = true;
            return;
        }
        let Some(mapped) = map_key(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(mapped);
            }
            KeyEventKind::Release => {
                self.held.remove(&mapped);
            }
        }
    }
}

impl InputSource for Terminal {
    fn poll(&mut self) -> Result<()> {
        // Without release events a key counts as held for the tick its press/repeat arrived in
        if !self.enhanced {
            self.held.clear();
        }
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(cols, rows) => {
                    self.canvas.resize(cols, rows);
                    log::debug!("Terminal resized to {}x{}", cols, rows);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn close_requested(&self) -> bool {
        self.closed
    }
}

impl Surface for Terminal {
    fn size(&self) -> IVec2 {
        self.canvas.grid.logical
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.clear(color);
        Ok(())
    }

    fn fill_rect(&mut self, pos: IVec2, size: IVec2, color: Color) -> Result<()> {
        self.canvas.fill_rect(pos, size, color);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<()> {
        self.canvas.fill_circle(center, radius, color);
        Ok(())
    }

    fn text_extent(&self, text: &str) -> IVec2 {
        self.canvas.text_extent(text)
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, color: Color) -> Result<()> {
        self.canvas.draw_text(pos, text, color);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let canvas = &self.canvas;
        self.tui.draw(|frame| {
            let area = frame.size();
            frame.render_widget(canvas, area);
        })?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = self.tui.backend_mut().execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.tui.show_cursor();
        let _ = self.tui.backend_mut().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        // 16x30 logical units per cell
        Grid::new(IVec2::new(1280, 720), 80, 24)
    }

    fn canvas() -> Canvas {
        Canvas::new(IVec2::new(1280, 720), 80, 24)
    }

    #[test]
    fn test_cell_mapping() {
        let g = grid();
        assert_eq!(g.cell_of(IVec2::new(0, 0)), IVec2::new(0, 0));
        assert_eq!(g.cell_of(IVec2::new(610, 660)), IVec2::new(38, 22));
        assert_eq!(g.cell_of(IVec2::new(-1, -1)), IVec2::new(-1, -1));
        assert_eq!(g.cell_size(), IVec2::new(16, 30));
    }

    #[test]
    fn test_cover_rounds_outward_and_clips() {
        let g = grid();
        // Player square: x 610..670, y 660..720
        let (min, max) = g.cover(IVec2::new(610, 660), IVec2::splat(60));
        assert_eq!(min, IVec2::new(38, 22));
        assert_eq!(max, IVec2::new(42, 24));

        // Partly off the bottom right
        let (min, max) = g.cover(IVec2::new(1250, 700), IVec2::splat(60));
        assert_eq!(min, IVec2::new(78, 23));
        assert_eq!(max, IVec2::new(80, 24));

        // Entirely below the screen
        let (min, max) = g.cover(IVec2::new(0, 800), IVec2::splat(60));
        assert!(min.y >= max.y);
    }

    #[test]
    fn test_contains_bounds() {
        let g = grid();
        assert!(g.contains(IVec2::new(0, 0)));
        assert!(g.contains(IVec2::new(79, 23)));
        assert!(!g.contains(IVec2::new(80, 0)));
        assert!(!g.contains(IVec2::new(0, -1)));
    }

    #[test]
    fn test_canvas_paints_rect_cells() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.fill_rect(IVec2::new(610, 660), IVec2::splat(60), Color::WHITE);

        let white = TermColor::Rgb(255, 255, 255);
        let black = TermColor::Rgb(0, 0, 0);
        assert_eq!(canvas.buffer.get(38, 22).bg, white);
        assert_eq!(canvas.buffer.get(41, 23).bg, white);
        assert_eq!(canvas.buffer.get(37, 22).bg, black);
        assert_eq!(canvas.buffer.get(42, 23).bg, black);
        assert_eq!(canvas.buffer.get(38, 21).bg, black);
    }

    #[test]
    fn test_canvas_text_keeps_background() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.draw_text(IVec2::new(10, 10), "Score: 3", Color::WHITE);

        assert_eq!(canvas.buffer.get(0, 0).symbol(), "S");
        assert_eq!(canvas.buffer.get(7, 0).symbol(), "3");
        assert_eq!(canvas.buffer.get(0, 0).fg, TermColor::Rgb(255, 255, 255));
        assert_eq!(canvas.buffer.get(0, 0).bg, TermColor::Rgb(0, 0, 0));
        assert_eq!(canvas.text_extent("Score: 3"), IVec2::new(128, 30));
    }

    #[test]
    fn test_canvas_clips_offscreen_shapes() {
        let mut canvas = canvas();
        canvas.clear(Color::BLACK);
        canvas.fill_rect(IVec2::new(0, 800), IVec2::splat(60), Color::RED);
        canvas.fill_rect(IVec2::new(-100, -100), IVec2::splat(60), Color::RED);
        canvas.draw_text(IVec2::new(1270, 0), "overflow", Color::WHITE);
        let red = TermColor::Rgb(255, 0, 0);
        assert!(canvas.buffer.content.iter().all(|cell| cell.bg != red));
        assert_eq!(canvas.buffer.get(79, 0).symbol(), "o");
    }

    #[test]
    fn test_canvas_renders_as_widget() {
        let mut canvas = canvas();
        canvas.clear(Color::RED);
        let mut target = Buffer::empty(Rect::new(0, 0, 80, 24));
        (&canvas).render(target.area, &mut target);
        assert_eq!(target, canvas.buffer);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Char('a')), Some(Key::A));
        assert_eq!(map_key(KeyCode::Char('D')), Some(Key::D));
        assert_eq!(map_key(KeyCode::Left), Some(Key::Left));
        assert_eq!(map_key(KeyCode::Char('x')), None);

        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
