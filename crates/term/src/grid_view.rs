//! GridView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each tile gets a block of terminal cells. The tile's glyph sits in the
//! middle and short stubs run toward every open port, so two tiles that
//! really connect meet at their shared edge while a one-sided contact
//! shows a visible gap.

use crate::core::tiles::active_ports;
use crate::core::{GameSnapshot, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Ports, TileKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Extra lines for the side panel that live outside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView {
    /// 1-based level number.
    pub level_no: u32,
    pub level_count: u32,
    pub best_score: u32,
    /// One-line status shown under the counters, e.g. a refused move.
    pub message: Option<&'static str>,
}

impl Default for HudView {
    fn default() -> Self {
        Self {
            level_no: 1,
            level_count: 1,
            best_score: 0,
            message: None,
        }
    }
}

const PLAY_BG: Rgb = Rgb::new(24, 24, 32);
const CURSOR_BG: Rgb = Rgb::new(58, 58, 96);

/// A lightweight terminal renderer for the wire grid.
pub struct GridView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 3x3 leaves room for a stub toward each of the four ports.
        Self {
            cell_w: 3,
            cell_h: 3,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(usize, usize)>,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let grid_px_w = (snap.cols as u16) * self.cell_w;
        let grid_px_h = (snap.rows as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: PLAY_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play area.
        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles.
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let Some(tile) = snap.tile(row, col) else {
                    continue;
                };
                let under_cursor = cursor == Some((row, col));
                self.draw_tile(fb, start_x, start_y, row, col, tile, under_cursor);
            }
        }

        // Side panel (level/moves/lit).
        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        // Overlay.
        if snap.completed {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "LEVEL COMPLETE");
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 1, "N NEXT  R REPLAY");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(usize, usize)>,
        hud: &HudView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        tile: TileView,
        under_cursor: bool,
    ) {
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + (row as u16) * self.cell_h;
        let mid_x = self.cell_w / 2;
        let mid_y = self.cell_h / 2;

        let style = tile_style(tile, under_cursor);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        // Stubs toward every open port. Drawn from this tile's ports only,
        // so a one-sided contact leaves a gap at the edge.
        let ports = active_ports(tile.kind, tile.rotation);
        if ports.contains(Direction::West) {
            for dx in 0..mid_x {
                fb.put_char(px + dx, py + mid_y, '─', style);
            }
        }
        if ports.contains(Direction::East) {
            for dx in (mid_x + 1)..self.cell_w {
                fb.put_char(px + dx, py + mid_y, '─', style);
            }
        }
        if ports.contains(Direction::North) {
            for dy in 0..mid_y {
                fb.put_char(px + mid_x, py + dy, '│', style);
            }
        }
        if ports.contains(Direction::South) {
            for dy in (mid_y + 1)..self.cell_h {
                fb.put_char(px + mid_x, py + dy, '│', style);
            }
        }

        fb.put_char(px + mid_x, py + mid_y, tile_glyph(tile), style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let help = CellStyle { dim: true, ..value };
        let alert = CellStyle {
            fg: Rgb::new(230, 120, 90),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        let nx = fb.put_u32(panel_x, y, hud.level_no, value);
        fb.put_char(nx, y, '/', value);
        fb.put_u32(nx + 1, y, hud.level_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LIT", label);
        y = y.saturating_add(1);
        let nx = fb.put_u32(panel_x, y, snap.powered as u32, value);
        fb.put_char(nx, y, '/', value);
        fb.put_u32(nx + 1, y, snap.live as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.best_score, value);
        y = y.saturating_add(2);

        if let Some(message) = hud.message {
            fb.put_str(panel_x, y, message, alert);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ARROWS MOVE", help);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "SPACE TURN", help);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "N NEXT P PREV", help);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R RESTART Q QUIT", help);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn tile_style(tile: TileView, under_cursor: bool) -> CellStyle {
    let bg = if under_cursor { CURSOR_BG } else { PLAY_BG };
    match tile.kind {
        TileKind::Empty => CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg,
            bold: false,
            dim: true,
        },
        _ if tile.powered => CellStyle {
            fg: Rgb::new(255, 196, 64),
            bg,
            bold: true,
            dim: false,
        },
        _ => CellStyle {
            fg: Rgb::new(110, 110, 120),
            bg,
            bold: false,
            dim: true,
        },
    }
}

fn tile_glyph(tile: TileView) -> char {
    match tile.kind {
        TileKind::Empty => '·',
        TileKind::Source => '◆',
        TileKind::Bulb => {
            if tile.powered {
                '●'
            } else {
                '○'
            }
        }
        _ => wire_glyph(active_ports(tile.kind, tile.rotation)),
    }
}

/// Box-drawing glyph for a wire's open ports.
fn wire_glyph(ports: Ports) -> char {
    match ports.bits() {
        0 => ' ',
        1 => '╵',
        2 => '╶',
        3 => '└',
        4 => '╷',
        5 => '│',
        6 => '┌',
        7 => '├',
        8 => '╴',
        9 => '┘',
        10 => '─',
        11 => '┴',
        12 => '┐',
        13 => '┤',
        14 => '┬',
        _ => '┼',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, LevelData};

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.0).unwrap_or(' '))
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    fn glyph_at(fb: &FrameBuffer, x: u16, y: u16) -> char {
        fb.get(x, y).map(|c| c.0).unwrap_or(' ')
    }

    #[test]
    fn test_solved_run_draws_a_connected_line() {
        // Wire run across the top row, empty row below; the completion
        // overlay lands on the empty row and leaves the wires visible.
        let game =
            GameState::from_level(&LevelData::new(2, 3, vec![11, 13, 32, 0, 0, 0])).unwrap();
        let view = GridView::default();
        let fb = view.render(
            &game.snapshot(),
            None,
            &HudView::default(),
            Viewport::new(40, 20),
        );

        // Frame is 11x8, centered: start (14, 6); top-row centers on row 8.
        assert_eq!(glyph_at(&fb, 16, 8), '◆');
        assert_eq!(glyph_at(&fb, 19, 8), '─');
        assert_eq!(glyph_at(&fb, 22, 8), '●');

        // Stubs meet across the tile edges: one unbroken horizontal run.
        assert!(contains_text(&fb, "◆─────●"));
    }

    #[test]
    fn test_unpowered_bulb_is_an_open_circle() {
        // Bulb faces away from the source.
        let game = GameState::from_level(&LevelData::new(1, 2, vec![11, 12])).unwrap();
        let view = GridView::default();
        let fb = view.render(
            &game.snapshot(),
            None,
            &HudView::default(),
            Viewport::new(40, 20),
        );
        assert!(contains_text(&fb, "○"));
        assert!(!contains_text(&fb, "●"));
    }

    #[test]
    fn test_wire_glyphs_cover_every_port_set() {
        assert_eq!(wire_glyph(Ports::from_bits(0b0101)), '│');
        assert_eq!(wire_glyph(Ports::from_bits(0b1010)), '─');
        assert_eq!(wire_glyph(Ports::from_bits(0b0011)), '└');
        assert_eq!(wire_glyph(Ports::from_bits(0b1111)), '┼');

        // Every bit pattern maps to something drawable.
        for bits in 1..16 {
            assert_ne!(wire_glyph(Ports::from_bits(bits)), ' ');
        }
    }

    #[test]
    fn test_cursor_changes_the_tile_background() {
        // Unsolved on purpose so no overlay covers the tile row.
        let game = GameState::from_level(&LevelData::new(1, 2, vec![11, 12])).unwrap();
        let view = GridView::default();
        let snap = game.snapshot();
        let plain = view.render(&snap, None, &HudView::default(), Viewport::new(40, 20));
        let picked = view.render(&snap, Some((0, 0)), &HudView::default(), Viewport::new(40, 20));

        // Frame is 8x5, centered: start (16, 7); first tile center (18, 9).
        let before = plain.get(18, 9).unwrap();
        let after = picked.get(18, 9).unwrap();
        assert_eq!(before.0, after.0);
        assert_eq!(after.1.bg, CURSOR_BG);
        assert_ne!(before.1.bg, after.1.bg);
    }

    #[test]
    fn test_powered_tiles_glow_and_unpowered_tiles_dim() {
        let game = GameState::from_level(&LevelData::new(1, 2, vec![11, 12])).unwrap();
        let view = GridView::default();
        let fb = view.render(
            &game.snapshot(),
            None,
            &HudView::default(),
            Viewport::new(40, 20),
        );

        // Tile centers sit at (18, 9) and (21, 9); the source is powered,
        // the turned-away bulb is not.
        let source = fb.get(18, 9).unwrap().1;
        assert!(source.bold);
        assert!(!source.dim);
        assert_eq!(source.fg, Rgb::new(255, 196, 64));

        let bulb = fb.get(21, 9).unwrap().1;
        assert!(bulb.dim);
        assert!(!bulb.bold);
    }

    #[test]
    fn test_overlay_announces_completion() {
        let solved = GameState::from_level(&LevelData::new(1, 3, vec![11, 13, 32])).unwrap();
        let view = GridView::default();
        let fb = view.render(
            &solved.snapshot(),
            None,
            &HudView::default(),
            Viewport::new(40, 20),
        );
        assert!(contains_text(&fb, "LEVEL COMPLETE"));

        let broken = GameState::from_level(&LevelData::new(1, 2, vec![11, 12])).unwrap();
        let fb = view.render(
            &broken.snapshot(),
            None,
            &HudView::default(),
            Viewport::new(40, 20),
        );
        assert!(!contains_text(&fb, "LEVEL COMPLETE"));
    }

    #[test]
    fn test_side_panel_counters() {
        // Break the run first so the completion overlay stays out of the
        // panel columns.
        let mut game = GameState::from_level(&LevelData::new(1, 3, vec![11, 13, 32])).unwrap();
        game.rotate_at(0, 1).unwrap();
        let view = GridView::default();
        let hud = HudView {
            level_no: 2,
            level_count: 6,
            best_score: 100,
            message: Some("tile is fixed"),
        };
        let fb = view.render(&game.snapshot(), None, &hud, Viewport::new(60, 24));

        assert!(contains_text(&fb, "LEVEL"));
        assert!(contains_text(&fb, "2/6"));
        assert!(contains_text(&fb, "MOVES"));
        assert!(contains_text(&fb, "1/3"));
        assert!(contains_text(&fb, "100"));
        assert!(contains_text(&fb, "tile is fixed"));
    }

    #[test]
    fn test_tiny_viewport_never_panics() {
        let game = GameState::from_level(&LevelData::new(2, 2, vec![11, 24, 12, 34])).unwrap();
        let view = GridView::default();
        let _ = view.render(
            &game.snapshot(),
            Some((1, 1)),
            &HudView::default(),
            Viewport::new(4, 3),
        );
    }
}
