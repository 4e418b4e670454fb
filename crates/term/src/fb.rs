//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// 2D framebuffer of styled characters.
///
/// Characters and styles live in parallel flat vectors so a full clear is
/// two `fill` calls and no per-cell struct shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    chars: Vec<char>,
    styles: Vec<CellStyle>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            chars: vec![' '; len],
            styles: vec![CellStyle::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocations when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.chars.resize(len, ' ');
        self.styles.resize(len, CellStyle::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<(char, CellStyle)> {
        self.idx(x, y).map(|i| (self.chars[i], self.styles[i]))
    }

    pub fn clear(&mut self, style: CellStyle) {
        self.chars.fill(' ');
        self.styles.fill(style);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.chars[i] = ch;
            self.styles[i] = style;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating. Returns the column just
    /// after the last digit, so callers can continue a line.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        // u32::MAX has 10 digits.
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            n /= 10;
            len += 1;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        for i in (0..len).rev() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, digits[i] as char, style);
            cx += 1;
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut fb = FrameBuffer::new(4, 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_char(1, 1, 'x', style);
        assert_eq!(fb.get(1, 1), Some(('x', style)));

        // Out-of-range writes are dropped, not wrapped.
        fb.put_char(4, 0, 'y', style);
        assert_eq!(fb.get(0, 1), Some((' ', CellStyle::default())));
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.get(2, 0).map(|c| c.0), Some('a'));
        assert_eq!(fb.get(3, 0).map(|c| c.0), Some('b'));
    }

    #[test]
    fn test_put_u32_writes_digits_and_returns_cursor() {
        let mut fb = FrameBuffer::new(10, 1);
        let style = CellStyle::default();
        let next = fb.put_u32(1, 0, 403, style);
        assert_eq!(next, 4);
        assert_eq!(fb.get(1, 0).map(|c| c.0), Some('4'));
        assert_eq!(fb.get(2, 0).map(|c| c.0), Some('0'));
        assert_eq!(fb.get(3, 0).map(|c| c.0), Some('3'));

        assert_eq!(fb.put_u32(5, 0, 0, style), 6);
        assert_eq!(fb.get(5, 0).map(|c| c.0), Some('0'));
    }

    #[test]
    fn test_resize_keeps_dims_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 4);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 4);
        assert!(fb.get(2, 3).is_some());
        assert!(fb.get(3, 0).is_none());
    }
}
