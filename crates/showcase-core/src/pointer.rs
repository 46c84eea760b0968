use glam::Vec2;

/// Pointer position in normalized device coordinates (x right, y up, both
/// in \[-1, 1\]). Recomputed on every pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Map raw pixel coordinates inside a `width` x `height` viewport to NDC.
    /// A degenerate viewport leaves the previous position in place.
    pub fn update(&mut self, raw_x: f32, raw_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.ndc = Vec2::new((raw_x / width) * 2.0 - 1.0, -(raw_y / height) * 2.0 + 1.0);
    }

    pub fn from_pixels(raw_x: f32, raw_y: f32, width: f32, height: f32) -> Self {
        let mut p = Self::default();
        p.update(raw_x, raw_y, width, height);
        p
    }
}

/// Hover indicator derived from the current pick list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Tracks a press so that a drag is not mistaken for a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    pub down: bool,
    pub last: Vec2,
    pub travelled: f32,
}

impl DragTracker {
    pub fn press(&mut self, x: f32, y: f32) {
        self.down = true;
        self.last = Vec2::new(x, y);
        self.travelled = 0.0;
    }

    /// Returns the movement since the last sample while pressed.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        let p = Vec2::new(x, y);
        let d = p - self.last;
        self.last = p;
        self.travelled += d.length();
        Some(d)
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    pub fn was_drag(&self, tolerance_px: f32) -> bool {
        self.travelled > tolerance_px
    }
}
