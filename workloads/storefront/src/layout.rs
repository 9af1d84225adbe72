//! Page geometry used to place observed regions.
//!
//! Components register proximity observations against document regions, so
//! pages lay their blocks out top to bottom before mounting them. Heights
//! follow the responsive classes in the markup.

use leveling_deferred::Rect;

/// Widest content container (`max-w-screen-2xl`).
pub const MAX_CONTENT_WIDTH: f64 = 1536.0;
/// Horizontal page padding on each side.
pub const PAGE_PADDING: f64 = 32.0;
/// Utility bar, sticky nav and notification banner.
pub const HEADER_HEIGHT: f64 = 136.0;
/// Vertical padding of a page section.
pub const SECTION_PADDING: f64 = 64.0;
/// Heading block above the featured grid.
pub const GRID_HEADING_HEIGHT: f64 = 120.0;
/// Text below a product card image.
pub const CARD_INFO_HEIGHT: f64 = 120.0;
/// Gap between grid cells.
pub const GRID_GAP: f64 = 32.0;

/// Columns of the product grid at a viewport width.
pub fn grid_columns(width: f64) -> usize {
    if width >= 1024.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

/// Hero banner height at a viewport width.
pub fn hero_height(width: f64) -> f64 {
    if width >= 1024.0 {
        600.0
    } else if width >= 768.0 {
        500.0
    } else {
        320.0
    }
}

/// Top-to-bottom layout cursor for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    width: f64,
    cursor: f64,
}

impl PageLayout {
    pub fn new(width: f64) -> Self {
        Self { width, cursor: 0.0 }
    }

    /// Current offset from the top of the document.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Claim a full-width block of `height`.
    pub fn take(&mut self, height: f64) -> Rect {
        let rect = Rect::new(0.0, self.cursor, self.width, height);
        self.cursor += height;
        rect
    }

    /// Advance without claiming a region.
    pub fn skip(&mut self, height: f64) {
        self.cursor += height;
    }

    /// Image regions for a grid of `count` square cards, claimed below the cursor.
    pub fn take_grid(&mut self, count: usize) -> Vec<Rect> {
        let columns = grid_columns(self.width);
        let content = self.width.min(MAX_CONTENT_WIDTH) - 2.0 * PAGE_PADDING;
        let left = (self.width - content) / 2.0;
        let side = (content - GRID_GAP * (columns as f64 - 1.0)) / columns as f64;
        let row_height = side + CARD_INFO_HEIGHT + GRID_GAP;

        let regions = (0..count)
            .map(|i| {
                let (row, col) = (i / columns, i % columns);
                Rect::new(
                    left + col as f64 * (side + GRID_GAP),
                    self.cursor + row as f64 * row_height,
                    side,
                    side,
                )
            })
            .collect();

        let rows = count.div_ceil(columns);
        self.cursor += rows as f64 * row_height;
        regions
    }
}
