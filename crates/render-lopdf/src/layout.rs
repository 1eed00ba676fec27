// Page composition for the PDF table renderer. Coordinates are tracked from the
// top of the page and flipped into PDF space only when an operation is emitted.

use crate::encoding::to_win_ansi;
use crate::metrics::{FontFace, text_width, wrap_text};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }
}

/// Layout settings for the table document. All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfTableConfig {
    pub page_size: PageSize,
    pub margin: f32,
    pub title_font_size: f32,
    pub header_font_size: f32,
    pub cell_font_size: f32,
    pub cell_padding: f32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
}

impl Default for PdfTableConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 36.0,
            title_font_size: 18.0,
            header_font_size: 10.0,
            cell_font_size: 9.0,
            cell_padding: 4.0,
            line_spacing: 1.25,
        }
    }
}

const TITLE_SPACING_AFTER: f32 = 20.0;
const FOOTER_SPACING_BEFORE: f32 = 14.0;
const HEADER_FILL_GRAY: f32 = 0.88;
const GRID_LINE_WIDTH: f32 = 0.5;

/// A row whose cells have already been wrapped to their column width.
pub(crate) struct WrappedRow {
    cells: Vec<Vec<String>>,
    face: FontFace,
    font_size: f32,
    height: f32,
}

impl WrappedRow {
    fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Accumulates drawing operations page by page.
pub(crate) struct TableComposer<'a> {
    config: &'a PdfTableConfig,
    page_width: f32,
    page_height: f32,
    column_width: f32,
    cursor_y: f32,
    /// Cursor position right below the most recently drawn header row.
    body_top: f32,
    current: Vec<Operation>,
    finished: Vec<Content>,
}

impl<'a> TableComposer<'a> {
    pub(crate) fn new(config: &'a PdfTableConfig, columns: usize) -> Self {
        let (page_width, page_height) = config.page_size.dimensions();
        let usable_width = page_width - 2.0 * config.margin;
        let column_width = usable_width / columns.max(1) as f32;
        Self {
            config,
            page_width,
            page_height,
            column_width,
            cursor_y: config.margin,
            body_top: config.margin,
            current: Vec::new(),
            finished: Vec::new(),
        }
    }

    pub(crate) fn page_dimensions(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    fn bottom_limit(&self) -> f32 {
        self.page_height - self.config.margin
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.config.line_spacing
    }

    fn row_height(&self, lines: usize, font_size: f32) -> f32 {
        lines as f32 * self.line_height(font_size) + 2.0 * self.config.cell_padding
    }

    pub(crate) fn wrap_row(&self, cells: &[String], face: FontFace, font_size: f32) -> WrappedRow {
        let text_width_limit = (self.column_width - 2.0 * self.config.cell_padding).max(1.0);
        let cells: Vec<Vec<String>> = cells
            .iter()
            .map(|cell| wrap_text(cell, face, font_size, text_width_limit))
            .collect();
        let max_lines = cells.iter().map(Vec::len).max().unwrap_or(1);
        let height = self.row_height(max_lines, font_size);
        WrappedRow { cells, face, font_size, height }
    }

    /// Keeps the first `lines` wrapped lines of every cell in `row` and returns
    /// the remainder as a row of its own.
    fn split_row(&self, row: &mut WrappedRow, lines: usize) -> WrappedRow {
        let rest: Vec<Vec<String>> = row
            .cells
            .iter_mut()
            .map(|cell| cell.split_off(lines.min(cell.len())))
            .collect();
        row.height = self.row_height(row.line_count(), row.font_size);
        let rest_lines = rest.iter().map(Vec::len).max().unwrap_or(0);
        WrappedRow {
            cells: rest,
            face: row.face,
            font_size: row.font_size,
            height: self.row_height(rest_lines, row.font_size),
        }
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor_y + height <= self.bottom_limit()
    }

    /// Wrapped lines of a row with `font_size` that still fit above the bottom margin.
    fn lines_remaining(&self, font_size: f32) -> usize {
        let available = self.bottom_limit() - self.cursor_y - 2.0 * self.config.cell_padding;
        (available / self.line_height(font_size)).floor().max(0.0) as usize
    }

    fn at_body_top(&self) -> bool {
        self.cursor_y <= self.body_top
    }

    fn new_page(&mut self) {
        let operations = std::mem::take(&mut self.current);
        self.finished.push(Content { operations });
        self.cursor_y = self.config.margin;
        self.body_top = self.config.margin;
    }

    /// Draws the title centered, wrapping it if it is wider than the page body.
    pub(crate) fn draw_title(&mut self, title: &str) {
        let size = self.config.title_font_size;
        let max_width = self.page_width - 2.0 * self.config.margin;
        for line in wrap_text(title, FontFace::Bold, size, max_width) {
            let width = text_width(&line, FontFace::Bold, size);
            let x = ((self.page_width - width) / 2.0).max(self.config.margin);
            if !self.fits(self.line_height(size)) {
                self.new_page();
            }
            self.cursor_y += self.line_height(size);
            self.text(&line, FontFace::Bold, size, x, self.cursor_y);
        }
        self.cursor_y += TITLE_SPACING_AFTER;
    }

    /// Draws the shaded header row and marks where the page body starts.
    pub(crate) fn draw_header(&mut self, header: &WrappedRow) {
        self.draw_row(header, true);
        self.body_top = self.cursor_y;
    }

    /// Draws a body row. A row that does not fit moves to a new page; a row
    /// taller than a whole page body is split line-wise across as many pages as
    /// it needs, with `header` repeated on each.
    pub(crate) fn draw_body_row(&mut self, mut row: WrappedRow, header: &WrappedRow) {
        let room = self.lines_remaining(row.font_size);
        if !self.fits(row.height) && (!self.at_body_top() || room == 0) {
            self.new_page();
            self.draw_header(header);
        }
        while !self.fits(row.height) {
            // At least one line per page, even on pages too small for it.
            let lines = self.lines_remaining(row.font_size).max(1);
            if lines >= row.line_count() {
                break;
            }
            let rest = self.split_row(&mut row, lines);
            self.draw_row(&row, false);
            self.new_page();
            self.draw_header(header);
            row = rest;
        }
        self.draw_row(&row, false);
    }

    fn draw_row(&mut self, row: &WrappedRow, shaded: bool) {
        let top = self.cursor_y;
        let x0 = self.config.margin;
        let line_height = self.line_height(row.font_size);

        if shaded {
            self.rect(x0, top, self.column_width * row.cells.len() as f32, row.height, true);
        }

        for (i, lines) in row.cells.iter().enumerate() {
            let cell_x = x0 + i as f32 * self.column_width;
            self.rect(cell_x, top, self.column_width, row.height, false);
            for (n, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                // Baseline sits roughly 80% down the line box.
                let baseline = top
                    + self.config.cell_padding
                    + n as f32 * line_height
                    + row.font_size * 0.8;
                self.text(line, row.face, row.font_size, cell_x + self.config.cell_padding, baseline);
            }
        }

        self.cursor_y += row.height;
    }

    pub(crate) fn draw_footer(&mut self, text: &str) {
        let size = self.config.cell_font_size;
        let needed = FOOTER_SPACING_BEFORE + self.line_height(size);
        if !self.fits(needed) {
            self.new_page();
        }
        self.cursor_y += needed;
        self.text(text, FontFace::Regular, size, self.config.margin, self.cursor_y);
    }

    /// Closes the current page and returns every page's content.
    pub(crate) fn finish(mut self) -> Vec<Content> {
        self.new_page();
        self.finished
    }

    fn flip_y(&self, y: f32) -> f32 {
        self.page_height - y
    }

    fn text(&mut self, text: &str, face: FontFace, size: f32, x: f32, baseline: f32) {
        let y = self.flip_y(baseline);
        self.current.push(Operation::new("BT", vec![]));
        self.current.push(Operation::new(
            "Tf",
            vec![Object::Name(face.resource_name().as_bytes().to_vec()), size.into()],
        ));
        self.current.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.current.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.current.push(Operation::new("ET", vec![]));
    }

    fn rect(&mut self, x: f32, top: f32, width: f32, height: f32, fill: bool) {
        let y = self.flip_y(top + height);
        if fill {
            let gray = HEADER_FILL_GRAY;
            self.current.push(Operation::new("rg", vec![gray.into(), gray.into(), gray.into()]));
            self.current.push(Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]));
            self.current.push(Operation::new("f", vec![]));
            self.current.push(Operation::new("rg", vec![0.0f32.into(), 0.0f32.into(), 0.0f32.into()]));
        } else {
            self.current.push(Operation::new("w", vec![GRID_LINE_WIDTH.into()]));
            self.current.push(Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]));
            self.current.push(Operation::new("S", vec![]));
        }
    }
}
