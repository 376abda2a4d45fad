use boxgrid_core::{
    CharacterGrid, Display, EdgeFamily, LayoutError, ParentContext, ResolvedStyle, SparseGrid,
    Viewport, WordWrap,
};

use crate::align::align;
use crate::boxes::{render_border, render_padding};
use crate::config::{Glyphs, LayoutConfig};
use crate::matrix::{fill_rect, merge, normalize_holes};
use crate::tree::{Child, Node};
use crate::wrap::{wrap, LineBreaker};

/// Box-model layout over character grids.
///
/// The engine is stateless apart from its configuration: [`apply`] styles a
/// single node's grid and [`apply_siblings`] flows a node's children and
/// then styles the result. Both are pure functions of their arguments.
///
/// [`apply`]: LayoutEngine::apply
/// [`apply_siblings`]: LayoutEngine::apply_siblings
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

/// Cursor state threaded through the children of one node.
#[derive(Debug, Default)]
struct Flow {
    grid: SparseGrid,
    row: usize,
    column: usize,
    /// Pending inline text not yet placed.
    run: Vec<char>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    #[inline]
    fn glyphs(&self) -> &Glyphs {
        &self.config.glyphs
    }

    // ---------------------------------------------------------------
    // Widths
    // ---------------------------------------------------------------

    /// `width`, or the parent's content width when unset.
    pub fn element_width(&self, style: &ResolvedStyle, parent: &ParentContext) -> Result<usize, LayoutError> {
        self.bounded(style.width()?.unwrap_or(parent.width))
    }

    /// Width available to the node's own content, and therefore to its
    /// children.
    pub fn content_width(&self, style: &ResolvedStyle, parent: &ParentContext) -> Result<usize, LayoutError> {
        match style.display()? {
            Display::Block => {
                let element_width = self.element_width(style, parent)?;
                Self::block_content_width(style, element_width)
            }
            Display::InlineBlock => self.element_width(style, parent),
            Display::Inline => self.bounded(parent.width),
        }
    }

    fn bounded(&self, width: usize) -> Result<usize, LayoutError> {
        let max = self.config.max_width;
        if width > max {
            return Err(LayoutError::invalid_input(format!(
                "width {width} exceeds the maximum layout width {max}"
            )));
        }
        Ok(width)
    }

    fn block_content_width(style: &ResolvedStyle, element_width: usize) -> Result<usize, LayoutError> {
        let reserved = style.edges(EdgeFamily::Border)?.horizontal()
            + style.edges(EdgeFamily::Padding)?.horizontal();
        element_width
            .checked_sub(reserved)
            .filter(|w| *w > 0)
            .ok_or_else(|| {
                LayoutError::invalid_input(format!(
                    "border and padding ({reserved}) leave no content width in an element {element_width} wide"
                ))
            })
    }

    // ---------------------------------------------------------------
    // Single node
    // ---------------------------------------------------------------

    /// Apply a node's own box styling to its content grid.
    ///
    /// * `block`: wrap and align to the content width, then add vertical
    ///   padding rows and the border.
    /// * `inline-block`: wrap and align to the element width.
    /// * `inline`: the grid is returned as is.
    pub fn apply(
        &self,
        grid: &CharacterGrid,
        style: &ResolvedStyle,
        parent: &ParentContext,
    ) -> Result<CharacterGrid, LayoutError> {
        let glyphs = self.glyphs();
        match style.display()? {
            Display::Block => {
                let element_width = self.element_width(style, parent)?;
                let content_width = Self::block_content_width(style, element_width)?;
                let padding = style.edges(EdgeFamily::Padding)?;
                let border = style.edges(EdgeFamily::Border)?;
                log::debug!(
                    "apply block: element_width={element_width} content_width={content_width} rows={}",
                    grid.height()
                );

                let styled = wrap(grid, content_width, style.word_wrap())?;
                let styled = align(&styled, content_width, style.text_align()?, glyphs.blank)?;
                let styled = render_padding(&styled, content_width, padding.top, padding.bottom, glyphs.blank);
                Ok(render_border(&styled, content_width, &border, glyphs))
            }
            Display::InlineBlock => {
                let element_width = self.element_width(style, parent)?;
                log::debug!("apply inline-block: element_width={element_width} rows={}", grid.height());

                let styled = wrap(grid, element_width, style.word_wrap())?;
                align(&styled, element_width, style.text_align()?, glyphs.blank)
            }
            Display::Inline => Ok(grid.clone()),
        }
    }

    // ---------------------------------------------------------------
    // Children
    // ---------------------------------------------------------------

    /// Render and flow `children`, then style the composed grid with the
    /// node's own `style`.
    ///
    /// When every child is text the texts are joined into one row and
    /// styled directly.
    pub fn apply_siblings(
        &self,
        children: &[Child],
        style: &ResolvedStyle,
        viewport: &Viewport,
        parent: &ParentContext,
    ) -> Result<CharacterGrid, LayoutError> {
        if children.iter().all(Child::is_text) {
            let text: String = children.iter().filter_map(Child::as_text).collect();
            return self.apply(&CharacterGrid::from_text(&text), style, parent);
        }

        let content_width = self.content_width(style, parent)?;
        let context = ParentContext::new(content_width);
        let mode = style.word_wrap();

        let flow = children.iter().try_fold(Flow::default(), |flow, child| {
            self.place(flow, child, viewport, &context, mode)
        })?;
        let flow = self.flush_run(flow, content_width, mode)?;

        let composed = self.finish(&flow.grid)?;
        self.apply(&composed, style, parent)
    }

    /// Render the tree rooted at `node` across the whole viewport.
    pub fn render_root(&self, node: &dyn Node, viewport: &Viewport) -> Result<CharacterGrid, LayoutError> {
        node.render(self, viewport, &viewport.root_context())
    }

    fn place(
        &self,
        mut flow: Flow,
        child: &Child,
        viewport: &Viewport,
        context: &ParentContext,
        mode: WordWrap,
    ) -> Result<Flow, LayoutError> {
        let node = match child {
            Child::Text(text) => {
                flow.run.extend(text.chars());
                return Ok(flow);
            }
            Child::Node(node) => node,
        };

        match node.style().display()? {
            Display::Inline => {
                let rendered = node.render(self, viewport, context)?;
                flow.run.extend(rendered.concat());
                Ok(flow)
            }
            Display::InlineBlock => {
                let flow = self.flush_run(flow, context.width, mode)?;
                let rendered = node.render(self, viewport, context)?;
                self.place_inline_block(flow, &rendered, context.width)
            }
            Display::Block => {
                let flow = self.flush_run(flow, context.width, mode)?;
                let rendered = node.render(self, viewport, context)?;
                Self::place_block(flow, &rendered)
            }
        }
    }

    /// Pack an inline-block on the current row, moving to a fresh row when
    /// it does not fit in what is left of the content width.
    fn place_inline_block(
        &self,
        flow: Flow,
        child: &CharacterGrid,
        content_width: usize,
    ) -> Result<Flow, LayoutError> {
        let Flow { mut grid, mut row, mut column, run } = flow;
        let child_width = child.width();

        if column > 0 && child_width > content_width.saturating_sub(column) {
            log::debug!(
                "inline-block of width {child_width} overflows at column {column}/{content_width}; new row"
            );
            (grid, row) = self.break_row(grid, row, column, content_width)?;
            column = 0;
        }

        log::trace!("place inline-block {}x{} at ({row}, {column})", child_width, child.height());
        grid = merge(&grid, child, row, column)?;
        column += child_width;
        Ok(Flow { grid, row, column, run })
    }

    /// Blank out the rest of the current row band and return the row below it.
    fn break_row(
        &self,
        grid: SparseGrid,
        row: usize,
        column: usize,
        content_width: usize,
    ) -> Result<(SparseGrid, usize), LayoutError> {
        let end = content_width.max(column);
        let grid = fill_rect(&grid, row, column, grid.height(), end, self.glyphs().blank)?;
        let row = grid.height();
        Ok((grid, row))
    }

    /// Stack a block below everything placed so far.
    fn place_block(flow: Flow, child: &CharacterGrid) -> Result<Flow, LayoutError> {
        let row = flow.grid.height();
        log::trace!("place block {}x{} at ({row}, 0)", child.width(), child.height());
        let grid = merge(&flow.grid, child, row, 0)?;
        let row = grid.height();
        Ok(Flow { grid, row, column: 0, run: flow.run })
    }

    /// Place pending inline text. The first line fills what is left of the
    /// current row unless that would split a word that fits on a full row;
    /// the rest take full rows.
    fn flush_run(&self, flow: Flow, content_width: usize, mode: WordWrap) -> Result<Flow, LayoutError> {
        if flow.run.is_empty() {
            return Ok(flow);
        }
        let Flow { mut grid, mut row, mut column, run } = flow;
        let mut breaker = LineBreaker::new(&run, mode);

        if column > 0 && column < content_width {
            let remaining = content_width - column;
            if breaker.splits_word(remaining) && breaker.leading_word_len() <= content_width {
                log::debug!("text run word does not fit at column {column}/{content_width}; new row");
                (grid, row) = self.break_row(grid, row, column, content_width)?;
                column = 0;
            } else if let Some(line) = breaker.next_line(remaining) {
                grid = merge(&grid, &CharacterGrid::from_rows(vec![line.to_vec()]), row, column)?;
                column += line.len();
            }
        }

        while let Some(line) = breaker.next_line(content_width) {
            if column > 0 {
                row = grid.height();
            }
            grid = merge(&grid, &CharacterGrid::from_rows(vec![line.to_vec()]), row, 0)?;
            column = line.len();
        }

        Ok(Flow { grid, row, column, run: Vec::new() })
    }

    /// Make row 0 as wide as the widest row, then fill holes.
    fn finish(&self, grid: &SparseGrid) -> Result<CharacterGrid, LayoutError> {
        let blank = self.glyphs().blank;
        let widest = grid.max_width();
        if grid.width() < widest {
            let padded = fill_rect(grid, 0, grid.width(), 1, widest, blank)?;
            return Ok(normalize_holes(&padded, blank));
        }
        Ok(normalize_holes(grid, blank))
    }
}

// ===================================================================
// Tests
// ===================================================================
