//! ratatui rendering of the key moments list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{panel_items, KeyMoment, MomentItem, EMPTY_PLACEHOLDER};
use crate::theme::Theme;

/// Rows used by one moment: title, description, importance.
pub const ITEM_HEIGHT: u16 = 3;

const FILLED_CELL: &str = "●";
const EMPTY_CELL: &str = "○";
const ACTIVE_PREFIX: &str = "▶ ";

/// Where each moment row sits on screen for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentsLayout {
    /// Whole panel including the border
    pub area: Rect,
    /// Area inside the border
    pub inner: Rect,
    /// Index of the first visible moment
    pub offset: usize,
    /// Total number of moments
    pub len: usize,
}

impl MomentsLayout {
    /// Layout that keeps `selected` visible.
    pub fn new(area: Rect, selected: usize, len: usize) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let visible = (inner.height / ITEM_HEIGHT).max(1) as usize;
        let offset = if selected >= visible {
            selected + 1 - visible
        } else {
            0
        };
        Self {
            area,
            inner,
            offset: offset.min(len.saturating_sub(1)),
            len,
        }
    }

    /// Number of moments that fit.
    pub fn visible(&self) -> usize {
        (self.inner.height / ITEM_HEIGHT) as usize
    }

    /// Moment index drawn at screen row `row`.
    pub fn index_at(&self, row: u16) -> Option<usize> {
        if row < self.inner.y || row >= self.inner.bottom() {
            return None;
        }
        let index = self.offset + ((row - self.inner.y) / ITEM_HEIGHT) as usize;
        (index < self.len && index < self.offset + self.visible()).then_some(index)
    }

    /// Screen rows of the moment at `index`, if visible.
    fn item_area(&self, index: usize) -> Option<Rect> {
        let slot = index.checked_sub(self.offset)?;
        if slot >= self.visible() {
            return None;
        }
        let y = self.inner.y + slot as u16 * ITEM_HEIGHT;
        Some(Rect::new(self.inner.x, y, self.inner.width, ITEM_HEIGHT))
    }
}

/// Importance indicator text, e.g. `●●●○○`.
pub fn importance_text(cells: &[bool]) -> String {
    cells
        .iter()
        .map(|&filled| if filled { FILLED_CELL } else { EMPTY_CELL })
        .collect()
}

/// The key moments panel for one playback position.
pub struct MomentsWidget<'a> {
    moments: &'a [KeyMoment],
    current_time: f64,
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> MomentsWidget<'a> {
    pub fn new(moments: &'a [KeyMoment], current_time: f64, theme: &'a Theme) -> Self {
        Self {
            moments,
            current_time,
            selected: 0,
            focused: false,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn item_lines(&self, item: &MomentItem<'_>, is_selected: bool) -> Vec<Line<'static>> {
        let theme = self.theme;
        let prefix = if item.active { ACTIVE_PREFIX } else { "  " };
        let mut title_style = if item.active {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };
        if is_selected && self.focused {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        vec![
            Line::from(vec![
                Span::styled(prefix, theme.accent_style()),
                Span::styled(item.moment.title.clone(), title_style),
                Span::raw("  "),
                Span::styled(item.timestamp_label.clone(), theme.accent_style()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(item.moment.description.clone(), theme.text_secondary_style()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(importance_text(&item.importance), theme.accent_style()),
            ]),
        ]
    }
}

impl Widget for MomentsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border = if self.focused {
            theme.accent_style()
        } else {
            theme.text_secondary_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Key Moments ");
        let layout = MomentsLayout::new(area, self.selected, self.moments.len());
        block.render(area, buf);

        if self.moments.is_empty() {
            let inner = layout.inner;
            if inner.height > 0 {
                let y = inner.y + inner.height / 2;
                Paragraph::new(EMPTY_PLACEHOLDER)
                    .style(Style::default().fg(theme.text_secondary))
                    .alignment(Alignment::Center)
                    .render(Rect::new(inner.x, y, inner.width, 1), buf);
            }
            return;
        }

        for (index, item) in panel_items(self.moments, self.current_time)
            .iter()
            .enumerate()
        {
            let Some(rect) = layout.item_area(index) else {
                continue;
            };
            let lines = self.item_lines(item, index == self.selected);
            Paragraph::new(lines).render(rect, buf);
        }
    }
}
