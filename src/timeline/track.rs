//! Timeline track: pointer-to-time translation and rendering.
//!
//! The track is a stateless view over a playback snapshot. It never
//! seeks by itself; pointer input produces a [`Request`] that the
//! controller applies.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::format::format_timestamp;
use super::mapping::{pixel_to_time, time_to_column, time_to_percentage, AXIS_TICK_INTERVAL};
use super::segment::{SegmentKind, TimelineSegment};
use crate::moments::KeyMoment;
use crate::player::Request;
use crate::theme::Theme;

/// Placeholder shown while the duration is unknown.
pub const LOADING_PLACEHOLDER: &str = "Loading timeline...";

/// Slider-style accessibility description of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl SliderState {
    /// Text form, e.g. `Video timeline: 2:25 of 5:00`.
    pub fn describe(&self) -> String {
        format!(
            "Video timeline: {} of {}",
            format_timestamp(self.value),
            format_timestamp(self.max)
        )
    }
}

/// What a pointer press on the track landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackHit {
    /// A key moment marker (index into the moments list)
    Marker { index: usize, time: f64 },
    /// The track body at the mapped time
    Body { time: f64 },
}

impl TrackHit {
    /// Time the hit asks to seek to.
    pub fn time(&self) -> f64 {
        match self {
            Self::Marker { time, .. } | Self::Body { time } => *time,
        }
    }
}

/// A segment band in cell columns, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: u16,
    pub end: u16,
    pub kind: SegmentKind,
}

/// Cell positions of everything drawn on a track of a given width.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    pub width: u16,
    /// Segment bands in list order
    pub bands: Vec<Band>,
    /// Marker column per moment, in list order
    pub markers: Vec<u16>,
    /// Number of cells covered by the progress fill
    pub progress: u16,
    /// Playhead column
    pub playhead: u16,
    /// Ticks that fit on screen: (label start column, label)
    pub tick_labels: Vec<(u16, String)>,
}

/// Screen areas of the timeline widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    pub axis: Rect,
    pub strip: Rect,
    pub legend: Rect,
}

impl TrackGeometry {
    /// Split the widget area (including its border) into rows.
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.height < 3 {
            return Self {
                axis: Rect::new(inner.x, inner.y, inner.width, 0),
                strip: inner,
                legend: Rect::new(inner.x, inner.bottom(), inner.width, 0),
            };
        }
        Self {
            axis: Rect::new(inner.x, inner.y, inner.width, 1),
            strip: Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 2),
            legend: Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
        }
    }

    /// Offset of a screen column relative to the strip, if the cell is on it.
    pub fn strip_offset(&self, column: u16, row: u16) -> Option<u16> {
        let strip = self.strip;
        let inside = column >= strip.x
            && column < strip.right()
            && row >= strip.y
            && row < strip.bottom();
        inside.then(|| column - strip.x)
    }
}

/// The interactive timeline for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct TimelineTrack<'a> {
    pub duration: f64,
    pub current_time: f64,
    pub moments: &'a [KeyMoment],
    pub segments: &'a [TimelineSegment],
}

impl<'a> TimelineTrack<'a> {
    pub fn new(
        duration: f64,
        current_time: f64,
        moments: &'a [KeyMoment],
        segments: &'a [TimelineSegment],
    ) -> Self {
        Self {
            duration,
            current_time,
            moments,
            segments,
        }
    }

    /// The track accepts input once the duration is known.
    pub fn is_ready(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    pub fn slider(&self) -> SliderState {
        SliderState {
            min: 0.0,
            max: self.duration,
            value: self.current_time,
        }
    }

    /// Progress through the media, 0-100.
    pub fn progress_percentage(&self) -> f64 {
        time_to_percentage(self.current_time, self.duration).clamp(0.0, 100.0)
    }

    /// Compute cell positions for a strip `width` cells wide.
    pub fn layout(&self, width: u16) -> TrackLayout {
        if !self.is_ready() || width == 0 {
            return TrackLayout {
                width,
                bands: Vec::new(),
                markers: Vec::new(),
                progress: 0,
                playhead: 0,
                tick_labels: Vec::new(),
            };
        }

        let w = width as f64;
        let to_cells = |time: f64| time_to_percentage(time, self.duration) / 100.0 * w;

        let bands = self
            .segments
            .iter()
            .map(|seg| {
                let start = to_cells(seg.start_time).floor().clamp(0.0, w - 1.0) as u16;
                let end = to_cells(seg.end_time).ceil().clamp(0.0, w) as u16;
                Band {
                    start,
                    end: end.max(start + 1),
                    kind: seg.kind,
                }
            })
            .collect();

        let markers = self
            .moments
            .iter()
            .filter_map(|m| time_to_column(m.timestamp, self.duration, width))
            .collect();

        let progress = (self.progress_percentage() / 100.0 * w).floor() as u16;
        let playhead = time_to_column(self.current_time.max(0.0), self.duration, width).unwrap_or(0);
        let tick_labels = visible_tick_labels(self.duration, width);

        TrackLayout {
            width,
            bands,
            markers,
            progress,
            playhead,
            tick_labels,
        }
    }

    /// Resolve a press at `offset_x` cells from the strip's left edge.
    ///
    /// Markers take precedence over the body. When markers share a cell
    /// the last one in list order (drawn on top) wins.
    pub fn hit_test(&self, offset_x: u16, width: u16) -> Option<TrackHit> {
        if !self.is_ready() || offset_x >= width {
            return None;
        }

        let marker = self
            .moments
            .iter()
            .enumerate()
            .rev()
            .find(|(_, m)| time_to_column(m.timestamp, self.duration, width) == Some(offset_x));
        if let Some((index, moment)) = marker {
            return Some(TrackHit::Marker {
                index,
                time: moment.timestamp,
            });
        }

        pixel_to_time(offset_x as f64, width as f64, self.duration).map(|time| TrackHit::Body { time })
    }

    /// Handle a pointer press: at most one seek request per event.
    pub fn pointer_down(&self, offset_x: u16, width: u16) -> Option<Request> {
        self.hit_test(offset_x, width)
            .map(|hit| Request::Seek(hit.time()))
    }
}

/// Centered axis labels for a strip `width` cells wide.
///
/// Only every `stride`-th tick is visited, so the work is bounded by the
/// width rather than the duration. Labels that would touch the previous
/// one are dropped.
fn visible_tick_labels(duration: f64, width: u16) -> Vec<(u16, String)> {
    let count = (duration / AXIS_TICK_INTERVAL).floor() as u64;
    // The last label is the widest
    let label_width = format_timestamp(duration).chars().count() as u64 + 1;
    let slots = (width as u64 / label_width).max(1);
    let stride = (count + 1).div_ceil(slots).max(1) as usize;

    let mut labels = Vec::new();
    let mut next_free = 0u16;
    for i in (0..=count).step_by(stride) {
        let time = i as f64 * AXIS_TICK_INTERVAL;
        let Some(col) = time_to_column(time, duration, width) else {
            continue;
        };
        let label = format_timestamp(time);
        let len = label.chars().count() as u16;
        if len > width {
            break;
        }
        let start = col.saturating_sub(len / 2).min(width - len);
        if start < next_free {
            continue;
        }
        next_free = start + len + 1;
        labels.push((start, label));
    }
    labels
}

/// ratatui widget drawing a [`TimelineTrack`].
pub struct TimelineWidget<'a> {
    track: TimelineTrack<'a>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(track: TimelineTrack<'a>, theme: &'a Theme) -> Self {
        Self {
            track,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_strip(&self, layout: &TrackLayout, strip: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let (x0, rows) = (strip.x, strip.y..strip.bottom());

        for y in rows.clone() {
            for col in 0..layout.width {
                if let Some(cell) = buf.cell_mut((x0 + col, y)) {
                    cell.set_symbol(" ").set_style(Style::default().bg(theme.track));
                }
            }
        }

        for band in &layout.bands {
            let color = match band.kind {
                SegmentKind::Silent => theme.silent,
                SegmentKind::Highlighted => theme.highlighted,
            };
            for y in rows.clone() {
                for col in band.start..band.end.min(layout.width) {
                    if let Some(cell) = buf.cell_mut((x0 + col, y)) {
                        cell.set_bg(color);
                    }
                }
            }
        }

        for y in rows.clone() {
            for col in 0..layout.progress.min(layout.width) {
                if let Some(cell) = buf.cell_mut((x0 + col, y)) {
                    cell.set_symbol("░").set_fg(theme.progress);
                }
            }
        }

        for &col in &layout.markers {
            for y in rows.clone() {
                if let Some(cell) = buf.cell_mut((x0 + col, y)) {
                    cell.set_symbol("│").set_fg(theme.marker);
                }
            }
        }

        // Playhead last so it is always on top
        for y in rows {
            if let Some(cell) = buf.cell_mut((x0 + layout.playhead, y)) {
                cell.set_symbol("┃").set_fg(theme.playhead);
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }

    fn legend(&self) -> Line<'static> {
        let theme = self.theme;
        Line::from(vec![
            Span::styled("  ", Style::default().bg(theme.silent)),
            Span::styled(" Silent segments  ", theme.text_secondary_style()),
            Span::styled("  ", Style::default().bg(theme.highlighted)),
            Span::styled(" Highlighted segments  ", theme.text_secondary_style()),
            Span::styled("│", Style::default().fg(theme.marker)),
            Span::styled(" Key moments", theme.text_secondary_style()),
        ])
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border = if self.focused {
            theme.accent_style()
        } else {
            theme.text_secondary_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Timeline ");

        if !self.track.is_ready() {
            let inner = block.inner(area);
            block.render(area, buf);
            let y = inner.y + inner.height / 2;
            Paragraph::new(LOADING_PLACEHOLDER)
                .style(theme.text_secondary_style())
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1.min(inner.height)), buf);
            return;
        }

        block = block.title(Line::from(format!(" {} ", self.track.slider().describe())).right_aligned());
        block.render(area, buf);

        let geometry = TrackGeometry::new(area);
        let layout = self.track.layout(geometry.strip.width);

        if geometry.axis.height > 0 {
            for (col, label) in &layout.tick_labels {
                buf.set_string(
                    geometry.axis.x + col,
                    geometry.axis.y,
                    label,
                    theme.text_secondary_style(),
                );
            }
        }

        self.render_strip(&layout, geometry.strip, buf);

        if geometry.legend.height > 0 {
            self.legend().render(geometry.legend, buf);
        }
    }
}
