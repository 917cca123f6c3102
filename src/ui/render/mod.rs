mod all;
mod certifications;
mod contact;
mod footer;
mod home;
mod log;
mod main;
mod nav;
mod projects;
mod skills;

use self::log::log;
use super::*;
use footer::footer;
use main::main;
use nav::nav;

pub use all::all as render;

use crate::content::ContentBlock;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Rows taken by a page heading and its subtitle.
const HEADING_HEIGHT: u16 = 2;

/// Return a page heading with its subtitle underneath.
///
fn page_heading(title: &'static str, subtitle: &'static str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(title, styling::banner_style(theme))),
        Line::from(Span::styled(subtitle, styling::subtitle_style(theme))),
    ])
}

/// Sections of a page that are in view, each with its screen area.
///
struct PageWindow {
    /// Index of the topmost section in view.
    first: usize,
    areas: Vec<(usize, Rect)>,
}

/// Stack sections of the given heights into `size`, starting with section
/// `first`.
///
/// The offset is clamped so the page never scrolls further than needed to
/// bring its last section into view. Sections are never cut at the bottom:
/// one that does not fit is left out, unless it is the only one, in which
/// case it is clipped. The last section of the page takes any spare rows.
///
fn scroll_window(size: Rect, heights: &[u16], first: usize) -> PageWindow {
    let first = first.min(last_scroll_offset(size.height, heights));
    let mut areas = Vec::new();
    let mut y = size.y;
    for (index, height) in heights.iter().enumerate().skip(first) {
        let remaining = size.bottom().saturating_sub(y);
        if remaining == 0 || (*height > remaining && !areas.is_empty()) {
            break;
        }
        let height = if index + 1 == heights.len() {
            remaining
        } else {
            (*height).min(remaining)
        };
        areas.push((index, Rect::new(size.x, y, size.width, height)));
        y += height;
    }
    PageWindow { first, areas }
}

/// Return the smallest offset at which the last section is fully in view.
///
fn last_scroll_offset(available: u16, heights: &[u16]) -> usize {
    let mut used: u32 = 0;
    let mut offset = heights.len();
    for (index, height) in heights.iter().enumerate().rev() {
        used += u32::from(*height);
        if used > u32::from(available) {
            break;
        }
        offset = index;
    }
    offset.min(heights.len().saturating_sub(1))
}

/// Return the offset closest to `first` at which section `target` is in
/// view.
///
fn reveal(available: u16, heights: &[u16], first: usize, target: usize) -> usize {
    if target < first {
        return target;
    }
    let mut first = first;
    while first < target
        && heights[first..=target]
            .iter()
            .map(|height| u32::from(*height))
            .sum::<u32>()
            > u32::from(available)
    {
        first += 1;
    }
    first
}

/// Return how many rows `text` takes when word-wrapped to `width` columns.
///
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1;
    let mut column = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if column > 0 && column + 1 + len <= width {
            column += 1 + len;
            continue;
        }
        if column > 0 {
            rows += 1;
        }
        rows += (len - 1) / width;
        column = (len - 1) % width + 1;
    }
    rows as u16
}

/// Pack items as pills into lines no wider than `width`. A pill is never
/// split across lines.
///
fn pill_lines(items: &[&'static str], width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut used = 0;
    for item in items {
        let pill = format!(" {} ", item);
        let len = pill.chars().count() + 1;
        if used > 0 && used + len > usize::from(width) {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(pill, styling::pill_style(theme)));
        spans.push(Span::raw(" "));
        used += len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Return one line per tag of a content block, as "Key: value".
///
fn tag_lines(block: &ContentBlock, theme: &Theme) -> Vec<Line<'static>> {
    block
        .tags
        .iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", key), styling::heading_style(theme)),
                Span::styled(*value, styling::normal_text_style(theme)),
            ])
        })
        .collect()
}

/// Return the rows `tag_lines` takes when wrapped to `width` columns.
///
fn tag_rows(block: &ContentBlock, width: u16) -> u16 {
    block
        .tags
        .iter()
        .map(|(key, value)| wrapped_height(&format!("{}: {}", key, value), width))
        .sum()
}

/// Return the rows `item_lines` takes when wrapped to `width` columns.
///
fn item_rows(block: &ContentBlock, width: u16) -> u16 {
    block
        .items
        .iter()
        .map(|item| wrapped_height(&format!("• {}", item), width))
        .sum()
}

/// Return one bulleted line per item of a content block.
///
fn item_lines(block: &ContentBlock, theme: &Theme) -> Vec<Line<'static>> {
    block
        .items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", styling::muted_text_style(theme)),
                Span::styled(*item, styling::normal_text_style(theme)),
            ])
        })
        .collect()
}
