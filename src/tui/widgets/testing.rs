//! Helpers for testing widgets in isolation.

use ratatui::{buffer::Buffer, layout::Rect};

use super::RenderableWidget;
use crate::config::DisplayConfig;

/// Render a widget into a fresh buffer of the given size.
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let display = DisplayConfig::default();
    widget.render(buf.area, &mut buf, &display);
    buf
}

/// Collect one buffer row into a plain string.
pub fn buffer_line(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

/// Collect the whole buffer into a newline-joined string.
pub fn buffer_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
