//! Modal overlay helpers: background dimming and centered placement.

use ratatui::{Frame, buffer::Buffer, layout::Rect, style::Color, widgets::Clear};

/// Dim every cell rendered so far by scaling RGB colors and graying out the
/// named palette. Call before drawing modal content on top.
pub fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let area = buffer.area;
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            let cell = &mut buffer[(x, y)];
            let fg = dim_color(cell.fg, factor);
            cell.set_fg(fg);
        }
    }
}

fn dim_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (c as f32 * (1.0 - factor)) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        Color::Reset => Color::Reset,
        _ => Color::DarkGray,
    }
}

/// Render a modal backdrop: dims the buffer and clears the modal area.
pub fn render_modal(frame: &mut Frame, area: Rect) {
    dim_buffer(frame.buffer_mut(), 0.5);
    frame.render_widget(Clear, area);
}

/// Calculate a centered rectangle within an area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(40, 10, area);
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 10);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 7);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let centered = centered_rect(100, 50, area);
        assert!(centered.width <= 28);
        assert!(centered.height <= 8);
    }

    #[test]
    fn dim_color_scales_rgb() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::Cyan, 0.5), Color::DarkGray);
    }
}
