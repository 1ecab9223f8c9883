//! Small layout helpers shared by the UI components.

use ratatui::layout::Rect;

/// Places a popup of the requested size directly under `anchor`, shifted and
/// shrunk as needed to stay inside `within`.
pub fn anchored_below(anchor: Rect, width: u16, height: u16, within: Rect) -> Rect {
    let width = width.min(within.width);
    let height = height.min(within.height.saturating_sub(1));

    let mut x = anchor.x;
    if x + width > within.right() {
        x = within.right().saturating_sub(width);
    }
    let mut y = anchor.y + anchor.height;
    if y + height > within.bottom() {
        y = within.bottom().saturating_sub(height);
    }
    Rect::new(x.max(within.x), y.max(within.y), width, height)
}

/// The drawer panel: a full-height strip along the left edge.
pub fn drawer_panel(area: Rect, width: u16) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_sits_under_its_anchor() {
        let within = Rect::new(0, 0, 120, 40);
        let anchor = Rect::new(50, 1, 10, 1);
        let popup = anchored_below(anchor, 20, 6, within);
        assert_eq!((popup.x, popup.y), (50, 2));
        assert_eq!((popup.width, popup.height), (20, 6));
    }

    #[test]
    fn popup_is_pulled_back_inside_the_viewport() {
        let within = Rect::new(0, 0, 60, 10);
        let anchor = Rect::new(55, 1, 5, 1);
        let popup = anchored_below(anchor, 20, 6, within);
        assert_eq!(popup.right(), 60);
        assert!(popup.bottom() <= 10);
    }

    #[test]
    fn drawer_width_is_clamped_to_the_area() {
        let area = Rect::new(0, 0, 18, 24);
        assert_eq!(drawer_panel(area, 26).width, 18);
        assert_eq!(drawer_panel(area, 12).width, 12);
    }
}
