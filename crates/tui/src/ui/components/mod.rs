//! UI components: header, drawer, page.

pub mod component;
pub mod drawer;
pub mod header;
pub mod page;

pub(crate) use component::Component;
pub use drawer::DrawerComponent;
pub use header::HeaderComponent;
pub use page::PageComponent;

use ratatui::layout::{Position, Rect};

/// Index of the first rect containing the given terminal cell.
pub(crate) fn hit_index(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    areas.iter().position(|area| area.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_index_picks_the_containing_rect() {
        let areas = vec![Rect::new(0, 0, 10, 1), Rect::new(12, 0, 10, 1)];
        assert_eq!(hit_index(&areas, 5, 0), Some(0));
        assert_eq!(hit_index(&areas, 12, 0), Some(1));
        assert_eq!(hit_index(&areas, 11, 0), None);
        assert_eq!(hit_index(&areas, 5, 3), None);
    }
}
