//! Screen layout and mouse hit-testing
//!
//! The recipient field is laid out once per frame. The resulting
//! [`FieldLayout`] is kept in the app state so mouse events can be mapped
//! back onto the element that was drawn under the pointer.

use crate::composer::Composer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Span;

/// Marker shown after a valid chip; clicking the chip removes it
pub const REMOVE_MARKER: &str = "×";
/// Marker shown after a chip whose address failed validation
pub const INVALID_MARKER: &str = "!";
/// Placeholder shown when there are no tags and the input is collapsed
pub const PLACEHOLDER: &str = "Enter recipients...";

/// Smallest terminal the field can be drawn in
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 10;

/// Top-level regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub field: Rect,
    pub status: Rect,
    pub hints: Rect,
}

impl ScreenLayout {
    /// Split the frame into field, status bar and key-hint bar
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let [field, status, hints] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            field,
            status,
            hints,
        }
    }
}

/// A committed tag as drawn on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipArea {
    pub area: Rect,
    pub text: String,
    pub is_valid: bool,
}

/// Label drawn for a chip
#[must_use]
pub fn chip_label(text: &str, is_valid: bool) -> String {
    let marker = if is_valid { REMOVE_MARKER } else { INVALID_MARKER };
    format!(" {text} {marker} ")
}

/// What lies under a screen position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A visible suggestion row, by index into the suggestion list
    Suggestion(usize),
    /// The suggestion panel outside any row (border, empty row)
    Panel,
    /// The input line
    Input,
    /// A tag chip
    Chip(String),
    /// Anywhere else inside the field border
    Container,
    /// Outside the field
    Outside,
}

/// Positions of everything drawn inside the recipient field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLayout {
    /// Outer area of the bordered field
    pub container: Rect,
    pub chips: Vec<ChipArea>,
    /// Row of the empty-state placeholder
    pub placeholder: Option<Rect>,
    /// Input line (expanded only)
    pub input: Option<Rect>,
    /// Outer area of the bordered suggestion panel (expanded only)
    pub panel: Option<Rect>,
    /// Visible suggestion rows with their suggestion index
    pub suggestion_rows: Vec<(Rect, usize)>,
}

impl FieldLayout {
    /// Lay out the field for the composer's current state
    #[must_use]
    pub fn compute(container: Rect, composer: &Composer) -> Self {
        let mut layout = Self {
            container,
            ..Self::default()
        };
        let inner = inner_area(container);
        if inner.width == 0 || inner.height == 0 {
            return layout;
        }

        let mut x = inner.x;
        let mut y = inner.y;
        for tag in composer.tags() {
            let label = chip_label(&tag.text, tag.is_valid);
            let width = u16::try_from(Span::raw(label.as_str()).width())
                .unwrap_or(u16::MAX)
                .min(inner.width);
            if x > inner.x && x.saturating_add(width) > inner.right() {
                x = inner.x;
                y += 1;
            }
            if y >= inner.bottom() {
                break;
            }
            layout.chips.push(ChipArea {
                area: Rect::new(x, y, width, 1),
                text: tag.text.clone(),
                is_valid: tag.is_valid,
            });
            x = x.saturating_add(width).saturating_add(1);
        }

        let next_row = if layout.chips.is_empty() { inner.y } else { y + 1 };

        if composer.tags().is_empty() && !composer.is_expanded() {
            layout.placeholder = Some(Rect::new(inner.x, inner.y, inner.width, 1));
        }

        if !composer.is_expanded() || next_row >= inner.bottom() {
            return layout;
        }
        layout.input = Some(Rect::new(inner.x, next_row, inner.width, 1));

        let panel_y = next_row + 1;
        let available = inner.bottom().saturating_sub(panel_y);
        let wanted = u16::try_from(composer.suggestions().len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let height = wanted.min(available);
        if height < 3 {
            return layout;
        }
        let panel = Rect::new(inner.x, panel_y, inner.width, height);
        layout.panel = Some(panel);

        let visible = usize::from(height - 2);
        let first = first_visible(composer.highlighted(), visible);
        let rows = inner_area(panel);
        for (row, index) in (first..composer.suggestions().len()).take(visible).enumerate() {
            let row_y = rows.y + u16::try_from(row).unwrap_or(u16::MAX);
            layout
                .suggestion_rows
                .push((Rect::new(rows.x, row_y, rows.width, 1), index));
        }

        layout
    }

    /// Find what is drawn at the given terminal cell
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let position = Position::new(column, row);

        if let Some((_, index)) = self
            .suggestion_rows
            .iter()
            .find(|(area, _)| area.contains(position))
        {
            return Hit::Suggestion(*index);
        }
        if self.panel.is_some_and(|panel| panel.contains(position)) {
            return Hit::Panel;
        }
        if self.input.is_some_and(|input| input.contains(position)) {
            return Hit::Input;
        }
        if let Some(chip) = self.chips.iter().find(|chip| chip.area.contains(position)) {
            return Hit::Chip(chip.text.clone());
        }
        if self.container.contains(position) {
            return Hit::Container;
        }
        Hit::Outside
    }

    /// Whether the position is over the suggestion panel
    #[must_use]
    pub fn is_over_panel(&self, column: u16, row: u16) -> bool {
        matches!(self.hit(column, row), Hit::Suggestion(_) | Hit::Panel)
    }

    /// Index of the first suggestion shown in the panel
    #[must_use]
    pub fn first_visible(&self) -> usize {
        self.suggestion_rows.first().map_or(0, |(_, index)| *index)
    }
}

/// Area inside a one-cell border
fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Scroll offset that keeps the highlighted suggestion visible
fn first_visible(highlighted: Option<usize>, visible: usize) -> usize {
    match highlighted {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Email;

    fn composer(candidates: &[&str], tags: &[&str]) -> Composer {
        Composer::new(candidates.iter().map(|t| Email::new(*t)).collect()).with_tags(tags)
    }

    #[test]
    fn test_screen_split() {
        let screen = ScreenLayout::split(Rect::new(0, 0, 80, 24));
        assert_eq!(screen.field, Rect::new(0, 0, 80, 20));
        assert_eq!(screen.status, Rect::new(0, 20, 80, 3));
        assert_eq!(screen.hints, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_collapsed_empty_shows_placeholder_only() {
        let c = composer(&["alice@x.com"], &[]);
        let layout = FieldLayout::compute(Rect::new(0, 0, 40, 10), &c);

        assert_eq!(layout.placeholder, Some(Rect::new(1, 1, 38, 1)));
        assert!(layout.chips.is_empty());
        assert!(layout.input.is_none());
        assert!(layout.panel.is_none());
    }

    #[test]
    fn test_chips_flow_and_wrap() {
        let c = composer(&[], &["alice@x.com", "bob@x.com", "carol@x.com"]);
        let layout = FieldLayout::compute(Rect::new(0, 0, 32, 10), &c);

        // " alice@x.com × " is 15 cells wide
        assert_eq!(layout.chips[0].area, Rect::new(1, 1, 15, 1));
        assert_eq!(layout.chips[1].area, Rect::new(17, 1, 13, 1));
        assert_eq!(layout.chips[2].area, Rect::new(1, 2, 15, 1));
        assert!(layout.placeholder.is_none());
    }

    #[test]
    fn test_expanded_layout_places_input_and_panel() {
        let mut c = composer(&["alice@x.com", "bob@x.com"], &["carol@x.com"]);
        c.activate();
        let layout = FieldLayout::compute(Rect::new(0, 0, 40, 12), &c);

        assert_eq!(layout.input, Some(Rect::new(1, 2, 38, 1)));
        assert_eq!(layout.panel, Some(Rect::new(1, 3, 38, 4)));
        assert_eq!(
            layout.suggestion_rows,
            vec![(Rect::new(2, 4, 36, 1), 0), (Rect::new(2, 5, 36, 1), 1)]
        );
    }

    #[test]
    fn test_panel_scrolls_to_highlight() {
        let candidates: Vec<String> = (0..10).map(|i| format!("u{i}@x.com")).collect();
        let mut c = Composer::new(candidates.iter().map(Email::new).collect());
        c.activate();
        for _ in 0..8 {
            c.suggestion_down();
        }
        assert_eq!(c.highlighted(), Some(7));

        // inner height 6: input row, then a panel with 3 visible rows
        let layout = FieldLayout::compute(Rect::new(0, 0, 40, 8), &c);
        assert_eq!(layout.suggestion_rows.len(), 3);
        assert_eq!(layout.first_visible(), 5);
        assert_eq!(layout.suggestion_rows.last().map(|(_, i)| *i), Some(7));
    }

    #[test]
    fn test_hit_testing() {
        let mut c = composer(&["alice@x.com"], &["bob@x.com"]);
        c.activate();
        let layout = FieldLayout::compute(Rect::new(0, 0, 40, 12), &c);

        assert_eq!(layout.hit(3, 1), Hit::Chip("bob@x.com".to_string()));
        assert_eq!(layout.hit(5, 2), Hit::Input);
        assert_eq!(layout.hit(1, 3), Hit::Panel);
        assert_eq!(layout.hit(5, 4), Hit::Suggestion(0));
        assert_eq!(layout.hit(30, 1), Hit::Container);
        assert_eq!(layout.hit(50, 1), Hit::Outside);
        assert!(layout.is_over_panel(5, 4));
        assert!(!layout.is_over_panel(5, 2));
    }

    #[test]
    fn test_empty_suggestions_still_show_panel() {
        let mut c = composer(&["alice@x.com"], &[]);
        c.activate();
        c.input_char('z');
        let layout = FieldLayout::compute(Rect::new(0, 0, 40, 12), &c);

        assert_eq!(layout.panel, Some(Rect::new(1, 2, 38, 3)));
        assert!(layout.suggestion_rows.is_empty());
    }

    #[test]
    fn test_tiny_area_is_empty() {
        let c = composer(&[], &["alice@x.com"]);
        let layout = FieldLayout::compute(Rect::new(0, 0, 2, 2), &c);
        assert!(layout.chips.is_empty());
        assert!(layout.placeholder.is_none());
    }
}
