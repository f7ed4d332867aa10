//! Hit areas for mouse interaction.
//!
//! Render code registers clickable regions each frame; the event loop asks the
//! registry what sits under the pointer. The card itself is registered as
//! [`ClickAction::DragCard`] so a press there starts a drag instead of firing.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::Screen;
use crate::swipe::SwipeAction;

/// What clicking a hit area does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Start dragging the front card
    DragCard,
    /// One of the Pass / Favorite / Like buttons
    Swipe(SwipeAction),
    Undo,
    /// Switch to another screen (route guard applies)
    Navigate(Screen),
    /// Toggle the preferences row at this index
    TogglePreference(usize),
    SavePreferences,
    ResetPreferences,
    SignOut,
    ClearMatches,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas of the last rendered frame plus the last known pointer position.
///
/// Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Call at the start of each render; the pointer is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.topmost(x, y).map(|area| area.action.clone())
    }

    /// Record the pointer position. Returns true when the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.pointer = Some((x, y));
        before != self.hovered_index()
    }

    /// Hover style for `rect` when it is the hovered area.
    pub fn hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered_index()?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered_index().and_then(|i| self.areas.get(i))
    }

    /// Rect of the draggable card, if one was rendered.
    pub fn card_rect(&self) -> Option<Rect> {
        self.areas
            .iter()
            .find(|a| a.action == ClickAction::DragCard)
            .map(|a| a.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.areas.iter().rposition(|area| area.contains(x, y))
    }

    fn topmost(&self, x: u16, y: u16) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.contains(x, y))
    }
}
