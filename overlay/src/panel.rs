//! Document panel core: the card list, selection, file type and gestures.
//!
//! `PanelCore` is the single owner of viewer state. The client keeps one in
//! a signal and calls these operations from DOM event handlers; every
//! mutation happens synchronously on the UI thread. Operations that change
//! what is on screen return [`Action`]s so the host can log or react to them.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::Serialize;

use crate::card::{Bounds, CardId, OverlayCard, resize_bounds};
use crate::document::{DocumentSources, FileType, ViewerConfig, ViewerHeight};
use crate::geom::Point;
use crate::input::{CardPart, InputState};
use crate::shape::ShapeKind;

/// Errors from panel operations. State is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("shape index {index} out of range for {len} shapes")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no card with id {0}")]
    UnknownCard(CardId),
}

/// Changes reported back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CardMoved { id: CardId, x: f64, y: f64 },
    CardResized { id: CardId, x: f64, y: f64, width: f64, height: f64 },
    DragStarted { id: CardId },
    DragStopped { id: CardId },
    ResizeStarted { id: CardId },
    ResizeStopped { id: CardId },
    SelectionChanged { index: Option<usize> },
    DocumentChanged { file_type: FileType, uri: String },
    ShapesCleared,
}

/// All state behind the document viewer page.
#[derive(Debug, Clone)]
pub struct PanelCore {
    sources: DocumentSources,
    config: ViewerConfig,
    file_type: FileType,
    viewer_height: ViewerHeight,
    /// Height from the first PDF measurement; reused on later PDF displays.
    pdf_height: Option<ViewerHeight>,
    cards: Vec<OverlayCard>,
    selected: Option<usize>,
    input: InputState,
}

impl Default for PanelCore {
    fn default() -> Self {
        Self::new(DocumentSources::default())
    }
}

impl PanelCore {
    #[must_use]
    pub fn new(sources: DocumentSources) -> Self {
        Self {
            sources,
            config: ViewerConfig::default(),
            file_type: FileType::default(),
            viewer_height: ViewerHeight::default(),
            pdf_height: None,
            cards: Vec::new(),
            selected: None,
            input: InputState::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        self.config = config;
        self
    }

    // --- Document ---

    /// Switch between PDF and spreadsheet. Always clears the shape list,
    /// the selection and any gesture in progress.
    ///
    /// The viewer height switches with the document: the spreadsheet share of
    /// the viewport, or the PDF height measured earlier.
    pub fn toggle_file_type(&mut self) -> Vec<Action> {
        self.file_type = self.file_type.toggled();
        self.viewer_height = match self.file_type {
            FileType::Pdf => self.pdf_height.unwrap_or_default(),
            FileType::Xlsx => ViewerHeight::from_measurement(FileType::Xlsx, 0.0),
        };
        self.cards.clear();
        self.selected = None;
        self.input = InputState::Idle;
        vec![
            Action::DocumentChanged { file_type: self.file_type, uri: self.current_uri().to_owned() },
            Action::ShapesCleared,
        ]
    }

    /// Store the display height derived from the rendered document's
    /// scroll height.
    ///
    /// Only the first PDF measurement counts. Later ones read back the
    /// container this core already sized, so they are ignored.
    pub fn apply_measured_height(&mut self, scroll_height: f64) -> ViewerHeight {
        self.viewer_height = match (self.file_type, self.pdf_height) {
            (FileType::Pdf, Some(kept)) => kept,
            (FileType::Pdf, None) => {
                let measured = ViewerHeight::from_measurement(FileType::Pdf, scroll_height);
                self.pdf_height = Some(measured);
                measured
            }
            (FileType::Xlsx, _) => ViewerHeight::from_measurement(FileType::Xlsx, scroll_height),
        };
        self.viewer_height
    }

    // --- Shapes ---

    /// Append a default card of `kind` and return its id.
    pub fn add_shape(&mut self, kind: ShapeKind) -> CardId {
        let card = OverlayCard::new(kind);
        let id = card.id;
        self.cards.push(card);
        id
    }

    /// Remove the card at `index` and clear the selection.
    ///
    /// # Errors
    ///
    /// [`PanelError::IndexOutOfRange`] when `index` is past the end.
    pub fn remove_shape(&mut self, index: usize) -> Result<OverlayCard, PanelError> {
        self.check_index(index)?;
        let card = self.cards.remove(index);
        if self.input.target() == Some(card.id) {
            self.input = InputState::Idle;
        }
        self.selected = None;
        Ok(card)
    }

    /// Remove a card by id.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnknownCard`] when no card has `id`.
    pub fn remove_card(&mut self, id: CardId) -> Result<OverlayCard, PanelError> {
        let index = self.index_of(id).ok_or(PanelError::UnknownCard(id))?;
        self.remove_shape(index)
    }

    /// Select the card at `index`.
    ///
    /// # Errors
    ///
    /// [`PanelError::IndexOutOfRange`] when `index` is past the end.
    pub fn select_shape(&mut self, index: usize) -> Result<(), PanelError> {
        self.check_index(index)?;
        self.selected = Some(index);
        Ok(())
    }

    /// Select a card by id without starting a gesture.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnknownCard`] when no card has `id`.
    pub fn select_card(&mut self, id: CardId) -> Result<Vec<Action>, PanelError> {
        let index = self.index_of(id).ok_or(PanelError::UnknownCard(id))?;
        if self.selected == Some(index) {
            return Ok(Vec::new());
        }
        self.selected = Some(index);
        Ok(vec![Action::SelectionChanged { index: Some(index) }])
    }

    /// Replace one card's text. Free text is always accepted.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnknownCard`] when no card has `id`.
    pub fn set_text(&mut self, id: CardId, text: String) -> Result<(), PanelError> {
        self.card_mut(id)?.text = text;
        Ok(())
    }

    /// Change one card's shape in place.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnknownCard`] when no card has `id`.
    pub fn change_shape(&mut self, id: CardId, kind: ShapeKind) -> Result<(), PanelError> {
        self.card_mut(id)?.kind = kind;
        Ok(())
    }

    // --- Gestures ---

    /// Start a drag or resize on a card and select it.
    ///
    /// Any gesture already in progress is ended first.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnknownCard`] when no card has `id`.
    pub fn on_pointer_down(&mut self, id: CardId, part: CardPart, point: Point) -> Result<Vec<Action>, PanelError> {
        let index = self.index_of(id).ok_or(PanelError::UnknownCard(id))?;
        let mut actions = self.end_gesture();
        actions.extend(self.select_card(id)?);

        let card = &mut self.cards[index];
        match part {
            CardPart::Body => {
                card.dragging = true;
                self.input = InputState::DraggingCard { id, start: point, orig_x: card.x, orig_y: card.y };
                actions.push(Action::DragStarted { id });
            }
            CardPart::Handle(anchor) => {
                self.input = InputState::ResizingCard {
                    id,
                    anchor,
                    start: point,
                    orig_x: card.x,
                    orig_y: card.y,
                    orig_w: card.width,
                    orig_h: card.height,
                };
                actions.push(Action::ResizeStarted { id });
            }
        }
        Ok(actions)
    }

    /// Update the card under the active gesture. No-op when idle.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::DraggingCard { id, start, orig_x, orig_y } => {
                let (dx, dy) = point.delta_from(start);
                let Ok(card) = self.card_mut(id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                card.x = orig_x + dx;
                card.y = orig_y + dy;
                vec![Action::CardMoved { id, x: card.x, y: card.y }]
            }
            InputState::ResizingCard { id, anchor, start, orig_x, orig_y, orig_w, orig_h } => {
                let (dx, dy) = point.delta_from(start);
                let Ok(card) = self.card_mut(id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                let orig = Bounds { x: orig_x, y: orig_y, width: orig_w, height: orig_h };
                let b = resize_bounds(orig, anchor, dx, dy);
                card.set_bounds(b);
                vec![Action::CardResized { id, x: b.x, y: b.y, width: b.width, height: b.height }]
            }
        }
    }

    /// Apply the final pointer position and end the active gesture.
    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        let mut actions = self.on_pointer_move(point);
        actions.extend(self.end_gesture());
        actions
    }

    /// End the active gesture without applying further movement.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::DraggingCard { id, .. } => {
                if let Ok(card) = self.card_mut(id) {
                    card.dragging = false;
                }
                vec![Action::DragStopped { id }]
            }
            InputState::ResizingCard { id, .. } => vec![Action::ResizeStopped { id }],
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    #[must_use]
    pub fn viewer_height(&self) -> ViewerHeight {
        self.viewer_height
    }

    #[must_use]
    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    /// URI of the document for the current file type.
    #[must_use]
    pub fn current_uri(&self) -> &str {
        self.sources.uri_for(self.file_type)
    }

    #[must_use]
    pub fn cards(&self) -> &[OverlayCard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&OverlayCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Index of the selected card, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&OverlayCard> {
        self.selected.and_then(|i| self.cards.get(i))
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // --- Helpers ---

    fn check_index(&self, index: usize) -> Result<(), PanelError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(PanelError::IndexOutOfRange { index, len: self.cards.len() })
        }
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut OverlayCard, PanelError> {
        self.cards.iter_mut().find(|c| c.id == id).ok_or(PanelError::UnknownCard(id))
    }
}
