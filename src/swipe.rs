//! Swipe-to-reveal gesture state machine.
//!
//! A row's card rests on one of three anchors: closed, moved right by the
//! action width `W` (revealing the edit icon on the left), or moved left by
//! `W` (revealing the delete icon on the right). Pointer drags move the card
//! 1:1 within `[-W, +W]`; on release the card settles onto an anchor by the
//! threshold rule in [`resolve_anchor`] and animates there on ticks.

use crate::config::SwipeConfig;
use crate::constants::{DEFAULT_SETTLE_STEP, DEFAULT_SWIPE_THRESHOLD};

/// One of the fixed snap positions of a row's card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Closed,
    RevealedRight,
    RevealedLeft,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Closed, Anchor::RevealedRight, Anchor::RevealedLeft];

    /// Numeric anchor value (0 closed, 1 revealed right, 2 revealed left)
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Anchor::Closed => 0,
            Anchor::RevealedRight => 1,
            Anchor::RevealedLeft => 2,
        }
    }

    /// Card offset in columns for an action width `width`
    #[must_use]
    pub fn offset(self, width: f32) -> f32 {
        match self {
            Anchor::Closed => 0.0,
            Anchor::RevealedRight => width,
            Anchor::RevealedLeft => -width,
        }
    }

    /// The neighbouring anchor in a direction, if there is one
    #[must_use]
    pub fn adjacent(self, direction: SwipeDirection) -> Option<Anchor> {
        match (self, direction) {
            (Anchor::RevealedLeft, SwipeDirection::Right) => Some(Anchor::Closed),
            (Anchor::Closed, SwipeDirection::Right) => Some(Anchor::RevealedRight),
            (Anchor::RevealedRight, SwipeDirection::Left) => Some(Anchor::Closed),
            (Anchor::Closed, SwipeDirection::Left) => Some(Anchor::RevealedLeft),
            _ => None,
        }
    }
}

/// Horizontal drag direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Observable state of the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Closed,
    DraggingFrom(Anchor),
    RevealedRight,
    RevealedLeft,
}

/// Pick the anchor a released drag settles on.
///
/// `displacement` is measured from the offset of `start`. Moving further than
/// `threshold * width` selects the adjacent anchor in that direction; anything
/// shorter, or a move past the last anchor, keeps `start`.
#[must_use]
pub fn resolve_anchor(start: Anchor, displacement: f32, width: f32, threshold: f32) -> Anchor {
    let limit = threshold * width;
    let direction = if displacement > limit {
        SwipeDirection::Right
    } else if displacement < -limit {
        SwipeDirection::Left
    } else {
        return start;
    };

    start.adjacent(direction).unwrap_or(start)
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    origin: f32,
    from: Anchor,
}

/// Per-row swipe state
#[derive(Debug, Clone)]
pub struct SwipeState {
    offset: f32,
    anchor: Anchor,
    drag: Option<Drag>,
    width: f32,
    threshold: f32,
    settle_step: f32,
}

impl SwipeState {
    /// A closed row with the default threshold and animation speed
    pub fn new(width: f32) -> Self {
        Self {
            offset: 0.0,
            anchor: Anchor::Closed,
            drag: None,
            width: width.max(0.0),
            threshold: DEFAULT_SWIPE_THRESHOLD,
            settle_step: DEFAULT_SETTLE_STEP,
        }
    }

    pub fn from_config(config: &SwipeConfig) -> Self {
        Self::new(f32::from(config.action_width))
            .with_threshold(config.threshold)
            .with_settle_step(config.settle_step)
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_settle_step(mut self, settle_step: f32) -> Self {
        self.settle_step = settle_step;
        self
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the card is still travelling to its settled anchor
    pub fn is_animating(&self) -> bool {
        self.drag.is_none() && self.offset != self.anchor.offset(self.width)
    }

    pub fn phase(&self) -> SwipePhase {
        match (self.drag, self.anchor) {
            (Some(drag), _) => SwipePhase::DraggingFrom(drag.from),
            (None, Anchor::Closed) => SwipePhase::Closed,
            (None, Anchor::RevealedRight) => SwipePhase::RevealedRight,
            (None, Anchor::RevealedLeft) => SwipePhase::RevealedLeft,
        }
    }

    /// Begin a drag from wherever the card currently is
    pub fn drag_start(&mut self) {
        if self.drag.is_some() {
            log::debug!("swipe: drag restarted, discarding in-flight deltas");
        }
        self.drag = Some(Drag {
            origin: self.offset,
            from: self.anchor,
        });
    }

    /// Track the pointer; `cumulative_delta` is measured from the drag start
    pub fn drag_move(&mut self, cumulative_delta: f32) {
        if let Some(drag) = self.drag {
            self.offset = self.clamp(drag.origin + cumulative_delta);
        }
    }

    /// Release the drag and settle onto an anchor
    pub fn drag_end(&mut self) -> Anchor {
        let Some(drag) = self.drag.take() else {
            return self.anchor;
        };

        let displacement = self.offset - drag.from.offset(self.width);
        self.anchor = resolve_anchor(drag.from, displacement, self.width, self.threshold);
        log::debug!(
            "swipe: released at {:.1} from {:?}, settling on {:?}",
            self.offset,
            drag.from,
            self.anchor
        );
        self.anchor
    }

    /// Drop an in-flight drag without settling differently
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("swipe: drag cancelled, returning to {:?}", self.anchor);
        }
    }

    /// Full-width drag in one direction, as a keyboard swipe.
    ///
    /// The card does not jump; it glides to the resolved anchor on ticks.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Anchor {
        let origin = self.offset;
        self.drag_start();
        self.drag_move(direction.sign() * self.width);
        let anchor = self.drag_end();
        self.offset = origin;
        anchor
    }

    /// Settle on an anchor without a gesture; the card animates there
    pub fn settle_to(&mut self, anchor: Anchor) {
        self.drag = None;
        self.anchor = anchor;
    }

    /// Animate back to closed
    pub fn reset(&mut self) {
        self.settle_to(Anchor::Closed);
    }

    /// Advance the settle animation one step; returns whether the card moved
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }

        let target = self.anchor.offset(self.width);
        let remaining = target - self.offset;
        if remaining.abs() <= self.settle_step {
            self.offset = target;
        } else {
            self.offset = self.clamp(self.offset + self.settle_step * remaining.signum());
        }
        true
    }

    /// Jump straight to the settled anchor
    pub fn finish_animation(&mut self) {
        if self.drag.is_none() {
            self.offset = self.anchor.offset(self.width);
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(-self.width, self.width)
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::from_config(&SwipeConfig::default())
    }
}
