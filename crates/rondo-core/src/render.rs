//! View models and animation metadata consumed by presentation surfaces.

use crate::gallery::GalleryImage;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// Forward navigation; new image enters from the right.
    SlideLeft,
    /// Backward navigation; new image enters from the left.
    SlideRight,
    /// Direct jump; new image revealed in place.
    CircleOpen,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Carousel view model. Only the active image and its two neighbors are
/// visible at any time; surfaces decide how to draw them.
pub enum Screen<'a> {
    /// Nothing to show: zero images and no fallback configured.
    Empty,
    Gallery {
        active: GalleryImage<'a>,
        previous: GalleryImage<'a>,
        next: GalleryImage<'a>,
        index: u16,
        total: u16,
        /// A settle window is in flight; navigation is rejected.
        locked: bool,
        animation: Option<AnimationFrame>,
    },
}
