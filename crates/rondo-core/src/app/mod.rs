//! Carousel state machine: active index, settle lock, autoplay deadline.

use log::{debug, warn};

use crate::{
    gallery::ImageSource,
    input::{InputEvent, InputProvider},
    render::{AnimationFrame, AnimationKind, AnimationSpec, Screen},
};

/// Lock window after an accepted transition. Matches the length of the
/// visual transition on the presentation side.
const SETTLE_MS: u64 = 600;

const DEFAULT_AUTO_PLAY_INTERVAL_MS: u32 = 4_500;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Construction-time carousel options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    pub auto_play: bool,
    pub auto_play_interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Idle {
        active: u16,
    },
    /// A transition is in flight; index changes are rejected until the
    /// deadline passes.
    Settling {
        active: u16,
        settle_until_ms: u64,
    },
}

pub struct CarouselApp<S, IN>
where
    S: ImageSource,
    IN: InputProvider,
{
    images: S,
    input: IN,
    config: CarouselConfig,
    ui: UiState,
    /// Next automatic advance. `None` until the first tick arms it, or
    /// when autoplay is disabled. At most one deadline exists at a time.
    next_auto_ms: Option<u64>,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
