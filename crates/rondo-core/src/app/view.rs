impl<S, IN> CarouselApp<S, IN>
where
    S: ImageSource,
    IN: InputProvider,
{
    pub fn new(images: S, input: IN, mut config: CarouselConfig) -> Self {
        config.auto_play_interval_ms = config.auto_play_interval_ms.max(1);

        Self {
            images,
            input,
            config,
            ui: UiState::Idle { active: 0 },
            next_auto_ms: None,
            pending_redraw: true,
            transition: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.resolve_settle(now_ms);
        self.process_inputs(now_ms);
        self.tick_auto_play(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    /// Currently displayed image index. Always within the sequence for
    /// non-empty galleries.
    pub fn active_index(&self) -> u16 {
        match self.ui {
            UiState::Idle { active } | UiState::Settling { active, .. } => active,
        }
    }

    /// Whether a settle window is in flight.
    pub fn is_locked(&self) -> bool {
        matches!(self.ui, UiState::Settling { .. })
    }

    pub fn image_count(&self) -> u16 {
        self.images.image_count()
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let total = self.images.image_count();
        if total == 0 {
            f(Screen::Empty);
            return;
        }

        let index = self.active_index().min(total - 1);
        let (Some(active), Some(previous), Some(next)) = (
            self.images.image_at(index),
            self.images.image_at(wrap_backward(index, total)),
            self.images.image_at(wrap_forward(index, total)),
        ) else {
            f(Screen::Empty);
            return;
        };

        f(Screen::Gallery {
            active,
            previous,
            next,
            index,
            total,
            locked: self.is_locked(),
            animation: self.transition_frame(now_ms),
        });
    }
}

fn wrap_forward(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn wrap_backward(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
