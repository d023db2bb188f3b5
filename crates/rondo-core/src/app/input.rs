impl<S, IN> CarouselApp<S, IN>
where
    S: ImageSource,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("carousel: input provider failed, dropping poll for this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Next => self.advance(now_ms),
            InputEvent::Prev => self.retreat(now_ms),
            InputEvent::Goto(index) => self.goto_index(index, now_ms),
        }
    }

    /// Manual step forward. Re-arms autoplay before the move so a user
    /// action always buys a full interval of quiet time, whether or not
    /// the move itself is accepted.
    pub fn advance(&mut self, now_ms: u64) {
        self.reset_auto_play(now_ms);
        self.step_forward(now_ms);
    }

    /// Manual step backward; see [`CarouselApp::advance`].
    pub fn retreat(&mut self, now_ms: u64) {
        self.reset_auto_play(now_ms);
        self.step_backward(now_ms);
    }

    /// Manual jump. Ignored while settling, for the active index, and
    /// for out-of-range targets.
    pub fn goto_index(&mut self, index: u16, now_ms: u64) {
        self.reset_auto_play(now_ms);

        let total = self.images.image_count();
        if total == 0 || index >= total {
            debug!("carousel: goto ignored, index={} total={}", index, total);
            return;
        }

        let active = match self.ui {
            UiState::Idle { active } => active,
            UiState::Settling { .. } => {
                debug!("carousel: goto ignored while settling, index={}", index);
                return;
            }
        };

        if index == active {
            return;
        }

        self.begin_settle(index, AnimationKind::CircleOpen, now_ms);
    }

    fn step_forward(&mut self, now_ms: u64) {
        let total = self.images.image_count();
        if total == 0 {
            return;
        }

        let active = match self.ui {
            UiState::Idle { active } => active,
            UiState::Settling { .. } => {
                debug!("carousel: advance ignored while settling");
                return;
            }
        };

        self.begin_settle(wrap_forward(active, total), AnimationKind::SlideLeft, now_ms);
    }

    fn step_backward(&mut self, now_ms: u64) {
        let total = self.images.image_count();
        if total == 0 {
            return;
        }

        let active = match self.ui {
            UiState::Idle { active } => active,
            UiState::Settling { .. } => {
                debug!("carousel: retreat ignored while settling");
                return;
            }
        };

        self.begin_settle(
            wrap_backward(active, total),
            AnimationKind::SlideRight,
            now_ms,
        );
    }
}
