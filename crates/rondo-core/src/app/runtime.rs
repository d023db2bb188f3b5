impl<S, IN> CarouselApp<S, IN>
where
    S: ImageSource,
    IN: InputProvider,
{
    /// Settle expiry always unlocks, no matter how many operations were
    /// rejected during the window.
    fn resolve_settle(&mut self, now_ms: u64) {
        if let UiState::Settling {
            active,
            settle_until_ms,
        } = self.ui
            && now_ms >= settle_until_ms
        {
            self.ui = UiState::Idle { active };
            self.pending_redraw = true;
        }
    }

    /// Fires an automatic advance once per interval. An advance landing
    /// inside a settle window is absorbed by the debounce; the next
    /// attempt happens a full interval later.
    fn tick_auto_play(&mut self, now_ms: u64) {
        if !self.config.auto_play || self.images.image_count() == 0 {
            return;
        }

        let interval = self.config.auto_play_interval_ms as u64;
        let deadline = *self.next_auto_ms.get_or_insert(now_ms + interval);
        if now_ms < deadline {
            return;
        }

        self.next_auto_ms = Some(now_ms + interval);
        debug!("carousel: autoplay advance at t={}", now_ms);
        self.step_forward(now_ms);
    }

    /// Replaces any pending automatic advance with a fresh full-interval
    /// deadline. Called on every manual interaction.
    fn reset_auto_play(&mut self, now_ms: u64) {
        self.next_auto_ms = if self.config.auto_play {
            Some(now_ms + self.config.auto_play_interval_ms as u64)
        } else {
            None
        };
    }

    fn begin_settle(&mut self, target: u16, kind: AnimationKind, now_ms: u64) {
        debug!(
            "carousel: move {} -> {} at t={}",
            self.active_index(),
            target,
            now_ms
        );
        self.ui = UiState::Settling {
            active: target,
            settle_until_ms: now_ms + SETTLE_MS,
        };
        self.transition = Some(AnimationSpec::new(kind, now_ms, SETTLE_MS as u16));
        self.pending_redraw = true;
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }
}
