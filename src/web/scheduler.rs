use std::rc::Rc;

use gloo::timers::callback::Timeout;

use crate::systems::{IdleScheduler, TimerToken};

/// `Timeout`-backed idle timer. Keeps at most one timeout alive; dropping a
/// `Timeout` cancels it.
pub(crate) struct WindowScheduler {
    next_token: u32,
    on_fire: Rc<dyn Fn(TimerToken)>,
    pending: Option<(TimerToken, Timeout)>,
}

impl WindowScheduler {
    pub(crate) fn new(on_fire: Rc<dyn Fn(TimerToken)>) -> Self {
        Self {
            next_token: 0,
            on_fire,
            pending: None,
        }
    }
}

impl IdleScheduler for WindowScheduler {
    fn schedule(&mut self, delay_ms: u32) -> TimerToken {
        self.pending.take();

        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken(self.next_token);

        let on_fire = self.on_fire.clone();
        self.pending = Some((token, Timeout::new(delay_ms, move || on_fire(token))));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if matches!(self.pending, Some((pending, _)) if pending == token) {
            self.pending.take();
        }
    }
}
