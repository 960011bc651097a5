//! Fire-once deferred callbacks for the idle (debounce) timer.
//!
//! A scheduler only hands out tokens. When a timer fires, the host calls
//! `ControllerCore::idle_elapsed` with that token; the controller ignores
//! any token that is not the one it is currently waiting for.

/// Opaque id of one scheduled callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u32);

pub trait IdleScheduler {
    /// Arrange for the host to report `token` back after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32) -> TimerToken;

    /// Cancel a pending callback. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Virtual-clock scheduler: time only moves when `advance` is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_token: u32,
    pending: Vec<(TimerToken, u64)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the tokens that came due, in deadline order.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerToken> {
        self.now_ms += ms;
        let now = self.now_ms;

        let mut due: Vec<(TimerToken, u64)> = Vec::new();
        self.pending.retain(|&(token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(token, _)| token).collect()
    }
}

impl IdleScheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32) -> TimerToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken(self.next_token);
        self.pending.push((token, self.now_ms + delay_ms as u64));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|&(t, _)| t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_once_deadline_reached() {
        let mut s = ManualScheduler::new();
        let t = s.schedule(150);
        assert!(s.advance(149).is_empty());
        assert_eq!(s.advance(1), vec![t]);
        assert_eq!(s.now_ms(), 150);
        assert!(s.advance(1000).is_empty());
        assert_eq!(s.now_ms(), 1150);
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut s = ManualScheduler::new();
        let a = s.schedule(100);
        let b = s.schedule(200);
        s.cancel(a);
        assert_eq!(s.pending_count(), 1);
        assert_eq!(s.advance(300), vec![b]);
    }
}
