use crate::controller::{ControllerCore, MoveOutcome};
use crate::systems::TimerToken;

use super::page::PageView;
use super::probe::DomProbe;
use super::scheduler::WindowScheduler;

pub(crate) type DomController = ControllerCore<DomProbe, WindowScheduler>;

/// Controller plus the page it draws on
pub(crate) struct Session {
    pub(crate) controller: DomController,
    pub(crate) page: PageView,
}

impl Session {
    pub(crate) fn key_down(&mut self, key: &str) -> MoveOutcome {
        let outcome = self.controller.handle_key_name(key);
        if outcome != MoveOutcome::Ignored {
            self.render();
        }
        outcome
    }

    pub(crate) fn pointer_moved(&mut self, x: f64, y: f64) {
        self.controller.pointer_moved(x, y);
        self.render();
    }

    pub(crate) fn idle_elapsed(&mut self, token: TimerToken) {
        if self.controller.idle_elapsed(token) {
            self.render();
        }
    }

    pub(crate) fn render(&self) {
        if let Err(err) = self.page.render(&self.controller.snapshot()) {
            log::warn!("render failed: {:?}", err);
        }
    }

    pub(crate) fn teardown(&mut self) {
        self.controller.teardown();
        self.page.unmount();
    }
}
