//! Edge detection over per-frame held-state.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Actions fired in one frame, in [`GameAction::ALL`] order.
pub type ActionSet = ArrayVec<GameAction, { GameAction::COUNT }>;

/// Remembers which actions were held on the previous frame and reports only the
/// ones that have just become held.
#[derive(Debug, Clone, Default)]
pub struct ActionLatch {
    prev: [bool; GameAction::COUNT],
}

impl ActionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's held-state (indexed by [`GameAction::index`]) and get
    /// back the rising edges. An action flagged in `pressed` went down again
    /// since the last frame, so it fires even if it was held then.
    pub fn latch(
        &mut self,
        held: &[bool; GameAction::COUNT],
        pressed: &[bool; GameAction::COUNT],
    ) -> ActionSet {
        let mut fired = ActionSet::new();
        for action in GameAction::ALL {
            let i = action.index();
            if held[i] && (!self.prev[i] || pressed[i]) {
                fired.push(action);
            }
        }
        self.prev = *held;
        fired
    }

    /// Forget the previous frame, so anything currently held fires again.
    pub fn reset(&mut self) {
        self.prev = [false; GameAction::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [bool; GameAction::COUNT] = [false; GameAction::COUNT];

    fn held(actions: &[GameAction]) -> [bool; GameAction::COUNT] {
        let mut out = NONE;
        for a in actions {
            out[a.index()] = true;
        }
        out
    }

    #[test]
    fn test_fires_once_per_press() {
        let mut latch = ActionLatch::new();

        let fired = latch.latch(&held(&[GameAction::MoveLeft]), &NONE);
        assert_eq!(fired.as_slice(), &[GameAction::MoveLeft]);

        // Still held: nothing new.
        for _ in 0..10 {
            assert!(latch.latch(&held(&[GameAction::MoveLeft]), &NONE).is_empty());
        }

        // Released, then pressed again.
        assert!(latch.latch(&held(&[]), &NONE).is_empty());
        let fired = latch.latch(&held(&[GameAction::MoveLeft]), &NONE);
        assert_eq!(fired.as_slice(), &[GameAction::MoveLeft]);
    }

    #[test]
    fn test_simultaneous_presses_in_action_order() {
        let mut latch = ActionLatch::new();
        let fired = latch.latch(&held(&[GameAction::Rotate, GameAction::MoveRight]), &NONE);
        assert_eq!(fired.as_slice(), &[GameAction::MoveRight, GameAction::Rotate]);

        // Adding a key while another is held only reports the new one.
        let fired = latch.latch(
            &held(&[GameAction::Rotate, GameAction::MoveRight, GameAction::HardDrop]),
            &NONE,
        );
        assert_eq!(fired.as_slice(), &[GameAction::HardDrop]);
    }

    #[test]
    fn test_reset_refires_held_keys() {
        let mut latch = ActionLatch::new();
        latch.latch(&held(&[GameAction::SoftDrop]), &NONE);
        latch.reset();
        let fired = latch.latch(&held(&[GameAction::SoftDrop]), &NONE);
        assert_eq!(fired.as_slice(), &[GameAction::SoftDrop]);
    }

    #[test]
    fn test_new_press_fires_while_still_held() {
        let mut latch = ActionLatch::new();
        latch.latch(&held(&[GameAction::MoveLeft, GameAction::Rotate]), &NONE);

        let fired = latch.latch(
            &held(&[GameAction::MoveLeft, GameAction::Rotate]),
            &held(&[GameAction::MoveLeft]),
        );
        assert_eq!(fired.as_slice(), &[GameAction::MoveLeft]);

        // Held on without a new press.
        assert!(latch
            .latch(&held(&[GameAction::MoveLeft, GameAction::Rotate]), &NONE)
            .is_empty());
    }
}
