/// Physical key tracking for the terminal front-end.
///
/// Instead of acting on each key event, we record the instant of the last
/// press/repeat for every key and treat a key as held while that stamp is
/// fresh.  This lets Jump + Left/Right be held together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper `Release`
///   events remove keys immediately.
/// * **Classic terminals**: only `Press` events, with OS key-repeat showing up
///   as repeated presses.  Keys expire after `HOLD_WINDOW` of silence.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tile_dash::input::{HeldKeys, LogicalKey};

/// Long enough to bridge the gap between OS key-repeat events.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Host-level actions that bypass the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
}

fn bindings(key: LogicalKey) -> &'static [KeyCode] {
    match key {
        LogicalKey::Left => &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
        LogicalKey::Right => &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
        LogicalKey::Jump => &[
            KeyCode::Up,
            KeyCode::Char('w'),
            KeyCode::Char('W'),
            KeyCode::Char(' '),
        ],
        LogicalKey::Restart => &[KeyCode::Char('r'), KeyCode::Char('R'), KeyCode::Enter],
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, Instant>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event in.  Returns a host command for quit keys.
    pub fn handle(&mut self, event: KeyEvent, now: Instant) -> Option<HostCommand> {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = event;
        match kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Some(HostCommand::Quit);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Some(HostCommand::Quit);
                    }
                    _ => {}
                }
                self.last_seen.insert(code, now);
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(code, now);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
        None
    }

    fn is_fresh(&self, code: &KeyCode, now: Instant) -> bool {
        self.last_seen
            .get(code)
            .map(|&t| now.saturating_duration_since(t) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Snapshot of the logical keys held at `now`.
    pub fn sample(&self, now: Instant) -> HeldKeys {
        let mut held = HeldKeys::none();
        for key in LogicalKey::ALL {
            if bindings(key).iter().any(|code| self.is_fresh(code, now)) {
                held.press(key);
            }
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_dash::input::InputSource;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_expire_without_repeats() {
        let mut keys = KeyTracker::new();
        let t0 = Instant::now();
        assert_eq!(keys.handle(press(KeyCode::Right), t0), None);
        keys.handle(press(KeyCode::Char(' ')), t0);

        let held = keys.sample(t0 + Duration::from_millis(100));
        assert!(held.is_held(LogicalKey::Right));
        assert!(held.is_held(LogicalKey::Jump));
        assert!(!held.is_held(LogicalKey::Left));

        let later = keys.sample(t0 + Duration::from_millis(400));
        assert_eq!(later, HeldKeys::none());
    }

    #[test]
    fn release_drops_the_key_immediately() {
        let mut keys = KeyTracker::new();
        let t0 = Instant::now();
        keys.handle(press(KeyCode::Char('a')), t0);
        let mut release = press(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        keys.handle(release, t0);
        assert!(!keys.sample(t0).is_held(LogicalKey::Left));
    }

    #[test]
    fn quit_keys_become_host_commands() {
        let mut keys = KeyTracker::new();
        let now = Instant::now();
        assert_eq!(keys.handle(press(KeyCode::Esc), now), Some(HostCommand::Quit));
        assert_eq!(keys.handle(press(KeyCode::Char('q')), now), Some(HostCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.handle(ctrl_c, now), Some(HostCommand::Quit));
        assert_eq!(keys.sample(now), HeldKeys::none());
    }
}
