/// Logical input seen by the simulation.  How physical keys map onto these is
/// the host's business.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Jump,
    Restart,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 4] = [
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Jump,
        LogicalKey::Restart,
    ];

    fn index(self) -> usize {
        match self {
            LogicalKey::Left => 0,
            LogicalKey::Right => 1,
            LogicalKey::Jump => 2,
            LogicalKey::Restart => 3,
        }
    }
}

pub trait InputSource {
    fn is_held(&self, key: LogicalKey) -> bool;
}

/// A sampled snapshot of which logical keys are down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style press, handy in tests.
    pub fn with(mut self, key: LogicalKey) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.held[key.index()] = true;
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, key: LogicalKey) -> bool {
        self.held[key.index()]
    }
}
