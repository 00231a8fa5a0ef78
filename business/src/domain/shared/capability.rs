/// Lifecycle of a capability handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    Unconfigured,
    Active,
    Stopped,
}

/// Exclusive owner of at most one live vendor client.
///
/// The adapter that holds the slot is the only writer; `install` is called by
/// `configure`/`initialize` and `release` by `stop`/`sign_out`.
#[derive(Debug)]
pub struct ClientSlot<C> {
    state: SlotState<C>,
}

#[derive(Debug)]
enum SlotState<C> {
    Unconfigured,
    Active(C),
    Stopped,
}

impl<C> ClientSlot<C> {
    pub fn new() -> Self {
        Self {
            state: SlotState::Unconfigured,
        }
    }

    /// Stores a new client and hands back the one it replaces, if any.
    pub fn install(&mut self, client: C) -> Option<C> {
        match std::mem::replace(&mut self.state, SlotState::Active(client)) {
            SlotState::Active(previous) => Some(previous),
            _ => None,
        }
    }

    /// Takes the live client out. A slot that never held one stays unconfigured.
    pub fn release(&mut self) -> Option<C> {
        match std::mem::replace(&mut self.state, SlotState::Stopped) {
            SlotState::Active(client) => Some(client),
            SlotState::Unconfigured => {
                self.state = SlotState::Unconfigured;
                None
            }
            SlotState::Stopped => None,
        }
    }

    pub fn active(&self) -> Option<&C> {
        match &self.state {
            SlotState::Active(client) => Some(client),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SlotState::Active(_))
    }

    pub fn state(&self) -> CapabilityState {
        match self.state {
            SlotState::Unconfigured => CapabilityState::Unconfigured,
            SlotState::Active(_) => CapabilityState::Active,
            SlotState::Stopped => CapabilityState::Stopped,
        }
    }
}

impl<C> Default for ClientSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}
