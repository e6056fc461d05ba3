//! Zoom change notifications.

/// Payload of a zoom notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomChange {
    /// Realized scale multiplier.
    pub multiplier: f64,
    /// Integer step nearest to `multiplier`.
    pub step: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn from_u32(id: u32) -> Self {
        Self(id)
    }
}

type Listener = Box<dyn FnMut(ZoomChange)>;

/// Ordered list of zoom subscribers.
#[derive(Default)]
pub struct ZoomListeners {
    next_id: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ZoomListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(ZoomChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, change: ZoomChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl std::fmt::Debug for ZoomListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
