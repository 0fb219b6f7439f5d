use notebridge_types::{DisplayBundle, DisplayHandle};

/// Display-sink collaborator: the destination for rendered bundles.
///
/// Channels arrive raw and must be passed through without reinterpretation;
/// in particular the sink must not re-escape the rich channel. No
/// acknowledgement is consumed by the caller.
pub trait DisplaySink {
    /// Publish a bundle as a new visible display entry.
    fn publish(&mut self, bundle: DisplayBundle);

    /// Replace the content of an existing display slot in place.
    fn update(&mut self, handle: &DisplayHandle, bundle: DisplayBundle);
}

/// In-memory sink recording every call, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    published: Vec<DisplayBundle>,
    updates: Vec<(DisplayHandle, DisplayBundle)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles published as new entries, in call order.
    pub fn published(&self) -> &[DisplayBundle] {
        &self.published
    }

    /// In-place updates, in call order.
    pub fn updates(&self) -> &[(DisplayHandle, DisplayBundle)] {
        &self.updates
    }

    /// Total number of sink calls observed.
    pub fn call_count(&self) -> usize {
        self.published.len() + self.updates.len()
    }
}

impl DisplaySink for MemorySink {
    fn publish(&mut self, bundle: DisplayBundle) {
        self.published.push(bundle);
    }

    fn update(&mut self, handle: &DisplayHandle, bundle: DisplayBundle) {
        self.updates.push((handle.clone(), bundle));
    }
}

// Shared-ownership sinks, so a caller can keep inspecting a sink it has
// handed to a multiplexer. The core is single-threaded by contract, hence
// Rc rather than Arc.
impl<S: DisplaySink> DisplaySink for std::rc::Rc<std::cell::RefCell<S>> {
    fn publish(&mut self, bundle: DisplayBundle) {
        self.borrow_mut().publish(bundle);
    }

    fn update(&mut self, handle: &DisplayHandle, bundle: DisplayBundle) {
        self.borrow_mut().update(handle, bundle);
    }
}
