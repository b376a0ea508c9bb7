use quire_render_core::DrawingSurface;
use quire_skeleton::Page;

/// Handle returned by [`PageRenderObservable::add`], used to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Emitted once per page, before the page is painted.
pub struct PageRenderEvent<'a> {
    pub page: &'a Page,
    pub page_index: usize,
    /// Accumulated offset of the page origin within the component.
    pub page_left: f64,
    pub page_top: f64,
    pub surface: &'a mut dyn DrawingSurface,
}

type PageObserver = Box<dyn FnMut(&mut PageRenderEvent<'_>)>;

/// Synchronous "page rendered" notification.
///
/// Subscribers only see pages painted after they attached; there is no replay.
#[derive(Default)]
pub struct PageRenderObservable {
    observers: Vec<(ObserverId, PageObserver)>,
    next_id: u64,
}

impl PageRenderObservable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: impl FnMut(&mut PageRenderEvent<'_>) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detaches an observer. Returns false if it was not attached.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer in attachment order.
    pub fn notify(&mut self, event: &mut PageRenderEvent<'_>) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

impl std::fmt::Debug for PageRenderObservable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderObservable")
            .field("observers", &self.observers.len())
            .finish()
    }
}
