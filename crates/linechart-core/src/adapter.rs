// File: crates/linechart-core/src/adapter.rs
// Summary: Data adapter boundary: snapshots, change observers, redraw scheduling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::series::SeriesPoint;

/// Shared "a redraw is wanted" flag. Raising it is idempotent: any number of
/// change notifications before the next frame collapse into one scheduled
/// redraw, consumed by the host via [`take`](RedrawRequest::take).
#[derive(Clone, Default)]
pub struct RedrawRequest(Rc<Cell<bool>>);

impl RedrawRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Consume the pending request, if any.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}

/// Token identifying one observer registration, used to unsubscribe when the
/// chart view switches adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Source of the series to render. The chart view holds a non-owning handle
/// and re-subscribes whenever the adapter is replaced; it never diffs old vs
/// new data, a notification alone schedules the redraw.
pub trait DataAdapter {
    /// Current data, or `None` when there is nothing to render.
    fn snapshot(&self) -> Option<Vec<Vec<SeriesPoint>>>;
    /// Register `request` to be raised on every data mutation.
    fn subscribe(&self, request: RedrawRequest) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Plain in-memory adapter over a list of series.
#[derive(Default)]
pub struct VecAdapter {
    data: RefCell<Vec<Vec<SeriesPoint>>>,
    observers: RefCell<Vec<(SubscriptionId, RedrawRequest)>>,
    next_id: Cell<u64>,
}

impl VecAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<Vec<SeriesPoint>>) -> Self {
        Self {
            data: RefCell::new(data),
            ..Self::default()
        }
    }

    /// Replace the whole data set and notify observers.
    pub fn set_data(&self, data: Vec<Vec<SeriesPoint>>) {
        *self.data.borrow_mut() = data;
        self.notify();
    }

    /// Append one series and notify observers.
    pub fn push_series(&self, series: Vec<SeriesPoint>) {
        self.data.borrow_mut().push(series);
        self.notify();
    }

    fn notify(&self) {
        for (_, request) in self.observers.borrow().iter() {
            request.raise();
        }
    }
}

impl DataAdapter for VecAdapter {
    fn snapshot(&self) -> Option<Vec<Vec<SeriesPoint>>> {
        let data = self.data.borrow();
        if data.is_empty() {
            None
        } else {
            Some(data.clone())
        }
    }

    fn subscribe(&self, request: RedrawRequest) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.observers.borrow_mut().push((id, request));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}
