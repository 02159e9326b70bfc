use crate::trace;
use futures::stream::{BoxStream, Stream, StreamExt};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio_util::sync::CancellationToken;

/// Statically declared identifier of a service method, usually a fieldless enum
/// deriving `strum_macros::Display`.
pub trait StoppableMethod: Copy + Eq + Debug + Display + Send + Sync + 'static {}

impl<T> StoppableMethod for T where T: Copy + Eq + Debug + Display + Send + Sync + 'static {}

/// Anything owning streams that can be cancelled all at once.
pub trait Stoppable {
    /// Completes every outstanding tracked stream. Calling it repeatedly is a no-op.
    fn stop(&self);
}

/// Stable token for one guarded method invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvocationId(u64);

#[derive(Debug, Default)]
struct TableState {
    next_id: u64,
    /// Ordered by `InvocationId`, which is allocated monotonically, so iteration
    /// order is insertion order.
    entries: BTreeMap<InvocationId, CancellationToken>,
}

#[derive(Debug, Default)]
struct CancellationTable {
    state: Mutex<TableState>,
}

impl CancellationTable {
    fn lock(&self) -> MutexGuard<'_, TableState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn register(&self) -> (InvocationId, CancellationToken) {
        let mut state = self.lock();
        let id = InvocationId(state.next_id);
        state.next_id += 1;
        let token = CancellationToken::new();
        state.entries.insert(id, token.clone());
        (id, token)
    }

    fn release(&self, id: InvocationId) { self.lock().entries.remove(&id); }

    fn drain(&self) -> Vec<CancellationToken> {
        std::mem::take(&mut self.lock().entries).into_values().collect()
    }

    fn len(&self) -> usize { self.lock().entries.len() }
}

/// Ties the streams returned by a service's methods to per-invocation
/// cancellation tokens and cancels them together on [`Stoppable::stop`].
///
/// Each service instance owns its own controller. Clones share the same table,
/// so a clone handed to a helper task stops the same streams.
///
/// Entries leave the table when `stop` fires or when their stream completes
/// naturally or is dropped; the table never outlives the streams it tracks.
#[derive(Debug, Clone)]
pub struct StopController<M: StoppableMethod> {
    table: Arc<CancellationTable>,
    excludes: &'static [M],
    verbose: Option<&'static str>,
}

impl<M: StoppableMethod> StopController<M> {
    /// # Arguments
    /// - `excludes`: methods whose streams are never cut short by `stop`.
    /// - `verbose`: tag for trace output; `None` disables tracing.
    pub fn new(excludes: &'static [M], verbose: Option<&'static str>) -> Self {
        Self { table: Arc::new(CancellationTable::default()), excludes, verbose }
    }

    /// Methods whose streams `stop` leaves alone.
    pub fn excludes(&self) -> &'static [M] { self.excludes }

    /// Returns `true` if streams of `method` are neither tracked nor stopped.
    pub fn is_excluded(&self, method: M) -> bool { self.excludes.contains(&method) }

    /// Number of tracked invocations whose streams are still alive.
    pub fn outstanding(&self) -> usize { self.table.len() }

    /// Wraps the stream returned by `method`.
    ///
    /// Excluded methods get their stream back untouched. Any other stream is
    /// registered under a fresh [`InvocationId`] and ends as soon as `stop` is
    /// called; until then every item is forwarded in order.
    pub fn guard<S>(&self, method: M, stream: S) -> BoxStream<'static, S::Item>
    where
        S: Stream + Send + 'static,
        S::Item: Send + 'static,
    {
        if let Some(tag) = self.verbose {
            trace!(tag, "{method} was executed");
        }
        if self.is_excluded(method) {
            return stream.boxed();
        }
        let (id, token) = self.table.register();
        TrackedStream {
            inner: stream.take_until(token.cancelled_owned()).boxed(),
            entry: Some(TableEntry { table: Arc::clone(&self.table), id }),
        }
        .boxed()
    }

    /// Like [`StopController::guard`] for method bodies that can fail before
    /// producing a stream. An `Err` is passed through and nothing is registered.
    ///
    /// # Errors
    /// Returns `result`'s error unchanged.
    pub fn guard_result<S, E>(
        &self,
        method: M,
        result: Result<S, E>,
    ) -> Result<BoxStream<'static, S::Item>, E>
    where
        S: Stream + Send + 'static,
        S::Item: Send + 'static,
    {
        result.map(|stream| self.guard(method, stream))
    }
}

impl<M: StoppableMethod> Stoppable for StopController<M> {
    fn stop(&self) {
        let tokens = self.table.drain();
        if let Some(tag) = self.verbose {
            let excludes: Vec<String> = self.excludes.iter().map(ToString::to_string).collect();
            trace!(
                tag,
                "stopped {} stream(s) with excluded methods: [{}]",
                tokens.len(),
                excludes.join(", ")
            );
        }
        for token in tokens {
            token.cancel();
        }
    }
}

/// Removes its table entry when dropped.
#[derive(Debug)]
struct TableEntry {
    table: Arc<CancellationTable>,
    id: InvocationId,
}

impl Drop for TableEntry {
    fn drop(&mut self) { self.table.release(self.id); }
}

struct TrackedStream<T> {
    inner: BoxStream<'static, T>,
    entry: Option<TableEntry>,
}

impl<T> Stream for TrackedStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        let polled = this.inner.poll_next_unpin(cx);
        if let Poll::Ready(None) = polled {
            this.entry.take();
        }
        polled
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.inner.size_hint().1) }
}
