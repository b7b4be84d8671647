//! Selection controller: owns the current corridor/amount and decides which
//! aggregation result presentation gets to see.
//!
//! Every run is tagged with a monotonically increasing request token. When a
//! run settles, its token is compared with the latest one issued; anything
//! older has been superseded and is dropped without touching the state. In
//! flight requests are not aborted, only ignored.

use crate::application::aggregator::Aggregator;
use crate::application::view_model::{assemble, ViewModel};
use crate::domain::entities::selection::Selection;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What presentation should render right now.
#[derive(Debug, Clone)]
pub enum DashboardState {
    /// Nothing selected yet.
    Idle,
    /// A run is in flight. `previous` is the last applied view, if any.
    Loading {
        token: u64,
        selection: Selection,
        previous: Option<Arc<ViewModel>>,
    },
    Ready(Arc<ViewModel>),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading { .. })
    }

    /// Latest applied view, including the one kept around while loading.
    pub fn view(&self) -> Option<&Arc<ViewModel>> {
        match self {
            DashboardState::Idle => None,
            DashboardState::Loading { previous, .. } => previous.as_ref(),
            DashboardState::Ready(vm) => Some(vm),
        }
    }
}

/// How a requested run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The run was current when it settled and its view is now visible.
    Applied(Arc<ViewModel>),
    /// A newer request was issued while this one was in flight.
    Superseded { token: u64 },
    /// Refresh was requested before anything was selected.
    NoSelection,
}

impl RunOutcome {
    pub fn view(&self) -> Option<&Arc<ViewModel>> {
        match self {
            RunOutcome::Applied(vm) => Some(vm),
            _ => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, RunOutcome::Superseded { .. })
    }
}

#[derive(Debug, Default)]
struct Inner {
    latest_token: u64,
    selection: Option<Selection>,
}

pub struct SelectionController {
    aggregator: Arc<Aggregator>,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<DashboardState>,
}

impl SelectionController {
    pub fn new(aggregator: Arc<Aggregator>) -> Self {
        let (state_tx, _) = watch::channel(DashboardState::Idle);
        Self {
            aggregator,
            inner: Mutex::new(Inner::default()),
            state_tx,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_tx.subscribe()
    }

    pub fn current_selection(&self) -> Option<Selection> {
        self.lock().selection
    }

    pub fn current_view(&self) -> Option<Arc<ViewModel>> {
        self.state_tx.borrow().view().cloned()
    }

    /// Replace the whole selection and run it.
    pub async fn select(&self, selection: Selection) -> RunOutcome {
        match self.begin(|_| Some(selection)) {
            Some((token, selection)) => self.run(token, selection).await,
            None => RunOutcome::NoSelection,
        }
    }

    /// Change the corridor, keeping the amount.
    pub async fn set_corridor(&self, corridor: Corridor) -> RunOutcome {
        match self.begin(|current| Some(current.unwrap_or_default().with_corridor(corridor))) {
            Some((token, selection)) => self.run(token, selection).await,
            None => RunOutcome::NoSelection,
        }
    }

    /// Change the amount, keeping the corridor. `None` clears it back to
    /// the request default.
    pub async fn set_amount(&self, amount: Option<TransferAmount>) -> RunOutcome {
        match self.begin(|current| Some(current.unwrap_or_default().with_amount(amount))) {
            Some((token, selection)) => self.run(token, selection).await,
            None => RunOutcome::NoSelection,
        }
    }

    /// Re-run the current selection. A no-op while idle.
    pub async fn refresh(&self) -> RunOutcome {
        match self.begin(|current| current) {
            Some((token, selection)) => self.run(token, selection).await,
            None => RunOutcome::NoSelection,
        }
    }

    /// Start a run on the runtime without waiting for it. The token is
    /// issued before this returns, so a later call always supersedes it.
    pub fn spawn_select(self: &Arc<Self>, selection: Selection) -> JoinHandle<RunOutcome> {
        let issued = self.begin(|_| Some(selection));
        let this = Arc::clone(self);
        tokio::spawn(async move {
            match issued {
                Some((token, selection)) => this.run(token, selection).await,
                None => RunOutcome::NoSelection,
            }
        })
    }

    /// Issue a new token for the selection produced by `next`, and move to
    /// `Loading`. Returns `None` when `next` yields no selection.
    fn begin<F>(&self, next: F) -> Option<(u64, Selection)>
    where
        F: FnOnce(Option<Selection>) -> Option<Selection>,
    {
        let mut inner = self.lock();
        let selection = next(inner.selection)?;
        inner.latest_token += 1;
        inner.selection = Some(selection);
        let token = inner.latest_token;

        let previous = self.state_tx.borrow().view().cloned();
        self.state_tx.send_replace(DashboardState::Loading {
            token,
            selection,
            previous,
        });
        tracing::debug!(token, corridor = %selection.corridor, "run started");
        Some((token, selection))
    }

    /// Apply the run's view only if `token` is still the latest one issued.
    /// Every selection change issues a new token, so this token check
    /// replaces comparing the run's selection with the current one by value.
    async fn run(&self, token: u64, selection: Selection) -> RunOutcome {
        let bundle = self.aggregator.run(&selection).await;
        let view = Arc::new(assemble(token, selection, bundle));

        let inner = self.lock();
        if inner.latest_token != token {
            tracing::debug!(
                token,
                latest = inner.latest_token,
                corridor = %selection.corridor,
                "dropping stale result"
            );
            return RunOutcome::Superseded { token };
        }
        self.state_tx
            .send_replace(DashboardState::Ready(Arc::clone(&view)));
        RunOutcome::Applied(view)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
