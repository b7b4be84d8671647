use crate::application::controller::{RunOutcome, SelectionController};
use crate::application::view_model::ViewModel;
use crate::cli::commands::WatchInput;
use crate::domain::entities::selection::Selection;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

/// Drive the controller from line input, handing every applied view to
/// `on_view`.
///
/// Each line issues a new run right away; a run still in flight when the next
/// line arrives is superseded and never reported. On end of input or `quit`
/// the runs already issued are awaited before returning.
pub async fn run<R, F>(
    controller: Arc<SelectionController>,
    initial: Selection,
    input: R,
    on_view: F,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: Fn(Arc<ViewModel>) + Send + Sync + 'static,
{
    let on_view = Arc::new(on_view);
    let mut pending = vec![report_when_applied(
        controller.spawn_select(initial),
        Arc::clone(&on_view),
    )];

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(input) = WatchInput::parse(&line) else {
            tracing::warn!(line = %line, "unrecognized watch input");
            continue;
        };
        let current = controller.current_selection().unwrap_or(initial);
        let handle = match input {
            WatchInput::Corridor(code) => match code.parse::<Corridor>() {
                Ok(c) => controller.spawn_select(current.with_corridor(c)),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring corridor change");
                    continue;
                }
            },
            WatchInput::Amount(raw) => {
                controller.spawn_select(current.with_amount(TransferAmount::parse_input(&raw)))
            }
            WatchInput::Refresh => {
                let c = Arc::clone(&controller);
                tokio::spawn(async move { c.refresh().await })
            }
            WatchInput::Quit => break,
        };
        pending.retain(|h| !h.is_finished());
        pending.push(report_when_applied(handle, Arc::clone(&on_view)));
    }

    for handle in pending {
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "watch run task failed");
        }
    }
    Ok(())
}

fn report_when_applied<F>(
    handle: JoinHandle<RunOutcome>,
    on_view: Arc<F>,
) -> JoinHandle<()>
where
    F: Fn(Arc<ViewModel>) + Send + Sync + 'static,
{
    tokio::spawn(async move {
        if let Ok(RunOutcome::Applied(view)) = handle.await {
            on_view(view);
        }
    })
}
