use std::time::Duration;

use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::controller::ZoomViewportController;
use crate::events::ViewportEvent;
use crate::host::HostViewport;

/// How long an orientation re-layout waits for the host's new bounds before
/// it runs against whatever the host reports.
pub const RELAYOUT_SETTLE: Duration = Duration::from_millis(100);

/// Re-layout owed to an orientation change.
#[derive(Debug, Clone, Copy)]
struct PendingRelayout {
    deadline: Instant,
    /// A `Resize` was applied after the orientation change.
    resized: bool,
}

/// Drives a controller from a stream of host events.
///
/// Rules:
/// - Events are applied one at a time, in arrival order.
/// - An orientation change does not re-layout inline: hosts deliver the
///   notification before their bounds change. The re-layout waits for the
///   next successful `Resize`, which may arrive in a later wakeup, and runs
///   once the events queued with that resize are applied. If no resize shows
///   up within [`RELAYOUT_SETTLE`], or the source closes, it runs anyway.
/// - Orientation changes waiting on the same re-layout coalesce into one.
/// - A rejected event is logged and skipped; the loop keeps running.
/// - Scroll callbacks that carry a reply channel get the delegate's answer.
///
/// Returns the controller once the event source closes or `cancel` fires.
pub async fn run<H: HostViewport>(
    mut events: Receiver<ViewportEvent>,
    mut controller: ZoomViewportController<H>,
    cancel: CancellationToken,
) -> ZoomViewportController<H> {
    let mut relayout: Option<PendingRelayout> = None;

    loop {
        let settle = relayout.map(|p| p.deadline);
        select! {
            _ = cancel.cancelled() => break,

            _ = sleep_until(settle.unwrap_or_else(Instant::now)), if settle.is_some() => {
                debug!("no resize followed the orientation change");
                relayout = None;
                run_relayout(&mut controller);
            }

            maybe_ev = events.recv() => {
                let Some(ev) = maybe_ev else {
                    if relayout.take().is_some() {
                        run_relayout(&mut controller);
                    }
                    debug!("event source closed");
                    break;
                };
                apply(&mut controller, ev, &mut relayout);
                while let Ok(ev) = events.try_recv() {
                    apply(&mut controller, ev, &mut relayout);
                }
                if relayout.is_some_and(|p| p.resized) {
                    relayout = None;
                    run_relayout(&mut controller);
                }
            }
        }
    }

    controller
}

fn apply<H: HostViewport>(
    controller: &mut ZoomViewportController<H>,
    ev: ViewportEvent,
    relayout: &mut Option<PendingRelayout>,
) {
    let res = match ev {
        ViewportEvent::Display(dims) => controller.display(&dims),
        ViewportEvent::Refresh => controller.refresh(),
        ViewportEvent::Resize(size) => controller.resize(size).map(|()| {
            if let Some(pending) = relayout.as_mut() {
                pending.resized = true;
            }
        }),
        ViewportEvent::OrientationChanged => {
            if relayout.is_some() {
                debug!("orientation change coalesced");
            }
            *relayout = Some(PendingRelayout {
                deadline: Instant::now() + RELAYOUT_SETTLE,
                resized: false,
            });
            Ok(())
        }
        ViewportEvent::Tap { location, taps } => {
            let outcome = controller.handle_tap(location, taps);
            debug!(?outcome, "tap handled");
            Ok(())
        }
        ViewportEvent::Scroll { event, reply } => {
            let answer = controller.handle_scroll_event(event);
            debug!(?event, ?answer, "scroll event forwarded");
            if let Some(reply) = reply {
                if reply.send(answer).is_err() {
                    debug!("scroll reply receiver dropped");
                }
            }
            Ok(())
        }
    };
    if let Err(err) = res {
        warn!(error = %err, "viewport event rejected");
    }
}

fn run_relayout<H: HostViewport>(controller: &mut ZoomViewportController<H>) {
    if let Err(err) = controller.handle_orientation_change() {
        warn!(error = %err, "re-layout after orientation change failed");
    }
}
