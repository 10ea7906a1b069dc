use tokio::sync::oneshot;

use crate::controller::ZoomState;
use crate::geometry::{ImageDimensions, Point, Size};
use crate::processing::gesture::ZoomPlan;

/// Scroll and zoom lifecycle callbacks of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    DidScroll,
    DidZoom,
    WillBeginDragging,
    WillEndDragging { velocity: Point, target_offset: Point },
    DidEndDragging { will_decelerate: bool },
    WillBeginDecelerating,
    DidEndDecelerating,
    DidEndScrollingAnimation,
    WillBeginZooming,
    DidEndZooming { scale: f64 },
    ShouldScrollToTop,
    DidScrollToTop,
    DidChangeAdjustedContentInset,
}

/// Answer handed back to the host for lifecycle callbacks that expect one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollReply {
    None,
    TargetOffset(Point),
    ScrollToTop(bool),
}

/// Everything the host can deliver to the viewport event loop.
#[derive(Debug)]
pub enum ViewportEvent {
    Display(ImageDimensions),
    Refresh,
    /// The container now has this size.
    Resize(Size),
    /// Device orientation changed; bounds may not be updated yet.
    OrientationChanged,
    Tap { location: Point, taps: u32 },
    /// Lifecycle callback; the delegate's answer goes back on `reply`.
    Scroll {
        event: ScrollEvent,
        reply: Option<oneshot::Sender<ScrollReply>>,
    },
}

impl ViewportEvent {
    /// A lifecycle callback whose answer the host does not need.
    pub fn scroll(event: ScrollEvent) -> Self {
        Self::Scroll { event, reply: None }
    }

    /// A lifecycle callback paired with the receiver for its answer.
    pub fn scroll_with_reply(event: ScrollEvent) -> (Self, oneshot::Receiver<ScrollReply>) {
        let (tx, rx) = oneshot::channel();
        (
            Self::Scroll {
                event,
                reply: Some(tx),
            },
            rx,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// Only reported to the delegate.
    Notified,
    Zoomed(ZoomPlan),
}

/// Emitted by [`crate::delegate::ChannelDelegate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Tapped { location: Point, taps: u32 },
    /// Carries the geometry observed by the re-layout.
    OrientationChanged(ZoomState),
    Scroll(ScrollEvent),
}
