use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::controller::ZoomState;
use crate::events::{Notification, ScrollEvent};
use crate::geometry::Point;

/// Receives taps, orientation changes and the host's scroll/zoom lifecycle.
///
/// Every method has a no-op default, so implementors only override what they
/// care about.
pub trait ViewportDelegate {
    fn did_tap(&mut self, _location: Point, _taps: u32) {}
    fn did_change_orientation(&mut self, _state: &ZoomState) {}

    fn did_scroll(&mut self, _state: &ZoomState) {}
    fn did_zoom(&mut self, _state: &ZoomState) {}
    fn will_begin_dragging(&mut self, _state: &ZoomState) {}
    /// May redirect where deceleration ends by rewriting `target_offset`.
    fn will_end_dragging(&mut self, _velocity: Point, _target_offset: &mut Point) {}
    fn did_end_dragging(&mut self, _will_decelerate: bool) {}
    fn will_begin_decelerating(&mut self) {}
    fn did_end_decelerating(&mut self, _state: &ZoomState) {}
    fn did_end_scrolling_animation(&mut self, _state: &ZoomState) {}
    fn will_begin_zooming(&mut self, _state: &ZoomState) {}
    fn did_end_zooming(&mut self, _scale: f64) {}
    fn should_scroll_to_top(&mut self) -> bool {
        true
    }
    fn did_scroll_to_top(&mut self) {}
    fn did_change_adjusted_content_inset(&mut self) {}
}

/// Forwards every callback as a [`Notification`] over a channel.
#[derive(Debug, Clone)]
pub struct ChannelDelegate {
    tx: UnboundedSender<Notification>,
}

impl ChannelDelegate {
    pub fn new(tx: UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    fn emit(&self, n: Notification) {
        if self.tx.send(n).is_err() {
            warn!("notification receiver dropped");
        }
    }
}

impl ViewportDelegate for ChannelDelegate {
    fn did_tap(&mut self, location: Point, taps: u32) {
        self.emit(Notification::Tapped { location, taps });
    }

    fn did_change_orientation(&mut self, state: &ZoomState) {
        self.emit(Notification::OrientationChanged(*state));
    }

    fn did_scroll(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::DidScroll));
    }

    fn did_zoom(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::DidZoom));
    }

    fn will_begin_dragging(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::WillBeginDragging));
    }

    /// Reports the proposed target; the channel cannot rewrite it.
    fn will_end_dragging(&mut self, velocity: Point, target_offset: &mut Point) {
        self.emit(Notification::Scroll(ScrollEvent::WillEndDragging {
            velocity,
            target_offset: *target_offset,
        }));
    }

    fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.emit(Notification::Scroll(ScrollEvent::DidEndDragging {
            will_decelerate,
        }));
    }

    fn will_begin_decelerating(&mut self) {
        self.emit(Notification::Scroll(ScrollEvent::WillBeginDecelerating));
    }

    fn did_end_decelerating(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::DidEndDecelerating));
    }

    fn did_end_scrolling_animation(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::DidEndScrollingAnimation));
    }

    fn will_begin_zooming(&mut self, _state: &ZoomState) {
        self.emit(Notification::Scroll(ScrollEvent::WillBeginZooming));
    }

    fn did_end_zooming(&mut self, scale: f64) {
        self.emit(Notification::Scroll(ScrollEvent::DidEndZooming { scale }));
    }

    fn should_scroll_to_top(&mut self) -> bool {
        self.emit(Notification::Scroll(ScrollEvent::ShouldScrollToTop));
        true
    }

    fn did_scroll_to_top(&mut self) {
        self.emit(Notification::Scroll(ScrollEvent::DidScrollToTop));
    }

    fn did_change_adjusted_content_inset(&mut self) {
        self.emit(Notification::Scroll(
            ScrollEvent::DidChangeAdjustedContentInset,
        ));
    }
}
