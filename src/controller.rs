use tracing::debug;

use crate::config::{FitMode, OffsetMode, ViewportConfig};
use crate::delegate::ViewportDelegate;
use crate::error::Result;
use crate::events::{ScrollEvent, ScrollReply, TapOutcome};
use crate::geometry::{ContainerBounds, ImageDimensions, Point, Rect, Size, clamp_offset};
use crate::host::{DisplayImage, HostViewport};
use crate::processing::fit::{FitPolicy, ScaleBounds, resolve_scale_bounds};
use crate::processing::gesture::{ZoomPlan, plan_zoom_toggle, zoom_rect_for_scale};
use crate::processing::offset::{centered_content_origin, initial_content_offset};
use crate::processing::resize::{self, ResizeSnapshot};

/// Snapshot of the host's zoom geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub current_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub content_offset: Point,
    pub content_size: Size,
    pub bounds: Size,
}

/// Owns the zoom policy for one host viewport showing one image at a time.
///
/// All entry points are synchronous and expect to be called from the host's
/// UI context, one at a time. See [`crate::tasks::viewport`] for a driver that
/// serialises events coming from elsewhere.
pub struct ZoomViewportController<H> {
    host: H,
    config: ViewportConfig,
    image: Option<ImageDimensions>,
    pending_resize: Option<ResizeSnapshot>,
    delegate: Option<Box<dyn ViewportDelegate + Send>>,
}

impl<H: HostViewport> ZoomViewportController<H> {
    pub fn new(host: H, config: ViewportConfig) -> Result<Self> {
        Ok(Self {
            host,
            config: config.validated()?,
            image: None,
            pending_resize: None,
            delegate: None,
        })
    }

    pub fn with_delegate(mut self, delegate: impl ViewportDelegate + Send + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn ViewportDelegate + Send>>) {
        self.delegate = delegate;
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next display, refresh or
    /// resize.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<()> {
        self.config = config.validated()?;
        Ok(())
    }

    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.config.fit_mode = mode;
    }

    pub fn set_offset_mode(&mut self, mode: OffsetMode) {
        self.config.initial_offset = mode;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn image(&self) -> Option<ImageDimensions> {
        self.image
    }

    pub fn zoom_state(&self) -> ZoomState {
        ZoomState {
            current_scale: self.host.zoom_scale(),
            min_scale: self.host.min_zoom_scale(),
            max_scale: self.host.max_zoom_scale(),
            content_offset: self.host.content_offset(),
            content_size: self.host.content_size(),
            bounds: self.host.bounds(),
        }
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds {
            min: self.host.min_zoom_scale(),
            max: self.host.max_zoom_scale(),
        }
    }

    /// Show a new image, fitted and placed according to the configuration.
    pub fn display<I: DisplayImage + ?Sized>(&mut self, image: &I) -> Result<()> {
        let dims = image.natural_size()?;
        let bounds = self.container_bounds()?;
        let range = resolve_scale_bounds(dims, bounds, &FitPolicy::from(&self.config))?;
        self.pending_resize = None;
        self.host.install_content(dims);
        self.image = Some(dims);
        self.configure_for_image(dims, bounds, range);
        debug!(
            width = dims.width(),
            height = dims.height(),
            fit = %self.config.fit_mode,
            scale = self.host.zoom_scale(),
            "displayed image"
        );
        Ok(())
    }

    /// Recompute geometry for the current image from scratch.
    pub fn refresh(&mut self) -> Result<()> {
        match self.image {
            Some(dims) => self.display(&dims),
            None => {
                debug!("refresh without an image");
                Ok(())
            }
        }
    }

    /// Capture the focal point and scale while the old bounds are in effect.
    pub fn prepare_resize(&mut self) {
        if self.image.is_none() {
            return;
        }
        self.pending_resize = Some(resize::prepare(&self.host));
    }

    /// Restore the captured view under the host's new bounds.
    pub fn recover_from_resize(&mut self) -> Result<()> {
        let Some(snapshot) = self.pending_resize.take() else {
            return Ok(());
        };
        let Some(image) = self.image else {
            return Ok(());
        };
        let bounds = self.container_bounds()?;
        resize::recover(
            &mut self.host,
            &snapshot,
            image,
            bounds,
            &FitPolicy::from(&self.config),
        )?;
        Ok(())
    }

    /// Apply new container bounds, keeping the same part of the image centred.
    pub fn resize(&mut self, new_bounds: Size) -> Result<()> {
        let bounds = ContainerBounds::from_size(new_bounds)?;
        if self.host.bounds() == bounds.size() {
            return Ok(());
        }
        if self.image.is_none() {
            self.host.set_bounds(bounds.size());
            return Ok(());
        }
        self.prepare_resize();
        self.host.set_bounds(bounds.size());
        self.recover_from_resize()
    }

    /// Re-fit to whatever bounds the host reports now, keeping zoom intent,
    /// then tell the delegate.
    pub fn handle_orientation_change(&mut self) -> Result<()> {
        if self.image.is_some() {
            self.prepare_resize();
            self.recover_from_resize()?;
        }
        let state = self.zoom_state();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_change_orientation(&state);
        }
        Ok(())
    }

    /// `location` is in content space, as reported by a recogniser attached
    /// to the image view.
    pub fn handle_tap(&mut self, location: Point, taps: u32) -> TapOutcome {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_tap(location, taps);
        }
        if taps != self.config.zoom_gesture_taps || self.image.is_none() {
            return TapOutcome::Notified;
        }

        let bounds = self.host.bounds();
        let plan = plan_zoom_toggle(
            self.host.zoom_scale(),
            &self.scale_bounds(),
            self.config.zoom_in_factor,
            location,
            bounds,
        );
        match plan {
            ZoomPlan::ZoomOut { scale } => {
                self.host.set_zoom_scale(scale, true);
                self.center_content();
            }
            ZoomPlan::ZoomIn { rect, .. } => {
                self.host.zoom_to_rect(rect, true);
                self.center_content();
                // The centring origin may have moved under the zoom; put the
                // tapped point back under the container centre.
                let target = self.host.convert_from_content(rect.center()) - bounds.half();
                let offset = clamp_offset(target, self.host.content_size(), bounds);
                self.host.set_content_offset(offset);
            }
        }
        debug!(?plan, "tap zoom");
        TapOutcome::Zoomed(plan)
    }

    /// Forward a host lifecycle callback to the delegate, re-centring the
    /// content after zoom changes.
    pub fn handle_scroll_event(&mut self, event: ScrollEvent) -> ScrollReply {
        if event == ScrollEvent::DidZoom {
            self.center_content();
        }
        let state = self.zoom_state();
        let Some(delegate) = self.delegate.as_mut() else {
            return match event {
                ScrollEvent::WillEndDragging { target_offset, .. } => {
                    ScrollReply::TargetOffset(target_offset)
                }
                ScrollEvent::ShouldScrollToTop => ScrollReply::ScrollToTop(true),
                _ => ScrollReply::None,
            };
        };
        match event {
            ScrollEvent::DidScroll => delegate.did_scroll(&state),
            ScrollEvent::DidZoom => delegate.did_zoom(&state),
            ScrollEvent::WillBeginDragging => delegate.will_begin_dragging(&state),
            ScrollEvent::WillEndDragging {
                velocity,
                mut target_offset,
            } => {
                delegate.will_end_dragging(velocity, &mut target_offset);
                return ScrollReply::TargetOffset(target_offset);
            }
            ScrollEvent::DidEndDragging { will_decelerate } => {
                delegate.did_end_dragging(will_decelerate)
            }
            ScrollEvent::WillBeginDecelerating => delegate.will_begin_decelerating(),
            ScrollEvent::DidEndDecelerating => delegate.did_end_decelerating(&state),
            ScrollEvent::DidEndScrollingAnimation => delegate.did_end_scrolling_animation(&state),
            ScrollEvent::WillBeginZooming => delegate.will_begin_zooming(&state),
            ScrollEvent::DidEndZooming { scale } => delegate.did_end_zooming(scale),
            ScrollEvent::ShouldScrollToTop => {
                return ScrollReply::ScrollToTop(delegate.should_scroll_to_top());
            }
            ScrollEvent::DidScrollToTop => delegate.did_scroll_to_top(),
            ScrollEvent::DidChangeAdjustedContentInset => {
                delegate.did_change_adjusted_content_inset()
            }
        }
        ScrollReply::None
    }

    /// Centre content that is smaller than the container.
    pub fn center_content(&mut self) {
        let origin = centered_content_origin(self.host.content_size(), self.host.bounds());
        self.host.set_content_origin(origin);
    }

    /// Content-space rect that yields `scale` with `focal` centred, for the
    /// host's current bounds.
    pub fn zoom_rect_for_scale(&self, scale: f64, focal: Point) -> Rect {
        zoom_rect_for_scale(scale, focal, self.host.bounds())
    }

    fn configure_for_image(
        &mut self,
        image: ImageDimensions,
        bounds: ContainerBounds,
        range: ScaleBounds,
    ) {
        self.host.set_content_size(image.size());
        self.host.set_zoom_scale_bounds(range.min, range.max);
        self.host.set_zoom_scale(range.min, false);
        self.center_content();
        let offset = initial_content_offset(
            bounds.size(),
            self.host.content_size(),
            self.config.fit_mode,
            self.config.initial_offset,
        );
        self.host.set_content_offset(offset);
    }

    fn container_bounds(&self) -> Result<ContainerBounds> {
        ContainerBounds::from_size(self.host.bounds())
    }
}
