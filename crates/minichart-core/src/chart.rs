// File: crates/minichart-core/src/chart.rs
// Summary: Chart instance lifecycle: create renders once, update re-renders, destroy hands the surface back.
// Notes:
// - The instance owns its surface. Resize callbacks only hold a weak handle to it.
// - At most one resize subscription exists per instance; it follows `options.responsive`.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::trace;

use crate::config::ChartConfig;
use crate::geometry::RectF;
use crate::render::{render_surface, RenderOptions, RenderOutcome};
use crate::resize::{ResizeBus, ResizeEvent, Subscription};
use crate::surface::Surface;

struct Instance<S> {
    surface: S,
    config: ChartConfig,
    options: RenderOptions,
    last: RenderOutcome,
}

impl<S: Surface> Instance<S> {
    fn render(&mut self) -> RenderOutcome {
        self.last = render_surface(&mut self.surface, &self.config, &self.options);
        self.last
    }

    fn resize(&mut self, event: ResizeEvent) -> RenderOutcome {
        self.surface.set_layout_size(event.size);
        if let Some(ratio) = event.pixel_ratio {
            self.surface.set_pixel_ratio(ratio);
        }
        self.render()
    }
}

/// Composition-time setup for a [`Chart`].
#[derive(Clone, Debug, Default)]
pub struct ChartBuilder {
    options: RenderOptions,
    bus: Option<ResizeBus>,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Redraw on events from `bus` while the configuration is responsive.
    pub fn observe(mut self, bus: &ResizeBus) -> Self {
        self.bus = Some(bus.clone());
        self
    }

    /// Take ownership of `surface` and draw `config` onto it once.
    pub fn create<S: Surface + 'static>(self, surface: S, config: ChartConfig) -> Chart<S> {
        let inner = Rc::new(RefCell::new(Instance {
            surface,
            config,
            options: self.options,
            last: RenderOutcome::NotDrawable,
        }));
        let mut chart = Chart { inner, bus: self.bus, subscription: None };
        chart.sync_subscription();
        chart.inner.borrow_mut().render();
        chart
    }
}

/// A chart bound to one surface.
pub struct Chart<S: Surface + 'static> {
    inner: Rc<RefCell<Instance<S>>>,
    bus: Option<ResizeBus>,
    subscription: Option<Subscription>,
}

impl<S: Surface + 'static> Chart<S> {
    /// Create with default render options and no resize source.
    pub fn create(surface: S, config: ChartConfig) -> Self {
        ChartBuilder::new().create(surface, config)
    }

    /// Replace the configuration when one is given, then redraw.
    pub fn update(&mut self, config: Option<ChartConfig>) -> RenderOutcome {
        if let Some(config) = config {
            self.inner.borrow_mut().config = config;
            self.sync_subscription();
        }
        self.inner.borrow_mut().render()
    }

    /// Apply a size change directly, for hosts that drive non-responsive charts by hand.
    pub fn resize(&mut self, event: ResizeEvent) -> RenderOutcome {
        self.inner.borrow_mut().resize(event)
    }

    pub fn set_render_options(&mut self, options: RenderOptions) -> RenderOutcome {
        let mut inst = self.inner.borrow_mut();
        inst.options = options;
        inst.render()
    }

    pub fn render_options(&self) -> RenderOptions {
        self.inner.borrow().options
    }

    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.inner.borrow(), |inst| &inst.surface)
    }

    /// Mutable access for hosts that read back or blit the rendered pixels.
    pub fn surface_mut(&mut self) -> RefMut<'_, S> {
        RefMut::map(self.inner.borrow_mut(), |inst| &mut inst.surface)
    }

    pub fn config(&self) -> Ref<'_, ChartConfig> {
        Ref::map(self.inner.borrow(), |inst| &inst.config)
    }

    pub fn last_outcome(&self) -> RenderOutcome {
        self.inner.borrow().last
    }

    /// True while a resize subscription is live.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unsubscribe, clear the surface and give it back.
    /// `None` only when a resize dispatch still holds the instance; the surface is cleared either way.
    pub fn destroy(self) -> Option<S> {
        let Self { inner, subscription, .. } = self;
        drop(subscription);
        if let Ok(mut inst) = inner.try_borrow_mut() {
            let size = inst.surface.layout_size().or_fallback();
            if let Some(ctx) = inst.surface.context() {
                ctx.clear_rect(RectF::from_xywh(0.0, 0.0, size.width, size.height));
            }
        }
        trace!("chart destroyed");
        Rc::try_unwrap(inner).ok().map(|cell| cell.into_inner().surface)
    }

    fn sync_subscription(&mut self) {
        let responsive = self.inner.borrow().config.options.responsive;
        match (&self.bus, responsive, self.subscription.is_some()) {
            (Some(bus), true, false) => {
                let weak = Rc::downgrade(&self.inner);
                self.subscription = Some(bus.subscribe(move |event| {
                    let Some(inner) = weak.upgrade() else { return };
                    let Ok(mut inst) = inner.try_borrow_mut() else {
                        trace!("chart busy; resize skipped");
                        return;
                    };
                    inst.resize(event);
                }));
            }
            (_, false, true) => self.subscription = None,
            _ => {}
        }
    }
}
