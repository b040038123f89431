use tracing::{debug, error};

use crate::core::{Dataset, DatasetSource};
use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

use super::hover::PointId;
use super::{
    MetricSelector, PlotConfig, PlotPhase, PlotSnapshot, PlotState, PlotSurface, init_plot,
    update_plot,
};

/// Interactive scatter plot with a runtime-selectable x metric.
///
/// Owns the dataset, the plot state and the drawing surface for one session.
/// Every event handler takes `&mut self` and runs to completion.
pub struct MetricPlot<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    dataset: Dataset,
    state: PlotState,
    selector: MetricSelector,
    surface: PlotSurface,
    hovered: Option<PointId>,
}

impl<R: Renderer> MetricPlot<R> {
    /// Initializes the surface and performs the first update.
    pub fn new(renderer: R, dataset: Dataset, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let geometry = config.geometry()?;
        let selector = MetricSelector::new(selector_options(&dataset, &config), &config.x_metric)?;
        let state = PlotState::new(config.x_metric.clone(), config.y_metric.clone(), geometry);

        let mut surface = init_plot(&dataset, &state, &config)?;
        update_plot(&dataset, &state, &config, &mut surface)?;

        debug!(
            records = dataset.len(),
            x_metric = state.x_metric(),
            options = selector.options().len(),
            "metric plot ready"
        );
        Ok(Self {
            renderer,
            config,
            dataset,
            state,
            selector,
            surface,
            hovered: None,
        })
    }

    /// Loads the dataset once from `source` using `config.layout`, then
    /// initializes.
    ///
    /// A load failure is logged and returned; nothing is rendered.
    pub fn from_source(
        renderer: R,
        source: &impl DatasetSource,
        config: PlotConfig,
    ) -> PlotResult<Self> {
        let dataset = source.load(config.layout).inspect_err(|err| {
            error!(error = %err, "error loading data");
        })?;
        Self::new(renderer, dataset, config)
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &PlotState {
        &self.state
    }

    #[must_use]
    pub fn selector(&self) -> &MetricSelector {
        &self.selector
    }

    #[must_use]
    pub fn surface(&self) -> &PlotSurface {
        &self.surface
    }

    #[must_use]
    pub fn phase(&self) -> PlotPhase {
        self.surface.phase()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<PointId> {
        self.hovered
    }

    /// Selector change handler: switches the x metric and rebuilds the
    /// updateable subtree.
    ///
    /// Returns `Ok(false)` without touching the surface when `metric` is
    /// already selected.
    pub fn select_x_metric(&mut self, metric: &str) -> PlotResult<bool> {
        if !self.selector.select(metric)? {
            return Ok(false);
        }
        let previous = self.state.set_x_metric(metric);
        debug!(from = %previous, to = metric, "x metric changed");

        self.hovered = None;
        update_plot(&self.dataset, &self.state, &self.config, &mut self.surface)?;
        Ok(true)
    }

    /// Hover-in on point `index`: shows only its label.
    pub fn pointer_enter_point(&mut self, index: usize) -> bool {
        let changed = self.surface.set_label_visible(PointId(index), true);
        if index < self.surface.points().len() {
            self.hovered = Some(PointId(index));
        }
        changed
    }

    /// Hover-out from point `index`: hides its label.
    pub fn pointer_leave_point(&mut self, index: usize) -> bool {
        let changed = self.surface.set_label_visible(PointId(index), false);
        if self.hovered == Some(PointId(index)) {
            self.hovered = None;
        }
        changed
    }

    /// Raw pointer motion in surface coordinates.
    ///
    /// Emits leave/enter transitions when the point under the pointer
    /// changes and returns the point now hovered.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<PointId> {
        let target = self.surface.hit_test(x, y);
        if target != self.hovered {
            if let Some(previous) = self.hovered {
                self.pointer_leave_point(previous.0);
            }
            if let Some(next) = target {
                self.pointer_enter_point(next.0);
            }
        }
        self.hovered
    }

    /// Pointer left the drawing surface.
    pub fn pointer_leave(&mut self) {
        if let Some(previous) = self.hovered {
            self.pointer_leave_point(previous.0);
        }
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.surface.build_render_frame()
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.surface.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot::capture(&self.state, &self.surface)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn selector_options(dataset: &Dataset, config: &PlotConfig) -> Vec<String> {
    if !config.x_metric_options.is_empty() {
        return config.x_metric_options.clone();
    }

    let mut options: Vec<String> = dataset
        .numeric_metric_names()
        .into_iter()
        .filter(|name| *name != config.y_metric)
        .collect();
    if !options.contains(&config.x_metric) {
        options.insert(0, config.x_metric.clone());
    }
    options
}
