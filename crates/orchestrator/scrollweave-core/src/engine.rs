//! Orchestrator: data ownership and public API.
//!
//! Owns every directive, watch, region, slot, ticker and the shared
//! overlay for the page lifetime. Hosts drive it with
//! `update(dt, inputs)` once per frame and apply the returned changes;
//! `teardown()` retires everything and guarantees silence afterwards.

use std::collections::HashMap;

use crate::binding::{TargetHandle, TargetPath, TargetResolver};
use crate::config::Config;
use crate::directive::{AnimationDirective, Trigger, TriggerPolicy};
use crate::ease::{lerp_f32, lerp_value, Ease};
use crate::error::OrchestratorError;
use crate::geometry::{DocumentMetrics, Rect, Viewport};
use crate::ids::{DirectiveId, IdAllocator, RegionId, TickId, WatchId};
use crate::inputs::{Command, Inputs, PointerEvent};
use crate::newsletter::{NewsletterConfig, NewsletterForm};
use crate::outputs::{Change, Event, Outputs};
use crate::overlay::Overlay;
use crate::region::{PinTransition, RegionMode, ScrollRegion};
use crate::registry::{Factory, LazyVisualizationRegistry};
use crate::ticker::{TickFn, TickerSet};
use crate::tween::{Direction, Tween};
use crate::value::Value;
use crate::viewport::{CrossingKind, FirePolicy, WatchSet};

/// Handle used for document-level changes (animated scroll position).
pub const DOCUMENT_TARGET: &str = "document";

const SCROLL_TO_DURATION_MS: u32 = 800;

/// Runtime state for one registered directive.
struct DirectiveRuntime {
    id: DirectiveId,
    directive: AnimationDirective,
    /// Resolved handles in document order; empty until prebind.
    handles: Vec<TargetHandle>,
    /// One tween per resolved handle.
    tweens: Vec<Tween>,
    /// Last eased progress emitted for a scrub directive.
    last_scrub: Option<f32>,
    was_active: bool,
    bound: bool,
    /// Unresolvable watch/targets demote the directive to a no-op.
    dropped: bool,
}

/// What a watch firing feeds.
enum WatchBinding {
    Directive(DirectiveId),
    Slot(String),
}

/// Maps total document scroll fraction onto a target property.
struct ProgressBinding {
    path: TargetPath,
    handle: Option<TargetHandle>,
    prop: String,
    last: Option<f32>,
}

/// Edge-triggered boolean emitted when scroll_y crosses a pixel mark.
struct ScrollFlag {
    path: TargetPath,
    handle: Option<TargetHandle>,
    prop: String,
    threshold_px: f32,
    last: Option<bool>,
}

/// Internal eased scroll animation (smooth scroll-to-anchor).
struct ScrollTween {
    from_y: f32,
    to_y: f32,
    tween: Tween,
}

pub struct Orchestrator {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    viewport: Viewport,
    document: DocumentMetrics,
    geometry: HashMap<TargetHandle, Rect>,
    directives: Vec<DirectiveRuntime>,
    regions: Vec<ScrollRegion>,
    /// Last pinned-content offset emitted per region.
    region_offsets: HashMap<RegionId, f32>,
    progress_bindings: Vec<ProgressBinding>,
    scroll_flags: Vec<ScrollFlag>,
    scroll_tween: Option<ScrollTween>,

    // Systems
    watches: WatchSet,
    watch_bindings: HashMap<WatchId, WatchBinding>,
    registry: LazyVisualizationRegistry,
    overlay: Overlay,
    tickers: TickerSet,
    newsletter: NewsletterForm,

    // Resize debounce countdown, milliseconds.
    resize_quiet_ms: Option<f32>,
    layout_dirty: bool,
    torn_down: bool,

    // Per-tick outputs
    outputs: Outputs,
}

impl Orchestrator {
    /// Create a new orchestrator with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            overlay: Overlay::new(cfg.overlay_offset),
            newsletter: NewsletterForm::new(NewsletterConfig::default()),
            cfg,
            ids: IdAllocator::new(),
            viewport: Viewport::default(),
            document: DocumentMetrics::default(),
            geometry: HashMap::new(),
            directives: Vec::new(),
            regions: Vec::new(),
            region_offsets: HashMap::new(),
            progress_bindings: Vec::new(),
            scroll_flags: Vec::new(),
            scroll_tween: None,
            watches: WatchSet::new(),
            watch_bindings: HashMap::new(),
            registry: LazyVisualizationRegistry::new(),
            tickers: TickerSet::new(),
            resize_quiet_ms: None,
            layout_dirty: true,
            torn_down: false,
            outputs: Outputs::default(),
        }
    }

    // ---- registration -----------------------------------------------------

    /// Validate and add a directive. Scrub directives must reference a
    /// region registered beforehand.
    pub fn register_directive(
        &mut self,
        directive: AnimationDirective,
    ) -> Result<DirectiveId, OrchestratorError> {
        directive
            .validate_basic()
            .map_err(OrchestratorError::InvalidDirective)?;
        if let Trigger::Scrub { region } = directive.trigger {
            if !self.regions.iter().any(|r| r.id == region) {
                return Err(OrchestratorError::InvalidDirective(format!(
                    "directive '{}' references unknown region {:?}",
                    directive.name, region
                )));
            }
        }
        let id = self.ids.alloc_directive();
        self.directives.push(DirectiveRuntime {
            id,
            directive,
            handles: Vec::new(),
            tweens: Vec::new(),
            last_scrub: None,
            was_active: false,
            bound: false,
            dropped: false,
        });
        Ok(id)
    }

    /// Add a scroll region; scrub directives bind to the returned id.
    pub fn register_region(&mut self, section: TargetPath, mode: RegionMode) -> RegionId {
        let id = self.ids.alloc_region();
        self.regions.push(ScrollRegion::new(id, section, mode));
        id
    }

    /// Register a lazily rendered visualization. The factory runs at most
    /// once, when the container first crosses `threshold`; an absent
    /// container demotes the slot to a no-op at prebind.
    pub fn register_visualization(
        &mut self,
        section_id: &str,
        container: TargetPath,
        threshold: f32,
        factory: Factory,
    ) -> Result<(), OrchestratorError> {
        self.registry
            .register(section_id, container, threshold, factory)
    }

    /// Map total document scroll fraction onto `prop` of `target`.
    pub fn register_scroll_progress(&mut self, target: TargetPath, prop: &str) {
        self.progress_bindings.push(ProgressBinding {
            path: target,
            handle: None,
            prop: prop.to_string(),
            last: None,
        });
    }

    /// Emit a Bool change on `prop` of `target` when scroll_y crosses
    /// `threshold_px` in either direction (edge-triggered).
    pub fn register_scroll_flag(&mut self, target: TargetPath, prop: &str, threshold_px: f32) {
        self.scroll_flags.push(ScrollFlag {
            path: target,
            handle: None,
            prop: prop.to_string(),
            threshold_px,
            last: None,
        });
    }

    /// Run `callback` every `period_s` seconds (0 = every frame) until
    /// cancelled or teardown.
    pub fn add_ticker(&mut self, period_s: f32, callback: TickFn) -> TickId {
        let id = self.ids.alloc_tick();
        self.tickers.add(id, period_s, callback);
        id
    }

    pub fn cancel_ticker(&mut self, id: TickId) {
        self.tickers.cancel(id);
    }

    /// Load a parsed page manifest: regions first (scrub directives bind
    /// to them by name), then directives, visualization slots, progress
    /// and flag bindings. `factory_for` supplies the factory for each
    /// visualization section; sections it does not know are skipped with
    /// a warning.
    pub fn load_manifest<F>(
        &mut self,
        manifest: crate::manifest::PageManifest,
        mut factory_for: F,
    ) -> Result<(), OrchestratorError>
    where
        F: FnMut(&str) -> Option<Factory>,
    {
        use crate::manifest::{RegionModeSpec, TriggerSpec};

        let mut region_ids: HashMap<String, RegionId> = HashMap::new();
        for spec in manifest.regions {
            let mode = match spec.mode {
                RegionModeSpec::Span => RegionMode::Span,
                RegionModeSpec::Pinned { content } => RegionMode::Pinned { content },
            };
            let id = self.register_region(spec.section, mode);
            region_ids.insert(spec.name, id);
        }

        for spec in manifest.directives {
            let trigger = match spec.trigger {
                TriggerSpec::Enter { threshold, policy } => Trigger::Enter { threshold, policy },
                TriggerSpec::Scrub { region } => match region_ids.get(&region) {
                    Some(id) => Trigger::Scrub { region: *id },
                    None => {
                        return Err(OrchestratorError::InvalidDirective(format!(
                            "directive '{}' references unknown region '{region}'",
                            spec.name
                        )))
                    }
                },
            };
            self.register_directive(AnimationDirective {
                name: spec.name,
                targets: spec.targets,
                watch: spec.watch,
                from: spec.from,
                to: spec.to,
                duration_ms: spec.duration_ms,
                delay: spec.delay,
                ease: spec.ease,
                trigger,
            })?;
        }

        for spec in manifest.visualizations {
            let threshold = spec.threshold.unwrap_or(self.cfg.default_threshold);
            match factory_for(&spec.section_id) {
                Some(factory) => self.register_visualization(
                    &spec.section_id,
                    spec.container,
                    threshold,
                    factory,
                )?,
                None => {
                    log::warn!("no factory for section '{}'; skipped", spec.section_id);
                }
            }
        }

        for spec in manifest.progress {
            self.register_scroll_progress(spec.target, &spec.prop);
        }
        for spec in manifest.flags {
            self.register_scroll_flag(spec.target, &spec.prop, spec.threshold_px);
        }
        Ok(())
    }

    // ---- binding ----------------------------------------------------------

    /// One-time binding against a provided resolver. Resolves directive
    /// targets, slot containers, region sections and flag/progress
    /// targets; anything unresolvable degrades to a no-op with a warning.
    /// Wires viewport watches for everything that resolved.
    pub fn prebind(&mut self, resolver: &mut dyn TargetResolver) {
        for rt in &mut self.directives {
            if rt.bound || rt.dropped {
                continue;
            }
            rt.bound = true;
            for path in &rt.directive.targets {
                match resolver.resolve(path) {
                    Some(h) => rt.handles.push(h),
                    None => log::warn!(
                        "directive '{}' target '{}' absent; skipping target",
                        rt.directive.name,
                        path
                    ),
                }
            }
            if rt.handles.is_empty() {
                log::warn!("directive '{}' has no live targets; dropped", rt.directive.name);
                rt.dropped = true;
                continue;
            }
            rt.tweens = rt
                .handles
                .iter()
                .map(|_| Tween::new(rt.directive.duration_ms, rt.directive.ease))
                .collect();
            if let Trigger::Enter { threshold, policy } = rt.directive.trigger {
                let watch_handle = match resolver.resolve(rt.directive.watch_target()) {
                    Some(h) => h,
                    None => {
                        log::warn!(
                            "directive '{}' watch target '{}' absent; dropped",
                            rt.directive.name,
                            rt.directive.watch_target()
                        );
                        rt.dropped = true;
                        continue;
                    }
                };
                let fire = match policy {
                    TriggerPolicy::OnceOnEnter => FirePolicy::Once,
                    TriggerPolicy::ReverseOnExit => FirePolicy::EveryTransition,
                };
                let wid = self.ids.alloc_watch();
                self.watches.observe(wid, watch_handle, threshold, fire);
                self.watch_bindings.insert(wid, WatchBinding::Directive(rt.id));
            }
        }

        for (section, handle, threshold) in self.registry.bind(resolver) {
            let wid = self.ids.alloc_watch();
            self.watches.observe(wid, handle, threshold, FirePolicy::Once);
            self.watch_bindings.insert(wid, WatchBinding::Slot(section));
        }

        for region in &mut self.regions {
            if let Some(h) = resolver.resolve(&region.section) {
                region.section = h;
            } else {
                log::warn!("region {:?} section '{}' absent; inert", region.id, region.section);
            }
            if let RegionMode::Pinned { content } = &region.mode {
                if let Some(h) = resolver.resolve(content) {
                    region.mode = RegionMode::Pinned { content: h };
                }
            }
        }

        for pb in &mut self.progress_bindings {
            pb.handle = resolver.resolve(&pb.path);
            if pb.handle.is_none() {
                log::warn!("scroll progress target '{}' absent; dropped", pb.path);
            }
        }
        self.progress_bindings.retain(|pb| pb.handle.is_some());

        for sf in &mut self.scroll_flags {
            sf.handle = resolver.resolve(&sf.path);
            if sf.handle.is_none() {
                log::warn!("scroll flag target '{}' absent; dropped", sf.path);
            }
        }
        self.scroll_flags.retain(|sf| sf.handle.is_some());

        self.layout_dirty = true;
    }

    // ---- accessors --------------------------------------------------------

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Live watch count (useful for tests and tooling).
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn ticker_count(&self) -> usize {
        self.tickers.len()
    }

    /// Whether a section's factory has run.
    pub fn slot_rendered(&self, section_id: &str) -> bool {
        self.registry
            .slot(section_id)
            .map(|s| s.rendered())
            .unwrap_or(false)
    }

    /// A region's derived scroll distance (after the last layout pass).
    pub fn region_distance(&self, id: RegionId) -> Option<f32> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.scroll_distance())
    }

    // ---- stepping ---------------------------------------------------------

    /// Step the orchestration by dt seconds with the frame's inputs,
    /// producing property changes and events. After teardown this is a
    /// guaranteed no-op returning empty outputs.
    pub fn update(&mut self, dt_s: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        if self.torn_down {
            return &self.outputs;
        }

        // 1) Apply host inputs.
        self.apply_inputs(inputs);

        // 2) Resize debounce: coalesce bursts, recompute once afterwards.
        if let Some(left) = self.resize_quiet_ms.as_mut() {
            *left -= dt_s * 1000.0;
            if *left <= 0.0 {
                self.resize_quiet_ms = None;
                self.layout_dirty = true;
            }
        }
        if self.layout_dirty && self.resize_quiet_ms.is_none() {
            self.refresh_layout();
        }

        // 3) Internal clocks.
        self.advance_scroll_tween(dt_s);
        self.newsletter.update(dt_s, &mut self.outputs);
        self.tickers.step(dt_s, &mut self.outputs);

        // 4) Viewport watches -> discrete triggers.
        let crossings = self.watches.evaluate(&self.viewport, &self.geometry);
        for crossing in crossings {
            match crossing.kind {
                CrossingKind::Entered => {
                    self.push_event(Event::WatchEntered { watch: crossing.watch })
                }
                CrossingKind::Exited => {
                    self.push_event(Event::WatchExited { watch: crossing.watch })
                }
            }
            match self.watch_bindings.get(&crossing.watch) {
                Some(WatchBinding::Directive(did)) => {
                    let did = *did;
                    self.fire_directive(did, crossing.kind);
                }
                Some(WatchBinding::Slot(section)) => {
                    let section = section.clone();
                    if self.registry.render(&section, &mut self.outputs) {
                        log::debug!("section '{section}' rendered");
                        self.push_event(Event::SlotRendered { section });
                    }
                }
                None => {}
            }
        }

        // 5) Discrete tweens.
        self.step_tweens(dt_s);

        // 6) Continuous: pins, scrubs, progress, flags.
        self.step_regions();
        self.step_scrubs();
        self.step_progress_and_flags();

        // Cap events per tick (oldest kept; overflow dropped).
        if self.outputs.events.len() > self.cfg.max_events_per_tick {
            self.outputs.events.truncate(self.cfg.max_events_per_tick);
        }

        &self.outputs
    }

    /// Retire all watches, cancel all tickers and the scroll tween, hide
    /// and drop the shared overlay, and clear every registration. Returns
    /// the final emissions; every later `update` is empty.
    pub fn teardown(&mut self) -> Outputs {
        let mut last = Outputs::default();
        self.overlay.hide(&mut last);
        self.watches.retire_all();
        self.watch_bindings.clear();
        self.tickers.cancel_all();
        self.scroll_tween = None;
        self.newsletter.reset();
        self.directives.clear();
        self.regions.clear();
        self.region_offsets.clear();
        self.progress_bindings.clear();
        self.scroll_flags.clear();
        self.registry.clear();
        self.torn_down = true;
        log::debug!("orchestrator torn down");
        last
    }

    // ---- internals --------------------------------------------------------

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                Command::ScrollTo { target, offset_px } => self.start_scroll_to(&target, offset_px),
                Command::SubmitNewsletter { email } => {
                    self.newsletter.submit(&email, &mut self.outputs)
                }
            }
        }

        if let Some(y) = inputs.scroll_y {
            // A user scroll always wins over an in-flight smooth scroll.
            if self.scroll_tween.take().is_some() {
                log::debug!("smooth scroll cancelled by user scroll");
            }
            self.viewport.scroll_y = y;
        }
        if let Some(size) = inputs.resize {
            self.viewport.width = size.width;
            self.viewport.height = size.height;
            self.resize_quiet_ms = Some(self.cfg.resize_debounce_ms);
        }
        if let Some(doc) = inputs.document {
            self.document = doc;
        }
        for update in inputs.geometry {
            if update.rect.is_degenerate() {
                log::warn!(
                    "degenerate rect for '{}' ({}x{}); kept but inert",
                    update.target,
                    update.rect.width,
                    update.rect.height
                );
            }
            self.geometry.insert(update.target, update.rect);
            if self.resize_quiet_ms.is_none() {
                self.layout_dirty = true;
            }
        }
        for ev in inputs.pointer {
            match ev {
                PointerEvent::Enter { x, y, content } => {
                    self.overlay.show(&content, x, y, &mut self.outputs)
                }
                PointerEvent::Move { x, y } => self.overlay.move_to(x, y, &mut self.outputs),
                PointerEvent::Leave => self.overlay.hide(&mut self.outputs),
            }
        }
    }

    /// Recompute layout-derived quantities from current geometry.
    fn refresh_layout(&mut self) {
        self.layout_dirty = false;
        for region in &mut self.regions {
            region.refresh(&self.viewport, &self.geometry);
        }
        // Force continuous outputs to re-emit against the new layout.
        for rt in &mut self.directives {
            rt.last_scrub = None;
        }
        self.region_offsets.clear();
        for pb in &mut self.progress_bindings {
            pb.last = None;
        }
    }

    fn fire_directive(&mut self, id: DirectiveId, kind: CrossingKind) {
        let rt = match self.directives.iter_mut().find(|r| r.id == id) {
            Some(r) if !r.dropped => r,
            _ => return,
        };
        match kind {
            CrossingKind::Entered => {
                for (i, tween) in rt.tweens.iter_mut().enumerate() {
                    tween.play(Direction::Forward, rt.directive.delay.for_index(i));
                }
                rt.was_active = true;
                self.outputs.events.push(Event::DirectiveStarted { directive: id });
            }
            CrossingKind::Exited => {
                if matches!(
                    rt.directive.trigger,
                    Trigger::Enter {
                        policy: TriggerPolicy::ReverseOnExit,
                        ..
                    }
                ) {
                    // Reverse plays immediately; stagger applies on entry only.
                    for tween in rt.tweens.iter_mut() {
                        tween.play(Direction::Reverse, 0.0);
                    }
                    rt.was_active = true;
                }
            }
        }
    }

    fn step_tweens(&mut self, dt_s: f32) {
        for rt in &mut self.directives {
            if rt.dropped || !matches!(rt.directive.trigger, Trigger::Enter { .. }) {
                continue;
            }
            let mut any_active = false;
            for (i, tween) in rt.tweens.iter_mut().enumerate() {
                if let Some(progress) = tween.step(dt_s) {
                    let handle = &rt.handles[i];
                    for (prop, to_v) in &rt.directive.to {
                        let value = match rt.directive.from.get(prop) {
                            Some(from_v) => lerp_value(from_v, to_v, progress),
                            // No from-state: step to the end value only.
                            None if progress >= 1.0 => to_v.clone(),
                            None => continue,
                        };
                        self.outputs.push_change(Change {
                            target: handle.clone(),
                            prop: prop.clone(),
                            value,
                        });
                    }
                }
                any_active |= tween.is_active();
            }
            if rt.was_active && !any_active {
                rt.was_active = false;
                self.outputs.events.push(Event::DirectiveSettled { directive: rt.id });
            }
        }
    }

    fn step_regions(&mut self) {
        let scroll = self.viewport.scroll_y;
        for region in &mut self.regions {
            match region.update_pin(scroll) {
                Some(PinTransition::Engaged) => {
                    log::debug!("region {:?} pinned", region.id);
                    self.outputs.events.push(Event::RegionPinned { region: region.id });
                }
                Some(PinTransition::Released) => {
                    log::debug!("region {:?} released", region.id);
                    self.outputs
                        .events
                        .push(Event::RegionReleased { region: region.id });
                }
                None => {}
            }
            // Pinned content slides horizontally in lockstep with scroll.
            if let RegionMode::Pinned { content } = &region.mode {
                let offset = -region.progress(scroll) * region.scroll_distance();
                let stale = self
                    .region_offsets
                    .get(&region.id)
                    .map(|last| (last - offset).abs() > f32::EPSILON)
                    .unwrap_or(true);
                if stale {
                    self.region_offsets.insert(region.id, offset);
                    self.outputs.push_change(Change {
                        target: content.clone(),
                        prop: "x".into(),
                        value: Value::Scalar(offset),
                    });
                }
            }
        }
    }

    fn step_scrubs(&mut self) {
        let scroll = self.viewport.scroll_y;
        for rt in &mut self.directives {
            if rt.dropped {
                continue;
            }
            let region_id = match rt.directive.trigger {
                Trigger::Scrub { region } => region,
                _ => continue,
            };
            let region = match self.regions.iter().find(|r| r.id == region_id) {
                Some(r) => r,
                None => continue,
            };
            let eased = rt.directive.ease.apply(region.progress(scroll));
            let stale = rt
                .last_scrub
                .map(|last| (last - eased).abs() > f32::EPSILON)
                .unwrap_or(true);
            if !stale {
                continue;
            }
            rt.last_scrub = Some(eased);
            for handle in &rt.handles {
                for (prop, to_v) in &rt.directive.to {
                    if let Some(from_v) = rt.directive.from.get(prop) {
                        self.outputs.push_change(Change {
                            target: handle.clone(),
                            prop: prop.clone(),
                            value: lerp_value(from_v, to_v, eased),
                        });
                    }
                }
            }
        }
    }

    fn step_progress_and_flags(&mut self) {
        let progress = self.document.progress(&self.viewport);
        for pb in &mut self.progress_bindings {
            let handle = match &pb.handle {
                Some(h) => h.clone(),
                None => continue,
            };
            let stale = pb
                .last
                .map(|last| (last - progress).abs() > f32::EPSILON)
                .unwrap_or(true);
            if stale {
                pb.last = Some(progress);
                self.outputs.push_change(Change {
                    target: handle,
                    prop: pb.prop.clone(),
                    value: Value::Scalar(progress),
                });
            }
        }

        let scroll = self.viewport.scroll_y;
        for sf in &mut self.scroll_flags {
            let handle = match &sf.handle {
                Some(h) => h.clone(),
                None => continue,
            };
            let state = scroll > sf.threshold_px;
            if sf.last != Some(state) {
                sf.last = Some(state);
                self.outputs.push_change(Change {
                    target: handle,
                    prop: sf.prop.clone(),
                    value: Value::Bool(state),
                });
            }
        }
    }

    fn start_scroll_to(&mut self, target: &TargetHandle, offset_px: f32) {
        let rect = match self.geometry.get(target) {
            Some(r) => *r,
            None => {
                log::warn!("scroll-to target '{target}' has no geometry; ignored");
                return;
            }
        };
        let to_y = {
            let base = (rect.y - offset_px).max(0.0);
            let span = self.document.scroll_height - self.viewport.height;
            if span > 0.0 {
                base.min(span)
            } else {
                base
            }
        };
        let mut tween = Tween::new(SCROLL_TO_DURATION_MS, Ease::OutCubic);
        tween.play(Direction::Forward, 0.0);
        self.scroll_tween = Some(ScrollTween {
            from_y: self.viewport.scroll_y,
            to_y,
            tween,
        });
    }

    fn advance_scroll_tween(&mut self, dt_s: f32) {
        let Some(st) = self.scroll_tween.as_mut() else {
            return;
        };
        if let Some(progress) = st.tween.step(dt_s) {
            let y = lerp_f32(st.from_y, st.to_y, progress);
            self.viewport.scroll_y = y;
            self.outputs.push_change(Change {
                target: DOCUMENT_TARGET.to_string(),
                prop: "scroll_y".into(),
                value: Value::Scalar(y),
            });
        }
        if !st.tween.is_active() {
            self.scroll_tween = None;
            self.outputs.events.push(Event::ScrollSettled);
        }
    }

    fn push_event(&mut self, event: Event) {
        if self.outputs.events.len() < self.cfg.max_events_per_tick {
            self.outputs.push_event(event);
        }
    }
}
