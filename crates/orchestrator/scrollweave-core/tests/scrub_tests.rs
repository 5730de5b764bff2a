use indexmap::IndexMap;
use scrollweave::{
    directive::{AnimationDirective, Delay, Trigger},
    engine::Orchestrator,
    geometry::Rect,
    inputs::{GeometryUpdate, Inputs, ViewportSize},
    region::RegionMode,
    Config, Ease, Event, IdentityResolver, Value,
};

fn props(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn geo(target: &str, x: f32, y: f32, w: f32, h: f32) -> GeometryUpdate {
    GeometryUpdate {
        target: target.to_string(),
        rect: Rect::new(x, y, w, h),
    }
}

fn scroll(y: f32) -> Inputs {
    Inputs {
        scroll_y: Some(y),
        ..Default::default()
    }
}

/// Orchestrator with a pinned region over a 1000px-wide viewport and a
/// content strip of the given width.
fn pinned_setup(content_width: f32) -> (Orchestrator, scrollweave::RegionId) {
    let mut orch = Orchestrator::new(Config::default());
    let region = orch.register_region(
        ".strip".to_string(),
        RegionMode::Pinned {
            content: ".strip-content".to_string(),
        },
    );
    orch.prebind(&mut IdentityResolver);

    let mut init = Inputs {
        resize: Some(ViewportSize {
            width: 1000.0,
            height: 600.0,
        }),
        ..Default::default()
    };
    init.geometry.push(geo(".strip", 0.0, 2000.0, 1000.0, 600.0));
    init.geometry
        .push(geo(".strip-content", 0.0, 2000.0, content_width, 600.0));
    orch.update(0.0, init);
    // Let the resize debounce drain so the layout pass runs.
    orch.update(0.3, Inputs::default());
    (orch, region)
}

fn scalar_changes<'a>(
    out: &'a scrollweave::Outputs,
    target: &str,
    prop: &str,
) -> Vec<f32> {
    out.changes
        .iter()
        .filter(|c| c.target == target && c.prop == prop)
        .filter_map(|c| match c.value {
            Value::Scalar(v) => Some(v),
            _ => None,
        })
        .collect()
}

/// it should treat a region with no scroll span as permanently at p=0
#[test]
fn zero_distance_region_yields_zero_progress() {
    // Content narrower than the viewport: scrollDistance <= 0.
    let (mut orch, region) = pinned_setup(800.0);
    assert!(orch.region_distance(region).unwrap() <= 0.0);

    let scrub = AnimationDirective {
        name: "strip-scrub".to_string(),
        targets: vec![".strip-content".to_string()],
        watch: None,
        from: props(&[("opacity", Value::Scalar(0.2))]),
        to: props(&[("opacity", Value::Scalar(1.0))]),
        duration_ms: 0,
        delay: Delay::Fixed(0.0),
        ease: Ease::Linear,
        trigger: Trigger::Scrub { region },
    };
    scrub.validate_basic().unwrap();
    orch.register_directive(scrub).unwrap();
    orch.prebind(&mut IdentityResolver);

    for y in [0.0, 2000.0, 2500.0, 9000.0] {
        let out = orch.update(0.016, scroll(y)).clone();
        for c in &out.changes {
            if let Value::Scalar(v) = c.value {
                assert!(v.is_finite(), "non-finite change for {}", c.target);
            }
        }
        // Progress stays pinned at 0: only ever the from-state.
        for v in scalar_changes(&out, ".strip-content", "opacity") {
            assert_eq!(v, 0.2);
        }
        assert!(!orch.region_distance(region).unwrap().is_nan());
    }
}

/// it should pin at the range start, scrub content in lockstep, and
/// release past the range end
#[test]
fn pinned_region_drives_content_offset() {
    // 3000px content - 1000px viewport = 2000px of scroll distance.
    let (mut orch, region) = pinned_setup(3000.0);
    assert_eq!(orch.region_distance(region).unwrap(), 2000.0);

    let out = orch.update(0.016, scroll(2000.0)).clone();
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, Event::RegionPinned { region: r } if *r == region)));

    // Halfway through the range: content shifted by half the distance.
    let out = orch.update(0.016, scroll(3000.0)).clone();
    let offsets = scalar_changes(&out, ".strip-content", "x");
    assert_eq!(offsets.last().copied(), Some(-1000.0));

    // A tick without scrolling re-emits nothing (O(1) quiet work).
    let out = orch.update(0.016, Inputs::default()).clone();
    assert!(scalar_changes(&out, ".strip-content", "x").is_empty());

    let out = orch.update(0.016, scroll(4100.0)).clone();
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, Event::RegionReleased { region: r } if *r == region)));
    // Offset clamps at the full distance.
    let offsets = scalar_changes(&out, ".strip-content", "x");
    assert_eq!(offsets.last().copied(), Some(-2000.0));
}

/// it should map span-region progress onto a parallax directive
#[test]
fn span_region_parallax_scrub() {
    let mut orch = Orchestrator::new(Config::default());
    let region = orch.register_region(".hero".to_string(), RegionMode::Span);
    orch.register_directive(AnimationDirective {
        name: "shape-drift".to_string(),
        targets: vec![".shape".to_string()],
        watch: None,
        from: props(&[("y", Value::Scalar(0.0))]),
        to: props(&[("y", Value::Scalar(200.0))]),
        duration_ms: 0,
        delay: Delay::Fixed(0.0),
        ease: Ease::Linear,
        trigger: Trigger::Scrub { region },
    })
    .unwrap();
    orch.prebind(&mut IdentityResolver);

    let mut init = Inputs::default();
    init.geometry.push(geo(".hero", 0.0, 0.0, 1000.0, 800.0));
    init.geometry.push(geo(".shape", 100.0, 100.0, 50.0, 50.0));
    orch.update(0.0, init);

    let out = orch.update(0.016, scroll(400.0)).clone();
    let ys = scalar_changes(&out, ".shape", "y");
    assert_eq!(ys.last().copied(), Some(100.0));

    let out = orch.update(0.016, scroll(1200.0)).clone();
    let ys = scalar_changes(&out, ".shape", "y");
    assert_eq!(ys.last().copied(), Some(200.0));
}

/// it should coalesce a resize burst into one recompute after the quiet
/// period
#[test]
fn resize_debounce_coalesces_recompute() {
    let (mut orch, region) = pinned_setup(3000.0);
    assert_eq!(orch.region_distance(region).unwrap(), 2000.0);

    // Burst of resizes inside the quiet window: distance must not move.
    for w in [900.0, 850.0, 800.0] {
        let inputs = Inputs {
            resize: Some(ViewportSize {
                width: w,
                height: 600.0,
            }),
            ..Default::default()
        };
        orch.update(0.05, inputs);
        assert_eq!(orch.region_distance(region).unwrap(), 2000.0);
    }

    // Quiet period elapses: one recompute against the final size.
    orch.update(0.3, Inputs::default());
    assert_eq!(orch.region_distance(region).unwrap(), 2200.0);
}

/// it should emit document scroll progress and edge-triggered flags
#[test]
fn progress_and_flag_bindings() {
    let mut orch = Orchestrator::new(Config::default());
    orch.register_scroll_progress(".progress-bar".to_string(), "value");
    orch.register_scroll_flag("#navbar".to_string(), "scrolled", 100.0);
    orch.prebind(&mut IdentityResolver);

    let init = Inputs {
        document: Some(scrollweave::DocumentMetrics {
            scroll_height: 2600.0,
        }),
        resize: Some(ViewportSize {
            width: 1000.0,
            height: 600.0,
        }),
        ..Default::default()
    };
    let out = orch.update(0.0, init).clone();
    // First pass emits the initial states.
    assert_eq!(scalar_changes(&out, ".progress-bar", "value"), vec![0.0]);
    assert!(out
        .changes
        .iter()
        .any(|c| c.target == "#navbar" && c.value == Value::Bool(false)));

    let out = orch.update(0.3, scroll(1000.0)).clone();
    assert_eq!(scalar_changes(&out, ".progress-bar", "value"), vec![0.5]);
    assert!(out
        .changes
        .iter()
        .any(|c| c.target == "#navbar" && c.value == Value::Bool(true)));

    // No movement, no re-emission.
    let out = orch.update(0.016, Inputs::default()).clone();
    assert!(scalar_changes(&out, ".progress-bar", "value").is_empty());
    assert!(!out.changes.iter().any(|c| c.target == "#navbar"));
}

/// it should animate scroll-to-anchor and yield to a user scroll
#[test]
fn smooth_scroll_to_anchor() {
    let mut orch = Orchestrator::new(Config::default());
    orch.prebind(&mut IdentityResolver);

    let mut init = Inputs {
        document: Some(scrollweave::DocumentMetrics {
            scroll_height: 5000.0,
        }),
        ..Default::default()
    };
    init.geometry.push(geo("#data-section", 0.0, 2600.0, 1000.0, 800.0));
    orch.update(0.0, init);

    let cmd = Inputs {
        commands: vec![scrollweave::Command::ScrollTo {
            target: "#data-section".to_string(),
            offset_px: 80.0,
        }],
        ..Default::default()
    };
    orch.update(0.0, cmd);
    let out = orch.update(0.4, Inputs::default()).clone();
    let ys = scalar_changes(&out, scrollweave::DOCUMENT_TARGET, "scroll_y");
    assert!(!ys.is_empty());
    assert!(ys[0] > 0.0 && ys[0] < 2520.0);

    // Run to completion: lands exactly on target minus offset.
    let out = orch.update(0.5, Inputs::default()).clone();
    let ys = scalar_changes(&out, scrollweave::DOCUMENT_TARGET, "scroll_y");
    assert_eq!(ys.last().copied(), Some(2520.0));
    assert!(out.events.iter().any(|e| matches!(e, Event::ScrollSettled)));

    // A new scroll-to interrupted by the user stops emitting.
    orch.update(0.0, Inputs {
        commands: vec![scrollweave::Command::ScrollTo {
            target: "#data-section".to_string(),
            offset_px: 0.0,
        }],
        ..Default::default()
    });
    orch.update(0.1, Inputs::default());
    let out = orch.update(0.1, scroll(10.0)).clone();
    assert!(scalar_changes(&out, scrollweave::DOCUMENT_TARGET, "scroll_y").is_empty());
    assert_eq!(orch.viewport().scroll_y, 10.0);
}
