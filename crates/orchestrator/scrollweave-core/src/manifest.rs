//! Page manifest: the declarative JSON description of a page's scroll
//! behavior (regions, directives, lazy visualization slots, progress and
//! flag bindings).
//!
//! Notes:
//! - Durations are milliseconds in the JSON and stay milliseconds.
//! - Thresholds are visible fractions in [0,1].
//! - Values are converted from untagged raw shapes (number, {x,y},
//!   {r,g,b}, {h,s,l}, bool, string) into the core Value enum.
//! - Scrub directives reference regions by name; ids are assigned when
//!   the manifest is loaded into an orchestrator.

use serde::Deserialize;

use crate::directive::{Delay, TriggerPolicy};
use crate::ease::Ease;
use crate::value::Value;

/// Parse a page manifest from JSON.
pub fn parse_page_manifest_json(s: &str) -> Result<PageManifest, String> {
    let raw: RawManifest = serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))?;

    let mut regions = Vec::with_capacity(raw.regions.len());
    for r in raw.regions {
        regions.push(RegionSpec {
            name: r.name,
            section: r.section,
            mode: match r.mode {
                RawRegionMode::Span => RegionModeSpec::Span,
                RawRegionMode::Pinned { content } => RegionModeSpec::Pinned { content },
            },
        });
    }

    let mut directives = Vec::with_capacity(raw.directives.len());
    for d in raw.directives {
        let from = d
            .from
            .into_iter()
            .map(|(k, v)| Ok((k, to_core_value(&v)?)))
            .collect::<Result<_, String>>()?;
        let to = d
            .to
            .into_iter()
            .map(|(k, v)| Ok((k, to_core_value(&v)?)))
            .collect::<Result<_, String>>()?;
        let trigger = match d.trigger {
            RawTrigger::Enter { threshold, policy } => TriggerSpec::Enter {
                threshold,
                policy: match policy {
                    RawPolicy::Once => TriggerPolicy::OnceOnEnter,
                    RawPolicy::Reverse => TriggerPolicy::ReverseOnExit,
                },
            },
            RawTrigger::Scrub { region } => TriggerSpec::Scrub { region },
        };
        directives.push(DirectiveSpec {
            name: d.name,
            targets: d.targets,
            watch: d.watch,
            from,
            to,
            duration_ms: d.duration,
            delay: match d.delay {
                None => Delay::Fixed(0.0),
                Some(RawDelay::Fixed(ms)) => Delay::Fixed(ms),
                Some(RawDelay::Staggered { base, step }) => Delay::Staggered {
                    base_ms: base,
                    step_ms: step,
                },
            },
            ease: d.ease.unwrap_or_default(),
            trigger,
        });
    }

    let manifest = PageManifest {
        name: raw.name,
        regions,
        directives,
        visualizations: raw
            .visualizations
            .into_iter()
            .map(|v| VisualizationSpec {
                section_id: v.section,
                container: v.container,
                threshold: v.threshold,
            })
            .collect(),
        progress: raw
            .progress
            .into_iter()
            .map(|p| ProgressSpec {
                target: p.target,
                prop: p.prop,
            })
            .collect(),
        flags: raw
            .flags
            .into_iter()
            .map(|f| FlagSpec {
                target: f.target,
                prop: f.prop,
                threshold_px: f.threshold_px,
            })
            .collect(),
    };
    manifest.validate_basic()?;
    Ok(manifest)
}

// ----- typed manifest -----

#[derive(Clone, Debug)]
pub struct PageManifest {
    pub name: String,
    pub regions: Vec<RegionSpec>,
    pub directives: Vec<DirectiveSpec>,
    pub visualizations: Vec<VisualizationSpec>,
    pub progress: Vec<ProgressSpec>,
    pub flags: Vec<FlagSpec>,
}

impl PageManifest {
    /// Cross-reference checks the loader can do without an orchestrator.
    pub fn validate_basic(&self) -> Result<(), String> {
        for d in &self.directives {
            if d.targets.is_empty() {
                return Err(format!("directive '{}' has no targets", d.name));
            }
            if let TriggerSpec::Scrub { region } = &d.trigger {
                if !self.regions.iter().any(|r| &r.name == region) {
                    return Err(format!(
                        "directive '{}' references unknown region '{region}'",
                        d.name
                    ));
                }
            }
        }
        let mut seen = std::collections::HashSet::new();
        for v in &self.visualizations {
            if !seen.insert(&v.section_id) {
                return Err(format!("duplicate visualization section '{}'", v.section_id));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct RegionSpec {
    pub name: String,
    pub section: String,
    pub mode: RegionModeSpec,
}

#[derive(Clone, Debug)]
pub enum RegionModeSpec {
    Pinned { content: String },
    Span,
}

#[derive(Clone, Debug)]
pub enum TriggerSpec {
    Enter {
        threshold: f32,
        policy: TriggerPolicy,
    },
    Scrub {
        region: String,
    },
}

#[derive(Clone, Debug)]
pub struct DirectiveSpec {
    pub name: String,
    pub targets: Vec<String>,
    pub watch: Option<String>,
    pub from: indexmap::IndexMap<String, Value>,
    pub to: indexmap::IndexMap<String, Value>,
    pub duration_ms: u32,
    pub delay: Delay,
    pub ease: Ease,
    pub trigger: TriggerSpec,
}

#[derive(Clone, Debug)]
pub struct VisualizationSpec {
    pub section_id: String,
    pub container: String,
    /// None falls back to the orchestrator's configured default.
    pub threshold: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct ProgressSpec {
    pub target: String,
    pub prop: String,
}

#[derive(Clone, Debug)]
pub struct FlagSpec {
    pub target: String,
    pub prop: String,
    pub threshold_px: f32,
}

// ----- value conversion -----

fn to_core_value(v: &RawValue) -> Result<Value, String> {
    match v {
        RawValue::Boolean(b) => Ok(Value::Bool(*b)),
        RawValue::Number(n) => Ok(Value::Scalar(*n as f32)),
        RawValue::String(s) => Ok(Value::Text(s.clone())),
        RawValue::Vector2 { x, y } => Ok(Value::Vec2([*x as f32, *y as f32])),
        RawValue::Rgb { r, g, b } => Ok(Value::Color([*r as f32, *g as f32, *b as f32, 1.0])),
        RawValue::Hsl { h, s, l } => {
            let (r, g, b) = hsl_to_rgb(*h as f32, *s as f32, *l as f32);
            Ok(Value::Color([r, g, b, 1.0]))
        }
    }
}

/// HSL (0..1) to RGB (0..1)
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let h = ((h % 1.0) + 1.0) % 1.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);
    (r, g, b)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawManifest {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<RawRegion>,
    #[serde(default)]
    pub directives: Vec<RawDirective>,
    #[serde(default)]
    pub visualizations: Vec<RawVisualization>,
    #[serde(default)]
    pub progress: Vec<RawProgress>,
    #[serde(default)]
    pub flags: Vec<RawFlag>,
}

#[derive(Debug, Deserialize)]
struct RawRegion {
    pub name: String,
    pub section: String,
    pub mode: RawRegionMode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawRegionMode {
    Span,
    Pinned { content: String },
}

#[derive(Debug, Deserialize)]
struct RawDirective {
    pub name: String,
    pub targets: Vec<String>,
    #[serde(default)]
    pub watch: Option<String>,
    #[serde(default)]
    pub from: indexmap::IndexMap<String, RawValue>,
    #[serde(default)]
    pub to: indexmap::IndexMap<String, RawValue>,
    /// Milliseconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub delay: Option<RawDelay>,
    #[serde(default)]
    pub ease: Option<Ease>,
    pub trigger: RawTrigger,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawDelay {
    Fixed(f32),
    Staggered { base: f32, step: f32 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawTrigger {
    Enter { threshold: f32, policy: RawPolicy },
    Scrub { region: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawPolicy {
    Once,
    Reverse,
}

#[derive(Debug, Deserialize)]
struct RawVisualization {
    pub section: String,
    pub container: String,
    #[serde(default)]
    pub threshold: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RawProgress {
    pub target: String,
    pub prop: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlag {
    pub target: String,
    pub prop: String,
    pub threshold_px: f32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Boolean(bool),
    Number(f64),
    String(String),
    // Put more specific shapes BEFORE less specific to avoid untagged
    // matching pitfalls.
    Vector2 { x: f64, y: f64 },
    Rgb { r: f64, g: f64, b: f64 },
    Hsl { h: f64, s: f64, l: f64 },
}
