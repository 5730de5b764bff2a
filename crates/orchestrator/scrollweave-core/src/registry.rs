//! Lazy visualization registry.
//!
//! Each slot pairs a section container with a factory that renders a
//! visualization into it the first time the section scrolls into view.
//! The factory is stored as an FnOnce and consumed through Option::take
//! behind the `rendered` flag, so a second invocation is structurally
//! impossible no matter how the viewport jitters.

use indexmap::IndexMap;

use crate::binding::{TargetHandle, TargetPath, TargetResolver};
use crate::error::OrchestratorError;
use crate::outputs::Outputs;

/// Renders one visualization into its container. Receives the tick's
/// outputs so setup can emit initial property changes.
pub type Factory = Box<dyn FnOnce(&mut Outputs)>;

pub struct VisualizationSlot {
    pub section_id: String,
    pub container: TargetPath,
    pub threshold: f32,
    /// Set once the container path resolves; None until bind().
    pub handle: Option<TargetHandle>,
    factory: Option<Factory>,
    rendered: bool,
}

impl VisualizationSlot {
    #[inline]
    pub fn rendered(&self) -> bool {
        self.rendered
    }
}

#[derive(Default)]
pub struct LazyVisualizationRegistry {
    slots: IndexMap<String, VisualizationSlot>,
}

impl LazyVisualizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a section. Duplicate section ids are
    /// rejected; container absence is not checked here (that happens at
    /// bind(), where an absent container demotes the slot to a no-op).
    pub fn register(
        &mut self,
        section_id: &str,
        container: TargetPath,
        threshold: f32,
        factory: Factory,
    ) -> Result<(), OrchestratorError> {
        if self.slots.contains_key(section_id) {
            return Err(OrchestratorError::DuplicateSection(section_id.to_string()));
        }
        self.slots.insert(
            section_id.to_string(),
            VisualizationSlot {
                section_id: section_id.to_string(),
                container,
                threshold: threshold.clamp(0.0, 1.0),
                handle: None,
                factory: Some(factory),
                rendered: false,
            },
        );
        Ok(())
    }

    /// Resolve container paths. Slots whose container is absent on this
    /// page variant drop their factory and become no-ops.
    pub fn bind(&mut self, resolver: &mut dyn TargetResolver) -> Vec<(String, TargetHandle, f32)> {
        let mut newly_bound = Vec::new();
        for slot in self.slots.values_mut() {
            if slot.handle.is_some() || slot.rendered {
                continue;
            }
            match resolver.resolve(&slot.container) {
                Some(handle) => {
                    slot.handle = Some(handle.clone());
                    newly_bound.push((slot.section_id.clone(), handle, slot.threshold));
                }
                None => {
                    log::warn!(
                        "visualization '{}' container '{}' absent; skipping",
                        slot.section_id,
                        slot.container
                    );
                    slot.factory = None;
                    slot.rendered = true;
                }
            }
        }
        newly_bound
    }

    /// Invoke the factory for a section, at most once per page lifetime.
    /// Returns true when the factory actually ran.
    pub fn render(&mut self, section_id: &str, outputs: &mut Outputs) -> bool {
        let slot = match self.slots.get_mut(section_id) {
            Some(s) => s,
            None => return false,
        };
        if slot.rendered {
            log::warn!("duplicate render trigger for '{}' suppressed", section_id);
            return false;
        }
        slot.rendered = true;
        match slot.factory.take() {
            Some(factory) => {
                factory(outputs);
                true
            }
            None => false,
        }
    }

    pub fn slot(&self, section_id: &str) -> Option<&VisualizationSlot> {
        self.slots.get(section_id)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
