//! Activation state machine.
//!
//! At most one hotspot is active at a time. Picking the active hotspot again
//! turns it off; picking any other hotspot makes that one active and implicitly
//! turns the previous one off. Indicator intensities are derived from this
//! state and never stored anywhere else.

use bevy_ecs::prelude::*;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationState {
    #[default]
    Inactive,
    Active(Entity),
}

/// Outcome of feeding one pick into the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationChange {
    /// `hotspot` became active. `previous` is the hotspot it replaced, if any.
    Activated {
        hotspot: Entity,
        previous: Option<Entity>,
    },
    /// `hotspot` was active and has been toggled off.
    Deactivated { hotspot: Entity },
}

impl ActivationState {
    /// Apply a pick of `hotspot` and report the transition taken.
    pub fn apply_pick(&mut self, hotspot: Entity) -> ActivationChange {
        match *self {
            ActivationState::Active(current) if current == hotspot => {
                *self = ActivationState::Inactive;
                ActivationChange::Deactivated { hotspot }
            }
            ActivationState::Active(current) => {
                *self = ActivationState::Active(hotspot);
                ActivationChange::Activated {
                    hotspot,
                    previous: Some(current),
                }
            }
            ActivationState::Inactive => {
                *self = ActivationState::Active(hotspot);
                ActivationChange::Activated {
                    hotspot,
                    previous: None,
                }
            }
        }
    }

    pub fn active(&self) -> Option<Entity> {
        match *self {
            ActivationState::Active(e) => Some(e),
            ActivationState::Inactive => None,
        }
    }

    pub fn is_active(&self, hotspot: Entity) -> bool {
        self.active() == Some(hotspot)
    }

    /// Light intensity of `hotspot`'s indicator: 1.0 when active, else 0.0.
    pub fn indicator_intensity(&self, hotspot: Entity) -> f32 {
        if self.is_active(hotspot) { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entities() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn starts_inactive() {
        let state = ActivationState::default();
        assert_eq!(state, ActivationState::Inactive);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn first_pick_activates() {
        let (a, _) = two_entities();
        let mut state = ActivationState::default();
        let change = state.apply_pick(a);
        assert_eq!(
            change,
            ActivationChange::Activated {
                hotspot: a,
                previous: None
            }
        );
        assert!(state.is_active(a));
        assert_eq!(state.indicator_intensity(a), 1.0);
    }

    #[test]
    fn second_pick_of_same_hotspot_toggles_off() {
        let (a, _) = two_entities();
        let mut state = ActivationState::default();
        state.apply_pick(a);
        let change = state.apply_pick(a);
        assert_eq!(change, ActivationChange::Deactivated { hotspot: a });
        assert_eq!(state, ActivationState::Inactive);
        assert_eq!(state.indicator_intensity(a), 0.0);
    }

    #[test]
    fn switching_hotspots_clears_previous_indicator() {
        let (a, b) = two_entities();
        let mut state = ActivationState::default();
        state.apply_pick(a);
        let change = state.apply_pick(b);
        assert_eq!(
            change,
            ActivationChange::Activated {
                hotspot: b,
                previous: Some(a)
            }
        );
        assert_eq!(state.indicator_intensity(a), 0.0);
        assert_eq!(state.indicator_intensity(b), 1.0);
    }

    #[test]
    fn third_pick_reactivates() {
        let (a, _) = two_entities();
        let mut state = ActivationState::default();
        state.apply_pick(a);
        state.apply_pick(a);
        state.apply_pick(a);
        assert!(state.is_active(a));
    }
}
