//! Systems that run over every creature in the roster world.

use chrono::{DateTime, Utc};
use hecs::World;
use heropet_logic::afflictions::Catalog;
use heropet_logic::condition::describe;
use heropet_logic::config::DecayConfig;
use heropet_logic::creature::Creature;
use heropet_logic::decay::apply_elapsed;

/// Apply passive decay to every creature. Returns the ids of creatures that
/// died during this step, sorted.
pub fn decay_system(
    world: &mut World,
    config: &DecayConfig,
    delta_hours: f32,
    now: DateTime<Utc>,
) -> Vec<u64> {
    let mut died = Vec::new();
    for (_, creature) in world.query_mut::<&mut Creature>() {
        if apply_elapsed(creature, delta_hours, config, now)
            .death
            .is_some()
        {
            died.push(creature.id);
        }
    }
    died.sort_unstable();
    died
}

/// Ids of living creatures whose condition needs attention, sorted.
pub fn find_needing_attention(world: &World, catalog: &Catalog) -> Vec<u64> {
    let mut ids: Vec<u64> = world
        .query::<&Creature>()
        .iter()
        .filter(|(_, c)| describe(c, catalog).needs_attention)
        .map(|(_, c)| c.id)
        .collect();
    ids.sort_unstable();
    ids
}
