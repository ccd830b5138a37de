//! Scene-graph grouping: lazy per-category roots under one shared parent.

use std::collections::HashMap;

use tracing::debug;

use crate::actor::{ActorHandle, PoolCategory};
use crate::world::ActorWorld;

/// Scene label of the overarching root all category groups hang under
const ROOT_LABEL: &str = "PooledActors";

/// Lazily created group actors, one per [`PoolCategory`], each parented
/// under a single overarching root.
///
/// Nothing here exists until the first instance of a category is created.
/// The groups are ordinary host-owned actors, so a cached handle can go
/// stale like any other; it is revalidated on every access and quietly
/// replaced when dead.
#[derive(Debug, Default)]
pub(crate) struct CategoryRoots {
    root: Option<ActorHandle>,
    groups: HashMap<PoolCategory, ActorHandle>,
}

impl CategoryRoots {
    /// Group actor for `category`, creating it (and the overarching root)
    /// on first use.
    ///
    /// Grouping is best-effort: `None` means the host refused to create a
    /// group actor and the caller should leave its instance unparented.
    pub(crate) fn get_or_create<W: ActorWorld>(
        &mut self,
        world: &mut W,
        category: PoolCategory,
    ) -> Option<ActorHandle> {
        let root = self.ensure_root(world)?;

        if let Some(&group) = self.groups.get(&category) {
            if world.is_valid(group) {
                return Some(group);
            }
            debug!(category = %category, "Category group went stale; recreating");
        }

        let Some(group) = world.spawn_group(category.label()) else {
            debug!(category = %category, "Host refused to create a category group actor");
            return None;
        };
        // Fresh groups sit at the origin, so relative placement is identity.
        world.attach(group, root, false);
        self.groups.insert(category, group);
        Some(group)
    }

    fn ensure_root<W: ActorWorld>(&mut self, world: &mut W) -> Option<ActorHandle> {
        if let Some(root) = self.root {
            if world.is_valid(root) {
                return Some(root);
            }
        }
        let Some(root) = world.spawn_group(ROOT_LABEL) else {
            debug!("Host refused to create the pool root actor");
            return None;
        };
        self.root = Some(root);
        Some(root)
    }

    /// Destroy every still-valid group actor, then the overarching root,
    /// and forget them all. Returns how many actors were destroyed.
    pub(crate) fn teardown<W: ActorWorld>(&mut self, world: &mut W) -> u64 {
        let mut destroyed = 0;
        for (_, group) in self.groups.drain() {
            if world.is_valid(group) {
                world.destroy(group);
                destroyed += 1;
            }
        }
        if let Some(root) = self.root.take() {
            if world.is_valid(root) {
                world.destroy(root);
                destroyed += 1;
            }
        }
        destroyed
    }
}
