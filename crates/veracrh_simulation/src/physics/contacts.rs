//! Contact notifications (physics collaborator → ECS)
//!
//! `ContactBegan { body, other }`: "у `body` началось касание с `other`".
//! Обработчики реагируют только на своё `body` (enemy contact damage,
//! projectile resolution, pickups), поэтому физика шлёт пару в обе стороны.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

/// Глубина подъёма по иерархии (collider на child → actor на parent)
const MAX_ANCESTOR_DEPTH: usize = 8;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBegan {
    pub body: Entity,
    pub other: Entity,
}

impl ContactBegan {
    /// Both directions of one physical contact
    pub fn pair(a: Entity, b: Entity) -> [ContactBegan; 2] {
        [
            ContactBegan { body: a, other: b },
            ContactBegan { body: b, other: a },
        ]
    }
}

/// First entity (starting from `entity` itself, then its parents) accepted by `matches`.
pub fn find_in_ancestors(
    entity: Entity,
    parents: &Query<&ChildOf>,
    mut matches: impl FnMut(Entity) -> bool,
) -> Option<Entity> {
    let mut current = entity;

    for _ in 0..MAX_ANCESTOR_DEPTH {
        if matches(current) {
            return Some(current);
        }

        let Ok(child_of) = parents.get(current) else {
            return None;
        };
        current = child_of.parent();
    }

    None
}

/// System: rapier `CollisionEvent::Started` → `ContactBegan` (обе стороны)
pub fn forward_rapier_collisions(
    mut collisions: EventReader<CollisionEvent>,
    mut contacts: EventWriter<ContactBegan>,
) {
    for event in collisions.read() {
        if let CollisionEvent::Started(a, b, _) = event {
            for contact in ContactBegan::pair(*a, *b) {
                contacts.write(contact);
            }
        }
    }
}

/// Подключается хостом вместе с `RapierPhysicsPlugin`.
///
/// Без него контакты пишет сам хост (или тесты) через `EventWriter<ContactBegan>`.
pub struct RapierContactBridgePlugin;

impl Plugin for RapierContactBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>().add_systems(
            FixedUpdate,
            forward_rapier_collisions.before(crate::SimulationSet::Contacts),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

    #[test]
    fn test_pair_is_symmetric() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        let [first, second] = ContactBegan::pair(a, b);
        assert_eq!(first, ContactBegan { body: a, other: b });
        assert_eq!(second, ContactBegan { body: b, other: a });
    }

    #[test]
    fn test_rapier_started_events_are_forwarded_both_ways() {
        let mut world = World::new();
        world.init_resource::<Events<CollisionEvent>>();
        world.init_resource::<Events<ContactBegan>>();

        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        world.send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
        world.send_event(CollisionEvent::Stopped(a, b, CollisionEventFlags::empty()));

        world.run_system_once(forward_rapier_collisions).unwrap();

        let events = world.resource::<Events<ContactBegan>>();
        let forwarded: Vec<_> = events.get_cursor().read(events).copied().collect();
        assert_eq!(forwarded, ContactBegan::pair(a, b).to_vec());
    }

    #[test]
    fn test_find_in_ancestors_walks_up_to_parent() {
        let mut world = World::new();
        let actor = world.spawn_empty().id();
        let collider = world.spawn(ChildOf(actor)).id();

        let found = world
            .run_system_once(move |parents: Query<&ChildOf>| {
                find_in_ancestors(collider, &parents, |e| e == actor)
            })
            .unwrap();
        assert_eq!(found, Some(actor));

        let missing = world
            .run_system_once(move |parents: Query<&ChildOf>| {
                find_in_ancestors(collider, &parents, |_| false)
            })
            .unwrap();
        assert_eq!(missing, None);
    }
}
