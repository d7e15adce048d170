//! Projectile systems: полёт + lifetime, резолв контактов.

use bevy::prelude::*;
use bevy_rapier3d::prelude::ColliderDisabled;

use crate::ai::{Enemy, EnemyConfig, EnemyState};
use crate::combat::projectile::{enemies_in_blast, resolve_contact, ContactResolution, ContactTarget};
use crate::combat::Projectile;
use crate::components::{Actor, Pickup};
use crate::logger;
use crate::physics::{find_in_ancestors, ContactBegan, PhysicsBody};
use crate::progression::EncounterDirector;

/// Тела без collision response: ColliderDisabled + rapier Sensor (снаряды, pickups)
type PassThroughFilter = Or<(With<ColliderDisabled>, With<Projectile>, With<Pickup>)>;

type EnemyQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, &'static mut EnemyState, &'static EnemyConfig, &'static Transform, &'static mut PhysicsBody),
    (With<Enemy>, Without<Projectile>),
>;

/// System: движение снарядов + lifetime countdown (FixedUpdate)
///
/// Истёкший снаряд исчезает без эффекта.
pub fn advance_projectiles(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Projectile, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut projectile, mut transform) in projectiles.iter_mut() {
        if projectile.is_spent() {
            continue;
        }

        transform.translation += projectile.velocity * delta;

        if projectile.tick_lifetime(delta) {
            projectile.mark_spent();
            commands.entity(entity).try_despawn();
        }
    }
}

/// System: ContactBegan (body = снаряд) → kill / absorb / explode
///
/// Первый подходящий контакт выигрывает: снаряд помечается spent до того,
/// как смотрим на следующие контакты этого же тика.
pub fn resolve_projectile_contacts(
    mut commands: Commands,
    mut contacts: EventReader<ContactBegan>,
    mut projectiles: Query<(Entity, &mut Projectile, &Transform), Without<Enemy>>,
    mut enemies: EnemyQuery,
    actors: Query<&Actor>,
    parents: Query<&ChildOf>,
    pass_through: Query<(), PassThroughFilter>,
    mut director: EncounterDirector,
) {
    for contact in contacts.read() {
        let Ok((entity, mut projectile, transform)) = projectiles.get_mut(contact.body) else {
            continue;
        };

        if projectile.is_spent() {
            continue;
        }

        let target = classify_target(contact.other, &enemies, &actors, &parents, &pass_through);

        match resolve_contact(projectile.kind, projectile.owner, target) {
            ContactResolution::Ignore => continue,
            ContactResolution::Absorbed => {
                projectile.mark_spent();
            }
            ContactResolution::KillEnemy(enemy) => {
                projectile.mark_spent();
                kill_enemy(&mut director, &mut enemies, enemy);
            }
            ContactResolution::Explode => {
                projectile.mark_spent();

                let impact = transform.translation;
                let victims = enemies_in_blast(
                    impact,
                    projectile.explosion_radius,
                    enemies
                        .iter()
                        .filter(|(_, state, ..)| !state.is_dead())
                        .map(|(enemy, _, _, enemy_transform, _)| (enemy, enemy_transform.translation)),
                );

                logger::log(&format!(
                    "Rocket exploded at {:?}: {} enemies in radius {}",
                    impact,
                    victims.len(),
                    projectile.explosion_radius
                ));

                for victim in victims {
                    kill_enemy(&mut director, &mut enemies, victim);
                }
            }
        }

        commands.entity(entity).try_despawn();
    }
}

/// Подъём по иерархии: collider может висеть на child entity актора
fn classify_target(
    other: Entity,
    enemies: &EnemyQuery,
    actors: &Query<&Actor>,
    parents: &Query<&ChildOf>,
    pass_through: &Query<(), PassThroughFilter>,
) -> ContactTarget {
    if pass_through.contains(other) {
        return ContactTarget::PassThrough;
    }

    if let Some(enemy) = find_in_ancestors(other, parents, |e| enemies.contains(e)) {
        let dead = enemies
            .get(enemy)
            .map(|(_, state, ..)| state.is_dead())
            .unwrap_or(true);

        return if dead {
            ContactTarget::PassThrough
        } else {
            ContactTarget::Enemy(enemy)
        };
    }

    match find_in_ancestors(other, parents, |e| actors.contains(e)) {
        Some(actor) => actors
            .get(actor)
            .map(|actor| ContactTarget::Actor(actor.faction))
            .unwrap_or(ContactTarget::Scenery),
        None => ContactTarget::Scenery,
    }
}

fn kill_enemy(director: &mut EncounterDirector, enemies: &mut EnemyQuery, enemy: Entity) {
    let Ok((entity, mut state, config, transform, mut body)) = enemies.get_mut(enemy) else {
        return;
    };

    director.kill_enemy(entity, &mut state, config, transform.translation, &mut body);
}
