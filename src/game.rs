//! Demo scene.
//!
//! [`setup`] fills an empty [`World`] with everything the game shows:
//!
//! - two keyboard players (Cuby on slot 0, Coby on slot 1) that walk the grid
//!   and wrap around the playfield edges
//! - a gallery with every actor kind facing every direction, cycling its move
//!   sequence with a staggered start and an enemy palette
//! - a row of effect animations
//!
//! Entities are only created here; the steady-state loop never attaches.

use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::gridmover::{GRID_CELL, GridMover};
use crate::components::inputhook::InputHook;
use crate::components::sprite::Sprite;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sprites::Palette;
use crate::sequence::table::{Action, ActorModel, AnimationId, Direction};
use crate::store::{EntityId, StoreError, World};

const CELL: f32 = GRID_CELL as f32;

/// Effects shown in the bottom row, left to right.
pub const EFFECTS: [AnimationId; 18] = [
    AnimationId::CubyYahoo,
    AnimationId::CobyYahoo,
    AnimationId::BeeDead,
    AnimationId::WormDead,
    AnimationId::SharkDead,
    AnimationId::GhostDead,
    AnimationId::PuttyDead,
    AnimationId::MouseDead,
    AnimationId::PenguinDead,
    AnimationId::BubbleShoot,
    AnimationId::BubblePop,
    AnimationId::FlubberShoot,
    AnimationId::SnowballShoot,
    AnimationId::SnowballPop,
    AnimationId::AnyPop,
    AnimationId::StarsPop,
    AnimationId::FlameSpin,
    AnimationId::DustPop,
];

const ENEMY_PALETTES: [Palette; 3] = [
    Palette::RedEnemies,
    Palette::BlueEnemies,
    Palette::DimEnemies,
];

/// Entities created by [`setup`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub players: Vec<EntityId>,
    pub gallery: Vec<EntityId>,
    pub effects: Vec<EntityId>,
}

/// Spawn a keyboard-driven actor resting at cell (`col`, `row`).
pub fn spawn_player(
    world: &mut World,
    model: ActorModel,
    slot: usize,
    col: u32,
    row: u32,
    config: &GameConfig,
) -> Result<EntityId, StoreError> {
    let actor = Actor::new(model);
    let entity = world.create_entity();
    world.attach(entity, Sprite::new(col as f32 * CELL, row as f32 * CELL))?;
    world.attach(entity, Animation::new(actor.sequence_id(), config.animation_rate))?;
    world.attach(entity, actor)?;
    world.attach(entity, GridMover::new(config.move_speed as f32))?;
    world.attach(entity, InputHook::controlled_by(slot).with_wrap(true))?;
    Ok(entity)
}

fn spawn_gallery(world: &mut World, rate: u32) -> Result<Vec<EntityId>, StoreError> {
    let mut spawned = Vec::with_capacity(ActorModel::ALL.len() * Direction::ALL.len());
    for (col, model) in ActorModel::ALL.into_iter().enumerate() {
        for (row, direction) in Direction::ALL.into_iter().enumerate() {
            let actor = Actor::new(model)
                .with_direction(direction)
                .with_action(Action::Move);
            let palette = match model {
                ActorModel::Cuby | ActorModel::Coby => Palette::Default,
                _ => ENEMY_PALETTES[fastrand::usize(..ENEMY_PALETTES.len())],
            };
            let animation = Animation::new(actor.sequence_id(), rate)
                .with_time_base(fastrand::u64(..u64::from(rate) * 4))
                .with_palette(palette);
            let entity = world.create_entity();
            let x = (1 + 2 * col) as f32 * CELL;
            let y = (1 + row) as f32 * CELL;
            world.attach(entity, Sprite::new(x, y))?;
            world.attach(entity, animation)?;
            world.attach(entity, actor)?;
            spawned.push(entity);
        }
    }
    Ok(spawned)
}

fn spawn_effects(world: &mut World, rate: u32) -> Result<Vec<EntityId>, StoreError> {
    let mut spawned = Vec::with_capacity(EFFECTS.len());
    for (col, effect) in EFFECTS.into_iter().enumerate() {
        let entity = world.create_entity();
        world.attach(entity, Sprite::new((1 + col) as f32 * CELL, 7.0 * CELL))?;
        world.attach(entity, Animation::new(effect, rate))?;
        spawned.push(entity);
    }
    Ok(spawned)
}

/// Populate `world` with the demo scene.
pub fn setup(world: &mut World, config: &GameConfig) -> Result<Scene, StoreError> {
    let rate = config.animation_rate;
    let gallery = spawn_gallery(world, rate)?;
    let effects = spawn_effects(world, rate)?;
    let players = vec![
        spawn_player(world, ActorModel::Cuby, 0, 6, 10, config)?,
        spawn_player(world, ActorModel::Coby, 1, 13, 10, config)?,
    ];
    log::info!(
        "Scene ready: {} entities, {} components ({} players, {} gallery actors, {} effects)",
        world.entity_count(),
        world.component_count(),
        players.len(),
        gallery.len(),
        effects.len()
    );
    Ok(Scene {
        players,
        gallery,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ComponentMask;

    #[test]
    fn test_scene_population() {
        let mut world = World::new();
        let scene = setup(&mut world, &GameConfig::new()).expect("scene");
        assert_eq!(scene.players.len(), 2);
        assert_eq!(scene.gallery.len(), 36);
        assert_eq!(scene.effects.len(), EFFECTS.len());
        assert_eq!(world.entity_count(), 2 + 36 + EFFECTS.len());
        // players: 5 components, gallery: 3, effects: 2
        assert_eq!(world.component_count(), 2 * 5 + 36 * 3 + EFFECTS.len() * 2);
    }

    #[test]
    fn test_players_are_controlled_and_wrap() {
        let mut world = World::new();
        let scene = setup(&mut world, &GameConfig::new()).expect("scene");
        let mask = ComponentMask::GRID_MOVER | ComponentMask::INPUT_HOOK;
        let controlled: Vec<EntityId> = world.matching(mask).collect();
        assert_eq!(controlled, scene.players);
        for (slot, player) in scene.players.iter().enumerate() {
            let hook = world.get::<InputHook>(*player).expect("hook");
            assert!(hook.wrap);
            assert_eq!(hook.controller.map(|c| c.0), Some(slot));
        }
    }

    #[test]
    fn test_everything_starts_on_grid() {
        let mut world = World::new();
        setup(&mut world, &GameConfig::new()).expect("scene");
        for (_, sprite) in world.table::<Sprite>().iter() {
            assert_eq!(sprite.x % CELL, 0.0);
            assert_eq!(sprite.y % CELL, 0.0);
            assert!(sprite.x < 320.0 && sprite.y < 200.0);
        }
    }
}
