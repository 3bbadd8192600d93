use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::gridmover::GridMover;
use crate::components::inputhook::InputHook;
use crate::components::sprite::Sprite;

use super::StoreError;
use super::entity::{ComponentKind, ComponentMask, EntityId};
use super::table::ComponentTable;

/// Types that live in one of the store's component tables.
pub trait Component: Sized {
    const KIND: ComponentKind;

    fn table(tables: &Tables) -> &ComponentTable<Self>;
    fn table_mut(tables: &mut Tables) -> &mut ComponentTable<Self>;
}

/// One table per component kind.
#[derive(Debug, Default)]
pub struct Tables {
    sprites: ComponentTable<Sprite>,
    animations: ComponentTable<Animation>,
    actors: ComponentTable<Actor>,
    movers: ComponentTable<GridMover>,
    hooks: ComponentTable<InputHook>,
}

macro_rules! impl_component {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$kind;

            fn table(tables: &Tables) -> &ComponentTable<Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut ComponentTable<Self> {
                &mut tables.$field
            }
        }
    };
}

impl_component!(Sprite, Sprite, sprites);
impl_component!(Animation, Animation, animations);
impl_component!(Actor, Actor, actors);
impl_component!(GridMover, GridMover, movers);
impl_component!(InputHook, InputHook, hooks);

#[derive(Debug, Clone, Copy)]
struct EntityRecord {
    id: EntityId,
    mask: ComponentMask,
}

/// Components of one entity handed to a [`World::for_each_with`] visitor.
///
/// Every kind in the requested mask is `Some`. Kinds outside the mask are
/// `Some` when the entity happens to have them.
#[derive(Debug)]
pub struct Row<'a> {
    pub sprite: Option<&'a mut Sprite>,
    pub animation: Option<&'a mut Animation>,
    pub actor: Option<&'a mut Actor>,
    pub mover: Option<&'a mut GridMover>,
    pub hook: Option<&'a mut InputHook>,
}

impl Row<'_> {
    fn mask(&self) -> ComponentMask {
        let mut mask = ComponentMask::EMPTY;
        if self.sprite.is_some() {
            mask.insert(ComponentKind::Sprite);
        }
        if self.animation.is_some() {
            mask.insert(ComponentKind::Animation);
        }
        if self.actor.is_some() {
            mask.insert(ComponentKind::Actor);
        }
        if self.mover.is_some() {
            mask.insert(ComponentKind::GridMover);
        }
        if self.hook.is_some() {
            mask.insert(ComponentKind::InputHook);
        }
        mask
    }
}

/// Entity registry plus component tables.
#[derive(Debug, Default)]
pub struct World {
    next_id: u32,
    entities: Vec<EntityRecord>,
    tables: Tables,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next entity ID. The entity starts with no components.
    pub fn create_entity(&mut self) -> EntityId {
        let id = EntityId::from_raw(self.next_id);
        self.next_id += 1;
        self.entities.push(EntityRecord {
            id,
            mask: ComponentMask::EMPTY,
        });
        id
    }

    /// Attach `value` to `entity`, keeping the component table sorted.
    pub fn attach<C: Component>(&mut self, entity: EntityId, value: C) -> Result<(), StoreError> {
        let index = self
            .entities
            .binary_search_by_key(&entity, |record| record.id)
            .map_err(|_| StoreError::UnknownEntity(entity))?;
        let record = &mut self.entities[index];
        if record.mask.has(C::KIND) {
            return Err(StoreError::AlreadyAttached {
                entity,
                kind: C::KIND,
            });
        }
        let inserted = C::table_mut(&mut self.tables).insert(entity, value);
        debug_assert!(inserted, "{:?} table out of sync with mask of {entity}", C::KIND);
        record.mask.insert(C::KIND);
        Ok(())
    }

    pub fn get<C: Component>(&self, entity: EntityId) -> Option<&C> {
        C::table(&self.tables).get(entity)
    }

    pub fn get_mut<C: Component>(&mut self, entity: EntityId) -> Option<&mut C> {
        C::table_mut(&mut self.tables).get_mut(entity)
    }

    pub fn table<C: Component>(&self) -> &ComponentTable<C> {
        C::table(&self.tables)
    }

    pub fn mask_of(&self, entity: EntityId) -> Option<ComponentMask> {
        self.entities
            .binary_search_by_key(&entity, |record| record.id)
            .ok()
            .map(|index| self.entities[index].mask)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of component records across all tables.
    pub fn component_count(&self) -> usize {
        self.tables.sprites.len()
            + self.tables.animations.len()
            + self.tables.actors.len()
            + self.tables.movers.len()
            + self.tables.hooks.len()
    }

    /// IDs of entities whose mask contains `mask`, ascending.
    pub fn matching(&self, mask: ComponentMask) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .filter(move |record| record.mask.contains(mask))
            .map(|record| record.id)
    }

    /// Visit every entity whose mask contains `mask`, in ascending ID order.
    ///
    /// Walks the entity list once with one forward cursor per table. A cursor
    /// only moves for entities that own a record in its table, so a pass costs
    /// O(entities + components). A mask bit without a matching table record
    /// is a broken invariant: it asserts in debug builds and the entity is
    /// skipped otherwise.
    pub fn for_each_with<F>(&mut self, mask: ComponentMask, mut visitor: F)
    where
        F: FnMut(EntityId, Row<'_>),
    {
        let Tables {
            sprites,
            animations,
            actors,
            movers,
            hooks,
        } = &mut self.tables;
        let mut sprites = sprites.cursor_mut();
        let mut animations = animations.cursor_mut();
        let mut actors = actors.cursor_mut();
        let mut movers = movers.cursor_mut();
        let mut hooks = hooks.cursor_mut();

        for record in &self.entities {
            if !record.mask.contains(mask) {
                continue;
            }
            let has = |kind| record.mask.has(kind);
            let row = Row {
                sprite: has(ComponentKind::Sprite)
                    .then(|| sprites.seek(record.id))
                    .flatten(),
                animation: has(ComponentKind::Animation)
                    .then(|| animations.seek(record.id))
                    .flatten(),
                actor: has(ComponentKind::Actor)
                    .then(|| actors.seek(record.id))
                    .flatten(),
                mover: has(ComponentKind::GridMover)
                    .then(|| movers.seek(record.id))
                    .flatten(),
                hook: has(ComponentKind::InputHook)
                    .then(|| hooks.seek(record.id))
                    .flatten(),
            };
            let found = row.mask();
            if found != record.mask {
                debug_assert!(
                    false,
                    "component tables out of sync for {}: mask {:#07b}, found {:#07b}",
                    record.id,
                    record.mask.bits(),
                    found.bits()
                );
                if !found.contains(mask) {
                    continue;
                }
            }
            visitor(record.id, row);
        }
    }
}
