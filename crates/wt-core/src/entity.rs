use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an entity in the component store.
///
/// Ids are handed out by [`EntityManager::spawn`] starting at 1 and are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tags used to query the store for entities holding specific components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A living creature with an age.
    Creature,
    /// A civilization taking part in diplomacy.
    Civilization,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creature => write!(f, "creature"),
            Self::Civilization => write!(f, "civilization"),
        }
    }
}

/// The set of typed components attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSet {
    /// Creature data, if this entity is a creature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creature: Option<CreatureComponent>,
    /// Civilization data, if this entity is a civilization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub civilization: Option<CivilizationComponent>,
}

impl ComponentSet {
    /// Whether this set holds the component named by `kind`.
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Creature => self.creature.is_some(),
            ComponentKind::Civilization => self.civilization.is_some(),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A living creature that artisan kinds can attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureComponent {
    /// Species name, used in display labels.
    pub species: String,
    /// Age in years.
    pub age: f64,
}

/// A civilization that diplomatic kinds pair up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivilizationComponent {
    /// Display name of the realm.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The entity/component store.
///
/// Managers only ever read from it. Iteration order is ascending by id so
/// that seeded simulations replay identically.
#[derive(Debug, Clone)]
pub struct EntityManager {
    entities: BTreeMap<EntityId, ComponentSet>,
    next_id: u64,
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityManager {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Insert a new entity with the given components. Returns its id.
    pub fn spawn(&mut self, components: ComponentSet) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, components);
        id
    }

    /// All entities holding every component in `kinds`, in ascending id order.
    pub fn entities_with(&self, kinds: &[ComponentKind]) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, c)| kinds.iter().all(|k| c.has(*k)))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Every component attached to `id`.
    pub fn components(&self, id: EntityId) -> Option<&ComponentSet> {
        self.entities.get(&id)
    }

    /// The creature component of `id`, if it has one.
    pub fn creature(&self, id: EntityId) -> Option<&CreatureComponent> {
        self.components(id).and_then(|c| c.creature.as_ref())
    }

    /// The civilization component of `id`, if it has one.
    pub fn civilization(&self, id: EntityId) -> Option<&CivilizationComponent> {
        self.components(id).and_then(|c| c.civilization.as_ref())
    }

    /// Number of entities in the store.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Display label for an entity: civilization name, creature species, or id.
    pub fn label(&self, id: EntityId) -> String {
        match self.components(id) {
            Some(ComponentSet {
                civilization: Some(civ),
                ..
            }) => civ.name.clone(),
            Some(ComponentSet {
                creature: Some(creature),
                ..
            }) => format!("{} {id}", creature.species),
            _ => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(species: &str, age: f64) -> ComponentSet {
        ComponentSet {
            creature: Some(CreatureComponent {
                species: species.to_string(),
                age,
            }),
            ..Default::default()
        }
    }

    fn civilization(name: &str) -> ComponentSet {
        ComponentSet {
            civilization: Some(CivilizationComponent {
                name: name.to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = EntityManager::new();
        let a = store.spawn(creature("dwarf", 40.0));
        let b = store.spawn(creature("elf", 120.0));
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
    }

    #[test]
    fn entities_with_filters_by_every_tag() {
        let mut store = EntityManager::new();
        let envoy = store.spawn(ComponentSet {
            civilization: Some(CivilizationComponent {
                name: "Korrath".into(),
            }),
            ..creature("human", 20.0)
        });
        let sitter = store.spawn(creature("human", 30.0));
        let realm = store.spawn(civilization("Aldmere"));

        assert_eq!(
            store.entities_with(&[ComponentKind::Creature]),
            vec![envoy, sitter]
        );
        assert_eq!(
            store.entities_with(&[ComponentKind::Creature, ComponentKind::Civilization]),
            vec![envoy]
        );
        assert_eq!(
            store.entities_with(&[ComponentKind::Civilization]),
            vec![envoy, realm]
        );
        assert_eq!(store.entities_with(&[]).len(), 3);
    }

    #[test]
    fn component_lookups() {
        let mut store = EntityManager::new();
        let id = store.spawn(creature("orc", 12.5));
        assert_eq!(store.creature(id).map(|c| c.age), Some(12.5));
        assert!(store.civilization(id).is_none());
        assert!(store.creature(EntityId(99)).is_none());
        assert!(store.components(id).is_some_and(|c| c.has(ComponentKind::Creature)));
    }

    #[test]
    fn label_prefers_civilization_name() {
        let mut store = EntityManager::new();
        let realm = store.spawn(civilization("Aldmere"));
        let orc = store.spawn(creature("orc", 3.0));
        assert_eq!(store.label(realm), "Aldmere");
        assert_eq!(store.label(orc), "orc #2");
        assert_eq!(store.label(EntityId(7)), "#7");
    }
}
