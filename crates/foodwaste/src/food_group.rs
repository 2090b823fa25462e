//! Food groups: a translatable, self-referential hierarchy.
//!
//! Nodes live in a [`FoodGroupTree`] arena and refer to each other by
//! identifier, so only persisted groups can take part in the hierarchy and
//! cycle detection is a bounded upward walk over the arena.

use std::collections::BTreeMap;

use intranet_core::{
    CultureInfo, DomainError, DomainResult, Identifiable, Identifier, Identity, Translatable,
    Translations,
};

use crate::foreign_key::ForeignKey;

/// A food group such as "Dairy" or "Vegetables".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodGroup {
    identity: Identity,
    parent: Option<Identifier>,
    is_active: bool,
    children: Vec<Identifier>,
    translations: Translations,
    foreign_keys: Vec<ForeignKey>,
}

impl FoodGroup {
    pub fn new(identity: Identity, is_active: bool) -> Self {
        Self {
            identity,
            parent: None,
            is_active,
            children: Vec::new(),
            translations: Translations::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Parent group; changed through [`FoodGroupTree::set_parent`].
    pub fn parent(&self) -> Option<Identifier> {
        self.parent
    }

    pub fn children(&self) -> &[Identifier] {
        &self.children
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn foreign_key_add(&mut self, foreign_key: ForeignKey) {
        self.foreign_keys.push(foreign_key);
    }
}

impl Identifiable for FoodGroup {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

impl Translatable for FoodGroup {
    fn translations(&self) -> &Translations {
        &self.translations
    }

    fn translations_mut(&mut self) -> &mut Translations {
        &mut self.translations
    }
}

/// Arena of persisted food groups addressed by identifier.
#[derive(Debug, Clone, Default)]
pub struct FoodGroupTree {
    nodes: BTreeMap<Identifier, FoodGroup>,
    insertion_order: Vec<Identifier>,
}

impl FoodGroupTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached, persisted food group.
    pub fn insert(&mut self, food_group: FoodGroup) -> DomainResult<Identifier> {
        let id = food_group
            .identifier()
            .ok_or_else(|| DomainError::argument_null("food_group.identifier"))?;
        if self.nodes.contains_key(&id) {
            return Err(DomainError::business_rule(format!(
                "food group {id} already exists"
            )));
        }

        let mut food_group = food_group;
        food_group.parent = None;
        food_group.children.clear();

        self.nodes.insert(id, food_group);
        self.insertion_order.push(id);
        Ok(id)
    }

    pub fn get(&self, id: Identifier) -> Option<&FoodGroup> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: Identifier) -> Option<&mut FoodGroup> {
        self.nodes.get_mut(&id)
    }

    fn require(&self, id: Identifier) -> DomainResult<&FoodGroup> {
        self.nodes
            .get(&id)
            .ok_or_else(|| DomainError::business_rule(format!("food group {id} not found")))
    }

    /// Attach `child` under `parent`, or detach it when `parent` is `None`.
    ///
    /// Rejects the group itself and any descendant of it as parent; on
    /// rejection the tree is left untouched.
    pub fn set_parent(&mut self, child: Identifier, parent: Option<Identifier>) -> DomainResult<()> {
        let previous = self.require(child)?.parent;

        if let Some(candidate) = parent {
            self.require(candidate)?;
            if self.would_create_cycle(child, candidate) {
                tracing::debug!(%child, parent = %candidate, "rejected food group parent: cycle");
                return Err(DomainError::illegal_value(candidate, "parent"));
            }
        }

        if previous == parent {
            return Ok(());
        }

        if let Some(old) = previous.and_then(|old| self.nodes.get_mut(&old)) {
            old.children.retain(|c| *c != child);
        }
        if let Some(new) = parent.and_then(|new| self.nodes.get_mut(&new)) {
            new.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }
        Ok(())
    }

    // Walk up from the candidate; reaching the child (or running longer than
    // the arena holds nodes) means the assignment would close a loop.
    fn would_create_cycle(&self, child: Identifier, candidate: Identifier) -> bool {
        let mut current = Some(candidate);
        let mut steps = 0usize;
        while let Some(id) = current {
            if id == child || steps > self.nodes.len() {
                return true;
            }
            steps += 1;
            current = self.nodes.get(&id).and_then(|node| node.parent);
        }
        false
    }

    pub fn parent(&self, id: Identifier) -> DomainResult<Option<&FoodGroup>> {
        let node = self.require(id)?;
        Ok(node.parent.and_then(|parent| self.nodes.get(&parent)))
    }

    pub fn children(&self, id: Identifier) -> DomainResult<Vec<&FoodGroup>> {
        let node = self.require(id)?;
        Ok(node
            .children
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .collect())
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: Identifier) -> DomainResult<Vec<Identifier>> {
        let mut ancestors = Vec::new();
        let mut current = self.require(id)?.parent;
        while let Some(ancestor) = current {
            if ancestors.len() >= self.nodes.len() {
                break;
            }
            ancestors.push(ancestor);
            current = self.nodes.get(&ancestor).and_then(|node| node.parent);
        }
        Ok(ancestors)
    }

    /// Groups without a parent, in insertion order.
    pub fn roots(&self) -> Vec<&FoodGroup> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| node.parent.is_none())
            .collect()
    }

    /// Translate a group, its parent and its whole subtree.
    pub fn translate(&mut self, id: Identifier, culture: &CultureInfo) -> DomainResult<()> {
        let node = self.require(id)?;
        let mut pending: Vec<Identifier> = node.parent.into_iter().collect();

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            pending.push(current);
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        for id in pending {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.translate(culture);
            }
        }
        Ok(())
    }

    pub fn translate_all(&mut self, culture: &CultureInfo) {
        for node in self.nodes.values_mut() {
            node.translate(culture);
        }
    }
}
