//! Typed inputs: materials, items, and stacks
//!
//! A `Stack` is what occupies one grid cell or one storage slot: either a
//! plain material or a pack handle, with a count. Pattern matching in the
//! resolver ignores counts except where a rule says otherwise.

use serde::{Deserialize, Serialize};

use crate::codec::PackHandle;

/// Plain item materials that can appear in grids and storage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Dirt,
    Leather,
    String,
    Chest,
    CopperIngot,
    IronIngot,
    GoldIngot,
    Diamond,
    NetheriteIngot,
    EnderPearl,
    EnderEye,
    IronBlock,
    NetheriteUpgradeTemplate,
    // Generic storables; the store treats all slot contents as opaque.
    Stone,
    Cobblestone,
    OakLog,
    Torch,
    Apple,
    Arrow,
}

impl Material {
    /// Canonical lowercase name, matching the persisted form.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Dirt => "dirt",
            Material::Leather => "leather",
            Material::String => "string",
            Material::Chest => "chest",
            Material::CopperIngot => "copper_ingot",
            Material::IronIngot => "iron_ingot",
            Material::GoldIngot => "gold_ingot",
            Material::Diamond => "diamond",
            Material::NetheriteIngot => "netherite_ingot",
            Material::EnderPearl => "ender_pearl",
            Material::EnderEye => "ender_eye",
            Material::IronBlock => "iron_block",
            Material::NetheriteUpgradeTemplate => "netherite_upgrade_template",
            Material::Stone => "stone",
            Material::Cobblestone => "cobblestone",
            Material::OakLog => "oak_log",
            Material::Torch => "torch",
            Material::Apple => "apple",
            Material::Arrow => "arrow",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Either a plain material or a pack handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Material(Material),
    Pack(PackHandle),
}

/// A counted item occupying one cell or slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub item: Item,
    pub count: u32,
}

impl Stack {
    /// A stack of `count` units of a plain material.
    pub fn of(material: Material, count: u32) -> Self {
        Self {
            item: Item::Material(material),
            count,
        }
    }

    /// A single pack handle.
    pub fn pack(handle: PackHandle) -> Self {
        Self {
            item: Item::Pack(handle),
            count: 1,
        }
    }

    /// The plain material, if this is not a pack.
    pub fn material(&self) -> Option<Material> {
        match &self.item {
            Item::Material(m) => Some(*m),
            Item::Pack(_) => None,
        }
    }

    /// Structural pack check: the handle, if this stack carries one.
    pub fn as_pack(&self) -> Option<&PackHandle> {
        match &self.item {
            Item::Pack(handle) => Some(handle),
            Item::Material(_) => None,
        }
    }

    /// True if this stack is a pack handle.
    pub fn is_pack(&self) -> bool {
        matches!(self.item, Item::Pack(_))
    }

    /// True if this stack holds the given material, regardless of count.
    pub fn is_material(&self, material: Material) -> bool {
        self.material() == Some(material)
    }
}
