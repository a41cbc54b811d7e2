//! The static tier table and its lookup functions

use serde::{Deserialize, Serialize};

use crate::material::Material;

/// All pack tiers, ordered by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Dirt,
    Leather,
    Copper,
    Iron,
    Gold,
    Diamond,
    Netherite,
    Enderpack,
}

/// One row of the tier table.
#[derive(Debug, Clone, Copy)]
pub struct TierInfo {
    pub tier: Tier,
    pub level: u8,
    pub name: &'static str,
    pub display_name: &'static str,
    pub slots: usize,
    /// Tier this one is reached from by a uniform-surround transformation.
    /// None for the base tier and for the enderpack branch.
    pub upgrade_from: Option<Tier>,
    /// Material that surrounds the pack to reach this tier.
    pub upgrade_material: Option<Material>,
    /// Whether the surround transformation applies in a crafting grid.
    /// Netherite is reached at the forge only.
    pub grid_upgrade: bool,
}

const TIERS: [TierInfo; 8] = [
    TierInfo {
        tier: Tier::Dirt,
        level: 0,
        name: "dirt",
        display_name: "Dirt Pack",
        slots: 9,
        upgrade_from: Some(Tier::Leather),
        upgrade_material: Some(Material::Dirt),
        grid_upgrade: true,
    },
    TierInfo {
        tier: Tier::Leather,
        level: 1,
        name: "leather",
        display_name: "Leather Pack",
        slots: 9,
        upgrade_from: None,
        upgrade_material: None,
        grid_upgrade: false,
    },
    TierInfo {
        tier: Tier::Copper,
        level: 2,
        name: "copper",
        display_name: "Copper Pack",
        slots: 18,
        upgrade_from: Some(Tier::Leather),
        upgrade_material: Some(Material::CopperIngot),
        grid_upgrade: true,
    },
    TierInfo {
        tier: Tier::Iron,
        level: 3,
        name: "iron",
        display_name: "Iron Pack",
        slots: 27,
        upgrade_from: Some(Tier::Copper),
        upgrade_material: Some(Material::IronIngot),
        grid_upgrade: true,
    },
    TierInfo {
        tier: Tier::Gold,
        level: 4,
        name: "gold",
        display_name: "Gold Pack",
        slots: 36,
        upgrade_from: Some(Tier::Iron),
        upgrade_material: Some(Material::GoldIngot),
        grid_upgrade: true,
    },
    TierInfo {
        tier: Tier::Diamond,
        level: 5,
        name: "diamond",
        display_name: "Diamond Pack",
        slots: 45,
        upgrade_from: Some(Tier::Gold),
        upgrade_material: Some(Material::Diamond),
        grid_upgrade: true,
    },
    TierInfo {
        tier: Tier::Netherite,
        level: 6,
        name: "netherite",
        display_name: "Netherite Pack",
        slots: 54,
        upgrade_from: Some(Tier::Diamond),
        upgrade_material: Some(Material::NetheriteIngot),
        grid_upgrade: false,
    },
    TierInfo {
        tier: Tier::Enderpack,
        level: 7,
        name: "enderpack",
        display_name: "Enderpack",
        slots: 27,
        upgrade_from: None,
        upgrade_material: None,
        grid_upgrade: false,
    },
];

impl Tier {
    /// The full tier table, ordered by level.
    pub fn all() -> &'static [TierInfo] {
        &TIERS
    }

    fn info(&self) -> &'static TierInfo {
        // The table is indexed by level and levels are dense.
        &TIERS[self.level() as usize]
    }

    /// Get a tier by level number.
    pub fn from_level(level: u8) -> Option<Tier> {
        TIERS.iter().find(|s| s.level == level).map(|s| s.tier)
    }

    /// Get a tier by canonical or display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Tier> {
        TIERS
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name) || s.display_name.eq_ignore_ascii_case(name))
            .map(|s| s.tier)
    }

    /// The tier level (dense, unique, totally ordered).
    pub fn level(&self) -> u8 {
        match self {
            Tier::Dirt => 0,
            Tier::Leather => 1,
            Tier::Copper => 2,
            Tier::Iron => 3,
            Tier::Gold => 4,
            Tier::Diamond => 5,
            Tier::Netherite => 6,
            Tier::Enderpack => 7,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        self.info().display_name
    }

    /// Number of storage slots (always a multiple of 9).
    pub fn slots(&self) -> usize {
        self.info().slots
    }

    /// Number of 9-slot rows.
    pub fn rows(&self) -> usize {
        self.slots() / 9
    }

    /// Material that surrounds a pack to reach this tier, if any.
    pub fn upgrade_material(&self) -> Option<Material> {
        self.info().upgrade_material
    }

    /// The tier a surround transformation starts from, if any.
    pub fn upgrade_from(&self) -> Option<Tier> {
        self.info().upgrade_from
    }

    /// True for the tier whose instances alias storage across handles.
    pub fn is_shared_storage(&self) -> bool {
        matches!(self, Tier::Enderpack)
    }

    /// Whether a next tier exists on the main chain.
    pub fn has_next_tier(&self) -> bool {
        self.level() < Tier::Netherite.level()
    }

    /// Next tier on the main chain, or None at the top.
    pub fn next_tier(&self) -> Option<Tier> {
        if !self.has_next_tier() {
            return None;
        }
        Tier::from_level(self.level() + 1)
    }

    /// Previous tier by level, or None at the bottom.
    pub fn previous_tier(&self) -> Option<Tier> {
        self.level().checked_sub(1).and_then(Tier::from_level)
    }

    /// Resolve a uniform-surround transformation: which tier does `current`
    /// become when surrounded by eight units of `material`?
    ///
    /// Covers the leather-to-dirt downgrade edge as well; netherite is
    /// excluded because it is reached at the forge, not in a grid.
    pub fn grid_upgrade_target(current: Tier, material: Material) -> Option<Tier> {
        TIERS
            .iter()
            .find(|s| {
                s.grid_upgrade
                    && s.upgrade_from == Some(current)
                    && s.upgrade_material == Some(material)
            })
            .map(|s| s.tier)
    }

    /// Resolve the forge transformation for `current`, if one exists.
    pub fn forge_upgrade_target(current: Tier) -> Option<Tier> {
        TIERS
            .iter()
            .find(|s| !s.grid_upgrade && s.upgrade_from == Some(current))
            .map(|s| s.tier)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_dense_and_ordered() {
        for (i, info) in Tier::all().iter().enumerate() {
            assert_eq!(info.level as usize, i);
            assert_eq!(Tier::from_level(info.level), Some(info.tier));
        }
        assert!(Tier::from_level(8).is_none());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Tier::from_name("leather"), Some(Tier::Leather));
        assert_eq!(Tier::from_name("LEATHER"), Some(Tier::Leather));
        assert_eq!(Tier::from_name("Leather Pack"), Some(Tier::Leather));
        assert_eq!(Tier::from_name("enderpack"), Some(Tier::Enderpack));
        assert!(Tier::from_name("mithril").is_none());
    }

    #[test]
    fn test_capacity_non_decreasing_on_main_chain() {
        let mut tier = Tier::Leather;
        while let Some(next) = tier.next_tier() {
            assert!(next.slots() >= tier.slots());
            tier = next;
        }
        assert_eq!(tier, Tier::Netherite);
    }

    #[test]
    fn test_slots_multiple_of_nine() {
        for info in Tier::all() {
            assert_eq!(info.slots % 9, 0);
            assert_eq!(info.tier.rows(), info.slots / 9);
        }
    }

    #[test]
    fn test_next_tier_stops_at_netherite() {
        assert_eq!(Tier::Diamond.next_tier(), Some(Tier::Netherite));
        assert!(Tier::Netherite.next_tier().is_none());
        assert!(Tier::Enderpack.next_tier().is_none());
        assert!(!Tier::Enderpack.has_next_tier());
    }

    #[test]
    fn test_previous_tier() {
        assert!(Tier::Dirt.previous_tier().is_none());
        assert_eq!(Tier::Copper.previous_tier(), Some(Tier::Leather));
    }

    #[test]
    fn test_grid_upgrade_adjacency() {
        assert_eq!(
            Tier::grid_upgrade_target(Tier::Leather, Material::Dirt),
            Some(Tier::Dirt)
        );
        assert_eq!(
            Tier::grid_upgrade_target(Tier::Leather, Material::CopperIngot),
            Some(Tier::Copper)
        );
        assert_eq!(
            Tier::grid_upgrade_target(Tier::Gold, Material::Diamond),
            Some(Tier::Diamond)
        );
        // Netherite is forge-only.
        assert!(Tier::grid_upgrade_target(Tier::Diamond, Material::NetheriteIngot).is_none());
        // Wrong material for the pair.
        assert!(Tier::grid_upgrade_target(Tier::Copper, Material::GoldIngot).is_none());
    }

    #[test]
    fn test_forge_upgrade_adjacency() {
        assert_eq!(Tier::forge_upgrade_target(Tier::Diamond), Some(Tier::Netherite));
        assert!(Tier::forge_upgrade_target(Tier::Gold).is_none());
        assert!(Tier::forge_upgrade_target(Tier::Enderpack).is_none());
    }

    #[test]
    fn test_shared_storage_flag() {
        let shared: Vec<_> = Tier::all()
            .iter()
            .filter(|s| s.tier.is_shared_storage())
            .collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].tier, Tier::Enderpack);
    }
}
