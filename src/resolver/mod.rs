//! Transformation resolver
//!
//! Pure pattern matching over a grid of typed inputs. The resolver only
//! describes an outcome; opening or saving the affected container is the
//! caller's job. Rules are tried in a fixed order and the first match wins:
//!
//! 1. enderpack duplication (shapeless, any grid size)
//! 2. enderpack construction (3x3 literal)
//! 3. leather construction (3x3 literal)
//! 4. uniform-surround upgrade/downgrade (3x3, center pack)
//!
//! Counts are ignored everywhere except the duplication rule and the forge
//! path, which demand exactly one unit of each non-pack ingredient.

use crate::codec::PackHandle;
use crate::material::{Material, Stack};
use crate::tier::Tier;

/// The outcome of a successful pattern match.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Mint a brand-new pack with a fresh identity.
    Craft { tier: Tier, count: u32 },
    /// Duplicate a pack: the result shares the source's identity.
    Clone { source: PackHandle, count: u32 },
    /// Re-tier a pack in place: same identity, new capacity. Contents are
    /// carried over by the store's resize path, not here.
    Upgrade { source: PackHandle, target: Tier },
}

/// Grid cell indices:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
const CENTER: usize = 4;
const SURROUND: [usize; 8] = [0, 1, 2, 3, 5, 6, 7, 8];

/// Literal 3x3 pattern for a new enderpack.
const ENDERPACK_PATTERN: [Material; 9] = [
    Material::EnderEye,
    Material::EnderPearl,
    Material::EnderEye,
    Material::EnderPearl,
    Material::Chest,
    Material::EnderPearl,
    Material::EnderEye,
    Material::IronBlock,
    Material::EnderEye,
];

/// Literal 3x3 pattern for a new leather pack.
const LEATHER_PATTERN: [Material; 9] = [
    Material::Leather,
    Material::String,
    Material::Leather,
    Material::Leather,
    Material::Chest,
    Material::Leather,
    Material::Leather,
    Material::Leather,
    Material::Leather,
];

/// Evaluate a crafting grid. Returns None when no rule matches; the grid
/// passes through unmodified in that case.
pub fn resolve_grid(cells: &[Option<Stack>]) -> Option<Resolution> {
    if let Some(resolution) = resolve_duplication(cells) {
        return Some(resolution);
    }

    // Everything below needs a full 3x3 grid.
    if cells.len() != 9 {
        return None;
    }

    if matches_literal(cells, &ENDERPACK_PATTERN) {
        return Some(Resolution::Craft {
            tier: Tier::Enderpack,
            count: 1,
        });
    }

    if matches_literal(cells, &LEATHER_PATTERN) {
        return Some(Resolution::Craft {
            tier: Tier::Leather,
            count: 1,
        });
    }

    resolve_surround(cells)
}

/// Evaluate the forge surface: a template marker, a pack base, and a
/// catalyst. Same-identity-new-tier outcome, exactly like a grid upgrade.
pub fn resolve_forge(
    template: Option<&Stack>,
    base: Option<&Stack>,
    addition: Option<&Stack>,
) -> Option<Resolution> {
    let source = base?.as_pack()?;
    let target = Tier::forge_upgrade_target(source.tier()?)?;

    let template = template?;
    if !template.is_material(Material::NetheriteUpgradeTemplate) || template.count != 1 {
        return None;
    }

    let addition = addition?;
    if addition.material() != target.upgrade_material() || addition.count != 1 {
        return None;
    }

    Some(Resolution::Upgrade {
        source: source.clone_shared(),
        target,
    })
}

/// Shapeless duplication: exactly one enderpack handle (count 1) plus
/// exactly one ender pearl (count 1), nothing else in the grid. Works in
/// any grid size. The result is two handles sharing the source identity.
fn resolve_duplication(cells: &[Option<Stack>]) -> Option<Resolution> {
    let mut source: Option<&PackHandle> = None;
    let mut has_pearl = false;
    let mut occupied = 0;

    for stack in cells.iter().flatten() {
        occupied += 1;
        if let Some(handle) = stack.as_pack() {
            if handle.tier() == Some(Tier::Enderpack) && stack.count == 1 {
                source = Some(handle);
            } else {
                return None;
            }
        } else if stack.is_material(Material::EnderPearl) && stack.count == 1 {
            has_pearl = true;
        } else {
            return None;
        }
    }

    match source {
        Some(handle) if has_pearl && occupied == 2 => Some(Resolution::Clone {
            source: handle.clone_shared(),
            count: 2,
        }),
        _ => None,
    }
}

/// Center pack surrounded by eight units of one material. The catalog's
/// adjacency table decides the target tier, including the leather-to-dirt
/// downgrade edge.
fn resolve_surround(cells: &[Option<Stack>]) -> Option<Resolution> {
    let source = cells[CENTER].as_ref()?.as_pack()?;
    let current = source.tier()?;
    let material = surround_material(cells)?;
    let target = Tier::grid_upgrade_target(current, material)?;

    Some(Resolution::Upgrade {
        source: source.clone_shared(),
        target,
    })
}

/// The one material filling all eight surround cells, or None if any cell
/// is empty or the materials differ. Counts are ignored.
fn surround_material(cells: &[Option<Stack>]) -> Option<Material> {
    let mut material = None;
    for &i in &SURROUND {
        let m = cells[i].as_ref()?.material()?;
        match material {
            None => material = Some(m),
            Some(seen) if seen != m => return None,
            Some(_) => {}
        }
    }
    material
}

/// Every cell holds the exact per-cell material, counts ignored. A pack
/// handle or an empty cell anywhere voids the match.
fn matches_literal(cells: &[Option<Stack>], pattern: &[Material; 9]) -> bool {
    cells
        .iter()
        .zip(pattern.iter())
        .all(|(cell, expected)| match cell {
            Some(stack) => stack.is_material(*expected),
            None => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(pattern: &[Material; 9]) -> Vec<Option<Stack>> {
        pattern.iter().map(|m| Some(Stack::of(*m, 1))).collect()
    }

    fn surround_grid(center: Stack, material: Material) -> Vec<Option<Stack>> {
        let mut cells: Vec<Option<Stack>> = (0..9).map(|_| Some(Stack::of(material, 1))).collect();
        cells[CENTER] = Some(center);
        cells
    }

    #[test]
    fn test_duplication() {
        let handle = PackHandle::new(Tier::Enderpack);
        let mut cells: Vec<Option<Stack>> = vec![None; 9];
        cells[0] = Some(Stack::pack(handle.clone()));
        cells[5] = Some(Stack::of(Material::EnderPearl, 1));

        match resolve_grid(&cells) {
            Some(Resolution::Clone { source, count }) => {
                assert_eq!(source.identity(), handle.identity());
                assert_eq!(source.tier(), Some(Tier::Enderpack));
                assert_eq!(count, 2);
            }
            other => panic!("expected clone, got {:?}", other),
        }
    }

    #[test]
    fn test_duplication_works_in_small_grid() {
        let handle = PackHandle::new(Tier::Enderpack);
        let cells = vec![
            Some(Stack::pack(handle.clone())),
            Some(Stack::of(Material::EnderPearl, 1)),
            None,
            None,
        ];
        assert!(matches!(
            resolve_grid(&cells),
            Some(Resolution::Clone { count: 2, .. })
        ));
    }

    #[test]
    fn test_duplication_requires_exact_counts() {
        let handle = PackHandle::new(Tier::Enderpack);
        let mut cells: Vec<Option<Stack>> = vec![None; 9];
        cells[0] = Some(Stack::pack(handle));
        cells[5] = Some(Stack::of(Material::EnderPearl, 2));
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_duplication_voided_by_extra_item() {
        let handle = PackHandle::new(Tier::Enderpack);
        let mut cells: Vec<Option<Stack>> = vec![None; 9];
        cells[0] = Some(Stack::pack(handle));
        cells[5] = Some(Stack::of(Material::EnderPearl, 1));
        cells[8] = Some(Stack::of(Material::Stone, 1));
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_duplication_rejects_non_shared_tiers() {
        let handle = PackHandle::new(Tier::Leather);
        let cells = vec![
            Some(Stack::pack(handle)),
            Some(Stack::of(Material::EnderPearl, 1)),
        ];
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_duplication_beats_other_rules() {
        // Two-cell clone inside a 3x3 grid: the construction rules never
        // get a look because duplication is checked first and matches.
        let handle = PackHandle::new(Tier::Enderpack);
        let mut cells: Vec<Option<Stack>> = vec![None; 9];
        cells[CENTER] = Some(Stack::pack(handle));
        cells[1] = Some(Stack::of(Material::EnderPearl, 1));

        assert!(matches!(
            resolve_grid(&cells),
            Some(Resolution::Clone { .. })
        ));
    }

    #[test]
    fn test_enderpack_construction() {
        let cells = grid_of(&ENDERPACK_PATTERN);
        assert_eq!(
            resolve_grid(&cells),
            Some(Resolution::Craft {
                tier: Tier::Enderpack,
                count: 1
            })
        );
    }

    #[test]
    fn test_leather_construction() {
        let cells = grid_of(&LEATHER_PATTERN);
        assert_eq!(
            resolve_grid(&cells),
            Some(Resolution::Craft {
                tier: Tier::Leather,
                count: 1
            })
        );
    }

    #[test]
    fn test_literal_patterns_ignore_counts() {
        let cells: Vec<Option<Stack>> = LEATHER_PATTERN
            .iter()
            .map(|m| Some(Stack::of(*m, 13)))
            .collect();
        assert!(matches!(
            resolve_grid(&cells),
            Some(Resolution::Craft {
                tier: Tier::Leather,
                ..
            })
        ));
    }

    #[test]
    fn test_single_cell_deviation_voids_literal_match() {
        for i in 0..9 {
            let mut cells = grid_of(&LEATHER_PATTERN);
            cells[i] = Some(Stack::of(Material::Dirt, 1));
            assert!(resolve_grid(&cells).is_none(), "cell {} swap matched", i);

            let mut cells = grid_of(&ENDERPACK_PATTERN);
            cells[i] = None;
            assert!(resolve_grid(&cells).is_none(), "cell {} empty matched", i);
        }
    }

    #[test]
    fn test_surround_upgrade_chain() {
        let leather = PackHandle::new(Tier::Leather);
        let cells = surround_grid(Stack::pack(leather.clone()), Material::CopperIngot);

        match resolve_grid(&cells) {
            Some(Resolution::Upgrade { source, target }) => {
                assert_eq!(source.identity(), leather.identity());
                assert_eq!(target, Tier::Copper);
            }
            other => panic!("expected upgrade, got {:?}", other),
        }
    }

    #[test]
    fn test_surround_downgrade_to_dirt() {
        let leather = PackHandle::new(Tier::Leather);
        let cells = surround_grid(Stack::pack(leather.clone()), Material::Dirt);
        assert_eq!(
            resolve_grid(&cells),
            Some(Resolution::Upgrade {
                source: leather,
                target: Tier::Dirt
            })
        );
    }

    #[test]
    fn test_surround_ignores_counts() {
        let gold = PackHandle::new(Tier::Gold);
        let mut cells: Vec<Option<Stack>> =
            (0..9).map(|_| Some(Stack::of(Material::Diamond, 7))).collect();
        cells[CENTER] = Some(Stack::pack(gold));
        assert!(matches!(
            resolve_grid(&cells),
            Some(Resolution::Upgrade {
                target: Tier::Diamond,
                ..
            })
        ));
    }

    #[test]
    fn test_surround_voided_by_empty_cell() {
        let leather = PackHandle::new(Tier::Leather);
        let mut cells = surround_grid(Stack::pack(leather), Material::CopperIngot);
        cells[7] = None;
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_surround_voided_by_mixed_materials() {
        let leather = PackHandle::new(Tier::Leather);
        let mut cells = surround_grid(Stack::pack(leather), Material::CopperIngot);
        cells[2] = Some(Stack::of(Material::IronIngot, 1));
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_surround_wrong_material_for_tier_pair() {
        // Gold ingots around a leather pack match no adjacency edge.
        let leather = PackHandle::new(Tier::Leather);
        let cells = surround_grid(Stack::pack(leather), Material::GoldIngot);
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_netherite_not_reachable_in_grid() {
        let diamond = PackHandle::new(Tier::Diamond);
        let cells = surround_grid(Stack::pack(diamond), Material::NetheriteIngot);
        assert!(resolve_grid(&cells).is_none());
    }

    #[test]
    fn test_forge_upgrade() {
        let diamond = PackHandle::new(Tier::Diamond);
        let template = Stack::of(Material::NetheriteUpgradeTemplate, 1);
        let base = Stack::pack(diamond.clone());
        let addition = Stack::of(Material::NetheriteIngot, 1);

        match resolve_forge(Some(&template), Some(&base), Some(&addition)) {
            Some(Resolution::Upgrade { source, target }) => {
                assert_eq!(source.identity(), diamond.identity());
                assert_eq!(target, Tier::Netherite);
            }
            other => panic!("expected upgrade, got {:?}", other),
        }
    }

    #[test]
    fn test_forge_rejects_wrong_base_tier() {
        let gold = PackHandle::new(Tier::Gold);
        let template = Stack::of(Material::NetheriteUpgradeTemplate, 1);
        let base = Stack::pack(gold);
        let addition = Stack::of(Material::NetheriteIngot, 1);
        assert!(resolve_forge(Some(&template), Some(&base), Some(&addition)).is_none());
    }

    #[test]
    fn test_forge_requires_exact_counts_and_types() {
        let diamond = PackHandle::new(Tier::Diamond);
        let base = Stack::pack(diamond);
        let template = Stack::of(Material::NetheriteUpgradeTemplate, 1);

        let doubled = Stack::of(Material::NetheriteIngot, 2);
        assert!(resolve_forge(Some(&template), Some(&base), Some(&doubled)).is_none());

        let wrong = Stack::of(Material::GoldIngot, 1);
        assert!(resolve_forge(Some(&template), Some(&base), Some(&wrong)).is_none());

        let addition = Stack::of(Material::NetheriteIngot, 1);
        assert!(resolve_forge(None, Some(&base), Some(&addition)).is_none());

        let not_template = Stack::of(Material::Chest, 1);
        assert!(resolve_forge(Some(&not_template), Some(&base), Some(&addition)).is_none());
    }

    #[test]
    fn test_empty_grid_resolves_to_nothing() {
        let cells: Vec<Option<Stack>> = vec![None; 9];
        assert!(resolve_grid(&cells).is_none());
        assert!(resolve_grid(&[]).is_none());
    }
}
