//! Human-readable output formatting

use crate::material::Item;
use crate::output::formatter::Report;
use crate::tier::Tier;

pub fn format_human(report: &Report) -> String {
    match report {
        Report::Handle(handle) => {
            let mut out = String::new();
            for line in handle.describe() {
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(&format!("identity: {}\n", handle.identity()));
            out
        }

        Report::Contents { identity, slots } => {
            let mut out = format!("Pack {} ({} slots)\n", identity, slots.len());
            let occupied = slots.iter().filter(|s| s.is_some()).count();
            out.push_str(&format!("{} occupied\n", occupied));
            for (i, slot) in slots.iter().enumerate() {
                if let Some(stack) = slot {
                    let label = match &stack.item {
                        Item::Material(m) => m.to_string(),
                        Item::Pack(p) => format!("pack {}", p.short_id()),
                    };
                    out.push_str(&format!("  [{:2}] {} x{}\n", i, label, stack.count));
                }
            }
            out
        }

        Report::Identities(ids) => {
            let mut out = format!("{} stored pack(s)\n", ids.len());
            for id in ids {
                out.push_str(&format!("  {}\n", id));
            }
            out
        }

        Report::Guide => guide_text(),

        Report::Message(msg) => format!("{}\n", msg),
    }
}

/// The tier and transformation reference, as shown on the console.
fn guide_text() -> String {
    let mut out = String::new();

    out.push_str("=== Packstore Guide ===\n\n");
    out.push_str("Tiers:\n");
    for info in Tier::all() {
        out.push_str(&format!(
            "  {} - {} rows ({} slots)\n",
            info.display_name,
            info.tier.rows(),
            info.slots
        ));
    }

    out.push_str("\nConstruction:\n");
    out.push_str("  Leather Pack: leather + string + chest\n");
    out.push_str("    Pattern: L S L / L C L / L L L\n");
    out.push_str("  Enderpack: ender eyes + pearls + chest + iron block\n");
    out.push_str("    Pattern: E P E / P C P / E I E\n");

    out.push_str("\nUpgrades (surround a pack with 8x material):\n");
    for info in Tier::all() {
        if !info.grid_upgrade {
            continue;
        }
        if let (Some(from), Some(material)) = (info.upgrade_from, info.upgrade_material) {
            out.push_str(&format!(
                "  {} -> {}: {}\n",
                from.display_name(),
                info.display_name,
                material
            ));
        }
    }
    out.push_str("  Diamond Pack -> Netherite Pack: forge (template + netherite ingot)\n");

    out.push_str("\nEnderpack cloning:\n");
    out.push_str("  1 Enderpack + 1 ender pearl -> 2 Enderpacks with shared storage\n");

    out
}
