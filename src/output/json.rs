//! JSON output formatting

use serde_json::{json, Value};

use crate::output::formatter::Report;
use crate::tier::Tier;

pub fn format_json(report: &Report) -> String {
    let data: Value = match report {
        Report::Handle(handle) => json!({
            "handle": serde_json::to_value(handle).unwrap_or(json!(null)),
            "description": handle.describe(),
        }),

        Report::Contents { identity, slots } => json!({
            "identity": identity.to_string(),
            "slots": slots.len(),
            "contents": serde_json::to_value(slots).unwrap_or(json!(null)),
        }),

        Report::Identities(ids) => json!({
            "identities": ids.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        }),

        Report::Guide => {
            let tiers: Vec<Value> = Tier::all()
                .iter()
                .map(|info| {
                    json!({
                        "name": info.name,
                        "display_name": info.display_name,
                        "level": info.level,
                        "slots": info.slots,
                        "rows": info.tier.rows(),
                        "upgrade_from": info.upgrade_from.map(|t| t.name()),
                        "upgrade_material": info.upgrade_material.map(|m| m.name()),
                        "shared_storage": info.tier.is_shared_storage(),
                    })
                })
                .collect();
            json!({ "tiers": tiers })
        }

        Report::Message(msg) => json!({ "message": msg }),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
