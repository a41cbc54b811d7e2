//! Output dispatch

use uuid::Uuid;

use crate::codec::PackHandle;
use crate::material::Stack;
use crate::output::{human, json};

/// How to render CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// A renderable CLI result.
#[derive(Debug, Clone)]
pub enum Report {
    /// A freshly minted or derived handle.
    Handle(PackHandle),
    /// A container's stored slot array.
    Contents {
        identity: Uuid,
        slots: Vec<Option<Stack>>,
    },
    /// All stored identities.
    Identities(Vec<Uuid>),
    /// The tier and transformation guide.
    Guide,
    /// A plain confirmation message.
    Message(String),
}

pub fn format_output(report: &Report, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_human(report),
        OutputFormat::Json => json::format_json(report),
    }
}
