//! Script JSON export
//!
//! Serializes a validated draft into the interchange shape other tools
//! expect: a `_meta` object plus a `characters` array, saved as a JSON
//! file named after the script.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::ScriptDraft;
use crate::domain::services::validate_draft;
use crate::domain::value_objects::Team;

/// The exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptFile {
    #[serde(rename = "_meta")]
    pub meta: ScriptMeta,
    pub characters: Vec<ScriptCharacter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptMeta {
    pub name: String,
    pub name_en: Option<String>,
    pub author: String,
    pub description: String,
}

/// One character entry in the exported document. Field names follow
/// the interchange format, which mixes snake and camel case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptCharacter {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub team: Team,
    pub ability: String,
    pub setup: bool,
    #[serde(rename = "firstNight")]
    pub first_night: u32,
    #[serde(rename = "otherNight")]
    pub other_night: u32,
    pub reminders: Vec<String>,
    pub jinx: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The draft has outstanding validation issues; nothing is written.
    #[error("export refused: {}", .issues.join("; "))]
    Refused { issues: Vec<String> },
    #[error("failed to serialize script: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write script file: {0}")]
    Io(#[from] std::io::Error),
}

/// Assemble the export document from a draft. Does not validate.
pub fn build_script_file(draft: &ScriptDraft) -> ScriptFile {
    ScriptFile {
        meta: ScriptMeta {
            name: draft.name.clone(),
            name_en: draft.name_en.clone(),
            author: draft.author.clone(),
            description: draft.description.clone(),
        },
        characters: draft
            .selected
            .iter()
            .map(|c| ScriptCharacter {
                id: c.id.clone(),
                name: c.name.clone(),
                name_en: c.name_en.clone(),
                team: c.team,
                ability: c.ability.clone(),
                setup: c.setup,
                first_night: c.first_night,
                other_night: c.other_night,
                reminders: c.reminders.clone(),
                jinx: c.jinxes.clone(),
            })
            .collect(),
    }
}

/// Validate the draft and, if clean, write it to `dir` as JSON.
///
/// Any validation issue refuses the export with the full aggregated
/// list and no file side effect. Warnings never block.
pub fn export_script(draft: &ScriptDraft, dir: &Path) -> Result<PathBuf, ExportError> {
    let report = validate_draft(draft);
    if !report.is_valid() {
        return Err(ExportError::Refused { issues: report.issues });
    }

    let file = build_script_file(draft);
    let json = serde_json::to_string_pretty(&file)?;

    let path = dir.join(format!("{}.json", export_filename(draft)));
    std::fs::write(&path, json)?;

    info!(path = %path.display(), "script exported");
    Ok(path)
}

/// Filename stem: the English name when present, the display name
/// otherwise, sanitized for the filesystem.
fn export_filename(draft: &ScriptDraft) -> String {
    let source = draft
        .name_en
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&draft.name);

    let mut stem = String::new();
    let mut last_was_sep = true;
    for ch in source.trim().chars() {
        if ch.is_alphanumeric() {
            stem.extend(ch.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            stem.push('_');
            last_was_sep = true;
        }
    }
    let stem = stem.trim_end_matches('_').to_string();
    if stem.is_empty() {
        "script".to_string()
    } else {
        stem
    }
}
