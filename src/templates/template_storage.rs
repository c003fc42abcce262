use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::template::Template;
use crate::error::QuickReplyError;

const CONFIG_DIR: &str = "quickreply";
const TEMPLATES_FILE: &str = "templates.toml";

#[derive(Deserialize)]
struct TemplatesFile {
    #[serde(default)]
    templates: Vec<Template>,
}

pub fn templates_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(TEMPLATES_FILE))
}

/// Load templates from the default location.
///
/// A missing file is not an error: the session simply has no templates.
pub fn load_templates() -> Result<Vec<Template>, QuickReplyError> {
    let Some(path) = templates_path() else {
        return Ok(Vec::new());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_templates_toml(&contents, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No templates file at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load templates from an explicit path. The file must exist.
pub fn load_templates_from_path(path: &Path) -> Result<Vec<Template>, QuickReplyError> {
    let contents = fs::read_to_string(path)?;
    parse_templates_toml(&contents, path)
}

pub fn parse_templates_toml(content: &str, path: &Path) -> Result<Vec<Template>, QuickReplyError> {
    let file = toml::from_str::<TemplatesFile>(content).map_err(|e| {
        QuickReplyError::TemplateParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        }
    })?;

    assign_missing_ids(file.templates)
}

/// Give every template without an id a positional one (`template-N`, 1-based)
/// and reject duplicates. A positional id already written out by another
/// entry is skipped in favour of the next free number.
fn assign_missing_ids(mut templates: Vec<Template>) -> Result<Vec<Template>, QuickReplyError> {
    let mut seen = HashSet::new();
    for template in templates.iter().filter(|t| !t.id.trim().is_empty()) {
        if !seen.insert(template.id.clone()) {
            return Err(QuickReplyError::DuplicateTemplateId(template.id.clone()));
        }
    }

    for (i, template) in templates.iter_mut().enumerate() {
        if !template.id.trim().is_empty() {
            continue;
        }

        let mut n = i + 1;
        while seen.contains(&format!("template-{}", n)) {
            n += 1;
        }
        template.id = format!("template-{}", n);
        seen.insert(template.id.clone());
    }

    Ok(templates)
}

#[cfg(test)]
#[path = "template_storage_tests.rs"]
mod template_storage_tests;
