//! Custom character persistence in the semicolon roster format.
//!
//! ```text
//! # Format: TYPE;NAME;HP;ROCK;PAPER;SCISSORS;PASSIVE1_STR;PASSIVE2_STR;...
//! # Passive Str: TRIGGER_ID,EFFECT_ID,VALUE,THRESHOLD
//! CUSTOM;Pebble;30;2;2;2;8,7,50,30
//! ```
//!
//! Only `CUSTOM` records are loaded. `BUILTIN` records are ignored without a
//! report; any other malformed record is reported as a [`SkippedRecord`] and
//! skipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use duel_core::{CharacterDefinition, CharacterKind, MoveDamage, Passive};
use tracing::{debug, info, warn};

use crate::loaders::{LoadResult, read_file};

/// Header written at the top of every roster file.
pub const ROSTER_HEADER: [&str; 2] = [
    "# Format: TYPE;NAME;HP;ROCK;PAPER;SCISSORS;PASSIVE1_STR;PASSIVE2_STR;...",
    "# Passive Str: TRIGGER_ID,EFFECT_ID,VALUE,THRESHOLD",
];

/// Separator between record fields.
pub const RECORD_SEPARATOR: char = ';';

const CUSTOM_TAG: &str = "CUSTOM";
const BUILTIN_TAG: &str = "BUILTIN";

/// A custom definition together with the line it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRecord {
    /// 1-based line number.
    pub line: usize,
    pub definition: CharacterDefinition,
}

/// A record that could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Result of reading a roster file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterLoad {
    pub records: Vec<RosterRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl RosterLoad {
    /// Parses roster text. Never fails; bad records end up in `skipped`.
    pub fn parse(content: &str) -> Self {
        let mut load = Self::default();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim_end_matches('\r');
            if text.trim().is_empty() || text.starts_with('#') {
                continue;
            }

            match parse_record(text) {
                Ok(Some(definition)) => load.records.push(RosterRecord { line, definition }),
                Ok(None) => debug!(line, "ignoring built-in roster record"),
                Err(e) => {
                    let reason = format!("{e:#}");
                    warn!(line, record = text, %reason, "skipping roster record");
                    load.skipped.push(SkippedRecord {
                        line,
                        content: text.to_owned(),
                        reason,
                    });
                }
            }
        }

        load
    }

    pub fn definitions(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.records.iter().map(|record| &record.definition)
    }
}

/// Reads and writes the custom character file.
#[derive(Clone, Debug)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads custom characters.
    ///
    /// A missing file is created with just the header and yields an empty
    /// roster.
    pub fn load(&self) -> LoadResult<RosterLoad> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "roster file not found, creating it");
            self.write(String::new())?;
            return Ok(RosterLoad::default());
        }

        let content = read_file(&self.path)?;
        let load = RosterLoad::parse(&content);
        debug!(
            path = %self.path.display(),
            loaded = load.records.len(),
            skipped = load.skipped.len(),
            "roster loaded"
        );
        Ok(load)
    }

    /// Rewrites the file with the given definitions; built-ins are left out.
    pub fn save<'a>(
        &self,
        definitions: impl IntoIterator<Item = &'a CharacterDefinition>,
    ) -> LoadResult<()> {
        let mut body = String::new();
        for definition in definitions {
            if definition.kind == CharacterKind::Custom {
                body.push_str(&encode_record(definition));
                body.push('\n');
            }
        }
        self.write(body)
    }

    fn write(&self, body: String) -> LoadResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut content = ROSTER_HEADER.join("\n");
        content.push('\n');
        content.push_str(&body);

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write roster file {}", self.path.display()))
    }
}

/// `CUSTOM;NAME;HP;ROCK;PAPER;SCISSORS[;PASSIVE...]`, using defined values.
pub fn encode_record(definition: &CharacterDefinition) -> String {
    let damage = definition.damage;
    let mut out = format!(
        "{CUSTOM_TAG}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
        definition.name,
        definition.max_hp,
        damage.rock,
        damage.paper,
        damage.scissors,
        sep = RECORD_SEPARATOR,
    );
    for passive in &definition.passives {
        out.push(RECORD_SEPARATOR);
        out.push_str(&passive.encode());
    }
    out
}

/// Parses one non-comment line. `Ok(None)` for built-in records.
pub fn parse_record(line: &str) -> LoadResult<Option<CharacterDefinition>> {
    let parts: Vec<&str> = line.split(RECORD_SEPARATOR).collect();

    match parts[0].trim() {
        BUILTIN_TAG => return Ok(None),
        CUSTOM_TAG => {}
        other => bail!("unknown record type `{other}`"),
    }
    if parts.len() < 6 {
        bail!("expected at least 6 fields, found {}", parts.len());
    }

    let name = parts[1].trim();
    let number = |field: &str, what: &str| -> LoadResult<u32> {
        field
            .trim()
            .parse()
            .with_context(|| format!("invalid {what} `{}`", field.trim()))
    };
    let max_hp = number(parts[2], "HP")?;
    let damage = MoveDamage::new(
        number(parts[3], "Rock damage")?,
        number(parts[4], "Paper damage")?,
        number(parts[5], "Scissors damage")?,
    );

    let mut passives = Vec::new();
    for field in parts[6..].iter().filter(|f| !f.trim().is_empty()) {
        let passive: Passive = field
            .parse()
            .with_context(|| format!("invalid passive `{}`", field.trim()))?;
        passives.push(passive);
    }

    let definition =
        CharacterDefinition::new(name, CharacterKind::Custom, max_hp, damage, passives);
    definition.validate_custom()?;
    Ok(Some(definition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Move, PassiveEffect, PassiveTrigger};

    fn pebble() -> CharacterDefinition {
        CharacterDefinition::new(
            "Pebble",
            CharacterKind::Custom,
            30,
            MoveDamage::new(2, 3, 4),
            vec![
                Passive::new(
                    PassiveTrigger::OnWinWith(Move::Rock),
                    PassiveEffect::DamageOpponentFlat,
                    2,
                ),
                Passive::with_threshold(
                    PassiveTrigger::OnHpBelowPercent,
                    PassiveEffect::HealSelfPercentCurrent,
                    50,
                    30,
                ),
            ],
        )
    }

    #[test]
    fn encodes_defined_values() {
        assert_eq!(encode_record(&pebble()), "CUSTOM;Pebble;30;2;3;4;1,2,2,0;8,7,50,30");
    }

    #[test]
    fn parses_encoded_record() {
        let parsed = parse_record(&encode_record(&pebble())).expect("valid record");
        assert_eq!(parsed, Some(pebble()));
    }

    #[test]
    fn skips_malformed_records() {
        let content = "\
# Format: TYPE;NAME;HP;ROCK;PAPER;SCISSORS;PASSIVE1_STR;PASSIVE2_STR;...
# Passive Str: TRIGGER_ID,EFFECT_ID,VALUE,THRESHOLD
CUSTOM;Good;10;1;1;1
BUILTIN;OG;20;1;2;3
CUSTOM;Short;10;1
CUSTOM;NaN;ten;1;1;1
CUSTOM;BadPassive;10;1;1;1;99,1,1,0
GARBAGE
CUSTOM;TooStrong;10;1;1;11

CUSTOM;AlsoGood;12;0;0;0;7,2,1,0;
";
        let load = RosterLoad::parse(content);
        let names: Vec<&str> = load.definitions().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Good", "AlsoGood"]);
        assert_eq!(load.records[1].line, 11);

        let skipped: Vec<usize> = load.skipped.iter().map(|s| s.line).collect();
        assert_eq!(skipped, [5, 6, 7, 8, 9]);
        assert!(load.skipped[2].reason.contains("unknown passive trigger id 99"));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let load = RosterLoad::parse("CUSTOM;Win;10;1;1;1\r\n");
        assert_eq!(load.records.len(), 1);
        assert_eq!(load.records[0].definition.name, "Win");
    }

    #[test]
    fn missing_file_is_created_with_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = RosterStore::new(dir.path().join("nested").join("characters.txt"));

        let load = store.load().expect("created");
        assert!(load.records.is_empty());

        let written = std::fs::read_to_string(store.path()).expect("file exists");
        assert_eq!(written.lines().collect::<Vec<_>>(), ROSTER_HEADER);
    }

    #[test]
    fn save_then_load_keeps_customs_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = RosterStore::new(dir.path().join("characters.txt"));

        let mut og = pebble();
        og.name = "OG".into();
        og.kind = CharacterKind::Builtin;
        store.save([&og, &pebble()]).expect("saved");

        let load = store.load().expect("loaded");
        assert!(load.skipped.is_empty());
        assert_eq!(load.definitions().cloned().collect::<Vec<_>>(), vec![pebble()]);
        assert_eq!(load.records[0].line, 3);
    }
}
