//! Character registry: built-in and user-made definitions under unique names.

use duel_core::{Character, CharacterDefinition, CharacterKind, DefinitionError};

/// Ordered set of character definitions, built-ins first.
///
/// Names are unique under ASCII case folding, matching lookup. Built-ins are read-only; customs can be
/// added, replaced and removed, and are validated on the way in.
#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    entries: Vec<CharacterDefinition>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the given built-ins.
    pub fn with_builtins(
        builtins: impl IntoIterator<Item = CharacterDefinition>,
    ) -> Result<Self, DefinitionError> {
        let mut registry = Self::new();
        for mut definition in builtins {
            definition.kind = CharacterKind::Builtin;
            registry.ensure_unique(&definition.name, None)?;
            registry.entries.push(definition);
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn definitions(&self) -> &[CharacterDefinition] {
        &self.entries
    }

    pub fn customs(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.entries
            .iter()
            .filter(|def| def.kind == CharacterKind::Custom)
    }

    /// Looks a definition up by name; exact match first, then ASCII
    /// case-insensitive.
    pub fn get(&self, name: &str) -> Option<&CharacterDefinition> {
        self.position(name).map(|index| &self.entries[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Builds a fresh fighter from the named definition.
    pub fn instantiate(&self, name: &str) -> Result<Character, DefinitionError> {
        self.get(name)
            .ok_or_else(|| DefinitionError::UnknownCharacter(name.to_owned()))?
            .instantiate()
    }

    /// Validates and appends a user-made character.
    pub fn add_custom(&mut self, mut definition: CharacterDefinition) -> Result<(), DefinitionError> {
        definition.kind = CharacterKind::Custom;
        definition.name = definition.name.trim().to_owned();
        definition.validate_custom()?;
        self.ensure_unique(&definition.name, None)?;
        self.entries.push(definition);
        Ok(())
    }

    /// Replaces the custom character `name`, keeping its roster position.
    pub fn replace_custom(
        &mut self,
        name: &str,
        mut definition: CharacterDefinition,
    ) -> Result<(), DefinitionError> {
        let index = self.custom_position(name)?;
        definition.kind = CharacterKind::Custom;
        definition.name = definition.name.trim().to_owned();
        definition.validate_custom()?;
        self.ensure_unique(&definition.name, Some(index))?;
        self.entries[index] = definition;
        Ok(())
    }

    /// Removes the custom character `name` and returns its definition.
    pub fn remove_custom(&mut self, name: &str) -> Result<CharacterDefinition, DefinitionError> {
        let index = self.custom_position(name)?;
        Ok(self.entries.remove(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|def| def.name == name)
            .or_else(|| {
                self.entries
                    .iter()
                    .position(|def| def.name.eq_ignore_ascii_case(name))
            })
    }

    fn custom_position(&self, name: &str) -> Result<usize, DefinitionError> {
        let index = self
            .position(name)
            .ok_or_else(|| DefinitionError::UnknownCharacter(name.to_owned()))?;
        if self.entries[index].kind != CharacterKind::Custom {
            return Err(DefinitionError::NotCustom(self.entries[index].name.clone()));
        }
        Ok(index)
    }

    fn ensure_unique(&self, name: &str, skip: Option<usize>) -> Result<(), DefinitionError> {
        let taken = self
            .entries
            .iter()
            .enumerate()
            .any(|(index, def)| Some(index) != skip && def.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(DefinitionError::DuplicateName(name.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{MoveDamage, Passive, PassiveEffect, PassiveTrigger};

    fn def(name: &str) -> CharacterDefinition {
        CharacterDefinition::new(name, CharacterKind::Custom, 10, MoveDamage::new(1, 1, 1), vec![])
    }

    fn registry() -> CharacterRegistry {
        let mut og = def("OG");
        og.kind = CharacterKind::Builtin;
        CharacterRegistry::with_builtins([og]).expect("unique builtins")
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = registry();
        assert_eq!(
            registry.add_custom(def("OG")),
            Err(DefinitionError::DuplicateName("OG".into()))
        );
        registry.add_custom(def("Pebble")).expect("new name");
        assert_eq!(
            registry.add_custom(def(" Pebble ")),
            Err(DefinitionError::DuplicateName("Pebble".into()))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn names_differing_only_in_case_collide() {
        let mut registry = registry();
        assert_eq!(
            registry.add_custom(def("og")),
            Err(DefinitionError::DuplicateName("og".into()))
        );
        assert!(registry.contains("oG"));

        registry.add_custom(def("Pebble")).expect("new name");
        registry
            .replace_custom("Pebble", def("PEBBLE"))
            .expect("recasing its own name is fine");
        assert_eq!(registry.definitions()[1].name, "PEBBLE");
        assert_eq!(
            registry.replace_custom("PEBBLE", def("Og")),
            Err(DefinitionError::DuplicateName("Og".into()))
        );
    }

    #[test]
    fn rejects_duplicate_builtins() {
        assert!(CharacterRegistry::with_builtins([def("A"), def("A")]).is_err());
    }

    #[test]
    fn builtins_are_read_only() {
        let mut registry = registry();
        assert_eq!(
            registry.remove_custom("OG"),
            Err(DefinitionError::NotCustom("OG".into()))
        );
        assert_eq!(
            registry.replace_custom("OG", def("OG")),
            Err(DefinitionError::NotCustom("OG".into()))
        );
    }

    #[test]
    fn replace_keeps_position_and_checks_names() {
        let mut registry = registry();
        registry.add_custom(def("Pebble")).expect("valid");
        registry.add_custom(def("Stone")).expect("valid");

        let mut renamed = def("Boulder");
        renamed.max_hp = 40;
        registry.replace_custom("Pebble", renamed).expect("valid edit");
        assert_eq!(registry.definitions()[1].name, "Boulder");
        assert_eq!(registry.definitions()[1].max_hp, 40);

        assert_eq!(
            registry.replace_custom("Boulder", def("Stone")),
            Err(DefinitionError::DuplicateName("Stone".into()))
        );
        registry
            .replace_custom("Boulder", def("Boulder"))
            .expect("keeping the same name is fine");
    }

    #[test]
    fn custom_validation_applies() {
        let mut registry = registry();
        let mut greedy = def("Greedy");
        greedy.passives = vec![Passive::new(PassiveTrigger::OnTie, PassiveEffect::HealSelfFlat, 1); 4];
        assert!(matches!(
            registry.add_custom(greedy),
            Err(DefinitionError::TooManyPassives { .. })
        ));
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive() {
        let registry = registry();
        assert_eq!(registry.get("og").map(|d| d.name.as_str()), Some("OG"));
        assert!(registry.get("nobody").is_none());
        assert_eq!(
            registry.instantiate("nobody"),
            Err(DefinitionError::UnknownCharacter("nobody".into()))
        );
        let fighter = registry.instantiate("OG").expect("known");
        assert_eq!(fighter.current_hp(), 10);
    }

    #[test]
    fn remove_returns_definition() {
        let mut registry = registry();
        registry.add_custom(def("Pebble")).expect("valid");
        let removed = registry.remove_custom("Pebble").expect("custom");
        assert_eq!(removed.name, "Pebble");
        assert_eq!(registry.customs().count(), 0);
    }
}
