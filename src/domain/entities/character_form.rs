//! Character form - the inputs for a backstory

use crate::domain::value_objects::{Race, Role, Selection};

/// Field values for one backstory generation request
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterForm {
    name: String,
    race: Option<Race>,
    role: Option<Role>,
    traits: Selection<String>,
    strengths_weaknesses: String,
}

impl CharacterForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            race: Some(Race::default()),
            role: Some(Role::default()),
            traits: Selection::new(),
            strengths_weaknesses: String::new(),
        }
    }

    #[cfg(test)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[cfg(test)]
    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    #[cfg(test)]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[cfg(test)]
    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.traits.insert(trait_name.into());
        self
    }

    #[cfg(test)]
    pub fn with_strengths_weaknesses(mut self, text: impl Into<String>) -> Self {
        self.strengths_weaknesses = text.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Option<Race> {
        self.race
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn traits(&self) -> &Selection<String> {
        &self.traits
    }

    pub fn strengths_weaknesses(&self) -> &str {
        &self.strengths_weaknesses
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_race(&mut self, race: Option<Race>) {
        self.race = race;
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub fn set_strengths_weaknesses(&mut self, text: impl Into<String>) {
        self.strengths_weaknesses = text.into();
    }

    /// Check or uncheck a trait. Returns whether it is now selected.
    pub fn toggle_trait(&mut self, trait_name: impl Into<String>) -> bool {
        self.traits.toggle(trait_name.into())
    }

    /// Merge the comma-separated free text from the traits dialog
    ///
    /// Blank entries are dropped and already-selected traits are not added
    /// again. Returns how many traits were added.
    pub fn merge_custom_traits(&mut self, input: &str) -> usize {
        let mut added = 0;
        for trait_name in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if self.traits.insert(trait_name.to_string()) {
                added += 1;
            }
        }
        added
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the field with this wire name holds a value
    pub fn is_filled(&self, field: &str) -> bool {
        match field {
            "characterName" => !self.name.trim().is_empty(),
            "race" => self.race.is_some(),
            "role" => self.role.is_some(),
            "traits" => !self.traits.is_empty(),
            "strengthsWeaknesses" => !self.strengths_weaknesses.trim().is_empty(),
            _ => false,
        }
    }
}

impl Default for CharacterForm {
    fn default() -> Self {
        Self::new()
    }
}
