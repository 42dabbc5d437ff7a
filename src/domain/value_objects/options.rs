//! Fixed option lists offered by the generation forms
//!
//! Every select field draws its value from one of these enums. The label of
//! each option is exactly what the generation service receives.

macro_rules! option_list {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All options in the order the form offers them
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn labels() -> Vec<&'static str> {
                Self::all().iter().map(|option| option.as_str()).collect()
            }
        }

        /// A fresh form starts on the first option
        impl Default for $name {
            fn default() -> Self {
                Self::all()[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| anyhow::anyhow!("Invalid {}: {}", $kind, s))
            }
        }
    };
}

option_list! {
    /// Tone of a generated storyline
    StoryTone, "story tone" {
        Dark => "Dark",
        Lighthearted => "Lighthearted",
        SciFi => "Sci-fi",
        Fantasy => "Fantasy",
        Mystery => "Mystery",
        Romance => "Romance",
    }
}

option_list! {
    /// Race or species of a character
    Race, "race" {
        Human => "Human",
        Elf => "Elf",
        Dwarf => "Dwarf",
        Orc => "Orc",
        Cyborg => "Cyborg",
        Android => "Android",
        Alien => "Alien",
    }
}

option_list! {
    /// Role a character plays in the story
    Role, "role" {
        Hero => "Hero",
        Villain => "Villain",
        Sidekick => "Sidekick",
        Mentor => "Mentor",
        AntiHero => "Anti-hero",
        Supporting => "Supporting",
        Warrior => "Warrior",
    }
}

option_list! {
    /// Form the generated lore takes
    ContentType, "content type" {
        ShortStory => "Short Story",
        AncientText => "Ancient Text",
        Dialogues => "Dialogues",
        Mythology => "Mythology",
        HistoricalRecord => "Historical Record",
    }
}

option_list! {
    Era, "era" {
        Medieval => "Medieval",
        Renaissance => "Renaissance",
        Modern => "Modern",
        Cyberpunk => "Cyberpunk",
        PostApocalyptic => "Post-Apocalyptic",
        Ancient => "Ancient",
    }
}

option_list! {
    LoreTheme, "theme" {
        War => "War",
        Peace => "Peace",
        Love => "Love",
        Betrayal => "Betrayal",
        Discovery => "Discovery",
        Magic => "Magic",
        Technology => "Technology",
        Nature => "Nature",
    }
}

option_list! {
    /// Tone of generated lore (distinct from storyline tones)
    LoreTone, "lore tone" {
        Epic => "Epic",
        Comedic => "Comedic",
        Tragic => "Tragic",
        Mysterious => "Mysterious",
        Romantic => "Romantic",
        Educational => "Educational",
    }
}

/// Personality traits offered as checkboxes. Characters may carry custom
/// traits beyond these.
pub const PRESET_TRAITS: [&str; 12] = [
    "Brave",
    "Cunning",
    "Loyal",
    "Mysterious",
    "Charismatic",
    "Intelligent",
    "Strong",
    "Agile",
    "Wise",
    "Foolish",
    "Honorable",
    "Treacherous",
];
