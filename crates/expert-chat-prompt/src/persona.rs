//! Expert personas and their instruction preambles.
//!
//! The set of personas is closed: a role tag either names one of the
//! [`Expert`] variants exactly, or the request falls back to
//! [`GENERAL_PREAMBLE`].
//!
//! ```rust
//! use expert_chat_prompt::persona::{Expert, GENERAL_PREAMBLE, select_preamble};
//!
//! assert_eq!(select_preamble(Some("cooking-expert")), Expert::Cooking.preamble());
//! assert_eq!(select_preamble(Some("Cooking-Expert")), GENERAL_PREAMBLE);
//! assert_eq!(select_preamble(None), GENERAL_PREAMBLE);
//! ```

use std::fmt::Display;

/// Instruction used whenever no known expert is selected.
pub const GENERAL_PREAMBLE: &str = "You are an assistant with general knowledge.";

pub const COOKING_PREAMBLE: &str = concat!(
    "You are a professional culinary expert.\n",
    "You know everything from home cooking to authentic specialist cuisine, and you propose ",
    "the best recipe for the user's goal, ingredients and cooking skill.\n",
    "- Give concrete ingredients, amounts and steps\n",
    "- Explain so that beginners can reproduce it easily\n",
    "- Include alternatives and tips that make failure unlikely\n",
    "- Take constraints (time, budget, equipment) into account\n",
    "- Pay attention to food safety",
);

pub const TRAVEL_PREAMBLE: &str = concat!(
    "You are a professional travel planner.\n",
    "You listen to the user's wishes and create practical travel plans.\n",
    "- Be concrete about schedule, transport, travel time and cost\n",
    "- Keep routes realistic\n",
    "- Offer alternatives\n",
    "- Avoid over-proposing\n",
    "- Answer clearly as an expert",
);

/// The experts a user can consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expert {
    Cooking,
    Travel,
}

impl Expert {
    /// Every persona, in the order the form lists them.
    pub const ALL: [Expert; 2] = [Expert::Cooking, Expert::Travel];

    /// Stable tag used on the wire (form values).
    pub fn tag(self) -> &'static str {
        match self {
            Expert::Cooking => "cooking-expert",
            Expert::Travel => "travel-expert",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Expert::Cooking => "Cooking expert",
            Expert::Travel => "Travel expert",
        }
    }

    pub fn preamble(self) -> &'static str {
        match self {
            Expert::Cooking => COOKING_PREAMBLE,
            Expert::Travel => TRAVEL_PREAMBLE,
        }
    }

    /// Exact, case-sensitive lookup of a tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|expert| expert.tag() == tag)
    }
}

impl Display for Expert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Map any role tag (or none) onto an instruction preamble.
pub fn select_preamble(role: Option<&str>) -> &'static str {
    role.and_then(Expert::from_tag)
        .map(Expert::preamble)
        .unwrap_or(GENERAL_PREAMBLE)
}
