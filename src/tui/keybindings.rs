//! Keybinding definitions
//!
//! Key hints shown in the help dialog, grouped by where they apply.

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active on every step
    Global,
    /// Active on the selection steps
    Tiles,
    /// Active on the price slider
    Slider,
    /// Active on the result step
    Result,
}

impl KeyContext {
    /// Section heading in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Navigation",
            Self::Tiles => "Selection",
            Self::Slider => "Price slider",
            Self::Result => "Result",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Key(s) as shown to the user
    pub keys: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "n / Enter",
        description: "Next / Calculate",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "b / Backspace",
        description: "Back",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "q / Esc",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "← → / h l",
        description: "Move between options",
        context: KeyContext::Tiles,
    },
    Keybinding {
        keys: "Space",
        description: "Select highlighted option",
        context: KeyContext::Tiles,
    },
    Keybinding {
        keys: "1-3",
        description: "Select option directly",
        context: KeyContext::Tiles,
    },
    Keybinding {
        keys: "← →",
        description: "Adjust by one step",
        context: KeyContext::Slider,
    },
    Keybinding {
        keys: "PgDn / PgUp",
        description: "Adjust by ten steps",
        context: KeyContext::Slider,
    },
    Keybinding {
        keys: "Home / End",
        description: "Jump to minimum / maximum",
        context: KeyContext::Slider,
    },
    Keybinding {
        keys: "o",
        description: "Open demo page in browser",
        context: KeyContext::Result,
    },
];

/// Keybindings for one context, in table order
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in [
            KeyContext::Global,
            KeyContext::Tiles,
            KeyContext::Slider,
            KeyContext::Result,
        ] {
            assert!(bindings_for(context).count() > 0, "{:?} has no bindings", context);
        }
    }
}
