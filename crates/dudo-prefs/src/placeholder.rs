// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Default player names.

/// Supplies the name shown for a seat that was never named.
///
/// The game shows a translated word ("Player", "Giocatore", ...); the
/// translation lookup belongs to the host, so it is injected here.
pub trait PlaceholderProvider {
    /// Placeholder name for player `index`.
    fn player_name(&self, index: i32) -> String;
}

impl<F> PlaceholderProvider for F
where
    F: Fn(i32) -> String,
{
    fn player_name(&self, index: i32) -> String {
        self(index)
    }
}

/// Same fixed text for every seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlaceholder(pub String);

impl Default for StaticPlaceholder {
    fn default() -> Self {
        Self(String::from("Player"))
    }
}

impl PlaceholderProvider for StaticPlaceholder {
    fn player_name(&self, _index: i32) -> String {
        self.0.clone()
    }
}

const TRANSLATIONS: &[(&str, &str)] = &[
    ("en", "Player"),
    ("it", "Giocatore"),
    ("es", "Jugador"),
    ("fr", "Joueur"),
    ("de", "Spieler"),
];

/// Built-in translations of the placeholder, picked by language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedPlaceholder {
    text: &'static str,
}

impl LocalizedPlaceholder {
    /// Resolve `tag` (`"it"`, `"it-IT"`, `"it_IT.UTF-8"`); unknown languages get English.
    pub fn for_language(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let text = TRANSLATIONS
            .iter()
            .find(|(code, _)| *code == lang)
            .map_or(TRANSLATIONS[0].1, |(_, text)| *text);
        Self { text }
    }

    /// Resolved text.
    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl Default for LocalizedPlaceholder {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl PlaceholderProvider for LocalizedPlaceholder {
    fn player_name(&self, _index: i32) -> String {
        self.text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_are_normalized() {
        assert_eq!(LocalizedPlaceholder::for_language("it").text(), "Giocatore");
        assert_eq!(LocalizedPlaceholder::for_language("it-IT").text(), "Giocatore");
        assert_eq!(LocalizedPlaceholder::for_language("DE_de.UTF-8").text(), "Spieler");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(LocalizedPlaceholder::for_language("xx").text(), "Player");
        assert_eq!(LocalizedPlaceholder::for_language("").text(), "Player");
    }

    #[test]
    fn closures_can_number_seats() {
        let numbered = |i: i32| format!("Player {}", i + 1);
        assert_eq!(numbered.player_name(2), "Player 3");
        assert_eq!(StaticPlaceholder::default().player_name(4), "Player");
    }
}
