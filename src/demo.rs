// Demo mode: serve bundled sample spells without touching the network
//
// Implements CatalogSource over a fixed sample set, applying the same
// name-filter semantics as the upstream API (case-insensitive substring
// match). A small artificial latency keeps the TUI's loading states visible.
//
// Run with: GRIMOIRE_DEMO=1 cargo run --release

use crate::fetch::{CatalogSource, FetchError};
use crate::spell::SpellRecord;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated round-trip latency
const DEMO_LATENCY: Duration = Duration::from_millis(200);

/// Catalog source backed by bundled samples
pub struct DemoCatalog {
    spells: Vec<SpellRecord>,
}

impl DemoCatalog {
    pub fn new() -> Self {
        Self {
            spells: sample_spells(),
        }
    }

    /// Name filtering as the upstream API does it: case-insensitive
    /// substring match on the trimmed query.
    fn filtered(&self, query: &str) -> Vec<SpellRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.spells.clone();
        }
        self.spells
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for DemoCatalog {
    async fn fetch(&self, query: &str) -> Result<Vec<SpellRecord>, FetchError> {
        sleep(DEMO_LATENCY).await;
        Ok(self.filtered(query))
    }
}

fn spell(
    name: &str,
    incantation: Option<&str>,
    verbal: Option<bool>,
    effect: Option<&str>,
    kind: Option<&str>,
    light: Option<&str>,
    creator: Option<&str>,
) -> SpellRecord {
    SpellRecord {
        name: name.to_string(),
        incantation: incantation.map(str::to_string),
        can_be_verbal: verbal,
        effect: effect.map(str::to_string),
        kind: kind.map(str::to_string),
        light: light.map(str::to_string),
        creator: creator.map(str::to_string),
    }
}

/// A representative slice of the real catalog, covering every light color
/// plus records with absent optionals.
fn sample_spells() -> Vec<SpellRecord> {
    vec![
        spell(
            "Summoning Charm",
            Some("Accio"),
            Some(true),
            Some("Summons an object"),
            Some("Charm"),
            None,
            None,
        ),
        spell(
            "Levitation Charm",
            Some("Wingardium Leviosa"),
            Some(true),
            Some("Levitates objects"),
            Some("Charm"),
            Some("Gold"),
            Some("Jarleth Hobart"),
        ),
        spell(
            "Disarming Charm",
            Some("Expelliarmus"),
            Some(true),
            Some("Disarms an opponent"),
            Some("Charm"),
            Some("Red"),
            Some("Elizabeth Smudgling"),
        ),
        spell(
            "Wand-Lighting Charm",
            Some("Lumos"),
            Some(true),
            Some("Creates light at wand tip"),
            Some("Charm"),
            Some("White"),
            Some("Levina Monkstanley"),
        ),
        spell(
            "Stunning Spell",
            Some("Stupefy"),
            Some(true),
            Some("Stuns the target"),
            Some("Charm"),
            Some("Red"),
            None,
        ),
        spell(
            "Shield Charm",
            Some("Protego"),
            Some(true),
            Some("Protects the caster with an invisible shield"),
            Some("Charm"),
            Some("Purple"),
            None,
        ),
        spell(
            "Full Body-Bind Curse",
            Some("Petrificus Totalus"),
            Some(true),
            Some("Petrifies the target"),
            Some("Curse"),
            Some("White"),
            None,
        ),
        spell(
            "Killing Curse",
            Some("Avada Kedavra"),
            Some(true),
            Some("Instantaneous death"),
            Some("Curse"),
            Some("Green"),
            None,
        ),
        spell(
            "Cheering Charm",
            None,
            Some(true),
            Some("Makes the target happy"),
            Some("Charm"),
            Some("Orange"),
            Some("Felix Summerbee"),
        ),
        spell(
            "Water-Making Spell",
            Some("Aguamenti"),
            Some(true),
            Some("Conjures water"),
            Some("Conjuration"),
            Some("IcyBlue"),
            None,
        ),
        spell(
            "Tickling Charm",
            Some("Rictusempra"),
            Some(true),
            Some("Tickles the target"),
            Some("Charm"),
            Some("BrightBlue"),
            None,
        ),
        spell(
            "Dancing Feet Spell",
            Some("Tarantallegra"),
            Some(true),
            Some("Forces the target's legs to dance"),
            Some("Jinx"),
            Some("Pink"),
            None,
        ),
        spell(
            "Memory Charm",
            Some("Obliviate"),
            Some(true),
            Some("Erases memories"),
            Some("Charm"),
            Some("Blue"),
            Some("Mnemone Radford"),
        ),
        spell(
            "Patronus Charm",
            Some("Expecto Patronum"),
            Some(true),
            Some("Conjures a spirit guardian"),
            Some("Charm"),
            Some("Violet"),
            None,
        ),
        spell(
            "Revealing Charm",
            Some("Aparecium"),
            Some(true),
            Some("Reveals invisible ink"),
            Some("Charm"),
            Some("Yellow"),
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_everything() {
        let catalog = DemoCatalog::new();
        assert_eq!(catalog.filtered("").len(), sample_spells().len());
        assert_eq!(catalog.filtered("   ").len(), sample_spells().len());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = DemoCatalog::new();
        let hits = catalog.filtered("CHARM");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|s| s.name.to_lowercase().contains("charm")));
    }

    #[test]
    fn no_match_yields_empty_list() {
        let catalog = DemoCatalog::new();
        assert!(catalog.filtered("zzz-no-such-spell").is_empty());
    }

    #[test]
    fn samples_cover_all_light_keys() {
        use crate::light::LIGHT_TABLE;
        let catalog = DemoCatalog::new();
        for (key, _) in LIGHT_TABLE {
            assert!(
                catalog.spells.iter().any(|s| s.light.as_deref() == Some(key)),
                "no sample with light {key:?}"
            );
        }
    }
}
