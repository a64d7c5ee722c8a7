// Spell record data model
//
// One entry in the remote catalog: a required name plus optional descriptive
// attributes. The upstream API uses PascalCase-ish camelCase field names
// (`canBeVerbal`), so serde renames map them onto idiomatic Rust fields.
// Unknown fields in the response are ignored; missing optionals decode to
// None, never to an empty string.

use serde::{Deserialize, Serialize};

/// A single spell record as returned by the catalog API.
///
/// The whole collection is replaced on every fetch - records are never
/// merged or diffed, so there is no synthetic identifier. `name` is the
/// display key and list identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    pub name: String,

    pub incantation: Option<String>,

    /// Whether the spell can be cast verbally. Decoded but only shown in
    /// the detail panel; the list does not use it.
    pub can_be_verbal: Option<bool>,

    pub effect: Option<String>,

    /// Spell category ("Charm", "Curse", ...). `type` is a keyword, hence
    /// the rename.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Categorical color key ("Blue", "Gold", ...) used solely to pick a
    /// display color. See `light::color_of`.
    pub light: Option<String>,

    pub creator: Option<String>,
}

impl SpellRecord {
    /// Decode a JSON array response body into a list of records.
    pub fn decode_list(body: &str) -> Result<Vec<SpellRecord>, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let json = r#"[{
            "name": "Levitation Charm",
            "incantation": "Wingardium Leviosa",
            "canBeVerbal": true,
            "effect": "Levitates objects",
            "type": "Charm",
            "light": "Gold",
            "creator": "Jarleth Hobart"
        }]"#;

        let spells = SpellRecord::decode_list(json).unwrap();
        assert_eq!(spells.len(), 1);
        let s = &spells[0];
        assert_eq!(s.name, "Levitation Charm");
        assert_eq!(s.incantation.as_deref(), Some("Wingardium Leviosa"));
        assert_eq!(s.can_be_verbal, Some(true));
        assert_eq!(s.effect.as_deref(), Some("Levitates objects"));
        assert_eq!(s.kind.as_deref(), Some("Charm"));
        assert_eq!(s.light.as_deref(), Some("Gold"));
        assert_eq!(s.creator.as_deref(), Some("Jarleth Hobart"));
    }

    #[test]
    fn absent_optionals_decode_to_none() {
        // Only `name` is required; everything else must come back as None,
        // not as an empty string or false.
        let json = r#"[{"name": "Obscuro"}]"#;

        let spells = SpellRecord::decode_list(json).unwrap();
        let s = &spells[0];
        assert_eq!(s.name, "Obscuro");
        assert!(s.incantation.is_none());
        assert!(s.can_be_verbal.is_none());
        assert!(s.effect.is_none());
        assert!(s.kind.is_none());
        assert!(s.light.is_none());
        assert!(s.creator.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"[{"name": "Accio", "id": "abc-123", "slug": "accio"}]"#;
        let spells = SpellRecord::decode_list(json).unwrap();
        assert_eq!(spells[0].name, "Accio");
    }

    #[test]
    fn n_objects_decode_to_n_records() {
        let json = r#"[
            {"name": "Accio"},
            {"name": "Expelliarmus", "light": "Red"},
            {"name": "Lumos", "light": "White"}
        ]"#;
        let spells = SpellRecord::decode_list(json).unwrap();
        assert_eq!(spells.len(), 3);
        // Server order is preserved - no client-side sorting.
        assert_eq!(spells[0].name, "Accio");
        assert_eq!(spells[2].name, "Lumos");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SpellRecord::decode_list("{not json").is_err());
        // An object where an array is expected is a decode error too.
        assert!(SpellRecord::decode_list(r#"{"name": "Accio"}"#).is_err());
    }

    #[test]
    fn missing_name_is_an_error() {
        assert!(SpellRecord::decode_list(r#"[{"incantation": "Accio"}]"#).is_err());
    }
}
