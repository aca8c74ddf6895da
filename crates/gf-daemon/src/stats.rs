//! Game-stat derivation from personality traits.
//!
//! Crew arrive from the upstream with Big Five trait scores in `[0, 1]`;
//! the game plays them as footballers, so each fetch derives defense,
//! attack, and stamina. A jitter term keeps equal-trait crew from tying on
//! every stat; the random source is injected so tests can seed it.

use gf_inventory::RawCrewMember;
use gf_schemas::{CrewTraits, GameStats, NewCrew};
use rand::Rng;
use serde_json::Value;

/// Derive in-game stats from traits.
///
/// Defense rewards conscientiousness and calm (low neuroticism); attack
/// rewards extraversion and openness; stamina mixes calm discipline with
/// agreeableness. Each stat is 90% trait-driven plus a uniform jitter in
/// `[0, 20)`, rounded to the nearest integer.
pub fn derive_stats<R: Rng>(traits: &CrewTraits, rng: &mut R) -> GameStats {
    let defense = ((traits.conscientiousness * 50.0 + (1.0 - traits.neuroticism) * 50.0) * 0.9
        + rng.gen::<f64>() * 20.0)
        .round() as i64;

    let attack = ((traits.extraversion * 50.0 + traits.openness * 50.0) * 0.9
        + rng.gen::<f64>() * 20.0)
        .round() as i64;

    let stamina = ((traits.conscientiousness * 40.0
        + (1.0 - traits.neuroticism) * 40.0
        + traits.agreeableness * 20.0)
        * 0.9
        + rng.gen::<f64>() * 20.0)
        .round() as i64;

    GameStats {
        defense,
        attack,
        stamina,
    }
}

/// Turn a raw upstream crew member into a cacheable record input: copy the
/// identity and trait fields, derive the stats.
pub fn enrich_member<R: Rng>(raw: RawCrewMember, rng: &mut R) -> NewCrew {
    let traits = CrewTraits {
        openness: raw.openness,
        conscientiousness: raw.conscientiousness,
        extraversion: raw.extraversion,
        agreeableness: raw.agreeableness,
        neuroticism: raw.neuroticism,
    };
    let stats = derive_stats(&traits, rng);

    NewCrew {
        das_id: raw.das_id,
        mint_offset: raw.mint_offset,
        faction: raw.faction,
        species: raw.species,
        sex: raw.sex,
        name: raw.name,
        university: raw.university,
        age: raw.age,
        traits,
        rarity: raw.rarity,
        aptitudes: raw.aptitudes.map(|a| {
            Value::Object(a.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
        }),
        appearance: raw.appearance.map(Value::Object),
        image_url: raw.image_url,
        stats,
        updated_at: raw.updated_at,
        created_at: raw.created_at,
    }
}
