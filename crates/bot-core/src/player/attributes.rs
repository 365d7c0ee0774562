use serde::{Deserialize, Serialize};

/// Named stat slots of an [`Attributes`] vector (everything except the constant term).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Strength,
    Dexterity,
    Intelligence,
    Willpower,
    Constitution,
    SlashResist,
    PierceResist,
    FireResist,
    PoisonResist,
    ElectricResist,
    Life,
    Stamina,
    Mana,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 13] = [
        AttributeKind::Strength,
        AttributeKind::Dexterity,
        AttributeKind::Intelligence,
        AttributeKind::Willpower,
        AttributeKind::Constitution,
        AttributeKind::SlashResist,
        AttributeKind::PierceResist,
        AttributeKind::FireResist,
        AttributeKind::PoisonResist,
        AttributeKind::ElectricResist,
        AttributeKind::Life,
        AttributeKind::Stamina,
        AttributeKind::Mana,
    ];
}

/// Stat vector as sent by the server.
///
/// The same shape is used for a character's stats and for a skill's damage
/// coefficients; see [`score`].
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Attributes {
    pub strength: f32,
    pub dexterity: f32,
    pub intelligence: f32,
    pub willpower: f32,
    pub constitution: f32,
    pub slash_resist: f32,
    pub pierce_resist: f32,
    pub fire_resist: f32,
    pub poison_resist: f32,
    pub electric_resist: f32,
    pub life: f32,
    pub stamina: f32,
    pub mana: f32,
    pub constant: f32,
}

impl Attributes {
    /// A vector with a single slot set, everything else zero.
    pub fn single(kind: AttributeKind, value: f32) -> Self {
        let mut attrs = Self::default();
        *attrs.slot_mut(kind) = value;
        attrs
    }

    pub fn get(&self, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Willpower => self.willpower,
            AttributeKind::Constitution => self.constitution,
            AttributeKind::SlashResist => self.slash_resist,
            AttributeKind::PierceResist => self.pierce_resist,
            AttributeKind::FireResist => self.fire_resist,
            AttributeKind::PoisonResist => self.poison_resist,
            AttributeKind::ElectricResist => self.electric_resist,
            AttributeKind::Life => self.life,
            AttributeKind::Stamina => self.stamina,
            AttributeKind::Mana => self.mana,
        }
    }

    fn slot_mut(&mut self, kind: AttributeKind) -> &mut f32 {
        match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Intelligence => &mut self.intelligence,
            AttributeKind::Willpower => &mut self.willpower,
            AttributeKind::Constitution => &mut self.constitution,
            AttributeKind::SlashResist => &mut self.slash_resist,
            AttributeKind::PierceResist => &mut self.pierce_resist,
            AttributeKind::FireResist => &mut self.fire_resist,
            AttributeKind::PoisonResist => &mut self.poison_resist,
            AttributeKind::ElectricResist => &mut self.electric_resist,
            AttributeKind::Life => &mut self.life,
            AttributeKind::Stamina => &mut self.stamina,
            AttributeKind::Mana => &mut self.mana,
        }
    }
}

/// Weighted dot product of `actor` stats against `coefficients`, plus the
/// coefficient vector's constant, truncated toward zero.
///
/// This is the damage estimate the server would compute for a skill whose
/// `damage_amount` is `coefficients` when used by a character with `actor` stats.
pub fn score(actor: &Attributes, coefficients: &Attributes) -> i64 {
    let dot: f64 = AttributeKind::ALL
        .iter()
        .map(|&kind| f64::from(actor.get(kind)) * f64::from(coefficients.get(kind)))
        .sum();
    (dot + f64::from(coefficients.constant)) as i64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn attrs_from(values: &[f32; 13], constant: f32) -> Attributes {
        let mut attrs = Attributes {
            constant,
            ..Attributes::default()
        };
        for (kind, value) in AttributeKind::ALL.iter().zip(values) {
            *attrs.slot_mut(*kind) = *value;
        }
        attrs
    }

    #[test]
    fn score_sums_products_and_adds_constant() {
        let actor = Attributes {
            strength: 10.0,
            dexterity: 4.0,
            mana: 2.0,
            ..Attributes::default()
        };
        let coeffs = Attributes {
            strength: 1.5,
            dexterity: 0.5,
            mana: 3.0,
            constant: 7.0,
            ..Attributes::default()
        };
        // 15 + 2 + 6 + 7
        assert_eq!(score(&actor, &coeffs), 30);
    }

    #[test]
    fn score_truncates_toward_zero() {
        let actor = Attributes {
            life: 1.0,
            ..Attributes::default()
        };
        let up = Attributes {
            life: 2.9,
            ..Attributes::default()
        };
        let down = Attributes {
            life: -2.9,
            ..Attributes::default()
        };
        assert_eq!(score(&actor, &up), 2);
        assert_eq!(score(&actor, &down), -2);
    }

    #[test]
    fn actor_constant_is_ignored() {
        let actor = Attributes {
            constant: 100.0,
            ..Attributes::default()
        };
        assert_eq!(score(&actor, &Attributes::default()), 0);
    }

    #[test]
    fn single_sets_only_the_requested_slot() {
        let attrs = Attributes::single(AttributeKind::Stamina, 3.0);
        for kind in AttributeKind::ALL {
            let expected = if kind == AttributeKind::Stamina { 3.0 } else { 0.0 };
            assert_eq!(attrs.get(kind), expected);
        }
        assert_eq!(attrs.constant, 0.0);
    }

    #[test]
    fn attributes_decode_camel_case_with_missing_fields() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"slashResist": 2, "constant": 1.5}"#).unwrap();
        assert_eq!(attrs.slash_resist, 2.0);
        assert_eq!(attrs.constant, 1.5);
        assert_eq!(attrs.strength, 0.0);
    }

    proptest! {
        #[test]
        fn zero_coefficients_score_is_the_constant(
            values in prop::array::uniform13(-100i16..100),
            constant in -1000i16..1000,
        ) {
            let actor = attrs_from(&values.map(f32::from), 0.0);
            let coeffs = Attributes { constant: f32::from(constant), ..Attributes::default() };
            prop_assert_eq!(score(&actor, &coeffs), i64::from(constant));
        }

        #[test]
        fn integer_score_is_symmetric_without_constants(
            a in prop::array::uniform13(-50i16..50),
            b in prop::array::uniform13(-50i16..50),
        ) {
            let a = attrs_from(&a.map(f32::from), 0.0);
            let b = attrs_from(&b.map(f32::from), 0.0);
            prop_assert_eq!(score(&a, &b), score(&b, &a));
        }

        #[test]
        fn score_is_linear_in_the_actor(
            a in prop::array::uniform13(-50i16..50),
            b in prop::array::uniform13(-50i16..50),
            k in prop::array::uniform13(-20i16..20),
        ) {
            let sum: [f32; 13] = std::array::from_fn(|i| f32::from(a[i]) + f32::from(b[i]));
            let k = attrs_from(&k.map(f32::from), 0.0);
            let lhs = score(&attrs_from(&sum, 0.0), &k);
            let rhs = score(&attrs_from(&a.map(f32::from), 0.0), &k)
                + score(&attrs_from(&b.map(f32::from), 0.0), &k);
            prop_assert_eq!(lhs, rhs);
        }
    }
}
