//! Attack damage for a move, with and without consuming the pending bonus.

use crate::state::Character;

use super::Move;

/// Damage `character` would deal with `m` right now.
///
/// Prediction only: the pending next-attack bonus is included but left in
/// place.
pub fn estimated_damage(character: &Character, m: Move) -> u32 {
    character
        .move_damage(m)
        .saturating_add(character.bonus_damage_next_attack())
}

/// Damage dealt when `m` actually lands in a round.
///
/// Consumes the pending next-attack bonus. Call once per resolved attack and
/// never from simulation code.
pub fn realized_damage(character: &mut Character, m: Move) -> u32 {
    let bonus = character.take_bonus_damage();
    character.move_damage(m).saturating_add(bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharacterKind, MoveDamage};

    fn duran() -> Character {
        Character::new(
            "Duran",
            CharacterKind::Builtin,
            15,
            MoveDamage::new(2, 1, 3),
            [],
        )
        .expect("no passives")
    }

    #[test]
    fn estimate_leaves_bonus_alone() {
        let mut c = duran();
        c.add_bonus_damage_next_attack(3);
        assert_eq!(estimated_damage(&c, Move::Scissors), 6);
        assert_eq!(estimated_damage(&c, Move::Scissors), 6);
        assert_eq!(c.bonus_damage_next_attack(), 3);
    }

    #[test]
    fn realized_matches_estimate_and_consumes_bonus() {
        let mut c = duran();
        c.add_bonus_damage_next_attack(3);
        for m in Move::ALL {
            let mut fighter = c.clone();
            let expected = estimated_damage(&fighter, m);
            assert_eq!(realized_damage(&mut fighter, m), expected);
            assert_eq!(fighter.bonus_damage_next_attack(), 0);
        }
        assert_eq!(realized_damage(&mut c, Move::Rock), 5);
        assert_eq!(realized_damage(&mut c, Move::Rock), 2);
    }
}
