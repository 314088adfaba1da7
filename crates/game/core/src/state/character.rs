//! Battle-scoped fighter state.

use core::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::combat::Move;
use crate::config::GameConfig;
use crate::error::DefinitionError;
use crate::passive::Passive;

/// Bounded passive list owned by a single character.
pub type Passives = ArrayVec<Passive, { GameConfig::MAX_PASSIVES }>;

/// Where a character comes from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterKind {
    /// Shipped with the game.
    #[default]
    Builtin,
    /// Created by the user and persisted in the roster file.
    Custom,
}

/// Damage per move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDamage {
    pub rock: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl MoveDamage {
    pub const fn new(rock: u32, paper: u32, scissors: u32) -> Self {
        Self {
            rock,
            paper,
            scissors,
        }
    }
}

impl Index<Move> for MoveDamage {
    type Output = u32;

    fn index(&self, m: Move) -> &u32 {
        match m {
            Move::Rock => &self.rock,
            Move::Paper => &self.paper,
            Move::Scissors => &self.scissors,
        }
    }
}

impl IndexMut<Move> for MoveDamage {
    fn index_mut(&mut self, m: Move) -> &mut u32 {
        match m {
            Move::Rock => &mut self.rock,
            Move::Paper => &mut self.paper,
            Move::Scissors => &mut self.scissors,
        }
    }
}

/// A fighter as it exists during a battle.
///
/// Invariant: `0 <= current_hp <= max_hp`. Every mutation path clamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    name: String,
    kind: CharacterKind,
    max_hp: u32,
    current_hp: u32,
    move_damage: MoveDamage,
    original_move_damage: MoveDamage,
    bonus_damage_next_attack: u32,
    pub(crate) passives: Passives,
}

impl Character {
    /// Creates a character at full HP.
    ///
    /// Passives are copied with fresh flags so no two characters ever share
    /// runtime gating state.
    pub fn new(
        name: impl Into<String>,
        kind: CharacterKind,
        max_hp: u32,
        damage: MoveDamage,
        passives: impl IntoIterator<Item = Passive>,
    ) -> Result<Self, DefinitionError> {
        let fresh: Vec<Passive> = passives.into_iter().map(|p| p.definition()).collect();
        if fresh.len() > GameConfig::MAX_PASSIVES {
            return Err(DefinitionError::TooManyPassives {
                count: fresh.len(),
                max: GameConfig::MAX_PASSIVES,
            });
        }
        let owned: Passives = fresh.into_iter().collect();

        Ok(Self {
            name: name.into(),
            kind,
            max_hp,
            current_hp: max_hp,
            move_damage: damage,
            original_move_damage: damage,
            bonus_damage_next_attack: 0,
            passives: owned,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Current, possibly buffed, damage of `m`.
    pub fn move_damage(&self, m: Move) -> u32 {
        self.move_damage[m]
    }

    /// Damage of `m` as defined, before any in-battle buffs.
    pub fn original_move_damage(&self, m: Move) -> u32 {
        self.original_move_damage[m]
    }

    pub const fn damage_table(&self) -> MoveDamage {
        self.move_damage
    }

    pub const fn original_damage_table(&self) -> MoveDamage {
        self.original_move_damage
    }

    pub const fn bonus_damage_next_attack(&self) -> u32 {
        self.bonus_damage_next_attack
    }

    pub fn passives(&self) -> &[Passive] {
        &self.passives
    }

    pub const fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Current HP as a fraction of max HP (0.0 when max HP is 0).
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            f64::from(self.current_hp) / f64::from(self.max_hp)
        }
    }

    /// `floor(100 * current_hp / max_hp)`.
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            0
        } else {
            ((u64::from(self.current_hp) * 100) / u64::from(self.max_hp)) as u32
        }
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn add_bonus_damage_next_attack(&mut self, amount: u32) {
        self.bonus_damage_next_attack = self.bonus_damage_next_attack.saturating_add(amount);
    }

    /// Battle-local buff; undone by [`Character::reset_stats_for_new_battle`].
    pub fn increase_move_damage(&mut self, m: Move, amount: u32) {
        self.move_damage[m] = self.move_damage[m].saturating_add(amount);
    }

    /// Takes the pending bonus, leaving zero behind.
    pub(crate) fn take_bonus_damage(&mut self) -> u32 {
        core::mem::take(&mut self.bonus_damage_next_attack)
    }

    /// Restores HP, damage and bonus, and re-arms once-per-battle passives.
    pub fn reset_stats_for_new_battle(&mut self) {
        self.current_hp = self.max_hp;
        self.bonus_damage_next_attack = 0;
        self.move_damage = self.original_move_damage;
        for passive in &mut self.passives {
            passive.triggered_this_battle = false;
        }
    }

    /// Re-arms every passive for a new turn.
    pub fn reset_turn_state(&mut self) {
        for passive in &mut self.passives {
            passive.triggered_this_turn = false;
        }
    }

    /// `NAME (HP HP, R:r P:p S:s)` using the defined damage values.
    pub fn short_description(&self) -> String {
        let base = self.original_move_damage;
        format!(
            "{} ({} HP, R:{} P:{} S:{})",
            self.name, self.max_hp, base.rock, base.paper, base.scissors
        )
    }

    /// Short description followed by one line per passive.
    pub fn full_description(&self) -> String {
        let mut out = self.short_description();
        if !self.passives.is_empty() {
            out.push_str("\n  Passives:");
            for passive in &self.passives {
                out.push_str("\n    - ");
                out.push_str(&passive.to_string());
            }
        }
        out
    }

    /// `Rock (n dmg)`, including any pending bonus.
    pub fn move_description(&self, m: Move) -> String {
        format!(
            "{m} ({} dmg)",
            self.move_damage[m].saturating_add(self.bonus_damage_next_attack)
        )
    }
}
