//! Tunable constants for move scoring and selection.

use duel_core::Difficulty;

/// Every weight, threshold and bonus the AI uses.
///
/// Fields are public so callers can tune a profile after starting from
/// [`AiProfile::easy`] or [`AiProfile::hard`].
///
/// Hard scoring reads the scenario, passive and situational groups and
/// samples with `temperature`. Easy scoring reads only the easy group.
/// Each constructor fills every field with values of its own difficulty, so
/// flipping `difficulty` on a tuned profile still gives sane weights.
#[derive(Clone, Debug, PartialEq)]
pub struct AiProfile {
    /// Which scoring and selection pipeline this profile drives.
    pub difficulty: Difficulty,

    // ===== scenario weights =====
    pub damage_dealt_per_hp: f64,
    /// Added when a winning hit would fell the opponent.
    pub lethal_bonus: f64,
    pub damage_taken_per_hp: f64,
    /// Subtracted when a losing exchange would fell the bot.
    pub death_penalty: f64,
    pub tie_outcome_base: f64,
    /// Lean toward raw damage, applied once per candidate.
    pub move_base_damage_bias: f64,

    // ===== passive payoff =====
    pub passive_heal_mult: f64,
    pub passive_damage_mult: f64,
    pub passive_buff_mult: f64,
    pub passive_perm_buff_mult: f64,
    /// Added when a passive's damage would fell its target.
    pub passive_lethal_bonus: f64,
    /// Added when a heal lands while the owner is within heal range of death.
    pub death_avoidance_bonus: f64,

    // ===== situational modifiers (hard) =====
    pub desperation_threshold: f64,
    pub desperation_bonus: f64,
    pub vulnerable_threshold: f64,
    pub aggression_bonus: f64,
    pub lead_margin: f64,
    /// Multiplies the accumulated score when comfortably ahead; below 1.
    pub conservation_factor: f64,
    pub repeat_penalty: f64,
    pub counter_bonus: f64,

    // ===== selection =====
    /// Softmax temperature; at or below `1e-6` selection is greedy.
    pub temperature: f64,

    // ===== easy pipeline =====
    pub random_move_chance: f64,
    pub second_best_chance: f64,
    /// Best and second-best must be closer than this for a second-best pick.
    pub second_best_closeness: f64,
    pub easy_damage_weight: f64,
    pub easy_very_low_hp_ratio: f64,
    pub easy_lethal_bonus: f64,
    pub easy_low_hp_damage_mult: f64,
    pub easy_passive_bonus: f64,
    pub easy_repeat_penalty: f64,
}

impl AiProfile {
    /// Temperatures at or below this select greedily.
    pub const GREEDY_TEMPERATURE: f64 = 1e-6;

    pub fn hard() -> Self {
        Self {
            difficulty: Difficulty::Hard,

            damage_dealt_per_hp: 1.0,
            lethal_bonus: 100.0,
            damage_taken_per_hp: 1.2,
            death_penalty: 120.0,
            tie_outcome_base: 0.0,
            move_base_damage_bias: 0.1,

            passive_heal_mult: 1.0,
            passive_damage_mult: 1.1,
            passive_buff_mult: 0.8,
            passive_perm_buff_mult: 1.5,
            passive_lethal_bonus: 20.0,
            death_avoidance_bonus: 30.0,

            desperation_threshold: 0.25,
            desperation_bonus: 15.0,
            vulnerable_threshold: 0.30,
            aggression_bonus: 25.0,
            lead_margin: 0.40,
            conservation_factor: 0.85,
            repeat_penalty: 4.0,
            counter_bonus: 2.0,

            temperature: 1.0,

            random_move_chance: 0.33,
            second_best_chance: 0.25,
            second_best_closeness: 10.0,
            easy_damage_weight: 0.7,
            easy_very_low_hp_ratio: 0.20,
            easy_lethal_bonus: 50.0,
            easy_low_hp_damage_mult: 1.0,
            easy_passive_bonus: 3.0,
            easy_repeat_penalty: 2.0,
        }
    }

    pub fn easy() -> Self {
        Self {
            difficulty: Difficulty::Easy,

            damage_dealt_per_hp: 1.0,
            lethal_bonus: 50.0,
            damage_taken_per_hp: 0.8,
            death_penalty: 60.0,
            tie_outcome_base: 0.0,
            move_base_damage_bias: 0.0,

            passive_heal_mult: 0.5,
            passive_damage_mult: 0.5,
            passive_buff_mult: 0.5,
            passive_perm_buff_mult: 0.5,
            passive_lethal_bonus: 10.0,
            death_avoidance_bonus: 0.0,

            desperation_threshold: 0.25,
            desperation_bonus: 0.0,
            vulnerable_threshold: 0.30,
            aggression_bonus: 0.0,
            lead_margin: 0.40,
            conservation_factor: 1.0,
            repeat_penalty: 2.0,
            counter_bonus: 0.0,

            temperature: 1.0,

            random_move_chance: 0.33,
            second_best_chance: 0.25,
            second_best_closeness: 10.0,
            easy_damage_weight: 0.7,
            easy_very_low_hp_ratio: 0.20,
            easy_lethal_bonus: 50.0,
            easy_low_hp_damage_mult: 1.0,
            easy_passive_bonus: 3.0,
            easy_repeat_penalty: 2.0,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::easy(),
            Difficulty::Hard => Self::hard(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}
