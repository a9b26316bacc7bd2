use rift_data::{
    Boost,
    EchoData,
    Element,
    MoveData,
    StatTable,
    StatusKind,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    BoostTable,
    CombatantData,
    StatusEffect,
    stage_multiplier,
};

/// Who decides the actions of a combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Controller {
    /// Actions are requested from the player with the given ID.
    Player { id: String },
    /// Actions are chosen by the battle's move selector.
    #[default]
    Ai,
}

impl Controller {
    /// The ID of the controlling player, if any.
    pub fn player_id(&self) -> Option<&str> {
        match self {
            Self::Player { id } => Some(id),
            Self::Ai => None,
        }
    }
}

/// An Echo participating in a battle, along with all of its battle-local state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Registration position, which identifies the combatant for the whole battle.
    pub position: usize,
    pub echo: EchoData,
    pub team: usize,
    pub controller: Controller,
    /// Stats after bond multipliers.
    pub stats: StatTable,
    pub hp: u32,
    pub max_hp: u32,
    pub statuses: Vec<StatusEffect>,
    pub boosts: BoostTable,
    /// Position in the current round's turn order.
    pub turn_order: Option<usize>,
    pub defeated: bool,
    /// Reserves are inactive until they enter the battle.
    pub active: bool,
    pub defending: bool,
    /// Speed factor for the current round, set by status ticks.
    pub speed_factor: f64,
    /// Rounds until the ability can be activated again.
    pub ability_cooldown: u8,
}

impl Combatant {
    /// Creates a new combatant at the given registration position.
    pub fn new(position: usize, data: CombatantData) -> Self {
        let stats = data.bond.apply(&data.echo.current_stats);
        let max_hp = stats.hp;
        Self {
            position,
            echo: data.echo,
            team: data.team,
            controller: data.controller,
            stats,
            hp: max_hp,
            max_hp,
            statuses: Vec::new(),
            boosts: BoostTable::default(),
            turn_order: None,
            defeated: false,
            active: !data.reserve,
            defending: false,
            speed_factor: 1.0,
            ability_cooldown: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.echo.name
    }

    pub fn level(&self) -> u8 {
        self.echo.level
    }

    pub fn element(&self) -> Element {
        self.echo.element
    }

    pub fn moves(&self) -> &[MoveData] {
        &self.echo.moves
    }

    /// Checks if the combatant can act or be targeted.
    pub fn is_available(&self) -> bool {
        self.active && !self.defeated
    }

    /// Checks if the combatant could enter the battle as a reserve.
    pub fn is_healthy_reserve(&self) -> bool {
        !self.active && !self.defeated
    }

    /// Effective speed for turn ordering, without jitter.
    pub fn effective_speed(&self) -> f64 {
        self.stats.spe as f64 * stage_multiplier(self.boosts.spe) * self.speed_factor
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.iter().any(|status| status.kind == kind)
    }

    /// The first active status that prevents the combatant from acting.
    pub fn immobilizing_status(&self) -> Option<StatusKind> {
        self.statuses
            .iter()
            .map(|status| status.kind)
            .find(|kind| kind.prevents_action())
    }

    /// Applies damage, flooring HP at zero.
    ///
    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let dealt = damage.min(self.hp);
        self.hp -= dealt;
        if self.hp == 0 {
            self.defeated = true;
        }
        dealt
    }

    /// Restores HP, capped at max HP.
    ///
    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.defeated {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Leaves the battle as a reserve, losing all stage changes.
    pub fn withdraw(&mut self) {
        self.active = false;
        self.defending = false;
        self.turn_order = None;
        self.boosts.clear();
    }

    /// Enters the battle from reserve.
    pub fn enter(&mut self) {
        self.active = true;
        self.defending = false;
        self.boosts.clear();
    }

    /// Read-only view used by the damage calculator.
    pub fn profile(&self) -> CombatProfile {
        CombatProfile {
            level: self.level(),
            element: self.element(),
            stats: self.stats.clone(),
            boosts: self.boosts.clone(),
        }
    }

    /// Current stage of the given boost.
    pub fn boost(&self, boost: Boost) -> i8 {
        self.boosts.get(boost)
    }
}

/// The attributes of a combatant that take part in damage calculation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CombatProfile {
    pub level: u8,
    pub element: Element,
    pub stats: StatTable,
    pub boosts: BoostTable,
}
