use std::cmp::Ordering;

use itertools::Itertools;
use rift_choice::Choice;
use rift_data::{
    AbilityEffect,
    BoostChange,
    ItemEffect,
    MoveData,
    TypeEffectiveness,
};
use rift_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use unicase::UniCase;
use uuid::Uuid;

use crate::{
    ai::MoveSelector,
    battle::{
        ActionKind,
        ActionRequest,
        BattleAction,
        BattleEngineOptions,
        BattleOptions,
        BattleOutcome,
        BattleResult,
        BattleSummary,
        Combatant,
        ItemStack,
        MoveOption,
        OutcomeEvent,
        Reward,
        TeamBag,
        TickOutcome,
        calculate_damage,
        calculate_rewards,
        compute_turn_order,
        modify_stat,
        status,
    },
    common::Clock,
    error::BattleError,
    log::{
        BattleLog,
        BattleLogEntry,
        LogKind,
    },
};

/// The state of a [`Battle`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum BattleState {
    /// Combatants are built, but the battle has not started.
    #[string = "initializing"]
    Initializing,
    /// Turn order is computed and status effects tick.
    #[string = "turn_start"]
    TurnStart,
    /// The next combatant in turn order chooses its action.
    #[string = "action_select"]
    ActionSelect,
    /// The chosen action is carried out.
    #[string = "action_executing"]
    ActionExecuting,
    /// Defeated combatants are replaced and cooldowns advance.
    #[string = "turn_end"]
    TurnEnd,
    #[string = "finished"]
    Finished,
}

fn opponents_of(combatants: &[Combatant], position: usize) -> impl Iterator<Item = &Combatant> {
    let team = combatants.get(position).map(|combatant| combatant.team);
    combatants
        .iter()
        .filter(move |combatant| Some(combatant.team) != team && combatant.is_available())
}

fn reserves_of(combatants: &[Combatant], team: usize) -> impl Iterator<Item = &Combatant> {
    combatants
        .iter()
        .filter(move |combatant| combatant.team == team && combatant.is_healthy_reserve())
}

fn same_item(stack: &ItemStack, name: &str) -> bool {
    stack.quantity > 0 && UniCase::new(stack.item.name.as_str()) == UniCase::new(name)
}

/// A single battle between two or more teams of combatants.
///
/// Combatants act one at a time in turn order. When a player-controlled combatant is next, the
/// battle pauses with an [`ActionRequest`] until [`Battle::set_choice`] or
/// [`Battle::submit_choice`] is called for the requested player. AI-controlled combatants act
/// immediately through the battle's [`MoveSelector`].
///
/// All randomness comes from the battle's PRNG, so the same seed and the same choices always
/// replay the same battle.
pub struct Battle {
    id: Uuid,
    state: BattleState,
    round: u64,
    combatants: Vec<Combatant>,
    bags: Vec<TeamBag>,
    escape_allowed: bool,
    log: BattleLog,
    actions: Vec<BattleAction>,
    turn_order: Vec<usize>,
    next_actor: usize,
    request: Option<ActionRequest>,
    pending: Option<BattleAction>,
    outcome: Option<BattleOutcome>,
    rewards_claimed: bool,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    clock: Box<dyn Clock>,
    selector: Box<dyn MoveSelector>,
    engine_options: BattleEngineOptions,
}

// Block for constructors and public accessors.
impl Battle {
    /// Creates a new battle.
    ///
    /// Combatants are registered in the order they appear in the options.
    pub fn new(
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Result<Self, BattleError> {
        options.validate()?;
        let prng = (engine_options.rng_factory)(options.seed);
        let clock = (engine_options.clock_factory)();
        let selector = (engine_options.selector_factory)();
        let combatants = options
            .combatants
            .into_iter()
            .enumerate()
            .map(|(position, data)| Combatant::new(position, data))
            .collect();
        Ok(Self {
            id: Uuid::new_v4(),
            state: BattleState::Initializing,
            round: 0,
            combatants,
            bags: options.bags,
            escape_allowed: options.escape_allowed,
            log: BattleLog::new(),
            actions: Vec::new(),
            turn_order: Vec::new(),
            next_actor: 0,
            request: None,
            pending: None,
            outcome: None,
            rewards_claimed: false,
            prng,
            clock,
            selector,
            engine_options,
        })
    }

    /// Unique identifier of the battle.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The current round, starting at 1 once the battle starts.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Has the battle started?
    pub fn started(&self) -> bool {
        self.state != BattleState::Initializing
    }

    /// Has the battle finished?
    pub fn finished(&self) -> bool {
        self.state == BattleState::Finished
    }

    /// How the battle ended, once it has finished.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// The initial seed of the battle's PRNG, which can be used to replay the battle.
    pub fn seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// The battle's PRNG.
    ///
    /// Primarily useful for tests that control battle RNG.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Live view of every combatant, in registration order.
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    /// Looks up a combatant by registration position.
    pub fn combatant(&self, position: usize) -> Result<&Combatant, BattleError> {
        self.combatants
            .get(position)
            .ok_or(BattleError::InvalidTarget(position))
    }

    /// Final state of every combatant.
    ///
    /// Only available once the battle has finished.
    pub fn snapshots(&self) -> Result<Vec<Combatant>, BattleError> {
        self.require_finished()?;
        Ok(self.combatants.clone())
    }

    /// The items left in a team's bag.
    pub fn bag(&self, team: usize) -> Option<&TeamBag> {
        self.bags.iter().find(|bag| bag.team == team)
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Does the battle have log entries since the last call to [`Self::new_log_entries`]?
    pub fn has_new_log_entries(&self) -> bool {
        self.log.has_new_entries()
    }

    /// Returns log entries since the last call to this method.
    pub fn new_log_entries(&mut self) -> impl Iterator<Item = &BattleLogEntry> {
        self.log.read_out()
    }

    /// Every action performed so far, in order.
    pub fn actions(&self) -> &[BattleAction] {
        &self.actions
    }

    /// The action currently requested from a player, if any.
    pub fn active_request(&self) -> Option<&ActionRequest> {
        self.request.as_ref()
    }

    /// The action currently requested from the given player, if any.
    pub fn request_for_player(&self, player_id: &str) -> Option<&ActionRequest> {
        self.request
            .as_ref()
            .filter(|request| request.player_id == player_id)
    }
}

// Block for driving the battle.
impl Battle {
    /// Starts the battle.
    ///
    /// Runs until a player must act or the battle finishes.
    pub fn start(&mut self) -> Result<(), BattleError> {
        match self.state {
            BattleState::Initializing => (),
            BattleState::Finished => return Err(BattleError::BattleAlreadyFinished),
            _ => return Err(BattleError::BattleAlreadyStarted),
        }
        ::log::debug!(
            "starting battle {} with {} combatants",
            self.id,
            self.combatants.len()
        );
        self.state = BattleState::TurnStart;
        self.run()
    }

    /// Sets the choice for the player's requested action.
    ///
    /// An invalid choice is rejected without changing the battle, and the request remains active.
    /// Otherwise the battle runs until a player must act or the battle finishes.
    pub fn set_choice(&mut self, player_id: &str, choice: Choice) -> Result<(), BattleError> {
        let position = self.awaiting(player_id)?;
        let kind = self
            .resolve_action(position, choice.into())
            .inspect_err(|error| ::log::warn!("rejected choice from {player_id}: {error}"))?;
        self.request = None;
        self.pending = Some(self.action(position, kind));
        self.state = BattleState::ActionExecuting;
        self.run()
    }

    /// Parses and sets the choice for the player's requested action.
    ///
    /// See [`Self::set_choice`].
    pub fn submit_choice(&mut self, player_id: &str, input: &str) -> Result<(), BattleError> {
        self.awaiting(player_id)?;
        let choice = input.parse::<Choice>().map_err(BattleError::InvalidChoice)?;
        self.set_choice(player_id, choice)
    }

    fn awaiting(&self, player_id: &str) -> Result<usize, BattleError> {
        match self.state {
            BattleState::Initializing => return Err(BattleError::BattleNotStarted),
            BattleState::Finished => return Err(BattleError::BattleAlreadyFinished),
            _ => (),
        }
        match &self.request {
            Some(request) if request.player_id == player_id => Ok(request.actor),
            _ => Err(BattleError::NotAwaitingAction(player_id.to_owned())),
        }
    }

    fn run(&mut self) -> Result<(), BattleError> {
        loop {
            match self.state {
                BattleState::Initializing => return Err(BattleError::BattleNotStarted),
                BattleState::TurnStart => self.start_turn(),
                BattleState::ActionSelect => {
                    if !self.select_action()? {
                        return Ok(());
                    }
                }
                BattleState::ActionExecuting => self.execute_pending(),
                BattleState::TurnEnd => self.end_turn(),
                BattleState::Finished => return Ok(()),
            }
        }
    }

    fn start_turn(&mut self) {
        if self.round >= self.engine_options.max_rounds {
            ::log::debug!("battle {} reached the round limit", self.id);
            self.finish(BattleOutcome::Draw);
            return;
        }
        self.round += 1;
        for combatant in &mut self.combatants {
            status::refresh_speed_factor(combatant, &self.engine_options);
        }
        self.turn_order = compute_turn_order(
            &self.combatants,
            self.prng.as_mut(),
            &self.engine_options,
        );
        for combatant in &mut self.combatants {
            combatant.turn_order = None;
        }
        for (i, position) in self.turn_order.iter().enumerate() {
            self.combatants[*position].turn_order = Some(i);
        }
        ::log::debug!("round {} turn order: {:?}", self.round, self.turn_order);

        for i in 0..self.turn_order.len() {
            let position = self.turn_order[i];
            let outcomes = status::tick(&mut self.combatants[position], &self.engine_options);
            for outcome in outcomes {
                self.log_tick(position, outcome);
            }
        }

        if self.check_finished() {
            return;
        }
        self.next_actor = 0;
        self.state = BattleState::ActionSelect;
    }

    /// Moves to the next combatant in turn order.
    ///
    /// Returns `false` if the battle must wait for a player.
    fn select_action(&mut self) -> Result<bool, BattleError> {
        let Some(&position) = self.turn_order.get(self.next_actor) else {
            self.state = BattleState::TurnEnd;
            return Ok(true);
        };
        if !self.combatants[position].is_available() {
            self.next_actor += 1;
            return Ok(true);
        }

        self.combatants[position].defending = false;

        if let Some(kind) = self.combatants[position].immobilizing_status() {
            let message = format!(
                "{} is {} and cannot act!",
                self.combatants[position].name(),
                kind.adjective()
            );
            let entry = self
                .entry(LogKind::Immobilized, message)
                .with_actor(position)
                .with_status(Some(kind));
            self.log.push(entry);
            self.next_actor += 1;
            return Ok(true);
        }

        if opponents_of(&self.combatants, position).next().is_none() {
            ::log::debug!(
                "{} has no opponent to act against",
                self.combatants[position].name()
            );
            self.next_actor += 1;
            return Ok(true);
        }

        if let Some(player_id) = self.combatants[position]
            .controller
            .player_id()
            .map(str::to_owned)
        {
            let request = self.make_request(position, player_id);
            self.request = Some(request);
            return Ok(false);
        }

        let candidates = opponents_of(&self.combatants, position).collect::<Vec<_>>();
        let selection = self.selector.choose_move(
            &self.combatants[position],
            &candidates,
            self.prng.as_mut(),
        );
        let kind = selection.and_then(|selection| {
            self.resolve_action(
                position,
                ActionKind::Attack {
                    slot: selection.slot,
                    target: Some(selection.target),
                },
            )
        });
        match kind {
            Ok(kind) => {
                self.pending = Some(self.action(position, kind));
                self.state = BattleState::ActionExecuting;
                Ok(true)
            }
            Err(error) => {
                ::log::error!("battle {} cannot continue: {error}", self.id);
                self.finish(BattleOutcome::Draw);
                Err(error)
            }
        }
    }

    fn execute_pending(&mut self) {
        let Some(action) = self.pending.take() else {
            self.state = BattleState::ActionSelect;
            return;
        };
        ::log::debug!(
            "round {}: combatant {} performs {:?}",
            self.round,
            action.actor,
            action.kind
        );
        match &action.kind {
            ActionKind::Attack {
                slot,
                target: Some(target),
            } => self.attack(action.actor, *slot, *target),
            ActionKind::Defend => self.defend(action.actor),
            ActionKind::Ability => self.activate_ability(action.actor),
            ActionKind::Switch {
                reserve: Some(reserve),
            } => self.switch(action.actor, *reserve),
            ActionKind::Item {
                item,
                target: Some(target),
            } => self.use_item(action.actor, item, *target),
            ActionKind::Escape => self.escape(action.actor),
            kind => ::log::error!("cannot execute unresolved action {kind:?}"),
        }
        self.actions.push(action);

        if self.finished() {
            return;
        }
        if self.teams_remaining().len() <= 1 {
            self.state = BattleState::TurnEnd;
        } else {
            self.next_actor += 1;
            self.state = BattleState::ActionSelect;
        }
    }

    fn end_turn(&mut self) {
        for combatant in &mut self.combatants {
            combatant.ability_cooldown = combatant.ability_cooldown.saturating_sub(1);
        }
        self.replace_defeated();
        if self.check_finished() {
            return;
        }
        self.state = BattleState::TurnStart;
    }

    fn replace_defeated(&mut self) {
        for position in 0..self.combatants.len() {
            let combatant = &self.combatants[position];
            if !combatant.active || !combatant.defeated {
                continue;
            }
            let Some(reserve) = reserves_of(&self.combatants, combatant.team)
                .next()
                .map(|reserve| reserve.position)
            else {
                continue;
            };
            self.combatants[position].withdraw();
            self.combatants[reserve].enter();
            let message = format!("{} entered the battle!", self.combatants[reserve].name());
            let entry = self.entry(LogKind::Enter, message).with_actor(reserve);
            self.log.push(entry);
        }
    }

    fn teams_remaining(&self) -> Vec<usize> {
        self.combatants
            .iter()
            .filter(|combatant| !combatant.defeated)
            .map(|combatant| combatant.team)
            .sorted()
            .dedup()
            .collect()
    }

    /// Finishes the battle if at most one team has undefeated combatants.
    fn check_finished(&mut self) -> bool {
        match self.teams_remaining().as_slice() {
            [] => self.finish(BattleOutcome::Draw),
            [team] => self.finish(BattleOutcome::Victory { team: *team }),
            _ => return false,
        }
        true
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        let message = match outcome {
            BattleOutcome::Victory { team } => format!("Team {team} won the battle!"),
            BattleOutcome::Escaped { team } => format!("Team {team} escaped the battle!"),
            BattleOutcome::Draw => "The battle ended in a draw.".to_owned(),
        };
        self.outcome = Some(outcome);
        self.state = BattleState::Finished;
        self.request = None;
        self.pending = None;
        let entry = self.entry(LogKind::End, message);
        self.log.push(entry);
        ::log::debug!(
            "battle {} finished after {} rounds: {outcome:?}",
            self.id,
            self.round
        );
    }
}

// Block for resolving and executing actions.
impl Battle {
    fn entry(&self, kind: LogKind, message: String) -> BattleLogEntry {
        BattleLogEntry::new(self.round, self.clock.now(), kind, message)
    }

    fn action(&self, actor: usize, kind: ActionKind) -> BattleAction {
        BattleAction {
            round: self.round,
            actor,
            kind,
            timestamp: self.clock.now(),
        }
    }

    fn make_request(&self, position: usize, player_id: String) -> ActionRequest {
        let actor = &self.combatants[position];
        ActionRequest {
            player_id,
            round: self.round,
            actor: position,
            moves: actor
                .moves()
                .iter()
                .enumerate()
                .map(|(slot, mov)| MoveOption {
                    slot,
                    name: mov.name.clone(),
                    category: mov.category,
                    element: mov.element,
                    power: mov.power,
                    accuracy: mov.accuracy,
                })
                .collect(),
            targets: opponents_of(&self.combatants, position)
                .map(|combatant| combatant.position)
                .collect(),
            reserves: reserves_of(&self.combatants, actor.team)
                .map(|combatant| combatant.position)
                .collect(),
            items: self
                .bag(actor.team)
                .into_iter()
                .flat_map(|bag| bag.items.iter())
                .filter(|stack| stack.quantity > 0)
                .map(|stack| stack.item.name.clone())
                .collect(),
            ability_ready: actor.echo.ability.is_some() && actor.ability_cooldown == 0,
            can_escape: self.escape_allowed,
        }
    }

    fn find_item(&self, team: usize, name: &str) -> Option<&ItemStack> {
        self.bag(team)?
            .items
            .iter()
            .find(|stack| same_item(stack, name))
    }

    fn find_item_mut(&mut self, team: usize, name: &str) -> Option<&mut ItemStack> {
        self.bags
            .iter_mut()
            .find(|bag| bag.team == team)?
            .items
            .iter_mut()
            .find(|stack| same_item(stack, name))
    }

    /// Checks that the action is legal for the combatant and fills in default targets.
    fn resolve_action(&self, position: usize, kind: ActionKind) -> Result<ActionKind, BattleError> {
        let actor = self.combatant(position)?;
        match kind {
            ActionKind::Attack { slot, target } => {
                if slot >= actor.moves().len() {
                    return Err(BattleError::InvalidMoveSlot(slot));
                }
                let mut opponents = opponents_of(&self.combatants, position);
                let target = match target {
                    Some(target) => {
                        if !opponents.any(|opponent| opponent.position == target) {
                            return Err(BattleError::InvalidTarget(target));
                        }
                        target
                    }
                    None => opponents
                        .next()
                        .map(|opponent| opponent.position)
                        .ok_or_else(|| BattleError::NoLegalMove(actor.name().to_owned()))?,
                };
                Ok(ActionKind::Attack {
                    slot,
                    target: Some(target),
                })
            }
            ActionKind::Defend => Ok(ActionKind::Defend),
            ActionKind::Ability => {
                if actor.echo.ability.is_none() {
                    return Err(BattleError::NoAbility(actor.name().to_owned()));
                }
                if actor.ability_cooldown > 0 {
                    return Err(BattleError::AbilityOnCooldown(actor.ability_cooldown));
                }
                Ok(ActionKind::Ability)
            }
            ActionKind::Switch { reserve } => {
                let mut reserves = reserves_of(&self.combatants, actor.team);
                let reserve = match reserve {
                    Some(reserve) => {
                        if !reserves.any(|candidate| candidate.position == reserve) {
                            return Err(BattleError::InvalidTarget(reserve));
                        }
                        reserve
                    }
                    None => reserves
                        .next()
                        .map(|candidate| candidate.position)
                        .ok_or(BattleError::NoReserve)?,
                };
                Ok(ActionKind::Switch {
                    reserve: Some(reserve),
                })
            }
            ActionKind::Item { item, target } => {
                let stack = self
                    .find_item(actor.team, &item)
                    .ok_or_else(|| BattleError::ItemUnavailable(item.clone()))?;
                let target = target.unwrap_or(position);
                match self.combatants.get(target) {
                    Some(combatant) if combatant.team == actor.team && !combatant.defeated => (),
                    _ => return Err(BattleError::InvalidTarget(target)),
                }
                Ok(ActionKind::Item {
                    item: stack.item.name.clone(),
                    target: Some(target),
                })
            }
            ActionKind::Escape => {
                if !self.escape_allowed {
                    return Err(BattleError::EscapeNotAllowed);
                }
                Ok(ActionKind::Escape)
            }
        }
    }

    fn log_tick(&mut self, position: usize, outcome: TickOutcome) {
        let combatant = &self.combatants[position];
        let name = combatant.name();
        let adjective = outcome.kind.adjective();
        let mut message = if outcome.damage > 0 {
            format!("{name} is hurt by its {}!", outcome.kind)
        } else {
            format!("{name} is {adjective}.")
        };
        if combatant.defeated {
            message.push_str(&format!(" {name} has been defeated!"));
        } else if outcome.expired {
            message.push_str(&format!(" {name} is no longer {adjective}."));
        }
        let entry = self
            .entry(LogKind::Residual, message)
            .with_actor(position)
            .with_damage(outcome.damage)
            .with_status(Some(outcome.kind));
        self.log.push(entry);
    }

    fn roll_status(&mut self, mov: &MoveData) -> bool {
        match mov.status_chance() {
            0 => false,
            chance if chance >= 100 => true,
            chance => rand_util::chance(self.prng.as_mut(), chance as u64, 100),
        }
    }

    /// Applies a stage change and describes it.
    fn apply_boost(&mut self, position: usize, change: BoostChange) -> String {
        let applied = modify_stat(&mut self.combatants[position], change.boost, change.stages);
        let name = self.combatants[position].name();
        let boost = change.boost;
        match (applied.cmp(&0), change.stages > 0) {
            (Ordering::Greater, _) => format!(" {name}'s {boost} rose!"),
            (Ordering::Less, _) => format!(" {name}'s {boost} fell!"),
            (Ordering::Equal, true) => format!(" {name}'s {boost} won't go any higher!"),
            (Ordering::Equal, false) => format!(" {name}'s {boost} won't go any lower!"),
        }
    }

    fn attack(&mut self, position: usize, slot: usize, target: usize) {
        let Some(mov) = self.combatants[position].moves().get(slot).cloned() else {
            return;
        };
        let result = calculate_damage(
            &self.combatants[position].profile(),
            &self.combatants[target].profile(),
            &mov,
            self.prng.as_mut(),
            &self.engine_options,
        );
        let defender_name = self.combatants[target].name().to_owned();
        let mut message = format!("{} used {}!", self.combatants[position].name(), mov.name);
        let mut dealt = 0;
        let mut inflicted = None;

        if !result.hit {
            message.push_str(" But it missed!");
        } else {
            if mov.is_damaging() {
                if result.critical {
                    message.push_str(" Critical hit!");
                }
                let defender = &mut self.combatants[target];
                let damage = if defender.defending {
                    ((result.final_damage as f64 * self.engine_options.defend_multiplier).round()
                        as u32)
                        .max(1)
                } else {
                    result.final_damage
                };
                dealt = defender.take_damage(damage);
                match result.effectiveness {
                    TypeEffectiveness::Strong => message.push_str(" It's super effective!"),
                    TypeEffectiveness::Weak => message.push_str(" It's not very effective..."),
                    TypeEffectiveness::Normal => (),
                }
                if defender.defeated {
                    message.push_str(&format!(" {defender_name} has been defeated!"));
                }
            }

            if let Some(kind) = mov.status {
                if !self.combatants[target].defeated && self.roll_status(&mov) {
                    let duration = mov.status_duration.unwrap_or(kind.default_duration());
                    if status::apply(&mut self.combatants[target], kind, duration) {
                        message.push_str(&format!(" {defender_name} is now {}!", kind.adjective()));
                        inflicted = Some(kind);
                    }
                }
            }

            if let Some(change) = mov.self_boost {
                let boost_message = self.apply_boost(position, change);
                message.push_str(&boost_message);
            }
        }

        let entry = self
            .entry(LogKind::Attack, message)
            .with_actor(position)
            .with_target(target)
            .with_damage(dealt)
            .with_status(inflicted);
        self.log.push(entry);
    }

    fn defend(&mut self, position: usize) {
        self.combatants[position].defending = true;
        let message = format!("{} is defending!", self.combatants[position].name());
        let entry = self.entry(LogKind::Defend, message).with_actor(position);
        self.log.push(entry);
    }

    fn activate_ability(&mut self, position: usize) {
        let Some(ability) = self.combatants[position].echo.ability.clone() else {
            return;
        };
        let name = self.combatants[position].name().to_owned();
        let mut message = format!("{name} activated {}!", ability.name);
        let mut healed = 0;
        match ability.effect {
            AbilityEffect::Boost(change) => {
                let boost_message = self.apply_boost(position, change);
                message.push_str(&boost_message);
            }
            AbilityEffect::Heal { percent } => {
                let combatant = &mut self.combatants[position];
                let amount = (combatant.max_hp as u64 * percent as u64 / 100) as u32;
                healed = combatant.heal(amount);
                message.push_str(&format!(" {name} restored {healed} HP!"));
            }
        }
        self.combatants[position].ability_cooldown = ability.cooldown;
        let entry = self
            .entry(LogKind::Ability, message)
            .with_actor(position)
            .with_healing(healed);
        self.log.push(entry);
    }

    fn switch(&mut self, position: usize, reserve: usize) {
        self.combatants[position].withdraw();
        self.combatants[reserve].enter();
        let message = format!(
            "{} switched out for {}!",
            self.combatants[position].name(),
            self.combatants[reserve].name()
        );
        let entry = self
            .entry(LogKind::Switch, message)
            .with_actor(position)
            .with_target(reserve);
        self.log.push(entry);
    }

    fn use_item(&mut self, position: usize, item: &str, target: usize) {
        let team = self.combatants[position].team;
        let Some(stack) = self.find_item_mut(team, item) else {
            return;
        };
        stack.quantity -= 1;
        let item = stack.item.clone();

        let user = self.combatants[position].name().to_owned();
        let target_name = self.combatants[target].name().to_owned();
        let mut message = if target == position {
            format!("{user} used {}!", item.name)
        } else {
            format!("{user} used {} on {target_name}!", item.name)
        };
        let mut healed = 0;
        match item.effect {
            ItemEffect::Heal { amount } => {
                healed = self.combatants[target].heal(amount);
                message.push_str(&format!(" {target_name} restored {healed} HP!"));
            }
            ItemEffect::Cure { status: Some(kind) } => {
                if status::cure(&mut self.combatants[target], kind) {
                    message.push_str(&format!(
                        " {target_name} is no longer {}.",
                        kind.adjective()
                    ));
                } else {
                    message.push_str(" It had no effect.");
                }
            }
            ItemEffect::Cure { status: None } => {
                if status::cure_all(&mut self.combatants[target]).is_empty() {
                    message.push_str(" It had no effect.");
                } else {
                    message.push_str(&format!(" {target_name} was cured!"));
                }
            }
            ItemEffect::Boost(change) => {
                let boost_message = self.apply_boost(target, change);
                message.push_str(&boost_message);
            }
        }
        let entry = self
            .entry(LogKind::Item, message)
            .with_actor(position)
            .with_target(target)
            .with_healing(healed);
        self.log.push(entry);
    }

    fn escape(&mut self, position: usize) {
        let combatant = &self.combatants[position];
        let team = combatant.team;
        let chance = self.engine_options.escape_chance(combatant.stats.spe);
        let escaped = rand_util::unit(self.prng.as_mut()) < chance;
        let name = self.combatants[position].name();
        let message = if escaped {
            format!("{name} escaped!")
        } else {
            format!("{name} tried to escape but couldn't get away!")
        };
        let entry = self.entry(LogKind::Escape, message).with_actor(position);
        self.log.push(entry);
        if escaped {
            self.finish(BattleOutcome::Escaped { team });
        }
    }
}

// Block for results of a finished battle.
impl Battle {
    fn require_finished(&self) -> Result<BattleOutcome, BattleError> {
        match self.outcome {
            Some(outcome) if self.finished() => Ok(outcome),
            _ => Err(BattleError::BattleNotFinished),
        }
    }

    /// Statistics about the finished battle.
    pub fn summary(&self) -> Result<BattleSummary, BattleError> {
        let outcome = self.require_finished()?;
        let (winners, losers) = match outcome.winner() {
            Some(team) => self
                .combatants
                .iter()
                .partition::<Vec<_>, _>(|combatant| combatant.team == team),
            None => (Vec::new(), Vec::new()),
        };
        let names = |combatants: Vec<&Combatant>| -> Vec<String> {
            combatants
                .into_iter()
                .map(|combatant| combatant.name().to_owned())
                .collect()
        };
        Ok(BattleSummary {
            id: self.id,
            outcome,
            rounds: self.round,
            winners: names(winners),
            losers: names(losers),
            action_count: self.actions.len(),
            total_damage: self.log.total_damage(),
            duration: self.log.duration(),
        })
    }

    /// How the finished battle went for each Echo, in registration order.
    pub fn outcome_events(&self) -> Result<Vec<OutcomeEvent>, BattleError> {
        let outcome = self.require_finished()?;
        Ok(self
            .combatants
            .iter()
            .map(|combatant| {
                let result = match outcome {
                    BattleOutcome::Victory { team } if team == combatant.team => {
                        BattleResult::Victory
                    }
                    BattleOutcome::Victory { .. } => BattleResult::Defeat,
                    BattleOutcome::Escaped { team } if team == combatant.team => {
                        BattleResult::Escaped
                    }
                    BattleOutcome::Escaped { .. } | BattleOutcome::Draw => BattleResult::Draw,
                };
                let opponent_level = self
                    .combatants
                    .iter()
                    .filter(|other| other.team != combatant.team)
                    .map(|other| other.level())
                    .max()
                    .unwrap_or_default();
                OutcomeEvent {
                    echo: combatant.echo.id.clone(),
                    result,
                    opponent_level,
                    fainted: combatant.defeated,
                }
            })
            .collect())
    }

    /// Claims the rewards of every Echo on the winning team, keyed by registration position.
    ///
    /// Each winner earns rewards for every combatant on the other teams. Battles without a winner
    /// award nothing. Rewards can only be claimed once.
    pub fn claim_rewards(&mut self) -> Result<Vec<(usize, Reward)>, BattleError> {
        let outcome = self.require_finished()?;
        if self.rewards_claimed {
            return Err(BattleError::RewardsAlreadyClaimed);
        }
        self.rewards_claimed = true;
        let Some(team) = outcome.winner() else {
            return Ok(Vec::new());
        };
        let losers = self
            .combatants
            .iter()
            .filter(|combatant| combatant.team != team)
            .map(|combatant| &combatant.echo)
            .collect::<Vec<_>>();
        Ok(self
            .combatants
            .iter()
            .filter(|combatant| combatant.team == team)
            .map(|combatant| {
                (
                    combatant.position,
                    calculate_rewards(&combatant.echo, losers.iter().copied()),
                )
            })
            .collect())
    }
}
