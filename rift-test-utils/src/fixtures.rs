use rift_data::{
    AbilityData,
    EchoData,
    Element,
    MoveCategory,
    MoveData,
    StatTable,
    StatusKind,
};

/// A damaging physical move with perfect accuracy.
pub fn physical_move(name: &str, element: Element, power: u32) -> MoveData {
    MoveData {
        name: name.to_owned(),
        category: MoveCategory::Physical,
        element,
        power,
        ..Default::default()
    }
}

/// A damaging special move with perfect accuracy.
pub fn special_move(name: &str, element: Element, power: u32) -> MoveData {
    MoveData {
        category: MoveCategory::Special,
        ..physical_move(name, element, power)
    }
}

/// A status move that always inflicts the status for its default duration.
pub fn status_move(name: &str, status: StatusKind) -> MoveData {
    MoveData {
        name: name.to_owned(),
        category: MoveCategory::Status,
        status: Some(status),
        ..Default::default()
    }
}

/// Builder for Echoes used in tests.
///
/// Every stat starts at 50, the level at 20, and the element at neutral.
#[derive(Debug, Clone)]
pub struct EchoBuilder {
    echo: EchoData,
}

impl EchoBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            echo: EchoData {
                id: name.to_lowercase(),
                name: name.to_owned(),
                level: 20,
                element: Element::Neutral,
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 50,
                    spa: 50,
                    spd: 50,
                    spe: 50,
                },
                current_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 50,
                    spa: 50,
                    spd: 50,
                    spe: 50,
                },
                moves: Vec::new(),
                ability: None,
            },
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.echo.level = level;
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.echo.element = element;
        self
    }

    pub fn hp(mut self, hp: u32) -> Self {
        self.echo.current_stats.hp = hp;
        self
    }

    pub fn atk(mut self, atk: u32) -> Self {
        self.echo.current_stats.atk = atk;
        self
    }

    pub fn def(mut self, def: u32) -> Self {
        self.echo.current_stats.def = def;
        self
    }

    pub fn spe(mut self, spe: u32) -> Self {
        self.echo.current_stats.spe = spe;
        self
    }

    pub fn stats(mut self, stats: StatTable) -> Self {
        self.echo.current_stats = stats;
        self
    }

    pub fn with_move(mut self, mov: MoveData) -> Self {
        self.echo.moves.push(mov);
        self
    }

    pub fn with_ability(mut self, ability: AbilityData) -> Self {
        self.echo.ability = Some(ability);
        self
    }

    pub fn build(self) -> EchoData {
        self.echo
    }
}
