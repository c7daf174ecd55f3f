use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::board::coord::Coord;
use crate::board::topology::Topology;
use crate::board::variants;
use crate::coord;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    /// Placing and moving are both allowed while unplaced pieces remain.
    Lasker,
    Placing,
    Moving,
    Flying,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Lasker => "lasker",
            Phase::Placing => "placing",
            Phase::Moving => "moving",
            Phase::Flying => "flying",
        };
        write!(f, "{}", name)
    }
}

/// Everything that distinguishes one morris game from another.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameConfig {
    pub name: &'static str,
    pub num_morris_per_player: u8,
    /// A color with this many pieces or fewer on the board may fly.
    pub flying_threshold: Option<u8>,
    /// `1`: the first mill wins the game. Anything else: a mill opens a
    /// capture sub-turn instead.
    pub num_mills_to_win_threshold: u8,
    /// A color with fewer pieces left than this (placed plus unplaced) loses.
    pub min_pieces_to_play: u8,
    /// `0` disables the rule.
    pub num_position_repeats_for_draw: u8,
    /// `0` disables the rule.
    pub num_moves_without_mill_for_draw: u32,
    /// Phase a color is in while it still has unplaced pieces.
    pub opening_phase: Phase,
    pub forbidden_on_first_move: Vec<Coord>,
    pub forbidden_on_second_move: Vec<Coord>,
    pub forbidden_in_placing_phase: Vec<Coord>,
    pub topology: Arc<Topology>,
}

impl GameConfig {
    pub fn first_mill_wins(&self) -> bool {
        self.num_mills_to_win_threshold == 1
    }

    /// Phase of a color holding `unplaced` pieces off the board and
    /// `on_board` pieces on it.
    pub fn phase_for(&self, unplaced: usize, on_board: usize) -> Phase {
        if unplaced > 0 {
            return self.opening_phase;
        }
        match self.flying_threshold {
            Some(threshold) if on_board <= threshold as usize => Phase::Flying,
            _ => Phase::Moving,
        }
    }
}

static THREE_BY_THREE: Lazy<Arc<Topology>> = Lazy::new(|| {
    Arc::new(variants::three_by_three().expect("3x3 board definition should be valid"))
});
static TWO_SQUARES: Lazy<Arc<Topology>> = Lazy::new(|| {
    Arc::new(variants::two_squares().expect("two squares board definition should be valid"))
});
static THREE_SQUARES: Lazy<Arc<Topology>> = Lazy::new(|| {
    Arc::new(variants::three_squares().expect("three squares board definition should be valid"))
});
static THREE_SQUARES_WITH_DIAGONALS: Lazy<Arc<Topology>> = Lazy::new(|| {
    Arc::new(
        variants::three_squares_with_diagonals()
            .expect("three squares with diagonals board definition should be valid"),
    )
});
static PICARIA: Lazy<Arc<Topology>> = Lazy::new(|| {
    Arc::new(variants::picaria().expect("picaria board definition should be valid"))
});

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    ThreeMensMorris,
    SixMensMorris,
    NineMensMorris,
    TenMensMorris,
    TwelveMensMorris,
    Picaria,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::ThreeMensMorris,
        Variant::SixMensMorris,
        Variant::NineMensMorris,
        Variant::TenMensMorris,
        Variant::TwelveMensMorris,
        Variant::Picaria,
    ];

    /// Name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Variant::ThreeMensMorris => "three",
            Variant::SixMensMorris => "six",
            Variant::NineMensMorris => "nine",
            Variant::TenMensMorris => "ten",
            Variant::TwelveMensMorris => "twelve",
            Variant::Picaria => "picaria",
        }
    }

    pub fn config(self) -> GameConfig {
        let morris = |name, pieces, topology: &Lazy<Arc<Topology>>| GameConfig {
            name,
            num_morris_per_player: pieces,
            flying_threshold: Some(3),
            num_mills_to_win_threshold: 0,
            min_pieces_to_play: 3,
            num_position_repeats_for_draw: 3,
            num_moves_without_mill_for_draw: 50,
            opening_phase: Phase::Placing,
            forbidden_on_first_move: Vec::new(),
            forbidden_on_second_move: Vec::new(),
            forbidden_in_placing_phase: Vec::new(),
            topology: Arc::clone(topology),
        };

        match self {
            Variant::ThreeMensMorris => GameConfig {
                flying_threshold: None,
                num_mills_to_win_threshold: 1,
                forbidden_on_first_move: vec![coord!("b2")],
                ..morris("Three Men's Morris", 3, &THREE_BY_THREE)
            },
            Variant::SixMensMorris => GameConfig {
                flying_threshold: None,
                ..morris("Six Men's Morris", 6, &TWO_SQUARES)
            },
            Variant::NineMensMorris => morris("Nine Men's Morris", 9, &THREE_SQUARES),
            Variant::TenMensMorris => GameConfig {
                opening_phase: Phase::Lasker,
                ..morris("Ten Men's Morris", 10, &THREE_SQUARES)
            },
            Variant::TwelveMensMorris => {
                morris("Twelve Men's Morris", 12, &THREE_SQUARES_WITH_DIAGONALS)
            }
            Variant::Picaria => GameConfig {
                flying_threshold: None,
                num_mills_to_win_threshold: 1,
                forbidden_in_placing_phase: vec![coord!("c3")],
                ..morris("Picaria", 3, &PICARIA)
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cli_name())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().replace('\'', "").as_str() {
            "three" | "3" | "3mm" | "three-mens-morris" => Ok(Variant::ThreeMensMorris),
            "six" | "6" | "6mm" | "six-mens-morris" => Ok(Variant::SixMensMorris),
            "nine" | "9" | "9mm" | "nine-mens-morris" => Ok(Variant::NineMensMorris),
            "ten" | "10" | "10mm" | "ten-mens-morris" | "lasker" => Ok(Variant::TenMensMorris),
            "twelve" | "12" | "12mm" | "twelve-mens-morris" => Ok(Variant::TwelveMensMorris),
            "picaria" => Ok(Variant::Picaria),
            _ => Err("invalid variant; options are: three, six, nine, ten, twelve, picaria"),
        }
    }
}
