use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

/// One of the three doors, identified by a zero-based index.
///
/// Players see doors numbered from 1 (`Door 1`..`Door 3`); the index is
/// what gets stored and compared. Serialized as the bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    /// All doors in stage order.
    pub const ALL: [Door; DOOR_COUNT] = [Door(0), Door(1), Door(2)];

    /// Create a door from a zero-based index.
    pub fn new(index: usize) -> GameResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GameError::InvalidDoor(index))
    }

    /// Create a door from the one-based number shown to players.
    pub fn from_number(number: usize) -> GameResult<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(GameError::InvalidDoorNumber(number))
    }

    /// Zero-based index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// One-based number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Draw a door uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self(rng.random_range(0..DOOR_COUNT as u8))
    }

    /// Draw uniformly among the doors that are not in `excluded`.
    ///
    /// Returns `None` only when every door is excluded.
    pub fn random_excluding(rng: &mut StdRng, excluded: &[Door]) -> Option<Self> {
        let candidates: Vec<Door> = Self::ALL
            .into_iter()
            .filter(|door| !excluded.contains(door))
            .collect();
        candidates.choose(rng).copied()
    }

    /// The door the host opens: uniformly among the doors that are neither
    /// the player's pick nor the car. One candidate when the pick misses the
    /// car, two when it hits.
    pub fn host_reveal(rng: &mut StdRng, chosen: Door, car: Door) -> Self {
        match Self::random_excluding(rng, &[chosen, car]) {
            Some(door) => door,
            None => unreachable!("two exclusions always leave a door"),
        }
    }

    /// The single door that is neither `a` nor `b`, or `None` if they are
    /// the same door.
    pub fn remaining(a: Door, b: Door) -> Option<Self> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|door| *door != a && *door != b)
    }
}

impl TryFrom<u8> for Door {
    type Error = GameError;

    fn try_from(index: u8) -> GameResult<Self> {
        Self::new(usize::from(index))
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door {}", self.number())
    }
}

/// What hides behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    /// The prize.
    Car,
    /// One of the two consolation animals.
    Goat,
}

impl Prize {
    /// The prize behind `door` when the car is behind `car`.
    pub fn behind(door: Door, car: Door) -> Self {
        if door == car { Prize::Car } else { Prize::Goat }
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "Car"),
            Self::Goat => write!(f, "Goat"),
        }
    }
}

/// What a shell should draw for a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorContent {
    /// The door is shut.
    Closed,
    /// The door is open and shows the car.
    Car,
    /// The door is open and shows a goat.
    Goat,
}

impl From<Prize> for DoorContent {
    fn from(prize: Prize) -> Self {
        match prize {
            Prize::Car => DoorContent::Car,
            Prize::Goat => DoorContent::Goat,
        }
    }
}

/// Everything a renderer needs to draw one door. Pure data, derived from a
/// session by [`crate::Session::door_views`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorView {
    /// Which door this is.
    pub door: Door,
    /// What is visible.
    pub content: DoorContent,
    /// Whether this is the player's current pick.
    pub selected: bool,
    /// Whether the door is shown half open (the host's reveal).
    pub opening: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_accepts_only_three_doors() {
        assert_eq!(Door::new(0).unwrap().index(), 0);
        assert_eq!(Door::new(2).unwrap().index(), 2);
        assert_eq!(Door::new(3), Err(GameError::InvalidDoor(3)));
    }

    #[test]
    fn from_number_is_one_based() {
        assert_eq!(Door::from_number(1).unwrap(), Door::ALL[0]);
        assert_eq!(Door::from_number(3).unwrap(), Door::ALL[2]);
        assert_eq!(Door::from_number(0), Err(GameError::InvalidDoorNumber(0)));
        assert_eq!(Door::from_number(4), Err(GameError::InvalidDoorNumber(4)));
    }

    #[test]
    fn display_uses_number() {
        assert_eq!(Door::ALL[1].to_string(), "Door 2");
    }

    #[test]
    fn remaining_door() {
        let [a, b, c] = Door::ALL;
        assert_eq!(Door::remaining(a, b), Some(c));
        assert_eq!(Door::remaining(c, a), Some(b));
        assert_eq!(Door::remaining(b, b), None);
    }

    #[test]
    fn random_excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(7);
        let [a, b, c] = Door::ALL;
        for _ in 0..200 {
            assert_eq!(Door::random_excluding(&mut rng, &[a, b]), Some(c));
            let door = Door::random_excluding(&mut rng, &[b]).unwrap();
            assert_ne!(door, b);
        }
        assert_eq!(Door::random_excluding(&mut rng, &Door::ALL), None);
    }

    #[test]
    fn host_reveal_spreads_over_both_goats() {
        let mut rng = StdRng::seed_from_u64(11);
        let [a, b, c] = Door::ALL;
        let mut seen_b = false;
        let mut seen_c = false;
        for _ in 0..200 {
            match Door::host_reveal(&mut rng, a, a) {
                d if d == b => seen_b = true,
                d if d == c => seen_c = true,
                d => panic!("revealed the car or the pick: {d}"),
            }
        }
        assert!(seen_b && seen_c);
    }

    #[test]
    fn host_reveal_forced_when_pick_misses() {
        let mut rng = StdRng::seed_from_u64(3);
        let [a, b, c] = Door::ALL;
        for _ in 0..50 {
            assert_eq!(Door::host_reveal(&mut rng, a, b), c);
        }
    }

    #[test]
    fn serde_uses_index() {
        let json = serde_json::to_string(&Door::ALL[2]).unwrap();
        assert_eq!(json, "2");
        let door: Door = serde_json::from_str("1").unwrap();
        assert_eq!(door, Door::ALL[1]);
        assert!(serde_json::from_str::<Door>("3").is_err());
    }

    #[test]
    fn prize_behind() {
        let [a, b, _] = Door::ALL;
        assert_eq!(Prize::behind(a, a), Prize::Car);
        assert_eq!(Prize::behind(b, a), Prize::Goat);
        assert_eq!(DoorContent::from(Prize::Car), DoorContent::Car);
    }
}
