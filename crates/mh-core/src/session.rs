//! The state machine for a single round.
//!
//! A round moves `Choosing -> Deciding -> Finished`. The car position is
//! drawn once when the session is created and never changes; a new round
//! means a new session.

use std::fmt;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::door::{Door, DoorContent, DoorView, Prize};
use crate::error::{GameError, GameResult};
use crate::strategy::Decision;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the first pick.
    Choosing,
    /// A goat has been revealed; waiting for the final pick.
    Deciding,
    /// The round is over and every door is open.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choosing => write!(f, "choosing"),
            Self::Deciding => write!(f, "deciding"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// The result of one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The door picked before the reveal.
    pub first_choice: Door,
    /// The door picked after the reveal.
    pub final_choice: Door,
    /// Where the car was.
    pub car: Door,
    /// Whether the final pick kept or changed the first pick.
    pub decision: Decision,
    /// Whether the final pick was the car.
    pub won: bool,
}

/// One round of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    car: Door,
    chosen: Option<Door>,
    revealed: Option<Door>,
    phase: Phase,
    outcome: Option<RoundOutcome>,
}

impl Session {
    /// Start a round with the car behind a uniformly random door.
    pub fn new(rng: &mut StdRng) -> Self {
        Self::with_car(Door::random(rng))
    }

    /// Start a round with the car behind a known door.
    pub fn with_car(car: Door) -> Self {
        Self {
            car,
            chosen: None,
            revealed: None,
            phase: Phase::Choosing,
            outcome: None,
        }
    }

    /// The door hiding the car.
    pub fn car(&self) -> Door {
        self.car
    }

    /// The player's current pick: the first pick while deciding, the final
    /// pick once finished.
    pub fn chosen(&self) -> Option<Door> {
        self.chosen
    }

    /// The door the host opened.
    pub fn revealed(&self) -> Option<Door> {
        self.revealed
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome, once the round is finished.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// The pick made before the reveal.
    pub fn first_choice(&self) -> Option<Door> {
        self.outcome.map(|o| o.first_choice).or(self.chosen)
    }

    /// While deciding, the closed door the player would switch to.
    pub fn switch_target(&self) -> Option<Door> {
        match (self.phase, self.chosen, self.revealed) {
            (Phase::Deciding, Some(chosen), Some(revealed)) => Door::remaining(chosen, revealed),
            _ => None,
        }
    }

    /// What hides behind `door`.
    pub fn prize_behind(&self, door: Door) -> Prize {
        Prize::behind(door, self.car)
    }

    /// Make the first pick. The host immediately opens a goat door that is
    /// neither the pick nor the car. Returns the revealed door.
    pub fn choose(&mut self, door: Door, rng: &mut StdRng) -> GameResult<Door> {
        if self.phase != Phase::Choosing {
            return Err(GameError::WrongPhase {
                operation: "choose",
                phase: self.phase,
            });
        }

        let revealed = Door::host_reveal(rng, door, self.car);
        self.chosen = Some(door);
        self.revealed = Some(revealed);
        self.phase = Phase::Deciding;

        tracing::debug!(chosen = door.index(), revealed = revealed.index(), "host revealed a goat");
        Ok(revealed)
    }

    /// Make the final pick. Any closed door is allowed; the revealed door is
    /// rejected. The caller is responsible for recording the outcome.
    pub fn decide(&mut self, door: Door) -> GameResult<RoundOutcome> {
        let (Phase::Deciding, Some(first_choice), Some(revealed)) =
            (self.phase, self.chosen, self.revealed)
        else {
            return Err(GameError::WrongPhase {
                operation: "decide",
                phase: self.phase,
            });
        };

        if door == revealed {
            return Err(GameError::RevealedDoor(door));
        }

        let decision = if door == first_choice {
            Decision::Stay
        } else {
            Decision::Switch
        };
        let outcome = RoundOutcome {
            first_choice,
            final_choice: door,
            car: self.car,
            decision,
            won: door == self.car,
        };

        self.chosen = Some(door);
        self.outcome = Some(outcome);
        self.phase = Phase::Finished;

        tracing::debug!(
            final_choice = door.index(),
            car = self.car.index(),
            %decision,
            won = outcome.won,
            "round finished"
        );
        Ok(outcome)
    }

    /// Per-door render data for the current phase.
    ///
    /// Once finished every door shows its prize. While deciding only the
    /// revealed door is open, drawn half open. The pick is always marked.
    pub fn door_views(&self) -> [DoorView; 3] {
        Door::ALL.map(|door| {
            let content = match self.phase {
                Phase::Finished => DoorContent::from(self.prize_behind(door)),
                Phase::Deciding if self.revealed == Some(door) => DoorContent::Goat,
                _ => DoorContent::Closed,
            };
            DoorView {
                door,
                content,
                selected: self.chosen == Some(door),
                opening: self.phase == Phase::Deciding && self.revealed == Some(door),
            }
        })
    }

    /// The status line shown to the player.
    pub fn status_message(&self) -> String {
        match (self.phase, self.revealed, &self.outcome) {
            (Phase::Deciding, Some(revealed), _) => format!(
                "{revealed} has been opened showing a goat! Would you like to switch your choice?"
            ),
            (Phase::Finished, _, Some(outcome)) => format!(
                "Game Over - You {} The car was behind {}!",
                if outcome.won { "Won!" } else { "Lost!" },
                outcome.car
            ),
            _ => "Choose a door!".to_string(),
        }
    }

    /// Check every invariant. Used when a session is rehydrated from
    /// persisted state.
    pub fn validate(&self) -> GameResult<()> {
        let inconsistent = |msg: &str| Err(GameError::Inconsistent(msg.to_string()));

        match self.phase {
            Phase::Choosing => {
                if self.chosen.is_some() || self.revealed.is_some() || self.outcome.is_some() {
                    return inconsistent("a choosing session has no pick, reveal or outcome");
                }
            }
            Phase::Deciding => {
                let (Some(chosen), Some(revealed)) = (self.chosen, self.revealed) else {
                    return inconsistent("a deciding session needs a pick and a reveal");
                };
                if self.outcome.is_some() {
                    return inconsistent("a deciding session has no outcome yet");
                }
                if revealed == self.car || revealed == chosen {
                    return inconsistent("the revealed door must be a goat the player did not pick");
                }
            }
            Phase::Finished => {
                let (Some(chosen), Some(revealed), Some(outcome)) =
                    (self.chosen, self.revealed, self.outcome)
                else {
                    return inconsistent("a finished session needs a pick, a reveal and an outcome");
                };
                if outcome.car != self.car || outcome.final_choice != chosen {
                    return inconsistent("the outcome does not match the session");
                }
                if revealed == self.car
                    || revealed == outcome.first_choice
                    || revealed == outcome.final_choice
                {
                    return inconsistent("the revealed door must be a goat the player did not pick");
                }
                let decision = if outcome.final_choice == outcome.first_choice {
                    Decision::Stay
                } else {
                    Decision::Switch
                };
                if decision != outcome.decision || outcome.won != (outcome.final_choice == self.car)
                {
                    return inconsistent("the outcome is misclassified");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn door(index: usize) -> Door {
        Door::new(index).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn new_session_is_choosing() {
        let s = Session::new(&mut rng());
        assert_eq!(s.phase(), Phase::Choosing);
        assert!(s.chosen().is_none());
        assert!(s.revealed().is_none());
        assert!(s.outcome().is_none());
        assert_eq!(s.status_message(), "Choose a door!");
    }

    #[test]
    fn forced_reveal_then_switch_wins() {
        let mut s = Session::with_car(door(1));
        let revealed = s.choose(door(0), &mut rng()).unwrap();
        assert_eq!(revealed, door(2));
        assert_eq!(s.phase(), Phase::Deciding);
        assert_eq!(s.switch_target(), Some(door(1)));

        let outcome = s.decide(door(1)).unwrap();
        assert_eq!(outcome.decision, Decision::Switch);
        assert!(outcome.won);
        assert_eq!(outcome.first_choice, door(0));
        assert_eq!(s.chosen(), Some(door(1)));
        assert_eq!(s.first_choice(), Some(door(0)));
        assert_eq!(s.phase(), Phase::Finished);
        assert_eq!(
            s.status_message(),
            "Game Over - You Won! The car was behind Door 2!"
        );
    }

    #[test]
    fn pick_the_car_then_stay_wins() {
        let mut s = Session::with_car(door(0));
        let revealed = s.choose(door(0), &mut rng()).unwrap();
        assert!(revealed == door(1) || revealed == door(2));

        let outcome = s.decide(door(0)).unwrap();
        assert_eq!(outcome.decision, Decision::Stay);
        assert!(outcome.won);
    }

    #[test]
    fn deciding_status_names_the_revealed_door() {
        let mut s = Session::with_car(door(0));
        s.choose(door(1), &mut rng()).unwrap();
        assert_eq!(
            s.status_message(),
            "Door 3 has been opened showing a goat! Would you like to switch your choice?"
        );
    }

    #[test]
    fn decide_before_choose_is_rejected() {
        let mut s = Session::with_car(door(0));
        let before = s.clone();
        assert!(matches!(
            s.decide(door(0)),
            Err(GameError::WrongPhase {
                phase: Phase::Choosing,
                ..
            })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn choose_twice_is_rejected() {
        let mut s = Session::with_car(door(0));
        s.choose(door(0), &mut rng()).unwrap();
        let before = s.clone();
        assert!(s.choose(door(1), &mut rng()).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn revealed_door_cannot_be_final() {
        let mut s = Session::with_car(door(1));
        s.choose(door(0), &mut rng()).unwrap();
        let before = s.clone();
        assert_eq!(s.decide(door(2)), Err(GameError::RevealedDoor(door(2))));
        assert_eq!(s, before);
    }

    #[test]
    fn decide_after_finish_is_rejected() {
        let mut s = Session::with_car(door(1));
        s.choose(door(0), &mut rng()).unwrap();
        s.decide(door(0)).unwrap();
        assert!(matches!(
            s.decide(door(1)),
            Err(GameError::WrongPhase {
                phase: Phase::Finished,
                ..
            })
        ));
    }

    #[test]
    fn door_views_follow_phase() {
        let mut s = Session::with_car(door(1));
        assert!(s.door_views().iter().all(|v| v.content == DoorContent::Closed));

        s.choose(door(0), &mut rng()).unwrap();
        let views = s.door_views();
        assert!(views[0].selected && !views[0].opening);
        assert_eq!(views[2].content, DoorContent::Goat);
        assert!(views[2].opening);
        assert_eq!(views[1].content, DoorContent::Closed);

        s.decide(door(1)).unwrap();
        let views = s.door_views();
        assert_eq!(views[1].content, DoorContent::Car);
        assert!(views[1].selected);
        assert_eq!(views[0].content, DoorContent::Goat);
        assert!(views.iter().all(|v| !v.opening));
    }

    #[test]
    fn validate_accepts_every_reachable_state() {
        let mut s = Session::with_car(door(2));
        s.validate().unwrap();
        s.choose(door(2), &mut rng()).unwrap();
        s.validate().unwrap();
        let target = s.switch_target().unwrap();
        s.decide(target).unwrap();
        s.validate().unwrap();
    }

    #[test]
    fn validate_rejects_reveal_of_the_car() {
        let json = r#"{"car":1,"chosen":0,"revealed":1,"phase":"deciding","outcome":null}"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert!(matches!(s.validate(), Err(GameError::Inconsistent(_))));
    }

    #[test]
    fn serde_round_trip() {
        let mut s = Session::with_car(door(1));
        s.choose(door(0), &mut rng()).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    proptest! {
        #[test]
        fn reveal_is_never_car_or_pick(seed in any::<u64>(), car in 0usize..3, pick in 0usize..3) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = Session::with_car(door(car));
            let revealed = s.choose(door(pick), &mut rng).unwrap();
            prop_assert_ne!(revealed, s.car());
            prop_assert_ne!(Some(revealed), s.chosen());
            prop_assert!(s.validate().is_ok());
        }

        #[test]
        fn new_sessions_are_well_formed(seed in any::<u64>()) {
            let s = Session::new(&mut StdRng::seed_from_u64(seed));
            prop_assert!(s.car().index() < 3);
            prop_assert_eq!(s.phase(), Phase::Choosing);
        }
    }
}
