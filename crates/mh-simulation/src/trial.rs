use mh_core::{Door, Prize};
use rand::rngs::StdRng;

/// One simulated round, drawn up to the host's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// Where the car is.
    pub car: Door,
    /// The contestant's first pick.
    pub first_choice: Door,
    /// The goat door the host opens.
    pub revealed: Door,
    /// The one door left to switch to.
    pub switch_target: Door,
}

impl Trial {
    /// Draw a round: car and first pick uniformly and independently, then a
    /// host reveal that avoids both.
    pub fn draw(rng: &mut StdRng) -> Self {
        let car = Door::random(rng);
        let first_choice = Door::random(rng);
        let revealed = Door::host_reveal(rng, first_choice, car);
        let Some(switch_target) = Door::remaining(first_choice, revealed) else {
            unreachable!("first pick and reveal are distinct doors")
        };
        Self {
            car,
            first_choice,
            revealed,
            switch_target,
        }
    }

    /// Whether keeping the first pick wins the car.
    pub fn stay_wins(&self) -> bool {
        Prize::behind(self.first_choice, self.car) == Prize::Car
    }

    /// Whether moving to the other closed door wins the car.
    pub fn switch_wins(&self) -> bool {
        Prize::behind(self.switch_target, self.car) == Prize::Car
    }
}
