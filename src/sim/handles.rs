/// Reverser position: `-1` backward, `0` neutral, `1` forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReverserHandle {
    /// Position selected by the driver.
    pub driver: i32,
    /// Position currently in effect.
    pub actual: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PowerHandle {
    pub driver: i32,
    pub maximum_notch: i32,
}

/// How the brake handle maps to notches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrakeHandleKind {
    /// Plain notched brake.
    Notched,
    /// Automatic air brake handle: release `0`, lap `1`, service `2`.
    AirBrake,
}

impl Default for BrakeHandleKind {
    fn default() -> Self {
        BrakeHandleKind::Notched
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrakeHandle {
    pub kind: BrakeHandleKind,
    pub driver: i32,
    pub maximum_notch: i32,
}

/// The driver's controls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Handles {
    pub reverser: ReverserHandle,
    pub power: PowerHandle,
    pub brake: BrakeHandle,
    pub emergency_brake: bool,
    pub has_hold_brake: bool,
    pub hold_brake: bool,
}

impl Handles {
    pub fn is_air_brake(&self) -> bool {
        self.brake.kind == BrakeHandleKind::AirBrake
    }

    /// Brake notch count shown on a gauge; an air brake handle has three
    /// positions, so two notches above release.
    pub fn brake_notches(&self) -> f64 {
        if self.is_air_brake() {
            2.0
        } else {
            self.brake.maximum_notch as f64
        }
    }

    /// Brake position on a single scale that also covers the hold brake
    /// and emergency positions.
    pub fn brake_notch_linear(&self) -> f64 {
        let max = self.brake.maximum_notch as f64;
        if self.is_air_brake() {
            if self.emergency_brake {
                3.0
            } else {
                self.brake.driver as f64
            }
        } else if self.has_hold_brake {
            if self.emergency_brake {
                max + 2.0
            } else if self.brake.driver > 0 {
                self.brake.driver as f64 + 1.0
            } else if self.hold_brake {
                1.0
            } else {
                0.0
            }
        } else if self.emergency_brake {
            max + 1.0
        } else {
            self.brake.driver as f64
        }
    }

    /// Highest value [`Handles::brake_notch_linear`] can take.
    pub fn brake_notches_linear(&self) -> f64 {
        let max = self.brake.maximum_notch as f64;
        if self.is_air_brake() {
            3.0
        } else if self.has_hold_brake {
            max + 2.0
        } else {
            max + 1.0
        }
    }
}
