use super::{Handles, Vector3};
use crate::mach::Function;

/// Where an axle sits on the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axle {
    /// Offset of the axle from the car centre along the car, in metres.
    pub position: f64,
    pub world_position: Vector3,
    pub track_position: f64,
    pub curve_radius: f64,
    pub curve_cant: f64,
    pub pitch: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorSide {
    Left = 0,
    Right = 1,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Door {
    /// `0.0` closed to `1.0` fully open.
    pub state: f64,
    /// The door is expected to open at the next stop.
    pub anticipated_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrakeSystemKind {
    ElectromagneticStraightAir,
    ElectricCommand,
    AutomaticAir,
}

impl Default for BrakeSystemKind {
    fn default() -> Self {
        BrakeSystemKind::ElectromagneticStraightAir
    }
}

/// Current pressures of a car's brake system, in pascal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarBrake {
    pub kind: BrakeSystemKind,
    pub main_reservoir: f64,
    pub equalizing_reservoir: f64,
    pub brake_pipe: f64,
    pub brake_cylinder: f64,
    pub straight_air_pipe: f64,
}

/// Brightness change points around a car, `0.0` dark to `1.0` full.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarBrightness {
    pub previous: f64,
    pub previous_track_position: f64,
    pub next: f64,
    pub next_track_position: f64,
}

impl Default for CarBrightness {
    fn default() -> Self {
        CarBrightness {
            previous: 1.0,
            previous_track_position: 0.0,
            next: 1.0,
            next_track_position: 0.0,
        }
    }
}

impl CarBrightness {
    /// Interpolates between the change points at `track_position`.
    pub fn current(&self, track_position: f64) -> f64 {
        let span = self.next_track_position - self.previous_track_position;
        if span == 0.0 {
            return self.previous;
        }
        let t = ((track_position - self.previous_track_position) / span).clamp(0.0, 1.0);
        self.previous * (1.0 - t) + self.next * t
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Car {
    pub length: f64,
    pub front_axle: Axle,
    pub rear_axle: Axle,
    /// Signed speed in m/s.
    pub current_speed: f64,
    /// Speed as shown on the speedometer, in m/s.
    pub perceived_speed: f64,
    pub acceleration: f64,
    pub is_motor_car: bool,
    /// Acceleration from the motor; positive values carry no direction.
    pub motor_acceleration: f64,
    /// Indexed by [`DoorSide`].
    pub doors: [Door; 2],
    pub brake: CarBrake,
    pub brightness: CarBrightness,
}

impl Car {
    pub fn door(&self, side: DoorSide) -> &Door {
        &self.doors[side as usize]
    }

    /// Largest door opening on `side`, or on either side.
    pub fn door_state(&self, side: Option<DoorSide>) -> f64 {
        self.doors
            .iter()
            .enumerate()
            .filter(|(i, _)| side.map_or(true, |s| s as usize == *i))
            .fold(0.0, |a, (_, door)| if door.state > a { door.state } else { a })
    }

    /// Motor acceleration signed by the direction of travel.
    pub fn directed_motor_acceleration(&self, reverser_actual: i32) -> f64 {
        if self.motor_acceleration < 0.0 {
            self.motor_acceleration * Function::sign(self.current_speed)
        } else if self.motor_acceleration > 0.0 {
            self.motor_acceleration * reverser_actual as f64
        } else {
            0.0
        }
    }

    /// Distance from `position` to the point between the two axles.
    pub fn distance_to(&self, position: Vector3) -> f64 {
        let centre = self
            .front_axle
            .world_position
            .midpoint(self.rear_axle.world_position);
        (centre - position).norm()
    }

    pub fn track_position(&self) -> f64 {
        0.5 * (self.front_axle.track_position + self.rear_axle.track_position)
    }

    pub fn curve_radius(&self) -> f64 {
        (self.front_axle.curve_radius + self.rear_axle.curve_radius) / 2.0
    }

    pub fn brightness(&self) -> f64 {
        self.brightness.current(self.front_axle.track_position)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Train {
    pub is_player: bool,
    pub cars: Vec<Car>,
    pub driver_car: usize,
    pub destination: i32,
    pub handles: Handles,
    pub const_speed: bool,
    pub has_const_speed: bool,
    /// Route section the train currently occupies.
    pub current_section_index: i32,
}

impl Train {
    pub fn with_cars(cars: Vec<Car>) -> Train {
        Train {
            cars,
            ..Train::default()
        }
    }

    /// Looks up a car by a script operand. The operand is rounded and
    /// negative indices count from the end of the train. NaN selects no car.
    pub fn car(&self, operand: f64) -> Option<&Car> {
        if !operand.is_finite() {
            return None;
        }
        let len = self.cars.len() as i64;
        let mut index = Function::round(operand) as i64;
        if index < 0 {
            index += len;
        }
        if index >= 0 && index < len {
            self.cars.get(index as usize)
        } else {
            None
        }
    }

    pub fn driver_car(&self) -> Option<&Car> {
        self.cars.get(self.driver_car)
    }

    pub fn front_track_position(&self) -> f64 {
        self.cars.first().map_or(0.0, |car| {
            car.front_axle.track_position - car.front_axle.position + 0.5 * car.length
        })
    }

    pub fn rear_track_position(&self) -> f64 {
        self.cars.last().map_or(0.0, |car| {
            car.rear_axle.track_position - car.rear_axle.position - 0.5 * car.length
        })
    }

    /// Signed distance from the train's ends to `track_position`; `0.0`
    /// when the position lies alongside the train.
    pub fn track_distance(&self, track_position: f64) -> f64 {
        let front = self.front_track_position();
        let rear = self.rear_track_position();
        if track_position > front {
            track_position - front
        } else if track_position < rear {
            track_position - rear
        } else {
            0.0
        }
    }

    /// Distance from `position` to the nearest axle of any car.
    pub fn distance(&self, position: Vector3) -> f64 {
        self.cars
            .iter()
            .flat_map(|car| [car.front_axle, car.rear_axle])
            .map(|axle| (axle.world_position - position).norm_squared())
            .fold(None, |nearest: Option<f64>, d| match nearest {
                Some(n) if n <= d => Some(n),
                _ => Some(d),
            })
            .map_or(0.0, f64::sqrt)
    }

    /// Directed motor acceleration of the first motor car.
    pub fn motor_acceleration(&self) -> f64 {
        self.cars
            .iter()
            .find(|car| car.is_motor_car)
            .map_or(0.0, |car| {
                car.directed_motor_acceleration(self.handles.reverser.actual)
            })
    }

    pub fn door_state(&self, side: Option<DoorSide>) -> f64 {
        self.cars
            .iter()
            .map(|car| car.door_state(side))
            .fold(0.0, |a, s| if s > a { s } else { a })
    }

    pub fn door_target(&self, side: DoorSide) -> bool {
        self.cars.iter().any(|car| car.door(side).anticipated_open)
    }

    pub fn has_air_brake(&self) -> bool {
        self.driver_car()
            .map_or(false, |car| car.brake.kind == BrakeSystemKind::AutomaticAir)
    }
}
