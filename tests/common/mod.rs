#![allow(dead_code)]

use funcscript::mach::{Opcode, Script};
use funcscript::sim::{
    Axle, BrakeSystemKind, Car, CarBrake, Context, Door, Train, Vector3, World,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn script(ops: Vec<Opcode>, constants: Vec<f64>) -> Script {
    Script::new(ops, constants).unwrap()
}

/// Builds and evaluates a script once.
pub fn eval(ops: Vec<Opcode>, constants: Vec<f64>, ctx: &Context) -> f64 {
    script(ops, constants).evaluate(ctx, &mut rng()).unwrap()
}

/// Evaluates a script with no train and an empty world.
pub fn eval_bare(ops: Vec<Opcode>, constants: Vec<f64>) -> f64 {
    let world = World::default();
    eval(ops, constants, &Context::new(&world))
}

pub fn car_at(front: f64, speed: f64) -> Car {
    let length = 20.0;
    Car {
        length,
        front_axle: Axle {
            position: 8.0,
            world_position: Vector3::new(0.0, 0.0, front),
            track_position: front,
            curve_radius: 400.0,
            curve_cant: 0.1,
            pitch: 0.01,
        },
        rear_axle: Axle {
            position: -8.0,
            world_position: Vector3::new(0.0, 0.0, front - 16.0),
            track_position: front - 16.0,
            curve_radius: 600.0,
            curve_cant: 0.2,
            pitch: 0.02,
        },
        current_speed: speed,
        perceived_speed: speed,
        ..Car::default()
    }
}

/// Three cars heading toward +z, front of the train at 110.
pub fn sample_train() -> Train {
    let mut cars = vec![
        car_at(100.0, 10.0),
        car_at(80.0, 10.5),
        car_at(60.0, 11.0),
    ];
    cars[1].is_motor_car = true;
    cars[1].motor_acceleration = 0.8;
    cars[0].doors = [
        Door {
            state: 0.25,
            anticipated_open: false,
        },
        Door {
            state: 0.0,
            anticipated_open: true,
        },
    ];
    cars[2].doors[0].state = 0.75;
    cars[0].brake = CarBrake {
        kind: BrakeSystemKind::AutomaticAir,
        main_reservoir: 780_000.0,
        equalizing_reservoir: 490_000.0,
        brake_pipe: 490_000.0,
        brake_cylinder: 0.0,
        straight_air_pipe: 0.0,
    };
    cars[2].brake.brake_cylinder = 440_000.0;
    let mut train = Train::with_cars(cars);
    train.is_player = true;
    train.destination = 4;
    train.handles.reverser.driver = 1;
    train.handles.reverser.actual = 1;
    train
}
