use super::{Function, Opcode, Operation, Script};
use crate::error;
use crate::sim::{Context, DoorSide};
use crate::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

impl Script {
    /// Runs the script once against `ctx` and returns the new last result.
    ///
    /// Numeric edge cases and a missing train never fail. An unknown
    /// instruction or `Panel2Timetable` aborts the pass and leaves the last
    /// result untouched.
    pub fn evaluate<R: Rng + ?Sized>(&mut self, ctx: &Context<'_>, rng: &mut R) -> Result<f64> {
        use Opcode::*;
        let stack = &mut self.stack;
        let constants = &self.constants;
        let last_result = self.last_result;
        stack.clear();
        let mut c = 0;
        for (addr, op) in self.instructions.iter().enumerate() {
            match *op {
                // *** System
                Halt => break,
                Constant => {
                    stack.push(constants[c]);
                    c += 1;
                }
                ConstantArray(n) => {
                    stack.extend_from_slice(&constants[c..c + n]);
                    c += n;
                }
                Value => stack.push(last_result),
                Delta => stack.push(ctx.time_elapsed),

                // *** Stack manipulation
                StackCopy => stack.push(stack.top()),
                StackSwap => stack.swap(),

                // *** Arithmetic
                MathPlus => stack.binary(|a, b| a + b),
                MathSubtract => stack.binary(|a, b| a - b),
                MathMinus => stack.unary(|a| -a),
                MathTimes => stack.binary(|a, b| a * b),
                MathDivide => stack.binary(Operation::divide),
                MathReciprocal => stack.unary(Function::reciprocal),
                MathPower => stack.binary(Operation::power),
                MathRandom => stack.binary(|a, b| Operation::random(rng, a, b)),
                MathRandomInt => stack.binary(|a, b| Operation::random_int(rng, a, b)),
                MathIncrement => stack.unary(|a| a + 1.0),
                MathDecrement => stack.unary(|a| a - 1.0),
                MathFusedMultiplyAdd => stack.ternary(Operation::fused_multiply_add),
                MathQuotient => stack.binary(Operation::quotient),
                MathMod => stack.binary(Operation::modulo),
                MathFloor => stack.unary(f64::floor),
                MathCeiling => stack.unary(f64::ceil),
                MathRound => stack.unary(Function::round),
                MathMin => stack.binary(Operation::min),
                MathMax => stack.binary(Operation::max),
                MathAbs => stack.unary(f64::abs),
                MathSign => stack.unary(Function::sign),
                MathExp => stack.unary(f64::exp),
                MathLog => stack.unary(Function::safe_log),
                MathSqrt => stack.unary(Function::safe_sqrt),
                MathSin => stack.unary(f64::sin),
                MathCos => stack.unary(f64::cos),
                MathTan => stack.unary(Function::safe_tan),
                MathArcTan => stack.unary(f64::atan),

                // *** Comparison
                CompareEqual => stack.binary(Operation::equal),
                CompareUnequal => stack.binary(Operation::not_equal),
                CompareLess => stack.binary(Operation::less),
                CompareGreater => stack.binary(Operation::greater),
                CompareLessEqual => stack.binary(Operation::less_equal),
                CompareGreaterEqual => stack.binary(Operation::greater_equal),
                CompareConditional => stack.ternary(Operation::conditional),

                // *** Logical
                LogicalNot => stack.unary(Operation::not),
                LogicalAnd => stack.binary(Operation::and),
                LogicalOr => stack.binary(Operation::or),
                LogicalNand => stack.binary(Operation::nand),
                LogicalNor => stack.binary(Operation::nor),
                LogicalXor => stack.binary(Operation::xor),

                // *** Object, time and camera
                CurrentObjectState => stack.push(ctx.current_state as f64),
                TimeSecondsSinceMidnight => stack.push(ctx.world.seconds_since_midnight),
                CameraDistance => stack.push(ctx.camera_offset().norm()),
                CameraXDistance => stack.push(ctx.camera_offset().x),
                CameraYDistance => stack.push(ctx.camera_offset().y),
                CameraZDistance => stack.push(ctx.camera_offset().z),
                CameraView => stack.push(ctx.camera_view()),

                // *** Train and car
                PlayerTrain => stack.push(ctx.train_or_zero(|t| Operation::truth(t.is_player))),
                TrainCars => stack.push(ctx.train_or_zero(|t| t.cars.len() as f64)),
                TrainDestination => stack.push(ctx.train_or_zero(|t| t.destination as f64)),
                TrainSpeed => stack.push(ctx.own_car_or_zero(|car| car.current_speed)),
                TrainSpeedOfCar => stack.unary(|j| ctx.car_or_zero(j, |car| car.current_speed)),
                TrainSpeedometer => stack.push(ctx.own_car_or_zero(|car| car.perceived_speed)),
                TrainSpeedometerOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.perceived_speed))
                }
                TrainAcceleration => stack.push(ctx.own_car_or_zero(|car| car.acceleration)),
                TrainAccelerationOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.acceleration))
                }
                TrainAccelerationMotor => stack.push(ctx.train_or_zero(|t| t.motor_acceleration())),
                TrainAccelerationMotorOfCar => stack.unary(|j| {
                    ctx.train_or_zero(|t| {
                        t.car(j).map_or(0.0, |car| {
                            car.directed_motor_acceleration(t.handles.reverser.actual)
                        })
                    })
                }),
                TrainDistance => stack.push(ctx.train_or_zero(|t| t.distance(ctx.position))),
                TrainDistanceToCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.distance_to(ctx.position)))
                }
                TrainTrackDistance => {
                    stack.push(ctx.train_or_zero(|t| t.track_distance(ctx.track_position)))
                }
                TrainTrackDistanceToCar => stack.unary(|j| {
                    ctx.car_or_zero(j, |car| ctx.track_position - car.track_position())
                }),
                CurveRadius | FrontAxleCurveRadius | RearAxleCurveRadius | CurveCant | Pitch => {
                    stack.push(0.0)
                }
                CurveRadiusOfCar => stack.unary(|j| ctx.car_or_zero(j, |car| car.curve_radius())),
                FrontAxleCurveRadiusOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.front_axle.curve_radius))
                }
                RearAxleCurveRadiusOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.rear_axle.curve_radius))
                }
                CurveCantOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.front_axle.curve_cant))
                }
                PitchOfCar => stack.unary(|j| ctx.car_or_zero(j, |car| car.front_axle.pitch)),

                // *** Doors
                Doors => stack.push(ctx.train_or_zero(|t| t.door_state(None))),
                DoorsIndex => stack.unary(|j| ctx.car_or_zero(j, |car| car.door_state(None))),
                LeftDoors => stack.push(ctx.train_or_zero(|t| t.door_state(Some(DoorSide::Left)))),
                LeftDoorsIndex => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.door_state(Some(DoorSide::Left))))
                }
                RightDoors => {
                    stack.push(ctx.train_or_zero(|t| t.door_state(Some(DoorSide::Right))))
                }
                RightDoorsIndex => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.door_state(Some(DoorSide::Right))))
                }
                LeftDoorsTarget => stack.push(
                    ctx.train_or_zero(|t| Operation::truth(t.door_target(DoorSide::Left))),
                ),
                LeftDoorsTargetIndex => stack.unary(|j| {
                    ctx.car_or_zero(j, |car| {
                        Operation::truth(car.door(DoorSide::Left).anticipated_open)
                    })
                }),
                RightDoorsTarget => stack.push(
                    ctx.train_or_zero(|t| Operation::truth(t.door_target(DoorSide::Right))),
                ),
                RightDoorsTargetIndex => stack.unary(|j| {
                    ctx.car_or_zero(j, |car| {
                        Operation::truth(car.door(DoorSide::Right).anticipated_open)
                    })
                }),

                // *** Handles
                ReverserNotch => {
                    stack.push(ctx.train_or_zero(|t| t.handles.reverser.driver as f64))
                }
                PowerNotch => stack.push(ctx.train_or_zero(|t| t.handles.power.driver as f64)),
                PowerNotches => {
                    stack.push(ctx.train_or_zero(|t| t.handles.power.maximum_notch as f64))
                }
                BrakeNotch => stack.push(ctx.train_or_zero(|t| t.handles.brake.driver as f64)),
                BrakeNotches => stack.push(ctx.train_or_zero(|t| t.handles.brake_notches())),
                BrakeNotchLinear => {
                    stack.push(ctx.train_or_zero(|t| t.handles.brake_notch_linear()))
                }
                BrakeNotchesLinear => {
                    stack.push(ctx.train_or_zero(|t| t.handles.brake_notches_linear()))
                }
                EmergencyBrake => stack.push(
                    ctx.train_or_zero(|t| Operation::truth(t.handles.emergency_brake)),
                ),
                HasAirBrake => stack.push(ctx.train_or_zero(|t| Operation::truth(t.has_air_brake()))),
                HoldBrake => {
                    stack.push(ctx.train_or_zero(|t| Operation::truth(t.handles.hold_brake)))
                }
                HasHoldBrake => {
                    stack.push(ctx.train_or_zero(|t| Operation::truth(t.handles.has_hold_brake)))
                }
                ConstSpeed => stack.push(ctx.train_or_zero(|t| Operation::truth(t.const_speed))),
                HasConstSpeed => {
                    stack.push(ctx.train_or_zero(|t| Operation::truth(t.has_const_speed)))
                }

                // *** Brake system pressures
                BrakeMainReservoir => {
                    stack.push(ctx.own_car_or_zero(|car| car.brake.main_reservoir))
                }
                BrakeMainReservoirOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.brake.main_reservoir))
                }
                BrakeEqualizingReservoir => {
                    stack.push(ctx.own_car_or_zero(|car| car.brake.equalizing_reservoir))
                }
                BrakeEqualizingReservoirOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.brake.equalizing_reservoir))
                }
                BrakeBrakePipe => stack.push(ctx.own_car_or_zero(|car| car.brake.brake_pipe)),
                BrakeBrakePipeOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.brake.brake_pipe))
                }
                BrakeBrakeCylinder => {
                    stack.push(ctx.own_car_or_zero(|car| car.brake.brake_cylinder))
                }
                BrakeBrakeCylinderOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.brake.brake_cylinder))
                }
                BrakeStraightAirPipe => {
                    stack.push(ctx.own_car_or_zero(|car| car.brake.straight_air_pipe))
                }
                BrakeStraightAirPipeOfCar => {
                    stack.unary(|j| ctx.car_or_zero(j, |car| car.brake.straight_air_pipe))
                }

                // *** Safety plugin and timetable
                SafetyPluginAvailable => stack.push(ctx.plugin_available()),
                SafetyPluginState => stack.unary(|n| ctx.plugin_state(n)),
                TimetableVisible => stack.push(Operation::truth(ctx.world.timetable_visible())),

                // *** Sections and per-car state
                SectionAspectNumber => stack.push(ctx.section_aspect()),
                BrightnessOfCar => stack.unary(|j| ctx.car_or_zero(j, |car| car.brightness())),
                TrainCarNumber => stack.push(ctx.car_number()),

                // *** Not provided by this host
                Odometer | PilotLamp | PassAlarm | StationAdjustAlarm | Klaxon | PrimaryKlaxon
                | SecondaryKlaxon | MusicKlaxon | DistanceNextStation | StopsNextStation
                | NextStation | NextStationStop | RouteLimit | TerminalStation => stack.push(0.0),
                OdometerOfCar | DistanceStation | StopsStation => stack.unary(|_| 0.0),

                Panel2Timetable => {
                    return Err(error!(ReservedOpcode, addr; "panel2timetable"));
                }
                Unknown(_) => return Err(error!(UnknownOpcode, addr)),
            }
        }
        self.last_result = stack.top();
        Ok(self.last_result)
    }
}
