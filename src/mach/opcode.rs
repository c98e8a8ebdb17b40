use std::convert::TryFrom;

/// Raw code of `ConstantArray`; the element count follows it in a raw stream.
pub const CONSTANT_ARRAY: u16 = 2;

macro_rules! instruction_set {
    ($(
        $(#[$doc:meta])*
        $name:ident = $code:literal, $mnemonic:literal, $pops:literal => $pushes:literal;
    )*) => {
        /// ## Animation function instruction set
        ///
        /// The machine has no registers and no jumps.
        /// Every operation is performed on the stack.
        ///
        /// For example: `speedometer abs 3.6 *` compiles to
        /// `[TrainSpeedometer, MathAbs, Constant, MathTimes]` with `[3.6]`
        /// in the constant pool.
        ///
        /// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum Opcode {
            $( $(#[$doc])* $name, )*
            /// Push the next `n` constants from the pool, in order.
            ConstantArray(usize),
            /// A raw code outside the instruction set. Evaluating it fails.
            Unknown(u16),
        }

        impl Opcode {
            /// Maps a single raw code. `ConstantArray` needs its operand and is
            /// decoded by [`Opcode::decode`] instead.
            fn from_code(code: u16) -> Opcode {
                match code {
                    $( $code => Opcode::$name, )*
                    _ => Opcode::Unknown(code),
                }
            }

            pub fn code(&self) -> u16 {
                match self {
                    $( Opcode::$name => $code, )*
                    Opcode::ConstantArray(_) => CONSTANT_ARRAY,
                    Opcode::Unknown(code) => *code,
                }
            }

            pub fn mnemonic(&self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                    Opcode::ConstantArray(_) => "constants",
                    Opcode::Unknown(_) => "unknown",
                }
            }

            /// Number of values popped and pushed, in that order.
            pub fn stack_effect(&self) -> (usize, usize) {
                match self {
                    $( Opcode::$name => ($pops, $pushes), )*
                    Opcode::ConstantArray(n) => (0, *n),
                    Opcode::Unknown(_) => (0, 0),
                }
            }
        }
    };
}

instruction_set! {
    // *** System
    /// Stop evaluating; the current top of stack becomes the result.
    Halt = 0, "halt", 0 => 0;
    /// Push the next constant from the pool.
    Constant = 1, "constant", 0 => 1;
    /// Push the result of the previous evaluation.
    Value = 3, "value", 0 => 1;
    /// Push the time elapsed since the previous evaluation.
    Delta = 4, "delta", 0 => 1;

    // *** Stack manipulation
    StackCopy = 5, "~", 1 => 2;
    StackSwap = 6, "<>", 2 => 2;

    // *** Arithmetic
    MathPlus = 7, "+", 2 => 1;
    MathSubtract = 8, "-", 2 => 1;
    MathMinus = 9, "minus", 1 => 1;
    MathTimes = 10, "*", 2 => 1;
    MathDivide = 11, "/", 2 => 1;
    MathReciprocal = 12, "reciprocal", 1 => 1;
    MathPower = 13, "power", 2 => 1;
    MathRandom = 14, "random", 2 => 1;
    MathRandomInt = 15, "randomint", 2 => 1;
    MathIncrement = 16, "++", 1 => 1;
    MathDecrement = 17, "--", 1 => 1;
    MathFusedMultiplyAdd = 18, "fma", 3 => 1;
    MathQuotient = 19, "quotient", 2 => 1;
    MathMod = 20, "mod", 2 => 1;
    MathFloor = 21, "floor", 1 => 1;
    MathCeiling = 22, "ceiling", 1 => 1;
    MathRound = 23, "round", 1 => 1;
    MathMin = 24, "min", 2 => 1;
    MathMax = 25, "max", 2 => 1;
    MathAbs = 26, "abs", 1 => 1;
    MathSign = 27, "sign", 1 => 1;
    MathExp = 28, "exp", 1 => 1;
    MathLog = 29, "log", 1 => 1;
    MathSqrt = 30, "sqrt", 1 => 1;
    MathSin = 31, "sin", 1 => 1;
    MathCos = 32, "cos", 1 => 1;
    MathTan = 33, "tan", 1 => 1;
    MathArcTan = 34, "arctan", 1 => 1;

    // *** Comparison
    CompareEqual = 35, "==", 2 => 1;
    CompareUnequal = 36, "!=", 2 => 1;
    CompareLess = 37, "<", 2 => 1;
    CompareGreater = 38, ">", 2 => 1;
    CompareLessEqual = 39, "<=", 2 => 1;
    CompareGreaterEqual = 40, ">=", 2 => 1;
    /// `condition a b ?` leaves `a` when the condition is non-zero, else `b`.
    CompareConditional = 41, "?", 3 => 1;

    // *** Logical
    LogicalNot = 42, "!", 1 => 1;
    LogicalAnd = 43, "&", 2 => 1;
    LogicalOr = 44, "|", 2 => 1;
    LogicalNand = 45, "!&", 2 => 1;
    LogicalNor = 46, "!|", 2 => 1;
    LogicalXor = 47, "^", 2 => 1;

    // *** Object, time and camera
    CurrentObjectState = 48, "currentstate", 0 => 1;
    TimeSecondsSinceMidnight = 49, "time", 0 => 1;
    CameraDistance = 50, "cameradistance", 0 => 1;
    CameraXDistance = 51, "cameraxdistance", 0 => 1;
    CameraYDistance = 52, "cameraydistance", 0 => 1;
    CameraZDistance = 53, "camerazdistance", 0 => 1;
    /// `0` for the interior (cab) view, `1` for any other view.
    CameraView = 54, "cameramode", 0 => 1;

    // *** Train and car
    PlayerTrain = 55, "playertrain", 0 => 1;
    TrainCars = 56, "cars", 0 => 1;
    TrainDestination = 57, "destination", 0 => 1;
    TrainSpeed = 58, "speed", 0 => 1;
    TrainSpeedOfCar = 59, "speedindex", 1 => 1;
    TrainSpeedometer = 60, "speedometer", 0 => 1;
    TrainSpeedometerOfCar = 61, "speedometerindex", 1 => 1;
    TrainAcceleration = 62, "acceleration", 0 => 1;
    TrainAccelerationOfCar = 63, "accelerationindex", 1 => 1;
    TrainAccelerationMotor = 64, "accelerationmotor", 0 => 1;
    TrainAccelerationMotorOfCar = 65, "accelerationmotorindex", 1 => 1;
    TrainDistance = 66, "distance", 0 => 1;
    TrainDistanceToCar = 67, "distanceindex", 1 => 1;
    TrainTrackDistance = 68, "trackdistance", 0 => 1;
    TrainTrackDistanceToCar = 69, "trackdistanceindex", 1 => 1;
    CurveRadius = 70, "curveradius", 0 => 1;
    CurveRadiusOfCar = 71, "curveradiusindex", 1 => 1;
    FrontAxleCurveRadius = 72, "frontaxlecurveradius", 0 => 1;
    FrontAxleCurveRadiusOfCar = 73, "frontaxlecurveradiusindex", 1 => 1;
    RearAxleCurveRadius = 74, "rearaxlecurveradius", 0 => 1;
    RearAxleCurveRadiusOfCar = 75, "rearaxlecurveradiusindex", 1 => 1;
    CurveCant = 76, "curvecant", 0 => 1;
    CurveCantOfCar = 77, "curvecantindex", 1 => 1;
    Pitch = 78, "pitch", 0 => 1;
    PitchOfCar = 79, "pitchindex", 1 => 1;
    Odometer = 80, "odometer", 0 => 1;
    OdometerOfCar = 81, "odometerindex", 1 => 1;

    // *** Doors
    Doors = 82, "doors", 0 => 1;
    DoorsIndex = 83, "doorsindex", 1 => 1;
    LeftDoors = 84, "leftdoors", 0 => 1;
    LeftDoorsIndex = 85, "leftdoorsindex", 1 => 1;
    RightDoors = 86, "rightdoors", 0 => 1;
    RightDoorsIndex = 87, "rightdoorsindex", 1 => 1;
    LeftDoorsTarget = 88, "leftdoorstarget", 0 => 1;
    LeftDoorsTargetIndex = 89, "leftdoorstargetindex", 1 => 1;
    RightDoorsTarget = 90, "rightdoorstarget", 0 => 1;
    RightDoorsTargetIndex = 91, "rightdoorstargetindex", 1 => 1;
    PilotLamp = 92, "pilotlamp", 0 => 1;
    PassAlarm = 93, "passalarm", 0 => 1;
    StationAdjustAlarm = 94, "stationadjustalarm", 0 => 1;

    // *** Handles
    ReverserNotch = 95, "reversernotch", 0 => 1;
    PowerNotch = 96, "powernotch", 0 => 1;
    PowerNotches = 97, "powernotches", 0 => 1;
    BrakeNotch = 98, "brakenotch", 0 => 1;
    BrakeNotches = 99, "brakenotches", 0 => 1;
    BrakeNotchLinear = 100, "brakenotchlinear", 0 => 1;
    BrakeNotchesLinear = 101, "brakenotcheslinear", 0 => 1;
    EmergencyBrake = 102, "emergencybrake", 0 => 1;
    Klaxon = 103, "klaxon", 0 => 1;
    PrimaryKlaxon = 104, "primaryklaxon", 0 => 1;
    SecondaryKlaxon = 105, "secondaryklaxon", 0 => 1;
    MusicKlaxon = 106, "musicklaxon", 0 => 1;
    HasAirBrake = 107, "hasairbrake", 0 => 1;
    HoldBrake = 108, "holdbrake", 0 => 1;
    HasHoldBrake = 109, "hasholdbrake", 0 => 1;
    ConstSpeed = 110, "constspeed", 0 => 1;
    HasConstSpeed = 111, "hasconstspeed", 0 => 1;

    // *** Brake system pressures
    BrakeMainReservoir = 112, "mainreservoir", 0 => 1;
    BrakeMainReservoirOfCar = 113, "mainreservoirindex", 1 => 1;
    BrakeEqualizingReservoir = 114, "equalizingreservoir", 0 => 1;
    BrakeEqualizingReservoirOfCar = 115, "equalizingreservoirindex", 1 => 1;
    BrakeBrakePipe = 116, "brakepipe", 0 => 1;
    BrakeBrakePipeOfCar = 117, "brakepipeindex", 1 => 1;
    BrakeBrakeCylinder = 118, "brakecylinder", 0 => 1;
    BrakeBrakeCylinderOfCar = 119, "brakecylinderindex", 1 => 1;
    BrakeStraightAirPipe = 120, "straightairpipe", 0 => 1;
    BrakeStraightAirPipeOfCar = 121, "straightairpipeindex", 1 => 1;

    // *** Safety plugin
    SafetyPluginAvailable = 122, "hasplugin", 0 => 1;
    /// Pops a panel index.
    SafetyPluginState = 123, "pluginstate", 1 => 1;

    // *** Timetable and stations
    TimetableVisible = 124, "timetable", 0 => 1;
    DistanceNextStation = 125, "distancenextstation", 0 => 1;
    StopsNextStation = 126, "stopsnextstation", 0 => 1;
    NextStation = 127, "nextstation", 0 => 1;
    NextStationStop = 128, "nextstationstop", 0 => 1;
    RouteLimit = 129, "routelimit", 0 => 1;
    TerminalStation = 130, "terminalstation", 0 => 1;
    /// Pops a station index.
    DistanceStation = 131, "distancestationindex", 1 => 1;
    /// Pops a station index.
    StopsStation = 132, "stopsstationindex", 1 => 1;

    // *** Sections
    SectionAspectNumber = 133, "section", 0 => 1;

    /// Reserved for the panel2 timetable. Never valid in an object script.
    Panel2Timetable = 134, "panel2timetable", 0 => 1;
    BrightnessOfCar = 135, "brightnessindex", 1 => 1;
    TrainCarNumber = 136, "carnumber", 0 => 1;
}

impl Opcode {
    /// Decodes a raw instruction stream. Unrecognized codes become
    /// [`Opcode::Unknown`]; only a `ConstantArray` missing its count fails.
    pub fn decode(codes: &[u16]) -> Option<Vec<Opcode>> {
        let mut ops = Vec::with_capacity(codes.len());
        let mut iter = codes.iter();
        while let Some(&code) = iter.next() {
            if code == CONSTANT_ARRAY {
                let n = *iter.next()?;
                ops.push(Opcode::ConstantArray(n as usize));
            } else {
                ops.push(Opcode::from_code(code));
            }
        }
        Some(ops)
    }

    /// Encodes a raw instruction stream. `None` when a `ConstantArray`
    /// count does not fit in a raw code.
    pub fn encode(ops: &[Opcode]) -> Option<Vec<u16>> {
        let mut codes = Vec::with_capacity(ops.len());
        for op in ops {
            codes.push(op.code());
            if let Opcode::ConstantArray(n) = op {
                codes.push(u16::try_from(*n).ok()?);
            }
        }
        Some(codes)
    }

    /// True when the result depends only on the stack and the constant pool.
    pub fn is_pure(&self) -> bool {
        use Opcode::*;
        match self {
            Halt | Constant | ConstantArray(_) | StackCopy | StackSwap => true,
            MathRandom | MathRandomInt | Unknown(_) => false,
            op => op.is_arithmetic() || op.is_comparison() || op.is_logical(),
        }
    }

    fn is_arithmetic(&self) -> bool {
        (Opcode::MathPlus.code()..=Opcode::MathArcTan.code()).contains(&self.code())
    }

    fn is_comparison(&self) -> bool {
        (Opcode::CompareEqual.code()..=Opcode::CompareConditional.code()).contains(&self.code())
    }

    fn is_logical(&self) -> bool {
        (Opcode::LogicalNot.code()..=Opcode::LogicalXor.code()).contains(&self.code())
    }

    /// True when the operand popped by this instruction is a car index.
    pub fn takes_car_index(&self) -> bool {
        use Opcode::*;
        matches!(
            self,
            TrainSpeedOfCar
                | TrainSpeedometerOfCar
                | TrainAccelerationOfCar
                | TrainAccelerationMotorOfCar
                | TrainDistanceToCar
                | TrainTrackDistanceToCar
                | CurveRadiusOfCar
                | FrontAxleCurveRadiusOfCar
                | RearAxleCurveRadiusOfCar
                | CurveCantOfCar
                | PitchOfCar
                | OdometerOfCar
                | DoorsIndex
                | LeftDoorsIndex
                | RightDoorsIndex
                | LeftDoorsTargetIndex
                | RightDoorsTargetIndex
                | BrakeMainReservoirOfCar
                | BrakeEqualizingReservoirOfCar
                | BrakeBrakePipeOfCar
                | BrakeBrakeCylinderOfCar
                | BrakeStraightAirPipeOfCar
                | BrightnessOfCar
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Opcode::ConstantArray(n) => write!(f, "constants({})", n),
            Opcode::Unknown(code) => write!(f, "unknown({})", code),
            op => write!(f, "{}", op.mnemonic()),
        }
    }
}
