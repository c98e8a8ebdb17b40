use crate::mach::Opcode;

#[test]
fn test_decode() {
    let ops = Opcode::decode(&[60, 26, 1, 10]).unwrap();
    assert_eq!(
        ops,
        vec![
            Opcode::TrainSpeedometer,
            Opcode::MathAbs,
            Opcode::Constant,
            Opcode::MathTimes
        ]
    );
    let ops = Opcode::decode(&[2, 3, 999, 0]).unwrap();
    assert_eq!(
        ops,
        vec![Opcode::ConstantArray(3), Opcode::Unknown(999), Opcode::Halt]
    );
    assert_eq!(Opcode::decode(&[1, 2]), None);
}

#[test]
fn test_encode_keeps_array_count() {
    let codes = Opcode::encode(&[Opcode::ConstantArray(2), Opcode::MathPlus]);
    assert_eq!(codes, Some(vec![2, 2, 7]));
    let codes = Opcode::encode(&[Opcode::ConstantArray(65535)]).unwrap();
    assert_eq!(Opcode::decode(&codes), Some(vec![Opcode::ConstantArray(65535)]));
    assert_eq!(Opcode::encode(&[Opcode::ConstantArray(65536)]), None);
}

#[test]
fn test_codes_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for code in 0..=136u16 {
        if code == 2 {
            continue;
        }
        let op = Opcode::decode(&[code]).unwrap()[0];
        assert_ne!(op, Opcode::Unknown(code), "code {}", code);
        assert_eq!(op.code(), code);
        assert!(seen.insert(op.mnemonic()), "{}", op.mnemonic());
    }
    assert_eq!(Opcode::decode(&[137]).unwrap()[0], Opcode::Unknown(137));
}

#[test]
fn test_stack_effects() {
    assert_eq!(Opcode::StackCopy.stack_effect(), (1, 2));
    assert_eq!(Opcode::CompareConditional.stack_effect(), (3, 1));
    assert_eq!(Opcode::MathFusedMultiplyAdd.stack_effect(), (3, 1));
    assert_eq!(Opcode::ConstantArray(4).stack_effect(), (0, 4));
    assert_eq!(Opcode::BrightnessOfCar.stack_effect(), (1, 1));
    assert_eq!(Opcode::DistanceStation.stack_effect(), (1, 1));
    assert_eq!(Opcode::TrainCars.stack_effect(), (0, 1));
}

#[test]
fn test_purity() {
    assert!(Opcode::MathSin.is_pure());
    assert!(Opcode::CompareConditional.is_pure());
    assert!(Opcode::LogicalXor.is_pure());
    assert!(!Opcode::MathRandom.is_pure());
    assert!(!Opcode::MathRandomInt.is_pure());
    assert!(!Opcode::Value.is_pure());
    assert!(!Opcode::Delta.is_pure());
    assert!(!Opcode::TrainSpeed.is_pure());
    assert!(!Opcode::Unknown(20).is_pure());
}

#[test]
fn test_display() {
    assert_eq!(Opcode::MathPlus.to_string(), "+");
    assert_eq!(Opcode::ConstantArray(3).to_string(), "constants(3)");
    assert_eq!(Opcode::Unknown(400).to_string(), "unknown(400)");
    assert!(Opcode::PitchOfCar.takes_car_index());
    assert!(!Opcode::Pitch.takes_car_index());
}
