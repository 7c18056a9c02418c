//! 가스 표 회귀 테스트.
use tube_calculator::flow::FlowError;
use tube_calculator::gas::{lookup, GasCatalog};

#[test]
fn catalog_order_and_size() {
    let names: Vec<&str> = GasCatalog::standard().names().collect();
    assert_eq!(
        names,
        vec![
            "N2",
            "Ar",
            "He",
            "O2",
            "H2",
            "C2H2",
            "CH4",
            "Air",
            "CO2",
            "Forming Gas1",
            "Forming Gas2"
        ]
    );
}

#[test]
fn all_molar_masses_positive() {
    assert!(GasCatalog::standard()
        .species()
        .iter()
        .all(|s| s.molar_mass > 0.0));
}

#[test]
fn forming_gas_blends() {
    assert!((lookup("Forming Gas1").unwrap() - 0.0267).abs() < 1e-12);
    assert!((lookup("Forming Gas2").unwrap() - 0.03886).abs() < 1e-12);
}

#[test]
fn pure_gas_values() {
    assert_eq!(lookup("N2").unwrap(), 0.028);
    assert_eq!(lookup("Air").unwrap(), 0.02897);
    assert_eq!(GasCatalog::standard().get("He").unwrap().molar_mass, 0.004);
}

#[test]
fn unknown_gas() {
    assert_eq!(
        lookup("Xenon"),
        Err(FlowError::UnknownGas {
            name: "Xenon".into()
        })
    );
    // 이름은 대소문자를 구분한다
    assert!(lookup("n2").is_err());
}

#[test]
fn shared_table_is_same_instance() {
    let a = GasCatalog::standard() as *const GasCatalog;
    let b = std::thread::spawn(|| GasCatalog::standard() as *const GasCatalog as usize)
        .join()
        .unwrap();
    assert_eq!(a as usize, b);
}
