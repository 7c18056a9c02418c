//! 가스 이름 → 몰질량 표. 프로세스 시작 후 읽기 전용이다.

use std::sync::OnceLock;

use crate::flow::error::FlowError;

/// 가스 한 종류의 정의.
#[derive(Debug, Clone, PartialEq)]
pub struct GasSpecies {
    pub name: &'static str,
    /// 몰질량 [kg/mol]
    pub molar_mass: f64,
}

/// 두 순수 가스를 몰분율로 섞은 혼합 가스 선언.
#[derive(Debug, Clone, Copy)]
pub struct GasBlend {
    pub name: &'static str,
    pub primary: &'static str,
    /// 주 성분 분율 (나머지는 부 성분)
    pub primary_fraction: f64,
    pub secondary: &'static str,
}

const PURE_GASES: [(&str, f64); 9] = [
    ("N2", 0.028),
    ("Ar", 0.040),
    ("He", 0.004),
    ("O2", 0.032),
    ("H2", 0.002),
    ("C2H2", 0.026),
    ("CH4", 0.016),
    ("Air", 0.02897),
    ("CO2", 0.044),
];

/// 포밍 가스: N2/H2 95:5, Ar/H2 97:3
const FORMING_GASES: [GasBlend; 2] = [
    GasBlend {
        name: "Forming Gas1",
        primary: "N2",
        primary_fraction: 0.95,
        secondary: "H2",
    },
    GasBlend {
        name: "Forming Gas2",
        primary: "Ar",
        primary_fraction: 0.97,
        secondary: "H2",
    },
];

/// 가스 물성 표.
#[derive(Debug, Clone)]
pub struct GasCatalog {
    species: Vec<GasSpecies>,
}

impl GasCatalog {
    /// 기본 가스 표. 최초 호출 시 한 번만 만든다.
    pub fn standard() -> &'static GasCatalog {
        static CATALOG: OnceLock<GasCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let species = PURE_GASES
                .iter()
                .map(|&(name, molar_mass)| GasSpecies { name, molar_mass })
                .collect();
            GasCatalog::with_blends(species, &FORMING_GASES)
        })
    }

    /// 순수 가스 목록 뒤에 혼합 가스를 계산해 붙인다.
    /// 혼합 성분은 반드시 앞선 목록에 있어야 한다.
    fn with_blends(mut species: Vec<GasSpecies>, blends: &[GasBlend]) -> Self {
        for blend in blends {
            let m1 = molar_mass_of(&species, blend.primary);
            let m2 = molar_mass_of(&species, blend.secondary);
            debug_assert!(
                m1.is_some() && m2.is_some(),
                "blend {} references an unknown component ({} / {})",
                blend.name,
                blend.primary,
                blend.secondary
            );
            if let (Some(m1), Some(m2)) = (m1, m2) {
                let molar_mass =
                    blend.primary_fraction * m1 + (1.0 - blend.primary_fraction) * m2;
                species.push(GasSpecies {
                    name: blend.name,
                    molar_mass,
                });
            }
        }
        debug_assert!(species.iter().all(|s| s.molar_mass > 0.0));
        Self { species }
    }

    pub fn get(&self, name: &str) -> Option<&GasSpecies> {
        self.species.iter().find(|s| s.name == name)
    }

    /// 몰질량 [kg/mol] 을 조회한다.
    pub fn lookup(&self, name: &str) -> Result<f64, FlowError> {
        self.get(name)
            .map(|s| s.molar_mass)
            .ok_or_else(|| FlowError::UnknownGas {
                name: name.to_string(),
            })
    }

    /// 선언 순서대로 가스 이름을 반환한다.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.species.iter().map(|s| s.name)
    }

    pub fn species(&self) -> &[GasSpecies] {
        &self.species
    }
}

fn molar_mass_of(species: &[GasSpecies], name: &str) -> Option<f64> {
    species.iter().find(|s| s.name == name).map(|s| s.molar_mass)
}

/// 기본 가스 표에서 몰질량을 조회한다.
pub fn lookup(name: &str) -> Result<f64, FlowError> {
    GasCatalog::standard().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forming_gas_molar_masses() {
        let fg1 = lookup("Forming Gas1").unwrap();
        let fg2 = lookup("Forming Gas2").unwrap();
        assert!((fg1 - 0.0267).abs() < 1e-12);
        assert!((fg2 - 0.03886).abs() < 1e-12);
    }

    #[test]
    fn every_declared_blend_is_present() {
        let catalog = GasCatalog::standard();
        for blend in FORMING_GASES {
            assert!(catalog.get(blend.name).is_some(), "{}", blend.name);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown component")]
    fn blend_with_missing_component_panics() {
        let catalog = GasCatalog::with_blends(
            vec![GasSpecies {
                name: "N2",
                molar_mass: 0.028,
            }],
            &FORMING_GASES,
        );
        assert_eq!(catalog.names().count(), 1);
    }
}
