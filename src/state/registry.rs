use std::collections::HashSet;

use thiserror::Error;

use super::data::{AnimalId, AnimalRecord, City, ClinicId, ClinicRecord};

/// Failures of registry lookups and construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("animal {0} not found")]
    AnimalNotFound(AnimalId),

    #[error("clinic {0} not found")]
    ClinicNotFound(ClinicId),

    #[error("duplicate animal id {0}")]
    DuplicateAnimalId(AnimalId),

    #[error("duplicate clinic id {0}")]
    DuplicateClinicId(ClinicId),
}

/// The Registry holds the shelter's animals and the clinic directory.
/// It is built once at startup and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    animals: Vec<AnimalRecord>,
    clinics: Vec<ClinicRecord>,
}

impl Registry {
    /// Create the registry with the built-in shelter data.
    pub fn builtin() -> Self {
        let animals = vec![
            animal(
                1,
                "Бобик",
                "35 кг",
                "50 см",
                "bobik",
                "Бобик был найден на улице после сильного дождя. Его приютили волонтёры и вылечили.",
                "Семья фермеров, которые не смогли содержать его.",
            ),
            animal(
                2,
                "Шарик",
                "2 кг",
                "25 см",
                "sharik",
                "Шарик был оставлен на пороге приюта в маленькой коробке. Сейчас он здоров и ищет дом.",
                "Местная семья, которая переехала за границу.",
            ),
            animal(
                3,
                "Рекс",
                "28 кг",
                "45 см",
                "reks",
                "Рекс — бывший служебный пёс, который помогал в поисково-спасательных операциях.",
                "Питомник для служебных собак.",
            ),
            animal(
                4,
                "Лайка",
                "40 кг",
                "67 см",
                "laika",
                "Лайка попала в приют после того, как её прежние хозяева отказались от неё из-за её большого размера.",
                "Большая семья из деревни.",
            ),
            animal(
                5,
                "Мухтар",
                "35 кг",
                "63 см",
                "muhtar",
                "Мухтар был найден в лесу, где он искал еду. Сейчас он полностью восстановился.",
                "Неизвестно, предположительно из частного дома.",
            ),
        ];

        let clinics = vec![
            clinic(
                1,
                "Клиника здоровья животных",
                "ул. Ленина, 10",
                City::Moscow,
                &["Вакцинация", "Чипирование", "Стерилизация"],
            ),
            clinic(
                2,
                "Доверие",
                "ул. Гагарина, 25",
                City::Moscow,
                &["Хирургия", "Терапия", "Рентген"],
            ),
            clinic(
                3,
                "Зооветцентр",
                "ул. Пушкина, 12",
                City::SaintPetersburg,
                &["Вакцинация", "Груминг"],
            ),
            clinic(
                4,
                "Айболит",
                "ул. Мира, 5",
                City::Novosibirsk,
                &["Чипирование", "Диагностика", "Терапия"],
            ),
        ];

        Registry { animals, clinics }
    }

    /// Create a registry from arbitrary records.
    ///
    /// Source order is preserved. Fails if any id appears twice.
    pub fn from_records(
        animals: Vec<AnimalRecord>,
        clinics: Vec<ClinicRecord>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for record in &animals {
            if !seen.insert(record.id) {
                return Err(RegistryError::DuplicateAnimalId(record.id));
            }
        }

        let mut seen = HashSet::new();
        for record in &clinics {
            if !seen.insert(record.id) {
                return Err(RegistryError::DuplicateClinicId(record.id));
            }
        }

        Ok(Registry { animals, clinics })
    }

    /// All animals in registry order
    pub fn animals(&self) -> &[AnimalRecord] {
        &self.animals
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    /// Look up a single animal by id
    pub fn animal(&self, id: AnimalId) -> Result<&AnimalRecord, RegistryError> {
        self.animals
            .iter()
            .find(|record| record.id == id)
            .ok_or(RegistryError::AnimalNotFound(id))
    }

    /// The fixed city list offered by the clinic picker
    pub fn cities(&self) -> &'static [City] {
        &City::ALL
    }

    /// The whole clinic directory in source order
    pub fn clinics(&self) -> &[ClinicRecord] {
        &self.clinics
    }

    /// Clinics located in `city`, in directory order.
    /// An empty result is a valid answer, not an error.
    pub fn clinics_in(&self, city: City) -> Vec<&ClinicRecord> {
        self.clinics
            .iter()
            .filter(|record| record.city == city)
            .collect()
    }

    /// Look up a single clinic by id
    pub fn clinic(&self, id: ClinicId) -> Result<&ClinicRecord, RegistryError> {
        self.clinics
            .iter()
            .find(|record| record.id == id)
            .ok_or(RegistryError::ClinicNotFound(id))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn animal(
    id: u32,
    name: &str,
    weight: &str,
    size: &str,
    image_ref: &str,
    story: &str,
    origin: &str,
) -> AnimalRecord {
    AnimalRecord {
        id: AnimalId(id),
        name: name.to_string(),
        weight: weight.to_string(),
        size: size.to_string(),
        image_ref: image_ref.to_string(),
        story: story.to_string(),
        origin: origin.to_string(),
    }
}

fn clinic(id: u32, name: &str, address: &str, city: City, services: &[&str]) -> ClinicRecord {
    ClinicRecord {
        id: ClinicId(id),
        name: name.to_string(),
        address: address.to_string(),
        city,
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let registry = Registry::builtin();
        let rebuilt = Registry::from_records(
            registry.animals().to_vec(),
            registry.clinics().to_vec(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_animals_keep_source_order() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.animals().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Бобик", "Шарик", "Рекс", "Лайка", "Мухтар"]);
        assert_eq!(registry.animal_count(), 5);
    }

    #[test]
    fn test_select_animal() {
        let registry = Registry::builtin();
        let rex = registry.animal(AnimalId(3)).unwrap();
        assert_eq!(rex.name, "Рекс");
        assert_eq!(rex.weight, "28 кг");

        // Repeated lookups are structurally equal
        assert_eq!(registry.animal(AnimalId(3)).unwrap(), rex);
    }

    #[test]
    fn test_select_missing_animal() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.animal(AnimalId(42)),
            Err(RegistryError::AnimalNotFound(AnimalId(42)))
        );
    }

    #[test]
    fn test_filter_by_city() {
        let registry = Registry::builtin();

        let moscow: Vec<&str> = registry
            .clinics_in(City::Moscow)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(moscow, ["Клиника здоровья животных", "Доверие"]);

        let spb = registry.clinics_in(City::SaintPetersburg);
        assert_eq!(spb.len(), 1);
        assert_eq!(spb[0].name, "Зооветцентр");
        assert_eq!(spb[0].services, ["Вакцинация", "Груминг"]);
    }

    #[test]
    fn test_filter_empty_city() {
        let registry = Registry::from_records(Vec::new(), Vec::new()).unwrap();
        for city in City::ALL {
            assert!(registry.clinics_in(city).is_empty());
        }
    }

    #[test]
    fn test_select_missing_clinic() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.clinic(ClinicId(0)),
            Err(RegistryError::ClinicNotFound(ClinicId(0)))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let registry = Registry::builtin();
        let mut animals = registry.animals().to_vec();
        animals.push(animals[0].clone());
        assert_eq!(
            Registry::from_records(animals, Vec::new()).unwrap_err(),
            RegistryError::DuplicateAnimalId(AnimalId(1))
        );

        let twice = clinic(7, "A", "B", City::Moscow, &[]);
        assert_eq!(
            Registry::from_records(Vec::new(), vec![twice.clone(), twice]).unwrap_err(),
            RegistryError::DuplicateClinicId(ClinicId(7))
        );
    }

    #[test]
    fn test_services_keep_duplicates() {
        let record = clinic(1, "A", "B", City::Novosibirsk, &["Терапия", "Терапия"]);
        let registry = Registry::from_records(Vec::new(), vec![record]).unwrap();
        assert_eq!(registry.clinic(ClinicId(1)).unwrap().services, ["Терапия", "Терапия"]);
    }

    fn city_strategy() -> impl Strategy<Value = City> {
        prop_oneof![
            Just(City::Moscow),
            Just(City::SaintPetersburg),
            Just(City::Novosibirsk),
        ]
    }

    proptest! {
        #[test]
        fn filter_returns_only_matching_in_order(
            cities in proptest::collection::vec(city_strategy(), 0..24),
            wanted in city_strategy(),
        ) {
            let clinics: Vec<ClinicRecord> = cities
                .iter()
                .enumerate()
                .map(|(i, &city)| clinic(i as u32, &format!("clinic {i}"), "addr", city, &[]))
                .collect();
            let registry = Registry::from_records(Vec::new(), clinics).unwrap();

            let filtered = registry.clinics_in(wanted);
            prop_assert!(filtered.iter().all(|c| c.city == wanted));
            prop_assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));

            let expected = cities.iter().filter(|&&c| c == wanted).count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn lookup_of_absent_id_is_not_found(id in 6u32..10_000) {
            let registry = Registry::builtin();
            prop_assert_eq!(
                registry.animal(AnimalId(id)),
                Err(RegistryError::AnimalNotFound(AnimalId(id)))
            );
            prop_assert_eq!(
                registry.clinic(ClinicId(id)),
                Err(RegistryError::ClinicNotFound(ClinicId(id)))
            );
        }
    }
}
