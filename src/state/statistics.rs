/// Shelter statistics shown on the statistics screen
///
/// The figures are fixed literals. They are deliberately not computed
/// from the registry.

/// Weights (kg) plotted by the weight distribution chart
pub const WEIGHT_CHART_KG: [u32; 5] = [2, 5, 15, 35, 50];

/// Bars strictly above this weight are drawn as heavy
pub const HEAVY_THRESHOLD_KG: u32 = 30;

/// Headline numbers of the shelter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total: u32,
    pub average_weight_kg: u32,
    pub large: u32,
    pub small: u32,
    pub vaccinated: u32,
    pub unvaccinated: u32,
}

impl Statistics {
    pub const SHELTER: Statistics = Statistics {
        total: 5,
        average_weight_kg: 23,
        large: 2,
        small: 3,
        vaccinated: 4,
        unvaccinated: 1,
    };

    /// Fraction of vaccinated animals (0.0 to 1.0)
    pub fn vaccinated_share(&self) -> f32 {
        share(self.vaccinated, self.total)
    }

    /// Fraction of unvaccinated animals (0.0 to 1.0)
    pub fn unvaccinated_share(&self) -> f32 {
        share(self.unvaccinated, self.total)
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::SHELTER
    }
}

fn share(part: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    part as f32 / total as f32
}

/// Colour class of a chart bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Heavy,
    Light,
}

impl BarTone {
    pub fn for_weight(weight_kg: u32) -> Self {
        if weight_kg > HEAVY_THRESHOLD_KG {
            BarTone::Heavy
        } else {
            BarTone::Light
        }
    }
}

/// One bar of the weight distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightBar {
    pub weight_kg: u32,
    pub tone: BarTone,
}

/// Project the chart literals into bars, in chart order
pub fn weight_bars() -> Vec<WeightBar> {
    WEIGHT_CHART_KG
        .iter()
        .map(|&weight_kg| WeightBar {
            weight_kg,
            tone: BarTone::for_weight(weight_kg),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one() {
        let stats = Statistics::SHELTER;
        assert!((stats.vaccinated_share() - 0.8).abs() < f32::EPSILON);
        assert!((stats.unvaccinated_share() - 0.2).abs() < f32::EPSILON);
        assert!((stats.vaccinated_share() + stats.unvaccinated_share() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_total() {
        let stats = Statistics {
            total: 0,
            ..Statistics::SHELTER
        };
        assert_eq!(stats.vaccinated_share(), 0.0);
        assert_eq!(stats.unvaccinated_share(), 0.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(BarTone::for_weight(30), BarTone::Light);
        assert_eq!(BarTone::for_weight(31), BarTone::Heavy);
    }

    #[test]
    fn test_weight_bars() {
        let tones: Vec<BarTone> = weight_bars().iter().map(|bar| bar.tone).collect();
        assert_eq!(
            tones,
            [
                BarTone::Light,
                BarTone::Light,
                BarTone::Light,
                BarTone::Heavy,
                BarTone::Heavy
            ]
        );
    }
}
