//! Points and impact rules, one function per activity category.
//!
//! Inputs are assumed validated; see `logger` for the checks.

pub const CARBON_POINTS: u32 = 2;
pub const CARPOOL_POINTS: u32 = 5;
pub const PUBLIC_TRANSPORT_POINTS: u32 = 5;
pub const TREE_POINTS: u32 = 20;
pub const WASTE_POINTS: u32 = 3;
pub const ENERGY_POINTS: u32 = 3;
pub const QUIZ_POINTS_PER_ANSWER: u32 = 5;

/// kg CO2 captured per tree per year.
pub const CO2_PER_TREE_KG: f64 = 25.0;
const KG_PER_WASTE_ITEM: f64 = 0.5;
const KG_PER_WASTE_LITRE: f64 = 0.2;
const YOGA_MET: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Award {
    pub points: u32,
    pub impact: Option<f64>,
}

impl Award {
    fn points(points: u32) -> Self {
        Self { points, impact: None }
    }
}

/// kg CO2 per km; unknown modes are billed as a car.
pub fn emission_factor(transportation_type: &str) -> f64 {
    match transportation_type {
        "bus" => 0.08,
        "train" => 0.04,
        "bike" => 0.0,
        _ => 0.12,
    }
}

pub fn carbon_footprint(transportation_type: &str, distance_km: f64) -> Award {
    Award {
        points: CARBON_POINTS,
        impact: Some(round2(distance_km * emission_factor(transportation_type))),
    }
}

pub fn carpool() -> Award {
    Award::points(CARPOOL_POINTS)
}

pub fn public_transport() -> Award {
    Award::points(PUBLIC_TRANSPORT_POINTS)
}

pub fn tree_planting(trees: u32) -> Award {
    Award {
        points: TREE_POINTS,
        impact: Some(f64::from(trees) * CO2_PER_TREE_KG),
    }
}

/// Only the first measurement present counts: weight, then count, then volume.
pub fn waste_diverted_kg(weight: Option<f64>, count: Option<u32>, volume: Option<f64>) -> f64 {
    if let Some(weight) = weight {
        weight
    } else if let Some(count) = count {
        f64::from(count) * KG_PER_WASTE_ITEM
    } else if let Some(volume) = volume {
        volume * KG_PER_WASTE_LITRE
    } else {
        0.0
    }
}

pub fn waste_segregation(weight: Option<f64>, count: Option<u32>, volume: Option<f64>) -> Award {
    Award {
        points: WASTE_POINTS,
        impact: Some(waste_diverted_kg(weight, count, volume)),
    }
}

pub fn waste_summary(impact_kg: f64) -> String {
    if impact_kg > 0.0 {
        format!("Diverted {impact_kg:.2} kg from landfill")
    } else {
        String::new()
    }
}

pub fn energy_saving(kwh: f64) -> Award {
    Award {
        points: ENERGY_POINTS,
        impact: Some(kwh),
    }
}

/// Suggested kWh saved per energy action. Users may override it.
pub fn default_energy_savings(action_type: &str) -> Option<f64> {
    ENERGY_ACTIONS
        .iter()
        .find(|(value, _, _)| *value == action_type)
        .map(|(_, _, kwh)| *kwh)
}

/// (action type, label, default kWh)
pub static ENERGY_ACTIONS: [(&str, &str, f64); 8] = [
    ("lights_off", "Turned off lights", 0.1),
    ("ac_adjusted", "AC temperature adjusted", 0.5),
    ("computer_saving", "Computer power saving", 0.2),
    ("tv_off", "TV turned off", 0.15),
    ("fridge_opt", "Fridge optimization", 0.3),
    ("washing_opt", "Efficient washing", 0.4),
    ("microwave", "Microwave usage", 0.1),
    ("fan_adjusted", "Fan speed adjusted", 0.05),
];

pub fn estimated_weight_kg(age: u32) -> f64 {
    let offset = (35.0 - f64::from(age)).abs();
    (65.0 - offset * 0.15).max(50.0)
}

pub fn yoga_calories(age: u32, duration_minutes: u32) -> u32 {
    let kcal = YOGA_MET * estimated_weight_kg(age) * (f64::from(duration_minutes) / 60.0);
    kcal.round() as u32
}

pub fn yoga_points(duration_minutes: u32) -> u32 {
    (f64::from(duration_minutes) / 2.0).round() as u32
}

pub fn yoga(age: u32, duration_minutes: u32) -> Award {
    Award {
        points: yoga_points(duration_minutes),
        impact: Some(f64::from(yoga_calories(age, duration_minutes))),
    }
}

pub fn quiz(correct: u32) -> Award {
    Award::points(correct.saturating_mul(QUIZ_POINTS_PER_ANSWER))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_uses_factor_and_rounds() {
        assert_eq!(carbon_footprint("car", 10.0).impact, Some(1.2));
        assert_eq!(carbon_footprint("bus", 12.345).impact, Some(0.99));
        assert_eq!(carbon_footprint("train", 7.0).impact, Some(0.28));
        assert_eq!(carbon_footprint("bike", 40.0).impact, Some(0.0));
        assert_eq!(carbon_footprint("car", 10.0).points, 2);
    }

    #[test]
    fn carbon_unknown_mode_falls_back_to_car() {
        assert_eq!(carbon_footprint("rocket", 10.0), carbon_footprint("car", 10.0));
    }

    #[test]
    fn fixed_point_categories() {
        assert_eq!(carpool().points, 5);
        assert_eq!(public_transport().points, 5);
        assert_eq!(tree_planting(1).points, 20);
        assert_eq!(tree_planting(9).points, 20);
        assert_eq!(energy_saving(0.5).points, 3);
        assert_eq!(waste_segregation(None, None, None).points, 3);
    }

    #[test]
    fn tree_impact_scales_with_count() {
        assert_eq!(tree_planting(3).impact, Some(75.0));
    }

    #[test]
    fn waste_priority_never_sums() {
        assert_eq!(waste_diverted_kg(Some(2.5), Some(10), Some(100.0)), 2.5);
        assert_eq!(waste_diverted_kg(None, Some(3), Some(100.0)), 1.5);
        assert_eq!(waste_diverted_kg(None, None, Some(10.0)), 2.0);
        assert_eq!(waste_diverted_kg(None, None, None), 0.0);
    }

    #[test]
    fn waste_summary_format() {
        assert_eq!(waste_summary(2.5), "Diverted 2.50 kg from landfill");
        assert_eq!(waste_summary(0.0), "");
    }

    #[test]
    fn yoga_points_round_half_up() {
        assert_eq!(yoga_points(1), 1);
        assert_eq!(yoga_points(10), 5);
        assert_eq!(yoga_points(37), 19);
        assert_eq!(yoga_points(60), 30);
    }

    #[test]
    fn yoga_calories_peak_at_35() {
        assert_eq!(estimated_weight_kg(35), 65.0);
        assert_eq!(yoga_calories(35, 60), 195);
        assert!(yoga_calories(35, 30) >= yoga_calories(30, 30));
        assert!(yoga_calories(30, 30) >= yoga_calories(20, 30));
        assert!(yoga_calories(50, 30) >= yoga_calories(80, 30));
        assert_eq!(estimated_weight_kg(200), 50.0);
    }

    #[test]
    fn energy_defaults_lookup() {
        assert_eq!(default_energy_savings("lights_off"), Some(0.1));
        assert_eq!(default_energy_savings("ac_adjusted"), Some(0.5));
        assert_eq!(default_energy_savings("unknown"), None);
    }

    #[test]
    fn quiz_points_per_correct_answer() {
        assert_eq!(quiz(0).points, 0);
        assert_eq!(quiz(3).points, 15);
    }
}
