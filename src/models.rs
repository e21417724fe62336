use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Carpool,
    PublicTransport,
    TreePlanting,
    WasteSegregation,
    EnergySaving,
    Yoga,
    Quiz,
    CarbonCalculation,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Carpool,
        Category::PublicTransport,
        Category::TreePlanting,
        Category::WasteSegregation,
        Category::EnergySaving,
        Category::Yoga,
        Category::Quiz,
        Category::CarbonCalculation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Carpool => "carpool",
            Category::PublicTransport => "public-transport",
            Category::TreePlanting => "tree-planting",
            Category::WasteSegregation => "waste-segregation",
            Category::EnergySaving => "energy-saving",
            Category::Yoga => "yoga",
            Category::Quiz => "quiz",
            Category::CarbonCalculation => "carbon-calculation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarpoolPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    pub passengers: u32,
    pub start_location: String,
    pub destination: String,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTransportPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub planting_type: String,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WastePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub energy_saved: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaPayload {
    pub routine: String,
    pub age: u32,
    pub duration: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    pub score: u32,
    pub total_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonPayload {
    pub transportation_type: String,
    pub distance: f64,
}

/// Category-specific record, stored as `{"category": ..., "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "payload", rename_all = "kebab-case")]
pub enum Activity {
    Carpool(CarpoolPayload),
    PublicTransport(PublicTransportPayload),
    TreePlanting(TreePayload),
    WasteSegregation(WastePayload),
    EnergySaving(EnergyPayload),
    Yoga(YogaPayload),
    Quiz(QuizPayload),
    CarbonCalculation(CarbonPayload),
}

impl Activity {
    pub fn category(&self) -> Category {
        match self {
            Activity::Carpool(_) => Category::Carpool,
            Activity::PublicTransport(_) => Category::PublicTransport,
            Activity::TreePlanting(_) => Category::TreePlanting,
            Activity::WasteSegregation(_) => Category::WasteSegregation,
            Activity::EnergySaving(_) => Category::EnergySaving,
            Activity::Yoga(_) => Category::Yoga,
            Activity::Quiz(_) => Category::Quiz,
            Activity::CarbonCalculation(_) => Category::CarbonCalculation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    #[serde(flatten)]
    pub activity: Activity,
    pub points_awarded: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_impact: Option<f64>,
}

impl ActivityEntry {
    pub fn category(&self) -> Category {
        self.activity.category()
    }
}

/// A row of the recent-actions feed. Rows written by the browser app only
/// carry the display fields and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecentRecord {
    Entry(ActivityEntry),
    Legacy(RecentAction),
}

impl RecentRecord {
    pub fn id(&self) -> i64 {
        match self {
            RecentRecord::Entry(entry) => entry.id,
            RecentRecord::Legacy(action) => action.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: String,
    pub date: DateTime<Utc>,
    pub score: u32,
    pub total_questions: u32,
    pub percentage_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: i64,
    pub reward_id: String,
    pub title: String,
    pub points_spent: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub bio: String,
}

/// A raw form field. Browsers post numbers as strings, API clients as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ActivityForm {
    Carpool(CarpoolForm),
    PublicTransport(PublicTransportForm),
    TreePlanting(TreeForm),
    WasteSegregation(WasteForm),
    EnergySaving(EnergyForm),
    Yoga(YogaForm),
    CarbonCalculation(CarbonForm),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarpoolForm {
    pub date_time: Option<String>,
    pub driver_name: Option<String>,
    pub passengers: Option<FormValue>,
    pub start_location: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<FormValue>,
    pub vehicle_type: Option<String>,
    pub fuel_type: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicTransportForm {
    pub date_time: Option<String>,
    pub mode: Option<String>,
    pub route_number: Option<String>,
    pub start_location: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<FormValue>,
    pub ticket_cost: Option<FormValue>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeForm {
    pub date: Option<String>,
    pub species: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub planting_type: Option<String>,
    pub number: Option<FormValue>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteForm {
    pub date: Option<String>,
    pub types: Vec<String>,
    pub weight: Option<FormValue>,
    pub count: Option<FormValue>,
    pub volume: Option<FormValue>,
    pub method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyForm {
    pub date: Option<String>,
    pub time: Option<String>,
    pub action_type: Option<String>,
    pub appliance_type: Option<String>,
    pub duration: Option<FormValue>,
    pub energy_saved: Option<FormValue>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YogaForm {
    pub routine: Option<String>,
    pub age: Option<FormValue>,
    pub duration: Option<FormValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarbonForm {
    pub transportation_type: Option<String>,
    pub distance: Option<FormValue>,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAction {
    pub id: i64,
    pub action: String,
    pub date: String,
    pub points: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedActivityResponse {
    pub entry: ActivityEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub category: Category,
    pub entries: usize,
    pub points: u64,
    pub impact: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardProgress {
    pub points: u64,
    pub next_tier: Option<u64>,
    pub points_to_next: u64,
    pub tier_percent: f64,
    pub overall_percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaTotals {
    pub sessions: usize,
    pub minutes: u64,
    pub calories: u64,
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub attempts: usize,
    pub best_percentage: f64,
    pub average_percentage: f64,
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_entries: usize,
    pub points_earned: u64,
    pub points_redeemed: u64,
    pub balance: u64,
    pub streak_days: u32,
    pub carpool_count: u64,
    pub public_transport_count: u64,
    pub by_category: Vec<CategoryTotals>,
    pub most_frequent: Vec<CategoryCount>,
    pub yoga: YogaTotals,
    pub quiz: QuizSummary,
    pub rewards: RewardProgress,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonResponse {
    pub emissions_kg: f64,
    pub points_awarded: u32,
    pub entry_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyAction {
    pub action_type: &'static str,
    pub label: &'static str,
    pub default_savings: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub result: QuizResult,
    pub points_awarded: u32,
    pub feedback: &'static str,
}
