use crate::errors::RewardError;
use crate::ledger::{self, keys, LedgerStore};
use crate::models::Redemption;
use crate::stats::points_balance;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points_required: u64,
    pub category: &'static str,
}

pub static CATALOG: [Reward; 8] = [
    Reward {
        id: "amazon-10",
        title: "$10 Amazon Gift Card",
        description: "A $10 gift card for your next purchase.",
        points_required: 1000,
        category: "shopping",
    },
    Reward {
        id: "zoo-tickets",
        title: "Two Zoo Tickets",
        description: "Free admission for two to your local zoo.",
        points_required: 750,
        category: "experience",
    },
    Reward {
        id: "plant-tree",
        title: "Plant a Tree in Your Name",
        description: "A tree planted in a deforested area, with a certificate.",
        points_required: 500,
        category: "environment",
    },
    Reward {
        id: "sustainable-cup",
        title: "Reusable Coffee Cup",
        description: "An insulated cup made from recycled materials.",
        points_required: 350,
        category: "lifestyle",
    },
    Reward {
        id: "garden-kit",
        title: "Home Garden Starter Kit",
        description: "Seeds, pots and soil to start a home garden.",
        points_required: 450,
        category: "lifestyle",
    },
    Reward {
        id: "eco-workshop",
        title: "Sustainability Workshop",
        description: "An online workshop on sustainable living.",
        points_required: 200,
        category: "education",
    },
    Reward {
        id: "donation-wwf",
        title: "$25 Donation to WWF",
        description: "A donation in your name to the World Wildlife Fund.",
        points_required: 600,
        category: "charity",
    },
    Reward {
        id: "premium-month",
        title: "1 Month Premium Membership",
        description: "Advanced tracking features and exclusive content.",
        points_required: 800,
        category: "membership",
    },
];

pub fn find(id: &str) -> Option<&'static Reward> {
    CATALOG.iter().find(|reward| reward.id == id)
}

pub fn by_category(category: Option<&str>) -> Vec<&'static Reward> {
    CATALOG
        .iter()
        .filter(|reward| category.is_none_or(|category| reward.category == category))
        .collect()
}

pub fn redeem<S: LedgerStore + ?Sized>(store: &mut S, reward_id: &str) -> Result<Redemption, RewardError> {
    redeem_at(store, reward_id, Utc::now())
}

pub fn redeem_at<S: LedgerStore + ?Sized>(
    store: &mut S,
    reward_id: &str,
    now: DateTime<Utc>,
) -> Result<Redemption, RewardError> {
    let reward = find(reward_id).ok_or_else(|| RewardError::UnknownReward(reward_id.to_string()))?;
    let balance = points_balance(store);
    if balance < reward.points_required {
        return Err(RewardError::InsufficientPoints {
            needed: reward.points_required - balance,
        });
    }

    let mut redemptions: Vec<Redemption> = ledger::load(store, keys::REDEMPTIONS);
    let newest = redemptions.first().map_or(i64::MIN, |r| r.id);
    let redemption = Redemption {
        id: now.timestamp_millis().max(newest.saturating_add(1)),
        reward_id: reward.id.to_string(),
        title: reward.title.to_string(),
        points_spent: reward.points_required,
        timestamp: now,
    };
    redemptions.insert(0, redemption.clone());
    ledger::save(store, keys::REDEMPTIONS, &redemptions)?;

    info!(
        "redeemed {} for {} points ({} left)",
        reward.id,
        reward.points_required,
        balance - reward.points_required
    );
    Ok(redemption)
}
