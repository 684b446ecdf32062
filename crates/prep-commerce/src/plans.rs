//! Pricing plans and the plan catalog.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::ids::{ItemId, PlanId};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Category tag carried by plan line items.
pub const PLAN_ITEM_KIND: &str = "test-series";

/// A purchasable test-series plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier.
    pub id: PlanId,
    /// Display name.
    pub name: String,
    /// Base price in whole rupees, before discount.
    pub price_base: i64,
    /// Discount percentage (0-100).
    pub discount_pct: u8,
    /// Descriptive series count (e.g. "12 Series").
    pub series_count: String,
    /// Descriptive enrolled count (e.g. "450+ Students").
    pub student_count: String,
    /// One-line tagline.
    pub tagline: String,
    /// Banner image reference.
    pub image: String,
    /// Feature bullet points.
    pub features: Vec<String>,
}

impl Plan {
    /// The discounted sale price, rounded down to a whole rupee.
    pub fn sale_price(&self) -> i64 {
        self.price_base * (100 - i64::from(self.discount_pct)) / 100
    }

    /// The cart line item for this plan.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            id: ItemId::from(&self.id),
            name: self.name.clone(),
            price: self.sale_price(),
            original_price: self.price_base,
            kind: PLAN_ITEM_KIND.to_string(),
        }
    }
}

/// The ordered sequence of pricing plans.
///
/// Seeded with a fixed default set; the admin panel replaces the whole
/// sequence rather than editing in place. Lives for the lifetime of the
/// running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self { plans: Vec::new() }
    }

    /// The default plan set the storefront launches with.
    pub fn seed() -> Self {
        Self {
            plans: vec![
                Plan {
                    id: PlanId::new("plan-1"),
                    name: "Detailed Test Series".to_string(),
                    price_base: 1999,
                    discount_pct: 65,
                    series_count: "12 Series".to_string(),
                    student_count: "450+ Students".to_string(),
                    tagline: "Scheduled tests for disciplined study".to_string(),
                    image: "/assets/plans/detailed.jpg".to_string(),
                    features: vec![
                        "12 Mock Tests".to_string(),
                        "Detailed Evaluation".to_string(),
                        "ICAI Pattern Based Questions".to_string(),
                    ],
                },
                Plan {
                    id: PlanId::new("plan-2"),
                    name: "Unscheduled Series".to_string(),
                    price_base: 2499,
                    discount_pct: 65,
                    series_count: "Unlimited".to_string(),
                    student_count: "1.2k+ Students".to_string(),
                    tagline: "Flexible - Write anytime till exams".to_string(),
                    image: "/assets/plans/unscheduled.jpg".to_string(),
                    features: vec![
                        "Valid till Exam Date".to_string(),
                        "Priority Evaluation".to_string(),
                        "Unlimited Doubt Solving".to_string(),
                    ],
                },
                Plan {
                    id: PlanId::new("plan-3"),
                    name: "Fast Track Series".to_string(),
                    price_base: 999,
                    discount_pct: 65,
                    series_count: "5 Series".to_string(),
                    student_count: "800+ Students".to_string(),
                    tagline: "Quick revision for last month".to_string(),
                    image: "/assets/plans/fast-track.jpg".to_string(),
                    features: vec![
                        "2 Full Syllabus Tests".to_string(),
                        "Standard Evaluation".to_string(),
                        "Suggested Answers".to_string(),
                    ],
                },
            ],
        }
    }

    /// The plans in catalog order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Look up a plan by id.
    pub fn get(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }

    /// The cart line item for a plan.
    pub fn line_item(&self, id: &PlanId) -> Result<LineItem, CommerceError> {
        self.get(id)
            .map(Plan::to_line_item)
            .ok_or_else(|| CommerceError::PlanNotFound(id.to_string()))
    }

    /// Replace the entire plan sequence (admin editing path).
    pub fn replace_all(&mut self, plans: Vec<Plan>) {
        info!(count = plans.len(), "plan catalog replaced");
        self.plans = plans;
    }

    /// Serialize for the backend's write-catalog operation.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(&self.plans)?)
    }

    /// Deserialize from the backend's read-catalog operation.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(Self {
            plans: serde_json::from_str(json)?,
        })
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = PlanCatalog::seed();
        assert_eq!(catalog.plans().len(), 3);
        assert!(catalog.get(&PlanId::new("plan-2")).is_some());
        assert!(catalog.get(&PlanId::new("plan-9")).is_none());
    }

    #[test]
    fn test_sale_price_rounds_down() {
        let catalog = PlanCatalog::seed();
        let detailed = catalog.get(&PlanId::new("plan-1")).unwrap();
        // 1999 at 65% off -> 699.65, floored.
        assert_eq!(detailed.sale_price(), 699);

        let fast_track = catalog.get(&PlanId::new("plan-3")).unwrap();
        assert_eq!(fast_track.sale_price(), 349);
    }

    #[test]
    fn test_line_item_from_plan() {
        let catalog = PlanCatalog::seed();
        let item = catalog.line_item(&PlanId::new("plan-1")).unwrap();
        assert_eq!(item.id.as_str(), "plan-1");
        assert_eq!(item.original_price, 1999);
        assert_eq!(item.price, 699);
        assert_eq!(item.kind, PLAN_ITEM_KIND);
    }

    #[test]
    fn test_unknown_plan_errors() {
        let catalog = PlanCatalog::seed();
        assert!(matches!(
            catalog.line_item(&PlanId::new("plan-9")),
            Err(CommerceError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_replace_all() {
        let mut catalog = PlanCatalog::seed();
        let mut plans = catalog.plans().to_vec();
        plans.truncate(1);
        plans[0].discount_pct = 50;
        catalog.replace_all(plans);

        assert_eq!(catalog.plans().len(), 1);
        assert_eq!(catalog.plans()[0].sale_price(), 999); // 1999 at 50% off
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = PlanCatalog::seed();
        let json = catalog.to_json().unwrap();
        let restored = PlanCatalog::from_json(&json).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_bad_json_errors() {
        assert!(PlanCatalog::from_json("not json").is_err());
    }
}
