//! Craftsman catalogue entities and query model.
//!
//! The query type carries the equality filters and sort directive the
//! remote API understands; the same filter/sort logic is applied
//! client-side by the in-memory backend so both answer identically.

use serde::{Deserialize, Serialize};

/// Service category offered on the marketplace.
///
/// Categories are serialised by their Japanese labels, matching the wire
/// format. Unrecognised labels are preserved via [`ServiceCategory::Other`]
/// so list responses never fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceCategory {
    /// エアコン — air-conditioning install, removal, cleaning.
    AirConditioning,
    /// 水回り — plumbing and water fixtures.
    Plumbing,
    /// 電気 — electrical work.
    Electrical,
    /// 内装 — interior finishing and repair.
    Interior,
    /// Any label the closed set does not cover.
    Other(String),
}

impl ServiceCategory {
    /// The four categories the marketplace advertises.
    #[must_use]
    pub fn known() -> [Self; 4] {
        [
            Self::AirConditioning,
            Self::Plumbing,
            Self::Electrical,
            Self::Interior,
        ]
    }

    /// Wire label for the category.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AirConditioning => "エアコン",
            Self::Plumbing => "水回り",
            Self::Electrical => "電気",
            Self::Interior => "内装",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for ServiceCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "エアコン" => Self::AirConditioning,
            "水回り" => Self::Plumbing,
            "電気" => Self::Electrical,
            "内装" => Self::Interior,
            _ => Self::Other(value),
        }
    }
}

impl From<ServiceCategory> for String {
    fn from(value: ServiceCategory) -> Self {
        value.label().to_owned()
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A service provider in the marketplace catalogue.
///
/// Created by registration (out of scope here), mutated via profile edit,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craftsman {
    /// Opaque record id assigned by the store.
    pub id: String,
    /// Public display name.
    pub display_name: String,
    /// Free-text self description.
    pub description: String,
    /// Profile image reference.
    pub profile_image_url: String,
    /// Prefecture of the service area.
    pub prefecture: String,
    /// City of the service area.
    pub city: String,
    /// Advertised service category.
    pub category: ServiceCategory,
    /// Lower bound of the quoted price range, in yen.
    pub price_min: u32,
    /// Upper bound of the quoted price range, in yen. Invariant:
    /// `price_min <= price_max`.
    pub price_max: u32,
    /// Aggregate rating, 0.0 to 5.0.
    pub rating_avg: f64,
    /// Number of reviews behind the aggregate.
    pub review_count: u32,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Comma-separated qualification list.
    pub qualifications: String,
}

impl Craftsman {
    /// Qualifications split out of the comma-separated wire field.
    #[must_use]
    pub fn qualification_list(&self) -> Vec<&str> {
        self.qualifications
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

/// Partial update to a craftsman's own profile. Fields left `None` are
/// not touched. `rating_avg` and `review_count` are absent on purpose:
/// aggregates belong to the review side, not the profile form.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CraftsmanPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New self description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New profile image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// New service-area prefecture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    /// New service-area city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// New service category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
    /// New lower price bound, in yen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u32>,
    /// New upper price bound, in yen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u32>,
    /// New years of experience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    /// New comma-separated qualification list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

/// Field the catalogue can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftsmanSortField {
    /// Aggregate rating.
    RatingAvg,
    /// Lower price bound.
    PriceMin,
    /// Review count.
    ReviewCount,
}

impl CraftsmanSortField {
    /// Value sent as the `sortBy` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::RatingAvg => "rating_avg",
            Self::PriceMin => "price_min",
            Self::ReviewCount => "review_count",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending. The remote API's default when only `sortBy` is given.
    #[default]
    Desc,
}

impl SortOrder {
    /// Value sent as the `order` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort directive for a catalogue query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftsmanSort {
    /// Field to order by.
    pub by: CraftsmanSortField,
    /// Direction.
    pub order: SortOrder,
}

/// Equality filters and sort for listing craftsmen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CraftsmanQuery {
    /// Keep only this category.
    pub category: Option<ServiceCategory>,
    /// Keep only this prefecture.
    pub prefecture: Option<String>,
    /// Optional ordering.
    pub sort: Option<CraftsmanSort>,
}

impl CraftsmanQuery {
    /// Query with a category filter only.
    #[must_use]
    pub fn for_category(category: ServiceCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Attach a sort directive.
    #[must_use]
    pub fn sorted_by(mut self, by: CraftsmanSortField, order: SortOrder) -> Self {
        self.sort = Some(CraftsmanSort { by, order });
        self
    }

    /// Whether a catalogue entry passes the equality filters.
    #[must_use]
    pub fn matches(&self, craftsman: &Craftsman) -> bool {
        if let Some(category) = &self.category {
            if craftsman.category != *category {
                return false;
            }
        }
        if let Some(prefecture) = &self.prefecture {
            if craftsman.prefecture != *prefecture {
                return false;
            }
        }
        true
    }

    /// Apply filters and sort client-side, exactly as the remote store
    /// would. Used by the fallback backend and by tests.
    #[must_use]
    pub fn apply(&self, craftsmen: Vec<Craftsman>) -> Vec<Craftsman> {
        let mut kept: Vec<Craftsman> = craftsmen
            .into_iter()
            .filter(|craftsman| self.matches(craftsman))
            .collect();
        if let Some(sort) = self.sort {
            kept.sort_by(|a, b| {
                let ordering = match sort.by {
                    CraftsmanSortField::RatingAvg => a.rating_avg.total_cmp(&b.rating_avg),
                    CraftsmanSortField::PriceMin => a.price_min.cmp(&b.price_min),
                    CraftsmanSortField::ReviewCount => a.review_count.cmp(&b.review_count),
                };
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn craftsman(id: &str, category: ServiceCategory, price_min: u32, rating: f64) -> Craftsman {
        Craftsman {
            id: id.to_owned(),
            display_name: format!("test-{id}"),
            description: String::new(),
            profile_image_url: String::new(),
            prefecture: "東京都".to_owned(),
            city: "渋谷区".to_owned(),
            category,
            price_min,
            price_max: price_min + 10_000,
            rating_avg: rating,
            review_count: 10,
            experience_years: 5,
            qualifications: "第二種電気工事士, 消防設備士".to_owned(),
        }
    }

    #[rstest]
    #[case("エアコン", ServiceCategory::AirConditioning)]
    #[case("水回り", ServiceCategory::Plumbing)]
    #[case("電気", ServiceCategory::Electrical)]
    #[case("内装", ServiceCategory::Interior)]
    #[case("屋根", ServiceCategory::Other("屋根".to_owned()))]
    fn category_round_trips_through_labels(#[case] label: &str, #[case] expected: ServiceCategory) {
        let parsed = ServiceCategory::from(label.to_owned());
        assert_eq!(parsed, expected);
        assert_eq!(parsed.label(), label);
    }

    #[test]
    fn qualification_list_splits_and_trims() {
        let entry = craftsman("1", ServiceCategory::Electrical, 6000, 4.9);
        assert_eq!(
            entry.qualification_list(),
            vec!["第二種電気工事士", "消防設備士"]
        );
    }

    #[test]
    fn filter_keeps_only_matching_category() {
        let query = CraftsmanQuery::for_category(ServiceCategory::Electrical);
        let all = vec![
            craftsman("1", ServiceCategory::Electrical, 6000, 4.9),
            craftsman("2", ServiceCategory::Plumbing, 5000, 4.6),
            craftsman("3", ServiceCategory::Electrical, 5000, 4.6),
        ];
        let kept = query.apply(all);
        assert_eq!(kept.len(), 2);
        assert!(
            kept.iter()
                .all(|c| c.category == ServiceCategory::Electrical)
        );
    }

    #[test]
    fn electrical_sorted_by_price_min_ascending_is_non_decreasing() {
        let query = CraftsmanQuery::for_category(ServiceCategory::Electrical)
            .sorted_by(CraftsmanSortField::PriceMin, SortOrder::Asc);
        let sorted = query.apply(vec![
            craftsman("1", ServiceCategory::Electrical, 8000, 4.9),
            craftsman("2", ServiceCategory::Plumbing, 4000, 4.6),
            craftsman("3", ServiceCategory::Electrical, 5000, 4.6),
            craftsman("4", ServiceCategory::Electrical, 6000, 4.5),
        ]);
        assert!(
            sorted
                .iter()
                .all(|c| c.category == ServiceCategory::Electrical)
        );
        let prices: Vec<u32> = sorted.iter().map(|c| c.price_min).collect();
        assert_eq!(prices, vec![5000, 6000, 8000]);
    }

    #[test]
    fn sort_by_rating_descending_puts_best_first() {
        let query =
            CraftsmanQuery::default().sorted_by(CraftsmanSortField::RatingAvg, SortOrder::Desc);
        let sorted = query.apply(vec![
            craftsman("1", ServiceCategory::Interior, 8000, 4.5),
            craftsman("2", ServiceCategory::Interior, 5000, 4.9),
        ]);
        assert_eq!(sorted.first().map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn empty_result_is_a_valid_outcome() {
        let query = CraftsmanQuery {
            prefecture: Some("沖縄県".to_owned()),
            ..CraftsmanQuery::default()
        };
        let kept = query.apply(vec![craftsman("1", ServiceCategory::Interior, 8000, 4.5)]);
        assert!(kept.is_empty());
    }
}
