//! Craftsman profile editing.
//!
//! A craftsman may edit exactly one record: their own. The target id is
//! never a parameter; it is taken from the signed-in identity, so the
//! ownership check is structural rather than compared after the fact.

use std::sync::Arc;

use tracing::info;

use super::craftsman::{Craftsman, CraftsmanPatch};
use super::error::Error;
use super::identity::{Identity, Role};
use super::ports::MarketRepository;

/// Service applying profile edits to the signed-in craftsman's record.
pub struct CraftsmanProfileService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: MarketRepository + ?Sized> CraftsmanProfileService<R> {
    /// Build the service over a repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Apply a partial update to the signed-in craftsman's own record.
    ///
    /// The current record is fetched first so the price-bound invariant
    /// can be checked against the merged values, not just the patch.
    ///
    /// # Errors
    ///
    /// [`Error::PreconditionFailed`] when the identity is not a craftsman
    /// or carries no craftsman record, [`Error::Validation`] when the
    /// merged price bounds are out of order or the new display name is
    /// blank, and [`Error::NotFound`]/[`Error::Transport`] from the
    /// store.
    pub async fn update_own_profile(
        &self,
        identity: &Identity,
        patch: &CraftsmanPatch,
    ) -> Result<Craftsman, Error> {
        if identity.role != Role::Craftsman {
            return Err(Error::precondition_failed(
                "only craftsmen can edit a craftsman profile",
            ));
        }
        let Some(craftsman_id) = &identity.craftsman_id else {
            return Err(Error::precondition_failed(
                "identity is not linked to a craftsman record",
            ));
        };
        if let Some(display_name) = &patch.display_name {
            if display_name.trim().is_empty() {
                return Err(Error::validation(
                    "display_name",
                    "表示名を入力してください",
                ));
            }
        }

        let current = self.repo.get_craftsman(craftsman_id).await?;
        let min = patch.price_min.unwrap_or(current.price_min);
        let max = patch.price_max.unwrap_or(current.price_max);
        if min > max {
            return Err(Error::validation(
                "price_min",
                "料金の下限は上限以下にしてください",
            ));
        }

        let updated = self.repo.update_craftsman(craftsman_id, patch).await?;
        info!(craftsman_id = %updated.id, "profile updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::craftsman::ServiceCategory;
    use crate::domain::identity::ContactProfile;
    use crate::domain::ports::MockMarketRepository;

    fn fixture_craftsman() -> Craftsman {
        Craftsman {
            id: "1".to_owned(),
            display_name: "山田エアコンサービス".to_owned(),
            description: String::new(),
            profile_image_url: String::new(),
            prefecture: "東京都".to_owned(),
            city: "渋谷区".to_owned(),
            category: ServiceCategory::AirConditioning,
            price_min: 8000,
            price_max: 15_000,
            rating_avg: 4.8,
            review_count: 124,
            experience_years: 15,
            qualifications: String::new(),
        }
    }

    fn craftsman_identity() -> Identity {
        Identity {
            id: "demo_craftsman_taro".to_owned(),
            name: "職人太郎".to_owned(),
            role: Role::Craftsman,
            craftsman_id: Some("1".to_owned()),
            profile: ContactProfile::default(),
        }
    }

    #[tokio::test]
    async fn edits_are_applied_to_the_own_record() {
        let mut repo = MockMarketRepository::new();
        repo.expect_get_craftsman()
            .returning(|_| Ok(fixture_craftsman()));
        repo.expect_update_craftsman().returning(|id, patch| {
            assert_eq!(id, "1");
            let mut craftsman = fixture_craftsman();
            if let Some(description) = &patch.description {
                craftsman.description = description.clone();
            }
            Ok(craftsman)
        });
        let service = CraftsmanProfileService::new(Arc::new(repo));

        let patch = CraftsmanPatch {
            description: Some("エアコン専門15年".to_owned()),
            ..CraftsmanPatch::default()
        };
        let updated = service
            .update_own_profile(&craftsman_identity(), &patch)
            .await
            .expect("update succeeds");
        assert_eq!(updated.description, "エアコン専門15年");
    }

    #[tokio::test]
    async fn customers_cannot_edit_profiles() {
        let repo = MockMarketRepository::new();
        let service = CraftsmanProfileService::new(Arc::new(repo));
        let customer = Identity {
            id: "demo_customer_taro".to_owned(),
            name: "依頼者太郎".to_owned(),
            role: Role::Customer,
            craftsman_id: None,
            profile: ContactProfile::default(),
        };

        let err = service
            .update_own_profile(&customer, &CraftsmanPatch::default())
            .await
            .expect_err("customers refused");
        assert!(matches!(err, Error::PreconditionFailed { .. }));
    }

    #[tokio::test]
    async fn unlinked_craftsman_identity_is_refused() {
        let repo = MockMarketRepository::new();
        let service = CraftsmanProfileService::new(Arc::new(repo));
        let unlinked = Identity {
            craftsman_id: None,
            ..craftsman_identity()
        };

        let err = service
            .update_own_profile(&unlinked, &CraftsmanPatch::default())
            .await
            .expect_err("unlinked identity refused");
        assert!(matches!(err, Error::PreconditionFailed { .. }));
    }

    #[tokio::test]
    async fn merged_price_bounds_must_stay_ordered() {
        let mut repo = MockMarketRepository::new();
        repo.expect_get_craftsman()
            .returning(|_| Ok(fixture_craftsman()));
        // No expect_update_craftsman: any write panics the mock.
        let service = CraftsmanProfileService::new(Arc::new(repo));

        // Raising only the lower bound above the existing upper bound.
        let patch = CraftsmanPatch {
            price_min: Some(20_000),
            ..CraftsmanPatch::default()
        };
        let err = service
            .update_own_profile(&craftsman_identity(), &patch)
            .await
            .expect_err("inverted bounds refused");
        assert!(matches!(err, Error::Validation { field: "price_min", .. }));
    }

    #[tokio::test]
    async fn blank_display_name_is_refused_before_any_call() {
        let repo = MockMarketRepository::new();
        let service = CraftsmanProfileService::new(Arc::new(repo));

        let patch = CraftsmanPatch {
            display_name: Some("   ".to_owned()),
            ..CraftsmanPatch::default()
        };
        let err = service
            .update_own_profile(&craftsman_identity(), &patch)
            .await
            .expect_err("blank name refused");
        assert!(matches!(err, Error::Validation { field: "display_name", .. }));
    }
}
