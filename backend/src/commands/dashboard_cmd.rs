//! Dashboard Commands

use crate::domain::{aggregate_impact, DomainResult, ImpactMetrics, Session};
use crate::AppState;

pub async fn impact_dashboard(state: &AppState, session: &Session) -> DomainResult<ImpactMetrics> {
    let user_id = session.require_user()?;
    let items = state.items.load_items(user_id).await?;
    Ok(aggregate_impact(&items, &state.config.impact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save_batch;
    use crate::commands::test_support::{draft, signed_in};
    use crate::domain::Category;

    #[tokio::test]
    async fn test_empty_inventory_is_zero() {
        let (state, session) = signed_in().await;
        let metrics = impact_dashboard(&state, &session).await.unwrap();
        assert_eq!(metrics, ImpactMetrics::default());
    }

    #[tokio::test]
    async fn test_counts_quantities() {
        let (state, session) = signed_in().await;
        save_batch(
            &state,
            &session,
            vec![draft("Eggs", Category::Dairy, 7, 12), draft("Milk", Category::Dairy, -1, 3)],
        )
        .await
        .unwrap();

        let metrics = impact_dashboard(&state, &session).await.unwrap();
        assert_eq!(metrics.items_tracked, 15);
        assert_eq!(metrics.food_waste_prevented_kg, 1.5);
        assert_eq!(metrics.co2_saved_kg, 0.8);
        assert_eq!(metrics.money_saved_usd, 12.0);
        assert_eq!(metrics.car_km_equivalent, 4.0);
        assert_eq!(metrics.projected_yearly_savings_usd, 144.0);
    }
}
