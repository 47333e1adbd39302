use crate::BonusStrategy;
use core_types::SellerTotals;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rank-tiered bonus on a seller's accumulated profit.
///
/// Tiers: the top seller earns 15%, ranks 1 and 2 earn 10%, the bottom seller
/// earns nothing, everyone in between earns 5%.
///
/// Tier precedence is deliberate policy, not branch-order accident: the
/// top-rank rule beats the bottom-rank rule (a lone seller earns the 15%
/// tier), and the bottom-rank rule beats the runner-up tier (with exactly two
/// sellers, rank 1 earns nothing).
#[derive(Debug, Default)]
pub struct ProfitRankBonus;

impl BonusStrategy for ProfitRankBonus {
    fn calculate_bonus(
        &self,
        rank: usize,
        total_sellers: usize,
        totals: &SellerTotals,
    ) -> Decimal {
        if total_sellers == 0 || rank >= total_sellers {
            return Decimal::ZERO;
        }

        let rate = if rank == 0 {
            dec!(0.15)
        } else if rank == total_sellers - 1 {
            return Decimal::ZERO;
        } else if rank == 1 || rank == 2 {
            dec!(0.10)
        } else {
            dec!(0.05)
        };

        tracing::debug!(rank, total_sellers, %rate, "applying bonus tier");

        // Bonuses are amounts paid out, so they round to cents at the source.
        (totals.profit * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals_with_profit(profit: Decimal) -> SellerTotals {
        SellerTotals {
            seller_id: "s1".to_string(),
            name: "Ana Lopez".to_string(),
            sales_count: 0,
            revenue: Decimal::ZERO,
            profit,
            products_sold: Vec::new(),
        }
    }

    #[test]
    fn five_seller_tiers() {
        let totals = totals_with_profit(dec!(200));
        let bonus = |rank| ProfitRankBonus.calculate_bonus(rank, 5, &totals);

        assert_eq!(bonus(0), dec!(30.00)); // 15%
        assert_eq!(bonus(1), dec!(20.00)); // 10%
        assert_eq!(bonus(2), dec!(20.00)); // 10%
        assert_eq!(bonus(3), dec!(10.00)); // 5%
        assert_eq!(bonus(4), Decimal::ZERO); // bottom
    }

    #[test]
    fn lone_seller_takes_the_top_tier() {
        let totals = totals_with_profit(dec!(100));
        // Rank 0 and bottom rank coincide; the top-rank rule wins.
        assert_eq!(ProfitRankBonus.calculate_bonus(0, 1, &totals), dec!(15.00));
    }

    #[test]
    fn with_two_sellers_the_runner_up_earns_nothing() {
        let totals = totals_with_profit(dec!(100));
        // Rank 1 matches both the 10% tier and the bottom rank; bottom wins.
        assert_eq!(ProfitRankBonus.calculate_bonus(1, 2, &totals), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_rank_earns_nothing() {
        let totals = totals_with_profit(dec!(100));
        assert_eq!(ProfitRankBonus.calculate_bonus(5, 5, &totals), Decimal::ZERO);
        assert_eq!(ProfitRankBonus.calculate_bonus(0, 0, &totals), Decimal::ZERO);
    }

    #[test]
    fn bonus_rounds_to_the_nearest_cent() {
        // 33.333 * 0.15 = 4.99995
        let totals = totals_with_profit(dec!(33.333));
        assert_eq!(ProfitRankBonus.calculate_bonus(0, 3, &totals), dec!(5.00));
    }
}
