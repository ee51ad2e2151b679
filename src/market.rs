// Simulated market data: a random-walk price feed plus pseudo-random sample
// series for charts and leaderboards. No determinism contract beyond
// "same seed, same series" through the injected rng.

use crate::tx::TxKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const INITIAL_PRICE: f64 = 0.05;
pub const PRICE_FLOOR: f64 = 0.01;
/// Max absolute step of the live feed per tick.
const FEED_STEP: f64 = 0.005;
/// Chart series step size and upward drift bias.
const SERIES_VOLATILITY: f64 = 0.02;
const SERIES_DRIFT_BIAS: f64 = 0.45;

const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Live token price as a bounded random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFeed {
    price: f64,
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self { price: INITIAL_PRICE }
    }
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Advance the walk one step and return the new price.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let change = (rng.gen::<f64>() - 0.5) * FEED_STEP;
        self.price = (self.price + change).max(PRICE_FLOOR);
        self.price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartRange {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl ChartRange {
    pub fn points(&self) -> usize {
        match self {
            ChartRange::Day => 24,
            ChartRange::Week => 7,
            ChartRange::Month => 30,
            ChartRange::Year => 12,
            ChartRange::All => 24,
        }
    }

    fn label(&self, i: usize) -> String {
        match self {
            ChartRange::Day => format!("{}:00", i),
            ChartRange::Week => WEEK_DAYS[i % 7].to_string(),
            ChartRange::Month => format!("Day {}", i + 1),
            ChartRange::Year => MONTHS[i % 12].to_string(),
            ChartRange::All => format!("Q{}", i / 6 + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: String,
    pub price: f64,
}

/// Sample price series for a chart range: upward-biased walk from the
/// initial price, floored, rounded to 4 decimals.
pub fn price_series<R: Rng>(range: ChartRange, rng: &mut R) -> Vec<PricePoint> {
    let mut price = INITIAL_PRICE;
    (0..range.points())
        .map(|i| {
            let change = (rng.gen::<f64>() - SERIES_DRIFT_BIAS) * SERIES_VOLATILITY;
            price = (price + change).max(PRICE_FLOOR);
            PricePoint {
                label: range.label(i),
                price: (price * 10_000.0).round() / 10_000.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holder {
    pub name: String,
    pub balance: u64,
    pub avatar: String,
    pub is_user: bool,
}

fn whale(name: &str, balance: u64, avatar: &str) -> Holder {
    Holder {
        name: name.to_string(),
        balance,
        avatar: avatar.to_string(),
        is_user: false,
    }
}

/// The fixed cast of whales shown on the leaderboard.
pub fn whale_leaderboard() -> Vec<Holder> {
    vec![
        whale("CryptoKing", 12_500_000, "CK"),
        whale("SolanaWhale", 8_750_000, "SW"),
        whale("TokenMaster", 5_200_000, "TM"),
        whale("DeFiLord", 3_100_000, "DL"),
        whale("BlockBaron", 1_850_000, "BB"),
    ]
}

/// Whales plus the connected user (when given), sorted by balance, top five.
pub fn merged_leaderboard(user_balance: Option<u64>) -> Vec<Holder> {
    let mut holders = whale_leaderboard();
    if let Some(balance) = user_balance {
        holders.push(Holder {
            name: "You".to_string(),
            balance,
            avatar: "ME".to_string(),
            is_user: true,
        });
    }
    holders.sort_by(|a, b| b.balance.cmp(&a.balance));
    holders.truncate(5);
    holders
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityBar {
    pub day: &'static str,
    pub volume: u64,
    pub kind: TxKind,
}

const ACTIVITY_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ACTIVITY_KINDS: [TxKind; 6] = [
    TxKind::Mint,
    TxKind::Stake,
    TxKind::Swap,
    TxKind::Transfer,
    TxKind::Unstake,
    TxKind::Burn,
];

/// Seven day-labelled sample volumes for a holder's activity chart.
pub fn holder_activity<R: Rng>(rng: &mut R) -> Vec<ActivityBar> {
    ACTIVITY_DAYS
        .iter()
        .map(|day| ActivityBar {
            day,
            volume: rng.gen_range(10_000..110_000),
            kind: ACTIVITY_KINDS[rng.gen_range(0..ACTIVITY_KINDS.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn feed_never_drops_below_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut feed = PriceFeed::new();
        for _ in 0..10_000 {
            let p = feed.tick(&mut rng);
            assert!(p >= PRICE_FLOOR);
        }
    }

    #[test]
    fn feed_is_reproducible_per_seed() {
        let mut a = PriceFeed::new();
        let mut b = PriceFeed::new();
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert_eq!(a.tick(&mut rng_a), b.tick(&mut rng_b));
        }
    }

    #[test]
    fn series_has_range_point_count_and_labels() {
        let mut rng = StdRng::seed_from_u64(5);
        let day = price_series(ChartRange::Day, &mut rng);
        assert_eq!(day.len(), 24);
        assert_eq!(day[0].label, "0:00");

        let week = price_series(ChartRange::Week, &mut rng);
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].label, "Sat");

        let all = price_series(ChartRange::All, &mut rng);
        assert_eq!(all.len(), 24);
        assert_eq!(all[0].label, "Q1");
        assert_eq!(all[23].label, "Q4");

        for p in day.iter().chain(week.iter()).chain(all.iter()) {
            assert!(p.price >= PRICE_FLOOR);
            // 4-decimal rounding.
            assert!((p.price * 10_000.0 - (p.price * 10_000.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn leaderboard_ranks_user_by_balance() {
        let board = merged_leaderboard(Some(6_000_000));
        assert_eq!(board.len(), 5);
        assert_eq!(board[2].name, "You");
        assert!(board[2].is_user);
        // BlockBaron falls off the bottom.
        assert!(board.iter().all(|h| h.name != "BlockBaron"));

        let no_user = merged_leaderboard(None);
        assert_eq!(no_user.len(), 5);
        assert!(no_user.iter().all(|h| !h.is_user));
    }

    #[test]
    fn holder_activity_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let bars = holder_activity(&mut rng);
        assert_eq!(bars.len(), 7);
        assert_eq!(bars[0].day, "Mon");
        for bar in &bars {
            assert!((10_000..110_000).contains(&bar.volume));
        }
    }
}
