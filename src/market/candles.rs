//! Random-walk OHLCV generation for the live trading chart. Each candle
//! opens at the previous close; the seed series uses ±2% bodies and 1%
//! wicks, live ticks use half that.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::Candle;

const SEED_BODY_PCT: f64 = 0.02;
const SEED_WICK_PCT: f64 = 0.01;
const TICK_BODY_PCT: f64 = 0.01;
const TICK_WICK_PCT: f64 = 0.005;

/// Generate the initial chart series: `points` one-minute candles ending
/// now, walked from a random starting price in 100..300.
pub fn initial_series(points: usize) -> Vec<Candle> {
    let mut rng = rand::rng();
    let mut last_close = rng.random_range(100.0..300.0);
    let now = Utc::now();

    (0..points)
        .map(|i| {
            let time = now - Duration::minutes((points - i) as i64);
            let candle = step(last_close, time, SEED_BODY_PCT, SEED_WICK_PCT, &mut rng);
            last_close = candle.close;
            candle
        })
        .collect()
}

/// One live tick continuing from the previous close.
pub fn next_candle(prev_close: f64) -> Candle {
    let mut rng = rand::rng();
    step(prev_close, Utc::now(), TICK_BODY_PCT, TICK_WICK_PCT, &mut rng)
}

fn step(
    prev_close: f64,
    time: DateTime<Utc>,
    body_pct: f64,
    wick_pct: f64,
    rng: &mut impl Rng,
) -> Candle {
    let open = prev_close * (1.0 + (rng.random::<f64>() - 0.5) * body_pct);
    let close = open * (1.0 + (rng.random::<f64>() - 0.5) * body_pct);
    let high = open.max(close) * (1.0 + rng.random::<f64>() * wick_pct);
    let low = open.min(close) * (1.0 - rng.random::<f64>() * wick_pct);
    let volume = rng.random::<f64>() * 1000.0 + 500.0;

    Candle {
        time,
        open,
        high,
        low,
        close,
        volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length_and_ordering() {
        let series = initial_series(60);
        assert_eq!(series.len(), 60);
        for pair in series.windows(2) {
            assert!(pair[0].time < pair[1].time);
            // Random walk: each candle opens off the previous close.
            let drift = (pair[1].open - pair[0].close).abs() / pair[0].close;
            assert!(drift <= SEED_BODY_PCT / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_candle_invariants() {
        for candle in initial_series(120) {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert!((500.0..1500.0).contains(&candle.volume));
            assert!(candle.low > 0.0);
        }
    }

    #[test]
    fn test_next_candle_continues_walk() {
        let candle = next_candle(200.0);
        let drift = (candle.open - 200.0).abs() / 200.0;
        assert!(drift <= TICK_BODY_PCT / 2.0 + 1e-9);
    }
}
