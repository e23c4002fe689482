pub mod candles;
pub mod ticker;
