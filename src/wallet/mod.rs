pub mod store;

pub use store::WalletStore;
