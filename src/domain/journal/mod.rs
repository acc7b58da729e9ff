pub mod goal;
pub mod profile;
pub mod trade;

pub use goal::Goal;
pub use profile::UserProfile;
pub use trade::{AssetClass, Direction, Trade, TradeStatus};
