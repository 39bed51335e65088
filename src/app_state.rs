use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{CatwayStore, ReservationStore, UserStore};
use crate::session::TokenCodec;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type CatwayStoreType = Arc<RwLock<dyn CatwayStore>>;
pub type ReservationStoreType = Arc<RwLock<dyn ReservationStore>>;
pub type TokenCodecType = Arc<TokenCodec>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub catway_store: CatwayStoreType,
    pub reservation_store: ReservationStoreType,
    pub token_codec: TokenCodecType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        catway_store: CatwayStoreType,
        reservation_store: ReservationStoreType,
        token_codec: TokenCodecType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            catway_store,
            reservation_store,
            token_codec,
            config,
        }
    }
}
