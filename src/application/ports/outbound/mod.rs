mod repository_port;

pub use repository_port::{
    ConsumableRepositoryPort, CreatureRepositoryPort, FactionRepositoryPort,
    LocationRepositoryPort, RegionRepositoryPort,
};
