pub mod chirp;
pub mod memory;
pub mod refresh_token;
pub mod user;

pub use chirp::PostgresChirpRepository;
pub use memory::InMemoryChirpRepository;
pub use memory::InMemoryRefreshTokenStore;
pub use memory::InMemoryUserRepository;
pub use refresh_token::PostgresRefreshTokenStore;
pub use user::PostgresUserRepository;
