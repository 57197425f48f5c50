/// Database layer
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with health checks
/// - `migrations`: embedded migration runner
///
/// Queries live next to their models in `crate::models`.

pub mod migrations;
pub mod pool;
