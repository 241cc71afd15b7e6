//! Database layer: the SQL Server handle handed to the generator.

use std::time::Duration;

use bb8::{Pool, PooledConnection};
use bb8_tiberius::ConnectionManager;
use tiberius::{AuthMethod, Config as TdsConfig};
use tracing::debug;

use crate::config::DbSettings;
use crate::error::{ConfigError, ConfigResult};

/// Upper bound on pooled connections; schema introspection is mostly serial.
const POOL_MAX_SIZE: u32 = 8;

/// How long a caller waits for a live connection before giving up.
const POOL_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Database handle wrapping a lazy pool of TDS connections.
///
/// Creating the handle performs no network I/O: connections are dialed on
/// first checkout. Callers that want reachability verified up front use
/// [`Database::ping`].
#[derive(Clone)]
pub struct Database {
    pool: Pool<ConnectionManager>,
    conn_string: String,
    target: String,
}

impl Database {
    /// Build the handle from database settings.
    ///
    /// Synchronous and runtime-free: the pool dials nothing and starts no
    /// background work until a connection is checked out.
    pub fn connect(settings: &DbSettings) -> ConfigResult<Self> {
        let conn_string = settings.connection_string();
        let target = settings.target();

        let mut tds = TdsConfig::new();
        tds.host(&settings.host);
        tds.port(settings.port);
        tds.database(&settings.database);
        tds.authentication(AuthMethod::sql_server(&settings.user, &settings.password));
        // Dev SQL Server installs usually present self-signed certificates.
        tds.trust_cert();

        let manager = ConnectionManager::new(tds);
        // Lifetime limits would schedule a reaper timer at construction, and
        // this handle must be buildable before any async runtime exists.
        let pool = Pool::builder()
            .max_size(POOL_MAX_SIZE)
            .connection_timeout(POOL_CONNECT_TIMEOUT)
            .max_lifetime(None)
            .idle_timeout(None)
            .build_unchecked(manager);

        debug!(db = %target, "database handle created");
        Ok(Self {
            pool,
            conn_string,
            target,
        })
    }

    /// Check out a live connection from the pool.
    pub async fn get(&self) -> ConfigResult<PooledConnection<'_, ConnectionManager>> {
        self.pool
            .get()
            .await
            .map_err(|err| ConfigError::db_connect(&self.target, err))
    }

    /// Verify the server is reachable with the configured credentials.
    pub async fn ping(&self) -> ConfigResult<()> {
        let mut conn = self.get().await?;
        conn.simple_query("SELECT 1")
            .await
            .map_err(|err| ConfigError::db_connect(&self.target, err))?
            .into_results()
            .await
            .map_err(|err| ConfigError::db_connect(&self.target, err))?;
        Ok(())
    }

    /// The canonical connection string for this handle.
    ///
    /// Contains the password; use [`DbSettings::masked_connection_string`]
    /// for anything that ends up in logs or terminal output.
    pub fn connection_string(&self) -> &str {
        &self.conn_string
    }

    /// Credential-free `host:port/database` target.
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_is_lazy_and_does_not_dial() {
        // A nonexistent host must not matter until a connection is checked out.
        let settings = DbSettings {
            host: "no-such-host.invalid".to_string(),
            user: "u".to_string(),
            password: "p".to_string(),
            port: 1,
            database: "d".to_string(),
        };

        let db = Database::connect(&settings).expect("handle creation is lazy");
        assert_eq!(
            db.connection_string(),
            "sqlserver://u:p@no-such-host.invalid:1/d"
        );
        assert_eq!(db.target(), "no-such-host.invalid:1/d");
    }

    #[test]
    fn connect_accepts_zero_valued_settings() {
        // An all-defaults config still yields a handle; failures belong to
        // first use, matching the driver's laziness.
        let db = Database::connect(&DbSettings::default()).unwrap();
        assert_eq!(db.connection_string(), "sqlserver://:@:0/");
    }

    #[test]
    fn connect_needs_no_async_runtime() {
        // Deliberately a plain #[test]: the pool must not schedule reaper
        // timers or any other runtime-bound work at construction.
        let handle = std::thread::spawn(|| {
            Database::connect(&DbSettings {
                host: "localhost".to_string(),
                user: "sa".to_string(),
                password: "pw".to_string(),
                port: 1433,
                database: "mydb".to_string(),
            })
        });
        let db = handle.join().expect("no panic off-runtime").unwrap();
        assert_eq!(db.target(), "localhost:1433/mydb");
    }
}
