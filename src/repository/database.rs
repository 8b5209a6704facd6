use crate::config::config::Config;
use deadpool::managed::Object;
use deadpool::Runtime;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::{
    pooled_connection::{deadpool::Pool, deadpool::PoolError, AsyncDieselConnectionManager},
    AsyncPgConnection,
};
use log::error;
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;
use thiserror::Error;

pub type DBPool = Pool<AsyncPgConnection>;
pub type DBConn = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;
pub type Result<T> = std::result::Result<T, RepositoryError>;

pub struct Database {
    pool: DBPool,
}

/// Failure of a repository operation, classified so the HTTP layer can tell
/// bad input apart from infrastructure trouble.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("could not build the connection pool: {0}")]
    PoolSetup(String),
    #[error("could not get a database connection from the pool: {0}")]
    Unavailable(#[from] PoolError),
    #[error("database connection lost: {0}")]
    ConnectionLost(String),
    #[error("referenced record does not exist: {0}")]
    ForeignKeyViolation(String),
    #[error("record conflicts with an existing one: {0}")]
    UniqueViolation(String),
    #[error("record violates a table constraint: {0}")]
    ConstraintViolation(String),
    #[error("query failed: {0}")]
    Query(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let detail = info.message().to_string();
                match kind {
                    DatabaseErrorKind::ForeignKeyViolation => {
                        RepositoryError::ForeignKeyViolation(detail)
                    }
                    DatabaseErrorKind::UniqueViolation => RepositoryError::UniqueViolation(detail),
                    DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(detail)
                    }
                    DatabaseErrorKind::ClosedConnection
                    | DatabaseErrorKind::UnableToSendCommand => {
                        RepositoryError::ConnectionLost(detail)
                    }
                    other => RepositoryError::Query(DieselError::DatabaseError(other, info)),
                }
            }
            other => RepositoryError::Query(other),
        }
    }
}

impl Database {
    /// Builds the pool. No connection is opened until the first checkout.
    pub fn new(config: &Config) -> Result<Self> {
        let manager = match &config.database_ca_file {
            Some(ca_file) => {
                let ca_file = ca_file.clone();
                AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
                    config.database_url.clone(),
                    move |url| Box::pin(Self::establish_tls(url, ca_file.clone())),
                )
            }
            None => AsyncDieselConnectionManager::<AsyncPgConnection>::new(
                config.database_url.clone(),
            ),
        };
        let pool = Pool::builder(manager)
            .max_size(config.database_pool_max_size)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(config.database_pool_timeout))
            .create_timeout(Some(config.database_pool_timeout))
            .build()
            .map_err(|e| RepositoryError::PoolSetup(e.to_string()))?;
        Ok(Database { pool })
    }

    async fn establish_tls(
        database_url: &str,
        ca_file: String,
    ) -> ConnectionResult<AsyncPgConnection> {
        let mut builder = SslConnector::builder(SslMethod::tls())
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        builder
            .set_ca_file(&ca_file)
            .map_err(|e| ConnectionError::BadConnection(format!("{ca_file}: {e}")))?;
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("database connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    /// Checks a connection out of the pool. It goes back when the returned
    /// guard is dropped, whichever way the caller exits.
    pub(crate) async fn get_db_conn(&self) -> Result<DBConn> {
        self.pool.get().await.map_err(|e| {
            error!("could not get a database connection from the pool: {e}");
            RepositoryError::Unavailable(e)
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;

    struct Info(&'static str);

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn db_error(kind: DatabaseErrorKind, message: &'static str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(message)))
    }

    #[test]
    fn classifies_constraint_violations() {
        let err: RepositoryError = db_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"players\" violates foreign key constraint",
        )
        .into();
        assert!(matches!(err, RepositoryError::ForeignKeyViolation(ref m) if m.contains("players")));

        let err: RepositoryError = db_error(DatabaseErrorKind::UniqueViolation, "dup").into();
        assert!(matches!(err, RepositoryError::UniqueViolation(_)));

        let err: RepositoryError = db_error(DatabaseErrorKind::NotNullViolation, "null").into();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

        let err: RepositoryError = db_error(DatabaseErrorKind::CheckViolation, "check").into();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }

    #[test]
    fn classifies_dropped_connections() {
        let err: RepositoryError =
            db_error(DatabaseErrorKind::ClosedConnection, "server closed").into();
        assert!(matches!(err, RepositoryError::ConnectionLost(_)));
    }

    #[test]
    fn everything_else_is_a_query_error() {
        let err: RepositoryError = DieselError::NotFound.into();
        assert!(matches!(err, RepositoryError::Query(DieselError::NotFound)));

        let err: RepositoryError =
            db_error(DatabaseErrorKind::SerializationFailure, "retry").into();
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[actix_web::test]
    async fn unreachable_database_is_reported_as_unavailable() {
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://nobody@127.0.0.1:1/none".to_string()),
            _ => None,
        })
        .unwrap();
        let db = Database::new(&config).unwrap();

        match db.get_db_conn().await {
            Ok(_) => panic!("checkout should fail against a closed port"),
            Err(err) => assert!(matches!(err, RepositoryError::Unavailable(_))),
        }
    }

    #[actix_web::test]
    async fn checkout_gives_up_after_the_pool_timeout() {
        // TEST-NET-1 is never routed, so connecting either fails or hangs.
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://nobody@192.0.2.1:5432/none".to_string()),
            "DATABASE_POOL_TIMEOUT_SECS" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();
        let db = Database::new(&config).unwrap();

        let checkout = tokio::time::timeout(std::time::Duration::from_secs(10), db.get_db_conn())
            .await
            .unwrap_or_else(|_| panic!("checkout outlived the pool timeout"));
        match checkout {
            Ok(_) => panic!("checkout should fail against an unrouted address"),
            Err(err) => assert!(matches!(err, RepositoryError::Unavailable(_))),
        }
    }
}
