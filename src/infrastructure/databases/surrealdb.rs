use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};

/// Opens a websocket session as root and selects the configured namespace
/// and database.
pub async fn connect(config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let address = format!("{}:{}", config.host, config.port);

    tracing::debug!(%address, namespace = %config.namespace, "opening surrealdb session");

    let db = Surreal::new::<Ws>(address).await?;

    db.signin(Root {
        username: config.username.as_str(),
        password: config.password.as_str(),
    })
    .await?;

    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await?;

    Ok(db)
}
