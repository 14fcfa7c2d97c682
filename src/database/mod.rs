use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const USERS: &str = "users";
pub const TUTORS: &str = "tutors";
pub const BOOKINGS: &str = "bookings";

struct Connection {
    client: Client,
    db: Database,
}

/// Process-wide store handle. Cheap to clone; every clone shares the same pool.
///
/// The driver client is built on first use. A `mongodb+srv://` URI needs DNS
/// to be parsed, so a failed build is not cached: the next call tries again.
#[derive(Clone)]
pub struct MongoDB {
    uri: Arc<str>,
    db_name: Arc<str>,
    conn: Arc<OnceCell<Connection>>,
}

impl MongoDB {
    pub fn new(uri: &str, db_name: &str) -> Self {
        Self {
            uri: Arc::from(uri),
            db_name: Arc::from(db_name),
            conn: Arc::new(OnceCell::new()),
        }
    }

    async fn connection(&self) -> mongodb::error::Result<&Connection> {
        self.conn
            .get_or_try_init(|| connect(&self.uri, &self.db_name))
            .await
    }

    /// Round-trips `{ping: 1}` against the admin database.
    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.connection()
            .await?
            .client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Creates the indexes backing the lookup routes. Failures are logged, not fatal.
    pub async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (BOOKINGS, doc! { "userEmail": 1, "tutorId": 1 }, "bookings(userEmail, tutorId)"),
            (TUTORS, doc! { "language": 1 }, "tutors(language)"),
            (TUTORS, doc! { "email": 1 }, "tutors(email)"),
        ];

        for (collection, keys, label) in indexes {
            let model = IndexModel::builder().keys(keys).build();
            let created = match self.collection::<Document>(collection).await {
                Ok(collection) => collection.create_index(model).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match created {
                Ok(()) => log::info!("   ✅ Index ready: {}", label),
                Err(e) => log::debug!("   ℹ️  Index {} not created: {}", label, e),
            }
        }
    }

    pub async fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::error::Result<Collection<T>> {
        Ok(self.connection().await?.db.collection(name))
    }

    pub async fn database(&self) -> mongodb::error::Result<&Database> {
        Ok(&self.connection().await?.db)
    }

    pub fn database_name(&self) -> &str {
        &self.db_name
    }
}

async fn connect(uri: &str, db_name: &str) -> mongodb::error::Result<Connection> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.max_pool_size = Some(20);
    client_options.min_pool_size = Some(2);
    client_options.max_idle_time = Some(Duration::from_secs(300));

    client_options.connect_timeout = Some(Duration::from_secs(5));
    client_options.server_selection_timeout = Some(Duration::from_secs(5));

    client_options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    let client = Client::with_options(client_options)?;
    let db = client.database(db_name);

    log::info!("🔌 MongoDB client ready for database {}", db_name);

    Ok(Connection { client, db })
}
