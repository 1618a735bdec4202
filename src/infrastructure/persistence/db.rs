use mongodb::{Client, Database};

pub const DB_NAME: &str = "users_db";

pub async fn create_client(mongo_url: &str) -> Result<Client, mongodb::error::Error> {
    Client::with_uri_str(mongo_url).await
}

pub fn users_database(client: &Client) -> Database {
    client.database(DB_NAME)
}
