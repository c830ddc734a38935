//! Create the first admin account.
//!
//! Connects, applies migrations, and exits without changes when any admin
//! already exists. Reads `DATABASE_URL`, `SEED_ADMIN_NAME`,
//! `SEED_ADMIN_EMAIL` and `SEED_ADMIN_PASSWORD`.

use std::process::ExitCode;

use charity_api::auth::password::hash_password;
use charity_core::roles::Role;
use charity_core::validation::user::NewUser;
use charity_core::validation::Payload;
use charity_db::models::user::CreateUser;
use charity_db::repositories::UserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("invalid admin account: {0}")]
    Invalid(#[from] charity_core::error::CoreError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("password hashing error: {0}")]
    Hash(argon2::password_hash::Error),
}

fn required(name: &'static str) -> Result<String, SeedError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(SeedError::MissingVar(name))
}

async fn seed() -> Result<(), SeedError> {
    let database_url = required("DATABASE_URL")?;
    let admin = NewUser {
        name: std::env::var("SEED_ADMIN_NAME").unwrap_or_else(|_| "Administrator".into()),
        email: required("SEED_ADMIN_EMAIL")?,
        phone: None,
        password: required("SEED_ADMIN_PASSWORD")?,
        role: Role::Admin,
    };
    admin.check()?;

    let pool = charity_db::create_pool(&database_url).await?;
    charity_db::run_migrations(&pool).await?;

    if UserRepo::exists_with_role(&pool, Role::Admin).await? {
        tracing::info!("Admin user already exists, skipping seed");
        return Ok(());
    }

    let password_hash = hash_password(&admin.password).map_err(SeedError::Hash)?;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: admin.name,
            email: admin.email,
            phone: None,
            password_hash,
            role: Role::Admin,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin user created");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charity_seed=info,charity_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}
