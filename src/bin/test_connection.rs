//! Connectivity check for the configured Postgres database.
//!
//! Prints the connected role and database, the public tables, the provisioned
//! users and the subscription plans, then exits. Exits with status 1 on any error.

use std::process::ExitCode;

use nutrifitt_api::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> ExitCode {
    println!("Testando conexão com PostgreSQL...");

    match run().await {
        Ok(()) => {
            println!("\nTudo funcionando perfeitamente!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Erro na conexão: {}", e);
            eprintln!("Verifique suas configurações no arquivo .env");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database = DatabaseConfig::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(database.connect_options()?)
        .await?;

    let mut conn = pool.acquire().await?;

    let (user, db_name, version): (String, String, String) =
        sqlx::query_as("SELECT current_user::text, current_database()::text, version()")
            .fetch_one(&mut *conn)
            .await?;
    println!("Conexão bem-sucedida!");
    println!("Usuário: {}", user);
    println!("Banco: {}", db_name);
    println!("Versão: {}", version);

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = 'public' ORDER BY table_name",
    )
    .fetch_all(&mut *conn)
    .await?;
    println!("Tabelas encontradas:");
    for table in &tables {
        println!("  - {}", table);
    }

    let users: Vec<(String, String, String)> =
        sqlx::query_as("SELECT name, email, role FROM users ORDER BY name")
            .fetch_all(&mut *conn)
            .await?;
    println!("Usuários no sistema:");
    for (name, email, role) in &users {
        println!("  - {} ({}) - {}", name, email, role);
    }

    let plans: Vec<(String, String)> =
        sqlx::query_as("SELECT name, price::text FROM subscription_plans ORDER BY price")
            .fetch_all(&mut *conn)
            .await?;
    println!("Planos disponíveis:");
    for (name, price) in &plans {
        println!("  - {}: R$ {}", name, price);
    }

    drop(conn);
    pool.close().await;
    Ok(())
}
