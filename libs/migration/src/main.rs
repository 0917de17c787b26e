use migration::Migrator;
use sea_orm_migration::cli;

/// Migration CLI, e.g. `DATABASE_URL=sqlite://todos.db?mode=rwc migration up`
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
