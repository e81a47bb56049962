// File: shikayat-core/tests/db_tests.rs

use shikayat_core::{
    Database, Error,
    models::{ComplaintFilter, NewComplaint},
    repositories::{ComplaintRepository, SqliteComplaintRepository},
};

#[tokio::test]
async fn test_database_file_is_created_and_survives_reopen() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("complaints.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::open(path).await?;
        db.migrate().await?;
        let repo = SqliteComplaintRepository::new(db.pool().clone());
        let new = NewComplaint::new(
            "Asha Verma",
            "asha@example.com",
            "Tenant",
            "No water",
            "Tap dry all day",
            None,
            None,
        )?;
        repo.insert(&new).await?;
    }

    // Reopen: the row was durable, and migrations are idempotent.
    let db = Database::open(path).await?;
    db.migrate().await?;
    let repo = SqliteComplaintRepository::new(db.pool().clone());
    let rows = repo.list(&ComplaintFilter::default()).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "No water");
    Ok(())
}
