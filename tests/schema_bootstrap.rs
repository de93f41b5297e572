//! Schema bootstrap and durability against a file-backed database.

use employer_store::{DatabaseConfig, Employer, EmployerRepository, EmployerService};
use std::path::Path;

fn file_config(dir: &Path) -> DatabaseConfig {
    DatabaseConfig::new(format!("sqlite://{}", dir.join("JBApp.db").display()))
}

#[tokio::test]
async fn ensure_schema_is_idempotent_and_keeps_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = file_config(dir.path());

    let service = EmployerService::connect(&config).await?;
    let mut employer = Employer::new("Sonos", "Tech", "Audio products");
    let id = service.create(&mut employer).await?;
    service.ensure_schema().await?;
    service.ensure_schema().await?;
    service.close().await;

    let reopened = EmployerService::connect(&config).await?;
    assert_eq!(reopened.find_by_id(id).await?, Some(employer));
    assert_eq!(reopened.count().await?, 1);
    reopened.close().await;
    Ok(())
}

#[tokio::test]
async fn freed_identities_are_not_reused() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = EmployerService::connect(&file_config(dir.path())).await?;

    let mut first = Employer::new("First", "Tech", "Kept");
    let mut second = Employer::new("Second", "Tech", "Deleted");
    service.create(&mut first).await?;
    let freed = service.create(&mut second).await?;
    service.delete(&second).await?;

    let mut third = Employer::new("Third", "Tech", "New");
    let id = service.create(&mut third).await?;
    assert!(id > freed);

    service.clear_all().await?;
    let mut fourth = Employer::new("Fourth", "Tech", "After clear");
    assert!(service.create(&mut fourth).await? > id);
    service.close().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_on_a_shared_pool_all_land() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let service = EmployerService::connect(&file_config(dir.path())).await?;

    let mut handles = Vec::new();
    for i in 0..10 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let mut employer = Employer::new(format!("Employer {i}"), "Tech", "Concurrent");
            service.create(&mut employer).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await??);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
    assert_eq!(service.count().await?, 10);
    service.close().await;
    Ok(())
}
