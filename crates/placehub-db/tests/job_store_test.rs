//! Integration tests for PgJobStore and PgCompanyStore.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{Duration, Utc};
use common::TestDatabase;
use placehub_db::{CompanyStore, JobStore, NewCompany, NewJob, PgCompanyStore, PgJobStore};

fn test_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        email: Some(format!("contact@{}.example.com", name.to_lowercase())),
        logo: None,
        description: Some("Builds enterprise software".to_string()),
        headquarters: Some("Pune".to_string()),
        sub_branch_location: None,
    }
}

fn test_job(company_id: i32, title: &str) -> NewJob {
    NewJob {
        company_id,
        title: title.to_string(),
        description: Some("Design and operate backend services".to_string()),
        req_skills: vec!["rust".to_string(), "postgres".to_string()],
        salary_range: Some("6-8 LPA".to_string()),
        start_date: None,
        end_date: Some(Utc::now() + Duration::days(30)),
        location: Some("Remote".to_string()),
        is_active: true,
    }
}

#[tokio::test]
async fn test_create_and_find_company() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    let created = companies
        .create(&test_company("Initech"))
        .await
        .expect("Failed to create company");
    assert_eq!(created.name, "Initech");

    let found = companies
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Company not found");
    assert_eq!(found.name, "Initech");
    assert_eq!(found.headquarters.as_deref(), Some("Pune"));
}

#[tokio::test]
async fn test_update_company() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    let created = companies
        .create(&test_company("Globex"))
        .await
        .expect("Failed to create company");

    let mut changed = test_company("Globex");
    changed.headquarters = Some("Mumbai".to_string());
    let updated = companies
        .update(created.id, &changed)
        .await
        .expect("Update failed")
        .expect("Company not found");
    assert_eq!(updated.headquarters.as_deref(), Some("Mumbai"));
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn test_update_missing_company_returns_none() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    let updated = companies
        .update(99_999, &test_company("Ghost"))
        .await
        .expect("Update failed");
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_company() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    let created = companies
        .create(&test_company("Shortlived"))
        .await
        .expect("Failed to create company");

    assert!(companies.delete(created.id).await.expect("Delete failed"));
    assert!(!companies.delete(created.id).await.expect("Delete failed"));
    assert!(companies
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
async fn test_search_companies_case_insensitive() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    companies
        .create(&test_company("Hooli"))
        .await
        .expect("Failed to create company");
    companies
        .create(&test_company("Vandelay"))
        .await
        .expect("Failed to create company");

    let hits = companies.search("hooli").await.expect("Search failed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Hooli");

    // Matches the description column too
    let by_description = companies
        .search("ENTERPRISE")
        .await
        .expect("Search failed");
    assert_eq!(by_description.len(), 2);

    let none = companies.search("acme").await.expect("Search failed");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_list_companies_newest_first() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());

    companies
        .create(&test_company("First"))
        .await
        .expect("Failed to create company");
    companies
        .create(&test_company("Second"))
        .await
        .expect("Failed to create company");

    let all = companies.list_all().await.expect("List failed");
    assert_eq!(all.len(), 2);
    assert!(all[0].created_at >= all[1].created_at);
}

#[tokio::test]
async fn test_create_and_find_job() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());
    let jobs = PgJobStore::new(db.database());

    let company = companies
        .create(&test_company("Initech"))
        .await
        .expect("Failed to create company");

    let created = jobs
        .create(&test_job(company.id, "Backend Engineer"))
        .await
        .expect("Failed to create job");
    assert_eq!(created.title, "Backend Engineer");
    assert_eq!(created.company_id, company.id);
    assert_eq!(created.req_skills, vec!["rust", "postgres"]);

    let found = jobs
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Job not found");
    assert_eq!(found.title, "Backend Engineer");
    assert!(found.is_active);
}

#[tokio::test]
async fn test_update_job() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());
    let jobs = PgJobStore::new(db.database());

    let company = companies
        .create(&test_company("Initech"))
        .await
        .expect("Failed to create company");
    let created = jobs
        .create(&test_job(company.id, "Backend Engineer"))
        .await
        .expect("Failed to create job");

    let mut changed = test_job(company.id, "Senior Backend Engineer");
    changed.is_active = false;
    let updated = jobs
        .update(created.id, &changed)
        .await
        .expect("Update failed")
        .expect("Job not found");
    assert_eq!(updated.title, "Senior Backend Engineer");
    assert!(!updated.is_active);

    let missing = jobs
        .update(99_999, &changed)
        .await
        .expect("Update failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_job() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());
    let jobs = PgJobStore::new(db.database());

    let company = companies
        .create(&test_company("Initech"))
        .await
        .expect("Failed to create company");
    let created = jobs
        .create(&test_job(company.id, "Disposable"))
        .await
        .expect("Failed to create job");

    assert!(jobs.delete(created.id).await.expect("Delete failed"));
    assert!(!jobs.delete(created.id).await.expect("Delete failed"));
}

#[tokio::test]
async fn test_list_formatted_embeds_company() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());
    let jobs = PgJobStore::new(db.database());

    let initech = companies
        .create(&test_company("Initech"))
        .await
        .expect("Failed to create company");
    let globex = companies
        .create(&test_company("Globex"))
        .await
        .expect("Failed to create company");

    jobs.create(&test_job(initech.id, "Backend Engineer"))
        .await
        .expect("Failed to create job");
    jobs.create(&test_job(globex.id, "Data Engineer"))
        .await
        .expect("Failed to create job");

    let listings = jobs.list_formatted().await.expect("Listing failed");
    assert_eq!(listings.len(), 2);

    // Newest first
    assert_eq!(listings[0].title, "Data Engineer");
    assert_eq!(listings[0].company.id, globex.id);
    assert_eq!(listings[0].company.name.as_deref(), Some("Globex"));
    assert_eq!(listings[1].company.name.as_deref(), Some("Initech"));
    assert_eq!(listings[0].req_skills, vec!["rust", "postgres"]);
}

#[tokio::test]
async fn test_deleting_company_removes_its_jobs() {
    let db = TestDatabase::new().await;
    let companies = PgCompanyStore::new(db.database());
    let jobs = PgJobStore::new(db.database());

    let company = companies
        .create(&test_company("Foldable"))
        .await
        .expect("Failed to create company");
    let job = jobs
        .create(&test_job(company.id, "Orphaned Soon"))
        .await
        .expect("Failed to create job");

    companies.delete(company.id).await.expect("Delete failed");

    assert!(jobs
        .find_by_id(job.id)
        .await
        .expect("Query failed")
        .is_none());
    assert!(jobs.list_formatted().await.expect("Listing failed").is_empty());
}
