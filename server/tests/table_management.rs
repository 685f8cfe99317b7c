//! Dining table management against an in-memory database

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use tableside_server::db::models::{DiningTable, DiningTableUpdate};
use tableside_server::db::repository::DiningTableRepository;

async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("tableside").use_db("test").await.unwrap();
    db
}

fn table(number: &str) -> DiningTable {
    DiningTable {
        id: None,
        number: number.into(),
        capacity: 4,
        is_occupied: false,
        qr_payload: String::new(),
    }
}

#[tokio::test]
async fn duplicate_numbers_are_rejected() {
    let db = mem_db().await;
    let repo = DiningTableRepository::new(db);

    repo.create(table("5")).await.unwrap();
    assert!(repo.create(table("5")).await.is_err());

    // Renaming onto a taken number fails the same way
    let other = repo.create(table("6")).await.unwrap();
    let update = DiningTableUpdate {
        number: Some("5".into()),
        ..Default::default()
    };
    assert!(repo.update(&other.key(), update).await.is_err());
}

#[tokio::test]
async fn tables_sort_numerically_before_lexically() {
    let db = mem_db().await;
    let repo = DiningTableRepository::new(db);

    for n in ["10", "2", "A1", "1"] {
        repo.create(table(n)).await.unwrap();
    }

    let numbers: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.number)
        .collect();
    assert_eq!(numbers, vec!["1", "2", "10", "A1"]);
}

#[tokio::test]
async fn occupancy_toggles_without_touching_other_fields() {
    let db = mem_db().await;
    let repo = DiningTableRepository::new(db);

    let created = repo.create(table("3")).await.unwrap();
    assert!(!created.is_occupied);

    let update = DiningTableUpdate {
        is_occupied: Some(true),
        ..Default::default()
    };
    let occupied = repo.update(&created.key(), update).await.unwrap();
    assert!(occupied.is_occupied);
    assert_eq!(occupied.number, "3");
    assert_eq!(occupied.capacity, 4);

    let update = DiningTableUpdate {
        is_occupied: Some(false),
        ..Default::default()
    };
    let freed = repo.update(&created.key(), update).await.unwrap();
    assert!(!freed.is_occupied);
}

#[tokio::test]
async fn qr_payload_is_stored_on_the_table() {
    let db = mem_db().await;
    let repo = DiningTableRepository::new(db);

    let created = repo.create(table("12")).await.unwrap();
    let url = format!("http://localhost:3000/table/{}", created.key());
    let updated = repo
        .set_qr_payload(&created.key(), url.clone())
        .await
        .unwrap();
    assert_eq!(updated.qr_payload, url);
}
