//! Order lifecycle against an in-memory database

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use shared::cart::CartItem;
use shared::order::{OrderStatus, OrderType, validate_transition};
use tableside_server::db::models::OrderCreate;
use tableside_server::db::repository::OrderRepository;
use tableside_server::orders::number;

async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("tableside").use_db("test").await.unwrap();
    db
}

fn checkout(table: &str) -> OrderCreate {
    OrderCreate {
        order_type: OrderType::DineIn,
        table_number: table.into(),
        items: vec![
            CartItem::basic("m1", "Laksa", "9.80", 1),
            CartItem::basic("m2", "Teh Tarik", "1.80", 2),
        ],
        payment_method: "Cash".into(),
        note: String::new(),
    }
}

#[tokio::test]
async fn placed_orders_are_found_by_id_and_number() {
    let db = mem_db().await;
    let repo = OrderRepository::new(db);

    let number = number::generate_unique(&repo).await.unwrap();
    assert_eq!(number.len(), 6);

    let order = repo
        .create(checkout("5").into_order(number.clone(), 13.40))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Received);

    let by_id = repo.find_by_id(&order.key()).await.unwrap();
    assert_eq!(by_id.order_number, number);

    let by_number = repo.find_by_order_number(&number).await.unwrap().unwrap();
    assert_eq!(by_number.key(), order.key());

    assert!(repo.order_number_exists(&number).await.unwrap());
    assert!(!repo.order_number_exists("000000").await.unwrap());
}

#[tokio::test]
async fn status_walks_forward_and_served_waits_for_the_kitchen() {
    let db = mem_db().await;
    let repo = OrderRepository::new(db);

    let order = repo
        .create(checkout("2").into_order("222222".into(), 13.40))
        .await
        .unwrap();
    let id = order.key();

    let order = repo
        .update_status(&id, OrderStatus::Preparing)
        .await
        .unwrap();
    let order = repo
        .update_status(&id, OrderStatus::ReadyToServe)
        .await
        .unwrap();

    // Serving is blocked until every line is completed
    assert!(validate_transition(order.status, OrderStatus::Served, &order.items).is_err());

    let mut items = order.items.clone();
    for line in items.iter_mut() {
        line.completed = true;
    }
    let order = repo.update_items(&id, items).await.unwrap();
    assert!(validate_transition(order.status, OrderStatus::Served, &order.items).is_ok());

    let order = repo.update_status(&id, OrderStatus::Served).await.unwrap();
    assert!(order.status.is_terminal());
}

#[tokio::test]
async fn rush_flag_and_rating_round_trip() {
    let db = mem_db().await;
    let repo = OrderRepository::new(db);

    let order = repo
        .create(checkout("7").into_order("777777".into(), 13.40))
        .await
        .unwrap();
    let id = order.key();

    let order = repo.set_rush(&id, true).await.unwrap();
    assert!(order.is_rush);

    let order = repo
        .set_rating_once(&id, 5, "Great laksa".into())
        .await
        .unwrap();
    assert_eq!(order.rating, Some(5));

    // A second rating is refused
    assert!(repo.set_rating_once(&id, 1, String::new()).await.is_err());
    let order = repo.find_by_id(&id).await.unwrap();
    assert_eq!(order.rating, Some(5));
    assert_eq!(order.feedback, "Great laksa");
}

#[tokio::test]
async fn newest_orders_list_first() {
    let db = mem_db().await;
    let repo = OrderRepository::new(db);

    repo.create(checkout("1").into_order("111111".into(), 10.0))
        .await
        .unwrap();
    repo.create(checkout("2").into_order("333333".into(), 10.0))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].placed_at >= all[1].placed_at);
}
