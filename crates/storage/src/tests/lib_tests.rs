use super::*;

fn lamp_draft() -> ProductDraft {
    ProductDraft {
        name: "Desk lamp".to_string(),
        description: "Adjustable arm, warm white".to_string(),
        price: 34.5,
        quantity: 12,
    }
}

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn creates_and_lists_products_in_id_order() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let lamp = storage.create_product(&lamp_draft()).await.expect("lamp");
    let chair = storage
        .create_product(&ProductDraft {
            name: "Office chair".to_string(),
            description: "Mesh back".to_string(),
            price: 129.0,
            quantity: 4,
        })
        .await
        .expect("chair");
    assert!(chair.id.0 > lamp.id.0);

    let products = storage.list_products().await.expect("list");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0], lamp);
    assert_eq!(products[1].name, "Office chair");
}

#[tokio::test]
async fn get_product_returns_none_for_missing_id() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let found = storage.get_product(ProductId(999)).await.expect("get");
    assert!(found.is_none());
}

#[tokio::test]
async fn update_rewrites_every_editable_field() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let lamp = storage.create_product(&lamp_draft()).await.expect("lamp");

    let updated = storage
        .update_product(
            lamp.id,
            &ProductDraft {
                name: "Desk lamp v2".to_string(),
                description: "Now dimmable".to_string(),
                price: 39.0,
                quantity: 8,
            },
        )
        .await
        .expect("update")
        .expect("row exists");

    assert_eq!(updated.id, lamp.id);
    assert_eq!(updated.name, "Desk lamp v2");
    assert_eq!(updated.price, 39.0);
    assert_eq!(updated.quantity, 8);

    let reread = storage
        .get_product(lamp.id)
        .await
        .expect("get")
        .expect("row exists");
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn update_of_missing_id_returns_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let updated = storage
        .update_product(ProductId(42), &lamp_draft())
        .await
        .expect("update");
    assert!(updated.is_none());
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let lamp = storage.create_product(&lamp_draft()).await.expect("lamp");
    let keep = storage.create_product(&lamp_draft()).await.expect("second");

    assert!(storage.delete_product(lamp.id).await.expect("delete"));
    let products = storage.list_products().await.expect("list");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, keep.id);
}

#[tokio::test]
async fn delete_of_missing_id_reports_false() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert!(!storage.delete_product(ProductId(13)).await.expect("delete"));
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = std::env::temp_dir().join(format!("product_storage_test_{suffix}"));
    let db_path = temp_root.join("nested").join("products.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );

    std::fs::remove_dir_all(temp_root).expect("cleanup");
}
