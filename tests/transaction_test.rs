mod common;

use inventory_api::{
    errors::{ErrorKind, ServiceError},
    repositories::ListUnitsParams,
    store::Store,
};

use common::{random_category, random_good, random_unit, TestApp};

const ALL: ListUnitsParams = ListUnitsParams {
    limit: 100,
    offset: 0,
};

#[tokio::test]
async fn exec_tx_commits_every_step() {
    let app = TestApp::new().await;

    let good = app
        .store
        .exec_tx(|q| {
            Box::pin(async move {
                let category = q.categories.create(random_category()).await?;
                let unit = q.units.create(random_unit()).await?;
                q.goods.create(random_good(category.id, unit.id)).await
            })
        })
        .await
        .expect("transaction commits");

    let stored = app.store.get_good(good.id).await.expect("good committed");
    assert_eq!(stored, good);
    assert!(app.store.get_category(good.category).await.is_ok());
    assert!(app.store.get_unit(good.unit).await.is_ok());
}

#[tokio::test]
async fn exec_tx_rolls_back_when_a_later_step_fails() {
    let app = TestApp::new().await;

    let result = app
        .store
        .exec_tx(|q| {
            Box::pin(async move {
                q.units.create(random_unit()).await?;
                // unknown category: the foreign key rejects the insert
                q.goods.create(random_good(777, 1)).await
            })
        })
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    let units = app.store.list_units(ALL).await.expect("list units");
    assert!(units.is_empty(), "unit insert was not rolled back");
}

#[tokio::test]
async fn exec_tx_hands_back_the_closure_error_unchanged() {
    let app = TestApp::new().await;

    let result: Result<(), ServiceError> = app
        .store
        .exec_tx(|q| {
            Box::pin(async move {
                q.units.create(random_unit()).await?;
                q.units.delete(9_999).await
            })
        })
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    assert!(app.store.list_units(ALL).await.unwrap().is_empty());
}
