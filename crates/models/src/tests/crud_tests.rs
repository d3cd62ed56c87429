use anyhow::Result;

use super::setup_test_db;
use crate::{company, employee};

fn bob(company_id: Option<i32>) -> employee::Fields<'static> {
    employee::Fields { name: "Bob", age: 22, gender: "Male", salary: 10000, company_id }
}

#[tokio::test]
async fn test_company_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = company::save(&db, None, "ABC").await?;
    assert_eq!(created.name, "ABC");

    let found = company::find_by_id(&db, created.id).await?.expect("company exists");
    assert_eq!(found, created);

    let renamed = company::save(&db, Some(created.id), "XYZ").await?;
    assert_eq!(renamed.id, created.id);
    assert_eq!(company::find_by_id(&db, created.id).await?.unwrap().name, "XYZ");

    company::delete_by_id(&db, created.id).await?;
    assert!(company::find_by_id(&db, created.id).await?.is_none());
    // second delete is a no-op
    company::delete_by_id(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_company_ids_are_assigned_in_order() -> Result<()> {
    let db = setup_test_db().await?;
    let a = company::save(&db, None, "ABC").await?;
    let b = company::save(&db, None, "DEF").await?;
    let c = company::save(&db, None, "XYZ").await?;
    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    Ok(())
}

#[tokio::test]
async fn test_company_slice_matches_offset_and_limit() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["ABC", "DEF", "XYZ"] {
        company::save(&db, None, name).await?;
    }

    let names = |rows: Vec<company::Model>| rows.into_iter().map(|c| c.name).collect::<Vec<_>>();
    assert_eq!(names(company::find_slice(&db, 0, 2).await?), ["ABC", "DEF"]);
    assert_eq!(names(company::find_slice(&db, 2, 2).await?), ["XYZ"]);
    assert!(company::find_slice(&db, 4, 2).await?.is_empty());
    assert_eq!(company::find_all(&db).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_save_with_missing_id_inserts_row() -> Result<()> {
    let db = setup_test_db().await?;
    let saved = company::save(&db, Some(42), "Ghost").await?;
    assert_eq!(saved.id, 42);
    assert!(company::find_by_id(&db, 42).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_employee_crud_and_filters() -> Result<()> {
    let db = setup_test_db().await?;
    let abc = company::save(&db, None, "ABC").await?;

    let created = employee::save(&db, None, bob(Some(abc.id))).await?;
    assert_eq!(created.company_id, Some(abc.id));
    assert_eq!(created.gender, "Male");

    let susan = employee::Fields { name: "Susan", age: 23, gender: "Female", salary: 11000, company_id: None };
    employee::save(&db, None, susan).await?;

    let males = employee::find_by_gender(&db, "Male").await?;
    assert_eq!(males.len(), 1);
    assert_eq!(males[0].id, created.id);

    let in_abc = employee::find_by_company_ids(&db, &[abc.id]).await?;
    assert_eq!(in_abc, vec![created.clone()]);
    assert!(employee::find_by_company_ids(&db, &[]).await?.is_empty());

    let page = employee::find_slice(&db, 1, 5).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Susan");

    let updated = employee::save(
        &db,
        Some(created.id),
        employee::Fields { name: "Robert", age: 30, gender: "Male", salary: 20000, company_id: Some(abc.id) },
    )
    .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.salary, 20000);

    employee::delete_by_id(&db, created.id).await?;
    assert!(employee::find_by_id(&db, created.id).await?.is_none());
    assert_eq!(employee::find_all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_model_serializes_snake_case_columns() -> Result<()> {
    let db = setup_test_db().await?;
    let e = employee::save(&db, None, bob(None)).await?;
    let json = serde_json::to_value(&e)?;
    assert_eq!(json["company_id"], serde_json::Value::Null);
    assert_eq!(json["name"], "Bob");
    Ok(())
}
