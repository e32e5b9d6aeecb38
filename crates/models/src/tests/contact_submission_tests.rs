use anyhow::Result;
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::contact_submission::{self, Category};

#[tokio::test]
async fn test_create_fills_id_and_timestamp() -> Result<()> {
    let Some(db) = super::test_db().await else { return Ok(()) };

    let email = format!("jo_{}@example.com", Uuid::new_v4().simple());
    let created = contact_submission::create(&db, "Jo", "Do", &email, None, Category::Feedback, "1234567890").await?;

    let found = contact_submission::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("row exists");
    assert_eq!(found.email, email);
    assert_eq!(found.last_name, "Do");
    assert_eq!(found.department, None);
    assert_eq!(found.category, Category::Feedback);
    assert_eq!(found.created_at, created.created_at);
    Ok(())
}

#[tokio::test]
async fn test_list_is_newest_first_and_stable() -> Result<()> {
    let Some(db) = super::test_db().await else { return Ok(()) };

    let tag = Uuid::new_v4().simple().to_string();
    let first = contact_submission::create(&db, "Ann", "Lee", &format!("a_{tag}@example.com"), Some("Sales"), Category::Suggestion, "first message").await?;
    let second = contact_submission::create(&db, "Bob", "Ray", &format!("b_{tag}@example.com"), None, Category::Problem, "second message").await?;

    let listed = contact_submission::list_newest_first(&db).await?;
    let pos_first = listed.iter().position(|m| m.id == first.id).expect("first listed");
    let pos_second = listed.iter().position(|m| m.id == second.id).expect("second listed");
    assert!(pos_second < pos_first || listed[pos_second].created_at == listed[pos_first].created_at);

    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    let again = contact_submission::list_newest_first(&db).await?;
    let order = |list: &[contact_submission::Model]| {
        list.iter().filter(|m| m.id == first.id || m.id == second.id).map(|m| m.id).collect::<Vec<_>>()
    };
    assert_eq!(order(&listed), order(&again));
    Ok(())
}

#[tokio::test]
async fn test_unknown_category_rejected_by_check_constraint() -> Result<()> {
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
    let Some(db) = super::test_db().await else { return Ok(()) };

    let stmt = Statement::from_string(
        DatabaseBackend::Postgres,
        "INSERT INTO contact_submissions (name, last_name, email, category, message) \
         VALUES ('Jo', 'Do', 'jo@x.com', 'urgent', '1234567890')"
            .to_string(),
    );
    assert!(db.execute(stmt).await.is_err());
    Ok(())
}
