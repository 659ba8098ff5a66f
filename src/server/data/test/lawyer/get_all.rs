use super::*;

/// Tests listing lawyer profiles ordered by name.
///
/// Expected: Ok with profiles in alphabetical name order
#[tokio::test]
async fn lists_lawyers_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    LawyerFactory::new(db).name("Bob").build().await?;
    LawyerFactory::new(db).name("Alice").build().await?;

    let lawyers = LawyerRepository::new(db).get_all().await?;

    let names: Vec<_> = lawyers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    Ok(())
}
