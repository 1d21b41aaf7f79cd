use northwind_api::entities::{
    customer_customer_demo, customer_demographics, customers, employee_territories, employees,
    region, territories,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, Set};

mod common;
use common::setup_test_db;

async fn insert_customer(db: &DatabaseConnection, id: &str, name: &str) -> customers::Model {
    customers::ActiveModel {
        customer_id: Set(id.to_string()),
        company_name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert customer")
}

async fn insert_employee(db: &DatabaseConnection, first: &str, last: &str) -> employees::Model {
    employees::ActiveModel {
        employee_id: NotSet,
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert employee")
}

#[tokio::test]
async fn test_customer_demographics_many_to_many() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let alfki = insert_customer(&db, "ALFKI", "Alfreds Futterkiste").await;
    insert_customer(&db, "ANATR", "Ana Trujillo Emparedados y helados").await;

    let wholesale = customer_demographics::ActiveModel {
        customer_type_id: Set("WHOLE".to_string()),
        customer_desc: Set(Some("Wholesale buyers".to_string())),
    }
    .insert(&db)
    .await
    .unwrap();

    customer_customer_demo::ActiveModel {
        customer_id: Set("ALFKI".to_string()),
        customer_type_id: Set("WHOLE".to_string()),
    }
    .insert(&db)
    .await
    .unwrap();

    let demographics = alfki
        .find_related(customer_demographics::Entity)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(demographics.len(), 1);
    assert_eq!(demographics[0].customer_type_id.trim_end(), "WHOLE");

    let members = wholesale.find_related(customers::Entity).all(&db).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].company_name, "Alfreds Futterkiste");
}

#[tokio::test]
async fn test_territory_belongs_to_region() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    region::ActiveModel {
        region_id: Set(1),
        region_description: Set("Eastern".to_string()),
    }
    .insert(&db)
    .await
    .unwrap();

    let territory = territories::ActiveModel {
        territory_id: Set("01581".to_string()),
        territory_description: Set("Westboro".to_string()),
        region_id: Set(1),
    }
    .insert(&db)
    .await
    .unwrap();

    let owner = territory
        .find_related(region::Entity)
        .one(&db)
        .await
        .unwrap()
        .expect("territory should have a region");
    assert_eq!(owner.region_id, 1);
    assert_eq!(owner.region_description.trim_end(), "Eastern");

    let (_, territories) = region::Entity::find_by_id(1)
        .find_with_related(territories::Entity)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("region should exist");
    assert_eq!(territories.len(), 1);
}

#[tokio::test]
async fn test_employee_territories_many_to_many() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    region::ActiveModel {
        region_id: Set(1),
        region_description: Set("Eastern".to_string()),
    }
    .insert(&db)
    .await
    .unwrap();
    for (id, description) in [("01581", "Westboro"), ("01730", "Bedford")] {
        territories::ActiveModel {
            territory_id: Set(id.to_string()),
            territory_description: Set(description.to_string()),
            region_id: Set(1),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let nancy = insert_employee(&db, "Nancy", "Davolio").await;
    let andrew = insert_employee(&db, "Andrew", "Fuller").await;

    for territory_id in ["01581", "01730"] {
        employee_territories::ActiveModel {
            employee_id: Set(nancy.employee_id),
            territory_id: Set(territory_id.to_string()),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let mut covered: Vec<String> = nancy
        .find_related(territories::Entity)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.territory_id)
        .collect();
    covered.sort();
    assert_eq!(covered, vec!["01581", "01730"]);

    let none = andrew.find_related(territories::Entity).all(&db).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_deleting_customer_cascades_to_demographic_links() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    sea_orm::ConnectionTrait::execute_unprepared(&db, "PRAGMA foreign_keys = ON")
        .await
        .unwrap();

    insert_customer(&db, "ALFKI", "Alfreds Futterkiste").await;
    customer_demographics::ActiveModel {
        customer_type_id: Set("WHOLE".to_string()),
        customer_desc: Set(None),
    }
    .insert(&db)
    .await
    .unwrap();
    customer_customer_demo::ActiveModel {
        customer_id: Set("ALFKI".to_string()),
        customer_type_id: Set("WHOLE".to_string()),
    }
    .insert(&db)
    .await
    .unwrap();

    customers::Entity::delete_by_id("ALFKI".to_string())
        .exec(&db)
        .await
        .unwrap();

    let links = customer_customer_demo::Entity::find().all(&db).await.unwrap();
    assert!(links.is_empty());
}
