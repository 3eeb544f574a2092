//! Category Repository

use std::collections::HashMap;

use shared::models::{Category, CategoryProduct, CategorySearch, CategoryWithProducts};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::{RepoResult, contains_pattern, filter};

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: String,
    brand_id: String,
    name: Option<String>,
    external_ref: Option<String>,
    sort_order: Option<i32>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            brand_id: row.brand_id,
            name: row.name,
            external_ref: row.external_ref,
            sort_order: row.sort_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRef {
    id: String,
    name: Option<String>,
    category_id: String,
}

/// Insert or overwrite every column of the category row
pub async fn upsert(conn: &mut SqliteConnection, category: &Category) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO category (id, brand_id, name, external_ref, sort_order)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id)
            DO UPDATE SET brand_id = excluded.brand_id, name = excluded.name,
                          external_ref = excluded.external_ref, sort_order = excluded.sort_order",
    )
    .bind(&category.id)
    .bind(&category.brand_id)
    .bind(&category.name)
    .bind(&category.external_ref)
    .bind(category.sort_order)
    .execute(conn)
    .await?;
    Ok(())
}

/// Brand categories with their product references, ordered by sort order
pub async fn find_all(
    pool: &SqlitePool,
    brand_id: &str,
    search: &CategorySearch,
) -> RepoResult<Vec<CategoryWithProducts>> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, brand_id, name, external_ref, sort_order FROM category WHERE brand_id = ",
    );
    query.push_bind(brand_id.to_string());
    if let Some(name) = filter(&search.name) {
        query
            .push(" AND name LIKE ")
            .push_bind(contains_pattern(&name))
            .push(" ESCAPE '\\'");
    }
    if let Some(extref) = filter(&search.extref) {
        query.push(" AND external_ref = ").push_bind(extref);
    }
    query.push(" ORDER BY sort_order, id");

    let rows: Vec<CategoryRow> = query.build_query_as().fetch_all(pool).await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let refs = sqlx::query_as::<_, ProductRef>(
        "SELECT id, name, category_id FROM product WHERE brand_id = ?1 ORDER BY sort_order, id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;

    let mut by_category: HashMap<String, Vec<CategoryProduct>> = HashMap::new();
    for r in refs {
        by_category
            .entry(r.category_id)
            .or_default()
            .push(CategoryProduct { id: r.id, name: r.name });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let products = by_category.remove(&row.id).unwrap_or_default();
            CategoryWithProducts {
                category: row.into(),
                products,
            }
        })
        .collect())
}

pub async fn find_by_id(
    pool: &SqlitePool,
    brand_id: &str,
    id: &str,
) -> RepoResult<Option<CategoryWithProducts>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, brand_id, name, external_ref, sort_order
            FROM category WHERE brand_id = ?1 AND id = ?2",
    )
    .bind(brand_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let products = sqlx::query_as::<_, (String, Option<String>)>(
        "SELECT id, name FROM product WHERE category_id = ?1 ORDER BY sort_order, id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(id, name)| CategoryProduct { id, name })
    .collect();

    Ok(Some(CategoryWithProducts {
        category: row.into(),
        products,
    }))
}
