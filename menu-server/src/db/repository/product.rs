//! Product Repository

use shared::models::{AttachedOptionGroup, Product, ProductDetail, ProductSearch};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::{RepoResult, contains_pattern, decimal, filter, opt_decimal};

const COLUMNS: &str = "id, brand_id, category_id, chain_product_id, name, description, cost, \
     base_calories, max_calories, external_ref, is_disabled, minimum_quantity, \
     quantity_increment, short_description, sort_order, price";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    brand_id: String,
    category_id: String,
    chain_product_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    cost: Option<String>,
    base_calories: Option<i32>,
    max_calories: Option<i32>,
    external_ref: Option<String>,
    is_disabled: Option<bool>,
    minimum_quantity: Option<i32>,
    quantity_increment: Option<i32>,
    short_description: Option<String>,
    sort_order: Option<i32>,
    price: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = super::RepoError;

    fn try_from(row: ProductRow) -> RepoResult<Self> {
        Ok(Self {
            cost: opt_decimal("product.cost", row.cost)?,
            price: decimal("product.price", &row.price)?,
            id: row.id,
            brand_id: row.brand_id,
            category_id: row.category_id,
            chain_product_id: row.chain_product_id,
            name: row.name,
            description: row.description,
            base_calories: row.base_calories,
            max_calories: row.max_calories,
            external_ref: row.external_ref,
            is_disabled: row.is_disabled,
            minimum_quantity: row.minimum_quantity,
            quantity_increment: row.quantity_increment,
            short_description: row.short_description,
            sort_order: row.sort_order,
        })
    }
}

/// Insert or overwrite every column, including the owning category
pub async fn upsert(conn: &mut SqliteConnection, product: &Product) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO product
            (id, brand_id, category_id, chain_product_id, name, description, cost,
             base_calories, max_calories, external_ref, is_disabled, minimum_quantity,
             quantity_increment, short_description, sort_order, price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            ON CONFLICT (id)
            DO UPDATE SET brand_id = excluded.brand_id, category_id = excluded.category_id,
                          chain_product_id = excluded.chain_product_id, name = excluded.name,
                          description = excluded.description, cost = excluded.cost,
                          base_calories = excluded.base_calories,
                          max_calories = excluded.max_calories,
                          external_ref = excluded.external_ref,
                          is_disabled = excluded.is_disabled,
                          minimum_quantity = excluded.minimum_quantity,
                          quantity_increment = excluded.quantity_increment,
                          short_description = excluded.short_description,
                          sort_order = excluded.sort_order, price = excluded.price",
    )
    .bind(&product.id)
    .bind(&product.brand_id)
    .bind(&product.category_id)
    .bind(&product.chain_product_id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.cost.map(|c| c.to_string()))
    .bind(product.base_calories)
    .bind(product.max_calories)
    .bind(&product.external_ref)
    .bind(product.is_disabled)
    .bind(product.minimum_quantity)
    .bind(product.quantity_increment)
    .bind(&product.short_description)
    .bind(product.sort_order)
    .bind(product.price.to_string())
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn find_all(
    pool: &SqlitePool,
    brand_id: &str,
    search: &ProductSearch,
) -> RepoResult<Vec<Product>> {
    let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM product WHERE brand_id = "));
    query.push_bind(brand_id.to_string());
    if let Some(name) = filter(&search.name) {
        query
            .push(" AND name LIKE ")
            .push_bind(contains_pattern(&name))
            .push(" ESCAPE '\\'");
    }
    if let Some(description) = filter(&search.description) {
        query
            .push(" AND description LIKE ")
            .push_bind(contains_pattern(&description))
            .push(" ESCAPE '\\'");
    }
    if let Some(extref) = filter(&search.extref) {
        query.push(" AND external_ref = ").push_bind(extref);
    }
    if let Some(category_id) = filter(&search.category_id) {
        query.push(" AND category_id = ").push_bind(category_id);
    }
    if let Some(is_disabled) = search.is_disabled {
        query.push(" AND is_disabled = ").push_bind(is_disabled);
    }
    query.push(" ORDER BY sort_order, id");

    let rows: Vec<ProductRow> = query.build_query_as().fetch_all(pool).await?;
    rows.into_iter().map(Product::try_from).collect()
}

/// Product with the option groups attached directly to it
pub async fn find_by_id(
    pool: &SqlitePool,
    brand_id: &str,
    id: &str,
) -> RepoResult<Option<ProductDetail>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {COLUMNS} FROM product WHERE brand_id = ?1 AND id = ?2"
    ))
    .bind(brand_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let option_groups = sqlx::query_as::<_, (String, Option<String>)>(
        "SELECT g.id, g.description
            FROM product_option_group_link l
            JOIN option_group g ON g.id = l.option_group_id
            WHERE l.product_id = ?1
            ORDER BY g.sort_order, g.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(id, description)| AttachedOptionGroup { id, description })
    .collect();

    Ok(Some(ProductDetail {
        product: row.try_into()?,
        option_groups,
    }))
}
