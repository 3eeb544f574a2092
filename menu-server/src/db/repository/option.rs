//! Option Repository

use shared::models::{AttachedOptionGroup, MenuOption, OptionDetail, OptionSearch};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::{RepoResult, contains_pattern, decimal, filter, opt_decimal};

const COLUMNS: &str = "id, brand_id, name, is_default, cost, adjusts_parent_calories, \
     adjusts_parent_price, sort_order, price";

#[derive(sqlx::FromRow)]
struct OptionRow {
    id: String,
    brand_id: String,
    name: Option<String>,
    is_default: Option<bool>,
    cost: Option<String>,
    adjusts_parent_calories: Option<bool>,
    adjusts_parent_price: Option<bool>,
    sort_order: Option<i32>,
    price: String,
}

impl TryFrom<OptionRow> for MenuOption {
    type Error = super::RepoError;

    fn try_from(row: OptionRow) -> RepoResult<Self> {
        Ok(Self {
            cost: opt_decimal("option.cost", row.cost)?,
            price: decimal("option.price", &row.price)?,
            id: row.id,
            brand_id: row.brand_id,
            name: row.name,
            is_default: row.is_default,
            adjusts_parent_calories: row.adjusts_parent_calories,
            adjusts_parent_price: row.adjusts_parent_price,
            sort_order: row.sort_order,
        })
    }
}

pub async fn upsert(conn: &mut SqliteConnection, option: &MenuOption) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO option
            (id, brand_id, name, is_default, cost, adjusts_parent_calories,
             adjusts_parent_price, sort_order, price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT (id)
            DO UPDATE SET brand_id = excluded.brand_id, name = excluded.name,
                          is_default = excluded.is_default, cost = excluded.cost,
                          adjusts_parent_calories = excluded.adjusts_parent_calories,
                          adjusts_parent_price = excluded.adjusts_parent_price,
                          sort_order = excluded.sort_order, price = excluded.price",
    )
    .bind(&option.id)
    .bind(&option.brand_id)
    .bind(&option.name)
    .bind(option.is_default)
    .bind(option.cost.map(|c| c.to_string()))
    .bind(option.adjusts_parent_calories)
    .bind(option.adjusts_parent_price)
    .bind(option.sort_order)
    .bind(option.price.to_string())
    .execute(conn)
    .await?;
    Ok(())
}

/// `option_group_id` restricts to members of that group
pub async fn find_all(
    pool: &SqlitePool,
    brand_id: &str,
    search: &OptionSearch,
) -> RepoResult<Vec<MenuOption>> {
    let mut query =
        QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM option WHERE brand_id = "));
    query.push_bind(brand_id.to_string());
    if let Some(name) = filter(&search.name) {
        query
            .push(" AND name LIKE ")
            .push_bind(contains_pattern(&name))
            .push(" ESCAPE '\\'");
    }
    if let Some(is_default) = search.is_default {
        query.push(" AND is_default = ").push_bind(is_default);
    }
    if let Some(adjusts) = search.adjusts_parent_price {
        query.push(" AND adjusts_parent_price = ").push_bind(adjusts);
    }
    if let Some(group_id) = filter(&search.option_group_id) {
        query
            .push(" AND id IN (SELECT option_id FROM option_group_option_link WHERE option_group_id = ")
            .push_bind(group_id)
            .push(")");
    }
    query.push(" ORDER BY sort_order, id");

    let rows: Vec<OptionRow> = query.build_query_as().fetch_all(pool).await?;
    rows.into_iter().map(MenuOption::try_from).collect()
}

/// Option with the option groups nested under it
pub async fn find_by_id(
    pool: &SqlitePool,
    brand_id: &str,
    id: &str,
) -> RepoResult<Option<OptionDetail>> {
    let row = sqlx::query_as::<_, OptionRow>(&format!(
        "SELECT {COLUMNS} FROM option WHERE brand_id = ?1 AND id = ?2"
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
            FROM option_option_group_link l
            JOIN option_group g ON g.id = l.option_group_id
            WHERE l.option_id = ?1
            ORDER BY g.sort_order, g.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(id, description)| AttachedOptionGroup { id, description })
    .collect();

    Ok(Some(OptionDetail {
        option: row.try_into()?,
        option_groups,
    }))
}
