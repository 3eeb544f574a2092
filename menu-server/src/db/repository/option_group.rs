//! Option Group Repository

use shared::models::{GroupMemberOption, OptionGroup, OptionGroupDetail, OptionGroupSearch};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use super::{RepoResult, contains_pattern, filter};

const COLUMNS: &str = "id, brand_id, name, description, mandatory, supports_choice_quantities, \
     choice_quantity_increment, explanation_text, sort_order";

#[derive(sqlx::FromRow)]
struct OptionGroupRow {
    id: String,
    brand_id: String,
    name: Option<String>,
    description: Option<String>,
    mandatory: Option<bool>,
    supports_choice_quantities: Option<bool>,
    choice_quantity_increment: Option<i32>,
    explanation_text: Option<String>,
    sort_order: Option<i32>,
}

impl From<OptionGroupRow> for OptionGroup {
    fn from(row: OptionGroupRow) -> Self {
        Self {
            id: row.id,
            brand_id: row.brand_id,
            name: row.name,
            description: row.description,
            mandatory: row.mandatory,
            supports_choice_quantities: row.supports_choice_quantities,
            choice_quantity_increment: row.choice_quantity_increment,
            explanation_text: row.explanation_text,
            sort_order: row.sort_order,
        }
    }
}

pub async fn upsert(conn: &mut SqliteConnection, group: &OptionGroup) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO option_group
            (id, brand_id, name, description, mandatory, supports_choice_quantities,
             choice_quantity_increment, explanation_text, sort_order)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT (id)
            DO UPDATE SET brand_id = excluded.brand_id, name = excluded.name,
                          description = excluded.description, mandatory = excluded.mandatory,
                          supports_choice_quantities = excluded.supports_choice_quantities,
                          choice_quantity_increment = excluded.choice_quantity_increment,
                          explanation_text = excluded.explanation_text,
                          sort_order = excluded.sort_order",
    )
    .bind(&group.id)
    .bind(&group.brand_id)
    .bind(&group.name)
    .bind(&group.description)
    .bind(group.mandatory)
    .bind(group.supports_choice_quantities)
    .bind(group.choice_quantity_increment)
    .bind(&group.explanation_text)
    .bind(group.sort_order)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn find_all(
    pool: &SqlitePool,
    brand_id: &str,
    search: &OptionGroupSearch,
) -> RepoResult<Vec<OptionGroup>> {
    let mut query =
        QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM option_group WHERE brand_id = "));
    query.push_bind(brand_id.to_string());
    if let Some(description) = filter(&search.description) {
        query
            .push(" AND description LIKE ")
            .push_bind(contains_pattern(&description))
            .push(" ESCAPE '\\'");
    }
    if let Some(text) = filter(&search.explanation_text) {
        query
            .push(" AND explanation_text LIKE ")
            .push_bind(contains_pattern(&text))
            .push(" ESCAPE '\\'");
    }
    if let Some(mandatory) = search.mandatory {
        query.push(" AND mandatory = ").push_bind(mandatory);
    }
    if let Some(supports) = search.supports_choice_quantities {
        query
            .push(" AND supports_choice_quantities = ")
            .push_bind(supports);
    }
    query.push(" ORDER BY sort_order, id");

    let rows: Vec<OptionGroupRow> = query.build_query_as().fetch_all(pool).await?;
    Ok(rows.into_iter().map(OptionGroup::from).collect())
}

/// Option group with its member options
pub async fn find_by_id(
    pool: &SqlitePool,
    brand_id: &str,
    id: &str,
) -> RepoResult<Option<OptionGroupDetail>> {
    let row = sqlx::query_as::<_, OptionGroupRow>(&format!(
        "SELECT {COLUMNS} FROM option_group WHERE brand_id = ?1 AND id = ?2"
    ))
    .bind(brand_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let options = sqlx::query_as::<_, (String, Option<String>)>(
        "SELECT o.id, o.name
            FROM option_group_option_link l
            JOIN option o ON o.id = l.option_id
            WHERE l.option_group_id = ?1
            ORDER BY o.sort_order, o.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(id, name)| GroupMemberOption { id, name })
    .collect();

    Ok(Some(OptionGroupDetail {
        option_group: row.into(),
        options,
    }))
}
