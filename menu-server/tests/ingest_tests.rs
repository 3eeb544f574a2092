use menu_server::db::repository::{category, link, option, option_group, product};
use menu_server::db::{DbService, load_menu};
use menu_server::document;
use menu_server::IngestError;
use rust_decimal::Decimal;
use shared::models::{
    CategorySearch, LinkKind, OptionGroupSearch, OptionSearch, ProductSearch,
};
use sqlx::SqlitePool;

const EXAMPLE: &str = r#"
<menuexport brandid="B1">
  <menu>
    <categories>
      <category id="C1" name="Mains">
        <products>
          <product id="P1" name="Burger">
            <pricing><price>9.50</price></pricing>
            <modifiers>
              <optiongroup chainid="OG1" description="Extras" mandatory="false">
                <options>
                  <option chainid="O1" name="Bacon">
                    <pricing><price>1.99</price></pricing>
                  </option>
                </options>
              </optiongroup>
            </modifiers>
          </product>
        </products>
      </category>
    </categories>
  </menu>
</menuexport>"#;

async fn pool() -> SqlitePool {
    DbService::in_memory().await.unwrap().pool
}

async fn load(pool: &SqlitePool, xml: &str) -> Result<menu_server::IngestReport, IngestError> {
    let doc = document::parse(xml).unwrap();
    load_menu(pool, &doc).await
}

/// Every row and link in the store, in a stable order
async fn snapshot(pool: &SqlitePool) -> String {
    let mut out = String::new();
    for c in category::find_all(pool, "B1", &CategorySearch::default())
        .await
        .unwrap()
    {
        out.push_str(&format!("{c:?}\n"));
    }
    for p in product::find_all(pool, "B1", &ProductSearch::default())
        .await
        .unwrap()
    {
        out.push_str(&format!("{p:?}\n"));
    }
    for g in option_group::find_all(pool, "B1", &OptionGroupSearch::default())
        .await
        .unwrap()
    {
        out.push_str(&format!("{g:?}\n"));
    }
    for o in option::find_all(pool, "B1", &OptionSearch::default())
        .await
        .unwrap()
    {
        out.push_str(&format!("{o:?}\n"));
    }
    for kind in LinkKind::ALL {
        out.push_str(&format!("{kind}: {:?}\n", link::find_all(pool, kind).await.unwrap()));
    }
    out
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[tokio::test]
async fn example_document_produces_expected_rows() {
    let pool = pool().await;
    let report = load(&pool, EXAMPLE).await.unwrap();

    assert_eq!(report.brand_id, "B1");
    assert_eq!(report.categories, 1);
    assert_eq!(report.products, 1);
    assert_eq!(report.option_groups, 1);
    assert_eq!(report.options, 1);

    assert_eq!(count(&pool, "category").await, 1);
    let p = product::find_by_id(&pool, "B1", "P1").await.unwrap().unwrap();
    assert_eq!(p.product.category_id, "C1");
    assert_eq!(p.option_groups[0].id, "OG1");

    let g = option_group::find_by_id(&pool, "B1", "OG1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(g.option_group.mandatory, Some(false));
    assert_eq!(g.options[0].id, "O1");

    let o = option::find_by_id(&pool, "B1", "O1").await.unwrap().unwrap();
    assert_eq!(o.option.price, Decimal::new(199, 2));

    assert_eq!(
        link::find_all(&pool, LinkKind::ProductOptionGroup).await.unwrap(),
        vec![("P1".to_string(), "OG1".to_string())]
    );
    assert_eq!(
        link::find_all(&pool, LinkKind::OptionGroupOption).await.unwrap(),
        vec![("OG1".to_string(), "O1".to_string())]
    );
    assert!(link::find_all(&pool, LinkKind::OptionOptionGroup)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn ingesting_twice_changes_nothing() {
    let pool = pool().await;
    load(&pool, EXAMPLE).await.unwrap();
    let first = snapshot(&pool).await;

    load(&pool, EXAMPLE).await.unwrap();
    assert_eq!(snapshot(&pool).await, first);
    assert_eq!(count(&pool, "product_option_group_link").await, 1);
    assert_eq!(count(&pool, "option_group_option_link").await, 1);
}

#[tokio::test]
async fn second_version_overwrites_every_column() {
    let pool = pool().await;
    load(&pool, EXAMPLE).await.unwrap();

    let v2 = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C2" name="Specials" sortorder="1"/>
      <category id="C1" name="Mains v2" extref="M">
        <products>
          <product id="P1" name="Burger v2" cost="2.50" isdisabled="1">
            <pricing><price>10.00</price></pricing>
            <modifiers>
              <optiongroup chainid="OG1" description="Extras v2" mandatory="true">
                <options>
                  <option chainid="O1" name="Bacon v2" isdefault="true">
                    <pricing><price>2.49</price></pricing>
                  </option>
                </options>
              </optiongroup>
            </modifiers>
          </product>
        </products>
      </category>
    </categories></menu></menuexport>"#;
    load(&pool, v2).await.unwrap();

    let c = category::find_by_id(&pool, "B1", "C1").await.unwrap().unwrap();
    assert_eq!(c.category.name.as_deref(), Some("Mains v2"));
    assert_eq!(c.category.external_ref.as_deref(), Some("M"));

    let p = product::find_by_id(&pool, "B1", "P1").await.unwrap().unwrap();
    assert_eq!(p.product.name.as_deref(), Some("Burger v2"));
    assert_eq!(p.product.cost, Some(Decimal::new(250, 2)));
    assert_eq!(p.product.is_disabled, Some(true));
    assert_eq!(p.product.price, Decimal::new(1000, 2));

    let g = option_group::find_by_id(&pool, "B1", "OG1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(g.option_group.description.as_deref(), Some("Extras v2"));
    assert_eq!(g.option_group.mandatory, Some(true));

    let o = option::find_by_id(&pool, "B1", "O1").await.unwrap().unwrap();
    assert_eq!(o.option.name.as_deref(), Some("Bacon v2"));
    assert_eq!(o.option.is_default, Some(true));
    assert_eq!(o.option.price, Decimal::new(249, 2));

    assert_eq!(count(&pool, "category").await, 2);
    assert_eq!(count(&pool, "product").await, 1);
}

#[tokio::test]
async fn nested_groups_are_linked_to_their_option() {
    let pool = pool().await;
    let xml = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing>
          <modifiers>
            <optiongroup chainid="SIZE"><options>
              <option chainid="LARGE"><pricing><price>1</price></pricing>
                <modifiers>
                  <optiongroup chainid="DRINK"><options>
                    <option chainid="COLA"><pricing><price>0</price></pricing></option>
                    <option chainid="WATER"><pricing><price>0</price></pricing></option>
                  </options></optiongroup>
                </modifiers>
              </option>
              <option chainid="SMALL"><pricing><price>0</price></pricing></option>
            </options></optiongroup>
          </modifiers>
        </product>
      </products></category>
    </categories></menu></menuexport>"#;
    let report = load(&pool, xml).await.unwrap();
    assert_eq!(report.option_groups, 2);
    assert_eq!(report.options, 4);

    assert_eq!(
        link::find_all(&pool, LinkKind::OptionOptionGroup).await.unwrap(),
        vec![("LARGE".to_string(), "DRINK".to_string())]
    );
    assert_eq!(
        link::find_all(&pool, LinkKind::ProductOptionGroup).await.unwrap(),
        vec![("P1".to_string(), "SIZE".to_string())]
    );
    let members = link::find_all(&pool, LinkKind::OptionGroupOption).await.unwrap();
    assert_eq!(members.len(), 4);
    assert!(members.contains(&("DRINK".to_string(), "WATER".to_string())));
    assert!(members.contains(&("SIZE".to_string(), "SMALL".to_string())));

    let large = option::find_by_id(&pool, "B1", "LARGE").await.unwrap().unwrap();
    assert_eq!(large.option_groups[0].id, "DRINK");
}

#[tokio::test]
async fn self_loop_terminates_and_records_link() {
    let pool = pool().await;
    let xml = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing>
          <modifiers>
            <optiongroup chainid="A"><options>
              <option chainid="O1"><pricing><price>1</price></pricing>
                <modifiers><optiongroup chainid="A"/></modifiers>
              </option>
            </options></optiongroup>
          </modifiers>
        </product>
      </products></category>
    </categories></menu></menuexport>"#;
    let report = load(&pool, xml).await.unwrap();

    assert_eq!(report.option_groups, 1);
    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.cycles[0].option_group_id, "A");
    assert_eq!(count(&pool, "option_group").await, 1);
    assert_eq!(
        link::find_all(&pool, LinkKind::OptionOptionGroup).await.unwrap(),
        vec![("O1".to_string(), "A".to_string())]
    );
}

#[tokio::test]
async fn mutual_recursion_is_cut_at_the_repeat() {
    let pool = pool().await;
    let xml = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing>
          <modifiers>
            <optiongroup chainid="A"><options>
              <option chainid="OA"><pricing><price>1</price></pricing>
                <modifiers>
                  <optiongroup chainid="B"><options>
                    <option chainid="OB"><pricing><price>1</price></pricing>
                      <modifiers><optiongroup chainid="A"/></modifiers>
                    </option>
                  </options></optiongroup>
                </modifiers>
              </option>
            </options></optiongroup>
          </modifiers>
        </product>
      </products></category>
    </categories></menu></menuexport>"#;
    let report = load(&pool, xml).await.unwrap();

    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.cycles[0].via, "A > B > A");
    let nested = link::find_all(&pool, LinkKind::OptionOptionGroup).await.unwrap();
    assert_eq!(
        nested,
        vec![
            ("OA".to_string(), "B".to_string()),
            ("OB".to_string(), "A".to_string()),
        ]
    );
}

#[tokio::test]
async fn shared_group_is_linked_from_every_parent() {
    let pool = pool().await;
    let sauces = r#"<modifiers><optiongroup chainid="SAUCE"><options>
        <option chainid="KETCHUP"><pricing><price>0</price></pricing></option>
      </options></optiongroup></modifiers>"#;
    let xml = format!(
        r#"<menuexport brandid="B1"><menu><categories>
          <category id="C1"><products>
            <product id="P1"><pricing><price>8</price></pricing>{sauces}</product>
            <product id="P2"><pricing><price>3</price></pricing>{sauces}</product>
          </products></category>
        </categories></menu></menuexport>"#
    );
    let report = load(&pool, &xml).await.unwrap();

    assert_eq!(report.skipped_revisits, 1);
    assert!(report.cycles.is_empty());
    assert_eq!(
        link::find_all(&pool, LinkKind::ProductOptionGroup).await.unwrap(),
        vec![
            ("P1".to_string(), "SAUCE".to_string()),
            ("P2".to_string(), "SAUCE".to_string()),
        ]
    );
    assert_eq!(count(&pool, "option_group_option_link").await, 1);
}

#[tokio::test]
async fn revisited_group_keeps_options_from_each_position() {
    let pool = pool().await;
    let xml = r#"<menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing>
          <modifiers><optiongroup chainid="SAUCE"><options>
            <option chainid="KETCHUP"><pricing><price>0</price></pricing></option>
          </options></optiongroup></modifiers>
        </product>
        <product id="P2"><pricing><price>3</price></pricing>
          <modifiers><optiongroup chainid="SAUCE"><options>
            <option chainid="MUSTARD"><pricing><price>0.25</price></pricing></option>
          </options></optiongroup></modifiers>
        </product>
      </products></category>
    </categories></menu></menuexport>"#;
    let report = load(&pool, xml).await.unwrap();

    assert_eq!(report.skipped_revisits, 1);
    assert_eq!(
        link::find_all(&pool, LinkKind::OptionGroupOption).await.unwrap(),
        vec![
            ("SAUCE".to_string(), "KETCHUP".to_string()),
            ("SAUCE".to_string(), "MUSTARD".to_string()),
        ]
    );
    let mustard = option::find_by_id(&pool, "B1", "MUSTARD")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mustard.option.price, Decimal::new(25, 2));
}

#[tokio::test]
async fn missing_price_aborts_without_writes() {
    let pool = pool().await;
    let xml = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing></product>
        <product id="P2" name="No price"/>
      </products></category>
    </categories></menu></menuexport>"#;
    let err = load(&pool, xml).await.unwrap_err();

    match err {
        IngestError::MalformedDocument(e) => assert!(e.to_string().contains("product[P2]")),
        other => panic!("unexpected error: {other}"),
    }
    // The whole run is rolled back, earlier rows included
    assert_eq!(count(&pool, "category").await, 0);
    assert_eq!(count(&pool, "product").await, 0);
}

#[tokio::test]
async fn persistence_failure_rolls_back_the_run() {
    let pool = pool().await;
    sqlx::query("DROP TABLE option_group_option_link")
        .execute(&pool)
        .await
        .unwrap();

    let err = load(&pool, EXAMPLE).await.unwrap_err();
    assert!(matches!(err, IngestError::Persistence(_)));
    assert_eq!(count(&pool, "category").await, 0);
    assert_eq!(count(&pool, "option").await, 0);
}

#[tokio::test]
async fn absent_and_empty_modifiers_are_equivalent() {
    let pool = pool().await;
    let xml = r#"
    <menuexport brandid="B1"><menu><categories>
      <category id="C1"><products>
        <product id="P1"><pricing><price>8</price></pricing>
          <modifiers>
            <optiongroup chainid="OG1"><options>
              <option chainid="O1"><pricing><price>1</price></pricing></option>
              <option chainid="O2"><pricing><price>1</price></pricing><modifiers/></option>
              <option chainid="O3"><pricing><price>1</price></pricing><modifiers></modifiers></option>
            </options></optiongroup>
          </modifiers>
        </product>
        <product id="P2"><pricing><price>8</price></pricing><modifiers/></product>
      </products></category>
    </categories></menu></menuexport>"#;
    let report = load(&pool, xml).await.unwrap();

    assert_eq!(report.options, 3);
    assert_eq!(report.option_groups, 1);
    assert_eq!(count(&pool, "option_option_group_link").await, 0);
}

#[tokio::test]
async fn malformed_xml_is_rejected_before_ingestion() {
    assert!(document::parse("<menuexport brandid=\"B1\"><menu>").is_err());
}
