//! Node → row mapping for each entity kind

use roxmltree::{Document, Node};
use shared::models::{Category, MenuOption, OptionGroup, Product};

use super::DocumentResult;
use super::accessor::{
    children, decimal_attr, flag_attr, int_attr, price, required_attr, required_child, section,
    text_attr,
};

/// Brand every row of this document is ingested under.
pub fn brand_id(doc: &Document<'_>) -> DocumentResult<String> {
    required_attr(doc.root_element(), "brandid")
}

/// `menu/categories/category`, in document order. Both wrappers are required.
pub fn categories<'a, 'input>(doc: &'a Document<'input>) -> DocumentResult<Vec<Node<'a, 'input>>> {
    let menu = required_child(doc.root_element(), "menu")?;
    let categories = required_child(menu, "categories")?;
    Ok(children(categories, "category"))
}

pub fn products<'a, 'input>(category: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    section(category, "products", "product")
}

/// Option groups under a product's or an option's `modifiers` element.
pub fn modifier_groups<'a, 'input>(node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    section(node, "modifiers", "optiongroup")
}

pub fn options<'a, 'input>(option_group: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    section(option_group, "options", "option")
}

pub fn read_category(node: Node<'_, '_>, brand_id: &str) -> DocumentResult<Category> {
    Ok(Category {
        id: required_attr(node, "id")?,
        brand_id: brand_id.to_string(),
        name: text_attr(node, "name"),
        external_ref: text_attr(node, "extref"),
        sort_order: int_attr(node, "sortorder")?,
    })
}

/// Reads the whole product, price included, before anything is written.
pub fn read_product(
    node: Node<'_, '_>,
    brand_id: &str,
    category_id: &str,
) -> DocumentResult<Product> {
    Ok(Product {
        id: required_attr(node, "id")?,
        brand_id: brand_id.to_string(),
        category_id: category_id.to_string(),
        chain_product_id: text_attr(node, "chainproductid"),
        name: text_attr(node, "name"),
        description: text_attr(node, "description"),
        cost: decimal_attr(node, "cost")?,
        base_calories: int_attr(node, "basecalories")?,
        max_calories: int_attr(node, "maxcalories")?,
        external_ref: text_attr(node, "extref"),
        is_disabled: flag_attr(node, "isdisabled")?,
        minimum_quantity: int_attr(node, "minimumquantity")?,
        quantity_increment: int_attr(node, "quantityincrement")?,
        short_description: text_attr(node, "shortdescription"),
        sort_order: int_attr(node, "sortorder")?,
        price: price(node)?,
    })
}

pub fn read_option_group(node: Node<'_, '_>, brand_id: &str) -> DocumentResult<OptionGroup> {
    Ok(OptionGroup {
        id: required_attr(node, "chainid")?,
        brand_id: brand_id.to_string(),
        name: text_attr(node, "name"),
        description: text_attr(node, "description"),
        mandatory: flag_attr(node, "mandatory")?,
        supports_choice_quantities: flag_attr(node, "supportschoicequantities")?,
        choice_quantity_increment: int_attr(node, "choicequantityincrement")?,
        explanation_text: text_attr(node, "explanationtext"),
        sort_order: int_attr(node, "sortorder")?,
    })
}

pub fn read_option(node: Node<'_, '_>, brand_id: &str) -> DocumentResult<MenuOption> {
    Ok(MenuOption {
        id: required_attr(node, "chainid")?,
        brand_id: brand_id.to_string(),
        name: text_attr(node, "name"),
        is_default: flag_attr(node, "isdefault")?,
        cost: decimal_attr(node, "cost")?,
        adjusts_parent_calories: flag_attr(node, "adjustsparentcalories")?,
        adjusts_parent_price: flag_attr(node, "adjustsparentprice")?,
        sort_order: int_attr(node, "sortorder")?,
        price: price(node)?,
    })
}
